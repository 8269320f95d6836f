use base::entities::order::DeliveryType;
use thiserror::Error;

pub const MIN_NAME_LENGTH: usize = 2;
pub const MIN_PHONE_LENGTH: usize = 10;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Error)]
pub enum CheckoutValidationError {
    #[error("Имя должно содержать минимум 2 символа")]
    NameTooShort,
    #[error("Введите корректный номер телефона")]
    PhoneTooShort,
    #[error("Адрес доставки обязателен")]
    DeliveryAddressRequired,
}

impl CheckoutValidationError {
    /// Form field the error should be shown next to.
    pub fn field(&self) -> &'static str {
        match self {
            CheckoutValidationError::NameTooShort => "name",
            CheckoutValidationError::PhoneTooShort => "phone",
            CheckoutValidationError::DeliveryAddressRequired => "address",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckoutForm {
    pub name: String,
    pub phone: String,
    pub delivery_type: DeliveryType,
    pub address: Option<String>,
    pub comment: Option<String>,
}

impl CheckoutForm {
    /// Returns every validation failure so the form can surface all of them
    /// next to the corresponding fields at once.
    pub fn validate(&self) -> Vec<CheckoutValidationError> {
        let mut errors = Vec::new();

        if self.name.chars().count() < MIN_NAME_LENGTH {
            errors.push(CheckoutValidationError::NameTooShort);
        }

        if self.phone.chars().count() < MIN_PHONE_LENGTH {
            errors.push(CheckoutValidationError::PhoneTooShort);
        }

        let address_is_filled = self
            .address
            .as_ref()
            .map(|address| !address.trim().is_empty())
            .unwrap_or(false);

        if self.delivery_type == DeliveryType::Delivery && !address_is_filled {
            errors.push(CheckoutValidationError::DeliveryAddressRequired);
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delivery_form() -> CheckoutForm {
        CheckoutForm {
            name: String::from("Иван Иванов"),
            phone: String::from("+7 (999) 123-45-67"),
            delivery_type: DeliveryType::Delivery,
            address: Some(String::from("Улица, дом, квартира")),
            comment: None,
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn validate__filled_delivery_form__should_pass() {
        assert!(delivery_form().validate().is_empty());
    }

    #[test]
    #[allow(non_snake_case)]
    fn validate__one_character_name__should_report_the_name_field() {
        let mut form = delivery_form();
        form.name = String::from("И");

        let errors = form.validate();

        assert_eq!(errors, vec![CheckoutValidationError::NameTooShort]);
        assert_eq!(errors[0].field(), "name");
    }

    #[test]
    #[allow(non_snake_case)]
    fn validate__short_phone__should_report_the_phone_field() {
        let mut form = delivery_form();
        form.phone = String::from("123");

        assert_eq!(form.validate(), vec![CheckoutValidationError::PhoneTooShort]);
    }

    #[test]
    #[allow(non_snake_case)]
    fn validate__delivery_without_address__should_require_the_address() {
        let mut form = delivery_form();
        form.address = None;

        assert_eq!(
            form.validate(),
            vec![CheckoutValidationError::DeliveryAddressRequired]
        );

        form.address = Some(String::from("   "));

        assert_eq!(
            form.validate(),
            vec![CheckoutValidationError::DeliveryAddressRequired]
        );
    }

    #[test]
    #[allow(non_snake_case)]
    fn validate__pickup_without_address__should_pass() {
        let mut form = delivery_form();
        form.delivery_type = DeliveryType::Pickup;
        form.address = None;

        assert!(form.validate().is_empty());
    }

    #[test]
    #[allow(non_snake_case)]
    fn validate__empty_form__should_report_every_failed_field() {
        let form = CheckoutForm {
            name: String::new(),
            phone: String::new(),
            delivery_type: DeliveryType::Delivery,
            address: None,
            comment: None,
        };

        assert_eq!(form.validate().len(), 3);
    }
}
