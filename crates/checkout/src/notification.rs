use base::entities::cart::CartQuantity;
use base::entities::order::{BasicOrderProperties, OrderId};
use base::entities::product::ProductPrice;
use base::entities::Item;
use chrono::Utc;
use rust_decimal::Decimal;

const TIME_PATTERN_FOR_NOTIFICATION: &str = "%d.%m.%Y %H:%M";

/// One order line as it appears in the notification text.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderNotificationLine {
    pub product_name: String,
    pub quantity: CartQuantity,
    pub price: ProductPrice,
}

/// Builds the HTML notification about a newly created order.
pub fn format_order_notification(
    order: &Item<OrderId, BasicOrderProperties>,
    lines: &[OrderNotificationLine],
) -> String {
    let mut message = format!("🛒 <b>Новый заказ #{}</b>\n\n", order.id);

    message.push_str(&format!("<b>Клиент:</b> {}\n", order.props.name));
    message.push_str(&format!("<b>Телефон:</b> {}\n", order.props.phone));
    message.push_str(&format!(
        "<b>Способ получения:</b> {}\n",
        order.props.delivery_type.label()
    ));

    if let Some(delivery_address) = &order.props.delivery_address {
        message.push_str(&format!("<b>Адрес доставки:</b> {}\n", delivery_address));
    }

    if let Some(comment) = &order.props.comment {
        message.push_str(&format!("\n<b>Комментарий:</b> {}\n", comment));
    }

    if !lines.is_empty() {
        message.push_str("\n<b>Товары:</b>\n");

        for line in lines {
            message.push_str(&format!(
                "• {} × {} = {} ₽\n",
                line.product_name,
                line.quantity,
                Decimal::from(line.quantity) * line.price
            ));
        }
    }

    message.push_str(&format!("\n<b>Итого:</b> {} ₽\n", order.props.total));
    message.push_str(&format!(
        "\n<code>{}</code>",
        Utc::now().format(TIME_PATTERN_FOR_NOTIFICATION)
    ));

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::entities::order::{DeliveryType, OrderStatus};
    use rust_decimal_macros::dec;

    fn order() -> Item<OrderId, BasicOrderProperties> {
        Item {
            id: String::from("755e4f83-48d4-4057-8ebf-144532ff9693"),
            props: BasicOrderProperties {
                name: String::from("Иван Иванов"),
                phone: String::from("+7 (999) 123-45-67"),
                delivery_type: DeliveryType::Delivery,
                delivery_address: Some(String::from("Улица, дом, квартира")),
                comment: Some(String::from("без надписи")),
                total: dec!(3300),
                status: OrderStatus::Pending,
                created_at: Utc::now(),
            },
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_order_notification__full_order__should_list_customer_lines_and_total() {
        let message = format_order_notification(
            &order(),
            &[
                OrderNotificationLine {
                    product_name: String::from("Медовик"),
                    quantity: 2,
                    price: dec!(1500),
                },
                OrderNotificationLine {
                    product_name: String::from("Макаруны"),
                    quantity: 6,
                    price: dec!(150),
                },
            ],
        );

        assert!(message.contains("Новый заказ #755e4f83-48d4-4057-8ebf-144532ff9693"));
        assert!(message.contains("<b>Клиент:</b> Иван Иванов"));
        assert!(message.contains("<b>Способ получения:</b> Доставка"));
        assert!(message.contains("<b>Адрес доставки:</b> Улица, дом, квартира"));
        assert!(message.contains("<b>Комментарий:</b> без надписи"));
        assert!(message.contains("• Медовик × 2 = 3000 ₽"));
        assert!(message.contains("• Макаруны × 6 = 900 ₽"));
        assert!(message.contains("<b>Итого:</b> 3300 ₽"));
    }

    #[test]
    #[allow(non_snake_case)]
    fn format_order_notification__pickup_without_optional_fields__should_skip_them() {
        let mut pickup_order = order();
        pickup_order.props.delivery_type = DeliveryType::Pickup;
        pickup_order.props.delivery_address = None;
        pickup_order.props.comment = None;

        let message = format_order_notification(&pickup_order, &[]);

        assert!(message.contains("<b>Способ получения:</b> Самовывоз"));
        assert!(!message.contains("Адрес доставки"));
        assert!(!message.contains("Комментарий"));
        assert!(!message.contains("Товары"));
    }
}
