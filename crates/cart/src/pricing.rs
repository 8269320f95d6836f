use base::entities::cart::BasicCartItemProperties;
use base::helpers::parse_base_weight_kg;
use rust_decimal::Decimal;

/// Effective price of a single cart position.
///
/// Weight-based products with a custom weight are linearly rescaled from the
/// declared base weight, so repeated weight updates never compound.
pub fn cart_item_price(item: &BasicCartItemProperties) -> Decimal {
    let quantity = Decimal::from(item.quantity);

    if item.product.category.is_piece_based() {
        return item.product.price * quantity;
    }

    if let (Some(custom_weight), Some(weight_label)) =
        (item.custom_weight, item.product.weight.as_ref())
    {
        let base_weight = parse_base_weight_kg(weight_label);
        let adjusted_price = item.product.price / base_weight * custom_weight;
        return adjusted_price * quantity;
    }

    item.product.price * quantity
}

#[cfg(test)]
mod tests {
    use super::*;
    use base::entities::product::{BasicProductProperties, ProductCategory};
    use rust_decimal_macros::dec;

    fn cart_item(
        category: ProductCategory,
        price: Decimal,
        weight: Option<&str>,
        quantity: u32,
        custom_weight: Option<Decimal>,
    ) -> BasicCartItemProperties {
        BasicCartItemProperties {
            product: BasicProductProperties {
                name: String::from("Торт"),
                description: String::from("test"),
                price,
                category,
                weight: weight.map(String::from),
                in_stock: true,
            },
            quantity,
            custom_weight,
        }
    }

    #[test]
    #[allow(non_snake_case)]
    fn cart_item_price__piece_based_category__should_ignore_custom_weight() {
        let item = cart_item(
            ProductCategory::Macarons,
            dec!(150),
            Some("0.2 кг"),
            3,
            Some(dec!(5)),
        );

        assert_eq!(cart_item_price(&item), dec!(450));
    }

    #[test]
    #[allow(non_snake_case)]
    fn cart_item_price__custom_weight_with_declared_base__should_rescale_from_base_weight() {
        let item = cart_item(
            ProductCategory::Cakes,
            dec!(1500),
            Some("1.5 кг"),
            1,
            Some(dec!(3)),
        );

        assert_eq!(cart_item_price(&item), dec!(3000));
    }

    #[test]
    #[allow(non_snake_case)]
    fn cart_item_price__custom_weight_with_unparseable_base__should_rescale_from_one_kilogram() {
        let item = cart_item(
            ProductCategory::Cakes,
            dec!(1000),
            Some("кг"),
            1,
            Some(dec!(2.5)),
        );

        assert_eq!(cart_item_price(&item), dec!(2500));
    }

    #[test]
    #[allow(non_snake_case)]
    fn cart_item_price__no_custom_weight__should_multiply_price_by_quantity() {
        let item = cart_item(ProductCategory::Cakes, dec!(1200), Some("2.5 кг"), 2, None);

        assert_eq!(cart_item_price(&item), dec!(2400));
    }

    #[test]
    #[allow(non_snake_case)]
    fn cart_item_price__no_declared_weight__should_multiply_price_by_quantity() {
        let item = cart_item(ProductCategory::Cakes, dec!(1200), None, 2, Some(dec!(3)));

        assert_eq!(cart_item_price(&item), dec!(2400));
    }
}
