use base::entities::cart::BasicCartItemProperties;
use base::entities::product::{BasicProductProperties, ProductCategory, ProductId};
use base::entities::Item;
use cart::storage::{CartStorage, JsonFileCartStorage, CART_STORAGE_KEY};
use rust_decimal_macros::dec;

fn cart_snapshot() -> Vec<Item<ProductId, BasicCartItemProperties>> {
    vec![
        Item {
            id: String::from("755e4f83-48d4-4057-8ebf-144532ff9693"),
            props: BasicCartItemProperties {
                product: BasicProductProperties {
                    name: String::from("Медовик"),
                    description: String::from("Классический медовый торт"),
                    price: dec!(1500),
                    category: ProductCategory::Cakes,
                    weight: Some(String::from("1.5 кг")),
                    in_stock: true,
                },
                quantity: 1,
                custom_weight: Some(dec!(2.5)),
            },
        },
        Item {
            id: String::from("11111111-1111-1111-1111-111111111111"),
            props: BasicCartItemProperties {
                product: BasicProductProperties {
                    name: String::from("Макаруны"),
                    description: String::from("Набор макарун"),
                    price: dec!(150),
                    category: ProductCategory::Macarons,
                    weight: None,
                    in_stock: true,
                },
                quantity: 6,
                custom_weight: None,
            },
        },
    ]
}

#[test]
#[allow(non_snake_case)]
fn json_file_cart_storage__save_and_load__should_round_trip_the_snapshot() {
    let directory = tempfile::tempdir().unwrap();
    let storage = JsonFileCartStorage::new(directory.path());

    let items = cart_snapshot();
    storage.save(&items).unwrap();

    assert_eq!(storage.load().unwrap(), items);
}

#[test]
#[allow(non_snake_case)]
fn json_file_cart_storage__missing_snapshot_file__should_load_an_empty_cart() {
    let directory = tempfile::tempdir().unwrap();
    let storage = JsonFileCartStorage::new(directory.path());

    assert!(storage.load().unwrap().is_empty());
}

#[test]
#[allow(non_snake_case)]
fn json_file_cart_storage__snapshot_with_unknown_fields__should_skip_them_on_load() {
    let directory = tempfile::tempdir().unwrap();
    let storage = JsonFileCartStorage::new(directory.path());

    let snapshot = r#"[{
        "id": "755e4f83-48d4-4057-8ebf-144532ff9693",
        "props": {
            "product": {
                "name": "Медовик",
                "description": "Классический медовый торт",
                "price": "1500",
                "category": "cakes",
                "weight": "1.5 кг",
                "in_stock": true,
                "image": "honey-cake.jpg"
            },
            "quantity": 2
        },
        "added_at": "2024-05-01T10:00:00Z"
    }]"#;

    let snapshot_file_path = directory
        .path()
        .join(format!("{}.json", CART_STORAGE_KEY));
    std::fs::write(snapshot_file_path, snapshot).unwrap();

    let items = storage.load().unwrap();

    assert_eq!(items.len(), 1);
    assert_eq!(items[0].props.quantity, 2);
    assert_eq!(items[0].props.custom_weight, None);
}
