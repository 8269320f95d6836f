use anyhow::{Context, Result};
use base::entities::cart::{BasicCartItemProperties, CartQuantity};
use base::entities::product::{BasicProductProperties, ProductId};
use base::entities::Item;
use base::helpers::{parse_base_weight_kg, round_to_half_kg_step, WeightKg, MIN_CUSTOM_WEIGHT_KG};
use rust_decimal::Decimal;

use crate::pricing::cart_item_price;
use crate::storage::CartStorage;

/// User-facing confirmation emitted by a cart mutation.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum CartEvent {
    ItemAdded,
    QuantityIncreased,
    ItemRemoved,
}

impl CartEvent {
    pub fn message(&self) -> &'static str {
        match self {
            CartEvent::ItemAdded => "Товар добавлен в корзину",
            CartEvent::QuantityIncreased => "Количество товара увеличено",
            CartEvent::ItemRemoved => "Товар удалён из корзины",
        }
    }
}

pub struct CartEngine<S: CartStorage> {
    items: Vec<Item<ProductId, BasicCartItemProperties>>,
    storage: S,
}

impl<S: CartStorage> CartEngine<S> {
    /// Restores the cart persisted by a previous session, or starts empty.
    pub fn load(storage: S) -> Result<Self> {
        let items = storage
            .load()
            .context("an error occurred on loading the cart snapshot")?;

        Ok(Self { items, storage })
    }

    pub fn items(&self) -> &[Item<ProductId, BasicCartItemProperties>] {
        &self.items
    }

    pub fn add_item(&mut self, product: Item<ProductId, BasicProductProperties>) -> Result<CartEvent> {
        let event = match self.items.iter_mut().find(|item| item.id == product.id) {
            Some(existing_item) => {
                existing_item.props.quantity += 1;
                CartEvent::QuantityIncreased
            }
            None => {
                let custom_weight = initial_custom_weight(&product.props);

                self.items.push(Item {
                    id: product.id,
                    props: BasicCartItemProperties {
                        product: product.props,
                        quantity: 1,
                        custom_weight,
                    },
                });

                CartEvent::ItemAdded
            }
        };

        self.persist()?;
        Ok(event)
    }

    pub fn remove_item(&mut self, product_id: &str) -> Result<CartEvent> {
        self.items.retain(|item| item.id != product_id);

        self.persist()?;
        Ok(CartEvent::ItemRemoved)
    }

    /// Sets the quantity of a cart position. A quantity below 1 removes the
    /// position instead, so a stored quantity is always at least 1.
    pub fn update_quantity(&mut self, product_id: &str, quantity: i32) -> Result<Option<CartEvent>> {
        if quantity < 1 {
            return self.remove_item(product_id).map(Some);
        }

        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.props.quantity = quantity as CartQuantity;
        }

        self.persist()?;
        Ok(None)
    }

    /// Stores a custom weight rounded to the half-kilogram step and floored
    /// at the minimum sellable weight.
    pub fn update_weight(&mut self, product_id: &str, weight: WeightKg) -> Result<()> {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            let rounded_weight = round_to_half_kg_step(weight);
            item.props.custom_weight = Some(rounded_weight.max(MIN_CUSTOM_WEIGHT_KG));
        }

        self.persist()
    }

    /// Clears the custom weight so the declared base weight is used again.
    pub fn reset_weight(&mut self, product_id: &str) -> Result<()> {
        if let Some(item) = self.items.iter_mut().find(|item| item.id == product_id) {
            item.props.custom_weight = None;
        }

        self.persist()
    }

    pub fn clear(&mut self) -> Result<()> {
        self.items.clear();
        self.persist()
    }

    /// Derives the cart total from scratch on every call.
    pub fn total(&self) -> Decimal {
        self.items
            .iter()
            .map(|item| cart_item_price(&item.props))
            .sum()
    }

    fn persist(&self) -> Result<()> {
        self.storage
            .save(&self.items)
            .context("an error occurred on saving the cart snapshot")
    }
}

/// A new weight-based cart position starts at the minimum sellable weight
/// when the declared base weight is below it; heavier products keep their
/// declared weight until the customer picks another one.
fn initial_custom_weight(product: &BasicProductProperties) -> Option<WeightKg> {
    if product.category.is_piece_based() {
        return None;
    }

    let weight_label = product.weight.as_ref()?;
    let base_weight = parse_base_weight_kg(weight_label);

    if base_weight < MIN_CUSTOM_WEIGHT_KG {
        Some(MIN_CUSTOM_WEIGHT_KG)
    } else {
        None
    }
}
