pub mod cart;
pub mod order;
pub mod product;

use serde::{Deserialize, Serialize};

pub use cart::BasicCartItemProperties;
pub use order::{BasicOrderProperties, DeliveryType, OrderStatus};
pub use product::{BasicProductProperties, ProductCategory};

#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Item<I, P> {
    pub id: I,
    pub props: P,
}
