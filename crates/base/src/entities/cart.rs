use serde::{Deserialize, Serialize};

use crate::entities::product::BasicProductProperties;
use crate::helpers::WeightKg;

pub type CartQuantity = u32;

/// A single cart position.
///
/// The snapshot of these is persisted between sessions, so unknown fields
/// are skipped on read and a missing custom weight stays unset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicCartItemProperties {
    pub product: BasicProductProperties,
    pub quantity: CartQuantity,
    #[serde(default)]
    pub custom_weight: Option<WeightKg>,
}
