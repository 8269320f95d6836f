use std::fmt::{Display, Formatter};
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub type ProductId = String;
pub type ProductPrice = Decimal;
pub type WeightLabel = String;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductCategory {
    Cakes,
    Cupcakes,
    Macarons,
    PhotoPrint,
    BentoCakes,
}

impl ProductCategory {
    /// Piece-based categories are sold per unit: their price never scales
    /// with weight, and cart items of these categories carry no custom weight.
    pub fn is_piece_based(&self) -> bool {
        matches!(
            self,
            ProductCategory::Cupcakes
                | ProductCategory::Macarons
                | ProductCategory::PhotoPrint
                | ProductCategory::BentoCakes
        )
    }
}

impl FromStr for ProductCategory {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "cakes" => Ok(Self::Cakes),
            "cupcakes" => Ok(Self::Cupcakes),
            "macarons" => Ok(Self::Macarons),
            "photo-print" => Ok(Self::PhotoPrint),
            "bento-cakes" => Ok(Self::BentoCakes),
            _ => anyhow::bail!("Invalid product category: {}", input),
        }
    }
}

impl Display for ProductCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match *self {
            ProductCategory::Cakes => write!(f, "cakes"),
            ProductCategory::Cupcakes => write!(f, "cupcakes"),
            ProductCategory::Macarons => write!(f, "macarons"),
            ProductCategory::PhotoPrint => write!(f, "photo-print"),
            ProductCategory::BentoCakes => write!(f, "bento-cakes"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BasicProductProperties {
    pub name: String,
    pub description: String,
    pub price: ProductPrice,
    pub category: ProductCategory,
    pub weight: Option<WeightLabel>,
    pub in_stock: bool,
}
