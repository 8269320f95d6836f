use std::fmt::{Display, Formatter};
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::entities::product::{ProductId, ProductPrice};

pub type OrderId = String;
pub type CustomerName = String;
pub type CustomerPhone = String;
pub type DeliveryAddress = String;
pub type OrderComment = String;
pub type OrderTotal = Decimal;
pub type OrderItemQuantity = u32;

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Processing,
    Completed,
    Cancelled,
}

impl OrderStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Processing => "processing",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }

    /// Human-readable label shown to the operator in chat replies.
    pub fn label(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Новый",
            OrderStatus::Processing => "В обработке",
            OrderStatus::Completed => "Выполнен",
            OrderStatus::Cancelled => "Отменён",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "pending" => Ok(Self::Pending),
            "processing" => Ok(Self::Processing),
            "completed" => Ok(Self::Completed),
            "cancelled" => Ok(Self::Cancelled),
            _ => anyhow::bail!("Invalid order status: {}", input),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryType {
    Delivery,
    Pickup,
}

impl DeliveryType {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeliveryType::Delivery => "delivery",
            DeliveryType::Pickup => "pickup",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            DeliveryType::Delivery => "Доставка",
            DeliveryType::Pickup => "Самовывоз",
        }
    }
}

impl FromStr for DeliveryType {
    type Err = anyhow::Error;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        match input {
            "delivery" => Ok(Self::Delivery),
            "pickup" => Ok(Self::Pickup),
            _ => anyhow::bail!("Invalid delivery type: {}", input),
        }
    }
}

impl Display for DeliveryType {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct BasicOrderProperties {
    pub name: CustomerName,
    pub phone: CustomerPhone,
    pub delivery_type: DeliveryType,
    pub delivery_address: Option<DeliveryAddress>,
    pub comment: Option<OrderComment>,
    pub total: OrderTotal,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// A single order line with the unit price snapshotted at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderItemProperties {
    pub product_id: ProductId,
    pub quantity: OrderItemQuantity,
    pub price: ProductPrice,
}
