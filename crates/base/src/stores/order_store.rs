use crate::entities::order::{OrderId, OrderItemProperties, OrderStatus};
use crate::entities::Item;
use anyhow::Result;
use std::collections::HashMap;

pub trait BasicOrderStore {
    type OrderProperties;

    fn create_order(
        &mut self,
        properties: Self::OrderProperties,
    ) -> Result<Item<OrderId, Self::OrderProperties>>;

    fn create_order_items(&mut self, order_id: &str, items: &[OrderItemProperties]) -> Result<()>;

    fn get_order_status_by_id(&self, id: &str) -> Result<Option<OrderStatus>>;

    fn get_all_orders(&self) -> Result<Vec<Item<OrderId, Self::OrderProperties>>>;

    fn get_order_items_by_order_ids(
        &self,
        order_ids: &[OrderId],
    ) -> Result<HashMap<OrderId, Vec<OrderItemProperties>>>;

    fn update_order_status(&mut self, order_id: &str, new_status: OrderStatus) -> Result<()>;
}
