use crate::entities::product::ProductId;
use crate::entities::Item;
use anyhow::Result;

pub trait BasicProductStore {
    type ProductProperties;

    fn get_products_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Item<ProductId, Self::ProductProperties>>>;
}
