use std::collections::HashMap;
use std::str::FromStr;

use anyhow::{bail, Context, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use serde_json::{json, Value};

use base::entities::order::{
    BasicOrderProperties, DeliveryType, OrderId, OrderItemProperties, OrderItemQuantity,
    OrderStatus,
};
use base::entities::product::{BasicProductProperties, ProductCategory, ProductId};
use base::entities::Item;
use base::requests::api::SyncHttpRequest;
use base::requests::entities::{HttpRequestData, HttpRequestMethod, HttpRequestWithRetriesParams};
use base::requests::http_request_with_retries;
use base::stores::order_store::BasicOrderStore;
use base::stores::product_store::BasicProductStore;

use crate::helpers::from_iso_utc_str_to_utc_datetime;

pub const SUPABASE_URL_ENV: &str = "SUPABASE_URL";
pub const SUPABASE_SERVICE_KEY_ENV: &str = "SUPABASE_SERVICE_KEY";

pub type NumberOfRequestRetries = u32;
pub type SecondsToSleepBeforeRequestRetry = u32;

pub const DEFAULT_NUMBER_OF_REQUEST_RETRIES: NumberOfRequestRetries = 5;
pub const DEFAULT_NUMBER_OF_SECONDS_TO_SLEEP_BEFORE_REQUEST_RETRY:
    SecondsToSleepBeforeRequestRetry = 1;

pub type ApiUrl = String;
pub type ServiceKey = String;

pub struct RetrySettings {
    pub number_of_request_retries: NumberOfRequestRetries,
    pub seconds_to_sleep_before_request_retry: SecondsToSleepBeforeRequestRetry,
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            number_of_request_retries: DEFAULT_NUMBER_OF_REQUEST_RETRIES,
            seconds_to_sleep_before_request_retry:
                DEFAULT_NUMBER_OF_SECONDS_TO_SLEEP_BEFORE_REQUEST_RETRY,
        }
    }
}

pub struct ApiData {
    pub url: ApiUrl,
    pub service_key: ServiceKey,
}

#[derive(Deserialize, Debug)]
struct OrderRowJson {
    id: OrderId,
    name: String,
    phone: String,
    delivery_type: String,
    delivery_address: Option<String>,
    comment: Option<String>,
    total: Decimal,
    status: String,
    created_at: String,
}

#[derive(Deserialize, Debug)]
struct OrderStatusRowJson {
    status: String,
}

#[derive(Deserialize, Debug)]
struct OrderItemRowJson {
    order_id: OrderId,
    product_id: ProductId,
    quantity: OrderItemQuantity,
    price: Decimal,
}

#[derive(Deserialize, Debug)]
struct ProductRowJson {
    id: ProductId,
    name: String,
    description: String,
    price: Decimal,
    category: String,
    weight: Option<String>,
    in_stock: bool,
}

pub struct SupabaseOrdersApi<R: SyncHttpRequest> {
    api_data: ApiData,
    retry_settings: RetrySettings,
    request_api: R,
}

impl<R: SyncHttpRequest> SupabaseOrdersApi<R> {
    pub fn new(api_data: ApiData, retry_settings: RetrySettings, request_api: R) -> Self {
        Self {
            api_data,
            retry_settings,
            request_api,
        }
    }

    /// Reads the backend url and the service key from the environment.
    pub fn from_env(retry_settings: RetrySettings, request_api: R) -> Result<Self> {
        let api_data = ApiData {
            url: dotenv::var(SUPABASE_URL_ENV)
                .context("the supabase url is missing in the environment")?,
            service_key: dotenv::var(SUPABASE_SERVICE_KEY_ENV)
                .context("the supabase service key is missing in the environment")?,
        };

        Ok(Self::new(api_data, retry_settings, request_api))
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.api_data.url, table)
    }

    fn authorized_request(&self, method: HttpRequestMethod, url: &str) -> HttpRequestData {
        HttpRequestData::new(method, url)
            .with_header("apikey", &self.api_data.service_key)
            .with_header(
                "Authorization",
                &format!("Bearer {}", self.api_data.service_key),
            )
    }

    fn request_with_retries(
        &self,
        req_data: HttpRequestData,
        req_entity_name: &str,
    ) -> Result<String> {
        http_request_with_retries(
            req_data,
            HttpRequestWithRetriesParams {
                req_entity_name,
                number_of_retries: self.retry_settings.number_of_request_retries,
                seconds_to_sleep: self.retry_settings.seconds_to_sleep_before_request_retry,
            },
            &self.request_api,
        )
    }
}

fn order_row_to_item(row: OrderRowJson) -> Result<Item<OrderId, BasicOrderProperties>> {
    Ok(Item {
        id: row.id,
        props: BasicOrderProperties {
            name: row.name,
            phone: row.phone,
            delivery_type: DeliveryType::from_str(&row.delivery_type)?,
            delivery_address: row.delivery_address,
            comment: row.comment,
            total: row.total,
            status: OrderStatus::from_str(&row.status)?,
            created_at: from_iso_utc_str_to_utc_datetime(&row.created_at)?,
        },
    })
}

impl<R: SyncHttpRequest> BasicOrderStore for SupabaseOrdersApi<R> {
    type OrderProperties = BasicOrderProperties;

    fn create_order(
        &mut self,
        properties: Self::OrderProperties,
    ) -> Result<Item<OrderId, Self::OrderProperties>> {
        let req_data = self
            .authorized_request(HttpRequestMethod::Post, &self.table_url("orders"))
            .with_header("Prefer", "return=representation")
            .with_json_body(json!({
                "name": properties.name,
                "phone": properties.phone,
                "delivery_type": properties.delivery_type,
                "delivery_address": properties.delivery_address,
                "comment": properties.comment,
                "total": properties.total,
                "status": properties.status,
            }));

        let response = self.request_with_retries(req_data, "creating an order")?;

        let created_rows: Vec<OrderRowJson> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the created order")?;

        let row = created_rows
            .into_iter()
            .next()
            .context("the created order is missing in the response")?;

        order_row_to_item(row)
    }

    fn create_order_items(&mut self, order_id: &str, items: &[OrderItemProperties]) -> Result<()> {
        let order_item_rows = items
            .iter()
            .map(|item| {
                json!({
                    "order_id": order_id,
                    "product_id": item.product_id,
                    "quantity": item.quantity,
                    "price": item.price,
                })
            })
            .collect::<Vec<_>>();

        let req_data = self
            .authorized_request(HttpRequestMethod::Post, &self.table_url("order_items"))
            .with_json_body(Value::Array(order_item_rows));

        self.request_with_retries(req_data, "creating the order items")?;

        Ok(())
    }

    fn get_order_status_by_id(&self, id: &str) -> Result<Option<OrderStatus>> {
        let req_data = self
            .authorized_request(HttpRequestMethod::Get, &self.table_url("orders"))
            .with_query("id", &format!("eq.{}", id))
            .with_query("select", "status");

        let response = self.request_with_retries(req_data, "the order status")?;

        let rows: Vec<OrderStatusRowJson> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the order status")?;

        match rows.into_iter().next() {
            None => Ok(None),
            Some(row) => Ok(Some(OrderStatus::from_str(&row.status)?)),
        }
    }

    fn get_all_orders(&self) -> Result<Vec<Item<OrderId, Self::OrderProperties>>> {
        let req_data = self
            .authorized_request(HttpRequestMethod::Get, &self.table_url("orders"))
            .with_query("select", "*")
            .with_query("order", "created_at.desc");

        let response = self.request_with_retries(req_data, "the list of orders")?;

        let rows: Vec<OrderRowJson> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the list of orders")?;

        rows.into_iter().map(order_row_to_item).collect()
    }

    fn get_order_items_by_order_ids(
        &self,
        order_ids: &[OrderId],
    ) -> Result<HashMap<OrderId, Vec<OrderItemProperties>>> {
        let req_data = self
            .authorized_request(HttpRequestMethod::Get, &self.table_url("order_items"))
            .with_query("order_id", &format!("in.({})", order_ids.join(",")))
            .with_query("select", "*");

        let response = self.request_with_retries(req_data, "the order items")?;

        let rows: Vec<OrderItemRowJson> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the order items")?;

        let mut items_by_order_id: HashMap<OrderId, Vec<OrderItemProperties>> = HashMap::new();

        for row in rows {
            items_by_order_id
                .entry(row.order_id)
                .or_default()
                .push(OrderItemProperties {
                    product_id: row.product_id,
                    quantity: row.quantity,
                    price: row.price,
                });
        }

        Ok(items_by_order_id)
    }

    fn update_order_status(&mut self, order_id: &str, new_status: OrderStatus) -> Result<()> {
        let req_data = self
            .authorized_request(HttpRequestMethod::Patch, &self.table_url("orders"))
            .with_query("id", &format!("eq.{}", order_id))
            .with_header("Prefer", "return=representation")
            .with_json_body(json!({ "status": new_status }));

        let response = self.request_with_retries(req_data, "the order status update")?;

        let updated_rows: Vec<OrderStatusRowJson> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the order status update")?;

        if updated_rows.is_empty() {
            bail!("an order with the id {} is not found", order_id);
        }

        Ok(())
    }
}

impl<R: SyncHttpRequest> BasicProductStore for SupabaseOrdersApi<R> {
    type ProductProperties = BasicProductProperties;

    fn get_products_by_ids(
        &self,
        ids: &[ProductId],
    ) -> Result<Vec<Item<ProductId, Self::ProductProperties>>> {
        let req_data = self
            .authorized_request(HttpRequestMethod::Get, &self.table_url("products"))
            .with_query("id", &format!("in.({})", ids.join(",")))
            .with_query("select", "*");

        let response = self.request_with_retries(req_data, "the list of products")?;

        let rows: Vec<ProductRowJson> = serde_json::from_str(&response)
            .context("an error occurred on deserializing the list of products")?;

        rows.into_iter()
            .map(|row| {
                Ok(Item {
                    id: row.id,
                    props: BasicProductProperties {
                        name: row.name,
                        description: row.description,
                        price: row.price,
                        category: ProductCategory::from_str(&row.category)?,
                        weight: row.weight,
                        in_stock: row.in_stock,
                    },
                })
            })
            .collect()
    }
}
