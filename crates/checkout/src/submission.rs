use std::thread;

use anyhow::{bail, Context, Result};
use base::entities::order::{
    BasicOrderProperties, DeliveryType, OrderId, OrderItemProperties, OrderStatus,
};
use base::entities::Item;
use base::notifier::Notifier;
use base::stores::order_store::BasicOrderStore;
use cart::engine::CartEngine;
use cart::storage::CartStorage;
use chrono::Utc;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::notification::{format_order_notification, OrderNotificationLine};
use crate::validation::CheckoutForm;

/// Delivery surcharge in rubles for courier delivery.
pub const DELIVERY_COST: Decimal = dec!(300);

pub fn delivery_cost(delivery_type: DeliveryType) -> Decimal {
    match delivery_type {
        DeliveryType::Delivery => DELIVERY_COST,
        DeliveryType::Pickup => Decimal::ZERO,
    }
}

/// Creates an order with its line items from the current cart, notifies the
/// administrator, and clears the cart.
///
/// The notification is fire-and-forget: it is sent on a detached thread and
/// its failure is only logged.
pub fn place_order<S, C, N>(
    form: &CheckoutForm,
    cart_engine: &mut CartEngine<C>,
    store: &mut S,
    notifier: N,
) -> Result<Item<OrderId, BasicOrderProperties>>
where
    S: BasicOrderStore<OrderProperties = BasicOrderProperties>,
    C: CartStorage,
    N: Notifier + Send + 'static,
{
    let validation_errors = form.validate();
    if !validation_errors.is_empty() {
        bail!(
            "invalid checkout form: {}",
            validation_errors
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("; ")
        );
    }

    if cart_engine.items().is_empty() {
        bail!("an order cannot be placed with an empty cart");
    }

    let total_amount = cart_engine.total() + delivery_cost(form.delivery_type);

    let order = store
        .create_order(BasicOrderProperties {
            name: form.name.clone(),
            phone: form.phone.clone(),
            delivery_type: form.delivery_type,
            delivery_address: match form.delivery_type {
                DeliveryType::Delivery => form.address.clone(),
                DeliveryType::Pickup => None,
            },
            comment: form.comment.clone(),
            total: total_amount,
            status: OrderStatus::Pending,
            created_at: Utc::now(),
        })
        .context("an error occurred on creating the order")?;

    let order_items = cart_engine
        .items()
        .iter()
        .map(|item| OrderItemProperties {
            product_id: item.id.clone(),
            quantity: item.props.quantity,
            price: item.props.product.price,
        })
        .collect::<Vec<_>>();

    store
        .create_order_items(&order.id, &order_items)
        .context("an error occurred on creating the order items")?;

    let notification_lines = cart_engine
        .items()
        .iter()
        .map(|item| OrderNotificationLine {
            product_name: item.props.product.name.clone(),
            quantity: item.props.quantity,
            price: item.props.product.price,
        })
        .collect::<Vec<_>>();

    let notification = format_order_notification(&order, &notification_lines);

    thread::spawn(move || {
        if let Err(e) = notifier.send_message(&notification) {
            log::error!(
                "an error occurred on sending the new order notification: {:?}",
                e
            );
        }
    });

    cart_engine
        .clear()
        .context("an error occurred on clearing the cart after checkout")?;

    Ok(order)
}
