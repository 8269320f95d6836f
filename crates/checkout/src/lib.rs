pub mod notification;
pub mod submission;
pub mod validation;

pub use submission::place_order;
pub use validation::{CheckoutForm, CheckoutValidationError};
