use std::sync::LazyLock;

use base::entities::order::{OrderId, OrderStatus};
use regex::Regex;

/// Status words the operator is allowed to use in a command.
pub const ALLOWED_STATUS_WORDS: &str = "новый, обработка, выполнен, отменён";

static ORDER_REFERENCE_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)#([a-f0-9]{8}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{4}-[a-f0-9]{12})").unwrap()
});

static STATUS_ASSIGNMENT_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)статус=([а-яё]+)").unwrap());

/// Outcome of matching a chat message against the status command grammar.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum StatusCommandParse {
    /// The message lacks an order reference or a status assignment and is
    /// treated as plain conversation.
    NotACommand,
    UnknownStatus {
        order_id: OrderId,
        status_word: String,
    },
    UpdateStatus {
        order_id: OrderId,
        new_status: OrderStatus,
    },
}

/// A message is a command iff it contains both an `#<uuid>` order reference
/// and a `статус=<word>` assignment anywhere in the text.
pub fn parse_status_command(text: &str) -> StatusCommandParse {
    let order_reference = ORDER_REFERENCE_REGEX.captures(text);
    let status_assignment = STATUS_ASSIGNMENT_REGEX.captures(text);

    let (Some(order_reference), Some(status_assignment)) = (order_reference, status_assignment)
    else {
        return StatusCommandParse::NotACommand;
    };

    let order_id = order_reference[1].to_string();
    let status_word = status_assignment[1].to_string();

    match status_from_command_word(&status_word.to_lowercase()) {
        Some(new_status) => StatusCommandParse::UpdateStatus {
            order_id,
            new_status,
        },
        None => StatusCommandParse::UnknownStatus {
            order_id,
            status_word,
        },
    }
}

fn status_from_command_word(word: &str) -> Option<OrderStatus> {
    match word {
        "новый" => Some(OrderStatus::Pending),
        "обработка" => Some(OrderStatus::Processing),
        "выполнен" => Some(OrderStatus::Completed),
        "отменён" | "отменен" => Some(OrderStatus::Cancelled),
        _ => None,
    }
}
