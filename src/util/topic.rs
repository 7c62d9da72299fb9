//! Ticket channel topic text.
//!
//! Close times are rendered as Discord timestamp markup (`<t:UNIX:R>`), which each
//! client displays as a relative time in the reader's locale.

use chrono::{DateTime, Utc};
use regex::Regex;
use std::sync::LazyLock;

use crate::util::interval;

static RELATIVE_TIMESTAMP: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"<t:-?\d*:R>").expect("Valid timestamp regex"));

/// Discord markup for a relative timestamp.
pub fn relative_timestamp(at: DateTime<Utc>) -> String {
    format!("<t:{}:R>", at.timestamp())
}

/// Topic set when a ticket opens.
///
/// # Arguments
/// - `channel_name` - Name of the ticket channel
/// - `opened_at` - Channel creation time
/// - `first_autoclose` - Minutes before an unanswered ticket closes, if enabled
pub fn open_topic(
    channel_name: &str,
    opened_at: DateTime<Utc>,
    first_autoclose: Option<i64>,
) -> String {
    let mut topic = format!(
        "Ticket {}\nOpened at <t:{}:f>",
        channel_name,
        opened_at.timestamp()
    );

    let close_at = first_autoclose.and_then(|minutes| interval::after(opened_at, minutes));
    if let Some(close_at) = close_at {
        topic.push_str(&format!(
            "\nCloses {}. If no one responds, the ticket will be closed automatically. \
             Thank you for your patience!",
            relative_timestamp(close_at)
        ));
    }

    topic
}

/// Moves the close time in a ticket topic to `close_at`.
///
/// Every relative timestamp in the current topic is replaced. A topic without one
/// gets a close line appended, and a missing topic is rebuilt from the channel name.
pub fn refresh_close_time(
    current: Option<&str>,
    channel_name: &str,
    close_at: DateTime<Utc>,
) -> String {
    let stamp = relative_timestamp(close_at);

    match current.filter(|topic| !topic.trim().is_empty()) {
        Some(topic) if RELATIVE_TIMESTAMP.is_match(topic) => RELATIVE_TIMESTAMP
            .replace_all(topic, stamp.as_str())
            .into_owned(),
        Some(topic) => format!("{}\nCloses at: {}", topic, stamp),
        None => format!("Ticket: {}\nCloses at: {}", channel_name, stamp),
    }
}
