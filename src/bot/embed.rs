//! Embed builders for command replies and message discovery.

use chrono::{DateTime, Utc};
use serenity::all::{Colour, CreateEmbed, CreateEmbedAuthor, CreateEmbedFooter, Embed};

use crate::{error::AppError, model::role_list::ToggleOutcome};

pub const GREEN: Colour = Colour::new(0x2ECC71);
pub const RED: Colour = Colour::new(0xE74C3C);
pub const YELLOW: Colour = Colour::new(0xF1C40F);
pub const DISCOVERY: Colour = Colour::new(0x0D0EB4);

/// Reply for an add/remove toggle: green when added, red when removed.
pub fn toggled(title: &str, outcome: ToggleOutcome, subject: &str) -> CreateEmbed {
    let (verb, colour) = match outcome {
        ToggleOutcome::Added => ("Added", GREEN),
        ToggleOutcome::Removed => ("Removed", RED),
    };

    CreateEmbed::new()
        .title(title)
        .description(format!("{} {}", verb, subject))
        .colour(colour)
}

/// Reply for a setting that changed from one value to another.
pub fn changed(title: &str, previous: &str, current: &str) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .field("Old", previous, false)
        .field("New", current, false)
        .colour(YELLOW)
}

pub fn success(title: &str, description: impl Into<String>) -> CreateEmbed {
    CreateEmbed::new()
        .title(title)
        .description(description)
        .colour(GREEN)
}

/// Reply for a failed command.
///
/// Input errors read "Invalid parameters" and carry their own message; anything
/// else is reported generically.
pub fn error(err: &AppError) -> CreateEmbed {
    let title = match err {
        AppError::ValidationErr(_) => "Invalid parameters",
        AppError::Forbidden(_) => "Missing permissions",
        AppError::NotFound(_) => "Not found",
        _ => "Error",
    };

    CreateEmbed::new()
        .title(title)
        .description(err.user_message())
        .colour(RED)
}

/// A message resolved from a link, ready to be quoted.
#[derive(Debug, Clone)]
pub struct DiscoveredMessage {
    pub author_name: String,
    pub author_avatar: String,
    pub body: QuotedBody,
    pub image: Option<String>,
    pub channel_name: String,
    pub sent_at: DateTime<Utc>,
}

/// What a discovered message is quoted as.
#[derive(Debug, Clone)]
pub enum QuotedBody {
    /// The message's text content.
    Text(String),
    /// The first embed of a message with no content, re-posted whole.
    Embed(Box<Embed>),
}

/// Quote embed posted when a message link is discovered.
///
/// Captured embeds keep their own title, fields, colour and image; an attachment
/// on the quoted message replaces the image.
pub fn discovery(found: &DiscoveredMessage) -> CreateEmbed {
    let sent = format!(
        "Sent in {} at {}",
        found.channel_name,
        found.sent_at.format("%d/%m/%Y %H:%M:%S")
    );

    let (embed, footer) = match &found.body {
        QuotedBody::Text(content) => (
            CreateEmbed::new().description(content).colour(DISCOVERY),
            sent,
        ),
        QuotedBody::Embed(captured) => (
            CreateEmbed::from(captured.as_ref().clone()),
            format!("[EMBED CAPTURED] {}", sent),
        ),
    };

    let mut embed = embed
        .author(CreateEmbedAuthor::new(&found.author_name).icon_url(&found.author_avatar))
        .footer(CreateEmbedFooter::new(footer));

    if let Some(image) = &found.image {
        embed = embed.image(image);
    }

    embed
}
