use regex::Regex;
use std::sync::LazyLock;

static MESSAGE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"https://(?:(?:canary|ptb)\.)?discord(?:app)?\.com/channels/(\d{15,20})/(\d{15,20})/(\d{15,20})",
    )
    .expect("Valid message link regex")
});

/// IDs addressed by a Discord message link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageLink {
    pub guild_id: u64,
    pub channel_id: u64,
    pub message_id: u64,
}

/// Extracts the first message link from a message's content.
pub fn parse(content: &str) -> Option<MessageLink> {
    MESSAGE_LINK.captures_iter(content).find_map(|caps| {
        Some(MessageLink {
            guild_id: caps[1].parse().ok()?,
            channel_id: caps[2].parse().ok()?,
            message_id: caps[3].parse().ok()?,
        })
    })
}
