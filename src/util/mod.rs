//! Pure helpers shared by the bot and service layers.

pub mod interval;
pub mod message_link;
pub mod template;
pub mod topic;
