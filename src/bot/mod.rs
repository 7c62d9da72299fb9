//! Discord bot integration.
//!
//! The bot reacts to channels created by a guild's registered ticket bots, keeps
//! penalties applied across rejoins, rewrites anonymous staff messages, and exposes
//! the `/settings` and `/staff` slash commands. The client's HTTP handle is shared
//! with the autoclose warning scheduler.
//!
//! # Gateway Intents
//!
//! The bot requires the following gateway intents:
//! - `GUILDS` - Guild availability, channel and role events
//! - `GUILD_MESSAGES` - Messages sent in tickets and links to discover
//! - `GUILD_MEMBERS` - Member joins for penalty re-application (privileged intent)
//! - `MESSAGE_CONTENT` - Message text for discovery and anonymous re-sends (privileged intent)
//!
//! Ticket detection reads the audit log, so the bot also needs the
//! `View Audit Log` permission in every guild it serves.

pub mod command;
pub mod embed;
pub mod handler;
pub mod start;
