//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible defaults,
//! reducing boilerplate in tests. Every per-guild table references `guild_config`, so
//! create the guild first (or use `helpers::create_guild_with_ticket`).
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     let guild = factory::guild_config::create_guild(&db).await?;
//!     let ticket = factory::ticket::create_ticket(&db, guild.guild_id).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! ```rust,ignore
//! let guild = factory::guild_config::GuildConfigFactory::new(&db)
//!     .staff_team_name("Moderators")
//!     .first_autoclose(Some(60))
//!     .build()
//!     .await?;
//! ```

pub mod guild_config;
pub mod guild_role_list;
pub mod helpers;
pub mod member;
pub mod ticket;
pub mod ticket_bot;
pub mod ticket_type;
