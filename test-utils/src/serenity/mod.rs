//! Test factories for creating Serenity API objects.
//!
//! These factories create valid Serenity structs by deserializing JSON, simulating
//! what Discord's gateway would deliver.
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::serenity::create_test_channel;
//!
//! let channel = create_test_channel(123456789, 555, "ticket-0001");
//! ```
//!
//! # Available Factories
//!
//! - `channel::create_test_channel` - Create Serenity GuildChannel (text) objects
//! - `role::create_test_role` - Create Serenity Role objects

pub mod channel;
pub mod role;

pub use channel::create_test_channel;
pub use role::create_test_role;
