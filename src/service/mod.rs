//! Business logic layer.
//!
//! Services validate input coming from Discord, orchestrate one or more repositories,
//! and return domain models or `AppError`. They never talk to Discord themselves;
//! the bot layer performs the platform side effects services decide on.

pub mod autoclose;
pub mod penalty;
pub mod settings;
pub mod ticket;
