//! Tickets+ Test Utils
//!
//! Provides shared testing utilities for building unit tests for the bot. This crate offers a
//! builder pattern for creating test contexts with in-memory SQLite databases and customizable
//! table schemas, entity factories, and Serenity object fixtures.
//!
//! # Overview
//!
//! The test utilities consist of these main components:
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Entity factories with sensible defaults
//! - **serenity**: Serenity model fixtures deserialized from JSON
//!
//! # Usage
//!
//! Use `TestBuilder` to create a test context with the required database tables:
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn test_guild_operations() -> Result<(), TestError> {
//!     let test = TestBuilder::new()
//!         .with_guild_tables()
//!         .build()
//!         .await?;
//!
//!     let db = test.db.unwrap();
//!     // Perform database operations...
//!
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod serenity;
