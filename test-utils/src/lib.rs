//! Cardcaptor Test Utils
//!
//! Provides shared testing utilities for the card collection bot. This crate offers a
//! builder for creating test contexts with in-memory SQLite databases, factories for
//! inserting cards, spawned slots and collection entries, and fixtures for temporary
//! art directories.
//!
//! # Overview
//!
//! - **TestBuilder**: Fluent builder for configuring test environments
//! - **TestContext**: Test environment containing the database connection
//! - **TestError**: Error types that can occur during test setup
//! - **factory**: Database-backed test data with sensible defaults
//! - **fixture**: Filesystem fixtures (art directories) without database access
//!
//! # Usage
//!
//! ```rust,ignore
//! use test_utils::builder::TestBuilder;
//!
//! #[tokio::test]
//! async fn claims_card() -> Result<(), TestError> {
//!     let test = TestBuilder::new().with_card_tables().build().await?;
//!     let db = test.db.as_ref().unwrap();
//!     // Perform database operations...
//!     Ok(())
//! }
//! ```

pub mod builder;
pub mod context;
pub mod error;
pub mod factory;
pub mod fixture;
