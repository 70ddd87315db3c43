//! Test fixtures providing reusable filesystem data without database insertion.
//!
//! # Example
//!
//! ```rust,ignore
//! use test_utils::fixture::art::ArtDirectory;
//!
//! let art = ArtDirectory::with_files(&["awesome_dragon.png", "notes.txt"])?;
//! let catalog = CardCatalog::new(art.path());
//! ```

pub mod art;
