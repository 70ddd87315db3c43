//! Business logic between the Discord handlers and the repositories.
//!
//! Services own transactions and turn repository results into outcomes the bot layer
//! can present. Races such as a lost claim are outcomes here, never errors.

pub mod admin;
pub mod catalog;
pub mod claim;
pub mod collection;
pub mod registry;
pub mod spawn;

#[cfg(test)]
mod test;
