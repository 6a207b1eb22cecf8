//! The three client state machines.
//!
//! - [`creation::CreationFlow`] - Shorten a URL and copy the result
//! - [`lookup::LookupFlow`] - Check a typed slug and hand it to the details view
//! - [`details::DetailsFlow`] - Show statistics and delete on confirmation
//!
//! Each flow owns its state, is generic over [`crate::domain::repositories::LinkRepository`]
//! and never lets a failure escape its own view.

pub mod creation;
pub mod details;
pub mod lookup;

#[cfg(test)]
pub(crate) mod testing;

pub use creation::{CreationFlow, CreationView};
pub use details::{DeleteOutcome, DetailsFlow, DetailsView, LoadedDetails};
pub use lookup::{LookupFlow, LookupView};
