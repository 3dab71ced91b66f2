//! Domain logic shared by the Wayfarer crates.
//!
//! Nothing in here touches storage or HTTP; the repositories in
//! `wayfarer_db` and the handlers in `wayfarer_api` call into these
//! functions to keep the business rules in one place.

pub mod error;
pub mod maps;
pub mod recommendation;
pub mod trip;
pub mod types;
