//! Prelude module for ifc_date crate.
//!
//! Re-exports the derive macros the value types use from derive_more.

pub use derive_more::{Deref, Display};
