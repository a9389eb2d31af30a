//! Data utilities for Traveller-style world generation.
//!
//! Independent of the dice engine: callers turn roll totals into profile
//! digits with [`Ehex::clamped`] and record stars with [`Star`].

pub mod ehex;
pub mod error;
pub mod star;

pub use ehex::Ehex;
pub use error::{CoreError, CoreResult};
pub use star::Star;
