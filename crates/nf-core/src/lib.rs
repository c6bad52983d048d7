//! nf-core: stable foundation for nucleoflow.
//!
//! Contains:
//! - units (uom SI types + constructors for boundary inputs)
//! - numeric (Real + tolerances + float helpers)
//! - ids (stable compact IDs for species and reactions)
//! - error (shared error types)

pub mod error;
pub mod ids;
pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use error::{RnError, RnResult};
pub use ids::*;
pub use numeric::*;
pub use units::*;
