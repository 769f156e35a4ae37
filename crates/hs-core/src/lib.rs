//! hs-core: stable foundation for heatsizer.
//!
//! Contains:
//! - units (uom SI types + constructors)
//! - numeric (Real + float helpers)

pub mod numeric;
pub mod units;

// Re-exports: nice ergonomics for downstream crates
pub use numeric::*;
pub use units::*;
