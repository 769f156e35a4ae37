//! hs-select: product compatibility resolution.
//!
//! Given a catalog of heat-pump products and a sizing request, returns the
//! products able to cover the requested thermal load, each paired with the
//! single best-fit power variant. The selection rule throughout is: never
//! under-size, prefer the least oversized option.

pub mod config;
pub mod filter;
pub mod request;
pub mod resolve;

pub use config::SelectorConfig;
pub use filter::{Selection, filter_compatible};
pub use request::SizingRequest;
pub use resolve::resolve_variant;

pub type SelectResult<T> = Result<T, SelectError>;

#[derive(thiserror::Error, Debug)]
pub enum SelectError {
    #[error("Invalid sizing request: {what}")]
    InvalidRequest { what: &'static str },
}
