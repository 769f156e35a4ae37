//! Sizing request definition.

use crate::{SelectError, SelectResult};
use hs_core::units::{Power, Temperature, as_kw};

/// One caller configuration to size against.
#[derive(Debug, Clone, PartialEq)]
pub struct SizingRequest {
    /// Required thermal load the equipment must cover.
    pub heat_loss: Power,
    /// Requested heat-pump type tag (e.g. "air-water").
    pub heat_pump_type: String,
    /// Requested system tag (e.g. "monobloc", "split").
    pub system: String,
    /// Emitter kind, carried through to reports; not a filter input.
    pub emitter_type: String,
    /// Required emitter operating temperature.
    pub emitter_temp: Temperature,
}

impl SizingRequest {
    /// Create a sizing request.
    ///
    /// # Errors
    /// Returns an error for a non-positive or non-finite heat loss, or a
    /// blank heat-pump type or system tag.
    pub fn new(
        heat_loss: Power,
        heat_pump_type: String,
        system: String,
        emitter_type: String,
        emitter_temp: Temperature,
    ) -> SelectResult<Self> {
        let load_kw = as_kw(heat_loss);
        if !load_kw.is_finite() {
            return Err(SelectError::InvalidRequest {
                what: "heat loss must be finite",
            });
        }
        if load_kw <= 0.0 {
            return Err(SelectError::InvalidRequest {
                what: "heat loss must be positive",
            });
        }
        if heat_pump_type.trim().is_empty() {
            return Err(SelectError::InvalidRequest {
                what: "heat-pump type tag must not be blank",
            });
        }
        if system.trim().is_empty() {
            return Err(SelectError::InvalidRequest {
                what: "system tag must not be blank",
            });
        }

        Ok(Self {
            heat_loss,
            heat_pump_type,
            system,
            emitter_type,
            emitter_temp,
        })
    }
}
