//! Catalog validation logic.
//!
//! Rejects structurally broken catalogs (non-finite numbers, inverted
//! ranges, duplicate ids). Selection-time conditions such as an empty
//! variant list or a cascade without characteristics are deliberately not
//! errors here; the resolver treats them as exclusions.

use crate::schema::{CatalogDef, PowerSupplyDef, ProductDef};
use std::collections::HashSet;

pub const LATEST_VERSION: u32 = 1;

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: f64,
        reason: &'static str,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_catalog(catalog: &CatalogDef) -> Result<(), ValidationError> {
    if catalog.version > LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: catalog.version,
        });
    }

    let mut product_ids = HashSet::new();
    for product in &catalog.products {
        if !product_ids.insert(&product.id) {
            return Err(ValidationError::DuplicateId {
                id: product.id.clone(),
                context: "products".to_string(),
            });
        }
        validate_product(product)?;
    }

    Ok(())
}

fn validate_product(product: &ProductDef) -> Result<(), ValidationError> {
    let ctx = &product.id;

    check_positive(format!("{ctx}.power.min_kw"), product.power.min_kw)?;
    check_positive(format!("{ctx}.power.max_kw"), product.power.max_kw)?;
    if product.power.max_kw < product.power.min_kw {
        return Err(ValidationError::InvalidValue {
            field: format!("{ctx}.power.max_kw"),
            value: product.power.max_kw,
            reason: "power range max must be >= min",
        });
    }

    check_finite(format!("{ctx}.emitter.temp_min_c"), product.emitter.temp_min_c)?;
    check_finite(format!("{ctx}.emitter.temp_max_c"), product.emitter.temp_max_c)?;
    if product.emitter.temp_max_c < product.emitter.temp_min_c {
        return Err(ValidationError::InvalidValue {
            field: format!("{ctx}.emitter.temp_max_c"),
            value: product.emitter.temp_max_c,
            reason: "emitter range max must be >= min",
        });
    }

    match &product.power.supply {
        PowerSupplyDef::Discrete { variants } => {
            for (i, variant) in variants.iter().enumerate() {
                check_positive(format!("{ctx}.variants[{i}].calorific_kw"), variant.calorific_kw)?;
                check_non_negative(
                    format!("{ctx}.variants[{i}].frigorific_kw"),
                    variant.frigorific_kw,
                )?;
                check_non_negative(
                    format!("{ctx}.variants[{i}].absorbed_kw"),
                    variant.absorbed_kw,
                )?;
                check_positive(format!("{ctx}.variants[{i}].cop"), variant.cop)?;
                check_positive(format!("{ctx}.variants[{i}].etas"), variant.etas)?;
            }
        }
        PowerSupplyDef::Cascade {
            increment_kw,
            characteristics,
            ..
        } => {
            check_positive(format!("{ctx}.power.supply.increment_kw"), *increment_kw)?;
            if let Some(chars) = characteristics {
                check_positive(format!("{ctx}.characteristics.mean_cop"), chars.mean_cop)?;
                check_positive(format!("{ctx}.characteristics.mean_etas"), chars.mean_etas)?;
                if let Some(ratio) = chars.frigorific_ratio {
                    check_positive(format!("{ctx}.characteristics.frigorific_ratio"), ratio)?;
                }
                if let Some(ratio) = chars.absorbed_ratio {
                    check_positive(format!("{ctx}.characteristics.absorbed_ratio"), ratio)?;
                }
            }
        }
    }

    Ok(())
}

fn check_finite(field: String, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "value must be finite",
        });
    }
    Ok(())
}

fn check_positive(field: String, value: f64) -> Result<(), ValidationError> {
    check_finite(field.clone(), value)?;
    if value <= 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "value must be positive",
        });
    }
    Ok(())
}

fn check_non_negative(field: String, value: f64) -> Result<(), ValidationError> {
    check_finite(field.clone(), value)?;
    if value < 0.0 {
        return Err(ValidationError::InvalidValue {
            field,
            value,
            reason: "value must be non-negative",
        });
    }
    Ok(())
}
