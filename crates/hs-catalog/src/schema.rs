//! Catalog schema definitions.
//!
//! The schema layer stores raw `f64` values with unit-suffixed field names;
//! conversion to uom-typed runtime objects lives in [`crate::model`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDef {
    pub version: u32,
    #[serde(default)]
    pub products: Vec<ProductDef>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductDef {
    pub id: String,
    pub name: String,
    /// Categorical "particularity" tags: heat-pump type, system type,
    /// climate zone, etc.
    #[serde(default)]
    pub tags: Vec<String>,
    pub power: PowerSpecDef,
    pub emitter: EmitterRangeDef,
    #[serde(default)]
    pub free_cooling: bool,
    #[serde(default)]
    pub pool_kit: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerSpecDef {
    pub min_kw: f64,
    pub max_kw: f64,
    pub supply: PowerSupplyDef,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum PowerSupplyDef {
    /// Fixed list of named models.
    Discrete {
        #[serde(default)]
        variants: Vec<PowerVariantDef>,
    },
    /// Power tunable in fixed steps from a base model.
    Cascade {
        increment_kw: f64,
        base_model: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        characteristics: Option<CascadeCharacteristicsDef>,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PowerVariantDef {
    pub model: String,
    pub calorific_kw: f64,
    pub frigorific_kw: f64,
    pub absorbed_kw: f64,
    pub cop: f64,
    pub etas: f64,
}

/// Averaged performance figures for a cascade line.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CascadeCharacteristicsDef {
    pub mean_cop: f64,
    pub mean_etas: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frigorific_ratio: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub absorbed_ratio: Option<f64>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmitterRangeDef {
    pub temp_min_c: f64,
    pub temp_max_c: f64,
}
