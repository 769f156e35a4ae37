//! Runtime catalog model.
//!
//! uom-typed counterpart of the raw schema in [`crate::schema`]. Conversion
//! is infallible; structural checks live in [`crate::validate`].

use crate::schema::{
    CascadeCharacteristicsDef, CatalogDef, EmitterRangeDef, PowerSpecDef, PowerSupplyDef,
    PowerVariantDef, ProductDef,
};
use hs_core::units::{Power, Temperature, as_kw, celsius, kw};
use hs_core::Real;

/// One heat-pump model family from the catalog.
#[derive(Debug, Clone, PartialEq)]
pub struct Product {
    pub id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub power: PowerSpec,
    pub emitter_range: EmitterRange,
    pub free_cooling: bool,
    pub pool_kit: bool,
}

impl Product {
    /// Tag membership: trimmed, ASCII-case-insensitive equality.
    pub fn has_tag(&self, tag: &str) -> bool {
        let tag = tag.trim();
        self.tags.iter().any(|t| t.trim().eq_ignore_ascii_case(tag))
    }

    /// Substring search over id, name, and tags for catalog listings.
    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_ascii_lowercase().contains(&query))
    }
}

/// Deliverable power envelope and how variants are obtained from it.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerSpec {
    pub min: Power,
    pub max: Power,
    pub supply: PowerSupply,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PowerSupply {
    Discrete {
        variants: Vec<PowerVariant>,
    },
    Cascade {
        increment: Power,
        base_model: String,
        characteristics: Option<CascadeCharacteristics>,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct CascadeCharacteristics {
    pub mean_cop: Real,
    pub mean_etas: Real,
    pub frigorific_ratio: Option<Real>,
    pub absorbed_ratio: Option<Real>,
}

/// A concrete selectable unit. Calorific power is the ordering key.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerVariant {
    pub model: String,
    pub calorific: Power,
    pub frigorific: Power,
    pub absorbed: Power,
    pub cop: Real,
    pub etas: Real,
}

/// Supported emission-temperature window, closed interval.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EmitterRange {
    pub min: Temperature,
    pub max: Temperature,
}

impl EmitterRange {
    pub fn contains(&self, t: Temperature) -> bool {
        self.min <= t && t <= self.max
    }
}

impl CatalogDef {
    /// Build the runtime product list from the raw schema.
    pub fn to_model(&self) -> Vec<Product> {
        self.products.iter().map(Product::from_def).collect()
    }
}

impl Product {
    pub fn from_def(def: &ProductDef) -> Self {
        Self {
            id: def.id.clone(),
            name: def.name.clone(),
            tags: def.tags.clone(),
            power: PowerSpec::from_def(&def.power),
            emitter_range: EmitterRange::from_def(&def.emitter),
            free_cooling: def.free_cooling,
            pool_kit: def.pool_kit,
        }
    }
}

impl PowerSpec {
    fn from_def(def: &PowerSpecDef) -> Self {
        Self {
            min: kw(def.min_kw),
            max: kw(def.max_kw),
            supply: PowerSupply::from_def(&def.supply),
        }
    }
}

impl PowerSupply {
    fn from_def(def: &PowerSupplyDef) -> Self {
        match def {
            PowerSupplyDef::Discrete { variants } => Self::Discrete {
                variants: variants.iter().map(PowerVariant::from_def).collect(),
            },
            PowerSupplyDef::Cascade {
                increment_kw,
                base_model,
                characteristics,
            } => Self::Cascade {
                increment: kw(*increment_kw),
                base_model: base_model.clone(),
                characteristics: characteristics
                    .as_ref()
                    .map(CascadeCharacteristics::from_def),
            },
        }
    }
}

impl CascadeCharacteristics {
    fn from_def(def: &CascadeCharacteristicsDef) -> Self {
        Self {
            mean_cop: def.mean_cop,
            mean_etas: def.mean_etas,
            frigorific_ratio: def.frigorific_ratio,
            absorbed_ratio: def.absorbed_ratio,
        }
    }
}

impl PowerVariant {
    pub fn from_def(def: &PowerVariantDef) -> Self {
        Self {
            model: def.model.clone(),
            calorific: kw(def.calorific_kw),
            frigorific: kw(def.frigorific_kw),
            absorbed: kw(def.absorbed_kw),
            cop: def.cop,
            etas: def.etas,
        }
    }

    /// Calorific power in kilowatts, for display and ordering.
    pub fn calorific_kw(&self) -> Real {
        as_kw(self.calorific)
    }
}

impl EmitterRange {
    fn from_def(def: &EmitterRangeDef) -> Self {
        Self {
            min: celsius(def.temp_min_c),
            max: celsius(def.temp_max_c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_product() -> Product {
        Product {
            id: "aw-compact".to_string(),
            name: "AirWater Compact".to_string(),
            tags: vec!["air-water".to_string(), "Monobloc".to_string()],
            power: PowerSpec {
                min: kw(4.0),
                max: kw(16.0),
                supply: PowerSupply::Discrete { variants: vec![] },
            },
            emitter_range: EmitterRange {
                min: celsius(25.0),
                max: celsius(55.0),
            },
            free_cooling: false,
            pool_kit: false,
        }
    }

    #[test]
    fn tag_match_is_case_insensitive() {
        let product = sample_product();
        assert!(product.has_tag("air-water"));
        assert!(product.has_tag("monobloc"));
        assert!(product.has_tag(" MONOBLOC "));
        assert!(!product.has_tag("split"));
    }

    #[test]
    fn emitter_range_is_closed() {
        let product = sample_product();
        assert!(product.emitter_range.contains(celsius(25.0)));
        assert!(product.emitter_range.contains(celsius(55.0)));
        assert!(product.emitter_range.contains(celsius(35.0)));
        assert!(!product.emitter_range.contains(celsius(24.9)));
        assert!(!product.emitter_range.contains(celsius(55.1)));
    }

    #[test]
    fn query_matches_id_name_and_tags() {
        let product = sample_product();
        assert!(product.matches_query("compact"));
        assert!(product.matches_query("AW-"));
        assert!(product.matches_query("mono"));
        assert!(product.matches_query(""));
        assert!(!product.matches_query("geothermal"));
    }
}
