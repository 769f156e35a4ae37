//! Smallest-covering-variant resolution.
//!
//! Both supply kinds answer the same question: what is the smallest option
//! whose calorific power still covers the requested load? A cascade line
//! synthesizes that option by rounding the load up to its increment; a
//! discrete line scans its declared models in ascending power order.

use crate::config::SelectorConfig;
use hs_catalog::model::{CascadeCharacteristics, PowerSpec, PowerSupply, PowerVariant};
use hs_core::numeric::ceil_to_step;
use hs_core::units::{Power, as_kw, kw};

/// Resolve the smallest variant of `spec` that covers `load`.
///
/// Returns `None` whenever the product cannot cover the load; inability to
/// resolve is an exclusion, never an error.
pub fn resolve_variant(
    spec: &PowerSpec,
    load: Power,
    config: &SelectorConfig,
) -> Option<PowerVariant> {
    match &spec.supply {
        PowerSupply::Cascade {
            increment,
            base_model,
            characteristics,
        } => resolve_cascade(
            spec,
            *increment,
            base_model,
            characteristics.as_ref(),
            load,
            config,
        ),
        PowerSupply::Discrete { variants } => resolve_discrete(spec, variants, load, config),
    }
}

fn resolve_cascade(
    spec: &PowerSpec,
    increment: Power,
    base_model: &str,
    characteristics: Option<&CascadeCharacteristics>,
    load: Power,
    config: &SelectorConfig,
) -> Option<PowerVariant> {
    // An increment with no performance data has nothing to synthesize from.
    let chars = characteristics?;

    let step_kw = as_kw(increment);
    if step_kw <= 0.0 {
        return None;
    }

    // Round up: under-sizing is never acceptable, exact multiples stay.
    let rounded_kw = ceil_to_step(as_kw(load), step_kw);
    if rounded_kw < as_kw(spec.min) || rounded_kw > as_kw(spec.max) {
        return None;
    }

    let frigorific_ratio = chars
        .frigorific_ratio
        .unwrap_or(config.default_frigorific_ratio);
    let absorbed_ratio = chars
        .absorbed_ratio
        .unwrap_or(config.default_absorbed_ratio);

    Some(PowerVariant {
        model: format!("{base_model} - {rounded_kw} KW"),
        calorific: kw(rounded_kw),
        frigorific: kw(rounded_kw * frigorific_ratio),
        absorbed: kw(rounded_kw * absorbed_ratio),
        cop: chars.mean_cop,
        etas: chars.mean_etas,
    })
}

fn resolve_discrete(
    spec: &PowerSpec,
    variants: &[PowerVariant],
    load: Power,
    config: &SelectorConfig,
) -> Option<PowerVariant> {
    let load_kw = as_kw(load);

    // Wrong size class: even the smallest unit in the line would be
    // grossly oversized for this load.
    if as_kw(spec.min) > config.oversize_limit * load_kw {
        return None;
    }

    let mut sorted: Vec<&PowerVariant> = variants.iter().collect();
    sorted.sort_by(|a, b| a.calorific_kw().total_cmp(&b.calorific_kw()));

    sorted
        .into_iter()
        .find(|v| v.calorific_kw() >= load_kw)
        .cloned()
}
