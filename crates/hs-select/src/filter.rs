//! Catalog-wide compatibility filtering.

use crate::config::SelectorConfig;
use crate::request::SizingRequest;
use crate::resolve::resolve_variant;
use hs_catalog::model::{PowerVariant, Product};
use tracing::debug;

/// One compatible product paired with its resolved variant.
///
/// Owned records: the input catalog is never modified, so the same slice
/// can be filtered repeatedly with different requests.
#[derive(Debug, Clone, PartialEq)]
pub struct Selection {
    pub product: Product,
    pub variant: PowerVariant,
}

/// Filter `products` down to those that can satisfy `request`, each paired
/// with the smallest variant that still covers the load.
///
/// Order-preserving over the input. Catalog-level mismatches are silent
/// exclusions; this function never fails.
pub fn filter_compatible(
    products: &[Product],
    request: &SizingRequest,
    config: &SelectorConfig,
) -> Vec<Selection> {
    products
        .iter()
        .filter_map(|product| {
            if !product.has_tag(&request.heat_pump_type) {
                debug!(product = %product.id, "excluded: heat-pump type tag not present");
                return None;
            }
            if !product.has_tag(&request.system) {
                debug!(product = %product.id, "excluded: system tag not present");
                return None;
            }
            if !product.emitter_range.contains(request.emitter_temp) {
                debug!(product = %product.id, "excluded: emitter temperature out of range");
                return None;
            }

            let Some(variant) = resolve_variant(&product.power, request.heat_loss, config) else {
                debug!(product = %product.id, "excluded: no variant covers the load");
                return None;
            };

            Some(Selection {
                product: product.clone(),
                variant,
            })
        })
        .collect()
}
