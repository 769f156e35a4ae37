//! End-to-end sizing over a parsed catalog.

use hs_catalog::schema::CatalogDef;
use hs_catalog::validate_catalog;
use hs_core::units::{celsius, kw};
use hs_select::{SelectorConfig, SizingRequest, filter_compatible};

const CATALOG_YAML: &str = r#"
version: 1
products:
  - id: aw-compact
    name: AirWater Compact
    tags: [air-water, monobloc, temperate]
    power:
      min_kw: 5.0
      max_kw: 12.0
      supply:
        type: Discrete
        variants:
          - { model: AWC 5, calorific_kw: 5.0, frigorific_kw: 4.1, absorbed_kw: 1.3, cop: 4.1, etas: 1.65 }
          - { model: AWC 8, calorific_kw: 8.0, frigorific_kw: 6.5, absorbed_kw: 2.0, cop: 4.0, etas: 1.62 }
          - { model: AWC 12, calorific_kw: 12.0, frigorific_kw: 9.6, absorbed_kw: 3.1, cop: 3.9, etas: 1.58 }
    emitter:
      temp_min_c: 25.0
      temp_max_c: 55.0
    pool_kit: true
  - id: aw-cascade
    name: AirWater Cascade
    tags: [air-water, monobloc]
    power:
      min_kw: 4.0
      max_kw: 20.0
      supply:
        type: Cascade
        increment_kw: 2.0
        base_model: AWK
        characteristics:
          mean_cop: 4.4
          mean_etas: 1.8
    emitter:
      temp_min_c: 25.0
      temp_max_c: 65.0
    free_cooling: true
  - id: ww-split
    name: WaterWater Split
    tags: [water-water, split]
    power:
      min_kw: 6.0
      max_kw: 18.0
      supply:
        type: Discrete
        variants:
          - { model: WWS 6, calorific_kw: 6.0, frigorific_kw: 5.0, absorbed_kw: 1.4, cop: 4.5, etas: 1.85 }
          - { model: WWS 11, calorific_kw: 11.0, frigorific_kw: 9.1, absorbed_kw: 2.5, cop: 4.4, etas: 1.82 }
    emitter:
      temp_min_c: 25.0
      temp_max_c: 60.0
  - id: aw-industrial
    name: AirWater Industrial
    tags: [air-water, monobloc]
    power:
      min_kw: 25.0
      max_kw: 60.0
      supply:
        type: Discrete
        variants:
          - { model: AWI 25, calorific_kw: 25.0, frigorific_kw: 20.0, absorbed_kw: 6.0, cop: 4.2, etas: 1.7 }
    emitter:
      temp_min_c: 25.0
      temp_max_c: 55.0
"#;

fn sized(load_kw: f64, hp_type: &str, system: &str, temp_c: f64) -> Vec<hs_select::Selection> {
    let catalog: CatalogDef = serde_yaml::from_str(CATALOG_YAML).unwrap();
    validate_catalog(&catalog).unwrap();
    let products = catalog.to_model();

    let request = SizingRequest::new(
        kw(load_kw),
        hp_type.to_string(),
        system.to_string(),
        "underfloor".to_string(),
        celsius(temp_c),
    )
    .unwrap();

    filter_compatible(&products, &request, &SelectorConfig::default())
}

#[test]
fn typical_residential_request() {
    let result = sized(7.0, "air-water", "monobloc", 35.0);

    // Industrial line excluded by the oversize rule (25 > 1.5 * 7), the
    // water-water split by its tags.
    let ids: Vec<&str> = result.iter().map(|s| s.product.id.as_str()).collect();
    assert_eq!(ids, vec!["aw-compact", "aw-cascade"]);

    assert_eq!(result[0].variant.model, "AWC 8");
    assert_eq!(result[0].variant.calorific_kw(), 8.0);

    assert_eq!(result[1].variant.model, "AWK - 8 KW");
    assert_eq!(result[1].variant.calorific_kw(), 8.0);
}

#[test]
fn high_temperature_emitter_narrows_the_field() {
    // 60 C is above the compact's 55 C window but inside the cascade's.
    let result = sized(7.0, "air-water", "monobloc", 60.0);
    let ids: Vec<&str> = result.iter().map(|s| s.product.id.as_str()).collect();
    assert_eq!(ids, vec!["aw-cascade"]);
}

#[test]
fn split_request_reaches_water_water_line() {
    let result = sized(9.0, "water-water", "split", 40.0);
    assert_eq!(result.len(), 1);
    assert_eq!(result[0].product.id, "ww-split");
    assert_eq!(result[0].variant.model, "WWS 11");
}

#[test]
fn load_beyond_every_line_yields_empty_result() {
    let result = sized(80.0, "air-water", "monobloc", 35.0);
    assert!(result.is_empty());
}

#[test]
fn repeated_sizing_is_stable() {
    let first = sized(7.0, "air-water", "monobloc", 35.0);
    let second = sized(7.0, "air-water", "monobloc", 35.0);
    assert_eq!(first, second);
}
