use clap::{Parser, Subcommand};
use hs_catalog::model::Product;
use hs_catalog::{CatalogError, load_catalog, validate_catalog};
use hs_core::units::{as_kw, celsius, kw};
use hs_select::{SelectError, Selection, SelectorConfig, SizingRequest, filter_compatible};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hs-cli")]
#[command(about = "Heatsizer CLI - Heat-pump catalog sizing tool", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate catalog file syntax and structure
    Validate {
        /// Path to the catalog YAML/JSON file
        catalog_path: PathBuf,
    },
    /// List products in a catalog
    Products {
        /// Path to the catalog YAML/JSON file
        catalog_path: PathBuf,
        /// Optional substring query over id, name, and tags
        query: Option<String>,
    },
    /// Size a heating load against a catalog
    Size {
        /// Path to the catalog YAML/JSON file
        catalog_path: PathBuf,
        /// Required heat loss in kW
        #[arg(long)]
        load_kw: f64,
        /// Requested heat-pump type tag (e.g. air-water)
        #[arg(long)]
        hp_type: String,
        /// Requested system tag (e.g. monobloc, split)
        #[arg(long)]
        system: String,
        /// Emitter kind, informational (e.g. underfloor, radiators)
        #[arg(long, default_value = "")]
        emitter_type: String,
        /// Required emitter operating temperature in degrees Celsius
        #[arg(long)]
        emitter_temp_c: f64,
        /// Override the oversize rejection factor (default 1.5)
        #[arg(long)]
        oversize_limit: Option<f64>,
        /// Emit the result as JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Request error: {0}")]
    Request(#[from] SelectError),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

fn main() -> CliResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { catalog_path } => cmd_validate(&catalog_path),
        Commands::Products {
            catalog_path,
            query,
        } => cmd_products(&catalog_path, query.as_deref()),
        Commands::Size {
            catalog_path,
            load_kw,
            hp_type,
            system,
            emitter_type,
            emitter_temp_c,
            oversize_limit,
            json,
        } => cmd_size(
            &catalog_path,
            load_kw,
            hp_type,
            system,
            emitter_type,
            emitter_temp_c,
            oversize_limit,
            json,
        ),
    }
}

fn load_products(catalog_path: &Path) -> CliResult<Vec<Product>> {
    let catalog = load_catalog(catalog_path)?;
    validate_catalog(&catalog).map_err(CatalogError::from)?;
    Ok(catalog.to_model())
}

fn cmd_validate(catalog_path: &Path) -> CliResult<()> {
    let catalog = load_catalog(catalog_path)?;
    validate_catalog(&catalog).map_err(CatalogError::from)?;
    println!(
        "OK: {} product(s), schema version {}",
        catalog.products.len(),
        catalog.version
    );
    Ok(())
}

fn cmd_products(catalog_path: &Path, query: Option<&str>) -> CliResult<()> {
    let products = load_products(catalog_path)?;
    let query = query.unwrap_or("");

    let mut shown = 0;
    for product in products.iter().filter(|p| p.matches_query(query)) {
        let mut capabilities = Vec::new();
        if product.free_cooling {
            capabilities.push("free-cooling");
        }
        if product.pool_kit {
            capabilities.push("pool-kit");
        }

        println!(
            "{:<16} {:<24} {:>5.1}-{:>5.1} kW  tags: {}{}",
            product.id,
            product.name,
            as_kw(product.power.min),
            as_kw(product.power.max),
            product.tags.join(", "),
            if capabilities.is_empty() {
                String::new()
            } else {
                format!("  [{}]", capabilities.join(", "))
            }
        );
        shown += 1;
    }

    println!("{shown} product(s)");
    Ok(())
}

#[derive(Serialize)]
struct SelectionReport {
    product_id: String,
    product_name: String,
    model: String,
    calorific_kw: f64,
    frigorific_kw: f64,
    absorbed_kw: f64,
    cop: f64,
    etas: f64,
    free_cooling: bool,
    pool_kit: bool,
}

impl SelectionReport {
    fn from_selection(selection: &Selection) -> Self {
        Self {
            product_id: selection.product.id.clone(),
            product_name: selection.product.name.clone(),
            model: selection.variant.model.clone(),
            calorific_kw: as_kw(selection.variant.calorific),
            frigorific_kw: as_kw(selection.variant.frigorific),
            absorbed_kw: as_kw(selection.variant.absorbed),
            cop: selection.variant.cop,
            etas: selection.variant.etas,
            free_cooling: selection.product.free_cooling,
            pool_kit: selection.product.pool_kit,
        }
    }
}

#[allow(clippy::too_many_arguments)]
fn cmd_size(
    catalog_path: &Path,
    load_kw: f64,
    hp_type: String,
    system: String,
    emitter_type: String,
    emitter_temp_c: f64,
    oversize_limit: Option<f64>,
    json: bool,
) -> CliResult<()> {
    let products = load_products(catalog_path)?;

    let request = SizingRequest::new(
        kw(load_kw),
        hp_type,
        system,
        emitter_type,
        celsius(emitter_temp_c),
    )?;

    let mut config = SelectorConfig::default();
    if let Some(limit) = oversize_limit {
        config.oversize_limit = limit;
    }

    let selections = filter_compatible(&products, &request, &config);

    if json {
        let reports: Vec<SelectionReport> = selections
            .iter()
            .map(SelectionReport::from_selection)
            .collect();
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    if selections.is_empty() {
        println!("No compatible product for {load_kw} kW ({emitter_temp_c} C emitter)");
        return Ok(());
    }

    for selection in &selections {
        let report = SelectionReport::from_selection(selection);
        println!(
            "{:<16} {:<24} {:<16} {:>5.1} kW cal  {:>5.1} kW frigo  {:>5.2} kW abs  COP {:.2}  Etas {:.2}",
            report.product_id,
            report.product_name,
            report.model,
            report.calorific_kw,
            report.frigorific_kw,
            report.absorbed_kw,
            report.cop,
            report.etas
        );
    }
    println!("{} compatible product(s)", selections.len());

    Ok(())
}
