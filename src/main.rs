use chrono::Datelike;
use clap::Parser;
use color_eyre::Result;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use pool_estimator::engine::{
    EngineConfig, EstimateEngine, RoundingStrategy, DEFAULT_TURNOVER_HOURS,
};
use pool_estimator::export::{
    export_csv, export_json, whatsapp_message, whatsapp_url, ClientInfo, DocumentCounter,
    DocumentNumberer, EstimateDocument, FileCounter, InMemoryCounter,
};
use pool_estimator::input::{load_config, load_context};
use pool_estimator::model::{CalculationResult, Dimensions};
use pool_estimator::tables::{Region, Season};
use pool_estimator::validation::validate_dimensions;

#[derive(Parser, Debug)]
#[command(name = "pool-estimator")]
#[command(about = "Pool Estimator - priced construction estimate from a pool selection")]
#[command(version)]
struct Args {
    /// Path to calculation context JSON (selection, dimensions, region, season)
    #[arg(required = true)]
    context: PathBuf,

    /// Engine configuration JSON
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Tax rate in percent
    #[arg(long)]
    tax_rate: Option<f64>,

    /// Rounding strategy: round, floor or ceil
    #[arg(long)]
    rounding: Option<RoundingStrategy>,

    /// Do not apply seasonal coefficients to works
    #[arg(long)]
    no_seasonal: bool,

    /// Region key, overrides the context file
    #[arg(long)]
    region: Option<Region>,

    /// Season, overrides the context file
    #[arg(long)]
    season: Option<Season>,

    /// Export to CSV (optional output path)
    #[arg(long, value_name = "FILE")]
    csv: Option<PathBuf>,

    /// Export to JSON (optional output path)
    #[arg(long, value_name = "FILE")]
    json: Option<PathBuf>,

    /// Print a WhatsApp link with the offer for this client phone
    #[arg(long, value_name = "PHONE")]
    whatsapp: Option<String>,

    /// Client name used in the WhatsApp greeting
    #[arg(long)]
    client: Option<String>,

    /// Persistent document counter JSON
    #[arg(long, value_name = "FILE")]
    counter: Option<PathBuf>,

    /// Year for document numbering (defaults to the current year)
    #[arg(long)]
    year: Option<i32>,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "pool_estimator=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };
    if let Some(tax_rate) = args.tax_rate {
        config.tax_rate = tax_rate;
    }
    if let Some(rounding) = args.rounding {
        config.rounding_strategy = rounding;
    }
    if args.no_seasonal {
        config.apply_seasonal_coefficients = false;
    }

    let mut context = load_context(&args.context)?;
    if let Some(region) = args.region.clone() {
        context.region = Some(region);
    }
    if let Some(season) = args.season {
        context.season = Some(season);
    }

    if let Err(e) = validate_dimensions(&context.resolved_dimensions()) {
        tracing::warn!("{e}; estimating anyway");
    }

    let engine = EstimateEngine::new(config);
    let result = engine.calculate(&context);
    print_summary(&engine, &context.resolved_dimensions(), &result);

    let year = args.year.unwrap_or_else(|| chrono::Local::now().year());
    let number = match &args.counter {
        Some(path) => next_number(FileCounter::new(path), year)?,
        None => next_number(InMemoryCounter::default(), year)?,
    };
    println!("Document: {number}");

    if let Some(csv_path) = &args.csv {
        export_csv(&result, csv_path)?;
        println!("Exported to CSV: {}", csv_path.display());
    }

    if let Some(json_path) = &args.json {
        export_json(&EstimateDocument::new(&number, &result), json_path)?;
        println!("Exported to JSON: {}", json_path.display());
    }

    if let Some(phone) = &args.whatsapp {
        let client = ClientInfo {
            name: args.client.clone(),
            ..ClientInfo::default()
        };
        let url = whatsapp_url(phone, &whatsapp_message(&client, &result))?;
        println!("WhatsApp: {url}");
    }

    Ok(())
}

fn next_number(counter: impl DocumentCounter, year: i32) -> Result<String> {
    Ok(DocumentNumberer::new(counter).next_number(year)?)
}

fn print_summary(engine: &EstimateEngine, dimensions: &Dimensions, result: &CalculationResult) {
    for item in &result.items {
        println!(
            "{:<48} {:>8} {:<8} {:>12} {:>12}",
            item.name, item.quantity, item.unit, item.price, item.total
        );
    }
    println!();
    println!("Volume:       {} m³", result.volume);
    println!("Surface area: {} m²", result.surface_area);
    println!(
        "Filtration:   {} m³/h (advisory)",
        engine.calculate_required_flow(result.volume, DEFAULT_TURNOVER_HOURS)
    );
    println!(
        "Heating:      {} kW (advisory)",
        engine.calculate_required_heating(result.volume)
    );
    let materials = engine.calculate_material_quantities(dimensions);
    println!(
        "Materials:    concrete {} m³, tiles {} m², waterproofing {} m²",
        materials.concrete, materials.tiles, materials.waterproofing
    );
    println!("Labor:        {} h", engine.calculate_labor_hours(result.volume));
    println!(
        "Timeline:     {} days",
        engine.calculate_project_timeline(result.volume).total_days()
    );
    println!();
    println!("Equipment:    {}", result.breakdown.equipment);
    println!("Works:        {}", result.breakdown.works);
    println!("Materials:    {}", result.breakdown.materials);
    println!("Additional:   {}", result.breakdown.additional);
    println!("Subtotal:     {}", result.subtotal);
    println!("Discount:     {} ({}%)", result.discount, result.discount_percent);
    println!("Tax:          {}", result.tax);
    println!("Total:        {}", result.total);
}
