//! Resale CLI binary.
//!
//! Provides the command-line front end for the resale price estimator.

mod batch;

use chrono::Datelike;
use clap::{Parser, Subcommand};
use resale::encoding::{
    AttributeSet, Category, EncoderConfig, FeatureSlot, FlatModel, FlatType, StoreyRange, Town,
};
use resale::output::{ExportFormat, Exporter, PredictionRecord};
use resale::{Pipeline, Settings, init_global};
use std::fs::File;
use std::io::{self, BufReader, Read, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "resale")]
#[command(about = "Resale: HDB flat resale price estimator", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (default: <config dir>/resale/config.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Model artifact path
    #[arg(long, global = true)]
    model: Option<PathBuf>,

    /// Feature schema artifact path
    #[arg(long, global = true)]
    features: Option<PathBuf>,

    /// Year flat age is measured against, or "current"
    #[arg(long, global = true)]
    reference_year: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the resale price of one flat
    Predict {
        /// Town, e.g. "BEDOK"
        #[arg(long)]
        town: String,

        /// Flat type, e.g. "4 ROOM"
        #[arg(long)]
        flat_type: String,

        /// Flat model, e.g. "MODEL A"
        #[arg(long)]
        flat_model: String,

        /// Floor area in square metres (30 to 200)
        #[arg(long, default_value_t = 90.0)]
        floor_area: f64,

        /// Storey range, e.g. "07 TO 09"
        #[arg(long, default_value = "01 TO 03")]
        storey_range: String,

        /// Lease commencement year (1960 to 2025)
        #[arg(long, default_value_t = 2005)]
        lease_year: i32,

        /// Output format (text, json, pretty-json or csv)
        #[arg(long, default_value = "text")]
        format: String,
    },

    /// Estimate every row of a CSV file ("-" reads stdin)
    Batch {
        /// CSV with town, flat_type, flat_model, floor_area_sqm, storey_range,
        /// lease_commence_year columns
        input: PathBuf,

        /// Output format (csv, json or pretty-json)
        #[arg(long, default_value = "csv")]
        format: String,
    },

    /// List accepted towns, flat types, flat models and storey ranges
    Options,

    /// Show how the feature schema resolves and what it does not cover
    Schema,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Options => {
            list_options();
            return Ok(());
        }
        Commands::Predict {
            ref town,
            ref flat_type,
            ref flat_model,
            floor_area,
            ref storey_range,
            lease_year,
            ref format,
        } => {
            let pipeline = load_pipeline(&cli)?;
            let attrs = AttributeSet::parse(
                town,
                flat_type,
                flat_model,
                floor_area,
                storey_range,
                lease_year,
            )?;
            predict(pipeline, &attrs, format)?;
        }
        Commands::Batch {
            ref input,
            ref format,
        } => {
            let pipeline = load_pipeline(&cli)?;
            let format: ExportFormat = format.parse()?;
            let reader: Box<dyn Read> = if input.as_os_str() == "-" {
                Box::new(io::stdin().lock())
            } else {
                Box::new(BufReader::new(File::open(input)?))
            };
            run_batch(pipeline, reader, format)?;
        }
        Commands::Schema => {
            let pipeline = load_pipeline(&cli)?;
            show_schema(pipeline);
        }
    }

    Ok(())
}

fn settings(cli: &Cli) -> Result<Settings, Box<dyn std::error::Error>> {
    let mut settings = Settings::discover(cli.config.as_deref())?;
    if let Some(model) = &cli.model {
        settings.model_path.clone_from(model);
    }
    if let Some(features) = &cli.features {
        settings.features_path.clone_from(features);
    }
    if let Some(year) = &cli.reference_year {
        settings.reference_year = parse_reference_year(year)?;
    }
    Ok(settings)
}

fn parse_reference_year(value: &str) -> Result<i32, Box<dyn std::error::Error>> {
    let year = if value.eq_ignore_ascii_case("current") {
        chrono::Local::now().year()
    } else {
        value.parse::<i32>().map_err(|_| {
            format!("Invalid reference year {value:?}: expected a year or \"current\"")
        })?
    };
    Ok(EncoderConfig::new(year)?.reference_year)
}

fn load_pipeline(cli: &Cli) -> Result<&'static Pipeline, Box<dyn std::error::Error>> {
    let settings = settings(cli)?;
    log::debug!("Using settings: {settings:?}");
    Ok(init_global(&settings)?)
}

fn predict(
    pipeline: &Pipeline,
    attrs: &AttributeSet,
    format: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    if format.eq_ignore_ascii_case("text") {
        let estimate = pipeline.estimate(attrs)?;
        println!("Estimated Resale Price: {estimate}");
        return Ok(());
    }

    let format: ExportFormat = format.parse()?;
    let record: PredictionRecord = pipeline.record(attrs)?;
    record.export_to_writer(&mut io::stdout().lock(), format)?;
    Ok(())
}

fn run_batch(
    pipeline: &Pipeline,
    reader: impl Read,
    format: ExportFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    let outcome = batch::run_batch(pipeline, reader);

    for failure in &outcome.failures {
        eprintln!("Row {}: {}", failure.row, failure.reason);
    }
    if !outcome.records.is_empty() {
        let mut stdout = io::stdout().lock();
        outcome.records.export_to_writer(&mut stdout, format)?;
        stdout.flush()?;
    }

    if outcome.failures.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} of {} rows could not be estimated",
            outcome.failures.len(),
            outcome.total()
        )
        .into())
    }
}

fn list_options() {
    fn section<C: Category>(title: &str) {
        println!("{title}:");
        for value in C::all() {
            println!("  {}", value.name());
        }
        println!();
    }

    section::<Town>("Towns");
    section::<FlatType>("Flat types");
    section::<FlatModel>("Flat models");

    println!("Storey ranges:");
    for range in StoreyRange::STANDARD {
        println!("  {range}");
    }
}

fn show_schema(pipeline: &Pipeline) {
    let layout = pipeline.encoder().layout();

    println!(
        "{} features, {} model, reference year {}\n",
        layout.len(),
        pipeline.predictor().model_kind(),
        pipeline.reference_year()
    );
    println!("{:>4}  {:<32} slot", "#", "feature");
    for (index, (name, slot)) in layout.names().iter().zip(layout.slots()).enumerate() {
        let slot = match slot {
            FeatureSlot::FloorArea => "floor area".to_string(),
            FeatureSlot::FlatAge => "flat age".to_string(),
            FeatureSlot::StoreyMedian => "storey median".to_string(),
            FeatureSlot::Town(t) => format!("town = {t}"),
            FeatureSlot::FlatType(t) => format!("flat type = {t}"),
            FeatureSlot::FlatModel(m) => format!("flat model = {m}"),
            FeatureSlot::Unused => "unused (always 0)".to_string(),
        };
        println!("{index:>4}  {name:<32} {slot}");
    }
    println!();
    print!("{}", layout.coverage());
}
