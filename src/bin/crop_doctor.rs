//! Crop Doctor command-line entry point
//!
//! Usage:
//!   crop_doctor crops
//!   crop_doctor diagnose --crop rice --symptoms "brown spots on leaves, wilting" --weather "high humidity"
//!   crop_doctor demo
//!   crop_doctor interactive

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use crop_doctor::demo::DEMO_CASES;
use crop_doctor::formatters::{JsonFormatter, TextFormatter};
use crop_doctor::input::{normalize_crop, split_phrases};
use crop_doctor::{Config, DiagnosisEngine};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Symptom examples offered by the interactive prompt
const SYMPTOM_EXAMPLES: usize = 8;

#[derive(Parser)]
#[command(name = "crop_doctor")]
#[command(about = "Rule-based crop disease diagnosis", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON catalog replacing the built-in data (overrides CROP_CATALOG)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Alternative diagnoses to list after the top pick (overrides CROP_ALTERNATIVES)
    #[arg(long, global = true)]
    alternatives: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the crops in the catalog
    Crops,
    /// Diagnose one crop from comma-separated symptoms and weather
    Diagnose(DiagnoseArgs),
    /// Run the sample diagnoses
    Demo,
    /// Menu-driven diagnosis over stdin
    Interactive,
}

#[derive(Args)]
struct DiagnoseArgs {
    #[arg(long)]
    crop: String,

    /// Comma-separated symptoms
    #[arg(long, default_value = "")]
    symptoms: String,

    /// Comma-separated recent weather conditions
    #[arg(long, default_value = "")]
    weather: String,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr so JSON output on stdout stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "crop_doctor=info,warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = Config::from_env();
    if let Some(path) = cli.catalog {
        config.catalog_path = Some(path);
    }
    if let Some(n) = cli.alternatives {
        config.alternatives = n;
    }
    tracing::debug!("Configuration: {:?}", config);

    let engine = DiagnosisEngine::new(config.load_catalog()?);

    match cli.command {
        Commands::Crops => {
            for crop in engine.catalog().crop_keys() {
                println!("{}", crop);
            }
        }
        Commands::Diagnose(args) => run_diagnose(&engine, &config, args)?,
        Commands::Demo => run_demo(&engine, &mut io::stdout().lock())?,
        Commands::Interactive => {
            run_menu(&engine, &config, &mut io::stdin().lock(), &mut io::stdout().lock())?;
        }
    }

    Ok(())
}

fn run_diagnose(engine: &DiagnosisEngine, config: &Config, args: DiagnoseArgs) -> Result<()> {
    let crop = normalize_crop(&args.crop);
    let symptoms = split_phrases(&args.symptoms);
    let weather = split_phrases(&args.weather);

    let report = engine.diagnose(&crop, symptoms.as_slice(), weather.as_slice())?;

    match args.format {
        OutputFormat::Text => print!("{}", TextFormatter::format(&report, config.alternatives)),
        OutputFormat::Json => println!(
            "{}",
            JsonFormatter::format(&report).context("Failed to serialize report")?
        ),
    }

    Ok(())
}

fn run_demo(engine: &DiagnosisEngine, out: &mut impl Write) -> Result<()> {
    writeln!(out, "🌾 Crop Doctor - Sample Diagnoses")?;
    writeln!(out, "{}", "=".repeat(50))?;

    for (i, case) in DEMO_CASES.iter().enumerate() {
        writeln!(out, "\n🧪 TEST {}: {}", i + 1, case.title)?;
        let report = engine.diagnose(case.crop, case.symptoms, case.weather)?;
        writeln!(out, "{}", TextFormatter::format_summary(&report))?;
        if let Some(note) = case.note {
            writeln!(out, "({})", note)?;
        }
    }

    Ok(())
}

fn run_menu(
    engine: &DiagnosisEngine,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    writeln!(out, "🌾 Crop Doctor - Crop Disease Diagnosis")?;
    writeln!(out, "{}", "=".repeat(60))?;

    loop {
        writeln!(out, "\nChoose an option:")?;
        writeln!(out, "1. Run sample diagnoses")?;
        writeln!(out, "2. Interactive diagnosis")?;
        writeln!(out, "3. Exit")?;

        let Some(choice) = prompt(input, out, "\nEnter choice (1-3): ")? else {
            break;
        };

        match choice.as_str() {
            "1" => run_demo(engine, out)?,
            "2" => interactive_diagnosis(engine, config, input, out)?,
            "3" => {
                writeln!(out, "Thanks for using Crop Doctor! 🌾")?;
                break;
            }
            _ => writeln!(out, "Please enter 1, 2, or 3")?,
        }
    }

    Ok(())
}

fn interactive_diagnosis(
    engine: &DiagnosisEngine,
    config: &Config,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()> {
    let crops = engine.catalog().crop_keys();
    writeln!(out, "\nAvailable crops: {}", crops.join(", "))?;
    let Some(raw_crop) = prompt(input, out, "Enter your crop type: ")? else {
        return Ok(());
    };
    let crop = normalize_crop(&raw_crop);

    if engine.catalog().diseases_for(&crop).is_none() {
        writeln!(out, "Sorry, please choose from: {}", crops.join(", "))?;
        return Ok(());
    }

    writeln!(out, "\nCommon symptoms for {}:", crop)?;
    for (i, symptom) in engine
        .catalog()
        .common_symptoms(&crop, SYMPTOM_EXAMPLES)
        .iter()
        .enumerate()
    {
        writeln!(out, "{}. {}", i + 1, symptom)?;
    }

    writeln!(out, "\nDescribe the symptoms you see (separate by commas):")?;
    let symptoms = split_phrases(&prompt(input, out, "Symptoms: ")?.unwrap_or_default());

    writeln!(out, "\nRecent weather conditions (separate by commas):")?;
    writeln!(out, "Examples: high humidity, cool nights, heavy rain, drought")?;
    let weather = split_phrases(&prompt(input, out, "Weather: ")?.unwrap_or_default());

    let report = engine.diagnose(&crop, symptoms.as_slice(), weather.as_slice())?;
    writeln!(out)?;
    write!(out, "{}", TextFormatter::format(&report, config.alternatives))?;

    Ok(())
}

/// Show `message` and read one trimmed line; `None` on end of input
fn prompt(input: &mut impl BufRead, out: &mut impl Write, message: &str) -> Result<Option<String>> {
    write!(out, "{}", message)?;
    out.flush()?;

    let mut line = String::new();
    let n = input.read_line(&mut line).context("Failed to read from stdin")?;
    if n == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
