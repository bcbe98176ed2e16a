//! # openFRET Command-Line Tool
//!
//! Convert, inspect, and generate openFRET single-molecule FRET datasets.
//!
//! ## Usage
//!
//! ```bash
//! # Convert a directory of per-condition CSV traces
//! openfret convert fret_data_csv fret_data.json
//!
//! # Summarize a dataset file
//! openfret info fret_data.json
//!
//! # Write a small example dataset
//! openfret demo demo_fret.json
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::path::{Path, PathBuf};

use openfret::channel::Channel;
use openfret::csv_import::load_csv_traces;
use openfret::dataset::Dataset;
use openfret::reader::read_dataset;
use openfret::trace::Trace;
use openfret::writer::write_dataset;

/// openFRET - Single-Molecule FRET Dataset Tool
#[derive(Parser)]
#[command(name = "openfret")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Verbosity level (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a directory of per-condition CSV traces to an openFRET file
    Convert {
        /// Root folder; each subfolder is a condition label holding CSV traces
        #[arg(value_name = "INPUT_DIR")]
        input: PathBuf,

        /// Output JSON path (defaults to <INPUT_DIR>.json)
        #[arg(value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Dataset title (defaults to the input folder name)
        #[arg(short, long)]
        title: Option<String>,
    },

    /// Display information about an openFRET file
    Info {
        /// Input openFRET JSON file
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Generate a small demo dataset
    Demo {
        /// Output openFRET JSON path
        #[arg(value_name = "OUTPUT", default_value = "demo_fret.json")]
        output: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on verbosity
    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Convert {
            input,
            output,
            title,
        } => run_convert(input, output, title),
        Commands::Info { file } => run_info(file),
        Commands::Demo { output } => run_demo(output),
    }
}

/// Convert a CSV trace directory to an openFRET file
fn run_convert(input: PathBuf, output: Option<PathBuf>, title: Option<String>) -> Result<()> {
    if !input.is_dir() {
        anyhow::bail!("Input is not a directory: {}", input.display());
    }
    let output = output.unwrap_or_else(|| input.with_extension("json"));

    info!("Input:  {}", input.display());
    info!("Output: {}", output.display());

    let mut dataset = load_csv_traces(&input).context("CSV import failed")?;
    if let Some(title) = title {
        dataset.title = title;
    }
    write_dataset(&dataset, &output).context("Failed to write dataset")?;

    info!(
        "Converted {} traces ({} channels)",
        dataset.traces.len(),
        dataset.channel_count()
    );
    Ok(())
}

/// Print a summary of an openFRET file
fn run_info(file: PathBuf) -> Result<()> {
    let dataset =
        read_dataset(&file).with_context(|| format!("Failed to read {}", file.display()))?;
    print!("{}", format_summary(&file, &dataset));
    Ok(())
}

/// Render the `info` summary, colorized when the `colorized_output` feature
/// is enabled
fn format_summary(path: &Path, dataset: &Dataset) -> String {
    let mut fields: Vec<(&str, String)> = vec![("Title", dataset.title.clone())];
    if let Some(ref description) = dataset.description {
        fields.push(("Description", description.clone()));
    }
    if let Some(ref experiment_type) = dataset.experiment_type {
        fields.push(("Experiment type", experiment_type.clone()));
    }
    if let Some(ref authors) = dataset.authors {
        fields.push(("Authors", authors.join(", ")));
    }
    if let Some(ref institution) = dataset.institution {
        fields.push(("Institution", institution.clone()));
    }
    if let Some(ref date) = dataset.date {
        fields.push(("Date", date.clone()));
    }
    fields.push(("Traces", dataset.traces.len().to_string()));
    fields.push(("Channels", dataset.channel_count().to_string()));
    if !dataset.metadata.is_empty() {
        fields.push(("Metadata keys", dataset.metadata.len().to_string()));
    }

    #[cfg(feature = "colorized_output")]
    {
        use console::style;

        let mut out = String::new();
        out.push_str(&format!("{}\n", style("openFRET Dataset").bold().cyan()));
        out.push_str(&format!("{}\n", style("================").cyan()));
        out.push_str(&format!("{}: {}\n\n", style("File").bold(), path.display()));
        for (label, value) in fields {
            out.push_str(&format!("{}: {}\n", style(label).bold(), value));
        }
        out
    }

    #[cfg(not(feature = "colorized_output"))]
    {
        let mut out = String::new();
        out.push_str("openFRET Dataset\n");
        out.push_str("================\n");
        out.push_str(&format!("File: {}\n\n", path.display()));
        for (label, value) in fields {
            out.push_str(&format!("{label}: {value}\n"));
        }
        out
    }
}

/// Write a small example dataset
fn run_demo(output: PathBuf) -> Result<()> {
    info!("Writing demo dataset to {}", output.display());

    // Two-color trace with a FRET transition halfway through the recording.
    let frames = 100;
    let (donor, acceptor): (Vec<f64>, Vec<f64>) = (0..frames)
        .map(|i| {
            let ripple = 40.0 * (i as f64 * 0.7).sin();
            if i < frames / 2 {
                (200.0 + ripple, 1000.0 - ripple)
            } else {
                (1000.0 + ripple, 200.0 - ripple)
            }
        })
        .unzip();

    let mut donor_channel = Channel::new("donor", donor);
    donor_channel.excitation_wavelength = Some(488.0);
    donor_channel.emission_wavelength = Some(520.0);
    donor_channel.exposure_time = Some(0.1);

    let mut acceptor_channel = Channel::new("acceptor", acceptor);
    acceptor_channel.excitation_wavelength = Some(532.0);
    acceptor_channel.emission_wavelength = Some(580.0);
    acceptor_channel.exposure_time = Some(0.1);

    let mut trace = Trace::new(vec![donor_channel, acceptor_channel]);
    trace.metadata.insert("molecule_id", "1");

    let mut dataset = Dataset::new("My FRET Experiment");
    dataset.description = Some("FRET data of protein folding".to_string());
    dataset.experiment_type = Some("2-Color FRET".to_string());
    dataset.authors = Some(vec!["John Doe".to_string(), "Jane Smith".to_string()]);
    dataset.institution = Some("University X".to_string());
    dataset.set_date(chrono::Local::now().date_naive());
    dataset.metadata.insert("experiment_id", "123");
    dataset.sample_details.buffer_conditions = Some("Phosphate buffer".to_string());
    dataset.sample_details.other_details.insert("ph", 7.4);
    dataset.instrument_details.microscope = Some("Olympus IX83".to_string());
    dataset
        .instrument_details
        .other_details
        .insert("objective", "60x oil 1.5 NA");
    dataset.traces.push(trace);

    write_dataset(&dataset, &output).context("Failed to write demo dataset")?;

    info!(
        "Wrote {} traces ({} channels)",
        dataset.traces.len(),
        dataset.channel_count()
    );
    Ok(())
}
