//! Compile, lint, and get advice for an image prompt from the command line.
//!
//! # Examples
//!
//! ```sh
//! # Prose prompt for ChatGPT Image 1.5
//! volcano --subject "a fox" --descriptor running --descriptor forest
//!
//! # Dense prompt with negatives, pro-level linting, JSON output
//! volcano --model nano_banana_pro --mode pro \
//!   --subject "a fox" --descriptor running --negative blurry --json
//!
//! # Start from a saved state and layer a style pack on top
//! volcano --input state.json --style-pack art-nouveau.json
//!
//! # Print the JSON Schema for state files
//! volcano --schema
//! ```

use clap::Parser;
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use volcano_engine::{
    Engine, EngineConfig, LearningMode, ModelId, StudioReport, StudioState, StylePack,
    json_schema_for,
};

/// Compile, lint, and get advice for an image prompt.
#[derive(Parser)]
#[command(name = "volcano")]
struct Cli {
    // ── Input ──────────────────────────────────────────────────
    /// Main subject of the image
    #[arg(long)]
    subject: Option<String>,

    /// Descriptor token (repeatable, order is kept)
    #[arg(long = "descriptor", short = 'd')]
    descriptors: Vec<String>,

    /// Negative token (repeatable, order is kept)
    #[arg(long = "negative", short = 'n')]
    negatives: Vec<String>,

    /// Load a saved studio state (JSON) before applying other flags
    #[arg(long)]
    input: Option<PathBuf>,

    /// Apply a style pack (JSON) after the descriptors
    #[arg(long)]
    style_pack: Option<PathBuf>,

    // ── Model / mode ───────────────────────────────────────────
    /// Target model (chatgpt_image_1_5, nano_banana_pro)
    #[arg(long)]
    model: Option<ModelId>,

    /// Learning mode (beginner, intermediate, pro)
    #[arg(long)]
    mode: Option<LearningMode>,

    /// Engine config file (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    // ── Output ─────────────────────────────────────────────────
    /// Print the full report as JSON
    #[arg(long)]
    json: bool,

    /// Print the JSON Schema for studio state files and exit
    #[arg(long)]
    schema: bool,

    /// Log engine decisions to stderr (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path, what: &str) -> Result<T, String> {
    let data = std::fs::read_to_string(path)
        .map_err(|e| format!("failed to read {what} {}: {e}", path.display()))?;
    serde_json::from_str(&data).map_err(|e| format!("failed to parse {what} {}: {e}", path.display()))
}

fn build_state(cli: &Cli, config: &EngineConfig) -> Result<StudioState, String> {
    let mut state = match &cli.input {
        Some(path) => {
            let loaded: StudioState = read_json(path, "state")?;
            // Saved lists may have been edited by hand; run them through the
            // same add path as everything else.
            let mut state = StudioState {
                descriptors: Vec::new(),
                negatives: Vec::new(),
                ..loaded.clone()
            };
            state.add_descriptors(loaded.descriptors.iter().map(String::as_str));
            for token in &loaded.negatives {
                state.add_negative(token);
            }
            state
        }
        None => StudioState::from_config(config),
    };

    if let Some(subject) = &cli.subject {
        state.set_subject(subject.as_str());
    }
    if let Some(model) = cli.model {
        state.set_model(model);
    }
    if let Some(mode) = cli.mode {
        state.set_learning_mode(mode);
    }
    state.add_descriptors(cli.descriptors.iter().map(String::as_str));
    for token in &cli.negatives {
        state.add_negative(token);
    }
    if let Some(path) = &cli.style_pack {
        let pack: StylePack = read_json(path, "style pack")?;
        state.apply_style_pack(&pack);
    }

    debug!(
        "Studio state: model={} mode={} descriptors={} negatives={}",
        state.model,
        state.learning_mode,
        state.descriptors.len(),
        state.negatives.len()
    );
    Ok(state)
}

fn print_report(state: &StudioState, report: &StudioReport) {
    println!("# {} ({} mode)\n", state.model.display_name(), state.learning_mode);
    if report.compiled.is_empty() {
        println!("(nothing to compile yet: add a subject or descriptors)");
    } else {
        println!("{}", report.compiled);
    }

    if !report.warnings.is_empty() {
        println!("\n## Warnings");
        for w in &report.warnings {
            println!("- {}", w.message);
        }
    }

    println!("\n## Tips");
    for tip in &report.tips {
        println!("- {tip}");
    }

    if !report.suggestions.is_empty() {
        println!("\n## Suggested descriptors");
        for s in &report.suggestions {
            println!("- {s}");
        }
    }
}

fn run(cli: Cli) -> Result<(), String> {
    if cli.schema {
        let schema = serde_json::to_string_pretty(&json_schema_for::<StudioState>())
            .map_err(|e| format!("failed to serialize schema: {e}"))?;
        println!("{schema}");
        return Ok(());
    }

    let config = EngineConfig::load_or_default(cli.config.as_deref())?;
    let engine = Engine::new(&config);
    let state = build_state(&cli, &config)?;
    let report = state.report(&engine);

    if cli.json {
        let out = serde_json::to_string_pretty(&report)
            .map_err(|e| format!("failed to serialize report: {e}"))?;
        println!("{out}");
    } else {
        print_report(&state, &report);
    }
    Ok(())
}

fn main() {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(level)
        .init();

    if let Err(e) = run(cli) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}
