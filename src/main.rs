use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use dither::error::AppError;
use dither::models::{AppConfig, PaletteSpec};
use dither::services::{run, RunOptions};

#[derive(Parser, Debug)]
#[command(name = "dither")]
#[command(about = "Reduce an image to a small palette with optional Floyd-Steinberg dithering")]
struct Cli {
    /// Palette: rgb, bw[.levels], custom.size (colors from stdin) or auto.size
    #[arg(short, long)]
    palette: Option<String>,

    /// Disable dithering, map every pixel to its nearest palette color
    #[arg(short = 'd', long = "no-dither")]
    no_dither: bool,

    /// Print the palette to stdout, one "R G B" line per color
    #[arg(short, long)]
    verbose: bool,

    /// YAML file with default palette/dither/verbose settings [env: DITHER_CONFIG]
    #[arg(long)]
    config: Option<PathBuf>,

    /// Input image (.png or .ppm)
    input: PathBuf,

    /// Output image (.png or .ppm)
    output: PathBuf,
}

/// Merge flags over file defaults. Flags win.
fn build_options(cli: &Cli, config: &AppConfig) -> Result<RunOptions, AppError> {
    let palette = match cli.palette.as_deref().or(config.palette.as_deref()) {
        Some(id) => id.parse::<PaletteSpec>()?,
        None => PaletteSpec::default(),
    };
    Ok(RunOptions {
        input: cli.input.clone(),
        output: cli.output.clone(),
        palette,
        dither: config.dither && !cli.no_dither,
        verbose: config.verbose || cli.verbose,
    })
}

fn try_main(cli: Cli) -> anyhow::Result<()> {
    let config = AppConfig::load(cli.config.as_deref());
    let options = build_options(&cli, &config)?;
    tracing::debug!(?options, "Resolved options");

    let stdin = std::io::stdin();
    let mut stdout = std::io::stdout().lock();
    let summary = run(&options, stdin.lock(), &mut stdout)
        .with_context(|| format!("Failed to process {}", options.input.display()))?;

    tracing::info!(
        output = %options.output.display(),
        width = summary.width,
        height = summary.height,
        colors = summary.palette.len(),
        "Done"
    );
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // stdout is reserved for the palette dump
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "dither=warn,palette_dither=warn".into()),
        )
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time(),
        )
        .init();

    match try_main(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<AppError>().map_or(1, AppError::exit_code);
            ExitCode::from(code)
        }
    }
}
