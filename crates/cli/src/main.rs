mod settings;

use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;

use blur_engine_core::advice::domain::blur_advisor::BlurAdvisor;
use blur_engine_core::advice::infrastructure::command_advisor::CommandAdvisor;
use blur_engine_core::advice::infrastructure::fallback_advisor::FallbackAdvisor;
use blur_engine_core::imaging::domain::image_reader::ImageReader;
use blur_engine_core::imaging::domain::is_image;
use blur_engine_core::imaging::infrastructure::image_file_reader::ImageFileReader;
use blur_engine_core::imaging::infrastructure::image_file_writer::ImageFileWriter;
use blur_engine_core::pipeline::blur_image_use_case::BlurImageUseCase;
use blur_engine_core::pipeline::blur_settings::BlurSettings;
use blur_engine_core::shared::constants::PREVIEW_MAX_DIMENSION;
use blur_engine_core::shared::intensity::validate_intensity;
use blur_engine_core::BlurAlgorithm;

use settings::Settings;

/// Blur an image with a Gaussian, box, or motion filter.
#[derive(Parser, Debug)]
#[command(name = "blur-engine")]
struct Cli {
    /// Input image file.
    input: PathBuf,

    /// Output image file; the format follows the extension.
    output: PathBuf,

    /// Blur algorithm: gaussian, box, or motion.
    #[arg(long)]
    algorithm: Option<BlurAlgorithm>,

    /// Blur intensity (1-30).
    #[arg(long, allow_negative_numbers = true)]
    intensity: Option<i64>,

    /// Downscale so neither side exceeds this many pixels before blurring.
    #[arg(long, conflicts_with = "preview")]
    max_dimension: Option<u32>,

    /// Shorthand for --max-dimension 1200.
    #[arg(long)]
    preview: bool,

    /// Describe the desired effect and let the advisor pick the settings.
    #[arg(long)]
    goal: Option<String>,

    /// Program that answers --goal with a JSON suggestion on stdout.
    #[arg(long, requires = "goal")]
    advisor: Option<PathBuf>,

    /// Remember the resolved algorithm and intensity for future runs.
    #[arg(long)]
    save_defaults: bool,
}

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    validate(&cli)?;

    let saved = Settings::load();
    let advisor = match &cli.advisor {
        Some(program) => FallbackAdvisor::new(CommandAdvisor::new(program)),
        None => FallbackAdvisor::unavailable(),
    };
    let blur = resolve_settings(&cli, saved.blur, &advisor);

    if cli.save_defaults {
        let path = Settings { blur }.save()?;
        log::info!("Saved defaults to {}", path.display());
    }

    let use_case = BlurImageUseCase::new(build_reader(&cli), Box::new(ImageFileWriter::new()), blur);
    use_case.execute(&cli.input, &cli.output)?;
    log::info!("Output written to {}", cli.output.display());
    Ok(())
}

/// Flags win over an advisor suggestion, which wins over saved defaults.
fn resolve_settings<A: BlurAdvisor>(
    cli: &Cli,
    saved: BlurSettings,
    advisor: &FallbackAdvisor<A>,
) -> BlurSettings {
    let mut settings = saved;

    if let Some(goal) = &cli.goal {
        let suggestion = advisor.suggest_or_fallback(goal);
        eprintln!(
            "Suggested {} at intensity {}: {}",
            suggestion.algorithm, suggestion.intensity, suggestion.reasoning
        );
        settings = BlurSettings::from_suggestion(&suggestion);
    }
    if let Some(algorithm) = cli.algorithm {
        settings.algorithm = algorithm;
    }
    if let Some(intensity) = cli.intensity {
        settings.intensity = intensity as u32;
    }
    settings
}

fn build_reader(cli: &Cli) -> Box<dyn ImageReader> {
    let max = if cli.preview {
        Some(PREVIEW_MAX_DIMENSION)
    } else {
        cli.max_dimension
    };
    match max {
        Some(max) => Box::new(ImageFileReader::new().with_max_dimension(max)),
        None => Box::new(ImageFileReader::new()),
    }
}

fn validate(cli: &Cli) -> Result<(), Box<dyn std::error::Error>> {
    if !cli.input.exists() {
        return Err(format!("Input file not found: {}", cli.input.display()).into());
    }
    if !is_image(&cli.output) {
        return Err(format!(
            "Output must have an image extension, got {}",
            cli.output.display()
        )
        .into());
    }
    if let Some(intensity) = cli.intensity {
        validate_intensity(intensity)?;
    }
    if cli.max_dimension == Some(0) {
        return Err("Max dimension must be positive".into());
    }
    if same_file(&cli.input, &cli.output) {
        log::warn!("Output overwrites the input file {}", cli.input.display());
    }
    Ok(())
}

fn same_file(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
