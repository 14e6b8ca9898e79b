use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cavegen::{GeneratedCave, GenerationConfig, MapGenerator};
use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env};
use log::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Generate a cellular-automaton cave map", long_about = None)]
struct Args {
    /// TOML or JSON file with generation settings (`.json` is parsed as JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,
    #[arg(long)]
    width: Option<usize>,
    #[arg(long)]
    height: Option<usize>,
    /// Number of smoothing passes
    #[arg(long)]
    smooth_level: Option<u32>,
    /// Interior wall clusters smaller than this become floor
    #[arg(long)]
    wall_threshold: Option<usize>,
    /// Rooms smaller than this become wall
    #[arg(long)]
    room_threshold: Option<usize>,
    /// Chance in percent that an interior cell starts as wall
    #[arg(long)]
    fill_percent: Option<u32>,
    /// Seed text; takes precedence over the config file and --random-seed
    #[arg(short, long)]
    seed: Option<String>,
    /// Derive the seed from the clock instead of the configured text
    #[arg(long)]
    random_seed: bool,
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Write the map here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> Result<()> {
    Builder::from_env(Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let config = resolve_config(&args)?;
    let generator = MapGenerator::new(config).context("Invalid generation settings")?;
    let cave = generator.generate(args.seed.as_deref());

    let rendered = render(&cave, args.format)?;
    match &args.output {
        Some(path) => {
            fs::write(path, &rendered)
                .with_context(|| format!("Failed to write map to {}", path.display()))?;
            info!("wrote map to {}", path.display());
        }
        None => print!("{rendered}"),
    }

    eprintln!("Seed: {}", cave.seed);
    eprintln!("Fingerprint: {:016x}", cave.grid.fingerprint());
    Ok(())
}

fn resolve_config(args: &Args) -> Result<GenerationConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => GenerationConfig::default(),
    };

    if let Some(width) = args.width {
        config.width = width;
    }
    if let Some(height) = args.height {
        config.height = height;
    }
    if let Some(smooth_level) = args.smooth_level {
        config.smooth_level = smooth_level;
    }
    if let Some(threshold) = args.wall_threshold {
        config.wall_cluster_threshold_size = threshold;
    }
    if let Some(threshold) = args.room_threshold {
        config.room_threshold_size = threshold;
    }
    if let Some(fill_percent) = args.fill_percent {
        config.random_fill_percent = fill_percent;
    }
    if args.random_seed {
        config.use_random_seed = true;
    }
    Ok(config)
}

fn load_config(path: &Path) -> Result<GenerationConfig> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read config file: {}", path.display()))?;
    let is_json = path.extension().is_some_and(|extension| extension == "json");
    let config = if is_json {
        GenerationConfig::from_json_str(&raw)
    } else {
        GenerationConfig::from_toml_str(&raw)
    };
    config.with_context(|| format!("Failed to parse config file: {}", path.display()))
}

fn render(cave: &GeneratedCave, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(cave.grid.to_string()),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(cave)
                .with_context(|| "Failed to serialize cave as JSON")?;
            json.push('\n');
            Ok(json)
        }
    }
}
