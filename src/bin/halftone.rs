use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use halftone::{HalftoneParams, Preset, RenderMode, RenderThreading};

#[derive(Parser, Debug)]
#[command(name = "halftone", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render an image as a CMYK halftone PNG.
    Render(RenderArgs),
    /// Print built-in presets as JSON.
    Presets(PresetsArgs),
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Input image (any format the `image` crate decodes).
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output PNG path.
    #[arg(long, default_value = halftone::DEFAULT_OUTPUT_NAME)]
    out: PathBuf,

    /// Starting preset.
    #[arg(long, default_value_t = Preset::Default)]
    preset: Preset,

    /// JSON parameter file layered over the preset (partial objects allowed).
    #[arg(long)]
    params: Option<PathBuf>,

    /// Dot synthesis mode (dots, ink, sharp).
    #[arg(long)]
    mode: Option<RenderMode>,

    /// Halftone cell size in pixels before scaling.
    #[arg(long)]
    dot_size: Option<f64>,

    /// Multiplier on the dot size.
    #[arg(long)]
    scale: Option<f64>,

    /// Longest output side when no explicit size is given.
    #[arg(long, default_value_t = halftone::DEFAULT_MAX_SIDE)]
    max_size: u32,

    /// Explicit output width (requires --height).
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Explicit output height (requires --width).
    #[arg(long, requires = "width")]
    height: Option<u32>,

    /// Override rayon worker threads.
    #[arg(long)]
    threads: Option<usize>,

    /// Render on the calling thread only.
    #[arg(long, default_value_t = false)]
    serial: bool,
}

#[derive(Parser, Debug)]
struct PresetsArgs {
    /// Print only this preset.
    #[arg(long)]
    name: Option<Preset>,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "halftone=info".into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Render(args) => cmd_render(args),
        Command::Presets(args) => cmd_presets(args),
    }
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let params = resolve_params(&args)?;
    let source = halftone::open_image(&args.in_path)?;

    let (width, height) = match (args.width, args.height) {
        (Some(w), Some(h)) => (w, h),
        _ => halftone::fit_within(source.width(), source.height(), args.max_size),
    };
    tracing::info!(
        input = %args.in_path.display(),
        width,
        height,
        mode = params.mode.name(),
        "rendering"
    );

    let threading = RenderThreading {
        parallel: !args.serial,
        threads: args.threads,
    };
    let frame = halftone::render_with_threading(&source, width, height, &params, &threading)
        .with_context(|| format!("render '{}'", args.in_path.display()))?;
    frame.save_png(&args.out)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

/// Preset, then params file, then individual flags.
fn resolve_params(args: &RenderArgs) -> anyhow::Result<HalftoneParams> {
    let mut params = args.preset.params();
    if let Some(path) = &args.params {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read params '{}'", path.display()))?;
        let overrides: serde_json::Value = serde_json::from_str(&text)
            .with_context(|| format!("parse params '{}'", path.display()))?;
        let mut merged = serde_json::to_value(&params).context("serialize preset")?;
        merge_json(&mut merged, overrides);
        params = serde_json::from_value(merged)
            .with_context(|| format!("invalid params '{}'", path.display()))?;
    }
    if let Some(mode) = args.mode {
        params.mode = mode;
    }
    if let Some(dot_size) = args.dot_size {
        params.dot_size = dot_size;
    }
    if let Some(scale) = args.scale {
        params.scale = scale;
    }
    Ok(params)
}

/// Recursively overlay `patch` onto `base`; objects merge key by key, anything else replaces.
fn merge_json(base: &mut serde_json::Value, patch: serde_json::Value) {
    match (base, patch) {
        (serde_json::Value::Object(base), serde_json::Value::Object(patch)) => {
            for (key, value) in patch {
                match base.get_mut(&key) {
                    Some(slot) => merge_json(slot, value),
                    None => {
                        base.insert(key, value);
                    }
                }
            }
        }
        (base, patch) => *base = patch,
    }
}

fn cmd_presets(args: PresetsArgs) -> anyhow::Result<()> {
    let json = match args.name {
        Some(preset) => preset.params().to_json_pretty()?,
        None => {
            let mut all = serde_json::Map::new();
            for preset in Preset::ALL {
                all.insert(
                    preset.name().to_owned(),
                    serde_json::to_value(preset.params()).context("serialize preset")?,
                );
            }
            serde_json::to_string_pretty(&all).context("serialize presets")?
        }
    };
    println!("{json}");
    Ok(())
}
