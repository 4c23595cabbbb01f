//! rfx - apply parallel pixel effects to images
//!
//! Reads PNG, JPEG or GIF from a path or URL, runs one effect and writes
//! the result in the output extension's format (or the input's).

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use rasterfx_io::{EncodeOptions, GifOptions, JpegOptions, PngCompression, PngOptions};
use rasterfx_ops::{Effect, Engine};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "rfx")]
#[command(author, version, about = "Parallel pixel effects for PNG, JPEG and GIF images")]
#[command(long_about = "
Applies one pixel effect to an image using all available cores.

Inputs may be file paths or http(s) URLs. The output format follows the
output file extension; unknown extensions keep the input's format.

Examples:
  rfx info photo.jpg                          # Show image info
  rfx invert photo.jpg -o negative.jpg        # Alpha-relative negative
  rfx flip photo.png -o upside_down.png       # Top becomes bottom
  rfx reflect photo.png -o mirrored.png       # Left becomes right
  rfx blur photo.png -r 4 -o soft.png         # 4 smoothing passes
  rfx opacity logo.png -a 0.5 -o ghost.png    # Halve alpha
  rfx pixelate https://example.com/cat.gif -r 8 -o blocks.gif
  rfx convert photo.png photo.jpg --quality 90
")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Verbose output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Number of threads (0 = auto)
    #[arg(short = 'j', long, global = true, default_value = "0")]
    threads: usize,

    /// JPEG quality (1-100)
    #[arg(long, global = true, default_value = "75")]
    quality: u8,

    /// PNG compression (fast, default)
    #[arg(long = "png-compression", global = true, default_value = "fast")]
    png_compression: PngCompression,

    /// GIF quantization speed (1 = best, 30 = fastest)
    #[arg(long = "gif-speed", global = true, default_value = "10")]
    gif_speed: i32,
}

#[derive(Subcommand)]
enum Commands {
    /// Display image information
    #[command(visible_alias = "i")]
    Info(InfoArgs),

    /// Convert image format
    #[command(visible_alias = "c")]
    Convert(ConvertArgs),

    /// Invert colors relative to alpha
    Invert(EffectArgs),

    /// Mirror top to bottom
    Flip(EffectArgs),

    /// Mirror left to right
    Reflect(EffectArgs),

    /// Iterated 5-point box blur
    Blur(BlurArgs),

    /// Scale alpha by an opacity factor
    Opacity(OpacityArgs),

    /// Block mosaic
    Pixelate(PixelateArgs),
}

#[derive(Args)]
struct InfoArgs {
    /// Input image(s), paths or URLs
    #[arg(required = true)]
    input: Vec<String>,
}

#[derive(Args)]
struct ConvertArgs {
    /// Input image, path or URL
    input: String,

    /// Output image
    output: PathBuf,

    /// Output format tag (png, jpeg, gif), overrides the extension
    #[arg(short, long)]
    format: Option<String>,
}

#[derive(Args)]
struct EffectArgs {
    /// Input image, path or URL
    input: String,

    /// Output image
    #[arg(short, long)]
    output: PathBuf,
}

#[derive(Args)]
struct BlurArgs {
    #[command(flatten)]
    io: EffectArgs,

    /// Number of smoothing passes
    #[arg(short, long, default_value = "1")]
    radius: i32,
}

#[derive(Args)]
struct OpacityArgs {
    #[command(flatten)]
    io: EffectArgs,

    /// Opacity factor in [0, 1]
    #[arg(short = 'a', long)]
    opacity: f64,
}

#[derive(Args)]
struct PixelateArgs {
    #[command(flatten)]
    io: EffectArgs,

    /// Block size in pixels
    #[arg(short, long, default_value = "8")]
    radius: i32,
}

/// Settings shared by every command.
pub struct RunContext {
    /// Effect engine sized to the thread pool.
    pub engine: Engine,
    /// Encoder settings.
    pub encode: EncodeOptions,
    /// Verbosity level.
    pub verbose: u8,
}

impl Cli {
    fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            png: PngOptions {
                compression: self.png_compression,
            },
            jpeg: JpegOptions {
                quality: self.quality,
            },
            gif: GifOptions {
                speed: self.gif_speed,
            },
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Configure thread pool
    if cli.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(cli.threads)
            .build_global()
            .context("Failed to configure thread pool")?;
    }

    let ctx = RunContext {
        engine: Engine::new(),
        encode: cli.encode_options(),
        verbose: cli.verbose,
    };

    match cli.command {
        Commands::Info(args) => commands::info::run(args, &ctx),
        Commands::Convert(args) => commands::convert::run(args, &ctx),
        Commands::Invert(args) => commands::effect::run(args, Effect::Invert, &ctx),
        Commands::Flip(args) => commands::effect::run(args, Effect::MirrorH, &ctx),
        Commands::Reflect(args) => commands::effect::run(args, Effect::MirrorV, &ctx),
        Commands::Blur(args) => commands::effect::run(args.io, Effect::BoxBlur(args.radius), &ctx),
        Commands::Opacity(args) => {
            commands::effect::run(args.io, Effect::AlphaScale(args.opacity), &ctx)
        }
        Commands::Pixelate(args) => {
            commands::effect::run(args.io, Effect::Mosaic(args.radius), &ctx)
        }
    }
}
