//! Image info command.
//!
//! Displays format, dimensions and alpha coverage.

use crate::{InfoArgs, RunContext};
use anyhow::Result;
use rasterfx_core::{PixelSource, TaggedImage};
use rasterfx_io::Source;

/// Alpha coverage summary.
#[derive(Debug, PartialEq, Eq)]
struct AlphaStats {
    min: u8,
    max: u8,
    transparent: u64,
}

/// Runs the info command.
pub fn run(args: InfoArgs, ctx: &RunContext) -> Result<()> {
    for location in &args.input {
        let image = super::load_image(location)?;
        print_text(location, &image, ctx.verbose);

        if args.input.len() > 1 {
            println!();
        }
    }

    Ok(())
}

fn print_text(location: &str, image: &TaggedImage, verbose: u8) {
    let buffer = image.buffer();
    println!("{}", location);
    println!("  Format:     {}", image.format_tag());
    println!("  Resolution: {}x{}", image.width(), image.height());
    println!("  Pixels:     {}", buffer.bounds().area());
    println!("  Memory:     {}", super::format_size(buffer.data().len() as u64));

    if let Ok(Source::Path(path)) = Source::parse(location) {
        if let Ok(meta) = std::fs::metadata(&path) {
            println!("  File size:  {}", super::format_size(meta.len()));
        }
    }

    if let Some(stats) = alpha_stats(buffer.data()) {
        if stats.min == 255 {
            println!("  Alpha:      opaque");
        } else {
            println!("  Alpha:      {}..{}", stats.min, stats.max);
            if verbose > 0 {
                println!("  Transparent pixels: {}", stats.transparent);
            }
        }
    }
}

fn alpha_stats(rgba: &[u8]) -> Option<AlphaStats> {
    let mut alphas = rgba.chunks_exact(4).map(|px| px[3]).peekable();
    alphas.peek()?;

    let mut stats = AlphaStats {
        min: u8::MAX,
        max: 0,
        transparent: 0,
    };
    for a in alphas {
        stats.min = stats.min.min(a);
        stats.max = stats.max.max(a);
        if a == 0 {
            stats.transparent += 1;
        }
    }
    Some(stats)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alpha_stats() {
        assert_eq!(alpha_stats(&[]), None);
        assert_eq!(
            alpha_stats(&[0, 0, 0, 255, 1, 1, 1, 0, 2, 2, 2, 128]),
            Some(AlphaStats {
                min: 0,
                max: 255,
                transparent: 1
            })
        );
    }
}
