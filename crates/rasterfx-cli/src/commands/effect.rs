//! Effect commands
//!
//! `invert`, `flip`, `reflect`, `blur`, `opacity` and `pixelate` all load
//! one image, run one [`Effect`] and save the result.

use crate::{EffectArgs, RunContext};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use rasterfx_ops::Effect;
use std::time::Instant;

pub fn run(args: EffectArgs, effect: Effect, ctx: &RunContext) -> Result<()> {
    trace!(input = %args.input, output = %args.output.display(), %effect, "effect::run");

    let image = super::load_image(&args.input)?;
    info!(%effect, %image, workers = ctx.engine.parallelism(), "Applying effect");

    if ctx.verbose > 0 {
        println!("Applying {} to {} ({})", effect, args.input, image);
    }

    let start = Instant::now();
    let output = ctx
        .engine
        .apply(&image, effect)
        .with_context(|| format!("{} failed", effect.name()))?;
    debug!(elapsed_ms = start.elapsed().as_millis() as u64, "effect done");

    super::save_image(&args.output, &output, &ctx.encode)?;

    if ctx.verbose > 0 {
        println!("Wrote {}", args.output.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
    use rasterfx_io::{EncodeOptions, Format};
    use rasterfx_ops::Engine;
    use std::path::Path;

    fn context() -> RunContext {
        RunContext {
            engine: Engine::new().with_parallelism(3),
            encode: EncodeOptions::default(),
            verbose: 0,
        }
    }

    fn args(input: &Path, output: &Path) -> EffectArgs {
        EffectArgs {
            input: input.to_string_lossy().into_owned(),
            output: output.to_path_buf(),
        }
    }

    #[test]
    fn test_invert_writes_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("white.png");
        let output = dir.path().join("black.png");

        let img = PixelBuffer::filled(Bounds::from_size(5, 4), Rgba8::opaque(255, 255, 255));
        rasterfx_io::write(&input, &img, &EncodeOptions::default()).unwrap();

        run(args(&input, &output), Effect::Invert, &context()).unwrap();

        let out = rasterfx_io::read(&output).unwrap();
        assert_eq!(out.format_tag(), "png");
        assert_eq!(
            out.buffer(),
            &PixelBuffer::filled(Bounds::from_size(5, 4), Rgba8::opaque(0, 0, 0))
        );
    }

    #[test]
    fn test_unknown_extension_keeps_input_format() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.gif");
        let output = dir.path().join("out.img");

        let img = PixelBuffer::filled(Bounds::from_size(6, 6), Rgba8::opaque(0, 0, 0));
        rasterfx_io::write(&input, &img, &EncodeOptions::default()).unwrap();

        run(args(&input, &output), Effect::Mosaic(4), &context()).unwrap();

        let bytes = std::fs::read(&output).unwrap();
        assert_eq!(Format::from_bytes(&bytes), Some(Format::Gif));
    }

    #[test]
    fn test_invalid_parameter_reports_effect() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("in.png");
        let output = dir.path().join("out.png");

        let img = PixelBuffer::new(Bounds::from_size(2, 2));
        rasterfx_io::write(&input, &img, &EncodeOptions::default()).unwrap();

        let err = run(args(&input, &output), Effect::Mosaic(0), &context()).unwrap_err();
        assert!(err.to_string().contains("mosaic"));
        assert!(!output.exists());
    }
}
