//! Convert command
//!
//! Re-encodes an image, by default in the format of the output extension.

use crate::{ConvertArgs, RunContext};
#[allow(unused_imports)]
use tracing::{debug, info, trace};
use anyhow::{Context, Result};
use rasterfx_io::Format;

pub fn run(args: ConvertArgs, ctx: &RunContext) -> Result<()> {
    trace!(input = %args.input, output = %args.output.display(), "convert::run");

    let image = super::load_image(&args.input)?;

    match args.format.as_deref() {
        Some(tag) => {
            let format: Format = tag.parse().with_context(|| format!("Invalid format: {}", tag))?;
            info!(%format, "Converting with explicit format");
            let bytes = rasterfx_io::encode_as(&image, format, &ctx.encode)
                .with_context(|| format!("Failed to encode as {}", format))?;
            std::fs::write(&args.output, bytes)
                .with_context(|| format!("Failed to save: {}", args.output.display()))?;
        }
        None => super::save_image(&args.output, &image, &ctx.encode)?,
    }

    if ctx.verbose > 0 {
        println!("Converted {} -> {}", args.input, args.output.display());
    }

    Ok(())
}
