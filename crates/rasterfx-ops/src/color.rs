//! Per-pixel color effects: inversion and alpha scaling.
//!
//! Both effects work on wide samples and narrow once, when the destination
//! pixel is written.
//!
//! # Example
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, Rgba8};
//! use rasterfx_ops::color::{alpha_scale, invert};
//!
//! let img = PixelBuffer::filled(Bounds::from_size(4, 4), Rgba8::opaque(255, 255, 255));
//!
//! let negative = invert(&img);
//! assert_eq!(negative.buffer().pixel(3, 3), Rgba8::opaque(0, 0, 0));
//!
//! let ghost = alpha_scale(&img, 0.0).unwrap();
//! assert_eq!(ghost.buffer().pixel(0, 0), Rgba8::new(255, 255, 255, 0));
//! ```

use rasterfx_core::{narrow, PixelSource, Rgba16, Rgba8, TaggedImage};
#[allow(unused_imports)]
use tracing::{debug, trace};

use crate::parallel::map_pixels;
use crate::{Engine, OpsError, OpsResult};

/// Inverts colors relative to alpha, on the default [`Engine`].
///
/// Each color channel becomes `alpha - channel` (wide scale), alpha is kept.
/// On opaque pixels this is the familiar `255 - v`; on translucent pixels it
/// matches negation in a premultiplied color model. Channels larger than
/// alpha saturate at zero.
///
/// The result carries the source's format tag, or `"png"` if it has none.
pub fn invert<S: PixelSource + ?Sized>(src: &S) -> TaggedImage {
    invert_with(&Engine::default(), src)
}

/// [`invert`] with an explicit engine.
pub fn invert_with<S: PixelSource + ?Sized>(engine: &Engine, src: &S) -> TaggedImage {
    let bounds = src.bounds();
    trace!(width = bounds.width(), height = bounds.height(), "invert");

    let dst = map_pixels(engine, bounds, |x, y| invert_sample(src.sample(x, y)));
    TaggedImage::new(dst, src.format())
}

/// Scales alpha by `opacity`, on the default [`Engine`].
///
/// Colors pass through unchanged. The new alpha is
/// `floor(alpha_wide * opacity) >> 8`. Zero opacity leaves colors intact
/// under a fully transparent alpha.
///
/// # Errors
///
/// [`OpsError::InvalidParameter`] if `opacity` is outside `[0, 1]` or NaN.
pub fn alpha_scale<S: PixelSource + ?Sized>(src: &S, opacity: f64) -> OpsResult<TaggedImage> {
    alpha_scale_with(&Engine::default(), src, opacity)
}

/// [`alpha_scale`] with an explicit engine.
pub fn alpha_scale_with<S: PixelSource + ?Sized>(
    engine: &Engine,
    src: &S,
    opacity: f64,
) -> OpsResult<TaggedImage> {
    if !(0.0..=1.0).contains(&opacity) {
        return Err(OpsError::InvalidParameter(format!(
            "opacity must be between 0 and 1, got {}",
            opacity
        )));
    }

    let bounds = src.bounds();
    trace!(width = bounds.width(), height = bounds.height(), opacity, "alpha_scale");

    let dst = map_pixels(engine, bounds, |x, y| scale_alpha(src.sample(x, y), opacity));
    Ok(TaggedImage::new(dst, src.format()))
}

#[inline]
fn invert_sample(s: Rgba16) -> Rgba8 {
    let a = s.a();
    Rgba8::new(
        narrow(a.saturating_sub(s.r()) as u32),
        narrow(a.saturating_sub(s.g()) as u32),
        narrow(a.saturating_sub(s.b()) as u32),
        narrow(a as u32),
    )
}

#[inline]
fn scale_alpha(s: Rgba16, opacity: f64) -> Rgba8 {
    let alpha = (s.a() as f64 * opacity).floor() as u32;
    Rgba8::new(
        narrow(s.r() as u32),
        narrow(s.g() as u32),
        narrow(s.b() as u32),
        narrow(alpha),
    )
}
