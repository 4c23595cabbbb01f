//! Execution configuration and runtime effect selection.
//!
//! [`Engine`] is the explicit configuration value every effect runs with.
//! It only carries the parallelism hint fed to the partitioner; it owns no
//! threads (work runs on the Rayon pool) and is cheap to copy.
//!
//! ```rust
//! use rasterfx_core::{Bounds, PixelBuffer, PixelSource, Rgba8};
//! use rasterfx_ops::{Effect, Engine};
//!
//! let img = PixelBuffer::filled(Bounds::from_size(4, 4), Rgba8::opaque(255, 255, 255));
//! let engine = Engine::new().with_parallelism(2);
//!
//! let out = engine.apply(&img, Effect::Invert).unwrap();
//! assert_eq!(out.buffer().pixel(0, 0), Rgba8::opaque(0, 0, 0));
//! assert_eq!(out.format(), Some("png"));
//! ```

use std::fmt;

use rasterfx_core::{PixelSource, TaggedImage};

use crate::partition::{partition, WorkRange};
use crate::{color, filter, mosaic, transform, OpsResult};

/// Effect engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Engine {
    parallelism: usize,
}

impl Engine {
    /// Creates an engine sized to the current Rayon pool.
    pub fn new() -> Self {
        Self {
            parallelism: rayon::current_num_threads(),
        }
    }

    /// Sets the maximum number of workers per effect call (at least 1).
    pub fn with_parallelism(mut self, workers: usize) -> Self {
        self.parallelism = workers.max(1);
        self
    }

    /// Maximum number of workers per effect call.
    #[inline]
    pub fn parallelism(&self) -> usize {
        self.parallelism
    }

    /// Partitions `rows` with this engine's parallelism.
    #[inline]
    pub fn row_ranges(&self, rows: usize) -> Vec<WorkRange> {
        partition(rows, self.parallelism)
    }

    /// Color negation, see [`color::invert`].
    pub fn invert<S: PixelSource + ?Sized>(&self, src: &S) -> TaggedImage {
        color::invert_with(self, src)
    }

    /// Top/bottom mirror, see [`transform::mirror_h`].
    pub fn mirror_h<S: PixelSource + ?Sized>(&self, src: &S) -> TaggedImage {
        transform::mirror_h_with(self, src)
    }

    /// Left/right mirror, see [`transform::mirror_v`].
    pub fn mirror_v<S: PixelSource + ?Sized>(&self, src: &S) -> TaggedImage {
        transform::mirror_v_with(self, src)
    }

    /// Iterated 5-point blur, see [`filter::box_blur`].
    pub fn box_blur<S: PixelSource + ?Sized>(&self, src: &S, radius: i32) -> OpsResult<TaggedImage> {
        filter::box_blur_with(self, src, radius)
    }

    /// Alpha scaling, see [`color::alpha_scale`].
    pub fn alpha_scale<S: PixelSource + ?Sized>(
        &self,
        src: &S,
        opacity: f64,
    ) -> OpsResult<TaggedImage> {
        color::alpha_scale_with(self, src, opacity)
    }

    /// Block mosaic, see [`mosaic::mosaic`].
    pub fn mosaic<S: PixelSource + ?Sized>(&self, src: &S, radius: i32) -> OpsResult<TaggedImage> {
        mosaic::mosaic_with(self, src, radius)
    }

    /// Runs an effect chosen at runtime.
    pub fn apply<S: PixelSource + ?Sized>(&self, src: &S, effect: Effect) -> OpsResult<TaggedImage> {
        match effect {
            Effect::Invert => Ok(self.invert(src)),
            Effect::MirrorH => Ok(self.mirror_h(src)),
            Effect::MirrorV => Ok(self.mirror_v(src)),
            Effect::BoxBlur(radius) => self.box_blur(src, radius),
            Effect::AlphaScale(opacity) => self.alpha_scale(src, opacity),
            Effect::Mosaic(radius) => self.mosaic(src, radius),
        }
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

/// An effect and its parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// Alpha-relative color negation.
    Invert,
    /// Top becomes bottom.
    MirrorH,
    /// Left becomes right.
    MirrorV,
    /// Iterated 5-point smoothing, `radius` passes.
    BoxBlur(i32),
    /// Alpha multiplied by an opacity in `[0, 1]`.
    AlphaScale(f64),
    /// Block averaging with square blocks of side `radius`.
    Mosaic(i32),
}

impl Effect {
    /// Short lowercase name, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Effect::Invert => "invert",
            Effect::MirrorH => "mirror_h",
            Effect::MirrorV => "mirror_v",
            Effect::BoxBlur(_) => "box_blur",
            Effect::AlphaScale(_) => "alpha_scale",
            Effect::Mosaic(_) => "mosaic",
        }
    }
}

impl fmt::Display for Effect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Effect::BoxBlur(r) | Effect::Mosaic(r) => write!(f, "{}({})", self.name(), r),
            Effect::AlphaScale(o) => write!(f, "{}({})", self.name(), o),
            _ => f.write_str(self.name()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::OpsError;
    use rasterfx_core::{Bounds, PixelBuffer, Rgba8};

    #[test]
    fn test_parallelism_floor() {
        assert_eq!(Engine::new().with_parallelism(0).parallelism(), 1);
        assert!(Engine::default().parallelism() >= 1);
    }

    #[test]
    fn test_row_ranges_follow_parallelism() {
        let engine = Engine::new().with_parallelism(4);
        assert_eq!(engine.row_ranges(9).len(), 4);
        assert_eq!(engine.row_ranges(2).len(), 2);
    }

    #[test]
    fn test_apply_dispatches() {
        let img = PixelBuffer::filled(Bounds::from_size(2, 2), Rgba8::new(10, 20, 30, 200));
        let engine = Engine::new().with_parallelism(2);

        let out = engine.apply(&img, Effect::AlphaScale(1.0)).unwrap();
        assert_eq!(out.buffer(), &img);

        let err = engine.apply(&img, Effect::BoxBlur(-1)).unwrap_err();
        assert!(matches!(err, OpsError::InvalidParameter(_)));
    }

    #[test]
    fn test_effect_display() {
        assert_eq!(Effect::Invert.to_string(), "invert");
        assert_eq!(Effect::Mosaic(8).to_string(), "mosaic(8)");
        assert_eq!(Effect::AlphaScale(0.5).to_string(), "alpha_scale(0.5)");
    }
}
