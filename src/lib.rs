//! srcset-shim
//!
//! Responsive-image source selection for runtimes that lack native `srcset`
//! support. Given an image's multi-candidate source attribute and a snapshot
//! of the current viewport, the shim parses the candidate list and
//! deterministically picks the single best source to apply.
//!
//! # Features
//!
//! - **Pure Core**: parsing and selection are total, side-effect-free
//!   functions of their inputs, so repeated invocation is always safe
//! - **Explicit Collaborators**: capability/viewport probes and event wiring
//!   are small, clock-injected objects that tests can drive directly
//! - **Document Scan** (`dom` feature): locate eligible images in an HTML
//!   document and produce a rewrite plan for the caller to apply
//!
//! # Example
//!
//! ```
//! use srcset_shim::{parse_srcset, select_best, Viewport};
//!
//! # fn main() -> srcset_shim::Result<()> {
//! let candidates = parse_srcset("small.jpg 400w 1x, large.jpg 800w 2x");
//! let viewport = Viewport::new(600, 400, 1.0)?;
//! let winner = select_best(candidates, &viewport);
//! assert_eq!(winner.map(|c| c.source).as_deref(), Some("large.jpg"));
//! # Ok(())
//! # }
//! ```

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod events;
pub mod parse;
pub mod probe;
pub mod select;

// Document scan (scraper-backed); the parse/select core compiles without it
#[cfg(feature = "dom")]
pub mod dom;

pub use parse::parse_srcset;
pub use select::select_best;

/// A snapshot of the viewport at the moment a selection pass runs.
///
/// Constructed fresh per pass (see [`probe::capture_viewport`]) and never
/// mutated. `Viewport::new` is the single validation point for geometry:
/// the selector itself assumes its viewport argument is valid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Layout viewport width in device-independent pixels
    pub width: u32,
    /// Layout viewport height in device-independent pixels
    pub height: u32,
    /// Device pixel ratio, always >= 1.0
    pub pixel_ratio: f32,
}

impl Viewport {
    /// Create a viewport, rejecting zero dimensions and pixel ratios that
    /// are non-finite or below 1.0.
    pub fn new(width: u32, height: u32, pixel_ratio: f32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::Viewport(format!(
                "dimensions must be positive, got {}x{}",
                width, height
            )));
        }
        if !pixel_ratio.is_finite() || pixel_ratio < 1.0 {
            return Err(Error::Viewport(format!(
                "pixel ratio must be a finite value >= 1.0, got {}",
                pixel_ratio
            )));
        }
        Ok(Self {
            width,
            height,
            pixel_ratio,
        })
    }

    /// Human-readable read-out of the captured geometry, for debug overlays.
    pub fn report(&self) -> String {
        format!(
            "width : {}\nheight : {}\npixel ratio : {}",
            self.width, self.height, self.pixel_ratio
        )
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
            pixel_ratio: 1.0,
        }
    }
}

/// One proposed image source together with its descriptors.
///
/// `width` and `height` are `None` when the corresponding descriptor was not
/// present; an absent bound compares larger than any finite value during
/// selection. A missing density descriptor defaults to 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Source reference (URL), never empty
    pub source: String,
    /// Intrinsic width in pixels, or `None` for "unbounded"
    pub width: Option<u32>,
    /// Intrinsic height in pixels, or `None` for "unbounded"
    pub height: Option<u32>,
    /// Pixel-density descriptor, defaults to 1.0
    pub density: f32,
}
