//! Capability and viewport probes.
//!
//! The shim never reads runtime geometry directly; it goes through the
//! [`RuntimeProbe`] trait so tests and the CLI can supply deterministic
//! values. A probe that reports native `srcset` support short-circuits the
//! whole pipeline.

use crate::{Error, Result, Viewport};

/// Read-only view of the hosting runtime's capabilities and geometry.
///
/// Implementations that cannot answer a geometry query return `None`;
/// [`capture_viewport`] applies the documented fallbacks.
pub trait RuntimeProbe: Send + Sync {
    /// Whether the runtime natively understands multi-candidate sources.
    /// When true, callers should skip the fallback scan entirely.
    fn supports_native_srcset(&self) -> bool;

    /// Layout viewport width in device-independent pixels
    fn inner_width(&self) -> Option<u32>;

    /// Layout viewport height in device-independent pixels
    fn inner_height(&self) -> Option<u32>;

    /// Physical screen width, used to estimate pixel density when the
    /// runtime does not expose a device pixel ratio
    fn screen_width(&self) -> Option<u32>;

    /// Device pixel ratio as reported by the runtime, if any
    fn device_pixel_ratio(&self) -> Option<f32>;
}

/// Capture a fresh viewport snapshot from a probe.
///
/// The pixel-ratio fallback chain is: explicit device ratio, then a
/// screen-width / viewport-width estimate rounded to one decimal, then 1.0.
/// Estimates below 1.0 are clamped up. Missing viewport dimensions are an
/// error, since no selection can run without them.
pub fn capture_viewport(probe: &dyn RuntimeProbe) -> Result<Viewport> {
    let width = probe
        .inner_width()
        .ok_or_else(|| Error::Viewport("viewport width unavailable".to_string()))?;
    let height = probe
        .inner_height()
        .ok_or_else(|| Error::Viewport("viewport height unavailable".to_string()))?;

    let pixel_ratio = match probe.device_pixel_ratio() {
        Some(ratio) if ratio.is_finite() && ratio > 0.0 => ratio.max(1.0),
        _ => estimate_pixel_ratio(probe.screen_width(), width),
    };

    Viewport::new(width, height, pixel_ratio)
}

fn estimate_pixel_ratio(screen_width: Option<u32>, viewport_width: u32) -> f32 {
    match screen_width {
        Some(screen) if viewport_width > 0 => {
            let estimate = screen as f32 / viewport_width as f32;
            // One decimal place, matching the usual toFixed(1) read-out
            ((estimate * 10.0).round() / 10.0).max(1.0)
        }
        _ => 1.0,
    }
}

/// A probe with fixed answers, for tests and offline document scans.
#[derive(Debug, Clone)]
pub struct FixedProbe {
    pub native_srcset: bool,
    pub width: u32,
    pub height: u32,
    pub screen_width: Option<u32>,
    pub device_pixel_ratio: Option<f32>,
}

impl Default for FixedProbe {
    fn default() -> Self {
        Self {
            native_srcset: false,
            width: 1280,
            height: 720,
            screen_width: None,
            device_pixel_ratio: Some(1.0),
        }
    }
}

impl RuntimeProbe for FixedProbe {
    fn supports_native_srcset(&self) -> bool {
        self.native_srcset
    }

    fn inner_width(&self) -> Option<u32> {
        Some(self.width)
    }

    fn inner_height(&self) -> Option<u32> {
        Some(self.height)
    }

    fn screen_width(&self) -> Option<u32> {
        self.screen_width
    }

    fn device_pixel_ratio(&self) -> Option<f32> {
        self.device_pixel_ratio
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_uses_explicit_device_ratio() {
        let probe = FixedProbe {
            device_pixel_ratio: Some(2.0),
            ..Default::default()
        };
        let viewport = capture_viewport(&probe).unwrap();
        assert_eq!(viewport.pixel_ratio, 2.0);
        assert_eq!(viewport.width, 1280);
        assert_eq!(viewport.height, 720);
    }

    #[test]
    fn capture_estimates_ratio_from_screen_width() {
        let probe = FixedProbe {
            width: 512,
            height: 384,
            screen_width: Some(768),
            device_pixel_ratio: None,
            ..Default::default()
        };
        let viewport = capture_viewport(&probe).unwrap();
        assert_eq!(viewport.pixel_ratio, 1.5);
    }

    #[test]
    fn capture_falls_back_to_unit_ratio() {
        let probe = FixedProbe {
            screen_width: None,
            device_pixel_ratio: None,
            ..Default::default()
        };
        let viewport = capture_viewport(&probe).unwrap();
        assert_eq!(viewport.pixel_ratio, 1.0);
    }

    #[test]
    fn ratio_estimates_below_one_are_clamped() {
        let probe = FixedProbe {
            width: 1000,
            screen_width: Some(500),
            device_pixel_ratio: None,
            ..Default::default()
        };
        let viewport = capture_viewport(&probe).unwrap();
        assert_eq!(viewport.pixel_ratio, 1.0);
    }

    #[test]
    fn non_finite_device_ratio_falls_through() {
        let probe = FixedProbe {
            device_pixel_ratio: Some(f32::NAN),
            screen_width: None,
            ..Default::default()
        };
        let viewport = capture_viewport(&probe).unwrap();
        assert_eq!(viewport.pixel_ratio, 1.0);
    }

    #[test]
    fn zero_viewport_width_is_rejected() {
        let probe = FixedProbe {
            width: 0,
            ..Default::default()
        };
        assert!(capture_viewport(&probe).is_err());
    }
}
