//! Responsive layout of the visible screen.
//!
//! The screen takes a fixed share of the viewport, never less than a minimum
//! size, and is centered. When the minimum exceeds the viewport the offsets go
//! negative and the screen overflows evenly on both sides.

use serde::{Deserialize, Serialize};

use crate::config::LayoutConfig;

/// Current size of the rendering area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
        }
    }
}

/// Size and position applied to the visible screen.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ScreenBounds {
    pub width: u32,
    pub height: u32,
    pub offset_top: f64,
    pub offset_left: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LayoutEngine {
    scale: f64,
    min_width: u32,
    min_height: u32,
}

impl Default for LayoutEngine {
    fn default() -> Self {
        Self::new(&LayoutConfig::default())
    }
}

impl LayoutEngine {
    pub fn new(config: &LayoutConfig) -> Self {
        Self {
            scale: config.scale,
            min_width: config.min_width,
            min_height: config.min_height,
        }
    }

    /// Compute bounds for `viewport`. Total: every viewport yields bounds.
    pub fn compute_layout(&self, viewport: Viewport) -> ScreenBounds {
        let width = scaled(viewport.width, self.scale).max(self.min_width);
        let height = scaled(viewport.height, self.scale).max(self.min_height);

        ScreenBounds {
            width,
            height,
            offset_top: (f64::from(viewport.height) - f64::from(height)) / 2.0,
            offset_left: (f64::from(viewport.width) - f64::from(width)) / 2.0,
        }
    }
}

/// Compute bounds with the default 80% share and 500px minimum.
pub fn compute_layout(viewport_width: u32, viewport_height: u32) -> ScreenBounds {
    LayoutEngine::default().compute_layout(Viewport::new(viewport_width, viewport_height))
}

fn scaled(length: u32, scale: f64) -> u32 {
    // Half rounds up.
    (f64::from(length) * scale + 0.5).floor() as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_large_viewport() {
        let bounds = compute_layout(1920, 1080);
        assert_eq!(
            bounds,
            ScreenBounds {
                width: 1536,
                height: 864,
                offset_top: 108.0,
                offset_left: 192.0,
            }
        );
    }

    #[test]
    fn test_small_viewport_overflows_centered() {
        let bounds = compute_layout(400, 400);
        assert_eq!(
            bounds,
            ScreenBounds {
                width: 500,
                height: 500,
                offset_top: -50.0,
                offset_left: -50.0,
            }
        );
    }

    #[test]
    fn test_minimum_applies_per_axis() {
        let bounds = compute_layout(1920, 500);
        assert_eq!(bounds.width, 1536);
        assert_eq!(bounds.height, 500);
        assert_eq!(bounds.offset_top, 0.0);
    }

    #[test]
    fn test_odd_remainder_gives_half_pixel_offset() {
        // 1003 * 0.8 = 802.4 → 802, leaving 201px to split.
        let bounds = compute_layout(1003, 1000);
        assert_eq!(bounds.width, 802);
        assert_eq!(bounds.offset_left, 100.5);
    }

    #[test]
    fn test_custom_config() {
        let engine = LayoutEngine::new(&LayoutConfig {
            scale: 0.5,
            min_width: 100,
            min_height: 100,
        });
        let bounds = engine.compute_layout(Viewport::new(1000, 150));
        assert_eq!(bounds.width, 500);
        assert_eq!(bounds.height, 100);
        assert_eq!(bounds.offset_left, 250.0);
        assert_eq!(bounds.offset_top, 25.0);
    }

    #[test]
    fn test_zero_viewport_is_total() {
        let bounds = compute_layout(0, 0);
        assert_eq!(bounds.width, 500);
        assert_eq!(bounds.offset_top, -250.0);
    }
}
