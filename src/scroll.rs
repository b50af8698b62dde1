// Scroll-driven chrome: indicator ring, to-top button, condensed navbar,
// and the pointer parallax on the hero image.
// See steering.md: Rust Rules (Engine)

use wasm_bindgen::prelude::*;

use crate::ring::RingGeometry;
use crate::types::{Directive, RingRole, ScrollMetrics, ScrollSettings};

/// Recomputes scroll-dependent presentation state on every scroll event.
#[derive(Debug)]
pub struct ScrollController {
    settings: ScrollSettings,
    ring: RingGeometry,
}

impl ScrollController {
    pub fn new(settings: ScrollSettings) -> Self {
        let ring = RingGeometry::new(settings.ring_radius);
        ScrollController { settings, ring }
    }

    pub fn ring(&self) -> &RingGeometry {
        &self.ring
    }

    /// Directives for one scroll event: indicator ring offset, to-top
    /// button visibility, navbar state.
    pub fn on_scroll(&self, metrics: &ScrollMetrics) -> Vec<Directive> {
        vec![
            Directive::SetRingOffset {
                ring: RingRole::ScrollIndicator,
                dashoffset: self.ring.dashoffset(metrics.percent()),
            },
            Directive::SetTopButtonVisible {
                visible: metrics.scroll_top > self.settings.top_threshold,
            },
            Directive::SetNavbarCondensed {
                condensed: metrics.scroll_top > self.settings.navbar_threshold,
            },
        ]
    }

    /// Hero translation for one pointer position. A zero-sized viewport
    /// yields a zero offset, never NaN.
    pub fn on_pointer(&self, x: f32, y: f32, viewport_width: f32, viewport_height: f32) -> Directive {
        let (dx, dy) = hero_offset(
            x,
            y,
            viewport_width,
            viewport_height,
            self.settings.parallax_strength,
        );
        Directive::SetHeroOffset { dx, dy }
    }
}

fn hero_offset(x: f32, y: f32, width: f32, height: f32, strength: f32) -> (f32, f32) {
    if width <= 0.0 || height <= 0.0 {
        return (0.0, 0.0);
    }
    ((x / width - 0.5) * strength, (y / height - 0.5) * strength)
}

// =============================================================================
// WASM Bindings
// =============================================================================

/// Scalar wrapper for the high-frequency scroll path.
///
/// Scroll events fire far more often than anything else on the page, so
/// this wrapper skips JSON entirely: plumbing passes the three document
/// measurements and applies the returned offset and flags directly.
#[wasm_bindgen]
pub struct WasmScrollProgress {
    inner: ScrollController,
}

#[wasm_bindgen]
impl WasmScrollProgress {
    /// Create a wrapper from the indicator ring radius and the two
    /// visibility thresholds (px).
    #[wasm_bindgen(constructor)]
    pub fn new(ring_radius: f32, top_threshold: f32, navbar_threshold: f32) -> WasmScrollProgress {
        WasmScrollProgress {
            inner: ScrollController::new(ScrollSettings {
                ring_radius,
                top_threshold,
                navbar_threshold,
                ..ScrollSettings::default()
            }),
        }
    }

    /// Stroke-dashoffset of the indicator ring for the given document
    /// measurements.
    #[wasm_bindgen]
    pub fn dashoffset(&self, scroll_top: f32, scroll_height: f32, client_height: f32) -> f32 {
        let metrics = ScrollMetrics::new(scroll_top, scroll_height, client_height);
        self.inner.ring().dashoffset(metrics.percent())
    }

    /// Whether the to-top button shows at this depth.
    #[wasm_bindgen]
    pub fn top_button_visible(&self, scroll_top: f32) -> bool {
        scroll_top > self.inner.settings.top_threshold
    }

    /// Whether the navbar condenses at this depth.
    #[wasm_bindgen]
    pub fn navbar_condensed(&self, scroll_top: f32) -> bool {
        scroll_top > self.inner.settings.navbar_threshold
    }

    /// Circumference of the indicator ring, for the initial dasharray.
    #[wasm_bindgen]
    pub fn circumference(&self) -> f32 {
        self.inner.ring().circumference()
    }
}
