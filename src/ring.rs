// Ring geometry and the two-phase fill animation for skill rings.
// See steering.md: Animation Rules

use crate::types::Percent;

/// Stroke geometry of an SVG progress ring. The circumference is computed
/// once from the radius and never changes for the element's lifetime.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RingGeometry {
    radius: f32,
    circumference: f32,
}

impl RingGeometry {
    pub fn new(radius: f32) -> Self {
        let radius = if radius.is_finite() { radius.max(0.0) } else { 0.0 };
        RingGeometry {
            radius,
            circumference: std::f32::consts::TAU * radius,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn circumference(&self) -> f32 {
        self.circumference
    }

    /// Dashoffset that renders the ring `percent` filled. 0% is the full
    /// circumference (empty), 100% is zero (full).
    pub fn dashoffset(&self, percent: Percent) -> f32 {
        self.circumference - self.circumference * percent.fraction()
    }
}

/// Frame-driven skill ring fill.
///
/// Emits the 0% offset on its first frame, holds through the configured
/// delay, then emits the target offset and completes. The reset frame is
/// what lets the host CSS transition animate the fill instead of snapping.
#[derive(Debug, Clone)]
pub struct RingFill {
    geometry: RingGeometry,
    target: Percent,
    delay_frames: u32,
    frame: u32,
    done: bool,
}

impl RingFill {
    pub fn new(radius: f32, percent: f32, delay_frames: u32) -> Self {
        RingFill {
            geometry: RingGeometry::new(radius),
            target: Percent::new(percent),
            // The reset and fill frames must be distinct.
            delay_frames: delay_frames.max(1),
            frame: 0,
            done: false,
        }
    }

    /// Advance one frame. Returns the dashoffset to apply when this frame
    /// changes it, `None` on hold frames and after completion.
    pub fn step(&mut self) -> Option<f32> {
        if self.done {
            return None;
        }
        let frame = self.frame;
        self.frame += 1;
        if frame == 0 {
            Some(self.geometry.dashoffset(Percent::new(0.0)))
        } else if frame >= self.delay_frames {
            self.done = true;
            Some(self.geometry.dashoffset(self.target))
        } else {
            None
        }
    }

    pub fn is_done(&self) -> bool {
        self.done
    }
}
