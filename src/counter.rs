// Stat counter count-up animation. Bounded frame stepping with an exact
// final snap; a trailing '+' in the label survives the whole run.
// See steering.md: Animation Rules

use crate::error::EngineError;

/// Frame-driven count-up toward an integer target parsed from the
/// element's initial display label.
#[derive(Debug, Clone)]
pub struct CounterAnimation {
    target: u32,
    plus: bool,
    value: f32,
    increment: f32,
    done: bool,
}

impl CounterAnimation {
    /// Parse a display label like "250+" or "12". Fails on anything that
    /// is not an integer with an optional trailing '+'.
    pub fn from_label(label: &str, steps: f32) -> Result<Self, EngineError> {
        let trimmed = label.trim();
        let (digits, plus) = match trimmed.strip_suffix('+') {
            Some(rest) => (rest.trim_end(), true),
            None => (trimmed, false),
        };
        let target: u32 = digits.parse().map_err(|_| EngineError::InvalidCounterLabel {
            label: label.to_string(),
        })?;

        let steps = if steps.is_finite() { steps.max(1.0) } else { 1.0 };
        Ok(CounterAnimation {
            target,
            plus,
            value: 0.0,
            increment: target as f32 / steps,
            done: false,
        })
    }

    /// Advance one frame. Returns the text to display, `None` once the
    /// exact target has been emitted.
    pub fn step(&mut self) -> Option<String> {
        if self.done {
            return None;
        }
        self.value += self.increment;
        if self.increment <= 0.0 || self.value >= self.target as f32 {
            self.done = true;
            return Some(self.render(self.target));
        }
        Some(self.render(self.value.floor() as u32))
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    pub fn target(&self) -> u32 {
        self.target
    }

    fn render(&self, shown: u32) -> String {
        if self.plus {
            format!("{}+", shown)
        } else {
            shown.to_string()
        }
    }
}
