// One-shot section triggers and the active animation set they feed.
// See steering.md: Interaction Rules

use crate::counter::CounterAnimation;
use crate::ring::RingFill;
use crate::types::{Directive, RingRole};

/// Arm state of an observed section. `Fired` is terminal: once a section
/// has triggered its animation, later intersections are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TriggerState {
    Armed,
    Fired,
}

/// One-shot trigger for an intersection-observed section.
#[derive(Debug, Clone)]
pub struct SectionTrigger {
    state: TriggerState,
}

impl SectionTrigger {
    pub fn new() -> Self {
        SectionTrigger {
            state: TriggerState::Armed,
        }
    }

    /// Fire if still armed. Returns true exactly once.
    pub fn try_fire(&mut self) -> bool {
        match self.state {
            TriggerState::Armed => {
                self.state = TriggerState::Fired;
                true
            }
            TriggerState::Fired => false,
        }
    }

    pub fn has_fired(&self) -> bool {
        self.state == TriggerState::Fired
    }
}

impl Default for SectionTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// Animations currently being stepped by the frame loop.
///
/// Completed members stay in place so indices remain stable against the
/// DOM order they were configured in; they simply stop emitting.
#[derive(Debug, Default)]
pub struct AnimationSet {
    counters: Vec<CounterAnimation>,
    rings: Vec<RingFill>,
}

impl AnimationSet {
    pub fn new() -> Self {
        AnimationSet::default()
    }

    pub fn adopt_counters(&mut self, counters: Vec<CounterAnimation>) {
        self.counters = counters;
    }

    pub fn adopt_rings(&mut self, rings: Vec<RingFill>) {
        self.rings = rings;
    }

    /// Advance every active animation one frame and collect its
    /// directives.
    pub fn tick(&mut self) -> Vec<Directive> {
        let mut directives = Vec::new();

        for (index, counter) in self.counters.iter_mut().enumerate() {
            if let Some(text) = counter.step() {
                directives.push(Directive::SetCounterText { index, text });
            }
        }

        for (index, fill) in self.rings.iter_mut().enumerate() {
            if let Some(dashoffset) = fill.step() {
                directives.push(Directive::SetRingOffset {
                    ring: RingRole::Skill { index },
                    dashoffset,
                });
            }
        }

        directives
    }

    /// True when nothing remains to step; plumbing stops its frame loop.
    pub fn is_idle(&self) -> bool {
        self.counters.iter().all(CounterAnimation::is_done)
            && self.rings.iter().all(RingFill::is_done)
    }

    /// Drop everything mid-flight. Used when the page tears the motion
    /// layer down; no callback survives this.
    pub fn cancel(&mut self) {
        self.counters.clear();
        self.rings.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trigger_fires_exactly_once() {
        let mut trigger = SectionTrigger::new();
        assert!(trigger.try_fire());
        assert!(trigger.has_fired());
        // Re-entering the viewport must not re-fire.
        assert!(!trigger.try_fire());
        assert!(!trigger.try_fire());
    }

    #[test]
    fn empty_set_is_idle() {
        assert!(AnimationSet::new().is_idle());
    }

    #[test]
    fn tick_drives_counters_to_idle() {
        let mut set = AnimationSet::new();
        set.adopt_counters(vec![
            CounterAnimation::from_label("10", 5.0).unwrap(),
            CounterAnimation::from_label("3+", 5.0).unwrap(),
        ]);
        assert!(!set.is_idle());

        let mut last_texts = [String::new(), String::new()];
        for _ in 0..10 {
            for directive in set.tick() {
                if let Directive::SetCounterText { index, text } = directive {
                    last_texts[index] = text;
                }
            }
            if set.is_idle() {
                break;
            }
        }

        assert!(set.is_idle());
        assert_eq!(last_texts[0], "10");
        assert_eq!(last_texts[1], "3+");
    }

    #[test]
    fn tick_addresses_skill_rings_by_index() {
        let mut set = AnimationSet::new();
        set.adopt_rings(vec![
            RingFill::new(54.0, 90.0, 1),
            RingFill::new(54.0, 40.0, 1),
        ]);

        let first = set.tick();
        let roles: Vec<_> = first
            .iter()
            .filter_map(|d| match d {
                Directive::SetRingOffset { ring, .. } => Some(*ring),
                _ => None,
            })
            .collect();
        assert_eq!(
            roles,
            vec![RingRole::Skill { index: 0 }, RingRole::Skill { index: 1 }]
        );

        set.tick();
        assert!(set.is_idle());
    }

    #[test]
    fn cancel_clears_mid_flight() {
        let mut set = AnimationSet::new();
        set.adopt_counters(vec![CounterAnimation::from_label("100", 50.0).unwrap()]);
        set.tick();
        assert!(!set.is_idle());

        set.cancel();
        assert!(set.is_idle());
        assert!(set.tick().is_empty());
    }
}
