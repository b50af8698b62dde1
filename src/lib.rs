// folio_engine: Folio Rust/WASM page-motion engine
// See steering.md for architecture rules. All "magic" lives here; JS is plumbing.

mod counter;
mod error;
mod filter;
mod forms;
mod nav;
mod reveal;
mod ring;
mod scroll;
mod types;

use wasm_bindgen::prelude::*;

pub use counter::CounterAnimation;
pub use error::EngineError;
pub use filter::ProjectFilter;
pub use forms::{is_valid_email, ContactFlow, NewsletterFlow};
pub use nav::NavController;
pub use reveal::{AnimationSet, SectionTrigger, TriggerState};
pub use ring::{RingFill, RingGeometry};
pub use scroll::{ScrollController, WasmScrollProgress};
pub use types::*;

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Main engine interface exposed to JavaScript.
/// Batch interface to minimize JS↔WASM crossings: plumbing forwards raw
/// events per event-loop turn and steps `tick` once per animation frame
/// while `animating` stays true.
#[wasm_bindgen]
#[derive(Debug)]
pub struct Engine {
    scroll: ScrollController,
    nav: NavController,
    filter: ProjectFilter,
    contact: ContactFlow,
    newsletter: NewsletterFlow,
    stats_trigger: SectionTrigger,
    skills_trigger: SectionTrigger,
    pending_counters: Vec<CounterAnimation>,
    pending_rings: Vec<RingFill>,
    animations: AnimationSet,
}

impl Engine {
    /// Build the engine from a parsed configuration. Counter labels are
    /// validated here, so a malformed page inventory fails construction
    /// instead of producing broken animations later.
    pub fn from_config(config: EngineConfig) -> Result<Engine, EngineError> {
        let pending_counters = config
            .counters
            .iter()
            .map(|label| CounterAnimation::from_label(label, config.timing.counter_steps))
            .collect::<Result<Vec<_>, _>>()?;

        let pending_rings = config
            .skills
            .iter()
            .map(|spec| RingFill::new(spec.radius, spec.percent, config.timing.ring_delay_frames))
            .collect();

        Ok(Engine {
            scroll: ScrollController::new(config.scroll),
            nav: NavController::new(config.timing.loader_delay_ms),
            filter: ProjectFilter::new(&config.projects, config.timing.conceal_ms),
            contact: ContactFlow::new(&config.messages),
            newsletter: NewsletterFlow::new(&config.messages),
            stats_trigger: SectionTrigger::new(),
            skills_trigger: SectionTrigger::new(),
            pending_counters,
            pending_rings,
            animations: AnimationSet::new(),
        })
    }

    /// Process a batch of page events into directives.
    pub fn apply_events(&mut self, batch: &EventBatch) -> Vec<Directive> {
        let mut directives = Vec::new();

        for event in &batch.events {
            match event {
                PageEvent::Loaded => directives.push(self.nav.on_loaded()),
                PageEvent::Scroll { metrics } => {
                    directives.extend(self.scroll.on_scroll(metrics));
                }
                PageEvent::PointerMove {
                    x,
                    y,
                    viewport_width,
                    viewport_height,
                } => {
                    directives
                        .push(self.scroll.on_pointer(*x, *y, *viewport_width, *viewport_height));
                }
                PageEvent::SectionShown { section } => self.on_section_shown(*section),
                PageEvent::AnchorClick {
                    fragment,
                    target_exists,
                    nav_open,
                } => {
                    directives.extend(self.nav.on_anchor_click(fragment, *target_exists, *nav_open));
                }
                PageEvent::ScrollTopClick => directives.push(self.nav.on_scroll_top_click()),
                PageEvent::ServiceSelect { index } => {
                    directives.push(self.nav.on_service_select(*index));
                }
                PageEvent::FilterSelect { label } => directives.extend(self.filter.apply(label)),
                PageEvent::ContactSubmit => directives.extend(self.contact.on_submit()),
                PageEvent::ContactResponse { body } => {
                    directives.extend(self.contact.on_response(body));
                }
                PageEvent::ContactFailed => directives.extend(self.contact.on_failure()),
                PageEvent::NewsletterSubmit { email } => {
                    directives.extend(self.newsletter.on_submit(email));
                }
            }
        }

        directives
    }

    /// Advance active animations one frame.
    pub fn advance_frame(&mut self) -> Vec<Directive> {
        self.animations.tick()
    }

    /// True while any reveal animation still has frames to emit.
    pub fn animating(&self) -> bool {
        !self.animations.is_idle()
    }

    fn on_section_shown(&mut self, section: Section) {
        match section {
            Section::Stats => {
                if self.stats_trigger.try_fire() {
                    self.animations
                        .adopt_counters(std::mem::take(&mut self.pending_counters));
                }
            }
            Section::Skills => {
                if self.skills_trigger.try_fire() {
                    self.animations
                        .adopt_rings(std::mem::take(&mut self.pending_rings));
                }
            }
        }
    }

    fn batch(&self, directives: Vec<Directive>) -> DirectiveBatch {
        DirectiveBatch {
            directives,
            animating: self.animating(),
        }
    }
}

#[wasm_bindgen]
impl Engine {
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: &str) -> Result<Engine, JsValue> {
        let config: EngineConfig = serde_json::from_str(config_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid config: {}", e)))?;

        Engine::from_config(config).map_err(|e| JsValue::from_str(&e.to_string()))
    }

    /// Process a batch of page events and return the directive list.
    /// This is the main entry point, designed as a batch call to reduce
    /// JS↔WASM overhead.
    #[wasm_bindgen]
    pub fn handle_events(&mut self, events_json: &str) -> Result<String, JsValue> {
        let batch: EventBatch = serde_json::from_str(events_json)
            .map_err(|e| JsValue::from_str(&format!("Invalid events: {}", e)))?;

        let directives = self.apply_events(&batch);
        serde_json::to_string(&self.batch(directives))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// Advance active animations one frame and return the directive list.
    /// Plumbing calls this from requestAnimationFrame until `animating`
    /// comes back false.
    #[wasm_bindgen]
    pub fn tick(&mut self) -> Result<String, JsValue> {
        let directives = self.advance_frame();
        serde_json::to_string(&self.batch(directives))
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
    }

    /// True while any reveal animation still has frames to emit.
    #[wasm_bindgen]
    pub fn is_animating(&self) -> bool {
        self.animating()
    }

    /// Drop every active animation. For page teardown; nothing re-fires.
    #[wasm_bindgen]
    pub fn cancel_animations(&mut self) {
        self.animations.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_config() -> EngineConfig {
        serde_json::from_str(
            r#"{
                "scroll": { "ring_radius": 24.0 },
                "counters": ["250+", "15"],
                "skills": [
                    { "radius": 54.0, "percent": 90.0 },
                    { "radius": 54.0, "percent": 75.0 }
                ],
                "projects": [
                    { "categories": "web" },
                    { "categories": "web,app" },
                    { "categories": "branding" }
                ]
            }"#,
        )
        .unwrap()
    }

    fn events(events: Vec<PageEvent>) -> EventBatch {
        EventBatch { events }
    }

    #[test]
    fn engine_creation_works() {
        let engine = Engine::from_config(demo_config());
        assert!(engine.is_ok());
    }

    #[test]
    fn malformed_counter_label_fails_construction() {
        let mut config = demo_config();
        config.counters.push("many".to_string());
        let err = Engine::from_config(config).unwrap_err();
        assert!(err.to_string().contains("many"));
    }

    #[test]
    fn scroll_event_produces_chrome_directives() {
        let mut engine = Engine::from_config(demo_config()).unwrap();
        let directives = engine.apply_events(&events(vec![PageEvent::Scroll {
            metrics: ScrollMetrics::new(400.0, 3000.0, 800.0),
        }]));

        assert!(directives
            .iter()
            .any(|d| matches!(d, Directive::SetRingOffset { ring: RingRole::ScrollIndicator, .. })));
        assert!(directives.contains(&Directive::SetTopButtonVisible { visible: true }));
    }

    #[test]
    fn stats_section_fires_counters_once() {
        let mut engine = Engine::from_config(demo_config()).unwrap();
        assert!(!engine.animating());

        engine.apply_events(&events(vec![PageEvent::SectionShown {
            section: Section::Stats,
        }]));
        assert!(engine.animating());

        // Run the counters dry.
        let mut last = std::collections::HashMap::new();
        while engine.animating() {
            for directive in engine.advance_frame() {
                if let Directive::SetCounterText { index, text } = directive {
                    last.insert(index, text);
                }
            }
        }
        assert_eq!(last.get(&0).map(String::as_str), Some("250+"));
        assert_eq!(last.get(&1).map(String::as_str), Some("15"));

        // A second intersection must not restart anything.
        engine.apply_events(&events(vec![PageEvent::SectionShown {
            section: Section::Stats,
        }]));
        assert!(!engine.animating());
        assert!(engine.advance_frame().is_empty());
    }

    #[test]
    fn skills_section_fills_rings_by_role() {
        let mut engine = Engine::from_config(demo_config()).unwrap();
        engine.apply_events(&events(vec![PageEvent::SectionShown {
            section: Section::Skills,
        }]));

        let first_frame = engine.advance_frame();
        let circumference = RingGeometry::new(54.0).circumference();
        let resets: Vec<_> = first_frame
            .iter()
            .filter_map(|d| match d {
                Directive::SetRingOffset {
                    ring: RingRole::Skill { index },
                    dashoffset,
                } => Some((*index, *dashoffset)),
                _ => None,
            })
            .collect();
        assert_eq!(resets.len(), 2);
        for (_, offset) in &resets {
            assert!((offset - circumference).abs() < 0.001);
        }
    }

    #[test]
    fn cancel_stops_animations() {
        let mut engine = Engine::from_config(demo_config()).unwrap();
        engine.apply_events(&events(vec![PageEvent::SectionShown {
            section: Section::Stats,
        }]));
        assert!(engine.animating());

        engine.cancel_animations();
        assert!(!engine.animating());
    }

    #[test]
    fn filter_event_flows_through() {
        let mut engine = Engine::from_config(demo_config()).unwrap();
        let directives = engine.apply_events(&events(vec![PageEvent::FilterSelect {
            label: "app".to_string(),
        }]));

        let revealed: Vec<_> = directives
            .iter()
            .filter_map(|d| match d {
                Directive::RevealItem { index } => Some(*index),
                _ => None,
            })
            .collect();
        assert_eq!(revealed, vec![1]);
    }

    #[test]
    fn contact_round_trip_through_events() {
        let mut engine = Engine::from_config(demo_config()).unwrap();

        let cleared = engine.apply_events(&events(vec![PageEvent::ContactSubmit]));
        assert!(cleared.contains(&Directive::ClearStatus {
            channel: FormChannel::Contact
        }));

        let failed = engine.apply_events(&events(vec![PageEvent::ContactResponse {
            body: r#"{"success":false,"message":"X"}"#.to_string(),
        }]));
        assert!(failed.contains(&Directive::ShowStatus {
            channel: FormChannel::Contact,
            kind: StatusKind::Error,
            message: "X".to_string(),
        }));
    }

    #[test]
    fn default_config_handles_every_event() {
        let mut engine = Engine::from_config(EngineConfig::default()).unwrap();
        let directives = engine.apply_events(&events(vec![
            PageEvent::Loaded,
            PageEvent::Scroll {
                metrics: ScrollMetrics::new(0.0, 500.0, 800.0),
            },
            PageEvent::SectionShown {
                section: Section::Stats,
            },
            PageEvent::FilterSelect {
                label: "all".to_string(),
            },
            PageEvent::ScrollTopClick,
        ]));
        assert!(directives.contains(&Directive::ScrollToTop));
        // Nothing to animate with an empty inventory.
        assert!(!engine.animating());
    }
}
