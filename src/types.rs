// Strong typing over strings. Newtypes for percentages; tagged enums for events and directives.
// See steering.md: Rust Rules (Engine)

use serde::{Deserialize, Serialize};

/// Percentage clamped to 0-100. Newtype for type safety.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct Percent(f32);

impl Percent {
    pub fn new(value: f32) -> Self {
        if value.is_finite() {
            Percent(value.clamp(0.0, 100.0))
        } else {
            Percent(0.0)
        }
    }

    pub fn value(&self) -> f32 {
        self.0
    }

    /// Percentage as a 0-1 fraction.
    pub fn fraction(&self) -> f32 {
        self.0 / 100.0
    }
}

/// Scroll geometry read fresh from the document on each scroll event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct ScrollMetrics {
    pub scroll_top: f32,
    pub scroll_height: f32,
    pub client_height: f32,
}

impl ScrollMetrics {
    pub fn new(scroll_top: f32, scroll_height: f32, client_height: f32) -> Self {
        ScrollMetrics {
            scroll_top,
            scroll_height,
            client_height,
        }
    }

    /// Total scrollable distance. Zero when the page fits the viewport.
    pub fn max_scroll(&self) -> f32 {
        (self.scroll_height - self.client_height).max(0.0)
    }

    /// Scrolled share of the scrollable distance. A page that cannot
    /// scroll is 0%, never NaN.
    pub fn percent(&self) -> Percent {
        let max = self.max_scroll();
        if max <= 0.0 {
            return Percent::new(0.0);
        }
        Percent::new(self.scroll_top / max * 100.0)
    }
}

/// Which ring a dashoffset directive addresses. The scroll indicator and
/// the skill rings are distinct roles; nothing selects by first match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role")]
pub enum RingRole {
    ScrollIndicator,
    Skill { index: usize },
}

/// Observed page sections that arm one-shot animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Section {
    Stats,
    Skills,
}

/// Form a status message or reset directive addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FormChannel {
    Contact,
    Newsletter,
}

/// Inline status flavor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusKind {
    Success,
    Error,
}

/// Engine configuration passed from JS. Plumbing reads the page once at
/// startup and hands the inventory over; the engine never queries the DOM.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EngineConfig {
    #[serde(default)]
    pub scroll: ScrollSettings,
    /// Initial display labels of the stat counters, in DOM order (e.g. "250+").
    #[serde(default)]
    pub counters: Vec<String>,
    /// Skill rings in DOM order.
    #[serde(default)]
    pub skills: Vec<SkillRingSpec>,
    /// Portfolio items in DOM order.
    #[serde(default)]
    pub projects: Vec<ProjectSpec>,
    #[serde(default)]
    pub timing: TimingSettings,
    #[serde(default)]
    pub messages: MessageSettings,
}

/// Scroll and pointer chrome settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScrollSettings {
    /// Radius of the scroll indicator ring, from the SVG element.
    #[serde(default = "default_ring_radius")]
    pub ring_radius: f32,
    /// Scroll depth (px) past which the to-top button shows.
    #[serde(default = "default_top_threshold")]
    pub top_threshold: f32,
    /// Scroll depth (px) past which the navbar condenses.
    #[serde(default = "default_navbar_threshold")]
    pub navbar_threshold: f32,
    /// Maximum hero offset (px) at the viewport edge.
    #[serde(default = "default_parallax_strength")]
    pub parallax_strength: f32,
}

impl Default for ScrollSettings {
    fn default() -> Self {
        ScrollSettings {
            ring_radius: default_ring_radius(),
            top_threshold: default_top_threshold(),
            navbar_threshold: default_navbar_threshold(),
            parallax_strength: default_parallax_strength(),
        }
    }
}

fn default_ring_radius() -> f32 {
    24.0
}

fn default_top_threshold() -> f32 {
    300.0
}

fn default_navbar_threshold() -> f32 {
    50.0
}

fn default_parallax_strength() -> f32 {
    20.0
}

/// One skill ring: its SVG radius and declared fill target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SkillRingSpec {
    pub radius: f32,
    pub percent: f32,
}

/// One portfolio item: its comma-separated category list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectSpec {
    pub categories: String,
}

/// Frame and delay tuning.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct TimingSettings {
    /// Frames a counter takes to reach its target.
    #[serde(default = "default_counter_steps")]
    pub counter_steps: f32,
    /// Frames between a ring's reset and its fill.
    #[serde(default = "default_ring_delay_frames")]
    pub ring_delay_frames: u32,
    /// Delay (ms) before a concealed item leaves the layout.
    #[serde(default = "default_conceal_ms")]
    pub conceal_ms: u32,
    /// Delay (ms) before the page loader dismisses.
    #[serde(default = "default_loader_delay_ms")]
    pub loader_delay_ms: u32,
}

impl Default for TimingSettings {
    fn default() -> Self {
        TimingSettings {
            counter_steps: default_counter_steps(),
            ring_delay_frames: default_ring_delay_frames(),
            conceal_ms: default_conceal_ms(),
            loader_delay_ms: default_loader_delay_ms(),
        }
    }
}

fn default_counter_steps() -> f32 {
    200.0
}

fn default_ring_delay_frames() -> u32 {
    6
}

fn default_conceal_ms() -> u32 {
    300
}

fn default_loader_delay_ms() -> u32 {
    500
}

/// User-facing copy for the form flows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageSettings {
    #[serde(default = "default_contact_fallback")]
    pub contact_fallback: String,
    #[serde(default = "default_newsletter_invalid")]
    pub newsletter_invalid: String,
    #[serde(default = "default_newsletter_success")]
    pub newsletter_success: String,
}

impl Default for MessageSettings {
    fn default() -> Self {
        MessageSettings {
            contact_fallback: default_contact_fallback(),
            newsletter_invalid: default_newsletter_invalid(),
            newsletter_success: default_newsletter_success(),
        }
    }
}

fn default_contact_fallback() -> String {
    "Something went wrong. Please try again.".to_string()
}

fn default_newsletter_invalid() -> String {
    "Please provide a valid email address.".to_string()
}

fn default_newsletter_success() -> String {
    "Thank you for subscribing to my newsletter!".to_string()
}

/// Single raw browser event forwarded by plumbing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PageEvent {
    /// Window finished loading.
    Loaded,
    /// Document scrolled.
    Scroll { metrics: ScrollMetrics },
    /// Pointer moved over the page.
    PointerMove {
        x: f32,
        y: f32,
        viewport_width: f32,
        viewport_height: f32,
    },
    /// An observed section entered the viewport.
    SectionShown { section: Section },
    /// In-page anchor link clicked.
    AnchorClick {
        fragment: String,
        target_exists: bool,
        nav_open: bool,
    },
    /// To-top button clicked.
    ScrollTopClick,
    /// Service card clicked.
    ServiceSelect { index: usize },
    /// Filter control clicked.
    FilterSelect { label: String },
    /// Contact form submitted (plumbing performs the POST after this).
    ContactSubmit,
    /// Contact endpoint replied with a body.
    ContactResponse { body: String },
    /// Contact request failed before producing a body.
    ContactFailed,
    /// Newsletter form submitted.
    NewsletterSubmit { email: String },
}

/// Batch of page events from JS (minimizes JS↔WASM crossings).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventBatch {
    pub events: Vec<PageEvent>,
}

/// A single, stateless page instruction.
///
/// The engine emits a `Vec<Directive>` per batch or frame. Plumbing
/// applies the list sequentially; each directive carries all the data it
/// needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    /// Set a named ring's stroke-dashoffset.
    SetRingOffset { ring: RingRole, dashoffset: f32 },
    /// Show or hide the to-top button.
    SetTopButtonVisible { visible: bool },
    /// Condense or expand the navbar.
    SetNavbarCondensed { condensed: bool },
    /// Translate the hero image.
    SetHeroOffset { dx: f32, dy: f32 },
    /// Dismiss the page loader after a delay.
    DismissLoader { delay_ms: u32 },
    /// Smooth-scroll the viewport to the top.
    ScrollToTop,
    /// Smooth-scroll to an in-page fragment.
    ScrollToFragment { fragment: String },
    /// Close the mobile navigation panel.
    CloseNav,
    /// Mark one service card active.
    SetActiveService { index: usize },
    /// Mark one filter control active.
    SetActiveFilter { label: String },
    /// Fade/scale a portfolio item in.
    RevealItem { index: usize },
    /// Fade/scale a portfolio item out, removing it from layout after the delay.
    ConcealItem { index: usize, remove_after_ms: u32 },
    /// Update a stat counter's display text.
    SetCounterText { index: usize, text: String },
    /// Show an inline form status message.
    ShowStatus {
        channel: FormChannel,
        kind: StatusKind,
        message: String,
    },
    /// Clear a form's inline status messages.
    ClearStatus { channel: FormChannel },
    /// Reset a form's fields.
    ResetForm { form: FormChannel },
}

/// Directive list returned to JS. `animating` tells plumbing whether to
/// keep (or start) its frame loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DirectiveBatch {
    pub directives: Vec<Directive>,
    pub animating: bool,
}
