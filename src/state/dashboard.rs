//! Dashboard View State
//!
//! State record and transition functions for the camera dashboard screen.
//! `ViewState` is a plain value with pure transitions; `DashboardState`
//! binds it to Leptos signals for the view layer.

use leptos::*;

use crate::state::viewport::ViewportClass;

/// Video grid layout chosen by the user
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutMode {
    Single,
    Split,
    Quad,
}

impl LayoutMode {
    /// All selectable modes, in control-bar order
    pub const ALL: [LayoutMode; 3] = [LayoutMode::Single, LayoutMode::Split, LayoutMode::Quad];

    /// Number of video tiles the mode displays
    pub fn tile_count(&self) -> usize {
        match self {
            LayoutMode::Single => 1,
            LayoutMode::Split => 2,
            LayoutMode::Quad => 4,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LayoutMode::Single => "Single",
            LayoutMode::Split => "Split",
            LayoutMode::Quad => "Quad",
        }
    }

    /// Control-bar button glyph
    pub fn glyph(&self) -> &'static str {
        match self {
            LayoutMode::Single => "▢",
            LayoutMode::Split => "▥",
            LayoutMode::Quad => "▦",
        }
    }

    /// Tailwind grid classes for the tile container
    pub fn grid_class(&self) -> &'static str {
        match self {
            LayoutMode::Single => "grid-cols-1 grid-rows-1",
            LayoutMode::Split => "grid-cols-2 grid-rows-1",
            LayoutMode::Quad => "grid-cols-2 grid-rows-2",
        }
    }
}

/// Night vision mode for the settings panel
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum NightVision {
    #[default]
    Auto,
    On,
    Off,
}

impl NightVision {
    pub const ALL: [NightVision; 3] = [NightVision::Auto, NightVision::On, NightVision::Off];

    /// Form value for the select control
    pub fn value(&self) -> &'static str {
        match self {
            NightVision::Auto => "auto",
            NightVision::On => "on",
            NightVision::Off => "off",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NightVision::Auto => "Auto",
            NightVision::On => "On",
            NightVision::Off => "Off",
        }
    }

    /// Parse a form value; unknown input falls back to `Auto`
    pub fn from_value(value: &str) -> NightVision {
        match value {
            "on" => NightVision::On,
            "off" => NightVision::Off,
            _ => NightVision::Auto,
        }
    }
}

/// Sensitivity bounds accepted by the settings slider
pub const SENSITIVITY_MIN: i32 = 0;
pub const SENSITIVITY_MAX: i32 = 100;

/// Plain state record for the dashboard screen
#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub selected_camera: String,
    pub recording: bool,
    /// Layout the user asked for; preserved across viewport changes
    pub layout: LayoutMode,
    pub audio_enabled: bool,
    pub sensitivity: i32,
    pub night_vision: NightVision,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new("camera-1")
    }
}

impl ViewState {
    pub fn new(selected_camera: &str) -> Self {
        Self {
            selected_camera: selected_camera.to_string(),
            recording: false,
            layout: LayoutMode::Single,
            audio_enabled: false,
            sensitivity: 70,
            night_vision: NightVision::Auto,
        }
    }

    /// Highlight a camera in the sidebar roster
    pub fn select_camera(&mut self, id: &str) {
        self.selected_camera = id.to_string();
    }

    /// Flip the cosmetic REC indicator
    pub fn toggle_recording(&mut self) {
        self.recording = !self.recording;
    }

    /// Flip the mute/unmute indicator
    pub fn toggle_audio(&mut self) {
        self.audio_enabled = !self.audio_enabled;
    }

    /// Store a new desired layout. Manual layout switching is unavailable
    /// on narrow viewports, so the call is ignored there.
    pub fn set_layout(&mut self, mode: LayoutMode, viewport: ViewportClass) {
        if viewport.is_narrow() {
            return;
        }
        self.layout = mode;
    }

    /// Clamp a sensitivity value into range and store it
    pub fn set_sensitivity(&mut self, value: i32) {
        self.sensitivity = value.clamp(SENSITIVITY_MIN, SENSITIVITY_MAX);
    }

    pub fn set_night_vision(&mut self, mode: NightVision) {
        self.night_vision = mode;
    }

    /// Layout actually rendered: narrow viewports always collapse to a
    /// single tile without touching the stored preference.
    pub fn effective_layout(&self, viewport: ViewportClass) -> LayoutMode {
        if viewport.is_narrow() {
            LayoutMode::Single
        } else {
            self.layout
        }
    }
}

/// Reactive dashboard state provided to the camera screen's components
#[derive(Clone, Copy)]
pub struct DashboardState {
    pub view: RwSignal<ViewState>,
    pub viewport: RwSignal<ViewportClass>,
}

impl DashboardState {
    pub fn new(viewport: RwSignal<ViewportClass>) -> Self {
        Self {
            view: create_rw_signal(ViewState::default()),
            viewport,
        }
    }

    pub fn select_camera(&self, id: &str) {
        let id = id.to_string();
        self.view.update(|v| v.select_camera(&id));
    }

    pub fn toggle_recording(&self) {
        self.view.update(|v| v.toggle_recording());
    }

    pub fn toggle_audio(&self) {
        self.view.update(|v| v.toggle_audio());
    }

    pub fn set_layout(&self, mode: LayoutMode) {
        let viewport = self.viewport.get_untracked();
        self.view.update(|v| v.set_layout(mode, viewport));
    }

    pub fn set_sensitivity(&self, value: i32) {
        self.view.update(|v| v.set_sensitivity(value));
    }

    pub fn set_night_vision(&self, mode: NightVision) {
        self.view.update(|v| v.set_night_vision(mode));
    }

    /// Layout to render right now (tracks both signals)
    pub fn effective_layout(&self) -> LayoutMode {
        let viewport = self.viewport.get();
        self.view.with(|v| v.effective_layout(viewport))
    }
}

/// Provide dashboard state to the camera screen's component subtree
pub fn provide_dashboard_state(viewport: RwSignal<ViewportClass>) {
    provide_context(DashboardState::new(viewport));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_counts() {
        assert_eq!(LayoutMode::Single.tile_count(), 1);
        assert_eq!(LayoutMode::Split.tile_count(), 2);
        assert_eq!(LayoutMode::Quad.tile_count(), 4);
    }

    #[test]
    fn test_narrow_viewport_forces_single() {
        let mut view = ViewState::default();
        view.set_layout(LayoutMode::Quad, ViewportClass::Wide);
        assert_eq!(view.effective_layout(ViewportClass::Narrow), LayoutMode::Single);
        // the stored preference is untouched by the override
        assert_eq!(view.layout, LayoutMode::Quad);
    }

    #[test]
    fn test_layout_survives_viewport_round_trip() {
        let mut view = ViewState::default();
        view.set_layout(LayoutMode::Quad, ViewportClass::Wide);
        assert_eq!(view.effective_layout(ViewportClass::Narrow), LayoutMode::Single);
        assert_eq!(view.effective_layout(ViewportClass::Wide), LayoutMode::Quad);
    }

    #[test]
    fn test_set_layout_ignored_while_narrow() {
        let mut view = ViewState::default();
        view.set_layout(LayoutMode::Split, ViewportClass::Narrow);
        assert_eq!(view.layout, LayoutMode::Single);
    }

    #[test]
    fn test_toggle_recording_twice_restores() {
        let mut view = ViewState::default();
        let before = view.recording;
        view.toggle_recording();
        assert_ne!(view.recording, before);
        view.toggle_recording();
        assert_eq!(view.recording, before);
    }

    #[test]
    fn test_toggle_audio() {
        let mut view = ViewState::default();
        assert!(!view.audio_enabled);
        view.toggle_audio();
        assert!(view.audio_enabled);
    }

    #[test]
    fn test_sensitivity_clamped() {
        let mut view = ViewState::default();
        view.set_sensitivity(180);
        assert_eq!(view.sensitivity, 100);
        view.set_sensitivity(-5);
        assert_eq!(view.sensitivity, 0);
        view.set_sensitivity(42);
        assert_eq!(view.sensitivity, 42);
    }

    #[test]
    fn test_select_camera() {
        let mut view = ViewState::default();
        view.select_camera("camera-3");
        assert_eq!(view.selected_camera, "camera-3");
    }

    #[test]
    fn test_night_vision_from_value() {
        assert_eq!(NightVision::from_value("on"), NightVision::On);
        assert_eq!(NightVision::from_value("off"), NightVision::Off);
        assert_eq!(NightVision::from_value("anything"), NightVision::Auto);
    }
}
