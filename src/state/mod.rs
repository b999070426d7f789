//! State Management
//!
//! Per-screen view state, viewport classification, and map selection logic.

pub mod dashboard;
pub mod map;
pub mod viewport;

pub use dashboard::{provide_dashboard_state, DashboardState, LayoutMode, NightVision, ViewState};
pub use map::{viewport_command, IconRule, LatLngBounds, MapCommand, MapState, MarkerStyle};
pub use viewport::{classify_width, use_viewport_class, ViewportClass};
