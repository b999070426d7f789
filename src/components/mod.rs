//! UI Components
//!
//! Reusable Leptos components for the dashboard screens.

pub mod alert_list;
pub mod camera_list;
pub mod control_bar;
pub mod location_map;
pub mod nav;
pub mod settings_panel;
pub mod video_grid;

pub use alert_list::AlertList;
pub use camera_list::CameraList;
pub use control_bar::ControlBar;
pub use location_map::LocationMap;
pub use nav::Nav;
pub use settings_panel::SettingsPanel;
pub use video_grid::VideoGrid;
