//! Dashboard Page
//!
//! Live multi-camera view: tile grid, control bar, and sidebar with the
//! camera roster, recent alerts, and camera settings.

use leptos::*;

use crate::components::{AlertList, CameraList, ControlBar, SettingsPanel, VideoGrid};
use crate::data;
use crate::state::dashboard::provide_dashboard_state;
use crate::state::viewport::use_viewport_class;

/// Camera dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    // Screen-local state, discarded on navigation
    let viewport = use_viewport_class();
    provide_dashboard_state(viewport);

    let cameras = data::cameras();
    let alerts = data::alerts();

    view! {
        <div class="flex-1 flex flex-col md:flex-row gap-4 p-4 overflow-hidden">
            // Main video area
            <div class="flex-1 flex flex-col gap-4 min-w-0">
                <VideoGrid cameras=cameras.clone() />
                <ControlBar />
            </div>

            // Right sidebar
            <div class="w-full md:w-80 flex flex-col gap-4 overflow-y-auto">
                <CameraList cameras=cameras />
                <AlertList alerts=alerts />
                <SettingsPanel />
            </div>
        </div>
    }
}
