//! Video Grid Component
//!
//! Responsive tile grid for the live camera view. The grid shape follows
//! the effective layout mode; slots past the end of the camera roster
//! render a placeholder tile instead of failing.

use leptos::*;

use crate::data::Camera;
use crate::state::dashboard::DashboardState;

/// Tile grid sized by the effective layout mode
#[component]
pub fn VideoGrid(cameras: Vec<Camera>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let layout = create_memo(move |_| state.effective_layout());

    view! {
        <div class="flex-1 relative overflow-hidden bg-black rounded-xl">
            <div class=move || format!("grid h-full gap-1 p-1 {}", layout.get().grid_class())>
                {move || {
                    let cameras = cameras.clone();
                    (0..layout.get().tile_count())
                        .map(|slot| view! { <VideoTile camera=cameras.get(slot).cloned() /> })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

/// One grid cell: camera feed placeholder with status overlay
#[component]
fn VideoTile(camera: Option<Camera>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let recording = create_memo(move |_| state.view.with(|v| v.recording));

    let (status_class, name, body) = match &camera {
        Some(camera) => (
            if camera.status.is_online() {
                "text-green-400"
            } else {
                "text-red-400"
            },
            camera.name.clone(),
            "Live feed unavailable",
        ),
        None => ("text-gray-600", "No camera assigned".to_string(), "—"),
    };

    view! {
        <div class="relative bg-gray-800">
            // Overlay: status dot, name, REC badge
            <div class="absolute top-2 left-2 flex items-center gap-2 text-white">
                <span class=format!("text-xs {}", status_class)>"●"</span>
                <span class="text-xs truncate">{name}</span>
                {move || {
                    recording.get().then(|| view! {
                        <span class="flex items-center gap-1 text-red-500 text-xs font-semibold">
                            "● REC"
                        </span>
                    })
                }}
            </div>

            // Feed placeholder
            <div class="h-full flex items-center justify-center text-sm text-gray-600">
                {body}
            </div>

            <PtzControls />
        </div>
    }
}

/// Decorative pan/tilt/zoom button cluster. Device control is out of
/// scope, so these render without handlers.
#[component]
fn PtzControls() -> impl IntoView {
    view! {
        <div class="absolute bottom-2 right-2 flex gap-1">
            <div class="flex flex-col gap-1" title="Pan/Tilt">
                <PtzButton glyph="▲" />
                <PtzButton glyph="▼" />
            </div>
            <div class="flex flex-col gap-1" title="Zoom">
                <PtzButton glyph="+" />
                <PtzButton glyph="−" />
            </div>
        </div>
    }
}

#[component]
fn PtzButton(glyph: &'static str) -> impl IntoView {
    view! {
        <button class="w-8 h-8 rounded bg-gray-900/50 hover:bg-gray-900/70 text-white text-sm">
            {glyph}
        </button>
    }
}
