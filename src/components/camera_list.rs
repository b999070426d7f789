//! Camera List Component
//!
//! Sidebar roster of cameras with selection highlighting.

use leptos::*;

use crate::data::Camera;
use crate::state::dashboard::DashboardState;

/// Selectable camera roster
#[component]
pub fn CameraList(cameras: Vec<Camera>) -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    view! {
        <section class="bg-gray-800 rounded-xl p-4">
            <h2 class="text-lg font-semibold mb-2">"Cameras"</h2>
            <ul class="space-y-1">
                {cameras
                    .into_iter()
                    .map(|camera| {
                        let id = camera.id.clone();
                        let id_for_click = camera.id.clone();
                        let selected = create_memo(move |_| {
                            state.view.with(|v| v.selected_camera == id)
                        });
                        let dot = if camera.status.is_online() {
                            "text-green-400"
                        } else {
                            "text-red-400"
                        };

                        view! {
                            <li>
                                <button
                                    on:click=move |_| state.select_camera(&id_for_click)
                                    class=move || {
                                        let base = "w-full flex items-center gap-3 px-3 py-2 \
                                                    rounded-lg text-left transition-colors";
                                        if selected.get() {
                                            format!("{} bg-gray-700", base)
                                        } else {
                                            format!("{} hover:bg-gray-700/50", base)
                                        }
                                    }
                                >
                                    <span class=format!("text-xs {}", dot)>"●"</span>
                                    <span class="flex-1 min-w-0">
                                        <span class="block truncate">{camera.name.clone()}</span>
                                        <span class="block text-xs text-gray-400 truncate">
                                            {camera.last_alert.clone()}
                                        </span>
                                    </span>
                                </button>
                            </li>
                        }
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}
