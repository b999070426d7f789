//! Control Bar Component
//!
//! Recording / audio toggles and the layout button group.

use leptos::*;

use crate::state::dashboard::{DashboardState, LayoutMode};

/// Control bar under the video grid
#[component]
pub fn ControlBar() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let recording = create_memo(move |_| state.view.with(|v| v.recording));
    let audio = create_memo(move |_| state.view.with(|v| v.audio_enabled));

    view! {
        <div class="bg-gray-800 rounded-xl p-2 flex flex-wrap items-center gap-2 md:gap-4">
            // Recording toggle
            <button
                on:click=move |_| state.toggle_recording()
                title=move || if recording.get() { "Stop Recording" } else { "Start Recording" }
                class=move || {
                    let base = "px-3 py-2 rounded-lg font-medium transition-colors";
                    if recording.get() {
                        format!("{} bg-red-600 text-white", base)
                    } else {
                        format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                    }
                }
            >
                "⏺"
            </button>

            // Audio toggle
            <button
                on:click=move |_| state.toggle_audio()
                title=move || if audio.get() { "Mute Audio" } else { "Enable Audio" }
                class=move || {
                    let base = "px-3 py-2 rounded-lg font-medium transition-colors";
                    if audio.get() {
                        format!("{} bg-primary-600 text-white", base)
                    } else {
                        format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                    }
                }
            >
                {move || if audio.get() { "🎙" } else { "🔇" }}
            </button>

            <LayoutButtons />
        </div>
    }
}

/// Layout selection; inert while the viewport is narrow
#[component]
fn LayoutButtons() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let narrow = create_memo(move |_| state.viewport.get().is_narrow());
    let desired = create_memo(move |_| state.view.with(|v| v.layout));

    view! {
        <div class="flex rounded-lg overflow-hidden border border-gray-700">
            {LayoutMode::ALL
                .into_iter()
                .map(|mode| {
                    view! {
                        <button
                            on:click=move |_| state.set_layout(mode)
                            disabled=move || narrow.get()
                            title=mode.label()
                            class=move || {
                                let base = "px-3 py-2 text-sm font-medium transition-colors \
                                            disabled:opacity-50 disabled:cursor-not-allowed";
                                if desired.get() == mode {
                                    format!("{} bg-primary-600 text-white", base)
                                } else {
                                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                                }
                            }
                        >
                            {mode.glyph()}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
