//! Settings Panel Component
//!
//! Motion sensitivity slider and night vision selector. The slider clamps
//! at the input layer, so out-of-range values are never stored.

use leptos::*;

use crate::state::dashboard::{DashboardState, NightVision, SENSITIVITY_MAX, SENSITIVITY_MIN};

/// Camera settings form
#[component]
pub fn SettingsPanel() -> impl IntoView {
    let state = use_context::<DashboardState>().expect("DashboardState not found");

    let sensitivity = create_memo(move |_| state.view.with(|v| v.sensitivity));
    let night_vision = create_memo(move |_| state.view.with(|v| v.night_vision));

    view! {
        <section class="bg-gray-800 rounded-xl p-4">
            <h2 class="text-lg font-semibold mb-2">"Camera Settings"</h2>
            <div class="space-y-4">
                // Motion sensitivity
                <div>
                    <label class="block text-sm text-gray-400 mb-2">
                        "Motion Sensitivity"
                        <span class="float-right tabular-nums">{move || sensitivity.get()}</span>
                    </label>
                    <input
                        type="range"
                        min=SENSITIVITY_MIN
                        max=SENSITIVITY_MAX
                        step="1"
                        prop:value=move || sensitivity.get().to_string()
                        on:input=move |ev| {
                            if let Ok(value) = event_target_value(&ev).parse::<i32>() {
                                state.set_sensitivity(value);
                            }
                        }
                        class="w-full accent-primary-500"
                    />
                </div>

                // Night vision
                <div>
                    <label class="block text-sm text-gray-400 mb-2">"Night Vision"</label>
                    <select
                        prop:value=move || night_vision.get().value().to_string()
                        on:change=move |ev| {
                            state.set_night_vision(NightVision::from_value(&event_target_value(&ev)));
                        }
                        class="bg-gray-700 rounded-lg px-4 py-2 w-full
                               border border-gray-600 focus:border-primary-500 focus:outline-none"
                    >
                        {NightVision::ALL
                            .into_iter()
                            .map(|mode| view! { <option value=mode.value()>{mode.label()}</option> })
                            .collect_view()}
                    </select>
                </div>
            </div>
        </section>
    }
}
