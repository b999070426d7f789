//! Locations Page
//!
//! Map-based location browser: clustered sidebar plus the Leaflet pane.
//! Selecting a location flies the map to it; clearing the selection
//! returns to the all-locations overview.

use leptos::*;

use crate::components::LocationMap;
use crate::data::{self, Location};
use crate::state::map::MapState;

/// Location map page component
#[component]
pub fn Locations() -> impl IntoView {
    // Screen-local selection, discarded on navigation
    let state = MapState::new();

    view! {
        <div class="flex-1 flex flex-col md:flex-row">
            // Sidebar
            <aside class="w-full md:w-64 bg-gray-800 p-4 space-y-4 overflow-y-auto">
                <div class="flex items-center justify-between">
                    <h2 class="text-xl font-bold">"Locations"</h2>
                    <button
                        on:click=move |_| state.clear()
                        class="text-sm text-gray-400 hover:text-white transition-colors"
                    >
                        "All locations"
                    </button>
                </div>

                {data::clusters()
                    .into_iter()
                    .map(|cluster| {
                        view! {
                            <div>
                                <h3 class="text-lg font-bold mt-2">{cluster.name}</h3>
                                <ul class="ml-4 space-y-1">
                                    {cluster
                                        .locations
                                        .into_iter()
                                        .map(|location| {
                                            view! { <LocationButton location=location state=state /> }
                                        })
                                        .collect_view()}
                                </ul>
                            </div>
                        }
                    })
                    .collect_view()}
            </aside>

            // Map pane
            <main class="flex-1 bg-gray-900">
                <LocationMap state=state />
            </main>
        </div>
    }
}

/// Sidebar entry for one location
#[component]
fn LocationButton(location: Location, state: MapState) -> impl IntoView {
    let id = location.id;
    let name = location.name.clone();

    view! {
        <li>
            <button
                on:click=move |_| state.select(location.clone())
                class=move || {
                    let base = "hover:underline text-left";
                    if state.is_selected(id) {
                        format!("{} text-primary-400 font-medium", base)
                    } else {
                        format!("{} text-gray-200", base)
                    }
                }
            >
                {name}
            </button>
        </li>
    }
}
