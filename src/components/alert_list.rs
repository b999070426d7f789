//! Alert List Component
//!
//! Recent alerts rendered verbatim from the mock feed.

use leptos::*;

use crate::data::Alert;

/// Recent alerts panel
#[component]
pub fn AlertList(alerts: Vec<Alert>) -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-4">
            <h2 class="text-lg font-semibold mb-2">"Recent Alerts"</h2>
            {if alerts.is_empty() {
                view! { <p class="text-sm text-gray-400">"No recent alerts"</p> }.into_view()
            } else {
                view! {
                    <ul class="space-y-2">
                        {alerts
                            .into_iter()
                            .map(|alert| {
                                view! {
                                    <li class="flex items-center gap-3">
                                        <span class="w-8 h-8 rounded-full bg-yellow-600 flex items-center justify-center text-sm">
                                            {alert.kind.icon()}
                                        </span>
                                        <span class="flex-1 min-w-0">
                                            <span class="block capitalize">{alert.kind.label()}</span>
                                            <span class="block text-xs text-gray-400 truncate">
                                                {format!("{} - {}", alert.camera, alert.time_label())}
                                            </span>
                                        </span>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                .into_view()
            }}
        </section>
    }
}
