//! Navigation Component
//!
//! Header bar with brand, screen links, and a live clock.

use chrono::Local;
use leptos::*;
use leptos_router::*;

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"📹"</span>
                        <span class="text-xl font-bold text-white">"Vigil"</span>
                    </A>

                    // Navigation links
                    <div class="flex items-center space-x-1">
                        <NavLink href="/" label="Cameras" />
                        <NavLink href="/map" label="Map" />
                    </div>

                    <Clock />
                </div>
            </div>
        </nav>
    }
}

/// Individual navigation link
#[component]
fn NavLink(
    href: &'static str,
    label: &'static str,
) -> impl IntoView {
    view! {
        <A
            href=href
            class="px-4 py-2 rounded-lg text-gray-300 hover:text-white hover:bg-gray-700 transition-colors"
            active_class="bg-gray-700 text-white"
        >
            {label}
        </A>
    }
}

/// Wall-clock readout, updated once per second
#[component]
fn Clock() -> impl IntoView {
    let (now, set_now) = create_signal(Local::now());

    let tick = gloo_timers::callback::Interval::new(1_000, move || {
        set_now.set(Local::now());
    });
    on_cleanup(move || drop(tick));

    view! {
        <span class="text-sm text-gray-400 tabular-nums">
            {move || now.get().format("%a %H:%M:%S").to_string()}
        </span>
    }
}
