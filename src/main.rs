//! Vigil Dashboard
//!
//! Security camera monitoring dashboard built with Leptos (WASM).
//!
//! # Features
//!
//! - Multi-camera live view with switchable grid layouts
//! - Recording and audio toggles, camera settings
//! - Map-based location browser with marker clustering
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. Both screens render over compiled-in mock data; the only
//! external collaborators are the Leaflet map library, the OpenStreetMap
//! tile server, and embedded video iframes.

use leptos::*;

mod app;
mod components;
mod data;
mod map;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
