//! Location Map Component
//!
//! Leaflet-backed map pane: tile layer, clustered location markers with
//! video popups, and viewport commands driven by the selection state.

use leptos::*;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

use crate::data::{all_locations, Location};
use crate::map::leaflet;
use crate::state::map::{viewport_command, IconRule, MapState, MarkerStyle};

/// DOM id of the map container div
const MAP_CONTAINER_ID: &str = "location-map";

/// Tile endpoint template and attribution for OpenStreetMap
const TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";
const TILE_ATTRIBUTION: &str =
    "&copy; <a href=\"https://www.openstreetmap.org/copyright\">OpenStreetMap</a> contributors";

/// Stock Leaflet marker art from the unpkg CDN
const PIN_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon.png";
const PIN_2X_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-icon-2x.png";
const PIN_SHADOW_URL: &str = "https://unpkg.com/leaflet@1.9.4/dist/images/marker-shadow.png";

/// Interactive map over every monitored location
#[component]
pub fn LocationMap(
    state: MapState,
    /// Marker style assignment; injectable for deterministic rendering
    #[prop(default = IconRule::Alternating)]
    icon_rule: IconRule,
) -> impl IntoView {
    let map_handle: StoredValue<Option<leaflet::LeafletMap>> = store_value(None);

    // Build the map once the container div is in the DOM
    create_effect(move |_| {
        if map_handle.with_value(|m| m.is_some()) {
            return;
        }
        if !leaflet::is_available() {
            web_sys::console::error_1(&"Leaflet is not loaded; map pane disabled".into());
            return;
        }
        map_handle.set_value(Some(init_map(state, icon_rule)));
    });

    // Re-run the viewport command whenever the selection changes
    create_effect(move |_| {
        let selected = state.selected.get();
        map_handle.with_value(|handle| {
            if let Some(map) = handle {
                let command = viewport_command(selected.as_ref(), &all_locations());
                leaflet::apply_command(map, &command);
            }
        });
    });

    on_cleanup(move || {
        map_handle.update_value(|handle| {
            if let Some(map) = handle.take() {
                map.remove();
            }
        });
    });

    view! {
        <div class="w-full h-[calc(100vh-4rem)]">
            {if leaflet::is_available() {
                view! { <div id=MAP_CONTAINER_ID class="w-full h-full" /> }.into_view()
            } else {
                view! {
                    <div class="h-full flex items-center justify-center bg-gray-800 text-gray-400">
                        "Map library failed to load"
                    </div>
                }
                .into_view()
            }}
        </div>
    }
}

/// Create the map, tile layer, cluster group, and one marker per location
fn init_map(state: MapState, icon_rule: IconRule) -> leaflet::LeafletMap {
    let map = leaflet::new_map(
        MAP_CONTAINER_ID,
        &leaflet::options(&[
            ("center", leaflet::lat_lng(0.0, 0.0).into()),
            ("zoom", JsValue::from_f64(1.0)),
        ]),
    );

    leaflet::tile_layer(
        TILE_URL,
        &leaflet::options(&[("attribution", JsValue::from_str(TILE_ATTRIBUTION))]),
    )
    .add_to(&map);

    let cluster_icons = Closure::wrap(
        Box::new(cluster_icon) as Box<dyn FnMut(leaflet::MarkerCluster) -> leaflet::Icon>
    );
    let group = leaflet::marker_cluster_group(&leaflet::options(&[(
        "iconCreateFunction",
        cluster_icons.as_ref().clone(),
    )]));
    cluster_icons.forget();

    for location in all_locations() {
        add_marker(&group, location, icon_rule, state);
    }
    group.add_group_to(&map);

    map
}

/// Cluster glyph showing the number of grouped markers
fn cluster_icon(cluster: leaflet::MarkerCluster) -> leaflet::Icon {
    let html = format!(
        "<div class=\"ripple\"></div><span class=\"pin cluster-count\">{}</span>",
        cluster.child_count()
    );
    leaflet::div_icon(&leaflet::options(&[
        ("className", JsValue::from_str("custom-icon")),
        ("html", JsValue::from_str(&html)),
    ]))
}

/// Add one location marker with its popup and click handler
fn add_marker(
    group: &leaflet::MarkerClusterGroup,
    location: Location,
    icon_rule: IconRule,
    state: MapState,
) {
    let icon = marker_icon(icon_rule.style_for(&location));
    let marker = leaflet::marker(
        &leaflet::lat_lng(location.latitude, location.longitude),
        &leaflet::options(&[("icon", icon.into())]),
    );
    marker.bind_popup(&popup_html(&location));

    let on_click = Closure::wrap(Box::new(move || {
        state.select(location.clone());
    }) as Box<dyn FnMut()>);
    marker.on("click", on_click.as_ref().unchecked_ref());
    on_click.forget();

    group.add_layer(&marker);
}

/// Build the Leaflet icon for a marker style
fn marker_icon(style: MarkerStyle) -> leaflet::Icon {
    match style {
        MarkerStyle::Ripple => leaflet::div_icon(&leaflet::options(&[
            ("className", JsValue::from_str("custom-icon")),
            (
                "html",
                JsValue::from_str(&format!(
                    "<div class=\"ripple\"></div><img src=\"{PIN_URL}\" class=\"pin\" alt=\"\" />"
                )),
            ),
        ])),
        MarkerStyle::Standard => leaflet::icon(&leaflet::options(&[
            ("iconUrl", JsValue::from_str(PIN_URL)),
            ("iconRetinaUrl", JsValue::from_str(PIN_2X_URL)),
            ("shadowUrl", JsValue::from_str(PIN_SHADOW_URL)),
            ("iconSize", leaflet::point(25.0, 41.0).into()),
            ("iconAnchor", leaflet::point(12.0, 41.0).into()),
            ("popupAnchor", leaflet::point(1.0, -34.0).into()),
            ("shadowSize", leaflet::point(41.0, 41.0).into()),
        ])),
    }
}

/// Popup body: location name over its sandboxed video embed
fn popup_html(location: &Location) -> String {
    format!(
        "<div class=\"map-popup\">\
           <h3 class=\"font-semibold mb-2\">{}</h3>\
           <iframe height=\"300\" width=\"400\" src=\"{}\" \
             sandbox=\"allow-scripts allow-same-origin allow-presentation\" \
             allow=\"accelerometer; autoplay; clipboard-write; encrypted-media; gyroscope; picture-in-picture\" \
             allowfullscreen></iframe>\
         </div>",
        location.name, location.video_url
    )
}
