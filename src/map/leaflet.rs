//! Leaflet Bindings
//!
//! Minimal wasm-bindgen bindings for the Leaflet map library and the
//! markercluster plugin. Leaflet is loaded from a CDN in `index.html`;
//! [`is_available`] guards against the script failing to load.

use js_sys::{Array, Function, Object, Reflect};
use wasm_bindgen::prelude::*;

use crate::state::map::{LatLngBounds, MapCommand};

#[wasm_bindgen]
extern "C" {
    /// A Leaflet map instance (`L.Map`)
    pub type LeafletMap;

    #[wasm_bindgen(js_namespace = L, js_name = map)]
    pub fn new_map(container_id: &str, options: &JsValue) -> LeafletMap;

    #[wasm_bindgen(method, js_name = flyTo)]
    pub fn fly_to(this: &LeafletMap, center: &Array, zoom: f64, options: &JsValue);

    #[wasm_bindgen(method, js_name = fitBounds)]
    pub fn fit_bounds(this: &LeafletMap, corners: &Array);

    #[wasm_bindgen(method)]
    pub fn remove(this: &LeafletMap);

    /// A raster tile layer (`L.TileLayer`)
    pub type TileLayer;

    #[wasm_bindgen(js_namespace = L, js_name = tileLayer)]
    pub fn tile_layer(url_template: &str, options: &JsValue) -> TileLayer;

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_to(this: &TileLayer, map: &LeafletMap) -> TileLayer;

    /// A point marker (`L.Marker`)
    pub type Marker;

    #[wasm_bindgen(js_namespace = L, js_name = marker)]
    pub fn marker(lat_lng: &Array, options: &JsValue) -> Marker;

    #[wasm_bindgen(method, js_name = bindPopup)]
    pub fn bind_popup(this: &Marker, html: &str) -> Marker;

    #[wasm_bindgen(method)]
    pub fn on(this: &Marker, event: &str, handler: &Function) -> Marker;

    /// A marker icon (`L.Icon` or `L.DivIcon`)
    pub type Icon;

    #[wasm_bindgen(js_namespace = L, js_name = icon)]
    pub fn icon(options: &JsValue) -> Icon;

    #[wasm_bindgen(js_namespace = L, js_name = divIcon)]
    pub fn div_icon(options: &JsValue) -> Icon;

    /// Clustered marker layer from the markercluster plugin
    pub type MarkerClusterGroup;

    #[wasm_bindgen(js_namespace = L, js_name = markerClusterGroup)]
    pub fn marker_cluster_group(options: &JsValue) -> MarkerClusterGroup;

    #[wasm_bindgen(method, js_name = addLayer)]
    pub fn add_layer(this: &MarkerClusterGroup, marker: &Marker);

    #[wasm_bindgen(method, js_name = addTo)]
    pub fn add_group_to(this: &MarkerClusterGroup, map: &LeafletMap) -> MarkerClusterGroup;

    /// Cluster handle passed to the `iconCreateFunction` callback
    pub type MarkerCluster;

    #[wasm_bindgen(method, js_name = getChildCount)]
    pub fn child_count(this: &MarkerCluster) -> u32;
}

/// Whether the Leaflet global is present on the page
pub fn is_available() -> bool {
    Reflect::has(&js_sys::global(), &JsValue::from_str("L")).unwrap_or(false)
}

/// `[lat, lng]` pair in Leaflet argument form
pub fn lat_lng(lat: f64, lng: f64) -> Array {
    Array::of2(&lat.into(), &lng.into())
}

/// Two-element numeric array for pixel sizes and anchors
pub fn point(x: f64, y: f64) -> Array {
    Array::of2(&x.into(), &y.into())
}

/// `[[south, west], [north, east]]` in Leaflet bounds form
pub fn bounds_corners(bounds: &LatLngBounds) -> Array {
    Array::of2(
        &lat_lng(bounds.south, bounds.west),
        &lat_lng(bounds.north, bounds.east),
    )
}

/// Build a plain options object from key/value pairs
pub fn options(entries: &[(&str, JsValue)]) -> JsValue {
    let object = Object::new();
    for (key, value) in entries {
        // Reflect::set only fails on frozen objects, which this never is
        let _ = Reflect::set(&object, &JsValue::from_str(key), value);
    }
    object.into()
}

/// Execute a derived viewport command against a live map
pub fn apply_command(map: &LeafletMap, command: &MapCommand) {
    match command {
        MapCommand::FlyTo {
            lat,
            lng,
            zoom,
            duration_secs,
        } => {
            let opts = options(&[("duration", JsValue::from_f64(*duration_secs))]);
            map.fly_to(&lat_lng(*lat, *lng), *zoom, &opts);
        }
        MapCommand::FitBounds(bounds) => {
            map.fit_bounds(&bounds_corners(bounds));
        }
    }
}
