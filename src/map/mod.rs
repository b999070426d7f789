//! Map Collaborator
//!
//! Thin bindings to the Leaflet library loaded in `index.html`.

pub mod leaflet;
