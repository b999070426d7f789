//! Pages
//!
//! Top-level page components for each route.

pub mod dashboard;
pub mod locations;

pub use dashboard::Dashboard;
pub use locations::Locations;
