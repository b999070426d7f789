//! Mock Data
//!
//! Compiled-in fixture data for cameras, alerts, and monitored locations.
//! Both screens are purely presentational: nothing here is ever created,
//! updated, or deleted at runtime, only selection state changes.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};

/// Connectivity status of a camera
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraStatus {
    Online,
    Offline,
}

impl CameraStatus {
    /// Whether the camera currently has a live connection
    pub fn is_online(&self) -> bool {
        matches!(self, CameraStatus::Online)
    }
}

/// A single monitored camera
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub id: String,
    pub name: String,
    pub status: CameraStatus,
    pub last_alert: String,
}

/// Category of a recorded alert
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertKind {
    Motion,
    Door,
}

impl AlertKind {
    pub fn label(&self) -> &'static str {
        match self {
            AlertKind::Motion => "motion",
            AlertKind::Door => "door",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            AlertKind::Motion => "🏃",
            AlertKind::Door => "🚪",
        }
    }
}

/// An alert entry shown in the sidebar
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: u32,
    pub kind: AlertKind,
    pub camera: String,
    pub timestamp: NaiveTime,
}

impl Alert {
    /// Display form of the alert time, e.g. "2:45 PM"
    pub fn time_label(&self) -> String {
        self.timestamp.format("%-I:%M %p").to_string()
    }
}

/// A monitored site shown on the map
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub id: u32,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub video_url: String,
}

/// A named group of locations for the sidebar.
///
/// Distinct from the map's visual marker-clustering, which the Leaflet
/// plugin computes on its own from marker positions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LocationCluster {
    pub name: String,
    pub locations: Vec<Location>,
}

fn camera(id: &str, name: &str, status: CameraStatus, last_alert: &str) -> Camera {
    Camera {
        id: id.to_string(),
        name: name.to_string(),
        status,
        last_alert: last_alert.to_string(),
    }
}

fn location(id: u32, name: &str, latitude: f64, longitude: f64, video_url: &str) -> Location {
    Location {
        id,
        name: name.to_string(),
        latitude,
        longitude,
        video_url: video_url.to_string(),
    }
}

/// The camera roster
pub fn cameras() -> Vec<Camera> {
    vec![
        camera("camera-1", "Front Door", CameraStatus::Online, "Motion detected"),
        camera("camera-2", "Backyard", CameraStatus::Online, "No alerts"),
        camera("camera-3", "Garage", CameraStatus::Offline, "Offline"),
    ]
}

/// Recent alerts, newest first
pub fn alerts() -> Vec<Alert> {
    vec![
        Alert {
            id: 1,
            kind: AlertKind::Motion,
            camera: "Front Door".to_string(),
            timestamp: NaiveTime::from_hms_opt(14, 45, 0).unwrap(),
        },
        Alert {
            id: 2,
            kind: AlertKind::Door,
            camera: "Garage".to_string(),
            timestamp: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
        },
    ]
}

/// Monitored locations grouped into sidebar clusters
pub fn clusters() -> Vec<LocationCluster> {
    let feed_a = "https://www.youtube.com/embed/oOOeas1aQGc";
    let feed_b = "https://www.youtube.com/embed/dgi4dBPut3Y";

    vec![
        LocationCluster {
            name: "Cluster 1".to_string(),
            locations: vec![
                location(1, "Location 1", 37.7749, -122.4194, feed_a),
                location(2, "Location 2", 34.0522, -118.2437, feed_b),
                location(3, "Location 3", 40.7128, -74.0060, feed_b),
            ],
        },
        LocationCluster {
            name: "Cluster 2".to_string(),
            locations: vec![
                location(4, "Location 4", 51.5074, -0.1278, feed_b),
                location(5, "Location 5", 48.8566, 2.3522, feed_b),
                location(6, "Location 6", 52.5200, 13.4050, feed_b),
            ],
        },
        LocationCluster {
            name: "Cluster 3".to_string(),
            locations: vec![
                location(7, "Location 7", 41.9028, 12.4964, feed_b),
                location(8, "Location 8", 35.6895, 139.6917, feed_b),
                location(9, "Location 9", 55.7558, 37.6173, feed_b),
                location(10, "Location 10", -33.8688, 151.2093, feed_b),
            ],
        },
    ]
}

/// Every location across every cluster, in sidebar order
pub fn all_locations() -> Vec<Location> {
    clusters().into_iter().flat_map(|c| c.locations).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mock_shape() {
        assert_eq!(cameras().len(), 3);
        assert_eq!(alerts().len(), 2);
        assert_eq!(clusters().len(), 3);
        assert_eq!(all_locations().len(), 10);
    }

    #[test]
    fn test_location_ids_unique() {
        let mut ids: Vec<u32> = all_locations().iter().map(|l| l.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), 10);
    }

    #[test]
    fn test_alert_time_label() {
        let alert = alerts().remove(0);
        assert_eq!(alert.time_label(), "2:45 PM");
    }

    #[test]
    fn test_camera_status() {
        let cameras = cameras();
        assert!(cameras[0].status.is_online());
        assert!(!cameras[2].status.is_online());
    }
}
