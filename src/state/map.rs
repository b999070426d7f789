//! Map Selection State
//!
//! Selection state machine and derived viewport commands for the location
//! map screen. The derivation is pure; the Leaflet component executes the
//! resulting commands against the live map.

use leptos::*;

use crate::data::Location;

/// Zoom level used when flying to a selected location
pub const FOCUS_ZOOM: f64 = 12.0;
/// Fly-to animation duration in seconds
pub const FLY_DURATION_SECS: f64 = 2.0;

/// Geographic bounding box (south-west / north-east corners)
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LatLngBounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl LatLngBounds {
    /// Smallest box containing every `(lat, lng)` pair, if any
    pub fn from_coordinates<I>(coords: I) -> Option<Self>
    where
        I: IntoIterator<Item = (f64, f64)>,
    {
        let mut iter = coords.into_iter();
        let (lat, lng) = iter.next()?;
        let mut bounds = Self {
            south: lat,
            west: lng,
            north: lat,
            east: lng,
        };
        for (lat, lng) in iter {
            bounds.south = bounds.south.min(lat);
            bounds.north = bounds.north.max(lat);
            bounds.west = bounds.west.min(lng);
            bounds.east = bounds.east.max(lng);
        }
        Some(bounds)
    }
}

/// Map viewport operation derived from the current selection
#[derive(Clone, Debug, PartialEq)]
pub enum MapCommand {
    /// Animate toward one location
    FlyTo {
        lat: f64,
        lng: f64,
        zoom: f64,
        duration_secs: f64,
    },
    /// Frame every monitored location
    FitBounds(LatLngBounds),
}

/// Derive the viewport command for the current selection.
///
/// A selection flies to that location; no selection (the overview state)
/// fits the bounding box of every location. An empty location list falls
/// back to a whole-world frame.
pub fn viewport_command(selected: Option<&Location>, locations: &[Location]) -> MapCommand {
    match selected {
        Some(location) => MapCommand::FlyTo {
            lat: location.latitude,
            lng: location.longitude,
            zoom: FOCUS_ZOOM,
            duration_secs: FLY_DURATION_SECS,
        },
        None => {
            let bounds =
                LatLngBounds::from_coordinates(locations.iter().map(|l| (l.latitude, l.longitude)))
                    .unwrap_or(LatLngBounds {
                        south: -60.0,
                        west: -180.0,
                        north: 75.0,
                        east: 180.0,
                    });
            MapCommand::FitBounds(bounds)
        }
    }
}

/// Visual style of a location marker
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkerStyle {
    /// Animated ripple pin
    Ripple,
    /// Stock Leaflet pin
    Standard,
}

/// Marker style assignment rule.
///
/// Replaces the old per-render random pick with a deterministic, injectable
/// strategy so renders are stable and tests can pin the rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum IconRule {
    /// Alternate styles by location id parity
    #[default]
    Alternating,
    /// Use one style for every marker
    Fixed(MarkerStyle),
}

impl IconRule {
    pub fn style_for(&self, location: &Location) -> MarkerStyle {
        match self {
            IconRule::Alternating => {
                if location.id % 2 == 0 {
                    MarkerStyle::Standard
                } else {
                    MarkerStyle::Ripple
                }
            }
            IconRule::Fixed(style) => *style,
        }
    }
}

/// Reactive selection state for the map screen
#[derive(Clone, Copy)]
pub struct MapState {
    pub selected: RwSignal<Option<Location>>,
}

impl MapState {
    /// Start in the overview state with nothing selected
    pub fn new() -> Self {
        Self {
            selected: create_rw_signal(None),
        }
    }

    pub fn select(&self, location: Location) {
        self.selected.set(Some(location));
    }

    pub fn clear(&self) {
        self.selected.set(None);
    }

    /// Whether the given location is the current selection (tracked)
    pub fn is_selected(&self, id: u32) -> bool {
        self.selected.with(|s| s.as_ref().map(|l| l.id) == Some(id))
    }
}

impl Default for MapState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data;

    #[test]
    fn test_overview_fits_all_locations() {
        let locations = data::all_locations();
        match viewport_command(None, &locations) {
            MapCommand::FitBounds(bounds) => {
                assert_eq!(bounds.south, -33.8688);
                assert_eq!(bounds.north, 55.7558);
                assert_eq!(bounds.west, -122.4194);
                assert_eq!(bounds.east, 151.2093);
            }
            other => panic!("expected fit-bounds, got {:?}", other),
        }
    }

    #[test]
    fn test_selection_flies_to_location() {
        let locations = data::all_locations();
        let paris = locations.iter().find(|l| l.id == 5).unwrap();
        assert_eq!(
            viewport_command(Some(paris), &locations),
            MapCommand::FlyTo {
                lat: 48.8566,
                lng: 2.3522,
                zoom: FOCUS_ZOOM,
                duration_secs: FLY_DURATION_SECS,
            }
        );
    }

    #[test]
    fn test_clear_returns_to_initial_overview() {
        let locations = data::all_locations();
        let initial = viewport_command(None, &locations);
        let focused = viewport_command(Some(&locations[0]), &locations);
        assert_ne!(focused, initial);
        // selecting then clearing yields a command identical to the initial one
        assert_eq!(viewport_command(None, &locations), initial);
    }

    #[test]
    fn test_icon_rule_alternates_by_parity() {
        let rule = IconRule::Alternating;
        for location in &data::all_locations() {
            let expected = if location.id % 2 == 0 {
                MarkerStyle::Standard
            } else {
                MarkerStyle::Ripple
            };
            assert_eq!(rule.style_for(location), expected);
        }
    }

    #[test]
    fn test_fixed_icon_rule() {
        let rule = IconRule::Fixed(MarkerStyle::Standard);
        assert!(data::all_locations()
            .iter()
            .all(|l| rule.style_for(l) == MarkerStyle::Standard));
    }

    #[test]
    fn test_bounds_of_empty_list() {
        assert!(LatLngBounds::from_coordinates(std::iter::empty()).is_none());
    }

    #[test]
    fn test_bounds_of_single_point() {
        let bounds = LatLngBounds::from_coordinates([(48.8566, 2.3522)]).unwrap();
        assert_eq!(bounds.south, bounds.north);
        assert_eq!(bounds.west, bounds.east);
    }
}
