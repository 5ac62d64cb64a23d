//! Map model
//!
//! The page drives a third-party map widget; here the widget's state is
//! plain data (markers, viewport, popup) that any front end can mirror.

use shared::models::Location;

/// Campus centre shown before any fitting happens
pub const DEFAULT_CENTER: LatLng = LatLng {
    lat: 38.9105,
    lng: -77.0670,
};

pub const DEFAULT_ZOOM: u8 = 13;

/// Zoom used when a single location is focused
pub const FOCUS_ZOOM: u8 = 15;

/// Popup image for locations without a photo
pub const PLACEHOLDER_IMAGE: &str = "images/location-placeholder.jpg";

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Lat/lng bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub south: f64,
    pub west: f64,
    pub north: f64,
    pub east: f64,
}

impl Bounds {
    /// Degenerate box around one point
    pub fn around(point: LatLng) -> Self {
        Self {
            south: point.lat,
            west: point.lng,
            north: point.lat,
            east: point.lng,
        }
    }

    pub fn extend(&mut self, point: LatLng) {
        self.south = self.south.min(point.lat);
        self.north = self.north.max(point.lat);
        self.west = self.west.min(point.lng);
        self.east = self.east.max(point.lng);
    }

    pub fn center(&self) -> LatLng {
        LatLng {
            lat: (self.south + self.north) / 2.0,
            lng: (self.west + self.east) / 2.0,
        }
    }

    pub fn contains(&self, point: LatLng) -> bool {
        (self.south..=self.north).contains(&point.lat) && (self.west..=self.east).contains(&point.lng)
    }
}

/// What the map is currently showing
#[derive(Debug, Clone, PartialEq)]
pub enum Viewport {
    /// Centre + zoom (initial view, focused marker)
    Centered { center: LatLng, zoom: u8 },
    /// Fitted to a bounding box
    Fitted(Bounds),
}

/// One marker per location
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub location_id: String,
    pub title: String,
    pub position: LatLng,
    pub visible: bool,
}

/// Info popup anchored on a marker
#[derive(Debug, Clone, PartialEq)]
pub struct InfoPopup {
    pub location_id: String,
    pub image: String,
    pub name: String,
    pub address: String,
    pub kind: String,
    /// Link to the menus & hours page
    pub menu_link: &'static str,
}

impl InfoPopup {
    pub fn for_location(location: &Location) -> Self {
        Self {
            location_id: location.id.clone(),
            image: location
                .image
                .clone()
                .filter(|img| !img.is_empty())
                .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string()),
            name: location.name.clone(),
            address: location.address.clone(),
            kind: location.kind.clone().unwrap_or_default(),
            menu_link: "menus-hours.html",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    markers: Vec<Marker>,
    viewport: Viewport,
    popup: Option<InfoPopup>,
}

impl MapState {
    /// All markers visible, viewport fitted to them
    pub fn new(locations: &[Location]) -> Self {
        let markers = locations
            .iter()
            .map(|loc| Marker {
                location_id: loc.id.clone(),
                title: loc.name.clone(),
                position: LatLng {
                    lat: loc.lat,
                    lng: loc.lng,
                },
                visible: true,
            })
            .collect();

        let mut map = Self {
            markers,
            viewport: Viewport::Centered {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
            popup: None,
        };
        map.fit_to_visible();
        map
    }

    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn popup(&self) -> Option<&InfoPopup> {
        self.popup.as_ref()
    }

    pub fn marker(&self, location_id: &str) -> Option<&Marker> {
        self.markers.iter().find(|m| m.location_id == location_id)
    }

    /// Box around the visible markers, `None` when nothing is visible
    pub fn visible_bounds(&self) -> Option<Bounds> {
        let mut visible = self.markers.iter().filter(|m| m.visible).map(|m| m.position);
        let mut bounds = Bounds::around(visible.next()?);
        for point in visible {
            bounds.extend(point);
        }
        Some(bounds)
    }

    /// Set marker visibility, then refit
    pub fn set_visibility(&mut self, mut is_visible: impl FnMut(&str) -> bool) {
        for marker in &mut self.markers {
            marker.visible = is_visible(&marker.location_id);
        }
        self.fit_to_visible();
    }

    /// Refit the viewport; with no visible marker the viewport is left alone
    pub fn fit_to_visible(&mut self) {
        if let Some(bounds) = self.visible_bounds() {
            self.viewport = Viewport::Fitted(bounds);
        }
    }

    /// Pan + zoom to a location's marker and open its popup
    ///
    /// Returns `false` (state untouched) for an unknown marker.
    pub fn focus(&mut self, location: &Location) -> bool {
        let Some(position) = self.marker(&location.id).map(|m| m.position) else {
            return false;
        };
        self.viewport = Viewport::Centered {
            center: position,
            zoom: FOCUS_ZOOM,
        };
        self.popup = Some(InfoPopup::for_location(location));
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(id: &str, campus: &str, lat: f64, lng: f64) -> Location {
        Location {
            id: id.to_string(),
            name: format!("{id} hall"),
            campus: campus.to_string(),
            kind: None,
            lat,
            lng,
            address: "1 Campus Way".to_string(),
            hours: None,
            description: None,
            image: None,
            payment: vec![],
            rating: None,
            reviews: None,
        }
    }

    #[test]
    fn test_new_map_fits_all_markers() {
        let locs = [location("a", "x", 38.90, -77.05), location("b", "y", 38.95, -77.08)];
        let map = MapState::new(&locs);

        assert_eq!(map.markers().len(), 2);
        assert_eq!(
            map.viewport(),
            &Viewport::Fitted(Bounds {
                south: 38.90,
                west: -77.08,
                north: 38.95,
                east: -77.05
            })
        );
    }

    #[test]
    fn test_empty_map_keeps_default_view() {
        let map = MapState::new(&[]);
        assert_eq!(
            map.viewport(),
            &Viewport::Centered {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM
            }
        );
    }

    #[test]
    fn test_visibility_refits_to_visible_only() {
        let locs = [
            location("a", "x", 38.90, -77.05),
            location("b", "y", 38.95, -77.08),
            location("c", "x", 38.91, -77.04),
        ];
        let mut map = MapState::new(&locs);

        map.set_visibility(|id| id != "b");

        assert!(!map.marker("b").unwrap().visible);
        let Viewport::Fitted(bounds) = map.viewport() else {
            panic!("expected fitted viewport");
        };
        assert!(!bounds.contains(LatLng { lat: 38.95, lng: -77.08 }));
        assert!(bounds.contains(LatLng { lat: 38.905, lng: -77.045 }));
    }

    #[test]
    fn test_nothing_visible_leaves_viewport() {
        let locs = [location("a", "x", 38.90, -77.05)];
        let mut map = MapState::new(&locs);
        let before = map.viewport().clone();

        map.set_visibility(|_| false);

        assert_eq!(map.viewport(), &before);
    }

    #[test]
    fn test_focus_opens_popup_with_placeholder() {
        let locs = [location("a", "x", 38.90, -77.05)];
        let mut map = MapState::new(&locs);

        assert!(map.focus(&locs[0]));

        assert_eq!(
            map.viewport(),
            &Viewport::Centered {
                center: LatLng { lat: 38.90, lng: -77.05 },
                zoom: FOCUS_ZOOM
            }
        );
        let popup = map.popup().unwrap();
        assert_eq!(popup.image, PLACEHOLDER_IMAGE);
        assert_eq!(popup.name, "a hall");
    }

    #[test]
    fn test_focus_unknown_location() {
        let mut map = MapState::new(&[location("a", "x", 38.90, -77.05)]);
        assert!(!map.focus(&location("zzz", "x", 0.0, 0.0)));
        assert!(map.popup().is_none());
    }
}
