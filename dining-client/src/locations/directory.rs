//! Dining location directory
//!
//! Owns the location list, the campus filter, the map model and the
//! highlighted card. Every filter change updates marker visibility and
//! refits the map in the same call.

use super::map::MapState;
use crate::menu::Selection;
use shared::models::Location;
use tracing::debug;

#[derive(Debug, Clone, PartialEq)]
pub struct LocationDirectory {
    locations: Vec<Location>,
    campus: Selection,
    map: MapState,
    highlighted: Option<String>,
}

impl LocationDirectory {
    pub fn new(locations: Vec<Location>) -> Self {
        let map = MapState::new(&locations);
        Self {
            locations,
            campus: Selection::All,
            map,
            highlighted: None,
        }
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn campus(&self) -> &Selection {
        &self.campus
    }

    pub fn map(&self) -> &MapState {
        &self.map
    }

    /// Id of the card currently highlighted
    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn get(&self, id: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.id == id)
    }

    /// Distinct campuses, first-seen order (filter buttons)
    pub fn campuses(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for loc in &self.locations {
            if !seen.contains(&loc.campus.as_str()) {
                seen.push(&loc.campus);
            }
        }
        seen
    }

    /// Locations passing the campus filter, original order
    pub fn visible(&self) -> Vec<&Location> {
        self.locations
            .iter()
            .filter(|loc| self.campus.matches(&loc.campus))
            .collect()
    }

    /// Apply a campus filter: cards, marker visibility and viewport
    pub fn set_campus(&mut self, campus: Selection) {
        debug!(%campus, "Campus filter applied");
        self.campus = campus;

        let campus = &self.campus;
        let locations = &self.locations;
        self.map.set_visibility(|id| {
            locations
                .iter()
                .find(|l| l.id == id)
                .is_some_and(|l| campus.matches(&l.campus))
        });
    }

    /// Marker or card clicked: open the popup and highlight the card
    ///
    /// Unknown ids are ignored.
    pub fn focus(&mut self, id: &str) -> bool {
        let Some(location) = self.locations.iter().find(|l| l.id == id) else {
            return false;
        };
        if !self.map.focus(location) {
            return false;
        }
        self.highlighted = Some(id.to_string());
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locations::map::{FOCUS_ZOOM, Viewport};

    fn directory() -> LocationDirectory {
        let locations: Vec<Location> = serde_json::from_str(
            r#"[
                {"id":"thrive","name":"Thrive","campus":"Foggy Bottom","lat":38.899,"lng":-77.048},
                {"id":"district","name":"District House","campus":"Foggy Bottom","lat":38.901,"lng":-77.045},
                {"id":"pelham","name":"Pelham Commons","campus":"Mount Vernon","lat":38.937,"lng":-77.076}
            ]"#,
        )
        .unwrap();
        LocationDirectory::new(locations)
    }

    fn ids(locs: &[&Location]) -> Vec<String> {
        locs.iter().map(|l| l.id.clone()).collect()
    }

    #[test]
    fn test_all_campus_shows_everything() {
        let dir = directory();
        assert_eq!(ids(&dir.visible()), ["thrive", "district", "pelham"]);
        assert!(dir.map().markers().iter().all(|m| m.visible));
        assert_eq!(dir.campuses(), ["Foggy Bottom", "Mount Vernon"]);
    }

    #[test]
    fn test_campus_filter_hides_cards_and_markers() {
        let mut dir = directory();

        dir.set_campus(Selection::from("Mount Vernon"));

        assert_eq!(ids(&dir.visible()), ["pelham"]);
        assert!(dir.map().marker("pelham").unwrap().visible);
        assert!(!dir.map().marker("thrive").unwrap().visible);
        let Viewport::Fitted(bounds) = dir.map().viewport() else {
            panic!("expected fitted viewport");
        };
        assert_eq!(bounds.north, 38.937);
        assert_eq!(bounds.south, 38.937);
    }

    #[test]
    fn test_unknown_campus_hides_everything() {
        let mut dir = directory();
        dir.set_campus(Selection::from("Virginia"));
        assert!(dir.visible().is_empty());
        assert!(dir.map().markers().iter().all(|m| !m.visible));
    }

    #[test]
    fn test_back_to_all() {
        let mut dir = directory();
        dir.set_campus(Selection::from("Mount Vernon"));
        dir.set_campus(Selection::All);
        assert_eq!(dir.visible().len(), 3);
    }

    #[test]
    fn test_focus_highlights_single_card() {
        let mut dir = directory();

        assert!(dir.focus("district"));
        assert_eq!(dir.highlighted(), Some("district"));
        assert!(matches!(dir.map().viewport(), Viewport::Centered { zoom, .. } if *zoom == FOCUS_ZOOM));

        assert!(dir.focus("pelham"));
        assert_eq!(dir.highlighted(), Some("pelham"));
        assert_eq!(dir.map().popup().unwrap().location_id, "pelham");
    }

    #[test]
    fn test_focus_unknown_id_ignored() {
        let mut dir = directory();
        assert!(!dir.focus("nope"));
        assert_eq!(dir.highlighted(), None);
    }
}
