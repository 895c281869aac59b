use super::items::Element;
use serde::Serialize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    /// Returns `None` for positions outside the WGS84 range.
    pub fn new(lat: f64, lon: f64) -> Option<Self> {
        let location = Location { lat, lon };
        if location.is_valid() {
            Some(location)
        } else {
            None
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lon)
    }
}

/// Picks the single point an element is reported at.
///
/// Nodes use their own position, ways the first member with a resolved
/// position. Relations are never resolved.
pub fn resolve(element: &Element) -> Option<Location> {
    match element {
        Element::Node(node) => node.location.filter(Location::is_valid),
        Element::Way(way) => way
            .members
            .iter()
            .filter_map(|member| member.location)
            .find(Location::is_valid),
        Element::Relation(_) => None,
    }
}
