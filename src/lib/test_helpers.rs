use super::geo::Location;
use super::items::{Element, Member, Node, Relation, Tag, Way};

pub fn tags(pairs: &[(&str, &str)]) -> Vec<Tag> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).into(), (*value).into()))
        .collect()
}

pub fn location(lat: f64, lon: f64) -> Option<Location> {
    Some(Location { lat, lon })
}

pub fn member(id: i64, lat: f64, lon: f64) -> Member {
    Member {
        id,
        location: location(lat, lon),
    }
}

pub fn node(id: i64, pairs: &[(&str, &str)], lat: f64, lon: f64) -> Element {
    Element::Node(Node {
        id,
        tags: tags(pairs),
        location: location(lat, lon),
    })
}

pub fn way(id: i64, pairs: &[(&str, &str)], members: Vec<Member>) -> Element {
    Element::Way(Way {
        id,
        tags: tags(pairs),
        members,
    })
}

pub fn relation(id: i64, pairs: &[(&str, &str)]) -> Element {
    Element::Relation(Relation {
        id,
        tags: tags(pairs),
    })
}
