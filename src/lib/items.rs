use super::geo::Location;
use serde::Serialize;
use smartstring::alias::String;
use std::fmt;

/// A raw key/value pair in the order the source delivered it.
pub type Tag = (String, String);

#[derive(Serialize, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Clone, Copy)]
#[serde(rename_all = "lowercase")]
pub enum OsmType {
    Node,
    Way,
    Relation,
}

impl OsmType {
    pub fn as_str(self) -> &'static str {
        match self {
            OsmType::Node => "node",
            OsmType::Way => "way",
            OsmType::Relation => "relation",
        }
    }
}

impl fmt::Display for OsmType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub id: i64,
    pub tags: Vec<Tag>,
    pub location: Option<Location>,
}

/// A node reference of a way, with the position the source could resolve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Member {
    pub id: i64,
    pub location: Option<Location>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Way {
    pub id: i64,
    pub tags: Vec<Tag>,
    pub members: Vec<Member>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Relation {
    pub id: i64,
    pub tags: Vec<Tag>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Element {
    Node(Node),
    Way(Way),
    Relation(Relation),
}

impl Element {
    pub fn osm_type(&self) -> OsmType {
        match self {
            Element::Node(_) => OsmType::Node,
            Element::Way(_) => OsmType::Way,
            Element::Relation(_) => OsmType::Relation,
        }
    }

    /// Ids are only unique together with the element's `OsmType`.
    pub fn id(&self) -> i64 {
        match self {
            Element::Node(node) => node.id,
            Element::Way(way) => way.id,
            Element::Relation(rel) => rel.id,
        }
    }

    pub fn tags(&self) -> &[Tag] {
        match self {
            Element::Node(node) => &node.tags,
            Element::Way(way) => &way.tags,
            Element::Relation(rel) => &rel.tags,
        }
    }

    pub fn tags_mut(&mut self) -> &mut Vec<Tag> {
        match self {
            Element::Node(node) => &mut node.tags,
            Element::Way(way) => &mut way.tags,
            Element::Relation(rel) => &mut rel.tags,
        }
    }
}
