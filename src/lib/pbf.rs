use super::error::{Error, SourceError};
use super::geo::Location;
use super::items::{Element, Member, Node, Relation, Tag, Way};
use super::tags::TagMap;
use log::debug;
use osmpbfreader::objects::{NodeId, OsmObj, Tags};
use osmpbfreader::OsmPbfReader;
use std::collections::{HashMap, HashSet};
use std::io::{Read, Seek};

/// Streams the elements of a PBF file in file order.
///
/// Opening the source makes a first pass over the file to find the nodes
/// referenced by interesting ways. Their positions are recorded while the
/// second pass streams past them, so ways (which follow all nodes in a sorted
/// extract) get resolved members without keeping every node in memory.
pub struct PbfSource<R: Read + Seek> {
    reader: OsmPbfReader<R>,
    wanted: HashSet<NodeId>,
    index: HashMap<NodeId, Location>,
}

impl<R: Read + Seek> PbfSource<R> {
    pub fn open<F>(file: R, wants: F) -> Result<Self, Error>
    where
        F: Fn(&TagMap) -> bool,
    {
        let mut reader = OsmPbfReader::new(file);
        let mut wanted = HashSet::new();
        for obj in reader.iter() {
            if let OsmObj::Way(way) = obj.map_err(SourceError::from)? {
                let pairs = way.tags.iter().map(|(k, v)| (k.as_str(), v.as_str()));
                if wants(&TagMap::from_pairs(pairs)) {
                    wanted.extend(way.nodes.iter().copied());
                }
            }
        }
        reader.rewind().map_err(SourceError::from)?;
        debug!("{} way nodes need a position", wanted.len());

        Ok(PbfSource {
            reader,
            wanted,
            index: HashMap::new(),
        })
    }

    pub fn elements(&mut self) -> impl Iterator<Item = Result<Element, Error>> + '_ {
        let PbfSource {
            reader,
            wanted,
            index,
        } = self;
        reader.iter().map(move |obj| -> Result<Element, Error> {
            let obj = obj.map_err(SourceError::from)?;
            Ok(to_element(obj, wanted, index))
        })
    }
}

fn to_tags(tags: &Tags) -> Vec<Tag> {
    tags.iter()
        .map(|(key, value)| (key.as_str().into(), value.as_str().into()))
        .collect()
}

fn to_element(
    obj: OsmObj,
    wanted: &HashSet<NodeId>,
    index: &mut HashMap<NodeId, Location>,
) -> Element {
    match obj {
        OsmObj::Node(node) => {
            let location = Location::new(node.lat(), node.lon());
            if let Some(location) = location {
                if wanted.contains(&node.id) {
                    index.insert(node.id, location);
                }
            }
            Element::Node(Node {
                id: node.id.0,
                tags: to_tags(&node.tags),
                location,
            })
        }
        OsmObj::Way(way) => {
            let members = way
                .nodes
                .iter()
                .map(|id| Member {
                    id: id.0,
                    location: index.get(id).copied(),
                })
                .collect();
            Element::Way(Way {
                id: way.id.0,
                tags: to_tags(&way.tags),
                members,
            })
        }
        OsmObj::Relation(rel) => Element::Relation(Relation {
            id: rel.id.0,
            tags: to_tags(&rel.tags),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{Collector, Restaurants, Transit};
    use crate::geo::resolve;
    use crate::items::OsmType;
    use approx::assert_abs_diff_eq;
    use osmpbfreader::objects::{Ref, RelationId, WayId};
    use std::fs::File;
    use std::io::BufReader;

    const BANGKOK: &str = "./tests/data/bangkok.osm.pbf";

    fn open_fixture<F: Fn(&TagMap) -> bool>(wants: F) -> PbfSource<BufReader<File>> {
        let file = BufReader::new(File::open(BANGKOK).unwrap());
        PbfSource::open(file, wants).unwrap()
    }

    fn node_ids(ids: &[i64]) -> HashSet<NodeId> {
        ids.iter().copied().map(NodeId).collect()
    }

    fn assert_location(location: Option<Location>, lat: f64, lon: f64) {
        let location = location.expect("location should be resolved");
        assert_abs_diff_eq!(location.lat, lat, epsilon = 1e-9);
        assert_abs_diff_eq!(location.lon, lon, epsilon = 1e-9);
    }

    fn create_node(id: i64, lat: i32, lon: i32) -> OsmObj {
        let mut tags = Tags::new();
        tags.insert("highway".into(), "bus_stop".into());
        OsmObj::Node(osmpbfreader::objects::Node {
            id: NodeId(id),
            tags,
            decimicro_lat: lat * 10_000_000,
            decimicro_lon: lon * 10_000_000,
        })
    }

    fn create_way(id: i64, nodes: Vec<NodeId>) -> OsmObj {
        let mut tags = Tags::new();
        tags.insert("amenity".into(), "restaurant".into());
        tags.insert("name".into(), "Krua Apsorn".into());
        OsmObj::Way(osmpbfreader::objects::Way {
            id: WayId(id),
            tags,
            nodes,
        })
    }

    #[test]
    fn node_positions_are_indexed_when_wanted() {
        let wanted: HashSet<NodeId> = vec![NodeId(2)].into_iter().collect();
        let mut index = HashMap::new();

        let first = to_element(create_node(1, 13, 100), &wanted, &mut index);
        let second = to_element(create_node(2, 14, 101), &wanted, &mut index);

        assert_eq!(index.len(), 1);
        assert_location(index.get(&NodeId(2)).copied(), 14.0, 101.0);
        assert_eq!(first.tags().len(), 1);
        assert_location(resolve(&first), 13.0, 100.0);
        assert_location(resolve(&second), 14.0, 101.0);
    }

    #[test]
    fn way_members_resolve_from_index() {
        let wanted: HashSet<NodeId> = vec![NodeId(2), NodeId(3)].into_iter().collect();
        let mut index = HashMap::new();
        to_element(create_node(3, 13, 100), &wanted, &mut index);

        let nodes = vec![NodeId(2), NodeId(3)];
        let way = to_element(create_way(42, nodes), &wanted, &mut index);
        match &way {
            Element::Way(w) => {
                assert_eq!(w.id, 42);
                assert_eq!(w.members[0], Member { id: 2, location: None });
                assert_location(w.members[1].location, 13.0, 100.0);
            }
            other => panic!("expected a way, got {:?}", other),
        }
        let tags = TagMap::from(&way);
        assert_eq!(tags.get("name"), "Krua Apsorn");
    }

    #[test]
    fn relations_carry_tags_only() {
        let mut tags = Tags::new();
        tags.insert("public_transport".into(), "station".into());
        let refs = vec![Ref {
            member: NodeId(1).into(),
            role: "stop".into(),
        }];
        let rel = OsmObj::Relation(osmpbfreader::objects::Relation {
            id: RelationId(9),
            tags,
            refs,
        });
        let element = to_element(rel, &HashSet::new(), &mut HashMap::new());
        assert_eq!(element.id(), 9);
        assert_eq!(TagMap::from(&element).get("public_transport"), "station");
        assert_eq!(resolve(&element), None);
    }

    #[test]
    fn first_pass_collects_nodes_of_wanted_ways() {
        let source = open_fixture(Transit::wants);
        assert_eq!(source.wanted, node_ids(&[999, 7, 8]));
        assert!(source.index.is_empty());

        let source = open_fixture(Restaurants::wants);
        assert_eq!(source.wanted, node_ids(&[9]));
    }

    #[test]
    fn second_pass_streams_in_file_order() {
        let mut source = open_fixture(Transit::wants);
        let elements: Vec<Element> = source.elements().collect::<Result<_, _>>().unwrap();
        let ids: Vec<(OsmType, i64)> = elements.iter().map(|e| (e.osm_type(), e.id())).collect();
        assert_eq!(
            ids,
            vec![
                (OsmType::Node, 1),
                (OsmType::Node, 2),
                (OsmType::Node, 3),
                (OsmType::Node, 7),
                (OsmType::Node, 8),
                (OsmType::Node, 9),
                (OsmType::Way, 100),
                (OsmType::Way, 101),
                (OsmType::Way, 102),
                (OsmType::Relation, 200),
            ]
        );

        let indexed: HashSet<NodeId> = source.index.keys().copied().collect();
        assert_eq!(indexed, node_ids(&[7, 8]));

        assert_location(resolve(&elements[6]), 13.74, 100.5);
        assert_eq!(resolve(&elements[7]), None);
        assert_eq!(TagMap::from(&elements[0]).get("name"), "สถานีสยาม");
    }
}
