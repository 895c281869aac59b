use super::tags::TagMap;

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Condition {
    ValueMatch(&'static str, &'static str),
    /// Case-sensitive substring match on the tag value.
    Substring(&'static str, &'static str),
}

/// Conditions which all have to hold.
pub type Group = &'static [Condition];

use self::Condition::{Substring, ValueMatch};

const RESTAURANT: &[Group] = &[
    &[ValueMatch("amenity", "restaurant")],
    &[ValueMatch("amenity", "fast_food")],
];

const RAIL_STATION: &[Group] = &[
    &[ValueMatch("railway", "station")],
    &[ValueMatch("railway", "halt")],
    &[ValueMatch("railway", "tram_stop")],
    &[ValueMatch("railway", "subway_entrance")],
    &[ValueMatch("railway", "train_station_entrance")],
    &[ValueMatch("public_transport", "station")],
    &[ValueMatch("station", "subway")],
    &[ValueMatch("station", "light_rail")],
    &[ValueMatch("station", "monorail")],
    &[ValueMatch("station", "train")],
];

// A stop_position counts regardless of its `bus` tag; rail stop positions
// never get here since rail stations are checked first.
const BUS_STOP: &[Group] = &[
    &[ValueMatch("highway", "bus_stop")],
    &[ValueMatch("public_transport", "stop_position")],
    &[ValueMatch("public_transport", "platform"), ValueMatch("bus", "yes")],
    &[ValueMatch("amenity", "bus_station")],
];

/// Transit labels in priority order, the first matching entry wins.
const TRANSIT_TYPES: &[(&[Group], &str)] = &[
    (
        &[&[Substring("network", "BTS")], &[Substring("operator", "BTS")]],
        "BTS Skytrain",
    ),
    (
        &[&[Substring("network", "MRT")], &[Substring("operator", "MRT")]],
        "MRT Subway",
    ),
    (
        &[
            &[ValueMatch("railway", "subway_entrance")],
            &[ValueMatch("station", "subway")],
        ],
        "Subway",
    ),
    (
        &[
            &[ValueMatch("station", "light_rail")],
            &[ValueMatch("railway", "tram_stop")],
        ],
        "Light Rail/Tram",
    ),
    (&[&[ValueMatch("station", "monorail")]], "Monorail"),
    (&[&[ValueMatch("railway", "station")]], "Train Station"),
    (&[&[ValueMatch("railway", "halt")]], "Train Halt"),
];

const FALLBACK_KEYS: [&str; 3] = ["railway", "station", "public_transport"];
const UNKNOWN: &str = "Unknown";

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum Category {
    Restaurant,
    RailStation,
    BusStop,
}

fn check_condition(tags: &TagMap, condition: &Condition) -> bool {
    match condition {
        ValueMatch(key, value) => tags.contains(key, value),
        Substring(key, needle) => tags.get(key).contains(needle),
    }
}

fn check_group(tags: &TagMap, group: &[Condition]) -> bool {
    group.iter().all(|c| check_condition(tags, c))
}

fn matches(tags: &TagMap, groups: &[Group]) -> bool {
    groups.iter().any(|group| check_group(tags, group))
}

pub fn is_restaurant(tags: &TagMap) -> bool {
    matches(tags, RESTAURANT)
}

pub fn is_rail_station(tags: &TagMap) -> bool {
    matches(tags, RAIL_STATION)
}

/// Only meaningful for elements which are not rail stations, see
/// [`classify_transit`].
pub fn is_bus_stop(tags: &TagMap) -> bool {
    matches(tags, BUS_STOP)
}

/// Derives the human readable transit label of a rail station.
pub fn transit_subtype<'a>(tags: &TagMap<'a>) -> &'a str {
    TRANSIT_TYPES
        .iter()
        .find(|(groups, _)| matches(tags, groups))
        .map(|(_, label)| *label)
        .or_else(|| {
            FALLBACK_KEYS
                .iter()
                .map(|key| tags.get(key))
                .find(|value| !value.is_empty())
        })
        .unwrap_or(UNKNOWN)
}

pub fn classify_restaurant(tags: &TagMap) -> Option<Category> {
    if is_restaurant(tags) {
        Some(Category::Restaurant)
    } else {
        None
    }
}

/// Rail stations take precedence, an element is never both.
pub fn classify_transit(tags: &TagMap) -> Option<Category> {
    if is_rail_station(tags) {
        Some(Category::RailStation)
    } else if is_bus_stop(tags) {
        Some(Category::BusStop)
    } else {
        None
    }
}
