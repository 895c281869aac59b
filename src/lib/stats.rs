use super::records::{BusStop, Entry, RailStation, Restaurant};
use indexmap::IndexMap;
use itertools::Itertools;
use std::collections::BTreeMap;
use std::io::{Result, Write};

const TOP: usize = 10;

/// Human readable statistics over a finished collection.
pub trait Summary {
    fn summarize(&self, writer: &mut dyn Write) -> Result<()>;
}

/// Counts values, most frequent first. Equal counts keep the order in which
/// the values were first seen.
pub fn frequencies<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    let mut counts: IndexMap<&str, usize> = IndexMap::new();
    for value in values {
        *counts.entry(value).or_insert(0) += 1;
    }
    counts
        .into_iter()
        .sorted_by(|a, b| b.1.cmp(&a.1))
        .collect()
}

/// Every `;` separated cuisine of every restaurant, trimmed.
pub fn cuisines(restaurants: &[Restaurant]) -> Vec<(&str, usize)> {
    let values = restaurants
        .iter()
        .filter(|r| !r.cuisine.is_empty())
        .flat_map(|r| r.cuisine.split(';').map(str::trim));
    frequencies(values)
}

fn percentage(part: usize, total: usize) -> f64 {
    part as f64 / total as f64 * 100.0
}

fn rule(writer: &mut dyn Write) -> Result<()> {
    writeln!(writer, "{}", "=".repeat(60))
}

fn header(writer: &mut dyn Write, title: &str) -> Result<()> {
    writeln!(writer)?;
    rule(writer)?;
    writeln!(writer, "{}", title)?;
    rule(writer)
}

fn coverage(writer: &mut dyn Write, label: &str, part: usize, total: usize) -> Result<()> {
    writeln!(
        writer,
        "{}: {} ({:.1}%)",
        label,
        part,
        percentage(part, total)
    )
}

fn by_osm_type<E: Entry>(writer: &mut dyn Write, entries: &[E]) -> Result<()> {
    let mut counts: BTreeMap<&str, usize> = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.osm_type().as_str()).or_insert(0) += 1;
    }
    writeln!(writer, "\nBy OSM type:")?;
    for (osm_type, count) in counts {
        writeln!(writer, "  {}: {}", osm_type, count)?;
    }
    Ok(())
}

fn names_and_coordinates<E: Entry>(writer: &mut dyn Write, entries: &[E]) -> Result<()> {
    let named = entries.iter().filter(|e| e.has_name()).count();
    let located = entries.iter().filter(|e| e.location().is_some()).count();
    writeln!(writer)?;
    coverage(writer, "With names", named, entries.len())?;
    coverage(writer, "With coordinates", located, entries.len())
}

fn table(writer: &mut dyn Write, title: &str, counts: &[(&str, usize)]) -> Result<()> {
    if counts.is_empty() {
        return Ok(());
    }
    writeln!(writer, "\n{}:", title)?;
    for (value, count) in counts {
        writeln!(writer, "  {}: {}", value, count)?;
    }
    Ok(())
}

fn non_empty<'a>(values: impl IntoIterator<Item = &'a str>) -> Vec<(&'a str, usize)> {
    frequencies(values.into_iter().filter(|v| !v.is_empty()))
}

impl Summary for [Restaurant] {
    fn summarize(&self, writer: &mut dyn Write) -> Result<()> {
        if self.is_empty() {
            return writeln!(writer, "No restaurants found.");
        }
        header(writer, "EXTRACTION STATISTICS")?;
        writeln!(writer, "Total restaurants found: {}", self.len())?;
        by_osm_type(writer, self)?;
        names_and_coordinates(writer, self)?;
        let with_cuisine = self.iter().filter(|r| !r.cuisine.is_empty()).count();
        coverage(writer, "With cuisine info", with_cuisine, self.len())?;

        let top: Vec<_> = cuisines(self).into_iter().take(TOP).collect();
        table(writer, "Top 10 cuisines", &top)?;
        rule(writer)?;
        writeln!(writer)
    }
}

impl Summary for [RailStation] {
    fn summarize(&self, writer: &mut dyn Write) -> Result<()> {
        if self.is_empty() {
            return writeln!(writer, "No rail stations found.");
        }
        header(writer, "RAIL STATION STATISTICS")?;
        writeln!(writer, "Total rail stations found: {}", self.len())?;
        by_osm_type(writer, self)?;

        let transit_types = frequencies(self.iter().map(|s| s.transit_type.as_str()));
        table(writer, "By transit type", &transit_types)?;
        names_and_coordinates(writer, self)?;

        let networks = non_empty(self.iter().map(|s| s.network.as_str()));
        table(writer, "By network", &networks)?;
        let operators = non_empty(self.iter().map(|s| s.operator.as_str()));
        table(writer, "By operator", &operators)?;
        rule(writer)
    }
}

impl Summary for [BusStop] {
    fn summarize(&self, writer: &mut dyn Write) -> Result<()> {
        if self.is_empty() {
            return writeln!(writer, "\nNo bus stops found.");
        }
        header(writer, "BUS STOP STATISTICS")?;
        writeln!(writer, "Total bus stops found: {}", self.len())?;
        by_osm_type(writer, self)?;
        names_and_coordinates(writer, self)?;
        let sheltered = self.iter().filter(|s| s.shelter == "yes").count();
        coverage(writer, "With shelter", sheltered, self.len())?;

        let operators: Vec<_> = non_empty(self.iter().map(|s| s.operator.as_str()))
            .into_iter()
            .take(TOP)
            .collect();
        table(writer, "By operator", &operators)?;
        rule(writer)?;
        writeln!(writer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::{collect, Collector, Restaurants, Transit};
    use crate::items::Element;
    use crate::test_helpers::{node, relation, way};

    fn report<S: Summary + ?Sized>(summary: &S) -> String {
        let mut out = Vec::new();
        summary.summarize(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn gather<C: Collector>(elements: Vec<Element>) -> C {
        collect(elements.into_iter().map(Ok)).unwrap()
    }

    #[test]
    fn cuisine_pieces_are_trimmed() {
        let restaurants: Restaurants = gather(vec![
            node(1, &[("amenity", "restaurant"), ("cuisine", "thai;noodle; som tam")], 13.7, 100.5),
            node(2, &[("amenity", "restaurant"), ("cuisine", "thai")], 13.7, 100.5),
            node(3, &[("amenity", "restaurant")], 13.7, 100.5),
        ]);
        assert_eq!(
            cuisines(&restaurants.restaurants),
            vec![("thai", 2), ("noodle", 1), ("som tam", 1)]
        );
    }

    #[test]
    fn ties_keep_first_seen_order() {
        let values = vec!["b", "a", "c", "a", "b", "d"];
        assert_eq!(
            frequencies(values),
            vec![("b", 2), ("a", 2), ("c", 1), ("d", 1)]
        );
    }

    #[test]
    fn empty_collections() {
        let restaurants: Vec<Restaurant> = Vec::new();
        assert_eq!(report(restaurants.as_slice()), "No restaurants found.\n");
        let stations: Vec<RailStation> = Vec::new();
        assert_eq!(report(stations.as_slice()), "No rail stations found.\n");
        let stops: Vec<BusStop> = Vec::new();
        assert_eq!(report(stops.as_slice()), "\nNo bus stops found.\n");
    }

    #[test]
    fn restaurant_report() {
        let restaurants: Restaurants = gather(vec![
            node(1, &[("amenity", "restaurant"), ("name", "Jay Fai"), ("cuisine", "thai")], 13.7, 100.5),
            node(2, &[("amenity", "fast_food"), ("cuisine", "burger;thai")], 13.7, 100.5),
            way(3, &[("amenity", "restaurant"), ("name", "Somtum Der")], vec![]),
            relation(4, &[("amenity", "restaurant")]),
        ]);
        let text = report(restaurants.restaurants.as_slice());
        assert!(text.starts_with(&format!("\n{}\nEXTRACTION STATISTICS\n", "=".repeat(60))));
        assert!(text.contains("Total restaurants found: 4\n"));
        assert!(text.contains("\nBy OSM type:\n  node: 2\n  relation: 1\n  way: 1\n"));
        assert!(text.contains("With names: 2 (50.0%)\n"));
        assert!(text.contains("With coordinates: 2 (50.0%)\n"));
        assert!(text.contains("With cuisine info: 2 (50.0%)\n"));
        assert!(text.contains("\nTop 10 cuisines:\n  thai: 2\n  burger: 1\n"));
        assert!(text.ends_with(&format!("{}\n\n", "=".repeat(60))));
    }

    #[test]
    fn transit_report() {
        let transit: Transit = gather(vec![
            node(1, &[("railway", "station"), ("network", "BTS"), ("operator", "BTSC")], 13.7, 100.5),
            node(2, &[("railway", "station"), ("network", "BTS"), ("name", "Siam")], 13.7, 100.5),
            node(3, &[("railway", "halt"), ("operator", "SRT")], 13.7, 100.5),
            node(4, &[("highway", "bus_stop"), ("shelter", "yes"), ("operator", "BMTA")], 13.7, 100.5),
            relation(5, &[("amenity", "bus_station"), ("shelter", "no")]),
            node(6, &[("highway", "bus_stop"), ("shelter", "yes")], 13.7, 100.5),
            node(7, &[("highway", "bus_stop")], 13.7, 100.5),
        ]);

        let rail = report(transit.rail_stations.as_slice());
        assert!(rail.contains("Total rail stations found: 3\n"));
        assert!(rail.contains("\nBy transit type:\n  BTS Skytrain: 2\n  Train Halt: 1\n"));
        assert!(rail.contains("With names: 1 (33.3%)\n"));
        assert!(rail.contains("With coordinates: 3 (100.0%)\n"));
        assert!(rail.contains("\nBy network:\n  BTS: 2\n"));
        assert!(rail.contains("\nBy operator:\n  BTSC: 1\n  SRT: 1\n"));

        let bus = report(transit.bus_stops.as_slice());
        assert!(bus.contains("Total bus stops found: 4\n"));
        assert!(bus.contains("\nBy OSM type:\n  node: 3\n  relation: 1\n"));
        assert!(bus.contains("With coordinates: 3 (75.0%)\n"));
        assert!(bus.contains("With shelter: 2 (50.0%)\n"));
        assert!(bus.contains("\nBy operator:\n  BMTA: 1\n"));
        assert!(!bus.contains("By network"));
    }
}
