use super::error::Error;
use super::filter::{
    classify_restaurant, classify_transit, is_bus_stop, is_rail_station, is_restaurant, Category,
};
use super::geo::resolve;
use super::items::Element;
use super::records::{project, BusStop, RailStation, Record, Restaurant};
use super::tags::TagMap;
use log::debug;

/// Accumulates the records of one extraction mode in encounter order.
pub trait Collector: Default {
    /// Whether an element with these tags could be collected. Sources use it
    /// to decide which way members need a resolved position.
    fn wants(tags: &TagMap) -> bool;

    fn push(&mut self, element: &Element);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Default, Debug)]
pub struct Restaurants {
    pub restaurants: Vec<Restaurant>,
}

impl Collector for Restaurants {
    fn wants(tags: &TagMap) -> bool {
        is_restaurant(tags)
    }

    fn push(&mut self, element: &Element) {
        let tags = TagMap::from(element);
        if classify_restaurant(&tags).is_some() {
            self.restaurants.push(project(element, &tags, resolve(element)));
        }
    }

    fn len(&self) -> usize {
        self.restaurants.len()
    }
}

#[derive(Default, Debug)]
pub struct Transit {
    pub rail_stations: Vec<RailStation>,
    pub bus_stops: Vec<BusStop>,
}

impl Transit {
    /// Rail stations followed by bus stops.
    pub fn all(&self) -> Vec<Record> {
        self.rail_stations
            .iter()
            .cloned()
            .map(Record::RailStation)
            .chain(self.bus_stops.iter().cloned().map(Record::BusStop))
            .collect()
    }
}

impl Collector for Transit {
    fn wants(tags: &TagMap) -> bool {
        is_rail_station(tags) || is_bus_stop(tags)
    }

    fn push(&mut self, element: &Element) {
        let tags = TagMap::from(element);
        match classify_transit(&tags) {
            Some(Category::RailStation) => {
                self.rail_stations.push(project(element, &tags, resolve(element)))
            }
            Some(Category::BusStop) => {
                self.bus_stops.push(project(element, &tags, resolve(element)))
            }
            _ => (),
        }
    }

    fn len(&self) -> usize {
        self.rail_stations.len() + self.bus_stops.len()
    }
}

/// Drains the element stream. The first error aborts and drops whatever was
/// collected so far.
pub fn collect<C: Collector>(
    elements: impl IntoIterator<Item = Result<Element, Error>>,
) -> Result<C, Error> {
    let mut collector = C::default();
    let mut seen = 0_u64;
    for element in elements {
        collector.push(&element?);
        seen += 1;
    }
    debug!("{} elements scanned, {} collected", seen, collector.len());
    Ok(collector)
}
