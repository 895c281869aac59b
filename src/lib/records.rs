use super::filter::transit_subtype;
use super::geo::Location;
use super::items::{Element, OsmType};
use super::tags::TagMap;
use serde::Serialize;

/// Stands in for a missing `name` tag.
pub const NO_NAME: &str = "N/A";

const RAIL_STATION: &str = "rail_station";
const BUS_STOP: &str = "bus_stop";
const BUS: &str = "Bus";

/// The fields every record shares, used for reporting.
pub trait Entry {
    fn osm_type(&self) -> OsmType;
    fn name(&self) -> &str;
    fn location(&self) -> Option<Location>;

    fn has_name(&self) -> bool {
        self.name() != NO_NAME
    }
}

/// Builds a record from an element that was already classified as `Self`.
pub trait Projection {
    fn project(element: &Element, tags: &TagMap, location: Option<Location>) -> Self;
}

/// Turns a classified element into a record of type `P`. Tags the record type
/// does not know are dropped and missing ones become empty strings.
pub fn project<P: Projection>(element: &Element, tags: &TagMap, location: Option<Location>) -> P {
    P::project(element, tags, location)
}

fn name(tags: &TagMap) -> String {
    tags.get_or("name", NO_NAME).to_string()
}

fn text(tags: &TagMap, key: &str) -> String {
    tags.get(key).to_string()
}

fn location(latitude: Option<f64>, longitude: Option<f64>) -> Option<Location> {
    Some(Location {
        lat: latitude?,
        lon: longitude?,
    })
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct Restaurant {
    pub osm_type: OsmType,
    pub osm_id: i64,
    pub name: String,
    pub name_en: String,
    pub name_th: String,
    pub amenity: String,
    pub cuisine: String,
    pub diet: String,
    pub phone: String,
    pub website: String,
    pub opening_hours: String,
    pub address: String,
    pub street: String,
    pub housenumber: String,
    pub postcode: String,
    pub district: String,
    pub subdistrict: String,
    pub province: String,
    pub city: String,
    pub outdoor_seating: String,
    pub takeaway: String,
    pub delivery: String,
    pub wheelchair: String,
    pub internet_access: String,
    pub air_conditioning: String,
    pub smoking: String,
    pub capacity: String,
    pub stars: String,
    pub brand: String,
    pub description: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Projection for Restaurant {
    fn project(element: &Element, tags: &TagMap, location: Option<Location>) -> Self {
        Restaurant {
            osm_type: element.osm_type(),
            osm_id: element.id(),
            name: name(tags),
            name_en: text(tags, "name:en"),
            name_th: text(tags, "name:th"),
            amenity: text(tags, "amenity"),
            cuisine: text(tags, "cuisine"),
            diet: text(tags, "diet:vegetarian"),
            phone: text(tags, "phone"),
            website: text(tags, "website"),
            opening_hours: text(tags, "opening_hours"),
            address: text(tags, "addr:full"),
            street: text(tags, "addr:street"),
            housenumber: text(tags, "addr:housenumber"),
            postcode: text(tags, "addr:postcode"),
            district: text(tags, "addr:district"),
            subdistrict: text(tags, "addr:subdistrict"),
            province: text(tags, "addr:province"),
            city: text(tags, "addr:city"),
            outdoor_seating: text(tags, "outdoor_seating"),
            takeaway: text(tags, "takeaway"),
            delivery: text(tags, "delivery"),
            wheelchair: text(tags, "wheelchair"),
            internet_access: text(tags, "internet_access"),
            air_conditioning: text(tags, "air_conditioning"),
            smoking: text(tags, "smoking"),
            capacity: text(tags, "capacity"),
            stars: text(tags, "stars"),
            brand: text(tags, "brand"),
            description: text(tags, "description"),
            latitude: location.map(|l| l.lat),
            longitude: location.map(|l| l.lon),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct RailStation {
    pub osm_type: OsmType,
    pub osm_id: i64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub transit_type: String,
    pub name: String,
    pub name_en: String,
    pub name_th: String,
    pub railway: String,
    pub station: String,
    pub public_transport: String,
    pub network: String,
    pub operator: String,
    pub line: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub colour: String,
    pub layer: String,
    pub level: String,
    pub platforms: String,
    pub wheelchair: String,
    pub toilets: String,
    pub shelter: String,
    pub bench: String,
    pub lit: String,
    pub covered: String,
    pub website: String,
    pub opening_hours: String,
    pub address: String,
    pub street: String,
    pub district: String,
    pub subdistrict: String,
    pub province: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Projection for RailStation {
    fn project(element: &Element, tags: &TagMap, location: Option<Location>) -> Self {
        RailStation {
            osm_type: element.osm_type(),
            osm_id: element.id(),
            kind: RAIL_STATION,
            transit_type: transit_subtype(tags).to_string(),
            name: name(tags),
            name_en: text(tags, "name:en"),
            name_th: text(tags, "name:th"),
            railway: text(tags, "railway"),
            station: text(tags, "station"),
            public_transport: text(tags, "public_transport"),
            network: text(tags, "network"),
            operator: text(tags, "operator"),
            line: text(tags, "line"),
            reference: text(tags, "ref"),
            colour: text(tags, "colour"),
            layer: text(tags, "layer"),
            level: text(tags, "level"),
            platforms: text(tags, "platforms"),
            wheelchair: text(tags, "wheelchair"),
            toilets: text(tags, "toilets"),
            shelter: text(tags, "shelter"),
            bench: text(tags, "bench"),
            lit: text(tags, "lit"),
            covered: text(tags, "covered"),
            website: text(tags, "website"),
            opening_hours: text(tags, "opening_hours"),
            address: text(tags, "addr:full"),
            street: text(tags, "addr:street"),
            district: text(tags, "addr:district"),
            subdistrict: text(tags, "addr:subdistrict"),
            province: text(tags, "addr:province"),
            latitude: location.map(|l| l.lat),
            longitude: location.map(|l| l.lon),
        }
    }
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct BusStop {
    pub osm_type: OsmType,
    pub osm_id: i64,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub transit_type: &'static str,
    pub name: String,
    pub name_en: String,
    pub name_th: String,
    pub highway: String,
    pub public_transport: String,
    pub amenity: String,
    pub network: String,
    pub operator: String,
    pub route_ref: String,
    pub local_ref: String,
    #[serde(rename = "ref")]
    pub reference: String,
    pub shelter: String,
    pub bench: String,
    pub lit: String,
    pub covered: String,
    pub wheelchair: String,
    pub tactile_paving: String,
    pub departures_board: String,
    pub timetable: String,
    pub bin: String,
    pub surface: String,
    pub address: String,
    pub street: String,
    pub district: String,
    pub subdistrict: String,
    pub province: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Projection for BusStop {
    fn project(element: &Element, tags: &TagMap, location: Option<Location>) -> Self {
        BusStop {
            osm_type: element.osm_type(),
            osm_id: element.id(),
            kind: BUS_STOP,
            transit_type: BUS,
            name: name(tags),
            name_en: text(tags, "name:en"),
            name_th: text(tags, "name:th"),
            highway: text(tags, "highway"),
            public_transport: text(tags, "public_transport"),
            amenity: text(tags, "amenity"),
            network: text(tags, "network"),
            operator: text(tags, "operator"),
            route_ref: text(tags, "route_ref"),
            local_ref: text(tags, "local_ref"),
            reference: text(tags, "ref"),
            shelter: text(tags, "shelter"),
            bench: text(tags, "bench"),
            lit: text(tags, "lit"),
            covered: text(tags, "covered"),
            wheelchair: text(tags, "wheelchair"),
            tactile_paving: text(tags, "tactile_paving"),
            departures_board: text(tags, "departures_board"),
            timetable: text(tags, "timetable"),
            bin: text(tags, "bin"),
            surface: text(tags, "surface"),
            address: text(tags, "addr:full"),
            street: text(tags, "addr:street"),
            district: text(tags, "addr:district"),
            subdistrict: text(tags, "addr:subdistrict"),
            province: text(tags, "addr:province"),
            latitude: location.map(|l| l.lat),
            longitude: location.map(|l| l.lon),
        }
    }
}

impl Entry for Restaurant {
    fn osm_type(&self) -> OsmType {
        self.osm_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<Location> {
        location(self.latitude, self.longitude)
    }
}

impl Entry for RailStation {
    fn osm_type(&self) -> OsmType {
        self.osm_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<Location> {
        location(self.latitude, self.longitude)
    }
}

impl Entry for BusStop {
    fn osm_type(&self) -> OsmType {
        self.osm_type
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<Location> {
        location(self.latitude, self.longitude)
    }
}

/// Any record, for combined exports.
#[derive(Serialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Record {
    Restaurant(Restaurant),
    RailStation(RailStation),
    BusStop(BusStop),
}
