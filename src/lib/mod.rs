use log::info;
use pbf::PbfSource;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use xml::XmlElements;

pub use collector::{collect, Collector, Restaurants, Transit};
pub use error::Error;

pub mod cli;
pub mod collector;
pub mod error;
pub mod filter;
pub mod geo;
pub mod items;
pub mod output;
pub mod pbf;
pub mod records;
pub mod stats;
pub mod tags;
pub mod xml;

#[cfg(test)]
mod test_helpers;

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Format {
    Pbf,
    Xml,
}

impl Format {
    /// `.pbf` files are read as PBF, everything else as OSM XML.
    pub fn of(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("pbf") => Format::Pbf,
            _ => Format::Xml,
        }
    }
}

/// Reads an OSM extract and collects whatever `C` is interested in.
pub fn extract<C: Collector>(path: &Path) -> Result<C, Error> {
    let file = BufReader::new(File::open(path)?);
    let format = Format::of(path);
    info!("reading {} as {:?}", path.display(), format);

    let collected: C = match format {
        Format::Pbf => {
            let mut source = PbfSource::open(file, C::wants)?;
            collect(source.elements())?
        }
        Format::Xml => collect(XmlElements::open(file, C::wants)?)?,
    };
    info!("{} records collected", collected.len());
    Ok(collected)
}
