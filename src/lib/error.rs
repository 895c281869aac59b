use quick_xml::events::attributes::AttrError;
use std::io;
use std::num::{ParseFloatError, ParseIntError};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("no input file given")]
    MissingArgument,

    #[error("File '{}' not found.", .0.display())]
    FileNotFound(PathBuf),

    #[error("could not process OSM data: {0}")]
    Source(#[from] SourceError),

    #[error(transparent)]
    Io(#[from] io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// The OSM source could not be read or decoded.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error(transparent)]
    Pbf(#[from] osmpbfreader::Error),

    #[error(transparent)]
    Xml(#[from] quick_xml::Error),

    #[error(transparent)]
    Attribute(#[from] AttrError),

    #[error("invalid id: {0}")]
    Id(#[from] ParseIntError),

    #[error("invalid coordinate: {0}")]
    Coordinate(#[from] ParseFloatError),

    #[error("<{element}> without {attribute} attribute")]
    MissingAttribute { element: String, attribute: String },
}
