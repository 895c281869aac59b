use super::error::Error;
use super::output::Output;
use env_logger::Env;
use std::path::{Path, PathBuf};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
pub struct Args {
    /// OSM extract, `.pbf` or OSM XML
    #[structopt(parse(from_os_str))]
    pub input: Option<PathBuf>,

    /// Directory the CSV and JSON files are written to
    #[structopt(short, long, default_value = ".", parse(from_os_str))]
    pub output_dir: PathBuf,
}

impl Args {
    /// Parses the process arguments, reporting `binary` as the program name.
    pub fn parse(binary: &str) -> Self {
        let matches = Args::clap().name(binary).get_matches();
        Args::from_clap(&matches)
    }

    /// The input file, which has to exist.
    pub fn input_path(&self) -> Result<&Path, Error> {
        let path = self.input.as_deref().ok_or(Error::MissingArgument)?;
        if !path.exists() {
            return Err(Error::FileNotFound(path.to_path_buf()));
        }
        Ok(path)
    }

    pub fn output_path(&self, base: &str, suffix: &str, extension: &str) -> PathBuf {
        self.output_dir
            .join(format!("{}_{}.{}", base, suffix, extension))
    }
}

/// The input's file name without its last extension.
pub fn base_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string())
}

pub fn usage(binary: &str) -> String {
    format!(
        "Usage: {0} <osm_file.pbf|osm.xml> [--output-dir <dir>]

Example:
  {0} bangkok_thailand.osm.pbf

To download Bangkok OSM data:
  1. Visit: https://download.geofabrik.de/asia/thailand.html
  2. Download thailand-latest.osm.pbf (or use a Bangkok extract)
  3. Or use Overpass API for Bangkok-specific data",
        binary
    )
}

/// `RUST_LOG` overrides the default `info` level.
pub fn init_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();
}

/// Writes CSV and JSON next to each other and reports the saved files.
pub fn save<O: Output + ?Sized>(
    records: &O,
    csv: &Path,
    json: &Path,
    noun: &str,
) -> Result<usize, Error> {
    if records.record_count() == 0 {
        println!("No {} found to save.", noun);
        return Ok(0);
    }
    let count = records.write_csv(csv)?;
    println!("✓ Saved {} {} to {}", count, noun, csv.display());
    let count = records.write_json(json)?;
    println!("✓ Saved {} {} to {}", count, noun, json.display());
    Ok(count)
}
