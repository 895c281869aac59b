use osm_poi_extract::cli::{self, base_name, Args};
use osm_poi_extract::output::Output;
use osm_poi_extract::stats::Summary;
use osm_poi_extract::{extract, Error, Transit};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

const BINARY: &str = "osm_transit";

struct Saved {
    label: &'static str,
    csv: PathBuf,
    json: PathBuf,
}

fn save<O: Output + ?Sized>(
    args: &Args,
    base: &str,
    label: &'static str,
    suffix: &str,
    records: &O,
) -> Result<Option<Saved>, Error> {
    if records.record_count() == 0 {
        return Ok(None);
    }
    let csv = args.output_path(base, suffix, "csv");
    let json = args.output_path(base, suffix, "json");
    cli::save(records, &csv, &json, "items")?;
    Ok(Some(Saved { label, csv, json }))
}

fn run(args: &Args) -> Result<(), Error> {
    let path = args.input_path()?;
    println!("Processing OSM file: {}", path.display());
    println!("Extracting rail stations and bus stops...");
    println!("This may take a few minutes depending on file size...\n");

    let transit: Transit = extract(path)?;
    let mut out = io::stdout();
    transit.rail_stations.summarize(&mut out)?;
    transit.bus_stops.summarize(&mut out)?;
    out.flush()?;

    let base = base_name(path);
    let all = transit.all();
    let saved: Vec<Saved> = vec![
        save(args, &base, "Rail stations", "rail_stations", transit.rail_stations.as_slice())?,
        save(args, &base, "Bus stops", "bus_stops", transit.bus_stops.as_slice())?,
        save(args, &base, "Combined", "all_transit", all.as_slice())?,
    ]
    .into_iter()
    .flatten()
    .collect();

    println!("\n✓ Done! Transit data extracted successfully.");
    println!("\nOutput files:");
    for file in saved {
        println!("  {}:", file.label);
        println!("    - {}", file.csv.display());
        println!("    - {}", file.json.display());
    }
    Ok(())
}

fn main() {
    cli::init_logging();
    let args = Args::parse(BINARY);
    match run(&args) {
        Ok(()) => (),
        Err(Error::MissingArgument) => {
            println!("{}", cli::usage(BINARY));
            process::exit(1);
        }
        Err(err) => {
            println!("Error: {}", err);
            process::exit(1);
        }
    }
}
