use osm_poi_extract::cli::{self, base_name, Args};
use osm_poi_extract::stats::Summary;
use osm_poi_extract::{extract, Error, Restaurants};
use std::io;
use std::process;

const BINARY: &str = "osm_restaurants";

fn run(args: &Args) -> Result<(), Error> {
    let path = args.input_path()?;
    println!("Processing OSM file: {}", path.display());
    println!("This may take a few minutes depending on file size...\n");

    let collected: Restaurants = extract(path)?;
    collected.restaurants.summarize(&mut io::stdout())?;

    let base = base_name(path);
    let csv = args.output_path(&base, "restaurants", "csv");
    let json = args.output_path(&base, "restaurants", "json");
    cli::save(collected.restaurants.as_slice(), &csv, &json, "restaurants")?;

    println!("\n✓ Done! Restaurant data extracted successfully.");
    println!("\nOutput files:");
    println!("  - {}", csv.display());
    println!("  - {}", json.display());
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
