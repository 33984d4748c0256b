//! wikicoord's main application entry point.
//! Handles command-line argument parsing, reads every input and prints the
//! coordinate extracted from it.

use wikicoord::{
    cli::{get_args, Args, OutputFormat},
    error::{default_error_handler, Error, Result},
    input::{read_input, InputSource},
    logger::init_logger,
    parse, Coordinate,
};

/// Main application entry point.
fn main() {
    let args = get_args();

    init_logger(args.verbose);

    if let Err(err) = run(args) {
        default_error_handler(err);
    }
}

fn print_coordinate(source: &InputSource, coordinate: Coordinate, format: OutputFormat) {
    match format {
        OutputFormat::Plain => println!("{}", coordinate),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({
                "source": source.to_string(),
                "lat": coordinate.lat,
                "lon": coordinate.lon,
            })
        ),
    }
}

fn process(source: &InputSource, args: &Args) -> Result<()> {
    let text = read_input(source)?;
    match parse(&text) {
        Ok(coordinate) => {
            print_coordinate(source, coordinate, args.format);
            Ok(())
        }
        Err(err) if err.is_validation() && args.allow_invalid => {
            log::warn!("{}: {}", source, err);
            print_coordinate(source, err.coordinate(), args.format);
            Ok(())
        }
        Err(err) => Err(err),
    }
}

/// Main application logic execution.
///
/// # Flow
/// 1. Resolves the input sources (stdin when no files are given)
/// 2. Extracts and prints one coordinate per input
/// 3. Fails if any input produced no coordinate
fn run(args: Args) -> Result<()> {
    let sources = InputSource::from_args(&args.files);
    let mut failed = 0;

    for source in &sources {
        if let Err(e) = process(source, &args) {
            failed += 1;
            match e {
                Error::NoCoordData => log::warn!("{}: {}", source, e),
                _ => log::error!("{}: {}", source, e),
            }
        }
    }

    if failed > 0 {
        return Err(Error::InputsFailed {
            failed,
            total: sources.len(),
        });
    }
    Ok(())
}
