#![warn(non_snake_case)]
//! # cave_gen Entry Point
//!
//! Generates a single cave from an optional JSON configuration file and prints
//! it to stdout, either as a `#`/`.` text grid or as a full JSON export with
//! room and passage metadata.
//!
//! ```text
//! cave_gen [CONFIG.json] [--seed SEED] [--json]
//! ```
//!
//! Set `RUST_LOG=debug` to follow each generation phase.
//!
//! ## License
//! Licensed under the MIT License.

use std::error::Error;
use std::process::ExitCode;

use log::{debug, error, info};

use cave_gen::{CaveGenerator, GeneratorConfig};

#[derive(Debug, Default)]
struct Options {
    config_path: Option<String>,
    seed: Option<String>,
    json: bool,
}

fn parse_args<I: Iterator<Item = String>>(mut args: I) -> Result<Options, String> {
    let mut options = Options::default();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--json" => options.json = true,
            "--seed" => {
                let seed = args.next().ok_or("--seed expects a value")?;
                options.seed = Some(seed);
            }
            flag if flag.starts_with("--") => return Err(format!("unknown option {}", flag)),
            path => {
                if options.config_path.replace(path.to_string()).is_some() {
                    return Err("only one configuration file may be given".to_string());
                }
            }
        }
    }
    Ok(options)
}

fn run(options: Options) -> Result<(), Box<dyn Error>> {
    let mut config = match &options.config_path {
        Some(path) => {
            info!("Loading configuration from {}", path);
            GeneratorConfig::load(path)?
        }
        None => GeneratorConfig {
            use_random_seed: true,
            ..GeneratorConfig::default()
        },
    };
    if let Some(seed) = options.seed {
        config = config.with_seed(seed);
    }

    let generator = CaveGenerator::new(config)?;
    debug!("Effective configuration: {:?}", generator.config());
    let map = generator.generate()?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&map)?);
    } else {
        print!("{}", map.grid);
        println!("seed: {}", map.seed);
    }
    Ok(())
}

fn main() -> ExitCode {
    // Initialize logging.
    env_logger::init();

    let options = match parse_args(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(message) => {
            error!("{}", message);
            eprintln!("usage: cave_gen [CONFIG.json] [--seed SEED] [--json]");
            return ExitCode::FAILURE;
        }
    };

    match run(options) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Generation failed: {}", err);
            ExitCode::FAILURE
        }
    }
}
