//! Command-line interface for swatchbook
//!
//! Describe hex colors, generate a random palette or extract one from an
//! image, printing the result as JSON.

use rand::{rngs::StdRng, SeedableRng};
use std::{env, path::PathBuf, process};
use swatchbook::{
    build_palette, describe_image, ColorExtractor, HistogramExtractor,
    PaletteBuilder, PaletteConfig, PaletteError, PaletteExport, PaletteKind,
};

enum Command {
    Describe(Vec<String>),
    Generate,
    Extract(PathBuf),
}

struct Options {
    command: Command,
    kind: PaletteKind,
    seed: Option<u64>,
    export: Option<PathBuf>,
    config: Option<PathBuf>,
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let options = parse_args(&args);

    if let Err(error) = run(options) {
        eprintln!("Failed: {}", error);
        if error.is_recoverable() {
            eprintln!("Suggestion: {}", error.user_message());
        }
        process::exit(1);
    }
}

fn parse_args(args: &[String]) -> Options {
    let program = args.first().map(String::as_str).unwrap_or("cli");
    let mut kind = PaletteKind::Material;
    let mut seed = None;
    let mut export = None;
    let mut config = None;
    let mut positional = Vec::new();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--tailwind" => kind = PaletteKind::Tailwind,
            "--seed" | "--export" | "--config" => {
                let flag = args[i].as_str();
                let Some(value) = args.get(i + 1) else {
                    eprintln!("Error: {} needs a value", flag);
                    process::exit(1);
                };
                match flag {
                    "--seed" => match value.parse() {
                        Ok(parsed) => seed = Some(parsed),
                        Err(_) => {
                            eprintln!("Error: invalid seed '{}'", value);
                            process::exit(1);
                        }
                    },
                    "--export" => export = Some(PathBuf::from(value)),
                    _ => config = Some(PathBuf::from(value)),
                }
                i += 1;
            }
            "--help" | "-h" => {
                print_help(program);
                process::exit(0);
            }
            arg if !arg.starts_with("--") => positional.push(arg.to_string()),
            _ => {
                eprintln!("Unknown option: {}", args[i]);
                eprintln!("Use --help for usage information");
                process::exit(1);
            }
        }
        i += 1;
    }

    let mut positional = positional.into_iter();
    let command = match positional.next().as_deref() {
        Some("describe") => Command::Describe(positional.collect()),
        Some("generate") => Command::Generate,
        Some("extract") => match positional.next() {
            Some(path) => Command::Extract(PathBuf::from(path)),
            None => {
                eprintln!("Error: extract needs an image path");
                process::exit(1);
            }
        },
        _ => {
            print_help(program);
            process::exit(1);
        }
    };

    Options {
        command,
        kind,
        seed,
        export,
        config,
    }
}

fn run(options: Options) -> Result<(), PaletteError> {
    let config = match &options.config {
        Some(path) => PaletteConfig::from_json_file(path)?,
        None => PaletteConfig::default(),
    };
    let builder = PaletteBuilder::with_config(&config);
    let with_classification = options.kind.with_classification();

    let records = match options.command {
        Command::Describe(hex_list) => builder.try_build_palette(&hex_list, with_classification)?,
        Command::Generate => {
            let mut rng = match options.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_entropy(),
            };
            let hex_list = swatchbook::generation::synthesize_with(&mut rng, &config.synthesis);
            build_palette(&hex_list, with_classification)
        }
        Command::Extract(path) => {
            let bytes = std::fs::read(&path)
                .map_err(|e| PaletteError::io(format!("Failed to read {}", path.display()), e))?;
            let extractor: Box<dyn ColorExtractor> =
                Box::new(HistogramExtractor::with_config(config.extraction.clone()));
            describe_image(extractor.as_ref(), &bytes, &builder, options.kind)?
        }
    };

    let export = PaletteExport::new(options.kind, records);
    println!("{}", export.to_json()?);

    if let Some(path) = options.export {
        let written = if path.is_dir() {
            export.write_to_dir(&path)?
        } else {
            export.write_to(&path)?;
            path
        };
        eprintln!("Saved {}", written.display());
    }
    Ok(())
}

fn print_help(program_name: &str) {
    eprintln!("Usage: {} <COMMAND> [OPTIONS]", program_name);
    eprintln!();
    eprintln!("Describe colors and generate palettes.");
    eprintln!();
    eprintln!("Commands:");
    eprintln!("  describe <HEX>...   Describe the given hex colors");
    eprintln!("  generate            Synthesize a random palette");
    eprintln!("  extract <IMAGE>     Extract dominant colors from an image");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tailwind          Include the nearest Tailwind class");
    eprintln!("  --seed <N>          Seed for generate");
    eprintln!("  --export <PATH>     Also write the JSON to a file or directory");
    eprintln!("  --config <FILE>     Load a JSON configuration");
    eprintln!("  --help, -h          Show this help message");
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} describe '#2563eb' '#dc2626' --tailwind", program_name);
    eprintln!("  {} generate --seed 42", program_name);
    eprintln!("  RUST_LOG=debug {} extract photo.jpg --export out/", program_name);
}
