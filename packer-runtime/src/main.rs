use anyhow::{anyhow, Result};
use clap::{arg, ArgAction, Command};
use packer_runtime::{reader::FileReader, ErrorKind, PackError, Packer};
use packer_structs::config::PackerConfig;
use packer_utils::load_json_arg;
use std::{fs, path::PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const EXIT_SOURCE_ERROR: i32 = 1;
const EXIT_DATA_ERROR: i32 = 2;
const EXIT_MISMATCH: i32 = 3;

fn cli() -> Command {
    Command::new("packer")
        .about("Picks the most valuable items that fit each package")
        .arg_required_else_help(true)
        .subcommand(
            Command::new("pack")
                .about("Packs every line of an input file")
                .arg(
                    arg!(<INPUT> "Path to the input file, or '-' for stdin")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--output [OUTPUT_FILE] "If set, the output will be saved to this file path")
                        .value_parser(clap::value_parser!(PathBuf)),
                )
                .arg(
                    arg!(--json "Print one json object per line instead of index lists")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("verify")
                .about("Verifies an output file against its input file")
                .arg(
                    arg!(<INPUT> "Path to the input file")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(<EXPECTED> "Path to the output file to verify")
                        .value_parser(clap::value_parser!(String)),
                )
                .arg(
                    arg!(--config [CONFIG] "Config json string or path to json file")
                        .value_parser(clap::value_parser!(String)),
                ),
        )
}

fn main() {
    init_tracing();
    let matches = cli().get_matches();

    if let Err(e) = match matches.subcommand() {
        Some(("pack", sub_m)) => pack(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
            sub_m.get_one::<PathBuf>("output").cloned(),
            sub_m.get_flag("json"),
        ),
        Some(("verify", sub_m)) => verify(
            sub_m.get_one::<String>("INPUT").unwrap().clone(),
            sub_m.get_one::<String>("EXPECTED").unwrap().clone(),
            sub_m.get_one::<String>("config").cloned(),
        ),
        _ => Err(anyhow!("Invalid subcommand")),
    } {
        eprintln!("Error: {:#}", e);
        std::process::exit(exit_code(&e));
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn exit_code(e: &anyhow::Error) -> i32 {
    match e.downcast_ref::<PackError>().map(PackError::kind) {
        Some(ErrorKind::InputData) | Some(ErrorKind::Config) => EXIT_DATA_ERROR,
        _ => EXIT_SOURCE_ERROR,
    }
}

fn load_config(config: Option<String>) -> Result<PackerConfig, PackError> {
    match config {
        Some(config) => {
            load_json_arg::<PackerConfig>(&config).map_err(|e| PackError::InvalidConfig {
                reason: format!("{:#}", e),
            })
        }
        None => Ok(PackerConfig::default()),
    }
}

pub fn pack(
    input: String,
    config: Option<String>,
    output_file: Option<PathBuf>,
    json: bool,
) -> Result<()> {
    let packer = Packer::new(FileReader, load_config(config)?)?;
    let batch = packer.pack_source(&input)?;
    let output = if json {
        batch.render_json()?
    } else {
        batch.render(&packer.config().empty_marker)
    };

    for rejected in &batch.rejected {
        eprintln!("Skipped line {}: {}", rejected.line, rejected.error);
    }
    match output_file {
        Some(path) => fs::write(&path, output + "\n")
            .map_err(|e| anyhow!("Failed to write output file {}: {}", path.display(), e))?,
        None => println!("{}", output),
    }
    Ok(())
}

pub fn verify(input: String, expected: String, config: Option<String>) -> Result<()> {
    let packer = Packer::new(FileReader, load_config(config)?)?;
    let mismatches = packer.verify(&input, &expected)?;
    if mismatches.is_empty() {
        println!("Output is valid");
        return Ok(());
    }
    for mismatch in &mismatches {
        eprintln!("Line {}: {}", mismatch.line, mismatch.reason);
    }
    eprintln!("Verification error: {} mismatched lines", mismatches.len());
    std::process::exit(EXIT_MISMATCH);
}
