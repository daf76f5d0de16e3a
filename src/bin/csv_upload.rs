//! CSV upload CLI
//!
//! Reads a JSON array of records, renders it as CSV and posts it to an
//! upload endpoint.

use clap::{value_parser, Arg, Command};
use csv_uploader::{read_records, Uploader, UploaderConfig, DEFAULT_TIMEOUT_SECS};
use std::path::PathBuf;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let matches = Command::new("csv_upload")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Upload JSON records as a CSV file")
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Verbose output")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("url")
                .help("Endpoint that receives the upload")
                .required(true),
        )
        .arg(
            Arg::new("records")
                .help("JSON file holding an array of objects")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("filename")
                .short('f')
                .long("filename")
                .help("Destination filename (.csv is appended if missing)"),
        )
        .arg(
            Arg::new("timeout")
                .short('t')
                .long("timeout")
                .help("Request timeout in seconds")
                .value_parser(value_parser!(u64))
                .default_value("30"),
        )
        .get_matches();

    let level = if matches.get_flag("verbose") {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    env_logger::Builder::new().filter_level(level).init();

    let url = matches
        .get_one::<String>("url")
        .ok_or("missing url argument")?;
    let path = matches
        .get_one::<PathBuf>("records")
        .ok_or("missing records argument")?;
    let filename = matches.get_one::<String>("filename").map(String::as_str);
    let timeout = matches
        .get_one::<u64>("timeout")
        .copied()
        .unwrap_or(DEFAULT_TIMEOUT_SECS);

    let records = read_records(path)?;
    log::info!("Loaded {} records from {}", records.len(), path.display());

    let uploader = Uploader::from_config(UploaderConfig::new(url.as_str()).timeout_secs(timeout))?;
    if !uploader.upload(&records, filename)? {
        std::process::exit(1);
    }

    Ok(())
}
