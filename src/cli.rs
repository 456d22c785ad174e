use std::ffi::OsString;
use std::path::PathBuf;

use clap::{crate_version, value_parser, Arg, Command};

pub const USAGE: &str = "Usage: protein_validator <input_fasta>";

pub fn build_cli() -> Command {
    Command::new("protein_validator")
        .version(crate_version!())
        .about("Split a protein FASTA file into records with only standard amino acids and the rest.\n\
                Writes proteins_valid.fasta and proteins_invalid.fasta to the current directory.")
        .override_usage("protein_validator <input_fasta>")
        .disable_version_flag(true)
        .arg(
            Arg::new("input")
                .value_name("input_fasta")
                .help("Input FASTA file, optionally gzipped (.gz)")
                .required(true)
                .allow_hyphen_values(true)
                .value_parser(value_parser!(PathBuf)),
        )
}

// Returns the input path, or the clap error for a bad invocation.
// A path starting with '-' is taken as the input, not as a flag.
pub fn parse_args<I, T>(args: I) -> Result<PathBuf, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    let matches = build_cli().try_get_matches_from(args)?;
    match matches.get_one::<PathBuf>("input") {
        Some(path) => Ok(path.clone()),
        None => Err(build_cli().error(
            clap::error::ErrorKind::MissingRequiredArgument,
            "missing <input_fasta>",
        )),
    }
}
