// src/cli.rs
use std::{env, io, path::{Path, PathBuf}};

use crate::config::{RunOptions, SinkKind};
use crate::error::{ColorError, Result};
use crate::runner::{self, Outcome};

pub const HELP: &str = include_str!("cli_help.txt");

#[derive(Debug, PartialEq, Eq)]
pub enum Command {
    Run(RunOptions),
    Help,
}

/// Parse the process arguments and run. Returns `None` when only help was shown.
pub fn run() -> Result<Option<Outcome>> {
    match parse_cli(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", HELP);
            Ok(None)
        }
        Command::Run(opts) => {
            if let Some(path) = &opts.log_file {
                init_log(path)?;
            }
            let stdout = io::stdout();
            runner::run(&opts, stdout.lock(), None).map(Some)
        }
    }
}

fn init_log(path: &Path) -> Result<()> {
    crate::log::init(path).map_err(|source| ColorError::Log { path: path.to_path_buf(), source })
}

fn bad_arg(parameter: &str, value: &str) -> ColorError {
    ColorError::Config { parameter: s!(parameter), value: s!(value) }
}

pub fn parse_cli<I>(args: I) -> Result<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = RunOptions::default();
    let mut input: Option<PathBuf> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "--sink" => {
                let v = args.next().ok_or_else(|| bad_arg("--sink", ""))?;
                opts.sink = SinkKind::parse(&v).ok_or_else(|| bad_arg("--sink", &v))?;
            }
            "--store" => {
                let v = args.next().ok_or_else(|| bad_arg("--store", ""))?;
                opts.store_path = PathBuf::from(v);
            }
            "--log" => {
                let v = args.next().ok_or_else(|| bad_arg("--log", ""))?;
                opts.log_file = Some(PathBuf::from(v));
            }
            "--skip-headers" => opts.skip_header_rows = true,
            "-h" | "--help" => return Ok(Command::Help),
            flag if flag.starts_with('-') && flag != "-" => return Err(bad_arg("argument", flag)),
            path => {
                if input.is_some() {
                    return Err(bad_arg("input", path));
                }
                input = Some(PathBuf::from(path));
            }
        }
    }

    if let Some(p) = input {
        opts.input = p;
    }
    Ok(Command::Run(opts))
}
