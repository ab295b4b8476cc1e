//! Command-line flags.

use std::path::PathBuf;

use crate::error::{Error, Result};

pub const USAGE: &str = "\
Usage: desktop-mirror [OPTIONS]

Options:
  --config <PATH>    Settings file (default: %APPDATA%\\DesktopMirror\\config.json)
  --desktop <PATH>   Folder to mirror instead of the user's desktop
  --list             Print the filtered desktop items and exit
  -v, --verbose      Debug logging (RUST_LOG overrides)
  -h, --help         Show this help";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub config_path: Option<PathBuf>,
    pub desktop_dir: Option<PathBuf>,
    pub list: bool,
    pub verbose: bool,
    pub help: bool,
}

impl Options {
    /// Parses arguments without the program name.
    pub fn parse<I, S>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut options = Options::default();
        let mut args = args.into_iter().map(Into::into);

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => options.config_path = Some(value_for(&arg, args.next())?),
                "--desktop" => options.desktop_dir = Some(value_for(&arg, args.next())?),
                "--list" => options.list = true,
                "-v" | "--verbose" => options.verbose = true,
                "-h" | "--help" => options.help = true,
                other => return Err(Error::Usage(format!("unknown argument: {other}"))),
            }
        }
        Ok(options)
    }
}

fn value_for(flag: &str, value: Option<String>) -> Result<PathBuf> {
    match value {
        Some(v) if !v.starts_with("--") => Ok(PathBuf::from(v)),
        _ => Err(Error::Usage(format!("{flag} expects a path"))),
    }
}
