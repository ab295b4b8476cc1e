#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

#[cfg(target_os = "windows")]
mod windows_main;

use std::process::ExitCode;

use desktop_mirror::cli::{Options, USAGE};
use desktop_mirror::model::{list_desktop_items, resolve_desktop_dir};
use desktop_mirror::{display_rules, init_logging, ConfigStore, Result};
use tracing::{error, warn};

fn main() -> ExitCode {
    let options = match Options::parse(std::env::args().skip(1)) {
        Ok(options) => options,
        Err(e) => {
            eprintln!("{e}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    if options.help {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    init_logging(options.verbose);

    let result = if options.list {
        print_listing(&options)
    } else {
        run_gui(options)
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("desktop-mirror: {e}");
            ExitCode::FAILURE
        }
    }
}

/// `--list`: prints what the panel would show, in panel order.
fn print_listing(options: &Options) -> Result<()> {
    let store = ConfigStore::new(
        options
            .config_path
            .clone()
            .unwrap_or_else(ConfigStore::default_path),
    );
    let config = store.load_read_only()?;

    let (rules, problem) = display_rules(&config);
    if let Some(e) = problem {
        warn!("Hidden-item filter disabled: {e}");
    }

    let dir = resolve_desktop_dir(options.desktop_dir.clone())?;

    for item in list_desktop_items(&dir, &rules)? {
        let kind = if item.is_folder { "[dir] " } else { "[file]" };
        println!("{kind} {}\t{}", item.name, item.path.display());
    }
    Ok(())
}

#[cfg(target_os = "windows")]
fn run_gui(options: Options) -> Result<()> {
    windows_main::run(options)
}

#[cfg(not(target_os = "windows"))]
fn run_gui(_options: Options) -> Result<()> {
    Err(desktop_mirror::Error::Usage(
        "the tray panel is only available on Windows; use --list to inspect a folder".into(),
    ))
}
