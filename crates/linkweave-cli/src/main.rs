use anyhow::Result;
use linkweave_cli::{RunOptions, link_config_from, run};
use linkweave_config::Config;
use std::{env, path::PathBuf, process};

fn print_usage() {
    eprintln!("Usage: linkweave [--dry-run] [NOTES_PATH]");
    eprintln!();
    eprintln!("Rewrites plain-text mentions of other notes' titles into [[wikilinks]].");
    eprintln!(
        "NOTES_PATH defaults to notes_path from {}",
        Config::config_path().display()
    );
}

fn main() -> Result<()> {
    let mut dry_run = false;
    let mut path_arg: Option<PathBuf> = None;

    for arg in env::args().skip(1) {
        match arg.as_str() {
            "--dry-run" | "-n" => dry_run = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => {
                eprintln!("Unknown option: {other}");
                print_usage();
                process::exit(2);
            }
            other => path_arg = Some(PathBuf::from(other)),
        }
    }

    let config = Config::load()?;
    let Some(notes_path) = path_arg.or_else(|| config.as_ref().map(|c| c.notes_path.clone()))
    else {
        eprintln!("No notes path given and no config file found.");
        print_usage();
        process::exit(1);
    };

    let exclude = match &config {
        Some(c) => c.exclude_patterns()?,
        None => Vec::new(),
    };
    let link_config = config
        .as_ref()
        .map(|c| link_config_from(&c.linking))
        .unwrap_or_default();

    let report = run(&RunOptions {
        notes_path,
        link_config,
        exclude,
        dry_run,
    })?;

    println!(
        "{} note{} updated, {} link{} inserted{}",
        report.changed_notes,
        if report.changed_notes == 1 { "" } else { "s" },
        report.insertions,
        if report.insertions == 1 { "" } else { "s" },
        if dry_run { " (dry run)" } else { "" }
    );
    Ok(())
}
