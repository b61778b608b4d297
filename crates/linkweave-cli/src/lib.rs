pub mod note;
pub mod vault;

use anyhow::Result;
use linkweave_config::LinkingSettings;
use linkweave_engine::{LinkConfig, Linker, MemoryIndex};
use std::path::PathBuf;

pub use note::Note;

/// One batch run over a vault.
pub struct RunOptions {
    pub notes_path: PathBuf,
    pub link_config: LinkConfig,
    /// Notes matching any of these patterns are neither linked into nor
    /// linked out of.
    pub exclude: Vec<glob::Pattern>,
    /// Report what would change without writing anything.
    pub dry_run: bool,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Notes that gained at least one link.
    pub changed_notes: usize,
    /// Total links inserted across the vault.
    pub insertions: usize,
}

/// Maps the config file's `[linking]` table onto the engine's policy.
pub fn link_config_from(settings: &LinkingSettings) -> LinkConfig {
    LinkConfig {
        first_only: settings.first_only,
        smart_mode: settings.smart_mode,
        black_list: settings.black_list.iter().cloned().collect(),
        capital_links: settings.capital_links,
        word_start_only: settings.word_start_only,
        word_end_only: settings.word_end_only,
    }
}

/// Links every note in the vault against an index built from the vault
/// itself: each note's title (file name without extension) is a link
/// target for every other note.
pub fn run(opts: &RunOptions) -> Result<RunReport> {
    let notes: Vec<Note> = vault::scan_notes(&opts.notes_path)?
        .into_iter()
        .filter(|n| {
            !opts
                .exclude
                .iter()
                .any(|p| p.matches(n.relative_path().as_str()))
        })
        .collect();

    let index = MemoryIndex::new(
        notes.iter().map(|n| n.title().to_string()),
        opts.link_config.capital_links,
    );
    let linker = Linker::new(opts.link_config.clone());

    let mut report = RunReport::default();
    for note in &notes {
        let body = vault::read_note(note, &opts.notes_path)?;
        let outcome = linker.link_content(note.title(), &body, &index)?;
        if outcome.insertions == 0 {
            continue;
        }
        if !opts.dry_run {
            vault::write_note(note, &opts.notes_path, &outcome.text)?;
        }
        println!(
            "{}: {} new link{}",
            note.relative_path(),
            outcome.insertions,
            if outcome.insertions == 1 { "" } else { "s" }
        );
        report.changed_notes += 1;
        report.insertions += outcome.insertions;
    }

    Ok(report)
}
