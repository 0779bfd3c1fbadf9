// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Processes a list of base paths one by one.

use std::{fs, io, io::BufRead, path::Path};

use log::debug;

use crate::{
    embedder::{CoverEmbedder, CoverImage},
    path_resolver,
    reporter::Reporter,
};

/// Outcome of one line of the input list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryOutcome {
    /// The line is blank.
    Skipped,

    /// The cover is embedded into one or more music files.
    Succeeded { embedded_files: usize },

    Failed { reason: String },
}

/// Counts of processed lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOutcome {
    pub succeeded: usize,
    pub failed: usize,
    pub skipped: usize,
}

impl BatchOutcome {
    fn count(&mut self, outcome: &EntryOutcome) {
        match outcome {
            EntryOutcome::Skipped => self.skipped += 1,
            EntryOutcome::Succeeded { .. } => self.succeeded += 1,
            EntryOutcome::Failed { .. } => self.failed += 1,
        }
    }
}

pub struct BatchProcessor<E: CoverEmbedder, R: Reporter> {
    embedder: E,
    reporter: R,
}

impl<E: CoverEmbedder, R: Reporter> BatchProcessor<E, R> {
    pub fn new(embedder: E, reporter: R) -> Self {
        BatchProcessor { embedder, reporter }
    }

    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Processes every line of a reader.
    ///
    /// A line that cannot be read is counted as a failure.
    pub fn process_reader<B: BufRead>(&self, reader: B) -> BatchOutcome {
        self.process_lines(reader.lines())
    }

    pub fn process_lines<I, S>(&self, lines: I) -> BatchOutcome
    where
        I: IntoIterator<Item = io::Result<S>>,
        S: AsRef<str>,
    {
        let mut outcome = BatchOutcome::default();

        for (index, line) in lines.into_iter().enumerate() {
            let line_number = index + 1;

            let entry_outcome = match line {
                Ok(line) => self.process_line(line_number, line.as_ref()),
                Err(error) => {
                    self.reporter
                        .error(&format!("Line {line_number} cannot be read: {error}"));

                    EntryOutcome::Failed {
                        reason: error.to_string(),
                    }
                }
            };

            outcome.count(&entry_outcome);
        }

        self.report_summary(&outcome);

        outcome
    }

    pub fn process_line(&self, line_number: usize, line: &str) -> EntryOutcome {
        let line = line.trim();

        if line.is_empty() {
            debug!("Line {line_number} is blank");

            return EntryOutcome::Skipped;
        }

        self.reporter
            .info(&format!("Processing line {line_number}: {line}"));

        self.process_base_path(Path::new(line))
    }

    /// Embeds the cover of a base path into its music files.
    pub fn process_base_path(&self, base_path: &Path) -> EntryOutcome {
        let resolved = path_resolver::resolve(base_path);

        if !resolved.cover.is_file() {
            self.reporter.warn(&format!(
                "Cover image not found: {}",
                self.reporter.path(&resolved.cover)
            ));

            return failed("cover not found");
        }

        if resolved.audio_files.is_empty() {
            self.reporter.warn(&format!(
                "No music files found for: {}",
                self.reporter.path(base_path)
            ));

            return failed("no music files found");
        }

        let cover = match CoverImage::load(&resolved.cover) {
            Ok(cover) => cover,
            Err(error) => {
                self.reporter.error(&error.to_string());

                return failed(error.to_string());
            }
        };

        let embedded_files = resolved
            .audio_files
            .iter()
            .filter(|audio_file| self.embed(audio_file, &cover))
            .count();

        if embedded_files == 0 {
            return failed("no cover was embedded");
        }

        self.remove_cover(&resolved.cover);

        EntryOutcome::Succeeded { embedded_files }
    }

    fn embed(&self, audio_file: &Path, cover: &CoverImage) -> bool {
        let filename = display_filename(audio_file);

        self.reporter.info(&format!("Processing: {filename}"));

        match self.embedder.embed(audio_file, cover) {
            Ok(()) => {
                self.reporter
                    .success(&format!("Successfully embedded cover into: {filename}"));

                true
            }
            Err(error) => {
                self.reporter
                    .error(&format!("Error embedding cover into {filename}: {error}"));

                false
            }
        }
    }

    /// Deletes the cover after a successful embedding.
    ///
    /// A failure is only warned because the cover has already been embedded.
    fn remove_cover(&self, cover: &Path) {
        match fs::remove_file(cover) {
            Ok(()) => self.reporter.info(&format!(
                "Deleted cover image: {}",
                self.reporter.path(cover)
            )),
            Err(error) => self
                .reporter
                .warn(&format!("Could not delete cover image: {error}")),
        }
    }

    fn report_summary(&self, outcome: &BatchOutcome) {
        self.reporter.success("Processing complete!");
        self.reporter
            .info(&format!("Successfully processed: {} files", outcome.succeeded));
        self.reporter
            .info(&format!("Failed to process: {} files", outcome.failed));

        if outcome.skipped > 0 {
            self.reporter
                .info(&format!("Skipped blank lines: {}", outcome.skipped));
        }
    }
}

fn failed<S: Into<String>>(reason: S) -> EntryOutcome {
    EntryOutcome::Failed {
        reason: reason.into(),
    }
}

fn display_filename(path: &Path) -> String {
    path.file_name()
        .map(|filename| filename.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
