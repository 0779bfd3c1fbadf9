// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! This module has the function that called by the main function.

use std::{
    fs::File,
    io::{self, BufReader},
    path::{Path, PathBuf},
};

use clap::Parser;
use log::debug;
use thiserror::Error;

use crate::{
    batch_processor::{BatchOutcome, BatchProcessor},
    embedder::{CoverEmbedder, Embedders},
    reporter::{ConsoleReporter, Reporter, Style},
};

/// The struct for setting.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about,
    long_about = "Embed cover images into converted FLAC and MP3 files and delete the images."
)]
pub struct Setting {
    #[arg(long, help = "Print messages without colors.")]
    pub no_color: bool,

    #[arg(short, long, help = "Print debug messages.")]
    pub verbose: bool,

    #[arg(
        required = true,
        value_name = "INPUT_LIST",
        value_parser = is_input_list_available,
        help = "A text file that has a path without extension per line."
    )]
    pub input_list: PathBuf,
}

/// Error of embed_cover.
#[derive(Error, Debug)]
pub enum EmbedCoverError {
    #[error("Input file not found: {0}")]
    InputListNotFound(PathBuf),

    #[error("Input file {0} cannot be opened: {1}")]
    InputListCannotBeOpened(PathBuf, io::Error),
}

fn is_input_list_available(argument: &str) -> Result<PathBuf, String> {
    let path = Path::new(argument);

    if path.is_file() {
        Ok(path.to_path_buf())
    } else {
        Err(format!(r#"The input file "{argument}" is not found."#))
    }
}

fn open_input_list(input_list: &Path) -> Result<BufReader<File>, EmbedCoverError> {
    if !input_list.is_file() {
        return Err(EmbedCoverError::InputListNotFound(input_list.to_path_buf()));
    }

    File::open(input_list)
        .map(BufReader::new)
        .map_err(|error| EmbedCoverError::InputListCannotBeOpened(input_list.to_path_buf(), error))
}

fn embed_cover_with<E: CoverEmbedder, R: Reporter>(
    input_list: &Path,
    processor: &BatchProcessor<E, R>,
) -> Result<BatchOutcome, EmbedCoverError> {
    let reader = open_input_list(input_list)?;

    debug!("Input list: {:?}", input_list);

    processor
        .reporter()
        .info(&format!("Processing file: {}", processor.reporter().path(input_list)));

    Ok(processor.process_reader(reader))
}

/// Embeds covers into the music files listed in the input list.
///
/// Failures of entries are reported and counted. Only an input list that cannot be opened is
/// an error.
pub fn embed_cover(setting: &Setting) -> Result<BatchOutcome, EmbedCoverError> {
    let reporter = ConsoleReporter::stdout(Style::detect(setting.no_color), setting.verbose);
    let processor = BatchProcessor::new(Embedders, reporter);

    embed_cover_with(&setting.input_list, &processor)
}
