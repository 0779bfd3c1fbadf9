// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Embedding covers into FLAC files.

use std::{
    any::Any,
    fs::File,
    panic::{self, AssertUnwindSafe},
    path::Path,
};

use lofty::{
    config::{ParseOptions, WriteOptions},
    file::AudioFile,
    flac::FlacFile,
    ogg::OggPictureStorage,
};
use log::debug;

use crate::embed_error::EmbedError;

use super::common::{self, CoverImage};

pub fn is_flac<P: AsRef<Path>>(file: P) -> bool {
    common::has_extension("flac", file)
}

fn read_flac_file(flac_file: &Path) -> Result<FlacFile, EmbedError> {
    let cannot_read = |cause: String| EmbedError::CannotReadMetadata {
        path: flac_file.to_path_buf(),
        cause,
    };

    let mut file = File::open(flac_file).map_err(|error| cannot_read(error.to_string()))?;

    FlacFile::read_from(&mut file, ParseOptions::new())
        .map_err(|error| cannot_read(error.to_string()))
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    payload
        .downcast_ref::<&str>()
        .map(|message| message.to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Writing metadata panicked.".to_owned())
}

/// Saves a FLAC file in place.
///
/// lofty panics while rewriting a file whose only metadata block is STREAMINFO. The panic is
/// returned as an error so that it fails only this file.
fn save_flac_file(flac: &FlacFile, flac_file: &Path) -> Result<(), EmbedError> {
    let cannot_write = |cause: String| EmbedError::CannotWriteMetadata {
        path: flac_file.to_path_buf(),
        cause,
    };

    panic::catch_unwind(AssertUnwindSafe(|| {
        flac.save_to_path(flac_file, WriteOptions::default())
    }))
    .map_err(|payload| cannot_write(panic_message(payload.as_ref())))?
    .map_err(|error| cannot_write(error.to_string()))
}

/// Replaces all picture blocks of a FLAC file with the cover.
pub fn embed_cover(flac_file: &Path, cover: &CoverImage) -> Result<(), EmbedError> {
    let mut flac = read_flac_file(flac_file)?;

    let removed_pictures = flac.remove_pictures();

    debug!(
        "Removed {} picture block(s) from {:?}",
        removed_pictures.len(),
        flac_file
    );

    let picture = cover.to_front_cover();
    let information = common::picture_information(&picture);

    flac.insert_picture(picture, Some(information))
        .map_err(|error| EmbedError::CannotWriteMetadata {
            path: flac_file.to_path_buf(),
            cause: error.to_string(),
        })?;

    save_flac_file(&flac, flac_file)
}
