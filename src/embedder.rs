// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Embeds cover images into the metadata of music files.

mod common;
mod flac;
mod mp3;

use std::path::Path;

use log::debug;

use crate::embed_error::EmbedError;

pub use self::common::{CoverImage, FRONT_COVER_DESCRIPTION};

/// Formats of music files that are known by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioFormat {
    Flac,
    Mp3,
    Unsupported,
}

impl AudioFormat {
    /// The format of a file by its extension, ignoring case.
    pub fn of<P: AsRef<Path>>(file: P) -> Self {
        let file = file.as_ref();

        if flac::is_flac(file) {
            AudioFormat::Flac
        } else if mp3::is_mp3(file) {
            AudioFormat::Mp3
        } else {
            AudioFormat::Unsupported
        }
    }
}

/// Writes a cover image into a music file.
#[cfg_attr(test, mockall::automock)]
pub trait CoverEmbedder {
    /// Replaces all embedded pictures of `audio_file` with `cover`.
    ///
    /// The music file is rewritten in place. The cover file is not touched.
    fn embed(&self, audio_file: &Path, cover: &CoverImage) -> Result<(), EmbedError>;
}

/// Embeds covers into FLAC and MP3 files.
pub struct Embedders;

impl CoverEmbedder for Embedders {
    fn embed(&self, audio_file: &Path, cover: &CoverImage) -> Result<(), EmbedError> {
        let format = AudioFormat::of(audio_file);

        debug!("Format of {:?}: {:?}", audio_file, format);

        match format {
            AudioFormat::Flac => flac::embed_cover(audio_file, cover),
            AudioFormat::Mp3 => mp3::embed_cover(audio_file, cover),
            AudioFormat::Unsupported => Err(EmbedError::UnsupportedFormat {
                path: audio_file.to_path_buf(),
            }),
        }
    }
}
