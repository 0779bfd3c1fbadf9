// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Embedding covers into MP3 files.

use std::{fs::File, path::Path};

use lofty::{
    config::{ParseOptions, WriteOptions},
    file::AudioFile,
    id3::v2::Id3v2Tag,
    mpeg::MpegFile,
    tag::TagExt,
};
use log::debug;

use crate::embed_error::EmbedError;

use super::common::{self, CoverImage};

/// The ID3v2 frame of attached pictures.
const ATTACHED_PICTURE_FRAME_ID: &str = "APIC";

/// Whether a file is an MP3 file.
pub fn is_mp3<P: AsRef<Path>>(file: P) -> bool {
    common::has_extension("mp3", file)
}

/// Reads the ID3v2 tag of an MP3 file.
///
/// An empty tag is returned when the file has no ID3v2 tag.
fn read_id3v2_tag(mp3_file: &Path) -> Result<Id3v2Tag, EmbedError> {
    let cannot_read = |cause: String| EmbedError::CannotReadMetadata {
        path: mp3_file.to_path_buf(),
        cause,
    };

    let mut file = File::open(mp3_file).map_err(|error| cannot_read(error.to_string()))?;
    let mut mpeg = MpegFile::read_from(&mut file, ParseOptions::new())
        .map_err(|error| cannot_read(error.to_string()))?;

    Ok(mpeg.remove_id3v2().unwrap_or_default())
}

/// Replaces all attached pictures of an MP3 file with the cover.
///
/// Every APIC frame is removed, not only the front cover, so the file has exactly one picture.
pub fn embed_cover(mp3_file: &Path, cover: &CoverImage) -> Result<(), EmbedError> {
    let mut tag = read_id3v2_tag(mp3_file)?;

    tag.retain(|frame| frame.id_str() != ATTACHED_PICTURE_FRAME_ID);
    tag.insert_picture(cover.to_front_cover());

    debug!("Writes the ID3v2 tag of {:?}", mp3_file);

    tag.save_to_path(mp3_file, WriteOptions::default())
        .map_err(|error| EmbedError::CannotWriteMetadata {
            path: mp3_file.to_path_buf(),
            cause: error.to_string(),
        })
}
