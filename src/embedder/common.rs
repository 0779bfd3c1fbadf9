// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Parts shared by the embedders of each format.

use std::{
    fs,
    path::{Path, PathBuf},
};

use lofty::picture::{MimeType, Picture, PictureInformation, PictureType};
use log::{debug, trace};

use crate::embed_error::EmbedError;

/// The description of every embedded cover.
pub const FRONT_COVER_DESCRIPTION: &str = "Front Cover";

pub fn has_extension<P: AsRef<Path>>(extension: &str, file: P) -> bool {
    match file.as_ref().extension() {
        Some(file_extension) => file_extension.eq_ignore_ascii_case(extension),
        None => false,
    }
}

/// Guesses the MIME type of an image from its filename.
///
/// JPEG is assumed when the extension is missing or unknown.
pub fn guess_mime_type<P: AsRef<Path>>(image_file: P) -> MimeType {
    let extension = image_file
        .as_ref()
        .extension()
        .and_then(|extension| extension.to_str())
        .map(|extension| extension.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => MimeType::Png,
        Some("gif") => MimeType::Gif,
        Some("bmp") => MimeType::Bmp,
        Some("tif" | "tiff") => MimeType::Tiff,
        _ => MimeType::Jpeg,
    }
}

/// A cover image read from the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverImage {
    pub path: PathBuf,

    pub mime_type: MimeType,

    pub data: Vec<u8>,
}

impl CoverImage {
    pub fn new<P: AsRef<Path>>(path: P, data: Vec<u8>) -> Self {
        let path = path.as_ref();

        CoverImage {
            path: path.to_path_buf(),
            mime_type: guess_mime_type(path),
            data,
        }
    }

    /// Reads a cover image.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, EmbedError> {
        let path = path.as_ref();

        let data = fs::read(path).map_err(|error| EmbedError::CannotReadCover {
            path: path.to_path_buf(),
            error,
        })?;

        debug!("Read {} bytes from cover image {:?}", data.len(), path);

        Ok(CoverImage::new(path, data))
    }

    /// Creates the front cover picture that is embedded into music files.
    pub fn to_front_cover(&self) -> Picture {
        Picture::new_unchecked(
            PictureType::CoverFront,
            Some(self.mime_type.clone()),
            Some(FRONT_COVER_DESCRIPTION.to_owned()),
            self.data.clone(),
        )
    }
}

/// Dimensions and colors of a picture.
///
/// They are zero when the image cannot be decoded.
pub fn picture_information(picture: &Picture) -> PictureInformation {
    PictureInformation::from_picture(picture).unwrap_or_else(|error| {
        trace!("Picture information is not available: {error}");

        PictureInformation::default()
    })
}
