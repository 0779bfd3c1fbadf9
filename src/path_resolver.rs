// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

//! Locates the files that belong to an extension-less base path.

use std::{
    ffi::OsString,
    path::{Path, PathBuf},
};

/// The extension of cover images written next to converted music files.
pub const COVER_EXTENSION: &str = ".jpg";

/// Extensions of music files, in the order they are checked.
pub const AUDIO_EXTENSIONS: &[&str] = &[".flac", ".mp3"];

/// Paths derived from one base path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// The cover image. It may not exist.
    pub cover: PathBuf,

    /// The music files that exist.
    pub audio_files: Vec<PathBuf>,
}

/// Appends `extension` to the final segment of `base`.
///
/// Unlike [`Path::with_extension`], nothing after the last dot of the filename is replaced, so
/// a title such as `Chocolate（Feat.初音ミク,重音テト）` keeps every character.
pub fn with_appended_extension<P: AsRef<Path>>(base: P, extension: &str) -> PathBuf {
    let base = base.as_ref();

    match base.file_name() {
        Some(filename) => {
            let filename = {
                let mut filename = OsString::from(filename);

                filename.push(extension);

                filename
            };

            match base.parent() {
                Some(parent) => parent.join(filename),
                None => PathBuf::from(filename),
            }
        }
        None => {
            let mut path = base.as_os_str().to_owned();

            path.push(extension);

            PathBuf::from(path)
        }
    }
}

/// The cover image of a base path, whether it exists or not.
pub fn cover_path<P: AsRef<Path>>(base: P) -> PathBuf {
    with_appended_extension(base, COVER_EXTENSION)
}

/// The music files of a base path that exist, FLAC first.
pub fn existing_audio_paths<P: AsRef<Path>>(base: P) -> Vec<PathBuf> {
    AUDIO_EXTENSIONS
        .iter()
        .map(|extension| with_appended_extension(&base, extension))
        .filter(|path| path.is_file())
        .collect()
}

pub fn resolve<P: AsRef<Path>>(base: P) -> ResolvedPaths {
    ResolvedPaths {
        cover: cover_path(&base),
        audio_files: existing_audio_paths(&base),
    }
}
