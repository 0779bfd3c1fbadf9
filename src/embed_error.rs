// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::path::PathBuf;

use thiserror::Error;

/// Error about embedding a cover into a music file.
///
/// These errors are recoverable. They fail one music file or one entry of the
/// input list, but the batch continues.
#[derive(Error, Debug)]
pub enum EmbedError {
    #[error("Unsupported file format: {path}")]
    UnsupportedFormat { path: PathBuf },

    #[error("Cover image {path} could not be read: {error}")]
    CannotReadCover {
        path: PathBuf,
        error: std::io::Error,
    },

    #[error("Metadata of {path} could not be read: {cause}")]
    CannotReadMetadata { path: PathBuf, cause: String },

    #[error("Metadata of {path} could not be written: {cause}")]
    CannotWriteMetadata { path: PathBuf, cause: String },
}
