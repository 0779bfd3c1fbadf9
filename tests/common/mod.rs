// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::{
    fs::{self, File},
    path::{Path, PathBuf},
};

use anyhow::Result;
use lofty::{
    config::{ParseOptions, WriteOptions},
    file::AudioFile,
    flac::FlacFile,
    id3::v2::Id3v2Tag,
    mpeg::MpegFile,
    ogg::OggPictureStorage,
    picture::{MimeType, Picture, PictureType},
    tag::{Accessor, Tag, TagExt},
};
use tempfile::{tempdir, TempDir};
use test_context::TestContext;

/// Audio data that follows the metadata of generated FLAC files.
pub const FLAC_AUDIO_DATA: &[u8] = &[0xFF, 0xF8, 0x69, 0x08, 0x00, 0x00, 0x00, 0x00];

pub const COVER_DATA: &[u8] = &[0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, b'J', b'F', b'I', b'F'];

pub const ANOTHER_COVER_DATA: &[u8] = &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

#[allow(dead_code)]
pub const TITLE: &str = "keep me";

const BLOCK_ID_STREAMINFO: u8 = 0;
const BLOCK_ID_VORBIS_COMMENT: u8 = 4;
const BLOCK_ID_PICTURE: u8 = 6;

fn metadata_block(block_type: u8, is_last: bool, content: &[u8]) -> Vec<u8> {
    let mut block = vec![if is_last { 0x80 | block_type } else { block_type }];

    block.extend_from_slice(&(content.len() as u32).to_be_bytes()[1..]);
    block.extend_from_slice(content);

    block
}

fn stream_info() -> Vec<u8> {
    const SAMPLE_RATE: u64 = 44_100;
    const CHANNELS: u64 = 2;
    const BITS_PER_SAMPLE: u64 = 16;

    let mut content = Vec::with_capacity(34);

    content.extend_from_slice(&4096u16.to_be_bytes());
    content.extend_from_slice(&4096u16.to_be_bytes());
    content.extend_from_slice(&[0; 3]);
    content.extend_from_slice(&[0; 3]);

    let packed = (SAMPLE_RATE << 44) | ((CHANNELS - 1) << 41) | ((BITS_PER_SAMPLE - 1) << 36);
    content.extend_from_slice(&packed.to_be_bytes());

    // MD5 signature
    content.extend_from_slice(&[0; 16]);

    content
}

fn vorbis_comment(comments: &[&str]) -> Vec<u8> {
    const VENDOR: &str = "reference libFLAC 1.4.3 20230623";

    let mut content = (VENDOR.len() as u32).to_le_bytes().to_vec();

    content.extend_from_slice(VENDOR.as_bytes());
    content.extend_from_slice(&(comments.len() as u32).to_le_bytes());

    for comment in comments {
        content.extend_from_slice(&(comment.len() as u32).to_le_bytes());
        content.extend_from_slice(comment.as_bytes());
    }

    content
}

fn picture(picture_type: u32, mime_type: &str, description: &str, data: &[u8]) -> Vec<u8> {
    let mut content = picture_type.to_be_bytes().to_vec();

    content.extend_from_slice(&(mime_type.len() as u32).to_be_bytes());
    content.extend_from_slice(mime_type.as_bytes());
    content.extend_from_slice(&(description.len() as u32).to_be_bytes());
    content.extend_from_slice(description.as_bytes());

    // Width, height, color depth and number of colors
    content.extend_from_slice(&[0; 16]);

    content.extend_from_slice(&(data.len() as u32).to_be_bytes());
    content.extend_from_slice(data);

    content
}

fn flac_file_bytes(blocks: &[(u8, Vec<u8>)]) -> Vec<u8> {
    let mut bytes = b"fLaC".to_vec();

    for (index, (block_type, content)) in blocks.iter().enumerate() {
        bytes.extend(metadata_block(
            *block_type,
            index == blocks.len() - 1,
            content,
        ));
    }

    bytes.extend_from_slice(FLAC_AUDIO_DATA);

    bytes
}

/// A FLAC file that has STREAMINFO and VORBIS_COMMENT blocks.
pub fn flac_bytes() -> Vec<u8> {
    let title = format!("TITLE={TITLE}");

    flac_file_bytes(&[
        (BLOCK_ID_STREAMINFO, stream_info()),
        (BLOCK_ID_VORBIS_COMMENT, vorbis_comment(&[&title])),
    ])
}

#[allow(dead_code)]
/// A FLAC file whose only metadata block is STREAMINFO.
pub fn stream_info_only_flac_bytes() -> Vec<u8> {
    flac_file_bytes(&[(BLOCK_ID_STREAMINFO, stream_info())])
}

#[allow(dead_code)]
/// A FLAC file that has a front cover, a back cover and a title.
pub fn flac_bytes_with_pictures() -> Vec<u8> {
    const FRONT_COVER: u32 = 3;
    const BACK_COVER: u32 = 4;

    let title = format!("TITLE={TITLE}");

    flac_file_bytes(&[
        (BLOCK_ID_STREAMINFO, stream_info()),
        (BLOCK_ID_VORBIS_COMMENT, vorbis_comment(&[&title])),
        (
            BLOCK_ID_PICTURE,
            picture(FRONT_COVER, "image/jpeg", "old front", COVER_DATA),
        ),
        (
            BLOCK_ID_PICTURE,
            picture(BACK_COVER, "image/png", "old back", ANOTHER_COVER_DATA),
        ),
    ])
}

/// MPEG-1 Layer III frames, 128 kbps, 44.1 kHz, without tags.
pub fn mp3_bytes() -> Vec<u8> {
    const FRAME_HEADER: [u8; 4] = [0xFF, 0xFB, 0x90, 0x00];
    const FRAME_LENGTH: usize = 417;
    const FRAME_COUNT: usize = 8;

    let mut bytes = Vec::with_capacity(FRAME_LENGTH * FRAME_COUNT);

    for _ in 0..FRAME_COUNT {
        bytes.extend_from_slice(&FRAME_HEADER);
        bytes.resize(bytes.len() + FRAME_LENGTH - FRAME_HEADER.len(), 0);
    }

    bytes
}

/// A temporary directory that music files and covers are put in.
pub struct MusicDirectory {
    pub directory: TempDir,
}

impl TestContext for MusicDirectory {
    fn setup() -> Self {
        MusicDirectory {
            directory: tempdir().unwrap(),
        }
    }
}

#[allow(dead_code)]
impl MusicDirectory {
    pub fn path(&self, filename: &str) -> PathBuf {
        self.directory.path().join(filename)
    }

    pub fn write(&self, filename: &str, data: &[u8]) -> PathBuf {
        let path = self.path(filename);

        fs::write(&path, data).unwrap();

        path
    }

    pub fn write_flac(&self, filename: &str) -> PathBuf {
        self.write(filename, &flac_bytes())
    }

    pub fn write_mp3(&self, filename: &str) -> PathBuf {
        self.write(filename, &mp3_bytes())
    }

    pub fn write_cover(&self, filename: &str) -> PathBuf {
        self.write(filename, COVER_DATA)
    }

    /// Writes an MP3 file that has a front cover, a back cover and a title.
    pub fn write_mp3_with_pictures(&self, filename: &str) -> PathBuf {
        let path = self.write_mp3(filename);

        let mut tag = Id3v2Tag::default();

        tag.set_title(TITLE.to_owned());
        tag.insert_picture(Picture::new_unchecked(
            PictureType::CoverFront,
            Some(MimeType::Jpeg),
            Some("old front".to_owned()),
            COVER_DATA.to_vec(),
        ));
        tag.insert_picture(Picture::new_unchecked(
            PictureType::CoverBack,
            Some(MimeType::Png),
            Some("old back".to_owned()),
            ANOTHER_COVER_DATA.to_vec(),
        ));
        tag.save_to_path(&path, WriteOptions::default()).unwrap();

        path
    }

    /// Writes a list of base paths, one per line.
    pub fn write_input_list(&self, lines: &[String]) -> PathBuf {
        let mut content = lines.join("\n");

        content.push('\n');

        self.write("input.txt", content.as_bytes())
    }
}

fn parse_options() -> ParseOptions {
    ParseOptions::new().read_properties(false)
}

#[allow(dead_code)]
pub fn flac_pictures(path: &Path) -> Result<Vec<Picture>> {
    let mut file = File::open(path)?;
    let flac = FlacFile::read_from(&mut file, parse_options())?;

    Ok(flac
        .pictures()
        .iter()
        .map(|(picture, _)| picture.clone())
        .collect())
}

#[allow(dead_code)]
pub fn flac_title(path: &Path) -> Result<Option<String>> {
    let mut file = File::open(path)?;
    let flac = FlacFile::read_from(&mut file, parse_options())?;

    Ok(flac
        .vorbis_comments()
        .and_then(|comments| comments.get("TITLE"))
        .map(|title| title.to_owned()))
}

#[allow(dead_code)]
fn read_mp3_tag(path: &Path) -> Result<Option<Tag>> {
    let mut file = File::open(path)?;
    let mut mpeg = MpegFile::read_from(&mut file, parse_options())?;

    Ok(mpeg.remove_id3v2().map(Tag::from))
}

#[allow(dead_code)]
pub fn mp3_pictures(path: &Path) -> Result<Vec<Picture>> {
    Ok(read_mp3_tag(path)?
        .map(|tag| tag.pictures().to_vec())
        .unwrap_or_default())
}

#[allow(dead_code)]
pub fn mp3_title(path: &Path) -> Result<Option<String>> {
    Ok(read_mp3_tag(path)?.and_then(|tag| tag.title().map(|title| title.into_owned())))
}
