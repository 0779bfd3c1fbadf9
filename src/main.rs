// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::process::exit;

use clap::{error::ErrorKind, Parser};

use embed_cover::embed_cover::{embed_cover, EmbedCoverError, Setting};
use env_logger::Env;
use log::error;

fn initialize_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("warn"))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn parse_setting() -> Setting {
    match Setting::try_parse() {
        Ok(setting) => setting,
        Err(error) => match error.kind() {
            ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => error.exit(),
            _ => {
                let _ = error.print();

                exit(1);
            }
        },
    }
}

fn main() {
    initialize_logging();

    let result = embed_cover(&parse_setting());

    if let Err(error) = result {
        match error {
            EmbedCoverError::InputListNotFound(path) => {
                error!("Input file not found: {path:?}");
            }
            EmbedCoverError::InputListCannotBeOpened(path, error) => {
                error!("{path:?} cannot be opened. Detail: {error}");
            }
        }

        exit(1);
    }
}
