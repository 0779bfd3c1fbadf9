// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

pub mod batch_processor;
pub mod embed_cover;
pub mod embed_error;
pub mod embedder;
pub mod path_resolver;
pub mod reporter;
