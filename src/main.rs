// SPDX-FileCopyrightText: 2024 Keita Kita <maoutwo@gmail.com>
//
// SPDX-License-Identifier: MIT

use std::process::exit;

use clap::Parser;

use edit_artwork::edit_artwork::{edit_artwork, EditArtworkError, Setting};
use env_logger::Env;
use log::error;

fn initialize_logging() {
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .format_target(false)
        .format_timestamp(None)
        .init();
}

fn main() {
    initialize_logging();

    let result = edit_artwork(&Setting::parse());

    if result.is_err() {
        match result.unwrap_err() {
            EditArtworkError::PreferenceFileCannotBeUsed(error) => {
                error!("The preference file cannot be used. Detail: {error}");
            }
            EditArtworkError::NoGrantedRoot => {
                error!("No root folder has been granted. Pass --grant-root once to record one.");
            }
            EditArtworkError::ArtworkCannotBeRead(path, error) => {
                error!("{path:?} cannot be read. Detail: {error}");
            }
            EditArtworkError::ArtworkFormatIsNotSupported(path) => {
                error!("The format of {path:?} is not supported.");
            }
            EditArtworkError::EditingIsFailed(error) => {
                error!("Editing is failed. Detail: {error}");
            }
        }

        exit(1);
    }
}
