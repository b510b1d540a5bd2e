// s3-setct: set the content type of an object in S3 compatible storage
// Copyright 2026 The s3-setct Authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Failures of the tool, each rendered as the line shown to the user

use crate::help::HELP_TEXT;
use crate::s3::error::Error as S3Error;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("One or more environment variables not set")]
    MissingConfiguration,

    #[error("Error: Expected stdin")]
    NoInputProvided,

    #[error("{0}")]
    StdinReadError(#[source] io::Error),

    #[error("Error: {0}")]
    ClientSetup(#[source] S3Error),

    #[error("Failed to initiate update content type {bucket}/{key} -- {content_type}, {source}")]
    CopyRequestFailed {
        bucket: String,
        key: String,
        content_type: String,
        source: S3Error,
    },

    #[error("Failed to complete update content type {bucket}/{key} -- {content_type}, {source}")]
    ExistenceConfirmationFailed {
        bucket: String,
        key: String,
        content_type: String,
        source: S3Error,
    },
}

impl AppError {
    /// Whether the usage text accompanies this error.
    pub fn shows_help(&self) -> bool {
        matches!(
            self,
            AppError::MissingConfiguration | AppError::NoInputProvided
        )
    }

    /// Writes the diagnostic, with the usage text where it applies: before
    /// the message for configuration errors, after it for missing input.
    pub fn report<W: Write>(&self, out: &mut W) -> io::Result<()> {
        match self {
            AppError::MissingConfiguration => {
                out.write_all(HELP_TEXT.as_bytes())?;
                writeln!(out, "{self}")
            }
            AppError::NoInputProvided => {
                writeln!(out, "{self}")?;
                out.write_all(HELP_TEXT.as_bytes())
            }
            _ => writeln!(out, "{self}"),
        }
    }
}
