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

//! Capture of the object key from standard input

use crate::error::AppError;
use std::fmt;
use std::io::{self, BufRead, BufReader, IsTerminal, Read};

/// Most bytes accepted from standard input, line terminators excluded.
pub const MAX_INPUT_BYTES: usize = 10 * 1024 * 1024;

const READ_BUFFER_SIZE: usize = 64 * 1024;

/// Reads the whole of standard input, refusing to wait on a terminal.
pub fn read_stdin() -> Result<Vec<u8>, AppError> {
    let stdin = io::stdin();
    let is_terminal = stdin.is_terminal();
    read_input(
        is_terminal,
        BufReader::with_capacity(READ_BUFFER_SIZE, stdin.lock()),
    )
}

/// Reads `reader` up to [`MAX_INPUT_BYTES`]. Nothing is read when it is
/// attached to a terminal.
pub fn read_input<R: BufRead>(is_terminal: bool, reader: R) -> Result<Vec<u8>, AppError> {
    if is_terminal {
        return Err(AppError::NoInputProvided);
    }

    let input = read_lines(reader, MAX_INPUT_BYTES).map_err(AppError::StdinReadError)?;
    log::debug!("read {} bytes from stdin", input.len());
    Ok(input)
}

/// Concatenates every line of `reader` with its terminator (`\n` or `\r\n`)
/// removed. Fails once the result would grow past `limit` bytes.
pub fn read_lines<R: BufRead>(mut reader: R, limit: usize) -> io::Result<Vec<u8>> {
    let mut input: Vec<u8> = Vec::new();
    let mut line: Vec<u8> = Vec::new();

    loop {
        line.clear();
        // room for the remaining budget plus a "\r\n" terminator
        let budget = (limit - input.len() + 2) as u64;
        if reader.by_ref().take(budget).read_until(b'\n', &mut line)? == 0 {
            break;
        }

        if line.last() == Some(&b'\n') {
            line.pop();
        }
        if line.last() == Some(&b'\r') {
            line.pop();
        }

        if input.len() + line.len() > limit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                format!("input exceeds the limit of {limit} bytes"),
            ));
        }
        input.extend_from_slice(&line);
    }

    Ok(input)
}

/// Key of the object to update, as given on standard input.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ObjectKey(String);

impl ObjectKey {
    /// Decodes `input` (invalid UTF-8 is replaced) and trims surrounding
    /// newlines and spaces. An empty key is kept as is.
    pub fn from_input(input: &[u8]) -> Self {
        let text = String::from_utf8_lossy(input);
        Self(text.trim_matches(['\n', ' ']).to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ObjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
