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

//! Error definitions for S3 operations

use crate::s3::s3_error_response::S3ErrorResponse;
use thiserror::Error;

/// Errors raised while building a request or decoding a response locally,
/// before or after the server was involved.
#[derive(Error, Debug)]
pub enum ValidationErr {
    #[error("XML parse error: {0}")]
    XmlParseError(#[from] xmltree::ParseError),

    #[error("XML error: {message}")]
    XmlError { message: String },

    #[error("invalid URI: {0}")]
    InvalidUrl(#[from] http::uri::InvalidUri),

    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("invalid object name: {0}")]
    InvalidObjectName(String),

    #[error("time parse error: {0}")]
    TimeParseError(#[from] chrono::ParseError),

    #[error("header value is not visible ASCII: {0}")]
    StrError(#[from] http::header::ToStrError),

    #[error("integer parse error: {0}")]
    IntError(#[from] std::num::ParseIntError),

    #[error("invalid region '{0}'")]
    InvalidRegion(String),

    #[error("invalid copy directive: {0}")]
    InvalidCopyDirective(String),
}

impl ValidationErr {
    pub fn xml_error(message: impl Into<String>) -> Self {
        Self::XmlError {
            message: message.into(),
        }
    }
}

/// Errors raised by the transport or by a server that did not answer with a
/// decodable S3 error.
#[derive(Error, Debug)]
pub enum NetworkError {
    #[error("HTTP error: {0}")]
    ReqwestError(#[from] reqwest::Error),

    #[error("server failed with HTTP status code {0}")]
    ServerError(u16),

    #[error("object {bucket}/{object} still does not exist after {attempts} attempts")]
    WaitTimeout {
        bucket: String,
        object: String,
        attempts: u32,
    },
}

/// Errors reported by the S3 server itself.
#[derive(Error, Debug)]
pub enum S3ServerError {
    #[error("{0}")]
    S3Error(Box<S3ErrorResponse>),

    #[error(
        "invalid server response received; {message}; HTTP status code: {http_status_code}; content-type: {content_type}"
    )]
    InvalidServerResponse {
        message: String,
        http_status_code: u16,
        content_type: String,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    S3Server(#[from] S3ServerError),

    #[error(transparent)]
    Network(#[from] NetworkError),

    #[error(transparent)]
    Validation(#[from] ValidationErr),
}

impl Error {
    /// Returns the decoded S3 error response, if the server sent one.
    pub fn s3_error(&self) -> Option<&S3ErrorResponse> {
        match self {
            Error::S3Server(S3ServerError::S3Error(e)) => Some(e),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Network(NetworkError::ReqwestError(err))
    }
}

impl From<S3ErrorResponse> for Error {
    fn from(err: S3ErrorResponse) -> Self {
        Error::S3Server(S3ServerError::S3Error(Box::new(err)))
    }
}
