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

//! Decoding of S3 error responses

use crate::s3::error::ValidationErr;
use crate::s3::utils::{get_text_default, get_text_option};
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::str::FromStr;
use xmltree::Element;

/// Error codes this crate reacts to; anything else is carried verbatim.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum S3ErrorCode {
    #[default]
    NoError,
    PermanentRedirect,
    Redirect,
    BadRequest,
    /// The specified bucket does not exist
    NoSuchBucket,
    /// The specified key does not exist
    NoSuchKey,
    /// The specified method is not allowed against this resource
    MethodNotAllowed,
    ResourceNotFound,
    ResourceConflict,
    AccessDenied,
    SignatureDoesNotMatch,
    InvalidAccessKeyId,

    /// Catch-all for any error code not explicitly defined
    OtherError(String),
}

#[allow(dead_code)]
const ALL_S3_ERROR_CODES: &[S3ErrorCode] = &[
    S3ErrorCode::NoError,
    S3ErrorCode::PermanentRedirect,
    S3ErrorCode::Redirect,
    S3ErrorCode::BadRequest,
    S3ErrorCode::NoSuchBucket,
    S3ErrorCode::NoSuchKey,
    S3ErrorCode::MethodNotAllowed,
    S3ErrorCode::ResourceNotFound,
    S3ErrorCode::ResourceConflict,
    S3ErrorCode::AccessDenied,
    S3ErrorCode::SignatureDoesNotMatch,
    S3ErrorCode::InvalidAccessKeyId,
];

impl FromStr for S3ErrorCode {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_lowercase().as_str() {
            "noerror" => S3ErrorCode::NoError,
            "permanentredirect" => S3ErrorCode::PermanentRedirect,
            "redirect" => S3ErrorCode::Redirect,
            "badrequest" => S3ErrorCode::BadRequest,
            "nosuchbucket" => S3ErrorCode::NoSuchBucket,
            "nosuchkey" => S3ErrorCode::NoSuchKey,
            "methodnotallowed" => S3ErrorCode::MethodNotAllowed,
            "resourcenotfound" => S3ErrorCode::ResourceNotFound,
            "resourceconflict" => S3ErrorCode::ResourceConflict,
            "accessdenied" => S3ErrorCode::AccessDenied,
            "signaturedoesnotmatch" => S3ErrorCode::SignatureDoesNotMatch,
            "invalidaccesskeyid" => S3ErrorCode::InvalidAccessKeyId,
            _ => S3ErrorCode::OtherError(s.to_owned()),
        })
    }
}

impl std::fmt::Display for S3ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            S3ErrorCode::NoError => write!(f, "NoError"),
            S3ErrorCode::PermanentRedirect => write!(f, "PermanentRedirect"),
            S3ErrorCode::Redirect => write!(f, "Redirect"),
            S3ErrorCode::BadRequest => write!(f, "BadRequest"),
            S3ErrorCode::NoSuchBucket => write!(f, "NoSuchBucket"),
            S3ErrorCode::NoSuchKey => write!(f, "NoSuchKey"),
            S3ErrorCode::MethodNotAllowed => write!(f, "MethodNotAllowed"),
            S3ErrorCode::ResourceNotFound => write!(f, "ResourceNotFound"),
            S3ErrorCode::ResourceConflict => write!(f, "ResourceConflict"),
            S3ErrorCode::AccessDenied => write!(f, "AccessDenied"),
            S3ErrorCode::SignatureDoesNotMatch => write!(f, "SignatureDoesNotMatch"),
            S3ErrorCode::InvalidAccessKeyId => write!(f, "InvalidAccessKeyId"),
            S3ErrorCode::OtherError(msg) => write!(f, "{msg}"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct S3ErrorResponse {
    code: S3ErrorCode,
    message: Option<String>,
    headers: HeaderMap,
    resource: String,
    request_id: String,
    host_id: String,
    bucket_name: Option<String>,
    object_name: Option<String>,
    http_status_code: u16,
}

impl S3ErrorResponse {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        headers: HeaderMap,
        code: S3ErrorCode,
        message: Option<String>,
        resource: String,
        request_id: String,
        host_id: String,
        bucket_name: Option<String>,
        object_name: Option<String>,
        http_status_code: u16,
    ) -> Self {
        Self {
            code,
            message,
            headers,
            resource,
            request_id,
            host_id,
            bucket_name,
            object_name,
            http_status_code,
        }
    }

    /// Parses an `<Error>` XML document as sent by S3 compatible servers.
    pub fn new_from_body(
        body: Bytes,
        headers: HeaderMap,
        http_status_code: u16,
    ) -> Result<Self, ValidationErr> {
        let root = Element::parse(body.reader())?;
        let code = get_text_default(&root, "Code");
        Ok(Self {
            headers,
            // parsing S3ErrorCode never fails
            code: S3ErrorCode::from_str(&code).unwrap_or_default(),
            message: get_text_option(&root, "Message"),
            resource: get_text_default(&root, "Resource"),
            request_id: get_text_default(&root, "RequestId"),
            host_id: get_text_default(&root, "HostId"),
            bucket_name: get_text_option(&root, "BucketName"),
            object_name: get_text_option(&root, "Key"),
            http_status_code,
        })
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }
    pub fn code(&self) -> S3ErrorCode {
        self.code.clone()
    }
    pub fn message(&self) -> &Option<String> {
        &self.message
    }
    pub fn resource(&self) -> &str {
        &self.resource
    }
    pub fn request_id(&self) -> &str {
        &self.request_id
    }
    pub fn host_id(&self) -> &str {
        &self.host_id
    }
    pub fn bucket_name(&self) -> &Option<String> {
        &self.bucket_name
    }
    pub fn object_name(&self) -> &Option<String> {
        &self.object_name
    }
    pub fn http_status_code(&self) -> u16 {
        self.http_status_code
    }
}

impl std::fmt::Display for S3ErrorResponse {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "s3 operation failed; code: {}, message: {}, resource: {}, request_id: {}, host_id: {}, bucket_name: {}, object_name: {}, status code: {}",
            self.code,
            self.message.as_deref().unwrap_or_default(),
            self.resource,
            self.request_id,
            self.host_id,
            self.bucket_name.as_deref().unwrap_or_default(),
            self.object_name.as_deref().unwrap_or_default(),
            self.http_status_code,
        )
    }
}

impl std::error::Error for S3ErrorResponse {}
