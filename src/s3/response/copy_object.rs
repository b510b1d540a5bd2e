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

use crate::s3::error::{Error, S3ServerError, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::response::header_text;
use crate::s3::s3_error_response::S3ErrorResponse;
use crate::s3::types::{FromS3Response, S3Request};
use crate::s3::utils::{UtcTime, from_iso8601utc, get_text_option, get_text_result};
use async_trait::async_trait;
use bytes::{Buf, Bytes};
use http::HeaderMap;
use std::mem;
use xmltree::Element;

/// Response of [copy_object()](crate::s3::client::S3Client::copy_object) API
#[derive(Clone, Debug)]
pub struct CopyObjectResponse {
    pub headers: HeaderMap,
    pub region: String,
    pub bucket: String,

    pub object: String,
    pub etag: String,
    pub last_modified: Option<UtcTime>,
    pub version_id: Option<String>,
}

fn invalid_response(
    headers: &HeaderMap,
    status_code: u16,
    message: String,
) -> Result<Error, ValidationErr> {
    let content_type = header_text(headers, CONTENT_TYPE)?
        .unwrap_or_default()
        .to_string();
    Ok(S3ServerError::InvalidServerResponse {
        message,
        http_status_code: status_code,
        content_type,
    }
    .into())
}

#[async_trait]
impl FromS3Response for CopyObjectResponse {
    async fn from_s3response(
        req: S3Request,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;
        let status_code = resp.status().as_u16();

        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await?;

        if body.is_empty() {
            return Err(invalid_response(
                &headers,
                status_code,
                "expected a CopyObjectResult document, but the body is empty".into(),
            )?);
        }

        let root = Element::parse(body.clone().reader()).map_err(ValidationErr::from)?;
        match root.name.as_str() {
            "CopyObjectResult" => {}
            // a copy can fail after the server already answered 200 OK
            "Error" => {
                return Err(S3ErrorResponse::new_from_body(body, headers, status_code)?.into());
            }
            other => {
                return Err(invalid_response(
                    &headers,
                    status_code,
                    format!("expected a CopyObjectResult document, but got <{other}>"),
                )?);
            }
        }

        let etag = get_text_result(&root, "ETag")?
            .trim_matches('"')
            .to_string();
        let last_modified = match get_text_option(&root, "LastModified") {
            Some(v) => Some(from_iso8601utc(&v).map_err(ValidationErr::from)?),
            None => None,
        };

        let version_id: Option<String> = header_text(&headers, X_AMZ_VERSION_ID)?.map(String::from);

        Ok(Self {
            headers,
            region: req.inner_region,
            bucket: req.bucket.unwrap_or_default(),
            object: req.object.unwrap_or_default(),
            etag,
            last_modified,
            version_id,
        })
    }
}
