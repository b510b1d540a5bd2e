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

use crate::s3::error::{Error, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::response::header_text;
use crate::s3::types::{FromS3Response, S3Request};
use crate::s3::utils::{UtcTime, from_http_header_value};
use async_trait::async_trait;
use http::HeaderMap;
use std::collections::HashMap;
use std::mem;

#[derive(Debug)]
/// Response from the [`stat_object`](crate::s3::client::S3Client::stat_object) API call,
/// providing metadata about an object stored in S3 or a compatible service.
pub struct StatObjectResponse {
    /// HTTP headers returned by the server, containing metadata such as `Content-Type`, `ETag`, etc.
    pub headers: HeaderMap,

    /// The region the request was signed for.
    pub region: String,

    /// Name of the bucket containing the object.
    pub bucket: String,

    /// Key (path) identifying the object within the bucket.
    pub object: String,

    /// Size of the object in bytes.
    pub size: u64,

    /// Entity tag representing a specific version of the object.
    pub etag: String,

    /// Media type stored with the object.
    pub content_type: Option<String>,

    /// Version ID of the object, if versioning is enabled.
    pub version_id: Option<String>,

    /// Timestamp indicating when the object was last modified.
    pub last_modified: Option<UtcTime>,

    /// Custom user-defined metadata associated with the object.
    pub user_metadata: HashMap<String, String>,
}

#[async_trait]
impl FromS3Response for StatObjectResponse {
    async fn from_s3response(
        req: S3Request,
        resp: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error> {
        let mut resp = resp?;

        let headers: HeaderMap = mem::take(resp.headers_mut());

        let size: u64 = match header_text(&headers, CONTENT_LENGTH)? {
            Some(v) => v.parse::<u64>().map_err(ValidationErr::from)?,
            None => 0_u64,
        };

        let etag: String = header_text(&headers, ETAG)?
            .unwrap_or_default()
            .trim_matches('"')
            .to_string();

        let content_type: Option<String> = header_text(&headers, CONTENT_TYPE)?.map(String::from);
        let version_id: Option<String> = header_text(&headers, X_AMZ_VERSION_ID)?.map(String::from);

        let last_modified: Option<UtcTime> = match header_text(&headers, LAST_MODIFIED)? {
            Some(v) => Some(from_http_header_value(v).map_err(ValidationErr::from)?),
            None => None,
        };

        let mut user_metadata: HashMap<String, String> = HashMap::new();
        for (key, value) in headers.iter() {
            if let Some(v) = key.as_str().strip_prefix(X_AMZ_META_PREFIX) {
                user_metadata.insert(
                    v.to_string(),
                    value.to_str().map_err(ValidationErr::from)?.to_string(),
                );
            }
        }

        Ok(Self {
            headers,
            region: req.inner_region,
            bucket: req.bucket.unwrap_or_default(),
            object: req.object.unwrap_or_default(),
            size,
            etag,
            content_type,
            version_id,
            last_modified,
            user_metadata,
        })
    }
}
