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

//! Responses for [S3Client](crate::s3::client::S3Client) APIs

mod copy_object;
mod stat_object;

pub use copy_object::CopyObjectResponse;
pub use stat_object::StatObjectResponse;

use crate::s3::error::ValidationErr;
use http::HeaderMap;

/// Returns the value of header `name` as text, if present.
pub(crate) fn header_text<'a>(
    headers: &'a HeaderMap,
    name: &str,
) -> Result<Option<&'a str>, ValidationErr> {
    Ok(headers.get(name).map(|v| v.to_str()).transpose()?)
}
