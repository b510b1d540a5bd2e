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

use crate::s3::client::S3Client;
use crate::s3::error::Error;
use crate::s3::multimap_ext::Multimap;
use bytes::Bytes;
use http::Method;
use typed_builder::TypedBuilder;

/// A fully described S3 request, ready to be signed and sent by the client.
#[derive(Clone, Debug, TypedBuilder)]
pub struct S3Request {
    #[builder(!default)] // force required
    pub(crate) client: S3Client,

    #[builder(!default)] // force required
    method: Method,

    #[builder(default, setter(into))]
    pub(crate) bucket: Option<String>,

    #[builder(default, setter(into))]
    pub(crate) object: Option<String>,

    #[builder(default)]
    pub(crate) query_params: Multimap,

    #[builder(default)]
    headers: Multimap,

    #[builder(default, setter(into))]
    body: Option<Bytes>,

    /// region used to sign the request, set by [`S3Request::execute`]
    #[builder(default, setter(skip))]
    pub(crate) inner_region: String,
}

impl S3Request {
    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn headers(&self) -> &Multimap {
        &self.headers
    }

    /// Execute the request, returning the response. Only used in [`S3Api::send()`](crate::s3::types::S3Api::send)
    pub async fn execute(&mut self) -> Result<reqwest::Response, Error> {
        self.inner_region = self.client.region().to_string();

        self.client
            .execute(
                self.method.clone(),
                &self.inner_region,
                &mut self.headers,
                &self.query_params,
                self.bucket.as_deref(),
                self.object.as_deref(),
                self.body.clone(),
            )
            .await
    }
}
