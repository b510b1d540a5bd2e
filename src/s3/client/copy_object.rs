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

use crate::s3::builders::{CopyObject, CopyObjectBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`CopyObject`] request builder to copy an object server side.
    ///
    /// Without a [`CopySource`](crate::s3::builders::CopySource), the object is
    /// copied onto itself. Combined with the `REPLACE` metadata directive this
    /// rewrites the stored metadata, such as the content type, in place.
    ///
    /// To execute the request, call [`CopyObject::send()`](crate::s3::types::S3Api::send),
    /// which returns a [`Result`] containing a [`CopyObjectResponse`](crate::s3::response::CopyObjectResponse).
    ///
    /// # Example
    ///
    /// ```no_run
    /// use s3_setct::s3::client::S3Client;
    /// use s3_setct::s3::creds::StaticProvider;
    /// use s3_setct::s3::http::BaseUrl;
    /// use s3_setct::s3::types::{Directive, S3Api};
    ///
    /// #[tokio::main]
    /// async fn main() {
    ///     let base_url = "http://localhost:9000/".parse::<BaseUrl>().unwrap();
    ///     let static_provider = StaticProvider::new("minioadmin", "minioadmin");
    ///     let client = S3Client::new(base_url, "us-east-1", Some(static_provider)).unwrap();
    ///     let resp = client
    ///         .copy_object("books", "novel.epub")
    ///         .content_type("application/epub+zip".to_string())
    ///         .metadata_directive(Directive::Replace)
    ///         .build()
    ///         .send()
    ///         .await
    ///         .unwrap();
    ///     println!("copied '{}', etag {}", resp.object, resp.etag);
    /// }
    /// ```
    pub fn copy_object<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> CopyObjectBldr {
        CopyObject::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
