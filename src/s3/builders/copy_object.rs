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
use crate::s3::error::ValidationErr;
use crate::s3::header_constants::*;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::CopyObjectResponse;
use crate::s3::types::{Directive, S3Api, S3Request, ToS3Request};
use crate::s3::utils::{check_object_name, url_encode, urlencode_object_key};
use http::Method;
use typed_builder::TypedBuilder;

/// Source object of a server side copy.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CopySource {
    pub bucket: String,
    pub object: String,
    pub version_id: Option<String>,
}

impl CopySource {
    pub fn new(bucket: impl Into<String>, object: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            object: object.into(),
            version_id: None,
        }
    }

    pub fn version_id(mut self, version_id: impl Into<String>) -> Self {
        self.version_id = Some(version_id.into());
        self
    }

    /// Value of the `x-amz-copy-source` header: `bucket/key` with the key
    /// URL-encoded (slashes kept) and an optional `versionId` query.
    pub fn header_value(&self) -> String {
        let mut copy_source = String::with_capacity(self.bucket.len() + self.object.len() + 1);
        copy_source.push_str(&self.bucket);
        copy_source.push('/');
        copy_source.push_str(&urlencode_object_key(&self.object));
        if let Some(v) = &self.version_id {
            copy_source.push_str("?versionId=");
            copy_source.push_str(&url_encode(v));
        }
        copy_source
    }
}

/// Argument builder for the [`CopyObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_CopyObject.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::copy_object`](crate::s3::client::S3Client::copy_object) method.
/// Without an explicit `source`, the destination object is copied onto
/// itself, which is how the metadata of an existing object is rewritten.
#[derive(Clone, Debug, TypedBuilder)]
pub struct CopyObject {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(default, setter(into))]
    extra_headers: Option<Multimap>,
    #[builder(default, setter(into))]
    extra_query_params: Option<Multimap>,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,

    #[builder(default, setter(into))]
    source: Option<CopySource>,
    #[builder(default, setter(into))]
    content_type: Option<String>,
    /// User metadata, sent as `x-amz-meta-<key>` headers
    #[builder(default, setter(into))]
    user_metadata: Option<Multimap>,
    #[builder(default, setter(into))]
    metadata_directive: Option<Directive>,
}

/// Builder type alias for [`CopyObject`].
///
/// Constructed via [`CopyObject::builder()`](CopyObject::builder) and used to build a [`CopyObject`] instance.
pub type CopyObjectBldr =
    CopyObjectBuilder<((S3Client,), (), (), (String,), (String,), (), (), (), ())>;

impl S3Api for CopyObject {
    type S3Response = CopyObjectResponse;
}

impl ToS3Request for CopyObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_object_name(&self.object)?;
        if let Some(source) = &self.source {
            check_object_name(&source.object)?;
        }

        let source = self
            .source
            .unwrap_or_else(|| CopySource::new(&self.bucket, &self.object));

        let replace = self.metadata_directive == Some(Directive::Replace);
        if !replace && (self.content_type.is_some() || self.user_metadata.is_some()) {
            return Err(ValidationErr::InvalidCopyDirective(
                "content type and user metadata are only applied with the REPLACE metadata directive".into(),
            ));
        }
        if !replace
            && source.version_id.is_none()
            && source.bucket == self.bucket
            && source.object == self.object
        {
            return Err(ValidationErr::InvalidCopyDirective(
                "copying an object onto itself requires the REPLACE metadata directive".into(),
            ));
        }

        let mut headers: Multimap = self.extra_headers.unwrap_or_default();
        headers.add(X_AMZ_COPY_SOURCE, source.header_value());
        if let Some(v) = self.metadata_directive {
            headers.add(X_AMZ_METADATA_DIRECTIVE, v.to_string());
        }
        if let Some(v) = self.content_type {
            headers.add(CONTENT_TYPE, v);
        }
        if let Some(metadata) = self.user_metadata {
            for (key, values) in metadata.iter_all() {
                let key = if key.to_lowercase().starts_with(X_AMZ_META_PREFIX) {
                    key.clone()
                } else {
                    format!("{X_AMZ_META_PREFIX}{key}")
                };
                for value in values {
                    headers.add(key.clone(), value.clone());
                }
            }
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::PUT)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(self.extra_query_params.unwrap_or_default())
            .headers(headers)
            .build())
    }
}
