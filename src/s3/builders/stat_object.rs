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
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::response::StatObjectResponse;
use crate::s3::types::{S3Api, S3Request, ToS3Request};
use crate::s3::utils::check_object_name;
use http::Method;
use typed_builder::TypedBuilder;

/// Argument builder for the [`HeadObject`](https://docs.aws.amazon.com/AmazonS3/latest/API/API_HeadObject.html) S3 API operation.
///
/// This struct constructs the parameters required for the [`S3Client::stat_object`](crate::s3::client::S3Client::stat_object) method.
#[derive(Clone, Debug, TypedBuilder)]
pub struct StatObject {
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
    version_id: Option<String>,
}

/// Builder type alias for [`StatObject`].
///
/// Constructed via [`StatObject::builder()`](StatObject::builder) and used to build a [`StatObject`] instance.
pub type StatObjectBldr = StatObjectBuilder<((S3Client,), (), (), (String,), (String,), ())>;

impl S3Api for StatObject {
    type S3Response = StatObjectResponse;
}

impl ToS3Request for StatObject {
    fn to_s3request(self) -> Result<S3Request, ValidationErr> {
        check_object_name(&self.object)?;

        let mut query_params: Multimap = self.extra_query_params.unwrap_or_default();
        if let Some(v) = self.version_id {
            query_params.add("versionId", v);
        }

        Ok(S3Request::builder()
            .client(self.client)
            .method(Method::HEAD)
            .bucket(self.bucket)
            .object(self.object)
            .query_params(query_params)
            .headers(self.extra_headers.unwrap_or_default())
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;
    use crate::s3::http::BaseUrl;

    fn client() -> S3Client {
        let base_url: BaseUrl = "http://localhost:9000".parse().unwrap();
        S3Client::new(base_url, "us-east-1", None::<StaticProvider>).unwrap()
    }

    #[test]
    fn test_empty_object_name_is_rejected() {
        let r = StatObject::builder()
            .client(client())
            .bucket("books")
            .object("")
            .build()
            .to_s3request();
        assert!(matches!(r, Err(ValidationErr::InvalidObjectName(_))));
    }

    #[test]
    fn test_stat_object_request() {
        let req = StatObject::builder()
            .client(client())
            .bucket("books")
            .object("novel.epub")
            .version_id("3HL4kqtJ".to_string())
            .build()
            .to_s3request()
            .unwrap();

        assert_eq!(req.method(), &Method::HEAD);
        assert_eq!(req.object.as_deref(), Some("novel.epub"));
        assert_eq!(
            req.query_params.get("versionId").map(String::as_str),
            Some("3HL4kqtJ")
        );
    }
}
