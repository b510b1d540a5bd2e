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

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use s3_setct::config::StoreConfig;
use s3_setct::s3::client::{S3Client, S3ClientBuilder, WaiterConfig};
use s3_setct::s3::creds::StaticProvider;
use s3_setct::s3::http::BaseUrl;
use std::time::Duration;

pub const BUCKET: &str = "books";
pub const OBJECT: &str = "novel.epub";
pub const OBJECT_PATH: &str = "/books/novel.epub";
pub const CONTENT_TYPE: &str = "application/epub+zip";
pub const REGION: &str = "us-west-002";
pub const ACCESS_KEY_ID: &str = "keyid";
pub const SECRET_KEY: &str = "secretkey";

pub const COPY_RESULT: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
    <CopyObjectResult xmlns=\"http://s3.amazonaws.com/doc/2006-03-01/\">\
    <LastModified>2024-05-06T07:08:09.000Z</LastModified>\
    <ETag>&quot;9b2cf535f27731c974343645a3985328&quot;</ETag>\
    </CopyObjectResult>";

/// Waiter policy that keeps tests fast.
pub fn quick_waiter(max_attempts: u32) -> WaiterConfig {
    WaiterConfig::default()
        .delay(Duration::from_millis(10))
        .max_attempts(max_attempts)
}

pub fn store_config(endpoint_uri: &str) -> StoreConfig {
    StoreConfig {
        bucket: BUCKET.into(),
        content_type: CONTENT_TYPE.into(),
        endpoint_uri: endpoint_uri.into(),
        region: REGION.into(),
        access_key_id: ACCESS_KEY_ID.into(),
        secret_key: SECRET_KEY.into(),
    }
}

/// Matches a SigV4 authorization header of the test credentials.
pub fn signed_by_test_credentials() -> Matcher {
    Matcher::Regex(format!(
        r"^AWS4-HMAC-SHA256 Credential={ACCESS_KEY_ID}/\d{{8}}/{REGION}/s3/aws4_request, SignedHeaders=[a-z0-9;-]+, Signature=[0-9a-f]{{64}}$"
    ))
}

/// Simulated S3 endpoint and a client pointed at it.
pub struct TestContext {
    pub server: ServerGuard,
    pub client: S3Client,
}

impl TestContext {
    pub async fn new() -> Self {
        Self::with_waiter(quick_waiter(3)).await
    }

    pub async fn with_waiter(waiter_config: WaiterConfig) -> Self {
        let server = Server::new_async().await;
        let base_url: BaseUrl = server.url().parse().unwrap();
        let client = S3ClientBuilder::new(base_url)
            .provider(Some(StaticProvider::new(ACCESS_KEY_ID, SECRET_KEY)))
            .region(REGION)
            .force_path_style(true)
            .waiter_config(waiter_config)
            .build()
            .unwrap();
        Self { server, client }
    }

    /// Expects the in-place copy that sets [`CONTENT_TYPE`] and answers it.
    pub async fn mock_copy(&mut self, hits: usize) -> Mock {
        self.server
            .mock("PUT", OBJECT_PATH)
            .match_header("x-amz-copy-source", "books/novel.epub")
            .match_header("x-amz-metadata-directive", "REPLACE")
            .match_header("content-type", CONTENT_TYPE)
            .match_header("authorization", signed_by_test_credentials())
            .with_status(200)
            .with_header("content-type", "application/xml")
            .with_body(COPY_RESULT)
            .expect(hits)
            .create_async()
            .await
    }

    /// Answers HeadObject with `status`.
    pub async fn mock_head(&mut self, status: usize, hits: usize) -> Mock {
        self.server
            .mock("HEAD", OBJECT_PATH)
            .with_status(status)
            .with_header("content-type", CONTENT_TYPE)
            .with_header("etag", "\"9b2cf535f27731c974343645a3985328\"")
            .with_header("last-modified", "Mon, 06 May 2024 07:08:09 GMT")
            .expect(hits)
            .create_async()
            .await
    }

    /// Answers the copy with an S3 XML error document.
    pub async fn mock_copy_error(&mut self, status: usize, code: &str) -> Mock {
        self.server
            .mock("PUT", OBJECT_PATH)
            .with_status(status)
            .with_header("content-type", "application/xml")
            .with_header("x-amz-request-id", "4442587FB7D0A2F9")
            .with_body(format!(
                "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
                <Error><Code>{code}</Code><Message>simulated failure</Message>\
                <Resource>{OBJECT_PATH}</Resource><RequestId>4442587FB7D0A2F9</RequestId>\
                <HostId>host</HostId></Error>"
            ))
            .create_async()
            .await
    }
}
