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

mod common;

use crate::common::{BUCKET, CONTENT_TYPE, OBJECT, OBJECT_PATH, TestContext};
use s3_setct::s3::builders::CopySource;
use s3_setct::s3::error::{Error, S3ServerError, ValidationErr};
use s3_setct::s3::s3_error_response::S3ErrorCode;
use s3_setct::s3::types::{Directive, S3Api};

#[tokio::test]
async fn copy_object_replaces_content_type() {
    let mut ctx = TestContext::new().await;
    let copy = ctx.mock_copy(1).await;

    let resp = ctx
        .client
        .copy_object(BUCKET, OBJECT)
        .content_type(CONTENT_TYPE.to_string())
        .metadata_directive(Directive::Replace)
        .build()
        .send()
        .await
        .unwrap();

    copy.assert_async().await;
    assert_eq!(resp.bucket, BUCKET);
    assert_eq!(resp.object, OBJECT);
    assert_eq!(resp.region, "us-west-002");
    assert_eq!(resp.etag, "9b2cf535f27731c974343645a3985328");
    assert_eq!(
        resp.last_modified.map(|t| t.to_rfc3339()),
        Some("2024-05-06T07:08:09+00:00".to_string())
    );
    assert_eq!(resp.version_id, None);
}

#[tokio::test]
async fn copy_object_encodes_copy_source() {
    let mut ctx = TestContext::new().await;
    let copy = ctx
        .server
        .mock("PUT", "/books/shelf/a%20novel.epub")
        .match_header("x-amz-copy-source", "books/shelf/a%20novel.epub")
        .with_status(200)
        .with_header("content-type", "application/xml")
        .with_body(common::COPY_RESULT)
        .create_async()
        .await;

    let resp = ctx
        .client
        .copy_object(BUCKET, "shelf/a novel.epub")
        .source(CopySource::new(BUCKET, "shelf/a novel.epub"))
        .content_type(CONTENT_TYPE.to_string())
        .metadata_directive(Directive::Replace)
        .build()
        .send()
        .await
        .unwrap();

    copy.assert_async().await;
    assert_eq!(resp.object, "shelf/a novel.epub");
}

#[tokio::test]
async fn copy_object_server_error() {
    let mut ctx = TestContext::new().await;
    let _copy = ctx.mock_copy_error(403, "AccessDenied").await;

    let err = ctx
        .client
        .copy_object(BUCKET, OBJECT)
        .content_type(CONTENT_TYPE.to_string())
        .metadata_directive(Directive::Replace)
        .build()
        .send()
        .await
        .unwrap_err();

    let s3_err = err.s3_error().expect("S3 error response");
    assert_eq!(s3_err.code(), S3ErrorCode::AccessDenied);
    assert_eq!(s3_err.http_status_code(), 403);
    assert_eq!(s3_err.request_id(), "4442587FB7D0A2F9");
    assert_eq!(s3_err.resource(), OBJECT_PATH);
}

#[tokio::test]
async fn copy_object_error_inside_ok_response() {
    let mut ctx = TestContext::new().await;
    let _copy = ctx.mock_copy_error(200, "InternalError").await;

    let err = ctx
        .client
        .copy_object(BUCKET, OBJECT)
        .content_type(CONTENT_TYPE.to_string())
        .metadata_directive(Directive::Replace)
        .build()
        .send()
        .await
        .unwrap_err();

    let s3_err = err.s3_error().expect("S3 error response");
    assert_eq!(
        s3_err.code(),
        S3ErrorCode::OtherError("InternalError".to_string())
    );
    assert_eq!(s3_err.http_status_code(), 200);
}

#[tokio::test]
async fn copy_object_onto_itself_needs_replace() {
    let mut ctx = TestContext::new().await;
    let copy = ctx.mock_copy(0).await;

    let err = ctx
        .client
        .copy_object(BUCKET, OBJECT)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidCopyDirective(_))
    ));
    copy.assert_async().await;
}

#[tokio::test]
async fn copy_object_needs_copy_result() {
    let mut ctx = TestContext::new().await;
    let _copy = ctx
        .server
        .mock("PUT", OBJECT_PATH)
        .with_status(200)
        .create_async()
        .await;

    let err = ctx
        .client
        .copy_object(BUCKET, OBJECT)
        .content_type(CONTENT_TYPE.to_string())
        .metadata_directive(Directive::Replace)
        .build()
        .send()
        .await
        .unwrap_err();

    assert!(
        matches!(
            err,
            Error::S3Server(S3ServerError::InvalidServerResponse {
                http_status_code: 200,
                ..
            })
        ),
        "{err:?}"
    );
}

#[tokio::test]
async fn copy_object_rejects_empty_object_name() {
    let mut ctx = TestContext::new().await;
    let bucket_put = ctx
        .server
        .mock("PUT", "/books/")
        .with_status(200)
        .expect(0)
        .create_async()
        .await;

    let err = ctx
        .client
        .copy_object(BUCKET, "")
        .content_type(CONTENT_TYPE.to_string())
        .metadata_directive(Directive::Replace)
        .build()
        .send()
        .await
        .unwrap_err();

    bucket_put.assert_async().await;
    assert!(matches!(
        err,
        Error::Validation(ValidationErr::InvalidObjectName(_))
    ));
}
