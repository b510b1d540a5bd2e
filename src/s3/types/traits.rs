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
use crate::s3::types::S3Request;
use async_trait::async_trait;

pub trait ToS3Request: Sized {
    /// Consumes this request builder and returns a [`S3Request`].
    ///
    /// Validation of the builder's fields happens here, before anything is
    /// sent to the server.
    fn to_s3request(self) -> Result<S3Request, ValidationErr>;
}

#[async_trait]
pub trait FromS3Response: Sized {
    /// Converts the outcome of an executed request into a typed response.
    ///
    /// `response` is the transport result; server side S3 errors have already
    /// been decoded into [`Error`] by the client.
    async fn from_s3response(
        s3req: S3Request,
        response: Result<reqwest::Response, Error>,
    ) -> Result<Self, Error>;
}

#[async_trait]
pub trait S3Api: ToS3Request {
    /// The response type associated with this request builder.
    type S3Response: FromS3Response;

    /// Sends the S3 API request and returns the corresponding typed response.
    async fn send(self) -> Result<Self::S3Response, Error> {
        let mut req: S3Request = self.to_s3request()?;
        let resp: Result<reqwest::Response, Error> = req.execute().await;
        Self::S3Response::from_s3response(req, resp).await
    }
}
