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

use crate::s3::builders::StatObject;
use crate::s3::client::{S3Client, WaiterConfig};
use crate::s3::error::{Error, NetworkError};
use crate::s3::response::StatObjectResponse;
use crate::s3::s3_error_response::S3ErrorCode;
use crate::s3::types::S3Api;
use typed_builder::TypedBuilder;

/// Argument builder for [`S3Client::wait_until_object_exists`](crate::s3::client::S3Client::wait_until_object_exists).
///
/// Polls the object with `HeadObject` until it is visible. A missing object
/// (`NoSuchKey` or HTTP 404) is retried after the configured delay; any
/// other failure stops the wait immediately.
#[derive(Clone, Debug, TypedBuilder)]
pub struct WaitUntilObjectExists {
    #[builder(!default)] // force required
    client: S3Client,
    #[builder(setter(into))] // force required + accept Into<String>
    bucket: String,
    #[builder(setter(into))] // force required + accept Into<String>
    object: String,

    #[builder(default, setter(into))]
    version_id: Option<String>,
    /// Overrides the polling policy of the client
    #[builder(default, setter(into))]
    config: Option<WaiterConfig>,
}

/// Builder type alias for [`WaitUntilObjectExists`].
///
/// Constructed via [`WaitUntilObjectExists::builder()`](WaitUntilObjectExists::builder) and used to build a [`WaitUntilObjectExists`] instance.
pub type WaitUntilObjectExistsBldr =
    WaitUntilObjectExistsBuilder<((S3Client,), (String,), (String,), (), ())>;

fn is_not_found(e: &Error) -> bool {
    e.s3_error()
        .is_some_and(|r| r.code() == S3ErrorCode::NoSuchKey || r.http_status_code() == 404)
}

impl WaitUntilObjectExists {
    /// Runs the wait, returning the metadata of the object once it exists.
    pub async fn send(self) -> Result<StatObjectResponse, Error> {
        let config = self.config.unwrap_or_else(|| self.client.waiter_config());
        let attempts = config.max_attempts.max(1);

        for attempt in 1..=attempts {
            let resp = StatObject::builder()
                .client(self.client.clone())
                .bucket(self.bucket.clone())
                .object(self.object.clone())
                .version_id(self.version_id.clone())
                .build()
                .send()
                .await;

            match resp {
                Ok(v) => {
                    log::debug!(
                        "{}/{} exists after {attempt} attempt(s)",
                        self.bucket,
                        self.object
                    );
                    return Ok(v);
                }
                Err(e) if is_not_found(&e) => {
                    log::debug!(
                        "{}/{} not found yet, attempt {attempt} of {attempts}",
                        self.bucket,
                        self.object
                    );
                }
                Err(e) => return Err(e),
            }

            if attempt < attempts {
                tokio::time::sleep(config.delay).await;
            }
        }

        Err(NetworkError::WaitTimeout {
            bucket: self.bucket,
            object: self.object,
            attempts,
        }
        .into())
    }
}
