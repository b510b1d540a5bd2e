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

use crate::s3::builders::{WaitUntilObjectExists, WaitUntilObjectExistsBldr};
use crate::s3::client::S3Client;

impl S3Client {
    /// Creates a [`WaitUntilObjectExists`] builder that polls until the object
    /// can be read back.
    ///
    /// The policy of [`S3Client::waiter_config`] applies unless overridden on
    /// the builder. Call [`WaitUntilObjectExists::send()`] to run the wait.
    pub fn wait_until_object_exists<S1: Into<String>, S2: Into<String>>(
        &self,
        bucket: S1,
        object: S2,
    ) -> WaitUntilObjectExistsBldr {
        WaitUntilObjectExists::builder()
            .client(self.clone())
            .bucket(bucket)
            .object(object)
    }
}
