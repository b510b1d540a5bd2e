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

//! Store configuration, read from the environment

use crate::error::AppError;
use std::env;
use std::fmt;

pub const BUCKET_VAR: &str = "OBJECTBUCKET";
pub const CONTENT_TYPE_VAR: &str = "OBJECTTYPE";
pub const ENDPOINT_VAR: &str = "OBJECTURI";
pub const REGION_VAR: &str = "OBJECTREGION";
pub const ACCESS_KEY_ID_VAR: &str = "OBJECTKEYID";
pub const SECRET_KEY_VAR: &str = "OBJECTKEY";

/// Every variable [`StoreConfig`] requires, in the order they are read.
pub const ALL_VARS: [&str; 6] = [
    BUCKET_VAR,
    CONTENT_TYPE_VAR,
    ENDPOINT_VAR,
    REGION_VAR,
    ACCESS_KEY_ID_VAR,
    SECRET_KEY_VAR,
];

/// Where and how to update the object. All fields are non-empty.
#[derive(Clone, PartialEq, Eq)]
pub struct StoreConfig {
    pub bucket: String,
    pub content_type: String,
    pub endpoint_uri: String,
    pub region: String,
    pub access_key_id: String,
    pub secret_key: String,
}

impl fmt::Debug for StoreConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StoreConfig")
            .field("bucket", &self.bucket)
            .field("content_type", &self.content_type)
            .field("endpoint_uri", &self.endpoint_uri)
            .field("region", &self.region)
            .field("access_key_id", &self.access_key_id)
            .field("secret_key", &"*****")
            .finish()
    }
}

impl StoreConfig {
    /// Loads the configuration from the process environment.
    pub fn from_env() -> Result<Self, AppError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Loads the configuration through `lookup`, which returns the value of a
    /// variable by name. Unset and empty variables are both missing.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut missing: Vec<&str> = Vec::new();
        let mut get = |name: &'static str| match lookup(name) {
            Some(v) if !v.is_empty() => v,
            _ => {
                missing.push(name);
                String::new()
            }
        };

        let config = StoreConfig {
            bucket: get(BUCKET_VAR),
            content_type: get(CONTENT_TYPE_VAR),
            endpoint_uri: get(ENDPOINT_VAR),
            region: get(REGION_VAR),
            access_key_id: get(ACCESS_KEY_ID_VAR),
            secret_key: get(SECRET_KEY_VAR),
        };

        if !missing.is_empty() {
            log::debug!("environment variables not set: {}", missing.join(", "));
            return Err(AppError::MissingConfiguration);
        }
        log::debug!("loaded {config:?}");
        Ok(config)
    }
}
