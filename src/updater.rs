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

//! Rewrites the content type of an object in place

use crate::config::StoreConfig;
use crate::error::AppError;
use crate::input::ObjectKey;
use crate::s3::client::{S3Client, S3ClientBuilder, WaiterConfig};
use crate::s3::creds::StaticProvider;
use crate::s3::error::Error;
use crate::s3::http::BaseUrl;
use crate::s3::response::CopyObjectResponse;
use crate::s3::types::{Directive, S3Api};

/// Copies objects onto themselves with a new content type.
#[derive(Clone, Debug)]
pub struct ContentTypeUpdater {
    client: S3Client,
    bucket: String,
    content_type: String,
}

impl ContentTypeUpdater {
    /// Creates an updater for the configured store, waiting for objects with
    /// the default [`WaiterConfig`].
    pub fn new(config: &StoreConfig) -> Result<Self, AppError> {
        Self::with_waiter_config(config, WaiterConfig::default())
    }

    pub fn with_waiter_config(
        config: &StoreConfig,
        waiter_config: WaiterConfig,
    ) -> Result<Self, AppError> {
        let client = Self::build_client(config, waiter_config).map_err(AppError::ClientSetup)?;
        Ok(Self {
            client,
            bucket: config.bucket.clone(),
            content_type: config.content_type.clone(),
        })
    }

    fn build_client(config: &StoreConfig, waiter_config: WaiterConfig) -> Result<S3Client, Error> {
        let base_url: BaseUrl = config.endpoint_uri.parse()?;
        let provider = StaticProvider::new(&config.access_key_id, &config.secret_key);

        S3ClientBuilder::new(base_url)
            .provider(Some(provider))
            .region(config.region.as_str())
            .force_path_style(true)
            .waiter_config(waiter_config)
            .build()
    }

    /// Sets the content type of `key`, then waits until the object is
    /// visible again. Returns the result of the copy.
    pub async fn update(&self, key: &ObjectKey) -> Result<CopyObjectResponse, AppError> {
        let copied = self
            .client
            .copy_object(&self.bucket, key.as_str())
            .content_type(self.content_type.clone())
            .metadata_directive(Directive::Replace)
            .build()
            .send()
            .await
            .map_err(|source| AppError::CopyRequestFailed {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                content_type: self.content_type.clone(),
                source,
            })?;
        log::debug!("copied {}/{key}, etag {}", self.bucket, copied.etag);

        self.client
            .wait_until_object_exists(&self.bucket, key.as_str())
            .build()
            .send()
            .await
            .map_err(|source| AppError::ExistenceConfirmationFailed {
                bucket: self.bucket.clone(),
                key: key.to_string(),
                content_type: self.content_type.clone(),
                source,
            })?;

        Ok(copied)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::error::ValidationErr;

    fn config(endpoint_uri: &str) -> StoreConfig {
        StoreConfig {
            bucket: "books".into(),
            content_type: "application/epub+zip".into(),
            endpoint_uri: endpoint_uri.into(),
            region: "us-west-002".into(),
            access_key_id: "keyid".into(),
            secret_key: "secret".into(),
        }
    }

    #[test]
    fn test_client_is_path_style_with_configured_region() {
        let updater =
            ContentTypeUpdater::new(&config("https://s3.us-west-2.amazonaws.com")).unwrap();
        assert_eq!(updater.client.region(), "us-west-002");
        assert!(!updater.client.base_url().virtual_style);
        assert_eq!(updater.client.waiter_config(), WaiterConfig::default());
    }

    #[test]
    fn test_bad_endpoint_is_client_setup_error() {
        let r = ContentTypeUpdater::new(&config("ftp://example.com"));
        assert!(matches!(
            r,
            Err(AppError::ClientSetup(Error::Validation(
                ValidationErr::InvalidBaseUrl(_)
            )))
        ));
    }
}
