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

//! S3 client to perform object operations against a single, fixed region.

use bytes::Bytes;
use http::{HeaderMap, Method};
use std::mem;
use std::sync::Arc;
use std::time::Duration;

use crate::s3::creds::Provider;
use crate::s3::error::{Error, NetworkError, S3ServerError, ValidationErr};
use crate::s3::header_constants::*;
use crate::s3::http::BaseUrl;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::s3_error_response::{S3ErrorCode, S3ErrorResponse};
use crate::s3::signer::sign_v4_s3;
use crate::s3::utils::{EMPTY_SHA256, sha256_hash, to_amz_date, utc_now};

mod copy_object;
mod stat_object;
mod wait_until_object_exists;

/// The default AWS region to be used if no other region is specified.
pub const DEFAULT_REGION: &str = "us-east-1";

/// Polling policy of [`S3Client::wait_until_object_exists`].
///
/// The first check is made immediately; `delay` is slept between consecutive
/// checks and at most `max_attempts` checks are made in total.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WaiterConfig {
    pub delay: Duration,
    pub max_attempts: u32,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            delay: Duration::from_secs(5),
            max_attempts: 20,
        }
    }
}

impl WaiterConfig {
    pub fn delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn max_attempts(mut self, max_attempts: u32) -> Self {
        self.max_attempts = max_attempts;
        self
    }
}

/// Client Builder manufactures a Client using given parameters.
#[derive(Debug)]
pub struct S3ClientBuilder {
    base_url: BaseUrl,
    /// Set the credential provider. If not, set anonymous access is used.
    provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    region: Option<String>,
    force_path_style: bool,
    waiter_config: WaiterConfig,
}

impl S3ClientBuilder {
    /// Creates a builder given a base URL for an AWS S3 compatible object
    /// storage service.
    pub fn new(base_url: BaseUrl) -> Self {
        Self {
            base_url,
            provider: None,
            region: None,
            force_path_style: false,
            waiter_config: WaiterConfig::default(),
        }
    }

    /// Set the credential provider. If not, set anonymous access is used.
    pub fn provider<P: Provider + Send + Sync + 'static>(mut self, provider: Option<P>) -> Self {
        self.provider = provider.map(|p| Arc::new(p) as Arc<dyn Provider + Send + Sync + 'static>);
        self
    }

    /// Set the region every request is signed for. No region lookup is ever
    /// made; without this setting [`DEFAULT_REGION`] is used.
    pub fn region<S: Into<String>>(mut self, region: S) -> Self {
        self.region = Some(region.into());
        self
    }

    /// Always address buckets in the URL path (`host/bucket/key`), which many
    /// S3 compatible services require.
    pub fn force_path_style(mut self, force: bool) -> Self {
        self.force_path_style = force;
        self
    }

    /// Set the polling policy used by [`S3Client::wait_until_object_exists`].
    pub fn waiter_config(mut self, config: WaiterConfig) -> Self {
        self.waiter_config = config;
        self
    }

    /// Build the Client.
    pub fn build(self) -> Result<S3Client, Error> {
        let region = self.region.unwrap_or_else(|| DEFAULT_REGION.to_string());
        if region.trim().is_empty() {
            return Err(ValidationErr::InvalidRegion(region).into());
        }

        let mut base_url = self.base_url;
        if self.force_path_style {
            base_url.virtual_style = false;
        }

        let user_agent = String::from("s3-setct (")
            + std::env::consts::OS
            + "; "
            + std::env::consts::ARCH
            + ") s3-setct/"
            + env!("CARGO_PKG_VERSION");

        let http_client = reqwest::Client::builder()
            .no_gzip()
            .user_agent(user_agent)
            .build()
            .map_err(NetworkError::from)?;

        Ok(S3Client {
            http_client,
            shared: Arc::new(SharedClientItems {
                base_url,
                provider: self.provider,
                region,
                waiter_config: self.waiter_config,
            }),
        })
    }
}

/// Simple Storage Service (aka S3) client to perform object operations.
///
/// If credential provider is passed, all S3 operation requests are signed using
/// AWS Signature Version 4; else they are performed anonymously.
#[derive(Clone, Debug)]
pub struct S3Client {
    http_client: reqwest::Client,
    pub(crate) shared: Arc<SharedClientItems>,
}

impl S3Client {
    /// Returns a S3 client with given base URL, region and credentials,
    /// addressing buckets path-style.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_setct::s3::client::S3Client;
    /// use s3_setct::s3::creds::StaticProvider;
    /// use s3_setct::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://s3.us-west-002.backblazeb2.com".parse().unwrap();
    /// let static_provider = StaticProvider::new("<s3-keyId>", "<s3-key>");
    /// let client = S3Client::new(base_url, "us-west-002", Some(static_provider)).unwrap();
    /// ```
    pub fn new<P: Provider + Send + Sync + 'static>(
        base_url: BaseUrl,
        region: &str,
        provider: Option<P>,
    ) -> Result<Self, Error> {
        S3ClientBuilder::new(base_url)
            .provider(provider)
            .region(region)
            .force_path_style(true)
            .build()
    }

    /// Returns the region every request is signed for.
    pub fn region(&self) -> &str {
        &self.shared.region
    }

    /// Returns the base URL of the service.
    pub fn base_url(&self) -> &BaseUrl {
        &self.shared.base_url
    }

    /// Returns the polling policy used by [`S3Client::wait_until_object_exists`].
    pub fn waiter_config(&self) -> WaiterConfig {
        self.shared.waiter_config
    }

    #[allow(clippy::too_many_arguments)]
    pub(crate) async fn execute(
        &self,
        method: Method,
        region: &str,
        headers: &mut Multimap,
        query_params: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
        body: Option<Bytes>,
    ) -> Result<reqwest::Response, Error> {
        let url = self
            .shared
            .base_url
            .build_url(query_params, bucket_name, object_name)?;
        log::debug!("{method} {url}");

        headers.add(HOST, url.host_header_value());

        let sha256: String = match method {
            Method::PUT | Method::POST => {
                if headers.get_ignore_case(CONTENT_TYPE).is_none() {
                    headers.add(CONTENT_TYPE, "application/octet-stream");
                }
                let len: usize = body.as_ref().map_or(0, |b| b.len());
                headers.add(CONTENT_LENGTH, len.to_string());
                match body {
                    None => EMPTY_SHA256.into(),
                    Some(ref v) => sha256_hash(v),
                }
            }
            _ => EMPTY_SHA256.into(),
        };
        headers.add(X_AMZ_CONTENT_SHA256, sha256.clone());

        let date = utc_now();
        headers.add(X_AMZ_DATE, to_amz_date(date));

        if let Some(p) = &self.shared.provider {
            let creds = p.fetch();
            sign_v4_s3(
                &method,
                &url.path,
                region,
                headers,
                query_params,
                &creds.access_key,
                &creds.secret_key,
                &sha256,
                date,
            );
        }

        let mut req = self.http_client.request(method.clone(), url.to_string());
        for (key, values) in headers.iter_all() {
            for value in values {
                req = req.header(key, value);
            }
        }

        if matches!(method, Method::PUT | Method::POST) {
            req = req.body(body.unwrap_or_default());
        }

        let resp = req.send().await?;
        if resp.status().is_success() {
            return Ok(resp);
        }

        let mut resp = resp;
        let status_code = resp.status().as_u16();
        let headers: HeaderMap = mem::take(resp.headers_mut());
        let body: Bytes = resp.bytes().await?;

        let e: S3ErrorResponse = self.shared.create_s3_error_response(
            body,
            status_code,
            headers,
            &url.path,
            bucket_name,
            object_name,
        )?;
        log::debug!("{method} {url} failed: {e}");

        Err(e.into())
    }
}

#[derive(Debug)]
pub(crate) struct SharedClientItems {
    pub(crate) base_url: BaseUrl,
    pub(crate) provider: Option<Arc<dyn Provider + Send + Sync + 'static>>,
    pub(crate) region: String,
    pub(crate) waiter_config: WaiterConfig,
}

impl SharedClientItems {
    fn create_s3_error_response(
        &self,
        body: Bytes,
        http_status_code: u16,
        headers: HeaderMap,
        resource: &str,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<S3ErrorResponse, Error> {
        // if body is present, try to parse it as XML error response
        if !body.is_empty() {
            let content_type = headers
                .get(CONTENT_TYPE)
                .map(|v| v.to_str())
                .transpose()
                .map_err(ValidationErr::from)?
                .unwrap_or_default()
                .to_string();

            return if content_type.to_lowercase().contains("xml") {
                Ok(S3ErrorResponse::new_from_body(
                    body,
                    headers,
                    http_status_code,
                )?)
            } else {
                Err(S3ServerError::InvalidServerResponse {
                    message: format!("expected XML content-type, but got '{content_type}'"),
                    http_status_code,
                    content_type,
                }
                .into())
            };
        }

        let (code, message) = match http_status_code {
            301 => (S3ErrorCode::PermanentRedirect, "Moved Permanently"),
            307 => (S3ErrorCode::Redirect, "Temporary redirect"),
            400 => (S3ErrorCode::BadRequest, "Bad request"),
            403 => (S3ErrorCode::AccessDenied, "Access denied"),
            404 => match (object_name, bucket_name) {
                (Some(_), _) => (S3ErrorCode::NoSuchKey, "Object does not exist"),
                (None, Some(_)) => (S3ErrorCode::NoSuchBucket, "Bucket does not exist"),
                (None, None) => (S3ErrorCode::ResourceNotFound, "Request resource not found"),
            },
            405 | 501 => (
                S3ErrorCode::MethodNotAllowed,
                "The specified method is not allowed against this resource",
            ),
            409 => match bucket_name {
                Some(_) => (S3ErrorCode::NoSuchBucket, "Bucket does not exist"),
                None => (S3ErrorCode::ResourceConflict, "Request resource conflicts"),
            },
            _ => {
                return Err(NetworkError::ServerError(http_status_code).into());
            }
        };

        let mut message = message.to_string();
        if let Some(region) = headers
            .get(X_AMZ_BUCKET_REGION)
            .and_then(|v| v.to_str().ok())
            && matches!(http_status_code, 301 | 307 | 400)
        {
            message.push_str("; use region ");
            message.push_str(region);
        }

        let header_text = |name: &str| -> Result<String, Error> {
            Ok(match headers.get(name) {
                Some(v) => v.to_str().map_err(ValidationErr::from)?.to_string(),
                None => String::new(),
            })
        };
        let request_id = header_text(X_AMZ_REQUEST_ID)?;
        let host_id = header_text(X_AMZ_ID_2)?;

        Ok(S3ErrorResponse::new(
            headers,
            code,
            Some(message),
            resource.to_string(),
            request_id,
            host_id,
            bucket_name.map(String::from),
            object_name.map(String::from),
            http_status_code,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::s3::creds::StaticProvider;

    fn base_url() -> BaseUrl {
        "http://localhost:9000".parse().unwrap()
    }

    #[test]
    fn test_waiter_config_default() {
        let config = WaiterConfig::default();
        assert_eq!(config.delay, Duration::from_secs(5));
        assert_eq!(config.max_attempts, 20);

        let config = config.delay(Duration::from_millis(10)).max_attempts(3);
        assert_eq!(config.delay, Duration::from_millis(10));
        assert_eq!(config.max_attempts, 3);
    }

    #[test]
    fn test_builder_defaults_region() {
        let client = S3ClientBuilder::new(base_url()).build().unwrap();
        assert_eq!(client.region(), DEFAULT_REGION);
        assert_eq!(client.waiter_config(), WaiterConfig::default());
    }

    #[test]
    fn test_builder_rejects_blank_region() {
        let r = S3ClientBuilder::new(base_url()).region(" ").build();
        assert!(matches!(
            r,
            Err(Error::Validation(ValidationErr::InvalidRegion(_)))
        ));
    }

    #[test]
    fn test_force_path_style() {
        let aws: BaseUrl = "https://s3.eu-west-1.amazonaws.com".parse().unwrap();
        assert!(aws.virtual_style);

        let client = S3ClientBuilder::new(aws.clone())
            .provider(Some(StaticProvider::new("ak", "sk")))
            .region("eu-west-1")
            .force_path_style(true)
            .build()
            .unwrap();
        assert!(!client.base_url().virtual_style);

        let client = S3Client::new(aws, "eu-west-1", None::<StaticProvider>).unwrap();
        assert!(!client.base_url().virtual_style);
        assert_eq!(client.region(), "eu-west-1");
    }

    fn shared() -> SharedClientItems {
        SharedClientItems {
            base_url: base_url(),
            provider: None,
            region: DEFAULT_REGION.to_string(),
            waiter_config: WaiterConfig::default(),
        }
    }

    #[test]
    fn test_bodiless_404_maps_to_no_such_key() {
        let e = shared()
            .create_s3_error_response(
                Bytes::new(),
                404,
                HeaderMap::new(),
                "/books/novel.epub",
                Some("books"),
                Some("novel.epub"),
            )
            .unwrap();
        assert_eq!(e.code(), S3ErrorCode::NoSuchKey);
        assert_eq!(e.http_status_code(), 404);
        assert_eq!(e.object_name().as_deref(), Some("novel.epub"));
    }

    #[test]
    fn test_bodiless_unknown_status_is_server_error() {
        let r = shared().create_s3_error_response(
            Bytes::new(),
            503,
            HeaderMap::new(),
            "/books/novel.epub",
            Some("books"),
            Some("novel.epub"),
        );
        assert!(matches!(
            r,
            Err(Error::Network(NetworkError::ServerError(503)))
        ));
    }

    #[test]
    fn test_non_xml_error_body_is_invalid_response() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "text/html".parse().unwrap());
        let r = shared().create_s3_error_response(
            Bytes::from_static(b"<html>oops</html>"),
            500,
            headers,
            "/books/novel.epub",
            Some("books"),
            Some("novel.epub"),
        );
        assert!(matches!(
            r,
            Err(Error::S3Server(S3ServerError::InvalidServerResponse {
                http_status_code: 500,
                ..
            }))
        ));
    }

    #[test]
    fn test_xml_error_body_is_decoded() {
        let mut headers = HeaderMap::new();
        headers.insert("content-type", "application/xml".parse().unwrap());
        let body = "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\
            <Error><Code>AccessDenied</Code><Message>Access Denied</Message>\
            <Resource>/books/novel.epub</Resource><RequestId>4442587FB7D0A2F9</RequestId>\
            <HostId>abc</HostId></Error>";
        let e = shared()
            .create_s3_error_response(
                Bytes::from(body),
                403,
                headers,
                "/books/novel.epub",
                Some("books"),
                Some("novel.epub"),
            )
            .unwrap();
        assert_eq!(e.code(), S3ErrorCode::AccessDenied);
        assert_eq!(e.request_id(), "4442587FB7D0A2F9");
    }
}
