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

//! HTTP URL definitions

use crate::s3::error::ValidationErr;
use crate::s3::multimap_ext::{Multimap, MultimapExt};
use crate::s3::utils::urlencode_object_key;
use http::Uri;
use lazy_static::lazy_static;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

lazy_static! {
    static ref AWS_ENDPOINT_REGEX: Regex = Regex::new(r".*\.amazonaws\.com(|\.cn)$").unwrap();
}

#[derive(Clone, Debug)]
/// Represents HTTP URL
pub struct Url {
    pub https: bool,
    pub host: String,
    pub port: u16,
    pub path: String,
    pub query: Multimap,
}

impl Url {
    pub fn host_header_value(&self) -> String {
        if self.port > 0 {
            return format!("{}:{}", self.host, self.port);
        }
        self.host.clone()
    }
}

impl fmt::Display for Url {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.host.is_empty() {
            return Err(fmt::Error);
        }

        if self.https {
            f.write_str("https://")?;
        } else {
            f.write_str("http://")?;
        }

        f.write_str(&self.host_header_value())?;

        if !self.path.starts_with('/') {
            f.write_str("/")?;
        }
        f.write_str(&self.path)?;

        if !self.query.is_empty() {
            f.write_str("?")?;
            f.write_str(&self.query.to_query_string())?;
        }

        Ok(())
    }
}

/// Returns whether the host name is an Amazon AWS endpoint
pub fn match_aws_endpoint(value: &str) -> bool {
    AWS_ENDPOINT_REGEX.is_match(value.to_lowercase().as_str())
}

#[derive(Clone, Debug)]
/// Base URL of the S3 endpoint; bucket and object are added per request
pub struct BaseUrl {
    pub https: bool,
    host: String,
    port: u16,
    /// Bucket as subdomain (`bucket.host/key`) instead of path (`host/bucket/key`)
    pub virtual_style: bool,
}

impl FromStr for BaseUrl {
    type Err = ValidationErr;

    /// Convert a string to a BaseUrl.
    ///
    /// # Examples
    ///
    /// ```
    /// use s3_setct::s3::http::BaseUrl;
    ///
    /// let base_url: BaseUrl = "https://s3.us-west-002.backblazeb2.com".parse().unwrap();
    /// let base_url: BaseUrl = "http://192.168.124.63:9000".parse().unwrap();
    /// let base_url: BaseUrl = "[0:0:0:0:0:ffff:c0a8:7c3f]:9000".parse().unwrap();
    /// ```
    fn from_str(s: &str) -> Result<Self, ValidationErr> {
        let url = s.parse::<Uri>()?;

        let https = match url.scheme() {
            None => true,
            Some(scheme) => match scheme.as_str() {
                "http" => false,
                "https" => true,
                _ => {
                    return Err(ValidationErr::InvalidBaseUrl(
                        "scheme must be http or https".into(),
                    ));
                }
            },
        };

        let mut host = match url.host() {
            Some(h) if !h.is_empty() => h.to_string(),
            _ => {
                return Err(ValidationErr::InvalidBaseUrl(
                    "valid host must be provided".into(),
                ));
            }
        };

        if host.parse::<std::net::Ipv6Addr>().is_ok() {
            host = format!("[{host}]");
        }

        let mut port = url.port_u16().unwrap_or(0);
        if (https && port == 443) || (!https && port == 80) {
            port = 0;
        }

        if url.path() != "/" && !url.path().is_empty() {
            return Err(ValidationErr::InvalidBaseUrl(
                "path must be empty for base URL".into(),
            ));
        }

        if url.query().is_some() {
            return Err(ValidationErr::InvalidBaseUrl(
                "query must be none for base URL".into(),
            ));
        }

        let virtual_style = match_aws_endpoint(&host);

        Ok(BaseUrl {
            https,
            host,
            port,
            virtual_style,
        })
    }
}

impl BaseUrl {
    /// Checks base URL is AWS host
    pub fn is_aws_host(&self) -> bool {
        match_aws_endpoint(&self.host)
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    /// Builds URL from base URL for given parameters for S3 operation
    pub fn build_url(
        &self,
        query: &Multimap,
        bucket_name: Option<&str>,
        object_name: Option<&str>,
    ) -> Result<Url, ValidationErr> {
        let mut url = Url {
            https: self.https,
            host: self.host.clone(),
            port: self.port,
            path: String::from("/"),
            query: query.clone(),
        };

        let bucket: &str = match bucket_name {
            None => return Ok(url),
            Some(v) => v,
        };

        // bucket names with '.' break TLS certificate validation of virtual hosts
        let enforce_path_style = !self.virtual_style || (bucket.contains('.') && self.https);

        let mut path = String::new();
        if enforce_path_style {
            path.push('/');
            path.push_str(bucket);
        } else {
            url.host = format!("{bucket}.{}", self.host);
        }

        if let Some(v) = object_name {
            if !v.starts_with('/') {
                path.push('/');
            }
            path.push_str(&urlencode_object_key(v));
        }

        if path.is_empty() {
            path.push('/');
        }
        url.path = path;

        Ok(url)
    }
}
