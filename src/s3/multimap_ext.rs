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

//! Multimap of header or query values and the canonical forms used for signing

use crate::s3::utils::url_encode;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeMap;

pub type Multimap = multimap::MultiMap<String, String>;

lazy_static! {
    static ref MULTI_SPACE_REGEX: Regex = Regex::new("( +)").unwrap();
}

pub trait MultimapExt {
    /// Adds a key-value pair to the multimap
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V);

    /// Returns the first value of `key`, ignoring ASCII case of the key
    fn get_ignore_case(&self, key: &str) -> Option<&String>;

    /// Converts multimap to HTTP query string
    fn to_query_string(&self) -> String;

    /// Converts multimap to canonical query string
    fn get_canonical_query_string(&self) -> String;

    /// Converts multimap to signed headers and canonical headers
    fn get_canonical_headers(&self) -> (String, String);
}

impl MultimapExt for Multimap {
    fn add<K: Into<String>, V: Into<String>>(&mut self, key: K, value: V) {
        self.insert(key.into(), value.into());
    }

    fn get_ignore_case(&self, key: &str) -> Option<&String> {
        self.iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(key))
            .map(|(_, v)| v)
    }

    fn to_query_string(&self) -> String {
        let mut query = String::new();
        for (key, values) in self.iter_all() {
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_query_string(&self) -> String {
        let mut sorted: BTreeMap<&str, Vec<&str>> = BTreeMap::new();
        for (key, values) in self.iter_all() {
            sorted
                .entry(key.as_str())
                .or_default()
                .extend(values.iter().map(|s| s.as_str()));
        }

        let mut query = String::new();
        for (key, mut values) in sorted {
            values.sort();
            for value in values {
                if !query.is_empty() {
                    query.push('&');
                }
                query.push_str(&url_encode(key));
                query.push('=');
                query.push_str(&url_encode(value));
            }
        }
        query
    }

    fn get_canonical_headers(&self) -> (String, String) {
        let mut btmap: BTreeMap<String, String> = BTreeMap::new();

        for (k, values) in self.iter_all() {
            let key = k.to_lowercase();
            if key == "authorization" || key == "user-agent" {
                continue;
            }

            let mut vs: Vec<&String> = values.iter().collect();
            vs.sort();

            let mut value = String::new();
            for v in vs {
                if !value.is_empty() {
                    value.push(',');
                }
                value.push_str(MULTI_SPACE_REGEX.replace_all(v, " ").trim());
            }
            btmap.insert(key, value);
        }

        let mut signed_headers = String::new();
        let mut canonical_headers = String::new();
        let mut add_delim = false;
        for (key, value) in &btmap {
            if add_delim {
                signed_headers.push(';');
                canonical_headers.push('\n');
            }

            signed_headers.push_str(key);

            canonical_headers.push_str(key);
            canonical_headers.push(':');
            canonical_headers.push_str(value);

            add_delim = true;
        }

        (signed_headers, canonical_headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_headers_sorted_and_lowercased() {
        let mut headers = Multimap::new();
        headers.add("X-Amz-Date", "20130524T000000Z");
        headers.add("Host", "examplebucket.s3.amazonaws.com");
        headers.add("Authorization", "ignored");

        let (signed, canonical) = headers.get_canonical_headers();
        assert_eq!(signed, "host;x-amz-date");
        assert_eq!(
            canonical,
            "host:examplebucket.s3.amazonaws.com\nx-amz-date:20130524T000000Z"
        );
    }

    #[test]
    fn test_canonical_headers_collapse_spaces() {
        let mut headers = Multimap::new();
        headers.add("Content-Type", "  text/plain;   charset=utf-8 ");

        let (_, canonical) = headers.get_canonical_headers();
        assert_eq!(canonical, "content-type:text/plain; charset=utf-8");
    }

    #[test]
    fn test_canonical_query_string_sorted() {
        let mut query = Multimap::new();
        query.add("uploads", "");
        query.add("prefix", "a b");
        query.add("delimiter", "/");

        assert_eq!(
            query.get_canonical_query_string(),
            "delimiter=%2F&prefix=a%20b&uploads="
        );
    }

    #[test]
    fn test_get_ignore_case() {
        let mut headers = Multimap::new();
        headers.add("Content-Type", "application/epub+zip");

        assert_eq!(
            headers.get_ignore_case("content-type").map(String::as_str),
            Some("application/epub+zip")
        );
        assert!(headers.get_ignore_case("etag").is_none());
    }
}
