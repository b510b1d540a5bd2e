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

use std::fmt;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
/// Metadata or tagging directive of a copy request
pub enum Directive {
    /// Keep the source object's value
    #[default]
    Copy,
    /// Use the value supplied with the request
    Replace,
}

impl Directive {
    pub fn parse(s: &str) -> Option<Directive> {
        match s {
            "COPY" => Some(Directive::Copy),
            "REPLACE" => Some(Directive::Replace),
            _ => None,
        }
    }
}

impl fmt::Display for Directive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Directive::Copy => write!(f, "COPY"),
            Directive::Replace => write!(f, "REPLACE"),
        }
    }
}
