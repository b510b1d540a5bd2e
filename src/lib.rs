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

//! # s3-setct
//!
//! Sets the content type of an object that already lives in Amazon S3
//! compatible storage. The object is copied onto itself with the `REPLACE`
//! metadata directive and the new `Content-Type`, after which the tool waits
//! until the store reports the object again.
//!
//! The binary is driven by six environment variables and reads the object
//! key from standard input:
//!
//! ```text
//! echo 'some_ebook.epub' | OBJECTBUCKET=... OBJECTTYPE=... s3_setct
//! ```
//!
//! ## Design
//! - [`config::StoreConfig`] is loaded once from the environment
//! - [`input`] captures the key from standard input
//! - [`updater::ContentTypeUpdater`] performs the copy and the existence wait
//!   through the [`s3`] client, whose API methods return builders that
//!   implement [`s3::types::S3Api`]
//! - every failure is an [`error::AppError`], reported once by the binary

#![allow(clippy::result_large_err)]
#![allow(clippy::too_many_arguments)]
pub mod config;
pub mod error;
pub mod help;
pub mod input;
pub mod s3;
pub mod updater;
