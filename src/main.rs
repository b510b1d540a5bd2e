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

use s3_setct::config::StoreConfig;
use s3_setct::error::AppError;
use s3_setct::input::{self, ObjectKey};
use s3_setct::updater::ContentTypeUpdater;
use std::io;
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init(); // Note: set environment variable RUST_LOG="DEBUG" to log debug messages

    match run().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            if let Err(io_err) = e.report(&mut io::stdout()) {
                log::error!("unable to write diagnostic: {io_err}");
            }
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<(), AppError> {
    let config = StoreConfig::from_env()?;
    let key = ObjectKey::from_input(&input::read_stdin()?);

    let updater = ContentTypeUpdater::new(&config)?;
    let copied = updater.update(&key).await?;

    println!(
        "Successfully updated content type {} -- {key}",
        config.content_type
    );
    println!("{copied:?}");
    Ok(())
}
