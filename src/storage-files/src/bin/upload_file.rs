// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Uploads a local file to a Cloud Storage bucket.

use google_cloud_storage::client::Storage;
use std::process::ExitCode;
use storage_file_samples::args::UploadArgs;
use storage_file_samples::upload_file;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _guard = samples_support::enable_tracing();
    samples_support::report(run().await)
}

async fn run() -> anyhow::Result<()> {
    let args: UploadArgs = samples_support::parse_args()?;
    let client = Storage::builder().build().await?;
    tracing::info!("running upload_file sample with {args:?}");
    let object = args.object_name();
    let _ = upload_file::sample(&client, &args.bucket, &args.source, &object).await?;
    Ok(())
}
