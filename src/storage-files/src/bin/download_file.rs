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

//! Downloads a Cloud Storage object to a local file.

use google_cloud_storage::client::Storage;
use std::process::ExitCode;
use storage_file_samples::args::DownloadArgs;
use storage_file_samples::download_file;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _guard = samples_support::enable_tracing();
    samples_support::report(run().await)
}

async fn run() -> anyhow::Result<()> {
    let args: DownloadArgs = samples_support::parse_args()?;
    let client = Storage::builder().build().await?;
    tracing::info!("running download_file sample with {args:?}");
    let _ = download_file::sample(&client, &args.bucket, &args.object, &args.destination).await?;
    Ok(())
}
