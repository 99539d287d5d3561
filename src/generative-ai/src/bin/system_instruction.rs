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

//! Asks Gemini to translate text, steered by a system instruction.

use generative_ai_samples::args::Args;
use generative_ai_samples::{client, system_instruction};
use std::process::ExitCode;

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let _guard = samples_support::enable_tracing();
    samples_support::report(run().await)
}

async fn run() -> anyhow::Result<()> {
    let args: Args = samples_support::parse_args()?;
    let client = client::make_client(&args.location).await?;
    tracing::info!("running system_instruction sample with {args:?}");
    let _ =
        system_instruction::sample(&client, &args.project_id, &args.location, &args.model).await?;
    Ok(())
}
