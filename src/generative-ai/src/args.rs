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

use clap::Parser;

pub const DEFAULT_PROJECT: &str = "PROJECT_ID";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-001";

/// Positional arguments shared by the Gemini samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The Google Cloud project id.
    #[arg(env = "GOOGLE_CLOUD_PROJECT", default_value = DEFAULT_PROJECT)]
    pub project_id: String,

    /// The location used to run the model, for example `us-central1`.
    #[arg(default_value = DEFAULT_LOCATION)]
    pub location: String,

    /// The Gemini model id.
    #[arg(default_value = DEFAULT_MODEL)]
    pub model: String,
}
