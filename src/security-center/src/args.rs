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

pub const DEFAULT_ORGANIZATION: &str = "ORGANIZATION_ID";
pub const DEFAULT_EXPORT: &str = "EXPORT_ID";
pub const DEFAULT_LOCATION: &str = "global";

/// Arguments for the BigQuery export samples.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct Args {
    /// The numeric id of the organization owning the export.
    #[arg(default_value = DEFAULT_ORGANIZATION)]
    pub organization_id: String,

    /// The id of the BigQuery export.
    #[arg(default_value = DEFAULT_EXPORT)]
    pub export_id: String,

    /// The Security Command Center location, `global` unless data residency
    /// is enabled.
    #[arg(default_value = DEFAULT_LOCATION)]
    pub location: String,
}
