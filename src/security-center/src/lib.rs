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

//! Examples showing how to use the Security Command Center API.

pub mod args;
pub mod delete_bigquery_export;

use google_cloud_securitycenter_v2::client::SecurityCenter;

/// Returns the regional endpoint for `location`, `None` for the default.
pub fn endpoint(location: &str) -> Option<String> {
    match location {
        "global" => None,
        l => Some(format!("https://securitycenter.{l}.rep.googleapis.com")),
    }
}

/// Creates a Security Command Center client for `location`.
pub async fn make_client(location: &str) -> anyhow::Result<SecurityCenter> {
    let location = samples_support::validate_location(location)?;
    let builder = SecurityCenter::builder().with_tracing();
    let builder = match endpoint(location) {
        Some(e) => builder.with_endpoint(e),
        None => builder,
    };
    Ok(builder.build().await?)
}
