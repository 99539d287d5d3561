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

// [START securitycenter_delete_bigquery_export_v2]
use anyhow::Context;
use google_cloud_securitycenter_v2::client::SecurityCenter;

/// Formats the name of a BigQuery export owned by an organization.
///
/// Exports can also be owned by folders or projects, using `folders/{folder}`
/// or `projects/{project}` as the prefix.
pub fn export_name(organization_id: &str, location: &str, export_id: &str) -> String {
    format!("organizations/{organization_id}/locations/{location}/bigQueryExports/{export_id}")
}

pub async fn sample(
    client: &SecurityCenter,
    organization_id: &str,
    export_id: &str,
    location: &str,
) -> anyhow::Result<()> {
    let name = export_name(organization_id, location, export_id);
    client
        .delete_big_query_export()
        .set_name(&name)
        .send()
        .await
        .with_context(|| format!("cannot delete BigQuery export {name}"))?;
    println!("BigQuery export request deleted successfully: {name}");
    Ok(())
}
// [END securitycenter_delete_bigquery_export_v2]
