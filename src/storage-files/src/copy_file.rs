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

// [START storage_copy_file]
use crate::bucket_name;
use google_cloud_storage::builder_ext::RewriteObjectExt;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

/// Copies an object.
///
/// Large objects, or copies across locations or storage classes, may need
/// several requests. `rewrite_until_done()` sends them until the copy
/// completes.
pub async fn sample(
    client: &StorageControl,
    source_bucket: &str,
    source: &str,
    destination_bucket: &str,
    destination: &str,
) -> anyhow::Result<Object> {
    let copied = client
        .rewrite_object()
        .set_source_bucket(bucket_name(source_bucket))
        .set_source_object(source)
        .set_destination_bucket(bucket_name(destination_bucket))
        .set_destination_name(destination)
        .rewrite_until_done()
        .await?;
    println!("Copied gs://{source_bucket}/{source} to gs://{destination_bucket}/{destination}");
    Ok(copied)
}
// [END storage_copy_file]
