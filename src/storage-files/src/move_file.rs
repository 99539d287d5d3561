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

// [START storage_move_file]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

pub async fn sample(
    client: &StorageControl,
    bucket: &str,
    source: &str,
    destination: &str,
) -> anyhow::Result<Object> {
    let moved = client
        .move_object()
        .set_bucket(bucket_name(bucket))
        .set_source_object(source)
        .set_destination_object(destination)
        .send()
        .await?;
    println!("Renamed gs://{bucket}/{source} to gs://{bucket}/{destination}");
    Ok(moved)
}
// [END storage_move_file]
