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

// [START storage_get_metadata]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::Object;

pub async fn sample(client: &StorageControl, bucket: &str, object: &str) -> anyhow::Result<Object> {
    let metadata = client
        .get_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        .send()
        .await?;
    println!("Got metadata for gs://{bucket}/{object}");
    println!("  name: {}", metadata.name);
    println!("  size: {}", metadata.size);
    println!("  content type: {}", metadata.content_type);
    println!("  storage class: {}", metadata.storage_class);
    println!("  generation: {}", metadata.generation);
    println!("  metageneration: {}", metadata.metageneration);
    println!("  etag: {}", metadata.etag);
    println!("  created: {:?}", metadata.create_time);
    println!("  updated: {:?}", metadata.update_time);
    Ok(metadata)
}
// [END storage_get_metadata]
