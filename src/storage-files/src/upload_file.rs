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

// [START storage_upload_file]
use crate::bucket_name;
use gcs::client::Storage;
use gcs::model::Object;
use google_cloud_storage as gcs;

pub async fn sample<T>(
    client: &Storage<T>,
    bucket: &str,
    file_path: &str,
    object: &str,
) -> anyhow::Result<Object>
where
    T: gcs::stub::Storage + 'static,
{
    let payload = bytes::Bytes::from(tokio::fs::read(file_path).await?);
    let uploaded = client
        .write_object(bucket_name(bucket), object, payload)
        .send_unbuffered()
        .await?;

    println!("Uploaded {file_path} to gs://{bucket}/{object}");
    Ok(uploaded)
}
// [END storage_upload_file]
