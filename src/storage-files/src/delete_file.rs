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

// [START storage_delete_file]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;

pub async fn sample(client: &StorageControl, bucket: &str, object: &str) -> anyhow::Result<()> {
    client
        .delete_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        // Consider .set_generation() to make request idempotent
        .send()
        .await?;
    println!("Deleted gs://{bucket}/{object}");
    Ok(())
}
// [END storage_delete_file]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockStorageControl, not_found};
    use google_cloud_gax::response::Response;

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockStorageControl::new();
        mock.expect_delete_object()
            .withf(|r, _| r.bucket == "projects/_/buckets/my-bucket" && r.object == "test3.txt")
            .return_once(|_, _| Ok(Response::from(())));
        let client = StorageControl::from_stub(mock);

        sample(&client, "my-bucket", "test3.txt").await?;
        Ok(())
    }

    #[tokio::test]
    async fn service_error() {
        let mut mock = MockStorageControl::new();
        mock.expect_delete_object().return_once(|_, _| Err(not_found()));
        let client = StorageControl::from_stub(mock);

        let got = sample(&client, "my-bucket", "missing.txt").await;
        let err = got.unwrap_err();
        assert!(!err.to_string().is_empty(), "{err:?}");
    }
}
