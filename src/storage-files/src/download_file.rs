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

// [START storage_download_file]
use crate::bucket_name;
use gcs::client::Storage;
use google_cloud_storage as gcs;
use tokio::io::AsyncWriteExt;

/// Downloads an object into a local file, returns the number of bytes written.
pub async fn sample<T>(
    client: &Storage<T>,
    bucket: &str,
    object: &str,
    file_path: &str,
) -> anyhow::Result<usize>
where
    T: gcs::stub::Storage + 'static,
{
    let mut reader = client
        .read_object(bucket_name(bucket), object)
        .send()
        .await?;

    let mut file = tokio::fs::File::create(file_path).await?;
    let mut size = 0;
    while let Some(data) = reader.next().await.transpose()? {
        size += data.len();
        file.write_all(&data).await?;
    }
    file.flush().await?;

    println!("Downloaded gs://{bucket}/{object} to {file_path}");
    Ok(size)
}
// [END storage_download_file]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockStorage, not_found};
    use gcs::model_ext::ObjectHighlights;
    use gcs::read_object::ReadObjectResponse;

    const CONTENTS: &str = "the quick brown fox jumps over the lazy dog\n";

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_read_object().return_once(|r, _| {
            assert_eq!(r.bucket, "projects/_/buckets/my-bucket");
            assert_eq!(r.object, "test.txt");
            Ok(ReadObjectResponse::from_source(
                ObjectHighlights::default(),
                bytes::Bytes::from_static(CONTENTS.as_bytes()),
            ))
        });
        let client = Storage::from_stub(mock);

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("downloaded.txt");
        let size = sample(&client, "my-bucket", "test.txt", &path.to_string_lossy()).await?;
        assert_eq!(size, CONTENTS.len());

        let got = std::fs::read(&path)?;
        assert_eq!(got, CONTENTS.as_bytes());
        Ok(())
    }

    #[tokio::test]
    async fn service_error() -> anyhow::Result<()> {
        let mut mock = MockStorage::new();
        mock.expect_read_object().return_once(|_, _| Err(not_found()));
        let client = Storage::from_stub(mock);

        let dir = tempfile::tempdir()?;
        let path = dir.path().join("downloaded.txt");
        let got = sample(&client, "my-bucket", "missing.txt", &path.to_string_lossy()).await;
        assert!(got.is_err(), "{got:?}");
        // The file is only created once the download starts.
        assert!(!path.exists());
        Ok(())
    }
}
