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

//! Examples showing how to manage files in Cloud Storage.
//!
//! Uploads and downloads use the [Storage] client, all other operations use
//! the [StorageControl] client.
//!
//! [Storage]: google_cloud_storage::client::Storage
//! [StorageControl]: google_cloud_storage::client::StorageControl

pub mod args;
pub mod copy_file;
pub mod delete_file;
pub mod download_file;
pub mod get_metadata;
pub mod list_files;
pub mod list_files_by_prefix;
pub mod make_public;
pub mod move_file;
pub mod upload_file;

#[cfg(test)]
pub(crate) mod mocks;

/// Formats the resource name of a bucket, as used by the Storage APIs.
pub fn bucket_name(bucket_id: &str) -> String {
    format!("projects/_/buckets/{bucket_id}")
}
