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

//! Command-line arguments for the file samples.
//!
//! Every argument is positional and has a default, invalid values are only
//! detected by the service.

use clap::Parser;
use std::path::Path;

pub const DEFAULT_BUCKET: &str = "BUCKET_NAME";
pub const FILE_NAME: &str = "test.txt";
pub const MOVED_FILE_NAME: &str = "test2.txt";
pub const COPIED_FILE_NAME: &str = "test3.txt";
pub const DOWNLOADED_FILE_NAME: &str = "downloaded.txt";
pub const DEFAULT_PREFIX: &str = "test";

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Uploads a local file to a bucket.")]
pub struct UploadArgs {
    /// The bucket receiving the file.
    #[arg(default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    /// The local file to upload.
    #[arg(default_value = FILE_NAME)]
    pub source: String,

    /// The object name, defaults to the file name of `source`.
    pub object: Option<String>,
}

impl UploadArgs {
    pub fn object_name(&self) -> String {
        match &self.object {
            Some(o) => o.clone(),
            None => Path::new(&self.source)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| self.source.clone()),
        }
    }
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Downloads an object to a local file.")]
pub struct DownloadArgs {
    #[arg(default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    #[arg(default_value = FILE_NAME)]
    pub object: String,

    /// The local file receiving the object contents.
    #[arg(default_value = DOWNLOADED_FILE_NAME)]
    pub destination: String,
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Renames an object within a bucket.")]
pub struct MoveArgs {
    #[arg(default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    #[arg(default_value = FILE_NAME)]
    pub source: String,

    #[arg(default_value = MOVED_FILE_NAME)]
    pub destination: String,
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Copies an object, possibly to a different bucket.")]
pub struct CopyArgs {
    #[arg(default_value = DEFAULT_BUCKET)]
    pub source_bucket: String,

    #[arg(default_value = MOVED_FILE_NAME)]
    pub source: String,

    #[arg(default_value = DEFAULT_BUCKET)]
    pub destination_bucket: String,

    #[arg(default_value = COPIED_FILE_NAME)]
    pub destination: String,
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Lists the objects in a bucket.")]
pub struct ListArgs {
    #[arg(default_value = DEFAULT_BUCKET)]
    pub bucket: String,
}

#[derive(Clone, Debug, Parser)]
#[command(version, about = "Lists the objects in a bucket starting with a prefix.")]
pub struct ListByPrefixArgs {
    #[arg(default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    #[arg(default_value = DEFAULT_PREFIX)]
    pub prefix: String,
}

/// Arguments for the samples operating on a single object.
#[derive(Clone, Debug, Parser)]
#[command(version, about)]
pub struct ObjectArgs {
    #[arg(default_value = DEFAULT_BUCKET)]
    pub bucket: String,

    #[arg(default_value = FILE_NAME)]
    pub object: String,
}
