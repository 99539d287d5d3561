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

/// Errors detected while configuring a client, before any RPC is made.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum Error {
    /// The location cannot be used to build an endpoint or a resource name.
    #[error("invalid location {0:?}, locations are lowercase letters, digits, and dashes")]
    InvalidLocation(String),
}

/// Validates a location such as `global` or `us-central1`.
///
/// Locations are interpolated into endpoint host names, so only the
/// characters valid in a DNS label are accepted.
pub fn validate_location(location: &str) -> Result<&str, Error> {
    let valid = !location.is_empty()
        && !location.starts_with('-')
        && !location.ends_with('-')
        && location
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-');
    if valid {
        Ok(location)
    } else {
        Err(Error::InvalidLocation(location.to_string()))
    }
}
