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

use rand::Rng;

/// The maximum length of a bucket id.
pub const BUCKET_ID_LENGTH: usize = 63;

const CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Returns `prefix` followed by random lowercase letters and digits, `length`
/// characters in total.
///
/// The result is just `prefix` if it is already `length` characters or longer.
pub fn random_id(prefix: &str, length: usize) -> String {
    let mut rng = rand::rng();
    let suffix = (prefix.len()..length)
        .map(|_| char::from(CHARSET[rng.random_range(0..CHARSET.len())]));
    prefix.chars().chain(suffix).collect()
}

/// Returns a bucket id for tests, unlikely to collide with existing buckets.
pub fn random_bucket_id() -> String {
    random_id("rust-samples-testing-", BUCKET_ID_LENGTH)
}
