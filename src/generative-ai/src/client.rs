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

use google_cloud_aiplatform_v1 as vertexai;
use vertexai::client::PredictionService;
use vertexai::model::GenerateContentResponse;

/// Returns the regional endpoint for `location`, `None` for the default.
pub fn endpoint(location: &str) -> Option<String> {
    match location {
        "global" => None,
        l => Some(format!("https://{l}-aiplatform.googleapis.com")),
    }
}

/// Creates a client for the Vertex AI prediction service.
///
/// No RPCs are made, credentials are resolved on the first request.
pub async fn make_client(location: &str) -> anyhow::Result<PredictionService> {
    let location = samples_support::validate_location(location)?;
    let builder = PredictionService::builder().with_tracing();
    let builder = match endpoint(location) {
        Some(e) => builder.with_endpoint(e),
        None => builder,
    };
    Ok(builder.build().await?)
}

/// Formats the resource name of a publisher model.
pub fn model_name(project_id: &str, location: &str, model: &str) -> String {
    format!("projects/{project_id}/locations/{location}/publishers/google/models/{model}")
}

/// Returns the text in the first part of the first candidate.
pub fn first_text(response: &GenerateContentResponse) -> Option<&str> {
    response
        .candidates
        .first()?
        .content
        .as_ref()?
        .parts
        .first()?
        .text()
        .map(String::as_str)
}
