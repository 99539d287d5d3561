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

// [START generativeaionvertexai_non_stream_multimodality_basic]
use crate::client::{first_text, model_name};
use google_cloud_aiplatform_v1 as vertexai;
use vertexai::client::PredictionService;
use vertexai::model::{Content, FileData, Part};

pub const VIDEO_URI: &str = "gs://cloud-samples-data/video/animals.mp4";
pub const IMAGE_URI: &str = "gs://cloud-samples-data/generative-ai/image/character.jpg";
pub const PROMPT: &str = "Are this video and image correlated?";

/// The request contents: a video, an image, and a question about both.
pub fn contents() -> Vec<Content> {
    vec![Content::new().set_role("user").set_parts([
        Part::new().set_file_data(
            FileData::new()
                .set_file_uri(VIDEO_URI)
                .set_mime_type("video/mp4"),
        ),
        Part::new().set_file_data(
            FileData::new()
                .set_file_uri(IMAGE_URI)
                .set_mime_type("image/jpeg"),
        ),
        Part::new().set_text(PROMPT),
    ])]
}

pub async fn sample(
    client: &PredictionService,
    project_id: &str,
    location: &str,
    model: &str,
) -> anyhow::Result<String> {
    let response = client
        .generate_content()
        .set_model(model_name(project_id, location, model))
        .set_contents(contents())
        .send()
        .await?;

    let text = first_text(&response).ok_or_else(|| anyhow::anyhow!("response has no text"))?;
    println!("{text}");
    Ok(text.to_string())
}
// [END generativeaionvertexai_non_stream_multimodality_basic]
