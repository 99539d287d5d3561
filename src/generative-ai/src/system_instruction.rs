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

// [START generativeaionvertexai_gemini_system_instruction]
use crate::client::{first_text, model_name};
use google_cloud_aiplatform_v1 as vertexai;
use vertexai::client::PredictionService;
use vertexai::model::{Content, Part};

pub const INSTRUCTIONS: [&str; 2] = [
    "You are a helpful language translator.",
    "Your mission is to translate text in English to French.",
];
pub const PROMPT: &str = "User input: I like bagels.\nAnswer:";

/// The system instruction steers the model for every turn in the request.
///
/// It has no role, the service ignores the field for system instructions.
pub fn system_instruction() -> Content {
    Content::new().set_parts(INSTRUCTIONS.map(|text| Part::new().set_text(text)))
}

pub fn contents() -> Vec<Content> {
    vec![
        Content::new()
            .set_role("user")
            .set_parts([Part::new().set_text(PROMPT)]),
    ]
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
        .set_system_instruction(system_instruction())
        .set_contents(contents())
        .send()
        .await?;

    let text = first_text(&response).ok_or_else(|| anyhow::anyhow!("response has no text"))?;
    println!("{text}");
    Ok(text.to_string())
}
// [END generativeaionvertexai_gemini_system_instruction]
