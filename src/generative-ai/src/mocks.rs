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
use google_cloud_gax as gax;
use vertexai::model::{Candidate, Content, GenerateContentRequest, GenerateContentResponse, Part};

mockall::mock! {
    #[derive(Debug)]
    pub PredictionService {}
    impl vertexai::stub::PredictionService for PredictionService {
        async fn generate_content(&self, req: GenerateContentRequest, _options: gax::options::RequestOptions) -> gax::Result<gax::response::Response<GenerateContentResponse>>;
    }
}

pub fn text_response(text: &str) -> gax::response::Response<GenerateContentResponse> {
    gax::response::Response::from(GenerateContentResponse::new().set_candidates([
        Candidate::new().set_content(
            Content::new()
                .set_role("model")
                .set_parts([Part::new().set_text(text)]),
        ),
    ]))
}

pub fn not_found() -> gax::error::Error {
    use gax::error::rpc::{Code, Status};
    gax::error::Error::service(
        Status::default()
            .set_code(Code::NotFound)
            .set_message("Publisher model not found"),
    )
}
