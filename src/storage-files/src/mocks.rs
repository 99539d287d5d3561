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

use gax::options::RequestOptions as ControlOptions;
use gax::response::Response;
use gcs::Result;
use gcs::model::{
    DeleteObjectRequest, GetObjectRequest, ListObjectsRequest, ListObjectsResponse,
    MoveObjectRequest, Object, ReadObjectRequest, RewriteObjectRequest, RewriteResponse,
    UpdateObjectRequest,
};
use gcs::model_ext::WriteObjectRequest;
use gcs::read_object::ReadObjectResponse;
use gcs::request_options::RequestOptions;
use gcs::streaming_source::{Seek, StreamingSource};
use google_cloud_gax as gax;
use google_cloud_storage as gcs;

mockall::mock! {
    #[derive(Debug)]
    pub Storage {}
    impl gcs::stub::Storage for Storage {
        async fn read_object(&self, _req: ReadObjectRequest, _options: RequestOptions) -> Result<ReadObjectResponse>;
        async fn write_object_buffered<P: StreamingSource + Send + Sync + 'static>(
            &self,
            _payload: P,
            _req: WriteObjectRequest,
            _options: RequestOptions,
        ) -> Result<Object>;
        async fn write_object_unbuffered<P: StreamingSource + Seek + Send + Sync + 'static>(
            &self,
            _payload: P,
            _req: WriteObjectRequest,
            _options: RequestOptions,
        ) -> Result<Object>;
    }
}

mockall::mock! {
    #[derive(Debug)]
    pub StorageControl {}
    impl gcs::stub::StorageControl for StorageControl {
        async fn delete_object(&self, _req: DeleteObjectRequest, _options: ControlOptions) -> gax::Result<Response<()>>;
        async fn get_object(&self, _req: GetObjectRequest, _options: ControlOptions) -> gax::Result<Response<Object>>;
        async fn update_object(&self, _req: UpdateObjectRequest, _options: ControlOptions) -> gax::Result<Response<Object>>;
        async fn list_objects(&self, _req: ListObjectsRequest, _options: ControlOptions) -> gax::Result<Response<ListObjectsResponse>>;
        async fn rewrite_object(&self, _req: RewriteObjectRequest, _options: ControlOptions) -> gax::Result<Response<RewriteResponse>>;
        async fn move_object(&self, _req: MoveObjectRequest, _options: ControlOptions) -> gax::Result<Response<Object>>;
    }
}

pub fn not_found() -> gax::error::Error {
    use gax::error::rpc::{Code, Status};
    gax::error::Error::service(
        Status::default()
            .set_code(Code::NotFound)
            .set_message("No such object"),
    )
}
