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

// [START storage_make_public]
use crate::bucket_name;
use google_cloud_storage::client::StorageControl;
use google_cloud_storage::model::{Object, ObjectAccessControl};
use google_cloud_wkt::FieldMask;

pub const ALL_USERS: &str = "allUsers";
pub const READER: &str = "READER";

/// Adds a public read grant to `acl`, unless it is already present.
pub fn with_public_read(mut acl: Vec<ObjectAccessControl>) -> Vec<ObjectAccessControl> {
    if !acl.iter().any(|a| a.entity == ALL_USERS && a.role == READER) {
        acl.push(
            ObjectAccessControl::new()
                .set_entity(ALL_USERS)
                .set_role(READER),
        );
    }
    acl
}

/// Grants read access on an object to all users.
///
/// Fails if the bucket uses uniform bucket-level access, where object ACLs
/// are disabled.
pub async fn sample(client: &StorageControl, bucket: &str, object: &str) -> anyhow::Result<Object> {
    let current = client
        .get_object()
        .set_bucket(bucket_name(bucket))
        .set_object(object)
        .set_read_mask(FieldMask::default().set_paths(["*"]))
        .send()
        .await?;
    let metageneration = current.metageneration;
    let acl = with_public_read(current.acl.clone());

    let updated = client
        .update_object()
        .set_object(current.set_acl(acl))
        .set_if_metageneration_match(metageneration)
        .set_update_mask(FieldMask::default().set_paths(["acl"]))
        .send()
        .await?;
    println!("Made gs://{bucket}/{object} public!");
    Ok(updated)
}
// [END storage_make_public]

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mocks::{MockStorageControl, not_found};
    use google_cloud_gax::response::Response;

    fn owner() -> ObjectAccessControl {
        ObjectAccessControl::new()
            .set_entity("user-owner@example.com")
            .set_role("OWNER")
    }

    #[test]
    fn adds_grant() {
        let got = with_public_read(vec![owner()]);
        assert_eq!(got.len(), 2, "{got:?}");
        assert_eq!(got[0], owner());
        assert_eq!(got[1].entity, ALL_USERS);
        assert_eq!(got[1].role, READER);
    }

    #[test]
    fn keeps_existing_grant() {
        let acl = with_public_read(vec![owner()]);
        let got = with_public_read(acl.clone());
        assert_eq!(got, acl);
    }

    #[tokio::test]
    async fn success() -> anyhow::Result<()> {
        let mut seq = mockall::Sequence::new();
        let mut mock = MockStorageControl::new();
        mock.expect_get_object()
            .withf(|r, _| r.bucket == "projects/_/buckets/my-bucket" && r.object == "test3.txt")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| {
                Ok(Response::from(
                    Object::new()
                        .set_bucket("projects/_/buckets/my-bucket")
                        .set_name("test3.txt")
                        .set_metageneration(7)
                        .set_acl([owner()]),
                ))
            });
        mock.expect_update_object()
            .withf(|r, _| {
                let Some(o) = &r.object else {
                    return false;
                };
                o.name == "test3.txt"
                    && o.acl == with_public_read(vec![owner()])
                    && r.if_metageneration_match == Some(7)
                    && r.update_mask.as_ref().is_some_and(|m| m.paths == ["acl"])
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|r, _| Ok(Response::from(r.object.unwrap_or_default())));
        let client = StorageControl::from_stub(mock);

        let updated = sample(&client, "my-bucket", "test3.txt").await?;
        assert!(
            updated
                .acl
                .iter()
                .any(|a| a.entity == ALL_USERS && a.role == READER),
            "{updated:?}"
        );
        Ok(())
    }

    #[tokio::test]
    async fn get_error() {
        let mut mock = MockStorageControl::new();
        mock.expect_get_object().return_once(|_, _| Err(not_found()));
        mock.expect_update_object().never();
        let client = StorageControl::from_stub(mock);

        let got = sample(&client, "my-bucket", "missing.txt").await;
        assert!(got.is_err(), "{got:?}");
    }

    #[tokio::test]
    async fn update_error() {
        let mut mock = MockStorageControl::new();
        mock.expect_get_object()
            .return_once(|_, _| Ok(Response::from(Object::new().set_name("test3.txt"))));
        mock.expect_update_object().return_once(|_, _| {
            use google_cloud_gax::error::rpc::{Code, Status};
            Err(google_cloud_gax::error::Error::service(
                Status::default()
                    .set_code(Code::FailedPrecondition)
                    .set_message("Cannot use ACL API to update object policy"),
            ))
        });
        let client = StorageControl::from_stub(mock);

        let got = sample(&client, "my-bucket", "test3.txt").await;
        let err = got.unwrap_err();
        assert!(format!("{err:#}").contains("Cannot use ACL API"), "{err:?}");
    }
}
