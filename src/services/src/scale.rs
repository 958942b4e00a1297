// Copyright 2026 the softlayer-rust authors.
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

use sl::Result;

service! {
    /// The `SoftLayer_Scale_Group` service: auto scale groups.
    ScaleGroupService, "SoftLayer_Scale_Group"
}

impl ScaleGroupService {
    /// Retrieves the scale group targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::ScaleGroup> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Creates a scale group from a template.
    pub async fn create_object(
        &self,
        template: &datatypes::ScaleGroup,
    ) -> Result<datatypes::ScaleGroup> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "createObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Edits the targeted scale group.
    pub async fn edit_object(&self, template: &datatypes::ScaleGroup) -> Result<bool> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "editObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Retrieves the status of the targeted group.
    pub async fn get_status(&self) -> Result<datatypes::ScaleGroupStatus> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getStatus", None, &self.options)
            .await
    }

    /// Retrieves the policies attached to the targeted group.
    pub async fn get_policies(&self) -> Result<Vec<datatypes::ScalePolicy>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getPolicies", None, &self.options)
            .await
    }

    /// Retrieves the virtual guest members of the targeted group.
    pub async fn get_virtual_guest_members(
        &self,
    ) -> Result<Vec<datatypes::ScaleMemberVirtualGuest>> {
        self.session
            .request::<(), _>(
                Self::SERVICE_NAME,
                "getVirtualGuestMembers",
                None,
                &self.options,
            )
            .await
    }

    /// Grows or shrinks the targeted group by `delta` members.
    pub async fn scale(&self, delta: i32) -> Result<Vec<datatypes::ScaleMember>> {
        self.session
            .request(Self::SERVICE_NAME, "scale", Some(&(delta,)), &self.options)
            .await
    }

    /// Scales the targeted group to exactly `number` members.
    pub async fn scale_to(&self, number: i32) -> Result<Vec<datatypes::ScaleMember>> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "scaleTo",
                Some(&(number,)),
                &self.options,
            )
            .await
    }

    /// Suspends scaling actions on the targeted group.
    pub async fn suspend(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "suspend", None, &self.options)
            .await
    }

    /// Resumes scaling actions on the targeted group.
    pub async fn resume(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "resume", None, &self.options)
            .await
    }
}
