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
    /// The `SoftLayer_Virtual_Guest` service: lifecycle and power
    /// operations on virtual server instances.
    VirtualGuestService, "SoftLayer_Virtual_Guest"
}

impl VirtualGuestService {
    /// Retrieves the virtual guest targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::VirtualGuest> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Orders a new virtual guest from a creation template.
    ///
    /// The returned record carries the provisioning order id; the guest
    /// itself becomes usable once provisioning completes.
    pub async fn create_object(
        &self,
        template: &datatypes::VirtualGuest,
    ) -> Result<datatypes::VirtualGuest> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "createObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Edits the properties of the targeted guest.
    pub async fn edit_object(&self, template: &datatypes::VirtualGuest) -> Result<bool> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "editObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Cancels the targeted guest and reclaims its resources.
    pub async fn delete_object(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "deleteObject", None, &self.options)
            .await
    }

    /// Retrieves the current power state.
    pub async fn get_power_state(&self) -> Result<datatypes::PowerState> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getPowerState", None, &self.options)
            .await
    }

    /// Retrieves the prices for upgrades available to the targeted guest.
    pub async fn get_upgrade_item_prices(
        &self,
        include_downgrades: bool,
    ) -> Result<Vec<datatypes::ProductItemPrice>> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "getUpgradeItemPrices",
                Some(&(include_downgrades,)),
                &self.options,
            )
            .await
    }

    /// Pauses the guest, keeping its state in memory.
    pub async fn pause(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "pause", None, &self.options)
            .await
    }

    /// Powers the guest off immediately.
    pub async fn power_off(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "powerOff", None, &self.options)
            .await
    }

    /// Powers the guest on.
    pub async fn power_on(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "powerOn", None, &self.options)
            .await
    }

    /// Reboots the guest, attempting a graceful shutdown first.
    pub async fn reboot_default(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "rebootDefault", None, &self.options)
            .await
    }

    /// Resumes a paused guest.
    pub async fn resume(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "resume", None, &self.options)
            .await
    }

    /// Replaces the user metadata visible to the guest.
    pub async fn set_user_metadata(&self, metadata: &[String]) -> Result<bool> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "setUserMetadata",
                Some(&(metadata,)),
                &self.options,
            )
            .await
    }
}
