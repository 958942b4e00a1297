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
    /// The `SoftLayer_Hardware_Server` service: bare metal servers.
    HardwareServerService, "SoftLayer_Hardware_Server"
}

impl HardwareServerService {
    /// Retrieves the server targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::HardwareServer> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Retrieves the datacenter the server lives in.
    pub async fn get_datacenter(&self) -> Result<datatypes::Location> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getDatacenter", None, &self.options)
            .await
    }

    /// Powers the server off.
    pub async fn power_off(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "powerOff", None, &self.options)
            .await
    }

    /// Powers the server on.
    pub async fn power_on(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "powerOn", None, &self.options)
            .await
    }

    /// Reboots the server, attempting a graceful shutdown first.
    pub async fn reboot_default(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "rebootDefault", None, &self.options)
            .await
    }
}
