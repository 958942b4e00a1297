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
    /// The `SoftLayer_Location_Datacenter` service: the datacenters
    /// resources can be provisioned in.
    LocationDatacenterService, "SoftLayer_Location_Datacenter"
}

impl LocationDatacenterService {
    /// Retrieves the datacenter targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::LocationDatacenter> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Retrieves every datacenter.
    pub async fn get_datacenters(&self) -> Result<Vec<datatypes::Location>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getDatacenters", None, &self.options)
            .await
    }
}
