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
    /// The `SoftLayer_User_Customer` service: portal users.
    UserCustomerService, "SoftLayer_User_Customer"
}

impl UserCustomerService {
    /// Retrieves the user targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::UserCustomer> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Retrieves the API keys belonging to the targeted user.
    pub async fn get_api_authentication_keys(
        &self,
    ) -> Result<Vec<datatypes::ApiAuthenticationKey>> {
        self.session
            .request::<(), _>(
                Self::SERVICE_NAME,
                "getApiAuthenticationKeys",
                None,
                &self.options,
            )
            .await
    }

    /// Generates an API key for the targeted user and returns it. A user
    /// can hold at most one key.
    pub async fn add_api_authentication_key(&self) -> Result<String> {
        self.session
            .request::<(), _>(
                Self::SERVICE_NAME,
                "addApiAuthenticationKey",
                None,
                &self.options,
            )
            .await
    }
}
