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
    /// The `SoftLayer_Account` service: the account itself and the
    /// resources owned by it.
    AccountService, "SoftLayer_Account"
}

impl AccountService {
    /// Retrieves the account record.
    pub async fn get_object(&self) -> Result<datatypes::Account> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Retrieves the hardware servers on the account.
    pub async fn get_hardware(&self) -> Result<Vec<datatypes::Hardware>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getHardware", None, &self.options)
            .await
    }

    /// Retrieves the total amount of the next invoice.
    pub async fn get_next_invoice_total_amount(&self) -> Result<f64> {
        self.session
            .request::<(), _>(
                Self::SERVICE_NAME,
                "getNextInvoiceTotalAmount",
                None,
                &self.options,
            )
            .await
    }

    /// Retrieves the open support tickets on the account.
    pub async fn get_open_tickets(&self) -> Result<Vec<datatypes::Ticket>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getOpenTickets", None, &self.options)
            .await
    }

    /// Retrieves the portal users on the account.
    pub async fn get_users(&self) -> Result<Vec<datatypes::UserCustomer>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getUsers", None, &self.options)
            .await
    }

    /// Retrieves the virtual guests on the account.
    pub async fn get_virtual_guests(&self) -> Result<Vec<datatypes::VirtualGuest>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getVirtualGuests", None, &self.options)
            .await
    }
}
