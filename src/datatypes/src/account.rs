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

//! The `SoftLayer_Account` data types.

use crate::hardware::Hardware;
use crate::ticket::Ticket;
use crate::user::UserCustomer;
use crate::virtual_guest::VirtualGuest;
use time::OffsetDateTime;

/// A SoftLayer customer account.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// The hardware servers on the account, when the mask selects them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Vec<Hardware>>,

    /// The open tickets on the account, when the mask selects them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub open_tickets: Option<Vec<Ticket>>,

    /// The portal users on the account, when the mask selects them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserCustomer>>,

    /// The virtual guests on the account, when the mask selects them.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guests: Option<Vec<VirtualGuest>>,
}
