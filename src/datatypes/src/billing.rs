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

//! The `SoftLayer_Billing_Item` data types.

use time::OffsetDateTime;

/// A recurring charge on the account. Cancelling a billing item reclaims
/// the resource it pays for.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillingItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub cancellation_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// The hourly fee as a decimal string, e.g. `".027"`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_recurring_fee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_item_id: Option<i64>,

    /// The monthly fee as a decimal string.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_items_have_no_cancellation_date() -> anyhow::Result<()> {
        let item: BillingItem = serde_json::from_str(
            r#"{"id": 11, "categoryCode": "guest_core", "recurringFee": "17.92"}"#,
        )?;
        assert_eq!(item.cancellation_date, None);
        assert_eq!(item.recurring_fee.as_deref(), Some("17.92"));
        Ok(())
    }
}
