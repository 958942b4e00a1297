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

//! The `SoftLayer_Product_*` data types: the product catalog and ordering
//! containers.
//!
//! Monetary amounts travel as decimal strings on the wire (`"0.0256"`); they
//! are kept as strings here to avoid losing precision.

use crate::hardware::Hardware;
use crate::virtual_guest::VirtualGuest;
use time::OffsetDateTime;

/// A package groups the items that can be ordered together.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPackage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_active: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An orderable item within a package.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ProductItemPrice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,
}

/// A price on an item. Orders reference prices, not items.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemPrice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<ProductItemCategory>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_recurring_fee: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub item_id: Option<i64>,

    /// Prices scoped to a location group; `None` for standard pricing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location_group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub recurring_fee: Option<String>,
}

/// A category a price belongs to, e.g. `ram` or `guest_core`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductItemCategory {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// An order template for `SoftLayer_Product_Order::verifyOrder` and
/// `placeOrder`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrder {
    /// The concrete order container class, e.g.
    /// `SoftLayer_Container_Product_Order_Virtual_Guest`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub complex_type: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware: Option<Vec<Hardware>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub prices: Option<Vec<ProductItemPrice>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub quantity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_hourly_pricing: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guests: Option<Vec<VirtualGuest>>,
}

/// The receipt returned by `placeOrder`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContainerProductOrderReceipt {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<i64>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub order_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_details: Option<ContainerProductOrder>,
}
