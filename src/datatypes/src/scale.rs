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

//! The `SoftLayer_Scale_*` data types: auto scale groups and their members.

use crate::virtual_guest::VirtualGuest;
use time::OffsetDateTime;

/// An auto scale group.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleGroup {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    /// Seconds the group waits between scaling actions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i32>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub desired_member_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub maximum_member_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum_member_count: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub policies: Option<Vec<ScalePolicy>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub regional_group_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ScaleGroupStatus>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub suspended_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub termination_policy_id: Option<i64>,
}

/// The status of a scale group, e.g. `ACTIVE` or `SUSPENDED`.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleGroupStatus {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A policy that triggers scaling actions on a group.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScalePolicy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub cooldown: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_group_id: Option<i64>,
}

/// A member of a scale group.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMember {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub scale_group_id: Option<i64>,
}

/// A scale group member backed by a virtual guest.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleMemberVirtualGuest {
    #[serde(flatten)]
    pub member: ScaleMember,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guest: Option<VirtualGuest>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub virtual_guest_id: Option<i64>,
}
