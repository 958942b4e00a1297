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

//! The `SoftLayer_Hardware` data types.

use crate::location::Location;
use time::OffsetDateTime;

/// A piece of hardware on the account.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hardware {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hardware_status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub manufacturer_serial_number: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub provision_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial_number: Option<String>,
}

/// A bare metal server. Extends [Hardware] with server-specific properties.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HardwareServer {
    #[serde(flatten)]
    pub hardware: Hardware,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub bare_metal_instance_flag: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub memory_capacity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor_physical_core_amount: Option<i32>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_flattens_hardware_properties() -> anyhow::Result<()> {
        let server: HardwareServer = serde_json::from_str(
            r#"{"id": 42,
                "hostname": "db01",
                "memoryCapacity": 64,
                "datacenter": {"name": "wdc07"}}"#,
        )?;
        assert_eq!(server.hardware.id, Some(42));
        assert_eq!(server.hardware.hostname.as_deref(), Some("db01"));
        assert_eq!(server.memory_capacity, Some(64));
        Ok(())
    }
}
