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

//! The `SoftLayer_Virtual_Guest` data types.

use crate::billing::BillingItem;
use crate::location::Location;
use time::OffsetDateTime;

/// A virtual server instance.
///
/// The same type doubles as the creation template for
/// `SoftLayer_Virtual_Guest::createObject`: set the properties the order
/// needs (`hostname`, `domain`, `start_cpus`, `max_memory`, ...) and leave
/// the rest unset.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub account_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub billing_item: Option<BillingItem>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_devices: Option<Vec<VirtualGuestBlockDevice>>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub create_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub datacenter: Option<Location>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub dedicated_account_host_only_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub fully_qualified_domain_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hostname: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub hourly_billing_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub local_disk_flag: Option<bool>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_cpu: Option<i32>,

    /// The maximum memory available, in megabytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_memory: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub operating_system_reference_code: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub power_state: Option<PowerState>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_backend_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub primary_ip_address: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub private_network_only_flag: Option<bool>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub provision_date: Option<OffsetDateTime>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_cpus: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

/// The power state of a virtual guest.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PowerState {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A block device attached to a virtual guest.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualGuestBlockDevice {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The device position, e.g. `"0"` for the primary disk.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub device: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub disk_image: Option<VirtualDiskImage>,
}

/// A disk image backing a block device.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VirtualDiskImage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub capacity: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub units: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creation_template_serializes_sparse() -> anyhow::Result<()> {
        let template = VirtualGuest {
            hostname: Some("web01".into()),
            domain: Some("example.com".into()),
            start_cpus: Some(2),
            max_memory: Some(4096),
            hourly_billing_flag: Some(true),
            operating_system_reference_code: Some("UBUNTU_22_64".into()),
            datacenter: Some(Location {
                name: Some("dal13".into()),
                ..Default::default()
            }),
            ..Default::default()
        };
        let got = serde_json::to_value(&template)?;
        assert_eq!(
            got,
            serde_json::json!({
                "hostname": "web01",
                "domain": "example.com",
                "startCpus": 2,
                "maxMemory": 4096,
                "hourlyBillingFlag": true,
                "operatingSystemReferenceCode": "UBUNTU_22_64",
                "datacenter": {"name": "dal13"},
            })
        );
        Ok(())
    }

    #[test]
    fn decodes_masked_response() -> anyhow::Result<()> {
        let guest: VirtualGuest = serde_json::from_str(
            r#"{"id": 99,
                "fullyQualifiedDomainName": "web01.example.com",
                "provisionDate": "2017-01-10T12:00:00Z",
                "powerState": {"keyName": "RUNNING", "name": "Running"},
                "blockDevices": [
                    {"id": 1, "device": "0", "diskImage": {"id": 7, "capacity": 100}}
                ]}"#,
        )?;
        assert_eq!(guest.id, Some(99));
        assert_eq!(
            guest.power_state.as_ref().and_then(|p| p.key_name.as_deref()),
            Some("RUNNING")
        );
        let devices = guest.block_devices.unwrap();
        assert_eq!(devices[0].disk_image.as_ref().and_then(|d| d.capacity), Some(100));
        Ok(())
    }
}
