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

//! The `SoftLayer_Dns_Domain` data types.

use time::OffsetDateTime;

/// A DNS zone hosted on the SoftLayer name servers.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomain {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub managed_resource_flag: Option<bool>,

    /// The zone name, e.g. `example.com`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_records: Option<Vec<DnsDomainResourceRecord>>,

    /// The zone serial, derived from the last update date.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub serial: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub soa_resource_record: Option<DnsDomainSoaResourceRecord>,

    #[serde(
        default,
        with = "time::serde::rfc3339::option",
        skip_serializing_if = "Option::is_none"
    )]
    pub update_date: Option<OffsetDateTime>,
}

/// A single record within a DNS zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomainResourceRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,

    /// The record value: an address for `a` records, a host name for
    /// `cname` and `mx` records, arbitrary text for `txt` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain_id: Option<i64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub expire: Option<i32>,

    /// The host, `@` for the zone apex.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub minimum: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mx_priority: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<i32>,

    /// The email of the zone contact, only on `soa` records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub responsible_person: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub retry: Option<i32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub ttl: Option<i32>,

    /// The record type in lower case: `a`, `aaaa`, `cname`, `mx`, `txt`,
    /// `ns`, `soa`, `ptr`, `srv`, or `spf`.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub record_type: Option<String>,
}

/// The SOA record of a zone.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DnsDomainSoaResourceRecord {
    #[serde(flatten)]
    pub record: DnsDomainResourceRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_type_wire_name() -> anyhow::Result<()> {
        let record: DnsDomainResourceRecord = serde_json::from_str(
            r#"{"id": 1, "host": "www", "type": "a", "data": "203.0.113.10", "ttl": 86400}"#,
        )?;
        assert_eq!(record.record_type.as_deref(), Some("a"));

        let got = serde_json::to_value(&record)?;
        assert_eq!(
            got,
            serde_json::json!({
                "id": 1, "host": "www", "type": "a",
                "data": "203.0.113.10", "ttl": 86400
            })
        );
        Ok(())
    }

    #[test]
    fn zone_with_records() -> anyhow::Result<()> {
        let zone: DnsDomain = serde_json::from_str(
            r#"{"id": 5678,
                "name": "example.com",
                "serial": 2026082300,
                "updateDate": "2026-08-23T00:00:00Z",
                "resourceRecords": [
                    {"host": "@", "type": "ns", "data": "ns1.softlayer.com."},
                    {"host": "www", "type": "a", "data": "203.0.113.10"}
                ],
                "soaResourceRecord": {
                    "host": "@", "type": "soa",
                    "responsiblePerson": "admin.example.com."
                }}"#,
        )?;
        assert_eq!(zone.name.as_deref(), Some("example.com"));
        assert_eq!(zone.resource_records.as_ref().map(Vec::len), Some(2));
        let soa = zone.soa_resource_record.unwrap();
        assert_eq!(soa.record.record_type.as_deref(), Some("soa"));
        assert_eq!(
            soa.record.responsible_person.as_deref(),
            Some("admin.example.com.")
        );
        Ok(())
    }
}
