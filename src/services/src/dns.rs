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
    /// The `SoftLayer_Dns_Domain` service: DNS zones hosted on the
    /// SoftLayer name servers.
    DnsDomainService, "SoftLayer_Dns_Domain"
}

impl DnsDomainService {
    /// Retrieves the zone targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::DnsDomain> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Creates a zone, including the default NS and SOA records.
    pub async fn create_object(
        &self,
        template: &datatypes::DnsDomain,
    ) -> Result<datatypes::DnsDomain> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "createObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Deletes the targeted zone and all its records.
    pub async fn delete_object(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "deleteObject", None, &self.options)
            .await
    }

    /// Looks up zones by name. Matches partial names.
    pub async fn get_by_domain_name(&self, name: &str) -> Result<Vec<datatypes::DnsDomain>> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "getByDomainName",
                Some(&(name,)),
                &self.options,
            )
            .await
    }

    /// Retrieves the records of the targeted zone.
    pub async fn get_resource_records(&self) -> Result<Vec<datatypes::DnsDomainResourceRecord>> {
        self.session
            .request::<(), _>(
                Self::SERVICE_NAME,
                "getResourceRecords",
                None,
                &self.options,
            )
            .await
    }

    /// Creates an `a` record in the targeted zone.
    pub async fn create_a_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.create_record("createARecord", host, data, ttl).await
    }

    /// Creates an `aaaa` record in the targeted zone.
    pub async fn create_aaaa_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.create_record("createAaaaRecord", host, data, ttl).await
    }

    /// Creates a `cname` record in the targeted zone.
    pub async fn create_cname_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.create_record("createCnameRecord", host, data, ttl).await
    }

    /// Creates an `mx` record in the targeted zone.
    pub async fn create_mx_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
        mx_priority: i32,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "createMxRecord",
                Some(&(host, data, ttl, mx_priority)),
                &self.options,
            )
            .await
    }

    /// Creates a `txt` record in the targeted zone.
    pub async fn create_txt_record(
        &self,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.create_record("createTxtRecord", host, data, ttl).await
    }

    async fn create_record(
        &self,
        method: &str,
        host: &str,
        data: &str,
        ttl: i32,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.session
            .request(
                Self::SERVICE_NAME,
                method,
                Some(&(host, data, ttl)),
                &self.options,
            )
            .await
    }
}

service! {
    /// The `SoftLayer_Dns_Domain_ResourceRecord` service: individual
    /// records within a zone.
    DnsDomainResourceRecordService, "SoftLayer_Dns_Domain_ResourceRecord"
}

impl DnsDomainResourceRecordService {
    /// Retrieves the record targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::DnsDomainResourceRecord> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Creates a record from a template.
    pub async fn create_object(
        &self,
        template: &datatypes::DnsDomainResourceRecord,
    ) -> Result<datatypes::DnsDomainResourceRecord> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "createObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Edits the targeted record.
    pub async fn edit_object(
        &self,
        template: &datatypes::DnsDomainResourceRecord,
    ) -> Result<bool> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "editObject",
                Some(&(template,)),
                &self.options,
            )
            .await
    }

    /// Deletes the targeted record.
    pub async fn delete_object(&self) -> Result<bool> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "deleteObject", None, &self.options)
            .await
    }
}
