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

//! End to end checks for the service stubs against a local HTTP server.

use httptest::{Expectation, Server, matchers::*, responders::*};
use serde_json::json;
use session::{Credentials, Session};
use softlayer_services::{
    AccountService, DnsDomainService, ScaleGroupService, TicketService, UserCustomerService,
    VirtualGuestService,
};

type Result = anyhow::Result<()>;

#[tokio::test]
async fn chained_options_become_query_parameters() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("GET", "/SoftLayer_Account/getVirtualGuests.json"),
            request::query(url_decoded(contains(("objectMask", "mask[id,hostname]")))),
            request::query(url_decoded(contains(("resultLimit", "10")))),
        ])
        .respond_with(json_encoded(json!([
            {"id": 99, "hostname": "web01"},
            {"id": 100, "hostname": "web02"}
        ]))),
    );

    let guests = AccountService::new(test_session(&server))
        .mask("id,hostname")
        .limit(10)
        .get_virtual_guests()
        .await?;
    assert_eq!(guests.len(), 2);
    assert_eq!(guests[0].hostname.as_deref(), Some("web01"));
    Ok(())
}

#[tokio::test]
async fn id_targets_the_object() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "DELETE",
            "/SoftLayer_Virtual_Guest/1234/deleteObject.json",
        ))
        .respond_with(json_encoded(json!(true))),
    );

    let deleted = VirtualGuestService::new(test_session(&server))
        .id(1234)
        .delete_object()
        .await?;
    assert!(deleted);
    Ok(())
}

#[tokio::test]
async fn creation_template_travels_in_the_body() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/SoftLayer_Virtual_Guest/createObject.json"),
            request::body(json_decoded(eq(json!({
                "parameters": [{
                    "hostname": "web01",
                    "domain": "example.com",
                    "startCpus": 2,
                    "maxMemory": 4096,
                }]
            })))),
        ])
        .respond_with(json_encoded(json!({"id": 99, "hostname": "web01"}))),
    );

    let template = datatypes::VirtualGuest {
        hostname: Some("web01".into()),
        domain: Some("example.com".into()),
        start_cpus: Some(2),
        max_memory: Some(4096),
        ..Default::default()
    };
    let created = VirtualGuestService::new(test_session(&server))
        .create_object(&template)
        .await?;
    assert_eq!(created.id, Some(99));
    Ok(())
}

#[tokio::test]
async fn record_helpers_pass_positional_parameters() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/SoftLayer_Dns_Domain/5678/createARecord.json"),
            request::body(json_decoded(eq(json!({
                "parameters": ["www", "203.0.113.10", 86400]
            })))),
        ])
        .respond_with(json_encoded(json!({
            "id": 42, "host": "www", "type": "a",
            "data": "203.0.113.10", "ttl": 86400
        }))),
    );

    let record = DnsDomainService::new(test_session(&server))
        .id(5678)
        .create_a_record("www", "203.0.113.10", 86400)
        .await?;
    assert_eq!(record.record_type.as_deref(), Some("a"));
    assert_eq!(record.data.as_deref(), Some("203.0.113.10"));
    Ok(())
}

#[tokio::test]
async fn ticket_updates_decode() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/SoftLayer_Ticket/100/addUpdate.json"),
            request::body(json_decoded(eq(json!({
                "parameters": [{"entry": "Please reboot the server."}]
            })))),
        ])
        .respond_with(json_encoded(json!([
            {"id": 7, "entry": "Please reboot the server.", "ticketId": 100}
        ]))),
    );

    let update = datatypes::TicketUpdate {
        entry: Some("Please reboot the server.".into()),
        ..Default::default()
    };
    let updates = TicketService::new(test_session(&server))
        .id(100)
        .add_update(&update)
        .await?;
    assert_eq!(updates[0].ticket_id, Some(100));
    Ok(())
}

#[tokio::test]
async fn parameterless_post_for_non_getters() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "POST",
            "/SoftLayer_User_Customer/77/addApiAuthenticationKey.json",
        ))
        .respond_with(json_encoded(json!("0123456789abcdef"))),
    );

    let key = UserCustomerService::new(test_session(&server))
        .id(77)
        .add_api_authentication_key()
        .await?;
    assert_eq!(key, "0123456789abcdef");
    Ok(())
}

#[tokio::test]
async fn scale_delta_travels_as_a_positional_parameter() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(all_of![
            request::method_path("POST", "/SoftLayer_Scale_Group/11/scale.json"),
            request::body(json_decoded(eq(json!({"parameters": [3]})))),
        ])
        .respond_with(json_encoded(json!([
            {"id": 201, "scaleGroupId": 11},
            {"id": 202, "scaleGroupId": 11},
            {"id": 203, "scaleGroupId": 11}
        ]))),
    );

    let members = ScaleGroupService::new(test_session(&server))
        .id(11)
        .scale(3)
        .await?;
    assert_eq!(members.len(), 3);
    assert_eq!(members[0].scale_group_id, Some(11));
    Ok(())
}

#[tokio::test]
async fn scale_group_status_decodes() -> Result {
    let server = Server::run();
    server.expect(
        Expectation::matching(request::method_path(
            "GET",
            "/SoftLayer_Scale_Group/11/getStatus.json",
        ))
        .respond_with(json_encoded(json!({"id": 1, "keyName": "ACTIVE", "name": "Active"}))),
    );

    let status = ScaleGroupService::new(test_session(&server))
        .id(11)
        .get_status()
        .await?;
    assert_eq!(status.key_name.as_deref(), Some("ACTIVE"));
    Ok(())
}

fn test_session(server: &Server) -> Session {
    let credentials = Credentials::builder("user", "key").build();
    Session::builder(credentials)
        .with_endpoint(format!("http://{}", server.addr()))
        .build()
}
