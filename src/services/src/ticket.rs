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
    /// The `SoftLayer_Ticket` service: support tickets.
    TicketService, "SoftLayer_Ticket"
}

impl TicketService {
    /// Retrieves the ticket targeted by [id][Self::id].
    pub async fn get_object(&self) -> Result<datatypes::Ticket> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getObject", None, &self.options)
            .await
    }

    /// Opens a standard support ticket. The template carries the subject
    /// id and title; `contents` is the body of the first update.
    pub async fn create_standard_ticket(
        &self,
        template: &datatypes::Ticket,
        contents: &str,
    ) -> Result<datatypes::Ticket> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "createStandardTicket",
                Some(&(template, contents)),
                &self.options,
            )
            .await
    }

    /// Posts an update to the targeted ticket.
    pub async fn add_update(
        &self,
        update: &datatypes::TicketUpdate,
    ) -> Result<Vec<datatypes::TicketUpdate>> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "addUpdate",
                Some(&(update,)),
                &self.options,
            )
            .await
    }

    /// Retrieves the updates on the targeted ticket.
    pub async fn get_updates(&self) -> Result<Vec<datatypes::TicketUpdate>> {
        self.session
            .request::<(), _>(Self::SERVICE_NAME, "getUpdates", None, &self.options)
            .await
    }

    /// Replaces the tags on the targeted ticket with a comma separated
    /// list.
    pub async fn set_tags(&self, tags: &str) -> Result<bool> {
        self.session
            .request(
                Self::SERVICE_NAME,
                "setTags",
                Some(&(tags,)),
                &self.options,
            )
            .await
    }
}
