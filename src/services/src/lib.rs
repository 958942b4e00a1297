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

//! Service stubs for the SoftLayer API.
//!
//! Each stub pairs a [Session][session::Session] with the per-request
//! options, and exposes one async method per remote operation. The option
//! setters consume and return the stub, so requests chain naturally:
//!
//! ```no_run
//! use session::{Credentials, Session};
//! use softlayer_services::AccountService;
//!
//! async fn list_guests() -> sl::Result<()> {
//!     let session = Session::builder(Credentials::from_env()?).build();
//!     let guests = AccountService::new(session)
//!         .mask("id,hostname,domain")
//!         .limit(10)
//!         .get_virtual_guests()
//!         .await?;
//!     for guest in guests {
//!         println!("{:?} {:?}", guest.id, guest.hostname);
//!     }
//!     Ok(())
//! }
//! ```

/// Defines a service stub: the struct, its constructor, and the chained
/// option setters shared by every service.
macro_rules! service {
    ($(#[$meta:meta])* $name:ident, $remote:literal) => {
        $(#[$meta])*
        #[derive(Clone, Debug)]
        pub struct $name {
            session: ::session::Session,
            options: ::sl::options::Options,
        }

        impl $name {
            /// The remote service name.
            pub const SERVICE_NAME: &'static str = $remote;

            /// Creates a stub on the given session.
            pub fn new(session: ::session::Session) -> Self {
                Self {
                    session,
                    options: ::sl::options::Options::default(),
                }
            }

            /// Targets the object with the given identifier.
            pub fn id(mut self, id: i64) -> Self {
                self.options.set_id(id);
                self
            }

            /// Selects the properties the response should include.
            pub fn mask<T: Into<String>>(mut self, mask: T) -> Self {
                self.options.set_mask(mask);
                self
            }

            /// Restricts relational results with an object filter; see
            /// [filter][::sl::filter] for a builder.
            pub fn filter<T: Into<String>>(mut self, filter: T) -> Self {
                self.options.set_filter(filter);
                self
            }

            /// Limits the number of records returned.
            pub fn limit(mut self, limit: u32) -> Self {
                self.options.set_limit(limit);
                self
            }

            /// Skips the first `offset` records.
            pub fn offset(mut self, offset: u32) -> Self {
                self.options.set_offset(offset);
                self
            }
        }
    };
}

pub mod account;
pub mod dns;
pub mod hardware;
pub mod location;
pub mod product;
pub mod scale;
pub mod ticket;
pub mod user;
pub mod virtual_guest;

pub use account::AccountService;
pub use dns::{DnsDomainResourceRecordService, DnsDomainService};
pub use hardware::HardwareServerService;
pub use location::LocationDatacenterService;
pub use product::{ProductOrderService, ProductPackageService};
pub use scale::ScaleGroupService;
pub use ticket::TicketService;
pub use user::UserCustomerService;
pub use virtual_guest::VirtualGuestService;
