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

//! Typed models for the SoftLayer API.
//!
//! Every field is optional: the API only populates the properties the
//! request's object mask selects, and templates sent to the API only carry
//! the properties the caller sets. Unset fields are omitted from the wire.
//!
//! The wire names are the API's camelCase property names; date properties
//! decode from the RFC 3339 timestamps the API produces.

pub mod account;
pub mod billing;
pub mod dns;
pub mod hardware;
pub mod location;
pub mod product;
pub mod scale;
pub mod ticket;
pub mod user;
pub mod virtual_guest;

pub use account::Account;
pub use billing::BillingItem;
pub use dns::{DnsDomain, DnsDomainResourceRecord, DnsDomainSoaResourceRecord};
pub use hardware::{Hardware, HardwareServer};
pub use location::{Location, LocationDatacenter, LocationRegion};
pub use product::{
    ContainerProductOrder, ContainerProductOrderReceipt, ProductItem, ProductItemCategory,
    ProductItemPrice, ProductPackage,
};
pub use scale::{ScaleGroup, ScaleGroupStatus, ScaleMember, ScaleMemberVirtualGuest, ScalePolicy};
pub use ticket::{Ticket, TicketStatus, TicketUpdate};
pub use user::{ApiAuthenticationKey, UserCustomer, UserPermission};
pub use virtual_guest::{PowerState, VirtualDiskImage, VirtualGuest, VirtualGuestBlockDevice};
