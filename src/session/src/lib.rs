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

//! The session and transport layer for the SoftLayer API client.
//!
//! A [Session] holds the credentials, the endpoint, and the HTTP client
//! shared by all service stubs. Sessions are cheap to clone and share the
//! underlying connection pool.
//!
//! # Example
//! ```
//! use softlayer_session::{Credentials, Session};
//!
//! let credentials = Credentials::builder("SL0000001", "api-key").build();
//! let session = Session::builder(credentials).build();
//! ```

pub mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::{DEFAULT_ENDPOINT, Session, SessionBuilder};
