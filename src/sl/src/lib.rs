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

//! SoftLayer API helpers.
//!
//! This crate contains the types shared by every other crate in the
//! SoftLayer Client Libraries for Rust: the per-request [Options] every
//! service stub carries, the field-mask formatting rules, the object-filter
//! builder, the error model, and the retry/backoff policies used by the
//! session dispatch layer.

/// An alias of [std::result::Result] where the error is always [error::Error].
///
/// This is the result type used by all functions wrapping API operations.
pub type Result<T> = std::result::Result<T, crate::error::Error>;

/// The error types used by the session layer and the generated clients.
pub mod error;

/// Per-request options: object id, field mask, object filter, result limits.
pub mod options;

/// A builder for `objectFilter` expressions.
pub mod filter;

/// Defines the trait implemented by all backoff strategies.
pub mod backoff_policy;

/// Truncated exponential backoff with jitter.
pub mod exponential_backoff;

/// Defines traits for retry policies and some common implementations.
pub mod retry_policy;

/// Retry loop control types.
pub mod retry_result;

/// The retry loop used by the session dispatch call.
pub mod retry_loop;
