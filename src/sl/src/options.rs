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

//! Per-request options.
//!
//! Every service stub carries an [Options] value. The chained setters on the
//! stubs (`id()`, `mask()`, `filter()`, `limit()`, `offset()`) populate it,
//! and the session dispatch call renders it into the URL path and query
//! string. The options also carry per-request overrides for the ambient
//! timeout and retry configuration, in case one call needs different
//! behavior than the session default.

use crate::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use crate::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// Formats an object-mask string for the `objectMask` query parameter.
///
/// The API expects composite masks wrapped in `mask[...]`. Masks that are
/// already wrapped pass through unchanged, and a bare field name needs no
/// wrapping at all:
///
/// ```
/// use softlayer_sl::options::format_mask;
/// assert_eq!(format_mask("id,hostname"), "mask[id,hostname]");
/// assert_eq!(format_mask("mask[id,hostname]"), "mask[id,hostname]");
/// assert_eq!(format_mask("hostname"), "hostname");
/// assert_eq!(format_mask("items[price]"), "mask[items[price]]");
/// ```
pub fn format_mask(mask: &str) -> String {
    if !mask.starts_with("mask[") && (mask.contains('[') || mask.contains(',')) {
        return format!("mask[{mask}]");
    }
    mask.to_string()
}

/// A set of options configuring a single request.
///
/// Applications rarely use this type directly; the service stubs expose
/// chained setters that populate it.
#[derive(Clone, Debug, Default)]
pub struct Options {
    id: Option<i64>,
    mask: Option<String>,
    filter: Option<String>,
    limit: Option<u32>,
    offset: Option<u32>,
    attempt_timeout: Option<Duration>,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
}

impl Options {
    /// Sets the identifier of the object the request targets.
    ///
    /// The id becomes a path segment: `SoftLayer_Virtual_Guest/{id}/...`.
    pub fn set_id(&mut self, id: i64) {
        self.id = Some(id);
    }

    /// Gets the target object identifier.
    pub fn id(&self) -> Option<i64> {
        self.id
    }

    /// Sets the object mask, applying [format_mask] first.
    pub fn set_mask<T: Into<String>>(&mut self, mask: T) {
        self.mask = Some(format_mask(&mask.into()));
    }

    /// Gets the current object mask.
    pub fn mask(&self) -> Option<&str> {
        self.mask.as_deref()
    }

    /// Sets the object filter. The string must be the nested-JSON filter
    /// syntax the API expects; see [filter][crate::filter] for a builder.
    pub fn set_filter<T: Into<String>>(&mut self, filter: T) {
        self.filter = Some(filter.into());
    }

    /// Gets the current object filter.
    pub fn filter(&self) -> Option<&str> {
        self.filter.as_deref()
    }

    /// Sets the maximum number of records to return.
    pub fn set_limit(&mut self, limit: u32) {
        self.limit = Some(limit);
    }

    /// Gets the current result limit.
    pub fn limit(&self) -> Option<u32> {
        self.limit
    }

    /// Sets the offset of the first record to return.
    pub fn set_offset(&mut self, offset: u32) {
        self.offset = Some(offset);
    }

    /// Gets the current result offset.
    pub fn offset(&self) -> Option<u32> {
        self.offset
    }

    /// Renders the limit and offset for the `resultLimit` query parameter.
    ///
    /// The API accepts either a bare limit (`resultLimit=10`) or an
    /// offset/limit pair (`resultLimit=20,10`). An offset is only meaningful
    /// with a limit, so nothing is rendered until a limit is set.
    pub fn result_limit(&self) -> Option<String> {
        let limit = self.limit?;
        match self.offset {
            None => Some(limit.to_string()),
            Some(offset) => Some(format!("{offset},{limit}")),
        }
    }

    /// Sets the per-attempt timeout for this request.
    ///
    /// When a retry policy is configured this bounds each attempt; the
    /// overall duration is bounded by the retry policy.
    pub fn set_attempt_timeout<T: Into<Duration>>(&mut self, timeout: T) {
        self.attempt_timeout = Some(timeout.into());
    }

    /// Gets the per-attempt timeout.
    pub fn attempt_timeout(&self) -> Option<Duration> {
        self.attempt_timeout
    }

    /// Overrides the session retry policy for this request.
    pub fn set_retry_policy<V: Into<RetryPolicyArg>>(&mut self, v: V) {
        self.retry_policy = Some(v.into().into());
    }

    /// Gets the retry policy override.
    pub fn retry_policy(&self) -> Option<&Arc<dyn RetryPolicy>> {
        self.retry_policy.as_ref()
    }

    /// Overrides the session backoff policy for this request.
    pub fn set_backoff_policy<V: Into<BackoffPolicyArg>>(&mut self, v: V) {
        self.backoff_policy = Some(v.into().into());
    }

    /// Gets the backoff policy override.
    pub fn backoff_policy(&self) -> Option<&Arc<dyn BackoffPolicy>> {
        self.backoff_policy.as_ref()
    }
}
