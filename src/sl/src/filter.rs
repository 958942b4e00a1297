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

//! A builder for `objectFilter` expressions.
//!
//! The API filters relational result sets through a nested JSON document
//! whose innermost object names an operation. Writing those documents by
//! hand is error prone; this module builds them from dotted property paths:
//!
//! ```
//! use softlayer_sl::filter;
//! use serde_json::json;
//! let filter = filter::path("virtualGuests.hostname")
//!     .starts_with("web")
//!     .and(filter::path("virtualGuests.maxMemory").gte(4096));
//! let rendered: serde_json::Value = serde_json::from_str(&filter.build()).unwrap();
//! assert_eq!(rendered, json!({
//!     "virtualGuests": {
//!         "hostname": {"operation": "^= web"},
//!         "maxMemory": {"operation": ">= 4096"},
//!     }
//! }));
//! ```

use serde_json::{Value, json};

/// Starts a filter expression on a dotted property path.
pub fn path<S: Into<String>>(path: S) -> Path {
    Path { path: path.into() }
}

/// A property path waiting for a comparison operation.
#[derive(Clone, Debug)]
pub struct Path {
    path: String,
}

impl Path {
    /// Matches records whose property equals `value`.
    pub fn eq<V: Into<Value>>(self, value: V) -> Filter {
        self.leaf(json!({"operation": value.into()}))
    }

    /// Matches records whose property does not equal `value`.
    pub fn not_eq<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("!= {value}"))
    }

    /// Matches records whose property is greater than `value`.
    pub fn gt<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("> {value}"))
    }

    /// Matches records whose property is less than `value`.
    pub fn lt<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("< {value}"))
    }

    /// Matches records whose property is greater than or equal to `value`.
    pub fn gte<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!(">= {value}"))
    }

    /// Matches records whose property is less than or equal to `value`.
    pub fn lte<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("<= {value}"))
    }

    /// Matches records whose property starts with `value`.
    pub fn starts_with<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("^= {value}"))
    }

    /// Matches records whose property ends with `value`.
    pub fn ends_with<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("$= {value}"))
    }

    /// Matches records whose property contains `value`.
    pub fn contains<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("*= {value}"))
    }

    /// Matches records whose property does not contain `value`.
    pub fn not_contains<V: std::fmt::Display>(self, value: V) -> Filter {
        self.operation(format!("!*= {value}"))
    }

    /// Matches records whose property is null.
    pub fn is_null(self) -> Filter {
        self.operation("is null".to_string())
    }

    /// Matches records whose property is not null.
    pub fn not_null(self) -> Filter {
        self.operation("not null".to_string())
    }

    /// Matches records whose property is any of `values`.
    pub fn in_values<V, I>(self, values: I) -> Filter
    where
        V: Into<Value>,
        I: IntoIterator<Item = V>,
    {
        let values = values.into_iter().map(Into::into).collect::<Vec<_>>();
        self.leaf(json!({
            "operation": "in",
            "options": [{"name": "data", "value": values}],
        }))
    }

    fn operation(self, operation: String) -> Filter {
        self.leaf(json!({"operation": operation}))
    }

    fn leaf(self, leaf: Value) -> Filter {
        let mut node = leaf;
        for part in self.path.rsplit('.') {
            node = json!({part: node});
        }
        Filter { root: node }
    }
}

/// A complete filter expression.
#[derive(Clone, Debug)]
pub struct Filter {
    root: Value,
}

impl Filter {
    /// Combines two filters; paths sharing a prefix merge into one subtree.
    pub fn and(mut self, other: Filter) -> Filter {
        merge(&mut self.root, other.root);
        self
    }

    /// Renders the filter as the JSON string the API expects.
    pub fn build(&self) -> String {
        self.root.to_string()
    }
}

impl From<Filter> for String {
    fn from(filter: Filter) -> Self {
        filter.build()
    }
}

fn merge(into: &mut Value, from: Value) {
    match (into, from) {
        (Value::Object(into), Value::Object(from)) => {
            for (key, value) in from {
                match into.entry(key) {
                    serde_json::map::Entry::Occupied(mut existing) => {
                        merge(existing.get_mut(), value);
                    }
                    serde_json::map::Entry::Vacant(slot) => {
                        slot.insert(value);
                    }
                }
            }
        }
        // A path filtered twice keeps the later operation.
        (into, from) => *into = from,
    }
}
