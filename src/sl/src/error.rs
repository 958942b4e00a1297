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

use std::error::Error as StdError;

type BoxError = Box<dyn StdError + Send + Sync>;

/// A fault returned by the SoftLayer API.
///
/// When an operation fails server-side the API returns a JSON document with
/// the exception class name and a human-readable message:
///
/// ```json
/// {"error": "Unable to find object with id of '999'.",
///  "code": "SoftLayer_Exception_ObjectNotFound"}
/// ```
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct ApiError {
    /// The human-readable message describing the fault.
    #[serde(rename = "error")]
    pub message: String,

    /// The SoftLayer exception class, e.g. `SoftLayer_Exception_ObjectNotFound`.
    #[serde(rename = "code")]
    pub exception: String,

    /// The HTTP status code the fault was delivered with.
    #[serde(skip)]
    pub status_code: Option<u16>,
}

impl ApiError {
    /// Sets the HTTP status code associated with this fault.
    pub fn with_status_code(mut self, status_code: u16) -> Self {
        self.status_code = Some(status_code);
        self
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.exception, self.message)?;
        if let Some(code) = self.status_code {
            write!(f, " (HTTP {code})")?;
        }
        Ok(())
    }
}

/// The core error returned by all client operations.
///
/// Errors come from multiple sources: the service may return a fault, the
/// transport may be unable to complete the request, the request may time out,
/// or the retry policy may be exhausted. Most applications simply return or
/// log the error. Applications that need to interrogate the details can use
/// the predicates and accessors on this type, or walk the error
/// [source][std::error::Error::source] chain.
///
/// # Example
/// ```
/// use softlayer_sl::error::Error;
/// fn handle(result: softlayer_sl::Result<String>) {
///     match result {
///         Err(e) if e.api_error().is_some() => {
///             println!("service fault: {:?}", e.api_error());
///         }
///         Err(e) if e.is_timeout() => println!("not enough time: {e}"),
///         Err(e) => println!("some other error: {e}"),
///         Ok(_) => {}
///     }
/// }
/// ```
#[derive(Debug)]
pub struct Error {
    kind: ErrorKind,
    source: Option<BoxError>,
}

#[derive(Debug)]
enum ErrorKind {
    /// A fault reported by the SoftLayer API.
    Service(Box<ApiError>),
    /// A non-success HTTP response without a decodable fault body.
    Http { status_code: u16, payload: String },
    /// The transport could not send the request or receive the response.
    Io,
    /// The attempt did not complete before its deadline.
    Timeout,
    /// The credentials could not be turned into request headers.
    Authentication,
    /// The request parameters could not be serialized.
    Serialization,
    /// The response body could not be deserialized.
    Deserialization,
    /// The retry policy expired before any attempt succeeded.
    Exhausted,
}

impl Error {
    /// Creates an error from a fault reported by the SoftLayer API.
    pub fn service(fault: ApiError) -> Self {
        Self {
            kind: ErrorKind::Service(Box::new(fault)),
            source: None,
        }
    }

    /// Creates an error from a non-success HTTP response whose body is not a
    /// SoftLayer fault document.
    pub fn http(status_code: u16, payload: String) -> Self {
        Self {
            kind: ErrorKind::Http {
                status_code,
                payload,
            },
            source: None,
        }
    }

    /// Creates an error representing a transport problem.
    pub fn io<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Io,
            source: Some(source.into()),
        }
    }

    /// The request could not be sent, or the response could not be received.
    pub fn is_io(&self) -> bool {
        matches!(self.kind, ErrorKind::Io)
    }

    /// Creates an error representing a timeout.
    pub fn timeout<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Timeout,
            source: Some(source.into()),
        }
    }

    /// The request could not be completed before its deadline.
    ///
    /// Note that the request may or may not have started, and it may or may
    /// not have completed in the service.
    pub fn is_timeout(&self) -> bool {
        matches!(self.kind, ErrorKind::Timeout)
    }

    /// Creates an error representing a credentials problem.
    pub fn authentication<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Authentication,
            source: Some(source.into()),
        }
    }

    /// The credentials could not be converted into request headers.
    pub fn is_authentication(&self) -> bool {
        matches!(self.kind, ErrorKind::Authentication)
    }

    /// Creates an error representing a request serialization problem.
    pub fn ser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Serialization,
            source: Some(source.into()),
        }
    }

    /// The request parameters could not be serialized.
    ///
    /// This is always generated before the request is sent, and it is never
    /// transient: the same inputs fail the same way on every attempt.
    pub fn is_serialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Serialization)
    }

    /// Creates an error representing a response deserialization problem.
    pub fn deser<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Deserialization,
            source: Some(source.into()),
        }
    }

    /// The response could not be deserialized into the expected type.
    pub fn is_deserialization(&self) -> bool {
        matches!(self.kind, ErrorKind::Deserialization)
    }

    /// Creates an error representing an exhausted retry policy.
    pub fn exhausted<T: Into<BoxError>>(source: T) -> Self {
        Self {
            kind: ErrorKind::Exhausted,
            source: Some(source.into()),
        }
    }

    /// The retry policy expired before any attempt succeeded.
    ///
    /// This is always a client-side generated error, but it is usually the
    /// result of one or more errors received from the service. The last such
    /// error is available via [source][std::error::Error::source].
    pub fn is_exhausted(&self) -> bool {
        matches!(self.kind, ErrorKind::Exhausted)
    }

    /// The SoftLayer fault associated with this error, if any.
    ///
    /// # Example
    /// ```
    /// use softlayer_sl::error::{ApiError, Error};
    /// let fault: ApiError = serde_json::from_str(
    ///     r#"{"error": "not found", "code": "SoftLayer_Exception_ObjectNotFound"}"#).unwrap();
    /// let error = Error::service(fault.clone());
    /// assert_eq!(error.api_error(), Some(&fault));
    /// ```
    pub fn api_error(&self) -> Option<&ApiError> {
        match &self.kind {
            ErrorKind::Service(fault) => Some(fault.as_ref()),
            _ => None,
        }
    }

    /// The HTTP status code, if any, associated with this error.
    pub fn http_status_code(&self) -> Option<u16> {
        match &self.kind {
            ErrorKind::Service(fault) => fault.status_code,
            ErrorKind::Http { status_code, .. } => Some(*status_code),
            _ => None,
        }
    }

    /// The raw HTTP payload for errors without a decodable fault body.
    pub fn http_payload(&self) -> Option<&str> {
        match &self.kind {
            ErrorKind::Http { payload, .. } => Some(payload.as_str()),
            _ => None,
        }
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::Service(fault) => write!(f, "the service reported a fault: {fault}"),
            ErrorKind::Http {
                status_code,
                payload,
            } => write!(
                f,
                "the HTTP transport reported status {status_code} with payload {payload:?}"
            ),
            ErrorKind::Io => write!(f, "the request could not be sent or the response received"),
            ErrorKind::Timeout => write!(f, "the request exceeded its deadline"),
            ErrorKind::Authentication => {
                write!(f, "the credentials could not be used for this request")
            }
            ErrorKind::Serialization => write!(f, "the request parameters could not be serialized"),
            ErrorKind::Deserialization => write!(f, "the response could not be deserialized"),
            ErrorKind::Exhausted => write!(f, "the retry policy expired"),
        }
    }
}

impl StdError for Error {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn StdError + 'static))
    }
}
