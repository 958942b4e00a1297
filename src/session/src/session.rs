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

use crate::credentials::Credentials;
use sl::Result;
use sl::backoff_policy::{BackoffPolicy, BackoffPolicyArg};
use sl::error::{ApiError, Error};
use sl::exponential_backoff::ExponentialBackoff;
use sl::options::Options;
use sl::retry_policy::{RetryPolicy, RetryPolicyArg};
use std::sync::Arc;
use std::time::Duration;

/// The default endpoint for the SoftLayer REST API.
pub const DEFAULT_ENDPOINT: &str = "https://api.softlayer.com/rest/v3.1";

#[derive(Debug)]
struct Inner {
    client: reqwest::Client,
    credentials: Credentials,
    endpoint: String,
    user_agent: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    attempt_timeout: Option<Duration>,
}

/// Dispatches requests to the SoftLayer REST API.
///
/// The session maps each remote call onto the REST endpoint conventions:
/// the service and method become path segments
/// (`SoftLayer_Virtual_Guest/{id}/getObject.json`), the object mask, object
/// filter, and result limit become query parameters, and method parameters
/// travel in the request body as `{"parameters": [...]}`.
///
/// Sessions are cheap to clone and share the connection pool, credentials,
/// and retry configuration.
#[derive(Clone, Debug)]
pub struct Session {
    inner: Arc<Inner>,
}

impl Session {
    /// Creates a builder with the given credentials.
    pub fn builder(credentials: Credentials) -> SessionBuilder {
        SessionBuilder::new(credentials)
    }

    /// The endpoint this session sends requests to.
    pub fn endpoint(&self) -> &str {
        &self.inner.endpoint
    }

    /// Performs a remote call and decodes the response.
    ///
    /// # Parameters
    /// * `service` - the service name, e.g. `SoftLayer_Account`.
    /// * `method` - the remote method name, e.g. `getObject`.
    /// * `params` - the method parameters, if any. The value must serialize
    ///   as a JSON array, typically a tuple with one element per parameter.
    /// * `options` - the per-request options.
    pub async fn request<P, T>(
        &self,
        service: &str,
        method: &str,
        params: Option<&P>,
        options: &Options,
    ) -> Result<T>
    where
        P: serde::Serialize + ?Sized + Sync,
        T: serde::de::DeserializeOwned,
    {
        let verb = http_verb(method, params.is_some());
        let url = self.request_url(service, method, options);
        tracing::debug!(service, method, %verb, "dispatching request");

        let mut builder = self.inner.client.request(verb.clone(), url);
        builder = builder.header(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_str(&self.inner.user_agent).map_err(Error::ser)?,
        );
        for (key, value) in self.inner.credentials.headers()?.iter() {
            builder = builder.header(key, value);
        }
        if let Some(mask) = options.mask() {
            builder = builder.query(&[("objectMask", mask)]);
        }
        if let Some(filter) = options.filter() {
            builder = builder.query(&[("objectFilter", filter)]);
        }
        if let Some(result_limit) = options.result_limit() {
            builder = builder.query(&[("resultLimit", result_limit.as_str())]);
        }
        if let Some(params) = params {
            builder = builder.json(&Parameters { parameters: params });
        }

        let mut options = options.clone();
        if options.attempt_timeout().is_none() {
            if let Some(timeout) = self.inner.attempt_timeout {
                options.set_attempt_timeout(timeout);
            }
        }
        let idempotent = verb == reqwest::Method::GET;
        match self.get_retry_policy(&options) {
            None => self.request_attempt(builder, &options, None).await,
            Some(policy) => self.retry_loop(builder, &options, idempotent, policy).await,
        }
    }

    async fn retry_loop<T: serde::de::DeserializeOwned>(
        &self,
        builder: reqwest::RequestBuilder,
        options: &Options,
        idempotent: bool,
        retry_policy: Arc<dyn RetryPolicy>,
    ) -> Result<T> {
        let backoff = self.get_backoff_policy(options);
        let inner = async move |remaining_time| {
            let builder = builder
                .try_clone()
                .expect("session only creates builders where `try_clone()` succeeds");
            self.request_attempt(builder, options, remaining_time).await
        };
        let sleep = async |d| tokio::time::sleep(d).await;
        sl::retry_loop::retry_loop(inner, sleep, idempotent, retry_policy, backoff).await
    }

    async fn request_attempt<T: serde::de::DeserializeOwned>(
        &self,
        mut builder: reqwest::RequestBuilder,
        options: &Options,
        remaining_time: Option<Duration>,
    ) -> Result<T> {
        builder = sl::retry_loop::effective_timeout(options, remaining_time)
            .into_iter()
            .fold(builder, |b, t| b.timeout(t));
        let response = builder.send().await.map_err(map_send_error)?;
        if !response.status().is_success() {
            return to_fault(response).await;
        }
        to_response(response).await
    }

    fn get_retry_policy(&self, options: &Options) -> Option<Arc<dyn RetryPolicy>> {
        options
            .retry_policy()
            .cloned()
            .or_else(|| self.inner.retry_policy.clone())
    }

    fn get_backoff_policy(&self, options: &Options) -> Arc<dyn BackoffPolicy> {
        options
            .backoff_policy()
            .cloned()
            .or_else(|| self.inner.backoff_policy.clone())
            .unwrap_or_else(|| Arc::new(ExponentialBackoff::default()))
    }

    fn request_url(&self, service: &str, method: &str, options: &Options) -> String {
        match options.id() {
            Some(id) => format!("{}/{service}/{id}/{method}.json", self.inner.endpoint),
            None => format!("{}/{service}/{method}.json", self.inner.endpoint),
        }
    }
}

#[derive(serde::Serialize)]
struct Parameters<'a, P: ?Sized> {
    parameters: &'a P,
}

fn http_verb(method: &str, has_params: bool) -> reqwest::Method {
    match method {
        "deleteObject" => reqwest::Method::DELETE,
        "editObject" | "editObjects" => reqwest::Method::PUT,
        m if m.starts_with("get") && !has_params => reqwest::Method::GET,
        _ => reqwest::Method::POST,
    }
}

fn map_send_error(err: reqwest::Error) -> Error {
    match err {
        e if e.is_timeout() => Error::timeout(e),
        e => Error::io(e),
    }
}

async fn to_fault<T>(response: reqwest::Response) -> Result<T> {
    let status_code = response.status().as_u16();
    let payload = response.text().await.map_err(Error::io)?;
    let error = match serde_json::from_str::<ApiError>(&payload) {
        Ok(fault) => {
            let fault = fault.with_status_code(status_code);
            tracing::warn!(%fault, "the service reported a fault");
            Error::service(fault)
        }
        Err(_) => Error::http(status_code, payload),
    };
    Err(error)
}

async fn to_response<T: serde::de::DeserializeOwned>(response: reqwest::Response) -> Result<T> {
    let body = response.bytes().await.map_err(Error::io)?;
    serde_json::from_slice(&body).map_err(Error::deser)
}

/// A builder for [Session].
///
/// # Example
/// ```
/// use softlayer_session::{Credentials, Session};
/// use std::time::Duration;
///
/// let credentials = Credentials::builder("SL0000001", "api-key").build();
/// let session = Session::builder(credentials)
///     .with_retry_policy(sl::retry_policy::LimitedAttemptCount::new(3))
///     .with_attempt_timeout(Duration::from_secs(30))
///     .build();
/// ```
#[derive(Debug)]
pub struct SessionBuilder {
    credentials: Credentials,
    endpoint: String,
    user_agent: String,
    retry_policy: Option<Arc<dyn RetryPolicy>>,
    backoff_policy: Option<Arc<dyn BackoffPolicy>>,
    attempt_timeout: Option<Duration>,
}

impl SessionBuilder {
    /// Creates a new builder with the given credentials.
    pub fn new(credentials: Credentials) -> Self {
        Self {
            credentials,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: concat!("softlayer-rust/", env!("CARGO_PKG_VERSION")).to_string(),
            retry_policy: None,
            backoff_policy: None,
            attempt_timeout: None,
        }
    }

    /// Changes the endpoint. Useful for private network access through
    /// `https://api.service.softlayer.com/rest/v3.1`, or for testing.
    pub fn with_endpoint<T: Into<String>>(mut self, endpoint: T) -> Self {
        self.endpoint = endpoint.into().trim_end_matches('/').to_string();
        self
    }

    /// Changes the `user-agent` header sent with every request.
    pub fn with_user_agent<T: Into<String>>(mut self, user_agent: T) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Sets the retry policy for all requests on this session.
    ///
    /// Without a retry policy each request is attempted exactly once.
    pub fn with_retry_policy<V: Into<RetryPolicyArg>>(mut self, v: V) -> Self {
        self.retry_policy = Some(v.into().into());
        self
    }

    /// Sets the backoff policy used between retry attempts.
    pub fn with_backoff_policy<V: Into<BackoffPolicyArg>>(mut self, v: V) -> Self {
        self.backoff_policy = Some(v.into().into());
        self
    }

    /// Sets the default per-attempt timeout for all requests.
    pub fn with_attempt_timeout<T: Into<Duration>>(mut self, timeout: T) -> Self {
        self.attempt_timeout = Some(timeout.into());
        self
    }

    /// Returns a [Session] with the configured settings.
    pub fn build(self) -> Session {
        Session {
            inner: Arc::new(Inner {
                client: reqwest::Client::new(),
                credentials: self.credentials,
                endpoint: self.endpoint,
                user_agent: self.user_agent,
                retry_policy: self.retry_policy,
                backoff_policy: self.backoff_policy,
                attempt_timeout: self.attempt_timeout,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("getObject", false, reqwest::Method::GET)]
    #[test_case("getVirtualGuests", false, reqwest::Method::GET)]
    #[test_case("getObject", true, reqwest::Method::POST; "get with params")]
    #[test_case("createObject", true, reqwest::Method::POST)]
    #[test_case("editObject", true, reqwest::Method::PUT)]
    #[test_case("editObjects", true, reqwest::Method::PUT)]
    #[test_case("deleteObject", false, reqwest::Method::DELETE)]
    #[test_case("rebootDefault", false, reqwest::Method::POST)]
    fn verb_mapping(method: &str, has_params: bool, want: reqwest::Method) {
        assert_eq!(http_verb(method, has_params), want);
    }

    #[test]
    fn request_urls() {
        let session = test_session("https://example.com/rest/v3.1");
        let mut options = Options::default();
        assert_eq!(
            session.request_url("SoftLayer_Account", "getObject", &options),
            "https://example.com/rest/v3.1/SoftLayer_Account/getObject.json"
        );
        options.set_id(1234);
        assert_eq!(
            session.request_url("SoftLayer_Virtual_Guest", "getObject", &options),
            "https://example.com/rest/v3.1/SoftLayer_Virtual_Guest/1234/getObject.json"
        );
    }

    #[test]
    fn builder_trims_trailing_slash() {
        let session = test_session("https://example.com/rest/v3.1/");
        assert_eq!(session.endpoint(), "https://example.com/rest/v3.1");
    }

    #[test]
    fn default_endpoint() {
        let credentials = Credentials::builder("user", "key").build();
        let session = Session::builder(credentials).build();
        assert_eq!(session.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn parameters_encode_as_array() {
        let params = (serde_json::json!({"hostname": "web01"}),);
        let body = serde_json::to_value(Parameters { parameters: &params }).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"parameters": [{"hostname": "web01"}]})
        );
    }

    fn test_session(endpoint: &str) -> Session {
        let credentials = Credentials::builder("user", "key").build();
        Session::builder(credentials).with_endpoint(endpoint).build()
    }
}
