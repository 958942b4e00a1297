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

//! [API key] credentials.
//!
//! The SoftLayer API authenticates every request with the account user name
//! and an API key, sent as HTTP basic authentication. When you use API keys
//! in your applications, ensure that they are kept secure during both storage
//! and transmission.
//!
//! [API key]: https://sldn.softlayer.com/article/authenticating-softlayer-api/

use base64::Engine;
use base64::prelude::BASE64_STANDARD;
use http::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use sl::Result;
use sl::error::Error;
use std::sync::Arc;

const USERNAME_ENV: &str = "SL_USERNAME";
const API_KEY_ENV: &str = "SL_API_KEY";
const USERNAME_ENV_ALT: &str = "SOFTLAYER_USERNAME";
const API_KEY_ENV_ALT: &str = "SOFTLAYER_API_KEY";

struct Inner {
    username: String,
    api_key: String,
}

/// The credentials used to authenticate requests.
///
/// Credentials are cheap to clone; all clones share the same user name and
/// API key.
#[derive(Clone)]
pub struct Credentials {
    inner: Arc<Inner>,
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.inner.username)
            .field("api_key", &"[censored]")
            .finish()
    }
}

impl Credentials {
    /// Creates a builder with the given user name and API key.
    ///
    /// # Example
    /// ```
    /// use softlayer_session::Credentials;
    /// let credentials = Credentials::builder("SL0000001", "api-key").build();
    /// ```
    pub fn builder<U: Into<String>, K: Into<String>>(username: U, api_key: K) -> Builder {
        Builder::new(username, api_key)
    }

    /// Creates credentials from the environment.
    ///
    /// Reads `SL_USERNAME` and `SL_API_KEY`, falling back to
    /// `SOFTLAYER_USERNAME` and `SOFTLAYER_API_KEY`. Returns an
    /// authentication error when neither pair is set.
    pub fn from_env() -> Result<Self> {
        let username = std::env::var(USERNAME_ENV)
            .or_else(|_| std::env::var(USERNAME_ENV_ALT))
            .map_err(|_| {
                Error::authentication(format!(
                    "neither {USERNAME_ENV} nor {USERNAME_ENV_ALT} is set"
                ))
            })?;
        let api_key = std::env::var(API_KEY_ENV)
            .or_else(|_| std::env::var(API_KEY_ENV_ALT))
            .map_err(|_| {
                Error::authentication(format!(
                    "neither {API_KEY_ENV} nor {API_KEY_ENV_ALT} is set"
                ))
            })?;
        Ok(Builder::new(username, api_key).build())
    }

    /// The account user name.
    pub fn username(&self) -> &str {
        &self.inner.username
    }

    /// The request headers carrying these credentials.
    ///
    /// The `authorization` header is marked sensitive so it is redacted from
    /// logs and debug output.
    pub fn headers(&self) -> Result<HeaderMap> {
        let encoded =
            BASE64_STANDARD.encode(format!("{}:{}", self.inner.username, self.inner.api_key));
        let mut value = HeaderValue::from_str(&format!("Basic {encoded}"))
            .map_err(Error::authentication)?;
        value.set_sensitive(true);
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, value);
        Ok(headers)
    }
}

/// A builder for [Credentials].
#[derive(Debug)]
pub struct Builder {
    username: String,
    api_key: String,
}

impl Builder {
    /// Creates a new builder with the given user name and API key.
    pub fn new<U: Into<String>, K: Into<String>>(username: U, api_key: K) -> Self {
        Self {
            username: username.into(),
            api_key: api_key.into(),
        }
    }

    /// Returns a [Credentials] instance with the configured settings.
    pub fn build(self) -> Credentials {
        Credentials {
            inner: Arc::new(Inner {
                username: self.username,
                api_key: self.api_key,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;

    type TestResult = anyhow::Result<()>;

    #[test]
    fn debug_redacts_api_key() {
        let credentials = Credentials::builder("SL0000001", "super-secret-api-key").build();
        let fmt = format!("{credentials:?}");
        assert!(!fmt.contains("super-secret-api-key"), "{fmt}");
        assert!(fmt.contains("SL0000001"), "{fmt}");
    }

    #[test]
    fn basic_auth_header() -> TestResult {
        let credentials = Credentials::builder("user", "key").build();
        let headers = credentials.headers()?;
        let value = headers.get(AUTHORIZATION).unwrap();

        assert_eq!(headers.len(), 1, "{headers:?}");
        // base64("user:key")
        assert_eq!(value, HeaderValue::from_static("Basic dXNlcjprZXk="));
        assert!(value.is_sensitive());
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_primary() -> TestResult {
        let _u = ScopedEnv::set(USERNAME_ENV, "env-user");
        let _k = ScopedEnv::set(API_KEY_ENV, "env-key");
        let _ua = ScopedEnv::remove(USERNAME_ENV_ALT);
        let _ka = ScopedEnv::remove(API_KEY_ENV_ALT);

        let credentials = Credentials::from_env()?;
        assert_eq!(credentials.username(), "env-user");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_fallback() -> TestResult {
        let _u = ScopedEnv::remove(USERNAME_ENV);
        let _k = ScopedEnv::remove(API_KEY_ENV);
        let _ua = ScopedEnv::set(USERNAME_ENV_ALT, "alt-user");
        let _ka = ScopedEnv::set(API_KEY_ENV_ALT, "alt-key");

        let credentials = Credentials::from_env()?;
        assert_eq!(credentials.username(), "alt-user");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn from_env_missing() {
        let _u = ScopedEnv::remove(USERNAME_ENV);
        let _k = ScopedEnv::remove(API_KEY_ENV);
        let _ua = ScopedEnv::remove(USERNAME_ENV_ALT);
        let _ka = ScopedEnv::remove(API_KEY_ENV_ALT);

        let err = Credentials::from_env().unwrap_err();
        assert!(err.is_authentication(), "{err:?}");
    }
}
