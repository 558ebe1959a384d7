//! Ambient request state used by matching and URL generation.

use http::Method;

/// How much of a URL [`UrlGenerator`](crate::engine::UrlGenerator) renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReferenceType {
    /// `/base/models/42`
    #[default]
    AbsolutePath,
    /// `http://example.com/base/models/42`
    AbsoluteUrl,
    /// Path relative to the current path info, e.g. `../models/42`.
    RelativePath,
    /// `//example.com/base/models/42`
    NetworkPath,
}

/// Request context: where the application is mounted and what is being asked.
///
/// The default context is base URL `""`, path info `/`, method `GET`,
/// host `localhost`, scheme `http`, ports 80 and 443.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContext {
    base_url: String,
    path_info: String,
    method: Method,
    host: String,
    scheme: String,
    http_port: u16,
    https_port: u16,
}

impl Default for RequestContext {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            path_info: "/".to_string(),
            method: Method::GET,
            host: "localhost".to_string(),
            scheme: "http".to_string(),
            http_port: 80,
            https_port: 443,
        }
    }
}

impl RequestContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount point of the application. A trailing `/` is dropped.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        self.base_url = base_url.trim_end_matches('/').to_string();
        self
    }

    pub fn with_path_info(mut self, path_info: impl Into<String>) -> Self {
        self.path_info = path_info.into();
        self
    }

    pub fn with_method(mut self, method: Method) -> Self {
        self.method = method;
        self
    }

    /// Host name; normalized to lowercase.
    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into().to_lowercase();
        self
    }

    /// URL scheme; normalized to lowercase.
    pub fn with_scheme(mut self, scheme: impl Into<String>) -> Self {
        self.scheme = scheme.into().to_lowercase();
        self
    }

    pub fn with_http_port(mut self, port: u16) -> Self {
        self.http_port = port;
        self
    }

    pub fn with_https_port(mut self, port: u16) -> Self {
        self.https_port = port;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn path_info(&self) -> &str {
        &self.path_info
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn scheme(&self) -> &str {
        &self.scheme
    }

    pub fn http_port(&self) -> u16 {
        self.http_port
    }

    pub fn https_port(&self) -> u16 {
        self.https_port
    }

    /// Port for the current scheme.
    pub fn port(&self) -> u16 {
        if self.scheme == "https" {
            self.https_port
        } else {
            self.http_port
        }
    }
}
