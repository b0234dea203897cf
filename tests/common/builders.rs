use cors_gate::{CorsOptions, CorsPolicy};

#[derive(Default)]
pub struct PolicyBuilder {
    enabled: Option<bool>,
    allow_origin: Option<String>,
    allow_methods: Option<Vec<String>>,
    allow_headers: Option<Vec<String>>,
    allow_credentials: Option<bool>,
    preflight_request_method: Option<String>,
    preflight_max_age_seconds: Option<i64>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = Some(enabled);
        self
    }

    pub fn allow_origin(mut self, origin: impl Into<String>) -> Self {
        self.allow_origin = Some(origin.into());
        self
    }

    pub fn allow_methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_methods = Some(methods.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.allow_headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    pub fn allow_credentials(mut self, enabled: bool) -> Self {
        self.allow_credentials = Some(enabled);
        self
    }

    pub fn preflight_request_method(mut self, method: impl Into<String>) -> Self {
        self.preflight_request_method = Some(method.into());
        self
    }

    pub fn preflight_max_age_seconds(mut self, seconds: i64) -> Self {
        self.preflight_max_age_seconds = Some(seconds);
        self
    }

    pub fn build(self) -> CorsPolicy {
        let CorsOptions {
            enabled: default_enabled,
            allow_origin: default_allow_origin,
            allow_methods: default_allow_methods,
            allow_headers: default_allow_headers,
            allow_credentials: default_allow_credentials,
            preflight_request_method: default_preflight_request_method,
            preflight_max_age_seconds: default_preflight_max_age_seconds,
        } = CorsOptions::default();

        CorsPolicy::new(CorsOptions {
            enabled: self.enabled.unwrap_or(default_enabled),
            allow_origin: self.allow_origin.unwrap_or(default_allow_origin),
            allow_methods: self.allow_methods.unwrap_or(default_allow_methods),
            allow_headers: self.allow_headers.unwrap_or(default_allow_headers),
            allow_credentials: self.allow_credentials.unwrap_or(default_allow_credentials),
            preflight_request_method: self
                .preflight_request_method
                .unwrap_or(default_preflight_request_method),
            preflight_max_age_seconds: self
                .preflight_max_age_seconds
                .unwrap_or(default_preflight_max_age_seconds),
        })
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}
