use crate::options::CorsOptions;
use once_cell::sync::OnceCell;

/// Header values rendered lazily and shared across request workers.
///
/// Each slot is a pure function of the owning policy's configuration,
/// computed on first access and published atomically by the `OnceCell`.
/// Concurrent first readers may render the same string redundantly, but a
/// single value wins and every later read returns it unchanged. Because
/// the cell tracks initialization rather than inspecting the value, an
/// explicitly empty allow list caches its empty rendering like any other.
#[derive(Debug, Default)]
pub(crate) struct EncodedValues {
    allow_methods: OnceCell<String>,
    allow_headers: OnceCell<String>,
    allow_credentials: OnceCell<String>,
    preflight_max_age_seconds: OnceCell<String>,
}

impl EncodedValues {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn allow_methods(&self, options: &CorsOptions) -> &str {
        self.allow_methods
            .get_or_init(|| options.allow_methods.join(", "))
    }

    pub(crate) fn allow_headers(&self, options: &CorsOptions) -> &str {
        self.allow_headers
            .get_or_init(|| options.allow_headers.join(", "))
    }

    pub(crate) fn allow_credentials(&self, options: &CorsOptions) -> &str {
        self.allow_credentials
            .get_or_init(|| options.allow_credentials.to_string())
    }

    pub(crate) fn preflight_max_age_seconds(&self, options: &CorsOptions) -> &str {
        self.preflight_max_age_seconds
            .get_or_init(|| options.preflight_max_age_seconds.to_string())
    }
}

#[cfg(test)]
#[path = "encoding_test.rs"]
mod encoding_test;
