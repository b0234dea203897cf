use crate::encoding::EncodedValues;
use crate::options::CorsOptions;

/// CORS policy evaluator configured by [`CorsOptions`].
///
/// Built once at server startup, then queried concurrently by every
/// request worker for the lifetime of the process. Configuration is
/// immutable after construction; the only interior mutation is the
/// one-time population of the encoded-value cache, which is safe behind a
/// shared reference.
pub struct CorsPolicy {
    options: CorsOptions,
    encoded: EncodedValues,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Self {
        Self {
            options,
            encoded: EncodedValues::new(),
        }
    }

    pub fn enabled(&self) -> bool {
        self.options.enabled
    }

    /// The configured origin: `"*"` or a single exact origin.
    pub fn allow_origin(&self) -> &str {
        &self.options.allow_origin
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    /// Whether a request from `origin` is permitted.
    ///
    /// An empty origin never matches: a request without an `Origin` header
    /// is not cross-origin and should not reach this path, so absence is
    /// treated as disallowed. Comparison against the configured origin is
    /// byte-for-byte; browsers send canonicalized origins, so no
    /// normalization happens here.
    pub fn origin_allowed(&self, origin: &str) -> bool {
        if origin.is_empty() {
            return false;
        }
        self.options.allow_origin == "*" || origin == self.options.allow_origin
    }

    /// Whether `method` is permitted.
    ///
    /// The preflight method is always allowed, whether or not it also
    /// appears in the configured list. Method tokens are case-sensitive.
    pub fn method_allowed(&self, method: &str) -> bool {
        !method.is_empty()
            && (method == self.options.preflight_request_method
                || self.options.allow_methods.iter().any(|m| m == method))
    }

    /// Whether every header name in the sequence is permitted.
    ///
    /// Header names compare ASCII-case-insensitively. Vacuously true for
    /// an empty sequence; stops at the first disallowed name.
    pub fn headers_allowed<I, S>(&self, headers: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        headers.into_iter().all(|header| {
            self.options
                .allow_headers
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(header.as_ref()))
        })
    }

    /// Comma-space-joined allow list for `Access-Control-Allow-Methods`.
    pub fn encoded_allow_methods(&self) -> &str {
        self.encoded.allow_methods(&self.options)
    }

    /// Comma-space-joined allow list for `Access-Control-Allow-Headers`.
    pub fn encoded_allow_headers(&self) -> &str {
        self.encoded.allow_headers(&self.options)
    }

    /// `"true"` or `"false"` for `Access-Control-Allow-Credentials`.
    pub fn encoded_allow_credentials(&self) -> &str {
        self.encoded.allow_credentials(&self.options)
    }

    /// Base-10 seconds for `Access-Control-Max-Age`, sign included.
    pub fn encoded_preflight_max_age_seconds(&self) -> &str {
        self.encoded.preflight_max_age_seconds(&self.options)
    }
}

impl Default for CorsPolicy {
    fn default() -> Self {
        Self::new(CorsOptions::default())
    }
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
