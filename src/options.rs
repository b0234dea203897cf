use crate::constants::{header, method};

/// Construction-time configuration for [`crate::CorsPolicy`].
///
/// Every field is optional in spirit: leave it at its `Default` value and
/// the policy behaves as the stock configuration below. Overrides use
/// struct-update syntax:
///
/// ```
/// use cors_gate::CorsOptions;
///
/// let options = CorsOptions {
///     allow_origin: "https://app.example.com".into(),
///     allow_credentials: true,
///     ..CorsOptions::default()
/// };
/// ```
///
/// Construction never fails; there is no validation step.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    /// Whether the host should run CORS handling at all.
    pub enabled: bool,
    /// Either the wildcard `"*"` or a single exact origin. Only one
    /// explicit origin (or the wildcard) is supported.
    pub allow_origin: String,
    /// Methods permitted for actual (non-preflight) requests, in the order
    /// they will be emitted in `Access-Control-Allow-Methods`.
    pub allow_methods: Vec<String>,
    /// Request header names the client may send, in emission order.
    pub allow_headers: Vec<String>,
    pub allow_credentials: bool,
    /// The method that identifies a preflight request. Always treated as
    /// allowed by [`crate::CorsPolicy::method_allowed`].
    pub preflight_request_method: String,
    /// Seconds a browser may cache a preflight result; negative disables
    /// caching.
    pub preflight_max_age_seconds: i64,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            allow_origin: "*".into(),
            allow_methods: vec![
                method::HEAD.into(),
                method::GET.into(),
                method::POST.into(),
                method::PUT.into(),
                method::DELETE.into(),
                method::OPTIONS.into(),
            ],
            allow_headers: vec![
                header::ACCEPT.into(),
                header::CONTENT_LENGTH.into(),
                header::CONTENT_TYPE.into(),
                header::LOG_LEVEL.into(),
            ],
            allow_credentials: false,
            preflight_request_method: method::OPTIONS.into(),
            preflight_max_age_seconds: -1,
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
