//! A narrow CORS policy core: holds configuration, answers permission
//! queries, and lazily encodes the header values a response must carry.
//!
//! The crate performs no I/O and parses no HTTP. The host server extracts
//! the `Origin`, `Access-Control-Request-Method`, and
//! `Access-Control-Request-Headers` values, asks [`CorsPolicy`] for
//! verdicts, and writes the encoded strings onto the response.

pub mod constants;
mod encoding;
mod options;
mod policy;

pub use options::CorsOptions;
pub use policy::CorsPolicy;
