//! Console client that runs smoke checks against a running generator web
//! service and reports whether the service behaves as expected.
//!
//! The checker issues a fixed, sequential list of HTTP checks against one
//! base URL (by default `http://localhost:3000`):
//!
//! 1. `GET /v0` must return `200 OK`. If this check fails the run aborts,
//!    since the remaining checks are meaningless against a service that does
//!    not even serve its base page.
//! 2. `POST /api/generate` with an empty body must return `400`.
//! 3. `POST /api/generate` with only a `prompt` field must return `400`.
//! 4. `POST /api/generate` with a complete payload carrying an invalid API
//!    key must return `500`.
//!
//! The process exits with `0` when every check passed and `1` otherwise.
pub mod checker;
