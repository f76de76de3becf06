// SPDX-License-Identifier: MPL-2.0
//! HTTP client for the employee and department microservices.
//!
//! One async method per backend operation, each returning the decoded
//! response record or a typed [`Error`]. The client performs no validation
//! beyond URL-encoding path keys and has no side effects beyond the network
//! call itself; which host it talks to is decided by the `[backend]` config
//! section, not at runtime.

mod client;
mod error;

pub use client::ApiClient;
pub use error::Error;
