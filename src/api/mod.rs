//! Generation API boundary.
//!
//! The only asynchronous collaborator in the system: a request/response call
//! to a generateContent-style endpoint that accepts a free-text use case and
//! returns a five-section structured prompt as JSON. Everything downstream of
//! this boundary (lint, extract, fill) is pure and local.

mod client;

pub use client::GenerationClient;
