//! HTTP/JSON server for the persisted counter.
//!
//! Serves the counter page plus `GET /counter` and `POST /counter`. This
//! crate contains the server framework, API schema types, error handling,
//! configuration, and route definitions; persistence lives in
//! `counter-storage`.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod schema;
pub mod service;
pub mod state;
