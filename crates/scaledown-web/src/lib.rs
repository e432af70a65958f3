//! ScaleDown Commerce AI web front-end.
//!
//! Server-rendered home and admin pages behind a shared document layout,
//! plus `/health` and `/metrics` for operations. Pages carry no client-side
//! behaviour; the admin page is a visual placeholder.

pub mod config;
pub mod error;
pub mod metrics;
pub mod middleware;
pub mod pages;
pub mod routes;
pub mod state;
