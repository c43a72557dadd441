//! HTTP APIs exposed by the server

pub mod rest;

pub use rest::create_router;
