//! HTTP surface for the tasko todo service.
//!
//! [`routes::create_router`] wires the handlers to an [`state::AppState`]
//! holding the injected repository; [`server::Server`] serves it.

pub mod config;
pub mod dto;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod server;
pub mod state;
