//! The `web` module implements the HTTP front-end.
//!
//! It serves the static entry and confirmation pages, answers unknown paths
//! with the 404 error page, and accepts form submissions on `POST /message`,
//! handing each one to the relay client before redirecting the browser.
//! Static file serving and MIME guessing are delegated to `tower-http`.

pub mod server;

pub use server::{AppState, build_router, start_web_server};
