//! # Postbox
//!
//! `postbox` is a small two-process message board backend built with Rust.
//! A web process serves the static front-end and accepts form submissions,
//! then relays each submission over a local TCP connection to a relay
//! process that persists it as a timestamped document.
//!
//! ## Core Modules
//!
//! The library is structured into several modules, each with a distinct responsibility:
//!
//! - `config`: Handles loading and managing the configuration of both processes.
//! - `relay`: The wire codec, the one-shot relay client and the relay server.
//! - `store`: The document store boundary and its sled-backed implementation.
//! - `web`: The HTTP front-end (static pages plus the submission endpoint).
//! - `utils`: Contains shared utilities, such as error types and logging setup.

pub mod config;
pub mod relay;
pub mod store;
pub mod utils;
pub mod web;

#[cfg(test)]
mod tests;
