//! The `relay` module is responsible for the TCP hand-off between the
//! web process and the persistence process.
//!
//! It defines the wire codec for form-encoded message bodies, the one-shot
//! client used by the web process, and the relay server that decodes
//! incoming frames and forwards complete messages to the document store.

pub mod client;
pub mod codec;
pub mod message;
pub mod server;

pub use message::{Message, Record};
