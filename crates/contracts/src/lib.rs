//! Domain types and state machines shared by the Blunk front-end.
//!
//! Nothing in this crate touches the DOM, so every state transition the UI
//! performs can be exercised with plain `cargo test` on the host.

pub mod domain;
pub mod shared;
