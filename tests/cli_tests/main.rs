//! End-to-end tests of the `uaprobe` binary.
//!
//! These build the binary first and are therefore ignored by default,
//! run them using `cargo test -- --ignored`.

mod bot;
mod help;
mod parse;
mod utils;
