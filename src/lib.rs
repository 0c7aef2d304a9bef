//! User Agent (UA) classification for the 🦀 Rust language.
//!
//! `uaprobe` classifies the value of a `User-Agent` (http) header into
//! the browser (and its version), the operating system, the device and
//! whether or not the UA belongs to a bot.
//!
//! ```
//! use uaprobe::{UserAgent, ua::BrowserKind};
//!
//! let ua = UserAgent::new(
//!     "Mozilla/5.0 (iPhone; CPU iPhone OS 9_1 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13B143 Safari/601.1",
//! );
//! assert_eq!(ua.browser_kind(), BrowserKind::Safari);
//! assert_eq!(ua.browser_version().to_string(), "9.0.0");
//! ```
//!
//! Classification is fast, allocates only a lowercased copy of the (capped) input
//! and never fails. Learn more in the [`ua`] module.
//!
//! # Binary
//!
//! The `uaprobe` binary (crate `uaprobe-cli`) exposes the classifier on the command line.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

pub mod error;
pub mod ua;

#[doc(inline)]
pub use ua::{UserAgent, UserAgentParser};
