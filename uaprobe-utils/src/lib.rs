//! utilities crate for uaprobe
//!
//! `uaprobe-utils` contains the low level string utilities used by `uaprobe`,
//! not really being part of the classification rules themselves.

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

#[doc(hidden)]
#[macro_use]
pub mod macros;

pub mod str;
