//! User Agent (UA) classification.
//!
//! Use [`UserAgent::new`] (or a configured [`UserAgentParser`]) to classify
//! the value of a `User-Agent` header. The result reports:
//!
//! - the [`Browser`]: its [`BrowserKind`] and [`Version`];
//! - the [`Os`]: its [`OsKind`], [`PlatformKind`] and [`Version`];
//! - the [`DeviceKind`];
//! - whether or not the UA belongs to a bot.
//!
//! Classification never fails. Values which cannot be determined
//! are reported as `Unknown`, or as the zero [`Version`].
//!
//! The building blocks used by the parser are exposed as well,
//! in the [`browser`], [`os`], [`device`] and [`bot`] modules.
//! These all operate on an already lowercased UA.
//!
//! # Example
//!
//! ```
//! use uaprobe::ua::{BrowserKind, DeviceKind, OsKind, UserAgent, Version};
//!
//! let ua = UserAgent::new(
//!     "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/58.0.3029.110 Safari/537.36",
//! );
//!
//! assert_eq!(ua.browser_kind(), BrowserKind::Chrome);
//! assert_eq!(ua.browser_version(), Version::new(58, 0, 3029));
//! assert_eq!(ua.os().name, OsKind::Windows);
//! assert_eq!(ua.device(), DeviceKind::Computer);
//! assert!(!ua.is_bot());
//! ```
//!
//! # Remarks
//!
//! Only popular User Agents are classified with care.
//! Browser versions are read from the first vendor token found,
//! and never more than three (`major.minor.patch`) segments are kept.

mod info;
pub use info::{Browser, BrowserKind, DeviceKind, Os, OsKind, PlatformKind, UserAgent};

mod version;
pub use version::Version;

pub mod bot;
pub mod browser;
pub mod device;
pub mod os;

mod parse;
pub use parse::UserAgentParser;
