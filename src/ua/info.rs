use super::{UserAgentParser, Version};
use crate::error::OpaqueError;
use serde::{Deserialize, Deserializer, Serialize};
use std::{convert::Infallible, fmt, str::FromStr, sync::Arc};
use uaprobe_utils::macros::match_ignore_ascii_case_str;

/// User Agent (UA) information.
///
/// See [the module level documentation](crate::ua) for more information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserAgent {
    pub(super) header: Arc<str>,
    pub(super) browser: Browser,
    pub(super) os: Os,
    pub(super) device: DeviceKind,
    pub(super) bot: bool,
}

impl fmt::Display for UserAgent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header)
    }
}

impl UserAgent {
    /// Create a new [`UserAgent`] from a `User-Agent` (header) value,
    /// using the default [`UserAgentParser`].
    pub fn new(header: impl Into<Arc<str>>) -> Self {
        UserAgentParser::new().parse(header)
    }

    /// returns the `User-Agent` (header) value used by the [`UserAgent`].
    #[must_use]
    pub fn header_str(&self) -> &str {
        &self.header
    }

    /// returns the [`Browser`] (kind and version) of the [`UserAgent`].
    #[must_use]
    pub fn browser(&self) -> Browser {
        self.browser
    }

    /// returns the [`BrowserKind`] of the [`UserAgent`].
    #[must_use]
    pub fn browser_kind(&self) -> BrowserKind {
        self.browser.kind
    }

    /// returns the browser [`Version`] of the [`UserAgent`].
    ///
    /// A zero version means the version could not be determined.
    #[must_use]
    pub fn browser_version(&self) -> Version {
        self.browser.version
    }

    /// returns the operating system information of the [`UserAgent`].
    #[must_use]
    pub fn os(&self) -> Os {
        self.os
    }

    /// returns the [`DeviceKind`] on which the [`UserAgent`] operates.
    #[must_use]
    pub fn device(&self) -> DeviceKind {
        self.device
    }

    /// returns `true` if the [`UserAgent`] belongs to a bot, crawler or other automated client.
    #[must_use]
    pub fn is_bot(&self) -> bool {
        self.bot
    }
}

impl FromStr for UserAgent {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::new(s))
    }
}

/// Browser information of a [`UserAgent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Browser {
    /// The kind of browser
    pub kind: BrowserKind,
    /// The version of the browser, zero if unknown
    pub version: Version,
}

/// Operating system information of a [`UserAgent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Os {
    /// The kind of operating system
    pub name: OsKind,
    /// The platform (hardware family) the operating system runs on
    pub platform: PlatformKind,
    /// The version of the operating system, zero if unknown
    pub version: Version,
}

impl Os {
    pub(super) const fn new(name: OsKind, platform: PlatformKind, version: Version) -> Self {
        Self {
            name,
            platform,
            version,
        }
    }
}

/// Implements [`fmt::Display`] and (case insensitive) serde support
/// for an enum which already has an `as_str` method and a [`FromStr`] implementation.
macro_rules! impl_str_enum_traits {
    ($ty:ty) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.as_str())
            }
        }

        impl Serialize for $ty {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: serde::ser::Serializer,
            {
                serializer.serialize_str(self.as_str())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: Deserializer<'de>,
            {
                let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
                s.parse::<Self>().map_err(serde::de::Error::custom)
            }
        }
    };
}

/// The kind of browser identified from a [`UserAgent`].
///
/// This is a closed set: adding a variant is a breaking change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum BrowserKind {
    /// Not recognised
    #[default]
    Unknown,
    /// Google Chrome and other Chromium builds, incl. Chrome for iOS
    Chrome,
    /// Internet Explorer, incl. (legacy) Edge and IE Mobile
    InternetExplorer,
    /// Apple Safari, incl. the Google Search App on iOS
    Safari,
    /// Mozilla Firefox and its Gecko siblings, incl. Firefox for iOS
    Firefox,
    /// Generic (pre-Chromium) Android WebView / stock browser
    Android,
    /// Opera (Presto and Chromium based)
    Opera,
    /// Opera Mini
    OperaMini,
    /// Blackberry browser
    Blackberry,
    /// UC Browser
    UCBrowser,
    /// Amazon Silk
    Silk,
    /// Spotify embedded browser
    Spotify,
    /// Puffin browser
    Puffin,
    /// Facebook in-app browser
    FacebookApp,
    /// Known bot or automation tool
    Bot,
}

impl BrowserKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Chrome => "Chrome",
            Self::InternetExplorer => "IE",
            Self::Safari => "Safari",
            Self::Firefox => "Firefox",
            Self::Android => "Android",
            Self::Opera => "Opera",
            Self::OperaMini => "OperaMini",
            Self::Blackberry => "Blackberry",
            Self::UCBrowser => "UCBrowser",
            Self::Silk => "Silk",
            Self::Spotify => "Spotify",
            Self::Puffin => "Puffin",
            Self::FacebookApp => "FacebookApp",
            Self::Bot => "Bot",
        }
    }
}

impl FromStr for BrowserKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "unknown" => Ok(Self::Unknown),
                "chrome" | "chromium" => Ok(Self::Chrome),
                "ie" | "internetexplorer" | "edge" => Ok(Self::InternetExplorer),
                "safari" => Ok(Self::Safari),
                "firefox" => Ok(Self::Firefox),
                "android" => Ok(Self::Android),
                "opera" => Ok(Self::Opera),
                "operamini" => Ok(Self::OperaMini),
                "blackberry" => Ok(Self::Blackberry),
                "ucbrowser" => Ok(Self::UCBrowser),
                "silk" => Ok(Self::Silk),
                "spotify" => Ok(Self::Spotify),
                "puffin" => Ok(Self::Puffin),
                "facebookapp" => Ok(Self::FacebookApp),
                "bot" => Ok(Self::Bot),
                _ => Err(OpaqueError::from_display(format!("invalid browser kind: {s}"))),
            }
        }
    }
}

impl_str_enum_traits!(BrowserKind);

/// Operating system identified from a [`UserAgent`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum OsKind {
    #[default]
    Unknown,
    WindowsPhone,
    Windows,
    MacOSX,
    IOS,
    Android,
    Blackberry,
    ChromeOS,
    Kindle,
    WebOS,
    Linux,
    Playstation,
    Xbox,
    Nintendo,
    Bot,
}

impl OsKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::WindowsPhone => "WindowsPhone",
            Self::Windows => "Windows",
            Self::MacOSX => "MacOSX",
            Self::IOS => "iOS",
            Self::Android => "Android",
            Self::Blackberry => "Blackberry",
            Self::ChromeOS => "ChromeOS",
            Self::Kindle => "Kindle",
            Self::WebOS => "WebOS",
            Self::Linux => "Linux",
            Self::Playstation => "Playstation",
            Self::Xbox => "Xbox",
            Self::Nintendo => "Nintendo",
            Self::Bot => "Bot",
        }
    }
}

impl FromStr for OsKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "unknown" => Ok(Self::Unknown),
                "windowsphone" => Ok(Self::WindowsPhone),
                "windows" => Ok(Self::Windows),
                "macosx" | "macos" => Ok(Self::MacOSX),
                "ios" => Ok(Self::IOS),
                "android" => Ok(Self::Android),
                "blackberry" => Ok(Self::Blackberry),
                "chromeos" => Ok(Self::ChromeOS),
                "kindle" => Ok(Self::Kindle),
                "webos" => Ok(Self::WebOS),
                "linux" => Ok(Self::Linux),
                "playstation" => Ok(Self::Playstation),
                "xbox" => Ok(Self::Xbox),
                "nintendo" => Ok(Self::Nintendo),
                "bot" => Ok(Self::Bot),
                _ => Err(OpaqueError::from_display(format!("invalid os: {s}"))),
            }
        }
    }
}

impl_str_enum_traits!(OsKind);

/// Hardware platform family on which the [`Os`] runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum PlatformKind {
    #[default]
    Unknown,
    Windows,
    Mac,
    Linux,
    IPad,
    IPhone,
    IPod,
    Blackberry,
    WindowsPhone,
    Playstation,
    Xbox,
    Nintendo,
    Bot,
}

impl PlatformKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Windows => "Windows",
            Self::Mac => "Mac",
            Self::Linux => "Linux",
            Self::IPad => "iPad",
            Self::IPhone => "iPhone",
            Self::IPod => "iPod",
            Self::Blackberry => "Blackberry",
            Self::WindowsPhone => "WindowsPhone",
            Self::Playstation => "Playstation",
            Self::Xbox => "Xbox",
            Self::Nintendo => "Nintendo",
            Self::Bot => "Bot",
        }
    }
}

impl FromStr for PlatformKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "unknown" => Ok(Self::Unknown),
                "windows" => Ok(Self::Windows),
                "mac" => Ok(Self::Mac),
                "linux" => Ok(Self::Linux),
                "ipad" => Ok(Self::IPad),
                "iphone" => Ok(Self::IPhone),
                "ipod" => Ok(Self::IPod),
                "blackberry" => Ok(Self::Blackberry),
                "windowsphone" => Ok(Self::WindowsPhone),
                "playstation" => Ok(Self::Playstation),
                "xbox" => Ok(Self::Xbox),
                "nintendo" => Ok(Self::Nintendo),
                "bot" => Ok(Self::Bot),
                _ => Err(OpaqueError::from_display(format!("invalid platform: {s}"))),
            }
        }
    }
}

impl_str_enum_traits!(PlatformKind);

/// Device category on which the [`UserAgent`] operates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum DeviceKind {
    #[default]
    Unknown,
    /// Desktops and laptops
    Computer,
    Tablet,
    Phone,
    /// Game consoles
    Console,
    /// Watches, glasses and the like
    Wearable,
    /// Smart TVs and TV dongles
    TV,
}

impl DeviceKind {
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Unknown => "Unknown",
            Self::Computer => "Computer",
            Self::Tablet => "Tablet",
            Self::Phone => "Phone",
            Self::Console => "Console",
            Self::Wearable => "Wearable",
            Self::TV => "TV",
        }
    }
}

impl FromStr for DeviceKind {
    type Err = OpaqueError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match_ignore_ascii_case_str! {
            match (s) {
                "unknown" => Ok(Self::Unknown),
                "computer" | "desktop" => Ok(Self::Computer),
                "tablet" => Ok(Self::Tablet),
                "phone" => Ok(Self::Phone),
                "console" => Ok(Self::Console),
                "wearable" => Ok(Self::Wearable),
                "tv" => Ok(Self::TV),
                _ => Err(OpaqueError::from_display(format!("invalid device: {s}"))),
            }
        }
    }
}

impl_str_enum_traits!(DeviceKind);
