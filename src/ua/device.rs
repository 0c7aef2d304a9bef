//! Device form factor identification.

use super::{BrowserKind, DeviceKind, Os, OsKind, PlatformKind};
use uaprobe_utils::str::{submatch, submatch_any};

const TV_TOKENS: [&str; 15] = [
    "smarttv", "smart-tv", "googletv", "appletv", "crkey", "roku", "hbbtv", "netcast", "viera",
    "aquos", "tuner", "vizio", "aftb", "adt-", " tv",
];

/// Identify the device of a lowercased User-Agent,
/// using the [`Os`] and [`BrowserKind`] previously found for it.
#[must_use]
pub fn classify(ua: &str, os: &Os, browser: BrowserKind) -> DeviceKind {
    match os.platform {
        PlatformKind::Windows => {
            return if submatch(ua, "mobile") {
                DeviceKind::Phone
            } else if submatch(ua, "touch") {
                DeviceKind::Tablet
            } else {
                DeviceKind::Computer
            };
        }
        PlatformKind::Mac => return DeviceKind::Computer,
        _ if os.name == OsKind::ChromeOS => return DeviceKind::Computer,
        PlatformKind::IPad | PlatformKind::IPod => return DeviceKind::Tablet,
        _ if submatch_any(ua, ["tablet", "kindle/", "playbook"]) => return DeviceKind::Tablet,
        PlatformKind::IPhone | PlatformKind::Blackberry | PlatformKind::WindowsPhone => {
            return DeviceKind::Phone;
        }
        _ if submatch(ua, "phone") => return DeviceKind::Phone,
        _ => (),
    }

    if submatch_any(ua, TV_TOKENS) {
        return DeviceKind::TV;
    }

    if os.name == OsKind::Android {
        return if submatch(ua, "mobile") {
            DeviceKind::Phone
        } else {
            DeviceKind::Tablet
        };
    }

    if matches!(
        os.platform,
        PlatformKind::Xbox | PlatformKind::Playstation | PlatformKind::Nintendo
    ) {
        return DeviceKind::Console;
    }

    if submatch_any(ua, ["glass", "watch", "sm-v"]) {
        return DeviceKind::Wearable;
    }

    if browser == BrowserKind::Silk || os.name == OsKind::Kindle {
        return DeviceKind::Tablet;
    }

    if submatch_any(ua, ["mobile", "touch", " mobi", "webos"]) {
        return DeviceKind::Phone;
    }

    if matches!(os.name, OsKind::Linux | OsKind::WebOS) {
        return DeviceKind::Computer;
    }

    DeviceKind::Unknown
}
