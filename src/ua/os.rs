//! Operating system and platform identification.
//!
//! Like the browser rules these expect a lowercased User-Agent.

use super::{Os, OsKind, PlatformKind, Version};
use uaprobe_utils::str::{submatch, submatch_any};

/// Windows NT kernel versions mapped to their marketing version,
/// e.g. NT 6.1 shipped as Windows 7.
const WINDOWS_NT_VERSIONS: &[(&str, Version)] = &[
    ("windows nt 10.0", Version::new(10, 0, 0)),
    ("windows nt 6.3", Version::new(8, 1, 0)),
    ("windows nt 6.2", Version::new(8, 0, 0)),
    ("windows nt 6.1", Version::new(7, 0, 0)),
    // vista
    ("windows nt 6.0", Version::new(6, 0, 0)),
    // xp (and its 64-bit edition)
    ("windows nt 5.1", Version::new(5, 0, 0)),
    ("windows nt 5.2", Version::new(5, 0, 0)),
    // 2000
    ("windows nt 5.0", Version::new(4, 0, 0)),
];

/// Identify the operating system of a lowercased User-Agent.
#[must_use]
pub fn classify(ua: &str) -> Os {
    let section = platform_section(ua);
    let first_field = section.split(';').next().unwrap_or_default().trim();

    match first_field {
        "android" | "x11" | "linux" => linux_family(ua, section),
        "bb10" | "playbook" => Os::new(
            OsKind::Blackberry,
            PlatformKind::Blackberry,
            Version::UNKNOWN,
        ),
        "ipad" | "iphone" | "ipod" | "ipod touch" => ios(first_field, section),
        "macintosh" => mac(ua),
        _ => classify_loose(ua, section),
    }
}

/// Fallback in case the first field of the platform section is not conclusive.
fn classify_loose(ua: &str, section: &str) -> Os {
    if submatch_any(ua, ["blackberry", "playbook"]) {
        Os::new(
            OsKind::Blackberry,
            PlatformKind::Blackberry,
            Version::UNKNOWN,
        )
    } else if submatch(section, "windows phone ") {
        windows_phone(section)
    } else if submatch(ua, "windows ") {
        windows(ua)
    } else if submatch(ua, "kindle/") {
        Os::new(OsKind::Kindle, PlatformKind::Linux, Version::UNKNOWN)
    } else if submatch(ua, "linux") {
        linux_family(ua, section)
    } else if submatch_any(ua, ["webos", "hpwos"]) {
        Os::new(OsKind::WebOS, PlatformKind::Linux, Version::UNKNOWN)
    } else if submatch(ua, "nintendo") {
        Os::new(OsKind::Nintendo, PlatformKind::Nintendo, Version::UNKNOWN)
    } else if submatch_any(ua, ["playstation", "vita", "psp"]) {
        Os::new(
            OsKind::Playstation,
            PlatformKind::Playstation,
            Version::UNKNOWN,
        )
    } else if submatch(ua, "android") {
        linux_family(ua, section)
    } else if submatch(ua, "cfnetwork") && submatch(ua, "darwin") {
        mac(ua)
    } else {
        Os::default()
    }
}

/// Returns the content of the first parenthesised comment,
/// which is where most UAs advertise their platform.
///
/// The full UA is returned if it has no (well formed) comment.
fn platform_section(ua: &str) -> &str {
    let Some(start) = ua.find('(').map(|i| i + 1) else {
        return ua;
    };
    let rest = ua.get(start..).unwrap_or_default();
    match rest.find(')') {
        Some(end) => rest.get(..end).unwrap_or(rest),
        None => rest,
    }
}

fn linux_family(ua: &str, section: &str) -> Os {
    let (name, version) = if submatch(ua, "android") {
        if submatch_any(ua, ["kindle", "silk/"]) {
            (OsKind::Kindle, Version::UNKNOWN)
        } else {
            let version = Version::find_after(section, "android ")
                .or_else(|| Version::find_after(ua, "android "))
                .unwrap_or_default();
            (OsKind::Android, version)
        }
    } else if submatch(ua, "cros ") {
        (OsKind::ChromeOS, Version::UNKNOWN)
    } else if submatch_any(ua, ["webos", "hpwos"]) {
        (OsKind::WebOS, Version::UNKNOWN)
    } else {
        (OsKind::Linux, Version::UNKNOWN)
    };
    Os::new(name, PlatformKind::Linux, version)
}

fn ios(device: &str, section: &str) -> Os {
    let platform = match device {
        "ipad" => PlatformKind::IPad,
        "iphone" => PlatformKind::IPhone,
        _ => PlatformKind::IPod,
    };
    let version = ["cpu iphone os ", "cpu os ", "iphone os "]
        .into_iter()
        .find_map(|token| Version::find_after(section, token))
        .unwrap_or_default();
    Os::new(OsKind::IOS, platform, version)
}

fn mac(ua: &str) -> Os {
    let version = Version::find_after(ua, "os x ").unwrap_or_default();
    Os::new(OsKind::MacOSX, PlatformKind::Mac, version)
}

fn windows(ua: &str) -> Os {
    if submatch(ua, "xbox") {
        return Os::new(OsKind::Xbox, PlatformKind::Xbox, Version::UNKNOWN);
    }
    let version = WINDOWS_NT_VERSIONS
        .iter()
        .find(|(token, _)| submatch(ua, token))
        .map(|(_, version)| *version)
        .unwrap_or_default();
    Os::new(OsKind::Windows, PlatformKind::Windows, version)
}

fn windows_phone(section: &str) -> Os {
    let version = Version::find_after(section, "windows phone os ")
        .or_else(|| Version::find_after(section, "windows phone "))
        .unwrap_or_default();
    Os::new(OsKind::WindowsPhone, PlatformKind::WindowsPhone, version)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn os(ua: &str) -> Os {
        classify(&ua.to_ascii_lowercase())
    }

    #[test]
    fn test_platform_section() {
        assert_eq!(platform_section("a (b; c) d"), "b; c");
        assert_eq!(platform_section("a (b; c"), "b; c");
        assert_eq!(platform_section("a b c"), "a b c");
        assert_eq!(platform_section("a ) b ( c )"), " c ");
        assert_eq!(platform_section("("), "");
        assert_eq!(platform_section(""), "");
    }

    #[test]
    fn test_empty_and_unknown() {
        assert_eq!(os(""), Os::default());
        assert_eq!(os("CustomAgent/1.0"), Os::default());
    }

    #[test]
    fn test_classify_os() {
        for (ua, expected_os) in [
            (
                "Mozilla/5.0 (iPhone; CPU iPhone OS 9_1 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Version/9.0 Mobile/13B143 Safari/601.1",
                Os::new(OsKind::IOS, PlatformKind::IPhone, Version::new(9, 1, 0)),
            ),
            (
                "Mozilla/5.0 (iPad; CPU OS 9_3_2 like Mac OS X) AppleWebKit/601.1.46 (KHTML, like Gecko) Mobile/13F69 Puffin/4.8.0.2965AP",
                Os::new(OsKind::IOS, PlatformKind::IPad, Version::new(9, 3, 2)),
            ),
            (
                "Mozilla/5.0 (iPod touch; CPU iPhone OS 7_0_3 like Mac OS X) AppleWebKit/537.51.1 (KHTML, like Gecko) Version/7.0 Mobile/11B511 Safari/9537.53",
                Os::new(OsKind::IOS, PlatformKind::IPod, Version::new(7, 0, 3)),
            ),
            (
                "Mozilla/5.0 (iPhone; U; CPU iPhone OS 2_2 like Mac OS X; en-us) AppleWebKit/525.18.1 (KHTML, like Gecko) Mobile/5G77 Safari/525.20",
                Os::new(OsKind::IOS, PlatformKind::IPhone, Version::new(2, 2, 0)),
            ),
            (
                "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
                Os::new(OsKind::MacOSX, PlatformKind::Mac, Version::new(10, 15, 7)),
            ),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0.0.0 Safari/537.36",
                Os::new(OsKind::Windows, PlatformKind::Windows, Version::new(10, 0, 0)),
            ),
            (
                "Mozilla/5.0 (Windows NT 6.1; WOW64; Trident/7.0; rv:11.0) like Gecko",
                Os::new(OsKind::Windows, PlatformKind::Windows, Version::new(7, 0, 0)),
            ),
            (
                "Mozilla/4.0 (compatible; MSIE 8.0; Windows NT 5.1; Trident/4.0)",
                Os::new(OsKind::Windows, PlatformKind::Windows, Version::new(5, 0, 0)),
            ),
            (
                "Mozilla/5.0 (Windows NT 4.0; rv:50.0) Gecko/20100101 Firefox/50.0",
                Os::new(OsKind::Windows, PlatformKind::Windows, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64; Xbox; Xbox One) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/51.0.2704.79 Safari/537.36 Edge/14.14393",
                Os::new(OsKind::Xbox, PlatformKind::Xbox, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (Mobile; Windows Phone 8.1; Android 4.0; ARM; Trident/7.0; Touch; rv:11.0; IEMobile/11.0; NOKIA; Lumia 635) like iPhone OS 7_0_3 Mac OS X AppleWebKit/537 (KHTML, like Gecko) Mobile Safari/537",
                Os::new(OsKind::WindowsPhone, PlatformKind::WindowsPhone, Version::new(8, 1, 0)),
            ),
            (
                "Mozilla/5.0 (compatible; MSIE 9.0; Windows Phone OS 7.5; Trident/5.0; IEMobile/9.0)",
                Os::new(OsKind::WindowsPhone, PlatformKind::WindowsPhone, Version::new(7, 5, 0)),
            ),
            (
                "Mozilla/5.0 (Linux; Android 7.0; SM-G930V Build/NRD90M) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/59.0.3071.125 Mobile Safari/537.36",
                Os::new(OsKind::Android, PlatformKind::Linux, Version::new(7, 0, 0)),
            ),
            (
                "Mozilla/5.0 (Android 4.4; Mobile; rv:41.0) Gecko/41.0 Firefox/41.0",
                Os::new(OsKind::Android, PlatformKind::Linux, Version::new(4, 4, 0)),
            ),
            (
                "Mozilla/5.0 (Linux; U; Android 4.0.3; en-us; KFTT Build/IML74K) AppleWebKit/535.19 (KHTML, like Gecko) Silk/3.4 Mobile Safari/535.19 Silk-Accelerated=true",
                Os::new(OsKind::Kindle, PlatformKind::Linux, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (X11; U; Linux armv7l like Android; en-us) AppleWebKit/531.2+ (KHTML, like Gecko) Version/5.0 Safari/533.2+ Kindle/3.0+",
                Os::new(OsKind::Kindle, PlatformKind::Linux, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (X11; CrOS x86_64 8172.45.0) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/51.0.2704.64 Safari/537.36",
                Os::new(OsKind::ChromeOS, PlatformKind::Linux, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:50.0) Gecko/20100101 Firefox/50.0",
                Os::new(OsKind::Linux, PlatformKind::Linux, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (webOS/1.4.0; U; en-US) AppleWebKit/532.2 (KHTML, like Gecko) Version/1.0 Safari/532.2 Pre/1.1",
                Os::new(OsKind::WebOS, PlatformKind::Linux, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (BB10; Touch) AppleWebKit/537.10+ (KHTML, like Gecko) Version/10.0.9.2372 Mobile Safari/537.10+",
                Os::new(OsKind::Blackberry, PlatformKind::Blackberry, Version::UNKNOWN),
            ),
            (
                "BlackBerry9700/5.0.0.351 Profile/MIDP-2.1 Configuration/CLDC-1.1 VendorID/123",
                Os::new(OsKind::Blackberry, PlatformKind::Blackberry, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (Nintendo WiiU) AppleWebKit/536.30 (KHTML, like Gecko) NX/3.0.4.2.12 NintendoBrowser/4.3.1.11264.US",
                Os::new(OsKind::Nintendo, PlatformKind::Nintendo, Version::UNKNOWN),
            ),
            (
                "Mozilla/5.0 (PlayStation 4 3.11) AppleWebKit/537.73 (KHTML, like Gecko)",
                Os::new(OsKind::Playstation, PlatformKind::Playstation, Version::UNKNOWN),
            ),
            (
                "MyApp/1.0 CFNetwork/758.0.2 Darwin/15.0.0",
                Os::new(OsKind::MacOSX, PlatformKind::Mac, Version::UNKNOWN),
            ),
        ] {
            assert_eq!(os(ua), expected_os, "ua: {ua}");
        }
    }
}
