//! Browser identification: the ordered name rules and the per-vendor version lookup.
//!
//! Both functions expect the User-Agent to be lowercased already,
//! all token matching is case sensitive.
//!
//! # Rule order
//!
//! Browser vendors copy each others tokens: all Chromium based browsers
//! advertise `applewebkit` and `safari/`, Edge and Opera also advertise `chrome/`,
//! Android WebViews look like Chrome, etc. The rules are therefore evaluated
//! top to bottom with first match wins semantics, and their order is part of the contract:
//! moving a rule changes the outcome for real User-Agents.

use super::{BrowserKind, Version};
use uaprobe_utils::str::{submatch, submatch_any};

/// A single identification rule: a predicate on the lowercased UA
/// and the [`BrowserKind`] it results in.
type Rule = (fn(&str) -> bool, BrowserKind);

/// Rules for User-Agents advertising the `applewebkit` engine token.
const WEBKIT_RULES: &[Rule] = &[
    (|ua| submatch(ua, "fb_iab"), BrowserKind::FacebookApp),
    (|ua| submatch(ua, "puffin"), BrowserKind::Puffin),
    (|ua| submatch_any(ua, ["opr/", "opios/"]), BrowserKind::Opera),
    (|ua| submatch(ua, "silk/"), BrowserKind::Silk),
    (
        |ua| submatch_any(ua, ["edge/", "iemobile/", "msie "]),
        BrowserKind::InternetExplorer,
    ),
    // everything above embeds a chrome token as well
    (
        |ua| submatch_any(ua, ["chrome/", "crios/", "chromium/", "crmo/"]),
        BrowserKind::Chrome,
    ),
    (
        |ua| submatch_any(ua, ["ucbrowser/", "ucweb/"]),
        BrowserKind::UCBrowser,
    ),
    // Android >= 4.4 WebViews advertise chrome and are reported as Chrome above
    (
        |ua| {
            submatch(ua, "android")
                && !submatch(ua, "chrome/")
                && submatch(ua, "version/")
                && !submatch(ua, "like android")
        },
        BrowserKind::Android,
    ),
    (|ua| submatch(ua, "fxios"), BrowserKind::Firefox),
    (|ua| submatch(ua, " spotify/"), BrowserKind::Spotify),
    // safari, unless some esoteric webkit browser (webOSBrowser, SamsungBrowser, ...) is at play
    (
        |ua| {
            submatch(ua, "like gecko")
                && submatch(ua, "mozilla/")
                && !submatch(ua, "linux")
                && !submatch(ua, "android")
                && submatch(ua, "safari/")
                && !submatch(ua, "browser/")
                && !submatch(ua, "os/")
        },
        BrowserKind::Safari,
    ),
    // the Google Search App on iOS renders with the system webview
    (|ua| submatch(ua, " gsa/"), BrowserKind::Safari),
];

/// Rules for all other User-Agents, including webkit ones
/// not matched by any of the [`WEBKIT_RULES`].
const FALLBACK_RULES: &[Rule] = &[
    (
        |ua| submatch_any(ua, ["msie", "trident"]),
        BrowserKind::InternetExplorer,
    ),
    (
        |ua| {
            submatch(ua, "gecko")
                && submatch_any(ua, ["firefox", "iceweasel", "seamonkey", "icecat"])
        },
        BrowserKind::Firefox,
    ),
    (|ua| submatch(ua, "ucbrowser"), BrowserKind::UCBrowser),
    (|ua| submatch(ua, "opera mini"), BrowserKind::OperaMini),
    (|ua| submatch_any(ua, ["presto", "opera"]), BrowserKind::Opera),
    (
        |ua| submatch_any(ua, ["phantomjs", "googlebot"]),
        BrowserKind::Bot,
    ),
];

/// Blackberry UAs read as both MSIE and Safari, so these go first.
const BLACKBERRY_TOKENS: [&str; 4] = ["blackberry", "playbook", "bb10", "rim "];

fn first_match(rules: &[Rule], ua: &str) -> Option<BrowserKind> {
    rules
        .iter()
        .find(|(predicate, _)| predicate(ua))
        .map(|(_, kind)| *kind)
}

/// Identify the browser of a lowercased User-Agent.
///
/// This function is total: unrecognised input,
/// including the empty string, results in [`BrowserKind::Unknown`].
#[must_use]
pub fn classify(ua: &str) -> BrowserKind {
    if submatch_any(ua, BLACKBERRY_TOKENS) {
        return BrowserKind::Blackberry;
    }

    if submatch(ua, "applewebkit")
        && let Some(kind) = first_match(WEBKIT_RULES, ua)
    {
        return kind;
    }

    first_match(FALLBACK_RULES, ua).unwrap_or_default()
}

/// Resolve the browser version of a lowercased User-Agent,
/// for a browser previously identified using [`classify`].
///
/// The `os_version` is only used for [`BrowserKind::Safari`],
/// which does not always advertise a version of its own.
///
/// Returns [`Version::UNKNOWN`] in case no version could be found.
#[must_use]
pub fn resolve_version(ua: &str, kind: BrowserKind, os_version: Version) -> Version {
    // some Android vendors inject a bogus `version/` token into Chrome based UAs
    if !matches!(kind, BrowserKind::Chrome | BrowserKind::OperaMini)
        && let Some(version) = Version::find_after(ua, "version/")
    {
        return version;
    }

    let version = match kind {
        BrowserKind::FacebookApp => find_first(ua, &["fbav/"]),
        BrowserKind::Chrome => find_first(ua, &["chrome/", "crios/", "crmo/"]),
        BrowserKind::InternetExplorer => find_first(ua, &["msie ", "edge/"])
            .or_else(|| Version::find_after(ua, "trident/").map(trident_to_msie)),
        BrowserKind::Firefox => find_first(ua, &["firefox/", "fxios/"]),
        BrowserKind::Safari => Some(safari_from_os(os_version)),
        BrowserKind::UCBrowser => find_first(ua, &["ucbrowser/"]),
        BrowserKind::Opera => find_first(ua, &["opr/", "opios/", "opera/"]),
        BrowserKind::OperaMini => find_first(ua, &["opera mini/"]),
        BrowserKind::Silk => find_first(ua, &["silk/"]),
        BrowserKind::Puffin => find_first(ua, &["puffin/"]),
        BrowserKind::Spotify => find_first(ua, &["spotify/"]),
        BrowserKind::Unknown
        | BrowserKind::Bot
        | BrowserKind::Blackberry
        | BrowserKind::Android => None,
    };
    version.unwrap_or_default()
}

/// Try each token in order, the first one followed by a version wins.
fn find_first(ua: &str, tokens: &[&str]) -> Option<Version> {
    tokens
        .iter()
        .find_map(|token| Version::find_after(ua, token))
}

/// Trident 3 to 7 shipped with MSIE 7 to 11,
/// see <https://en.wikipedia.org/wiki/Trident_(layout_engine)>.
fn trident_to_msie(mut version: Version) -> Version {
    if (3..=7).contains(&version.major) {
        version.major += 4;
    }
    version
}

/// Early Safari releases were numbered one major version ahead of iOS.
fn safari_from_os(mut version: Version) -> Version {
    if (1..=3).contains(&version.major) {
        version.major += 1;
    }
    version
}
