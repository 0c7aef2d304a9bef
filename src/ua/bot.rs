//! Crawler and automation detection.

use super::BrowserKind;
use uaprobe_utils::str::submatch_any;

/// Tokens advertised by crawlers, monitoring services and HTTP client libraries.
///
/// A plain `bot` only counts when it ends a product token or comment entry,
/// as device names such as `CUBOT X19` carry it too.
const BOT_TOKENS: [&str; 24] = [
    "bot/",
    "bot;",
    "bot)",
    "bot.htm",
    "adsbot",
    "crawl",
    "spider",
    "slurp",
    "facebookexternalhit",
    "mediapartners-google",
    "feedfetcher",
    "ia_archiver",
    "pingdom",
    "phantomjs",
    "headlesschrome",
    "python-requests",
    "curl/",
    "wget/",
    "go-http-client",
    "java/",
    "okhttp",
    "apache-httpclient",
    "scrapy",
    "lighthouse",
];

/// Returns `true` if the lowercased User-Agent belongs to a bot
/// rather than a human operated browser.
#[must_use]
pub fn is_bot(ua: &str, browser: BrowserKind) -> bool {
    browser == BrowserKind::Bot || submatch_any(ua, BOT_TOKENS)
}
