use std::sync::Arc;

use uaprobe_utils::str::truncate_at_char_boundary;

use super::{
    Browser, DeviceKind, OsKind, PlatformKind, UserAgent, Version, bot, browser, device, os,
};

/// Maximum length of a User Agent string that we take into consideration.
/// This is significantly longer then expected in the wild where at most we observed around 300 characters.
const DEFAULT_MAX_LENGTH: usize = 512;

/// Parser of User-Agent header values into a [`UserAgent`].
///
/// The parser never fails: anything it does not recognise
/// is reported as unknown. Only the first [`max_length`] bytes of
/// the header are taken into consideration.
///
/// [`max_length`]: UserAgentParser::max_length
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserAgentParser {
    max_length: usize,
}

impl Default for UserAgentParser {
    fn default() -> Self {
        Self::new()
    }
}

impl UserAgentParser {
    /// Create a new [`UserAgentParser`] with the default configuration.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            max_length: DEFAULT_MAX_LENGTH,
        }
    }

    /// The maximum amount of bytes of a header value that are parsed,
    /// `0` means there is no limit.
    #[must_use]
    pub const fn max_length(&self) -> usize {
        self.max_length
    }

    /// Set the maximum amount of bytes of a header value that are parsed.
    ///
    /// Use `0` to disable the limit, which is only recommended for trusted input.
    #[must_use]
    pub const fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length;
        self
    }

    /// Set the maximum amount of bytes of a header value that are parsed.
    ///
    /// Use `0` to disable the limit, which is only recommended for trusted input.
    pub fn set_max_length(&mut self, max_length: usize) -> &mut Self {
        self.max_length = max_length;
        self
    }

    /// Parse the User-Agent header value into a [`UserAgent`].
    pub fn parse(&self, header: impl Into<Arc<str>>) -> UserAgent {
        let header = header.into();

        let ua = truncate_at_char_boundary(&header, self.max_length);
        if ua.len() < header.len() {
            tracing::trace!(
                user_agent.length = header.len(),
                user_agent.max_length = self.max_length,
                "user agent truncated before parsing"
            );
        }
        let ua = ua.to_ascii_lowercase();

        let mut os = os::classify(&ua);
        let kind = browser::classify(&ua);
        let version = browser::resolve_version(&ua, kind, os.version);
        let mut device = device::classify(&ua, &os, kind);

        let bot = bot::is_bot(&ua, kind);
        if bot {
            os.name = OsKind::Bot;
            os.platform = PlatformKind::Bot;
            os.version = Version::UNKNOWN;
            device = DeviceKind::Computer;
        }

        let user_agent = UserAgent {
            header,
            browser: Browser { kind, version },
            os,
            device,
            bot,
        };

        tracing::trace!(
            user_agent.original = %user_agent.header,
            user_agent.browser = %user_agent.browser.kind,
            user_agent.browser_version = %user_agent.browser.version,
            user_agent.os = %user_agent.os.name,
            user_agent.platform = %user_agent.os.platform,
            user_agent.device = %user_agent.device,
            user_agent.bot = user_agent.bot,
            "user agent parsed"
        );

        user_agent
    }
}
