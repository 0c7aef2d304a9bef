//! uaprobe parse command

use clap::Args;
use std::io::{self, Write};
use uaprobe::{
    UserAgent, UserAgentParser,
    error::{BoxError, ErrorContext as _},
};

#[derive(Debug, Args)]
/// classify User-Agents: browser, version, os, device and bot
pub struct CliCommandParse {
    /// the User-Agents to classify
    ///
    /// (read from stdin, one per line, when none are given or for `-`)
    user_agents: Vec<String>,

    #[arg(long, short = 'j')]
    /// print the classification of each User-Agent as a json object
    json: bool,

    #[arg(long, short = 'p', requires = "json")]
    /// pretty print the json objects
    pretty: bool,
}

/// run the uaprobe parse command
pub fn run(cfg: CliCommandParse, parser: UserAgentParser) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();

    super::for_each_user_agent(cfg.user_agents, |header| {
        let ua = parser.parse(header);
        if cfg.json {
            write_json(&mut stdout, &ua, cfg.pretty)
        } else {
            write_line(&mut stdout, &ua)
        }
    })?;

    stdout.flush().context("flush stdout")?;
    Ok(())
}

fn write_json(w: &mut impl Write, ua: &UserAgent, pretty: bool) -> Result<(), BoxError> {
    let result = if pretty {
        serde_json::to_writer_pretty(&mut *w, ua)
    } else {
        serde_json::to_writer(&mut *w, ua)
    };
    result.context("serialize user agent as json")?;
    writeln!(w).context("write json to stdout")?;
    Ok(())
}

fn write_line(w: &mut impl Write, ua: &UserAgent) -> Result<(), BoxError> {
    let browser = ua.browser();
    let os = ua.os();
    writeln!(
        w,
        "browser={}/{} os={}/{} platform={} device={} bot={}",
        browser.kind,
        browser.version,
        os.name,
        os.version,
        os.platform,
        ua.device(),
        ua.is_bot(),
    )
    .context("write classification to stdout")?;
    Ok(())
}
