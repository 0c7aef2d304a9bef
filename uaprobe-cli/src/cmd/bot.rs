//! uaprobe bot command

use clap::Args;
use std::io::{self, Write};
use uaprobe::{
    UserAgentParser,
    error::{BoxError, ErrorContext as _},
};

#[derive(Debug, Args)]
/// detect whether User-Agents belong to a bot or a human
pub struct CliCommandBot {
    /// the User-Agents to check
    ///
    /// (read from stdin, one per line, when none are given or for `-`)
    user_agents: Vec<String>,
}

/// run the uaprobe bot command
pub fn run(cfg: CliCommandBot, parser: UserAgentParser) -> Result<(), BoxError> {
    let mut stdout = io::stdout().lock();

    super::for_each_user_agent(cfg.user_agents, |header| {
        let verdict = if parser.parse(header).is_bot() {
            "bot"
        } else {
            "human"
        };
        writeln!(stdout, "{verdict}").context("write bot verdict to stdout")?;
        Ok(())
    })?;

    stdout.flush().context("flush stdout")?;
    Ok(())
}
