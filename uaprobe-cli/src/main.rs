//! entrypoint for uaprobe-cli

#![cfg_attr(docsrs, feature(doc_cfg))]
#![cfg_attr(not(test), warn(clippy::print_stdout, clippy::dbg_macro))]

use clap::{Parser, Subcommand};
use tracing::level_filters::LevelFilter;
use uaprobe::{UserAgentParser, error::BoxError};

pub mod cmd;
use self::cmd::{bot, parse};

pub mod trace;

#[derive(Debug, Parser)]
#[command(name = "uaprobe")]
#[command(bin_name = "uaprobe")]
#[command(version, about, long_about = None)]
struct Cli {
    #[arg(long, short = 'v', global = true)]
    /// log (trace) details about each classification to stderr
    verbose: bool,

    #[arg(long, global = true)]
    /// write logs as json objects instead of human readable lines
    log_json: bool,

    #[arg(
        long,
        global = true,
        env = "UAPROBE_MAX_LENGTH",
        default_value_t = UserAgentParser::new().max_length(),
    )]
    /// the maximum amount of bytes of a User-Agent that is taken into consideration
    ///
    /// (0 = no limit)
    max_length: usize,

    #[command(subcommand)]
    cmds: CliCommands,
}

#[derive(Debug, Subcommand)]
enum CliCommands {
    Parse(parse::CliCommandParse),
    Bot(bot::CliCommandBot),
}

fn main() {
    let cli = Cli::parse();

    #[allow(clippy::exit)]
    if let Err(err) = run(cli) {
        eprintln!("🚩 exit with error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), BoxError> {
    let default_directive = if cli.verbose {
        LevelFilter::TRACE
    } else {
        LevelFilter::WARN
    };
    trace::init_tracing(default_directive, cli.log_json)?;

    let parser = UserAgentParser::new().with_max_length(cli.max_length);
    match cli.cmds {
        CliCommands::Parse(cfg) => parse::run(cfg, parser),
        CliCommands::Bot(cfg) => bot::run(cfg, parser),
    }
}
