use std::io::{self, BufRead as _};

use uaprobe::error::{BoxError, ErrorContext as _};

pub mod bot;
pub mod parse;

/// Argument which makes a command read User-Agents from stdin.
const STDIN_ARG: &str = "-";

/// Calls `f` for each User-Agent given as argument,
/// in order of appearance.
///
/// User-Agents are read from stdin, one per line, when no arguments are given,
/// or in place of each `-` argument. Empty lines are skipped.
fn for_each_user_agent<F>(args: Vec<String>, mut f: F) -> Result<(), BoxError>
where
    F: FnMut(String) -> Result<(), BoxError>,
{
    if args.is_empty() {
        return for_each_stdin_line(&mut f);
    }

    for arg in args {
        if arg == STDIN_ARG {
            for_each_stdin_line(&mut f)?;
        } else {
            f(arg)?;
        }
    }
    Ok(())
}

fn for_each_stdin_line<F>(f: &mut F) -> Result<(), BoxError>
where
    F: FnMut(String) -> Result<(), BoxError>,
{
    for line in io::stdin().lock().lines() {
        let line = line.context("read user agent line from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        f(line)?;
    }
    Ok(())
}
