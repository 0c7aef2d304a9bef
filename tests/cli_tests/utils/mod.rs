use std::{
    io::Write,
    process::{Command, Stdio},
};

/// A wrapper around the uaprobe binary.
pub(super) struct UaprobeCli;

impl UaprobeCli {
    fn command() -> Result<Command, Box<dyn std::error::Error>> {
        let command = escargot::CargoBuild::new()
            .package("uaprobe-cli")
            .bin("uaprobe")
            .target_dir("./target/")
            .run()?
            .command();
        Ok(command)
    }

    /// Run any uaprobe cmd, returning its stdout.
    pub(super) fn run(args: Vec<&str>) -> Result<String, Box<dyn std::error::Error>> {
        Self::run_with_env(args, &[])
    }

    /// Run any uaprobe cmd with extra env variables, returning its stdout.
    pub(super) fn run_with_env(
        args: Vec<&str>,
        envs: &[(&str, &str)],
    ) -> Result<String, Box<dyn std::error::Error>> {
        let output = Self::command()?
            .stdout(Stdio::piped())
            .env_remove("UAPROBE_MAX_LENGTH")
            .envs(envs.iter().copied())
            .args(args)
            .output()?;

        assert!(output.status.success());
        let output = String::from_utf8(output.stdout)?;
        Ok(output)
    }

    /// Run any uaprobe cmd with the given stdin, returning its stdout.
    pub(super) fn run_with_stdin(
        args: Vec<&str>,
        stdin: &str,
    ) -> Result<String, Box<dyn std::error::Error>> {
        let mut child = Self::command()?
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .env_remove("UAPROBE_MAX_LENGTH")
            .args(args)
            .spawn()?;

        child
            .stdin
            .take()
            .ok_or("uaprobe stdin not captured")?
            .write_all(stdin.as_bytes())?;

        let output = child.wait_with_output()?;
        assert!(output.status.success());
        let output = String::from_utf8(output.stdout)?;
        Ok(output)
    }
}
