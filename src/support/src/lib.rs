// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Helpers shared by the sample programs.
//!
//! The samples are independent of each other. This crate only holds the
//! plumbing every sample binary repeats, such as the tracing setup and the
//! reporting of the single call each sample makes.

mod error;
mod names;

pub use error::{Error, validate_location};
pub use names::{BUCKET_ID_LENGTH, random_bucket_id, random_id};

use clap::Parser;
use std::ffi::OsString;
use std::io::Write;
use std::process::ExitCode;

/// The environment variable holding the default project id.
pub const PROJECT_ENV: &str = "GOOGLE_CLOUD_PROJECT";

/// Installs a tracing subscriber for the current thread.
///
/// Diagnostics go to standard error, standard output is reserved for the
/// sample results.
pub fn enable_tracing() -> tracing::dispatcher::DefaultGuard {
    use tracing_subscriber::fmt::format::FmtSpan;

    let subscriber = tracing_subscriber::fmt()
        .with_level(true)
        .with_thread_ids(true)
        .with_span_events(FmtSpan::NEW | FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .with_max_level(tracing::Level::INFO)
        .finish();

    tracing::subscriber::set_default(subscriber)
}

/// Returns the process exit status for the outcome of a sample.
pub fn exit_status<T>(result: &anyhow::Result<T>) -> u8 {
    match result {
        Ok(_) => 0,
        Err(_) => 1,
    }
}

/// Reports the outcome of a sample and converts it to an exit code.
///
/// Failures are printed to standard error, including their cause chain. All
/// failures are treated the same way, there is no attempt to classify them.
pub fn report(result: anyhow::Result<()>) -> ExitCode {
    report_to(result, &mut std::io::stderr())
}

/// Like [report], writing the failure message to `output`.
pub fn report_to<W: Write>(result: anyhow::Result<()>, output: &mut W) -> ExitCode {
    let status = exit_status(&result);
    if let Err(e) = result {
        tracing::error!("sample failed: {e:?}");
        // Nothing else can be done if the error cannot be written.
        let _ = writeln!(output, "{e:#}");
    }
    ExitCode::from(status)
}

/// Parses the command-line arguments of a sample.
///
/// Usage errors are returned, so they are reported and exit like any other
/// failure. Requests for `--help` or `--version` print and exit successfully.
pub fn parse_args<A: Parser>() -> anyhow::Result<A> {
    parse_args_from(std::env::args_os())
}

/// Like [parse_args], parsing `argv` instead of the process arguments.
pub fn parse_args_from<A, I, T>(argv: I) -> anyhow::Result<A>
where
    A: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match A::try_parse_from(argv) {
        Ok(args) => Ok(args),
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => Err(e.into()),
    }
}

/// Reads the project id used by the integration tests.
pub fn project_id_from_env() -> anyhow::Result<String> {
    std::env::var(PROJECT_ENV).map_err(|e| anyhow::anyhow!("cannot read {PROJECT_ENV}: {e}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_status_success() {
        let result: anyhow::Result<()> = Ok(());
        assert_eq!(exit_status(&result), 0);
    }

    #[test]
    fn exit_status_failure() {
        let result: anyhow::Result<()> = Err(anyhow::anyhow!("simulated failure"));
        assert_eq!(exit_status(&result), 1);
    }

    #[test]
    fn report_success() {
        let mut output = Vec::new();
        let got = report_to(Ok(()), &mut output);
        assert_eq!(got, ExitCode::SUCCESS);
        assert!(output.is_empty(), "{output:?}");
    }

    #[test]
    fn report_failure() {
        let mut output = Vec::new();
        let err =
            anyhow::anyhow!("Requested entity was not found.").context("cannot delete export");
        let got = report_to(Err(err), &mut output);
        assert_eq!(got, ExitCode::from(1));
        let output = String::from_utf8(output).expect("output is UTF-8");
        assert_eq!(
            output,
            "cannot delete export: Requested entity was not found.\n"
        );
    }

    #[derive(Debug, Parser)]
    struct TestArgs {
        #[arg(default_value = "default-name")]
        name: String,
    }

    #[test]
    fn parse_defaults() -> anyhow::Result<()> {
        let args: TestArgs = parse_args_from(["program"])?;
        assert_eq!(args.name, "default-name");
        Ok(())
    }

    #[test]
    fn parse_usage_error() {
        let got = parse_args_from::<TestArgs, _, _>(["program", "a", "b"]);
        let err = got.unwrap_err();
        assert!(!err.to_string().is_empty(), "{err:?}");

        let mut output = Vec::new();
        assert_eq!(report_to(Err(err), &mut output), ExitCode::from(1));
        assert!(!output.is_empty());
    }
}
