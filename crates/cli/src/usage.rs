//! Command-line parsing with a dedicated usage exit code

use clap::error::ErrorKind;
use clap::Parser;
use std::ffi::OsString;

/// Exit code for malformed invocations
pub const USAGE_EXIT_CODE: i32 = 100;

/// Parse the process arguments, exiting on usage errors
pub fn parse<P: Parser>() -> P {
    parse_from(std::env::args_os())
}

/// Parse `args`, exiting with [`USAGE_EXIT_CODE`] on usage errors
///
/// `--help` and `--version` still exit 0.
pub fn parse_from<P, I, T>(args: I) -> P
where
    P: Parser,
    I: IntoIterator<Item = T>,
    T: Into<OsString> + Clone,
{
    match P::try_parse_from(args) {
        Ok(parsed) => parsed,
        Err(err) => {
            let code = exit_code(&err);
            // Nothing better to do if stderr is gone
            let _ = err.print();
            std::process::exit(code)
        }
    }
}

/// Exit code for a clap error
pub fn exit_code(err: &clap::Error) -> i32 {
    match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => USAGE_EXIT_CODE,
    }
}
