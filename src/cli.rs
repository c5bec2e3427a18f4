use clap::Parser;
use std::ffi::OsString;

#[derive(Parser, Debug)]
#[command(
    name = "recite",
    version,
    args_override_self = true,
    about = "Recite safety and style rules from the CLAUDE.md hierarchy",
    after_help = "Examples:\n  recite                 # Extract and display rules\n  recite --check-canary  # Also check canary health\n  recite --help          # Show help"
)]
pub struct Cli {
    #[arg(long, help = "Also report canary watchdog health")]
    pub check_canary: bool,
    #[arg(long, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(short, long, help = "Log discovery and matching details to stderr")]
    pub verbose: bool,
}

/// Flags `Cli` understands. Everything else on the command line is dropped.
const KNOWN_FLAGS: &[&str] = &[
    "--check-canary",
    "--json",
    "-v",
    "--verbose",
    "-h",
    "--help",
    "-V",
    "--version",
];

/// Splits argv into (program name + known flags, ignored). Unknown flags and
/// stray positionals never fail the run.
pub fn sanitize_args<I>(args: I) -> (Vec<OsString>, Vec<OsString>)
where
    I: IntoIterator<Item = OsString>,
{
    let mut it = args.into_iter();
    let mut kept: Vec<OsString> = it.next().into_iter().collect();
    let mut ignored = Vec::new();
    for arg in it {
        match arg.to_str() {
            Some(s) if KNOWN_FLAGS.contains(&s) => kept.push(arg),
            _ => ignored.push(arg),
        }
    }
    (kept, ignored)
}

/// Parses the process arguments. `--help` and `--version` exit here, before
/// anything else runs.
pub fn parse() -> (Cli, Vec<OsString>) {
    let (kept, ignored) = sanitize_args(std::env::args_os());
    (Cli::parse_from(kept), ignored)
}
