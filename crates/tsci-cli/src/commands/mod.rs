//! Command handlers.  Each module owns one subcommand's use case; no
//! argument parsing happens here.

pub mod completions;
pub mod init;
