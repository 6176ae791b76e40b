//! Library components of the `bpdup` command.

pub mod logging;
pub mod pipeline;
pub mod settings;
