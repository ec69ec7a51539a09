// Library root: everything the `ladder` binary wires together, exposed so
// integration tests can drive it without a terminal.

pub mod command;
pub mod config;
pub mod repl;
pub mod session;
