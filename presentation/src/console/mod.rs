//! Interactive admin console

pub mod repl;

pub use repl::AdminConsole;
