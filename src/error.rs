//! Errors raised while taking over or handing back the terminal.

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    /// Raw mode, the alternate screen or the backend could not be set up,
    /// e.g. when stdout is not a terminal.
    #[error("could not initialise the terminal")]
    TerminalSetup(#[source] io::Error),

    #[error("could not restore the terminal")]
    TerminalRestore(#[source] io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn chain_includes_the_io_cause() {
        let err = AppError::TerminalSetup(io::Error::other("not a tty"));
        assert_eq!(err.to_string(), "could not initialise the terminal");

        let chain = format!("{:#}", anyhow::Error::from(err));
        assert_eq!(chain, "could not initialise the terminal: not a tty");
    }
}
