//! Top-level parse loop.
//!
//! The driver pulls one top-level construct at a time from the parser and
//! hands it to a [`TopLevelHandler`]. A failed construct produces exactly
//! one `Error: <message>` line on the diagnostics channel, after which the
//! driver skips a token before trying again, so the loop always terminates
//! on finite input.

use std::io::{self, Write};

use tracing::debug;

use crate::{ast::ast::Item, errors::errors::Error, parser::parser::Parser};

/// Consumer of parsed top-level items (code generator, interpreter, printer).
pub trait TopLevelHandler {
    fn handle_item(&mut self, item: Item);

    /// Called after the diagnostic for a failed construct has been written.
    fn handle_error(&mut self, _error: &Error) {}
}

/// Counts of what a run produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub functions: usize,
    pub expressions: usize,
    pub imports: usize,
    pub errors: usize,
}

impl Summary {
    fn record(&mut self, item: &Item) {
        match item {
            Item::Function(_) => self.functions += 1,
            Item::Expression(_) => self.expressions += 1,
            Item::Import(_) => self.imports += 1,
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors > 0
    }
}

pub struct Driver<I> {
    parser: Parser<I>,
}

impl<I: Iterator<Item = char>> Driver<I> {
    pub fn new(parser: Parser<I>) -> Self {
        Driver { parser }
    }

    /// Parses until end of input. Only a failure to write a diagnostic
    /// aborts the run.
    pub fn run<H, W>(&mut self, handler: &mut H, diagnostics: &mut W) -> io::Result<Summary>
    where
        H: TopLevelHandler,
        W: Write,
    {
        let mut summary = Summary::default();

        loop {
            match self.parser.parse_next() {
                Ok(None) => break,
                Ok(Some(item)) => {
                    summary.record(&item);
                    handler.handle_item(item);
                }
                Err(error) => {
                    summary.errors += 1;
                    writeln!(diagnostics, "Error: {}", error)?;
                    handler.handle_error(&error);

                    let failed_at = self.parser.token_index();
                    self.parser.skip_token();
                    debug!(
                        failed_at,
                        resume_at = self.parser.token_index(),
                        "recovering after syntax error"
                    );
                }
            }
        }

        debug!(?summary, "reached end of input");
        Ok(summary)
    }
}
