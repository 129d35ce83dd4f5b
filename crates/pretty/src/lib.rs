//! # pretty
//!
//! An indentation-tracking pretty printer. Nodes implement
//! [`PrettyPrintable`] and render themselves through a [`PrettyPrinter`],
//! which tracks indentation levels relative to the enclosing node.

use std::fmt;

/// A node that can render itself through a [`PrettyPrinter`].
pub trait PrettyPrintable {
    fn pretty_print(&self, out: &mut PrettyPrinter<'_>) -> fmt::Result;
}

/// Writer that manages indentation scopes for nested nodes.
///
/// Indentation requested with [`indent`](PrettyPrinter::indent) is relative
/// to the scope of the node being printed; [`print_node`](PrettyPrinter::print_node)
/// opens a new scope at the current absolute level. Pending newlines are
/// materialized lazily so that the closing delimiter of a node lands at its
/// parent's level.
pub struct PrettyPrinter<'a> {
    /// One unit of indentation.
    indentation: &'a str,
    out: &'a mut dyn fmt::Write,
    /// Absolute indentation level at each open scope.
    indent_stack: Vec<usize>,
    /// Relative indentation within the current scope.
    current_indent: usize,
    /// A newline was written and its indentation is still pending.
    newline: bool,
}

impl<'a> PrettyPrinter<'a> {
    pub fn new(indentation: &'a str, out: &'a mut dyn fmt::Write) -> Self {
        PrettyPrinter {
            indentation,
            out,
            indent_stack: vec![0],
            current_indent: 0,
            newline: false,
        }
    }

    /// Writes `text` on the current line, materializing pending indentation.
    pub fn print(&mut self, text: &str) -> fmt::Result {
        self.indent_newline()?;
        self.out.write_str(text)
    }

    /// Ends the current line.
    pub fn println(&mut self) -> fmt::Result {
        self.out.write_char('\n')?;
        self.newline = true;
        Ok(())
    }

    /// Prints `node` in its own indentation scope.
    pub fn print_node(&mut self, node: &dyn PrettyPrintable) -> fmt::Result {
        let top = self.indent_stack.last().copied().unwrap_or(0);
        self.indent_stack.push(self.current_indent + top);
        self.current_indent = 0;
        let result = node.pretty_print(self);
        let popped = self.indent_stack.pop().unwrap_or(0);
        self.current_indent = popped - self.indent_stack.last().copied().unwrap_or(0);
        result
    }

    /// Indents the current line by `level` units relative to the current scope.
    pub fn indent(&mut self, level: usize) -> fmt::Result {
        self.indent_newline()?;
        self.current_indent = level;
        self.write_indentation(level)
    }

    fn indent_newline(&mut self) -> fmt::Result {
        if self.newline {
            let level = self.indent_stack.last().copied().unwrap_or(0);
            self.write_indentation(level)?;
            self.newline = false;
        }
        Ok(())
    }

    fn write_indentation(&mut self, level: usize) -> fmt::Result {
        for _ in 0..level {
            self.out.write_str(self.indentation)?;
        }
        Ok(())
    }
}
