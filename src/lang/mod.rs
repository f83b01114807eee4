/*!
# Rust Language Module

This Rust module provides lexical analysis, symbol resolution and
single-pass compilation of PL/0 into P-code for the `mach` module.

*/

#[macro_use]
mod error;
mod lex;
mod parse;
mod table;
pub mod token;

pub use error::Error;
pub use error::ErrorCode;
pub use lex::Scanner;
pub use parse::{compile, Compilation, Parser};
pub use table::{Entry, Snapshot, SymbolTable};

pub type LineNumber = Option<usize>;

/// Deepest procedure nesting accepted. The program block is level 0.
pub const MAX_LEVEL: usize = 3;

/// Largest number literal the compiler will emit.
pub const MAX_NUMBER: i64 = 2_147_483_647;

/// Digits the scanner accumulates before reporting a number as too large.
pub const MAX_DIGITS: usize = 14;

/// Deepest nesting of blocks, compound statements and parentheses the
/// compiler recurses into.
pub const MAX_DEPTH: usize = 100;
