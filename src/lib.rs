//! A tiny interactive command-line shell.
//!
//! This crate provides the building blocks of a minimal shell: a whitespace
//! tokenizer, a registry of built-in commands, a PATH resolver, and a launcher
//! for external programs, all tied together by a read-eval-print loop. It is
//! intentionally small and easy to read.
//!
//! The main entry point is [`Interpreter`], which owns the builtin
//! [`registry::Registry`] and the parsed [`env::SearchPath`] and drives one
//! command per iteration. The loop can run over any pair of input/output
//! streams, which is also how the integration tests exercise whole sessions
//! in memory.

pub mod builtin;
pub mod env;
mod external;
mod interpreter;
pub mod io_adapters;
pub mod lexer;
pub mod registry;

/// Just a convenient re-export of the interactive command runner.
///
/// See [`Interpreter`] for the high-level API.
pub use interpreter::Interpreter;
