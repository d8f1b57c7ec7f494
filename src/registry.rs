//! The builtin command registry and the execution contract for builtins.

use crate::env::SearchPath;
use anyhow::Result;
use std::collections::HashMap;
use std::io::Write;

/// Conventional process exit code type used by this crate.
///
/// A value of 0 indicates success; any non-zero value indicates failure.
/// This mirrors the convention used by POSIX shells and many command-line tools.
pub type ExitCode = i32;

/// What the dispatcher should do after a builtin ran successfully.
///
/// `exit` does not terminate the process itself: it returns
/// [`Flow::Exit`] and the loop that invoked it decides to stop. This keeps
/// every builtin, including `exit`, runnable inside a test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Keep reading commands.
    Continue,
    /// End the session with the given process exit status.
    Exit(ExitCode),
}

/// Read-only state lent to a builtin for the duration of one invocation.
///
/// `type` needs to ask "is this name a builtin?" and "where on the search
/// path does it live?", so the registry and search path are passed back in
/// by reference rather than being reachable as ambient globals.
pub struct Ctx<'a> {
    pub registry: &'a Registry,
    pub search_path: &'a SearchPath,
}

/// A command implemented inside the shell process.
///
/// `argv` is the full argument vector: `argv[0]` is the command name itself,
/// the way the tokenizer produced it. Recoverable failures are reported as
/// errors and rendered by the dispatcher as `<name>: <message>`; success
/// returns a [`Flow`] telling the loop whether to continue.
pub trait Builtin {
    /// Canonical name of the command, e.g. "echo" or "cd".
    fn name(&self) -> &'static str;

    /// Executes the command against the provided output stream.
    fn execute(&self, argv: &[String], out: &mut dyn Write, ctx: &Ctx<'_>) -> Result<Flow>;
}

/// Mapping from command name to builtin, fixed after startup.
///
/// Names are unique; registering a second builtin under an existing name
/// replaces the first. There is no removal. The dispatcher holds the registry
/// immutably for the lifetime of the session.
#[derive(Default)]
pub struct Registry {
    commands: HashMap<&'static str, Box<dyn Builtin>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a builtin under its canonical name. Last registration wins.
    pub fn register(&mut self, command: Box<dyn Builtin>) {
        self.commands.insert(command.name(), command);
    }

    /// Look up a builtin by name.
    pub fn lookup(&self, name: &str) -> Option<&dyn Builtin> {
        self.commands.get(name).map(Box::as_ref)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }
}
