//! Built-in commands known to the shell at compile time.
//!
//! Builtins run in-process against the session's output stream and never see
//! the child-process machinery. They receive the raw argument vector as the
//! tokenizer produced it, with no flag parsing: `echo -n foo` prints
//! `-n foo` verbatim.

use crate::env;
use crate::registry::{Builtin, Ctx, Flow, Registry};
use anyhow::{Result, anyhow, bail};
use std::io::Write;

/// Build the registry with the default set of builtins:
/// `exit`, `echo`, `type`, `pwd` and `cd`.
pub fn default_registry() -> Registry {
    let mut registry = Registry::new();
    registry.register(Box::new(Exit));
    registry.register(Box::new(Echo));
    registry.register(Box::new(Type));
    registry.register(Box::new(Pwd));
    registry.register(Box::new(Cd));
    registry
}

/// End the session with an explicit exit status.
///
/// The status argument is mandatory and must parse as an integer. On success
/// the builtin returns [`Flow::Exit`]; actually terminating the process is
/// the caller's job.
pub struct Exit;

impl Builtin for Exit {
    fn name(&self) -> &'static str {
        "exit"
    }

    fn execute(&self, argv: &[String], _out: &mut dyn Write, _ctx: &Ctx<'_>) -> Result<Flow> {
        let Some(raw) = argv.get(1) else {
            bail!("argument required");
        };
        let code = raw
            .parse()
            .map_err(|_| anyhow!("exit code must be an integer"))?;
        Ok(Flow::Exit(code))
    }
}

/// Write the arguments to the output stream, separated by single spaces and
/// followed by a newline.
pub struct Echo;

impl Builtin for Echo {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn execute(&self, argv: &[String], out: &mut dyn Write, _ctx: &Ctx<'_>) -> Result<Flow> {
        writeln!(out, "{}", argv[1..].join(" "))?;
        Ok(Flow::Continue)
    }
}

/// Classify a command name: builtin, external executable, or nothing.
///
/// Builtins shadow the search path, matching how the dispatcher resolves
/// names. Exactly one line is written; an unresolvable name is normal output
/// (`<name>: not found`), not an error.
pub struct Type;

impl Builtin for Type {
    fn name(&self) -> &'static str {
        "type"
    }

    fn execute(&self, argv: &[String], out: &mut dyn Write, ctx: &Ctx<'_>) -> Result<Flow> {
        let Some(subject) = argv.get(1) else {
            bail!("argument required");
        };
        if ctx.registry.contains(subject) {
            writeln!(out, "{} is a shell builtin", subject)?;
        } else if let Some(path) = ctx.search_path.resolve(subject) {
            writeln!(out, "{} is {}", subject, path.display())?;
        } else {
            writeln!(out, "{}: not found", subject)?;
        }
        Ok(Flow::Continue)
    }
}

/// Print the current working directory.
pub struct Pwd;

impl Builtin for Pwd {
    fn name(&self) -> &'static str {
        "pwd"
    }

    fn execute(&self, _argv: &[String], out: &mut dyn Write, _ctx: &Ctx<'_>) -> Result<Flow> {
        let cwd = std::env::current_dir()?;
        writeln!(out, "{}", cwd.display())?;
        Ok(Flow::Continue)
    }
}

/// Change the current working directory.
///
/// With no argument the target is `$HOME`; a leading `~` in the target is
/// replaced by `$HOME`. Failure reports the offending path and leaves the
/// working directory untouched.
pub struct Cd;

impl Builtin for Cd {
    fn name(&self) -> &'static str {
        "cd"
    }

    fn execute(&self, argv: &[String], _out: &mut dyn Write, _ctx: &Ctx<'_>) -> Result<Flow> {
        let target = match argv.get(1) {
            Some(t) if !t.is_empty() => t.clone(),
            _ => env::home_dir(),
        };
        let target = if target.starts_with('~') {
            target.replacen('~', &env::home_dir(), 1)
        } else {
            target
        };
        std::env::set_current_dir(&target)
            .map_err(|_| anyhow!("{}: No such file or directory", target))?;
        Ok(Flow::Continue)
    }
}
