//! The dispatcher: one prompt, one line, one command per iteration.

use crate::builtin::default_registry;
use crate::env::SearchPath;
use crate::external;
use crate::io_adapters::{LineWriter, read_line};
use crate::lexer;
use crate::registry::{Ctx, ExitCode, Flow, Registry};
use log::debug;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use std::io::{self, BufRead, ErrorKind, Write};

/// A minimal shell interpreter that resolves and runs one command at a time.
///
/// The interpreter owns the builtin [`Registry`] and the [`SearchPath`], both
/// fixed at construction, and drives the
/// prompt/read/tokenize/resolve/execute/report loop over a pair of streams.
/// Resolution order: builtins shadow externals; anything else is handed to
/// the OS spawn facility, and a spawn that cannot start is reported as
/// `<name>: command not found`.
///
/// All builtin output and every recoverable error message go to the single
/// primary output stream; recoverable errors never end the session. The only
/// ways out are the `exit` builtin and a failure of the streams themselves.
pub struct Interpreter {
    registry: Registry,
    search_path: SearchPath,
}

impl Interpreter {
    /// Create an interpreter with a custom registry and search path.
    pub fn new(registry: Registry, search_path: SearchPath) -> Self {
        Self {
            registry,
            search_path,
        }
    }

    /// Resolve and execute a single input line, reporting to `out`.
    ///
    /// Recoverable failures are rendered as `<name>: <message>` and yield
    /// [`Flow::Continue`]; an `Err` here means the output stream itself broke.
    pub fn dispatch_line<W: Write>(
        &self,
        line: &str,
        out: &mut LineWriter<W>,
    ) -> io::Result<Flow> {
        let argv = lexer::split_words(line);
        let name = argv[0].as_str();
        debug!("dispatching {name:?}");

        if let Some(cmd) = self.registry.lookup(name) {
            let ctx = Ctx {
                registry: &self.registry,
                search_path: &self.search_path,
            };
            return match cmd.execute(&argv, out, &ctx) {
                Ok(flow) => {
                    out.flush()?;
                    Ok(flow)
                }
                Err(err) => {
                    out.write_line(&format!("{name}: {err}"))?;
                    Ok(Flow::Continue)
                }
            };
        }

        match external::run(name, &argv[1..]) {
            Ok(code) => {
                if code != 0 {
                    debug!("{name:?} exited with status {code}");
                }
            }
            Err(err) if err.kind() == ErrorKind::NotFound => {
                out.write_line(&format!("{name}: command not found"))?;
            }
            Err(err) => {
                out.write_line(&format!("{name}: {err}"))?;
            }
        }
        Ok(Flow::Continue)
    }

    /// Run a full session over arbitrary streams, prompting with `$ `.
    ///
    /// Returns the session's exit status: the argument of a successful `exit`
    /// builtin, or 1 when the input ends without one. Stream failures bubble
    /// up as errors and are likewise fatal to the session.
    pub fn run_stream<R: BufRead, W: Write>(
        &self,
        input: &mut R,
        output: W,
    ) -> io::Result<ExitCode> {
        let mut out = LineWriter::new(output);
        loop {
            out.write_str("$ ")?;
            let Some(line) = read_line(input)? else {
                debug!("input ended before exit");
                return Ok(1);
            };
            match self.dispatch_line(&line, &mut out)? {
                Flow::Continue => {}
                Flow::Exit(code) => return Ok(code),
            }
        }
    }

    /// Interactive session on the terminal, with line editing and history.
    ///
    /// Ctrl-C discards the current line and prompts again; Ctrl-D ends the
    /// session with status 0.
    pub fn repl(&self) -> anyhow::Result<ExitCode> {
        let mut rl = DefaultEditor::new()?;
        let mut out = LineWriter::new(io::stdout());

        loop {
            match rl.readline("$ ") {
                Ok(line) => {
                    rl.add_history_entry(line.as_str())?;
                    match self.dispatch_line(&line, &mut out)? {
                        Flow::Continue => {}
                        Flow::Exit(code) => return Ok(code),
                    }
                }
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => return Ok(0),
                Err(err) => return Err(err.into()),
            }
        }
    }
}

impl Default for Interpreter {
    /// Create an interpreter with the default builtins and the `PATH` of the
    /// current process.
    fn default() -> Self {
        Self::new(default_registry(), SearchPath::from_env())
    }
}
