use minishell::Interpreter;
use std::io::{self, IsTerminal};

fn main() {
    env_logger::init();

    let interpreter = Interpreter::default();

    // Interactive terminals get line editing; piped input gets the plain
    // stream loop so the prompt/output contract stays byte-exact.
    let code = if io::stdin().is_terminal() {
        match interpreter.repl() {
            Ok(code) => code,
            Err(err) => {
                eprintln!("minishell: {err}");
                1
            }
        }
    } else {
        let stdin = io::stdin();
        match interpreter.run_stream(&mut stdin.lock(), io::stdout()) {
            Ok(code) => code,
            Err(err) => {
                eprintln!("minishell: {err}");
                1
            }
        }
    };

    std::process::exit(code);
}
