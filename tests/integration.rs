//! Whole-session tests: scripted input driven through the stream loop,
//! asserting on the exact bytes the shell writes and the session's exit
//! status.

use minishell::builtin::default_registry;
use minishell::env::SearchPath;
use minishell::Interpreter;
use std::fs;
use std::io::Cursor;
use std::path::PathBuf;
use std::sync::{Mutex, MutexGuard, OnceLock};
use std::time::{SystemTime, UNIX_EPOCH};

fn run_session(interp: &Interpreter, script: &str) -> (i32, String) {
    let mut input = Cursor::new(script.as_bytes().to_vec());
    let mut output = Vec::new();
    let code = interp
        .run_stream(&mut input, &mut output)
        .expect("in-memory streams should not fail");
    (code, String::from_utf8(output).expect("shell output is utf-8"))
}

fn make_unique_temp_dir(tag: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    p.push(format!("minishell_it_{}_{}_{}", tag, std::process::id(), nanos));
    fs::create_dir_all(&p).expect("create temp dir");
    p
}

fn lock_current_dir() -> MutexGuard<'static, ()> {
    static MUTEX: OnceLock<Mutex<()>> = OnceLock::new();
    MUTEX.get_or_init(|| Mutex::new(())).lock().unwrap()
}

fn isolated() -> Interpreter {
    Interpreter::new(default_registry(), SearchPath::parse("/nonexistent_dir"))
}

#[test]
fn echo_session_transcript_is_exact() {
    let (code, out) = run_session(&isolated(), "echo hi\nexit 3\n");
    assert_eq!(out, "$ hi\n$ ");
    assert_eq!(code, 3);
}

#[test]
fn prompt_is_repeated_after_every_command() {
    let (code, out) = run_session(&isolated(), "echo one\necho two\nexit 0\n");
    assert_eq!(out, "$ one\n$ two\n$ ");
    assert_eq!(code, 0);
}

#[test]
fn errors_do_not_end_the_session() {
    let script = "exit\nsome_missing_command\necho still here\nexit 2\n";
    let (code, out) = run_session(&isolated(), script);
    assert_eq!(
        out,
        "$ exit: argument required\n\
         $ some_missing_command: command not found\n\
         $ still here\n\
         $ "
    );
    assert_eq!(code, 2);
}

#[test]
fn type_precedence_builtin_then_path_then_miss() {
    let bin = make_unique_temp_dir("typeprec");
    fs::File::create(bin.join("echo")).unwrap();
    fs::File::create(bin.join("frob")).unwrap();
    let interp = Interpreter::new(
        default_registry(),
        SearchPath::parse(&bin.display().to_string()),
    );

    let script = "type echo\ntype frob\ntype nonexistent_xyz\nexit 0\n";
    let (code, out) = run_session(&interp, script);
    assert_eq!(
        out,
        format!(
            "$ echo is a shell builtin\n\
             $ frob is {}\n\
             $ nonexistent_xyz: not found\n\
             $ ",
            bin.join("frob").display()
        )
    );
    assert_eq!(code, 0);

    let _ = fs::remove_dir_all(bin);
}

#[test]
fn type_reports_first_directory_in_search_order() {
    let first = make_unique_temp_dir("order1");
    let second = make_unique_temp_dir("order2");
    // Present only in the second directory: the miss in the first one must
    // not turn into a false negative.
    fs::File::create(second.join("foo")).unwrap();
    let raw = format!("{}:{}", first.display(), second.display());
    let interp = Interpreter::new(default_registry(), SearchPath::parse(&raw));

    let (_, out) = run_session(&interp, "type foo\nexit 0\n");
    assert_eq!(out, format!("$ foo is {}\n$ ", second.join("foo").display()));

    let _ = fs::remove_dir_all(first);
    let _ = fs::remove_dir_all(second);
}

#[test]
fn cd_and_pwd_round_trip() {
    let _lock = lock_current_dir();
    let temp = make_unique_temp_dir("cdpwd");
    let canonical = fs::canonicalize(&temp).unwrap();
    let orig = std::env::current_dir().unwrap();

    let script = format!("cd {}\npwd\ncd /nonexistent_cd_dir\npwd\nexit 0\n", canonical.display());
    let (code, out) = run_session(&isolated(), &script);
    assert_eq!(
        out,
        format!(
            "$ $ {0}\n\
             $ cd: /nonexistent_cd_dir: No such file or directory\n\
             $ {0}\n\
             $ ",
            canonical.display()
        )
    );
    assert_eq!(code, 0);

    std::env::set_current_dir(orig).expect("failed to restore cwd");
    let _ = fs::remove_dir_all(temp);
}

#[test]
#[cfg(unix)]
fn external_command_runs_and_session_continues() {
    // `true` comes from the real PATH; its inherited streams print nothing.
    let interp = Interpreter::default();
    let (code, out) = run_session(&interp, "true\nexit 0\n");
    assert_eq!(out, "$ $ ");
    assert_eq!(code, 0);
}

#[test]
#[cfg(unix)]
fn failing_external_prints_nothing_extra() {
    // A started external that exits non-zero is not "command not found".
    let interp = Interpreter::default();
    let (code, out) = run_session(&interp, "false\nexit 4\n");
    assert_eq!(out, "$ $ ");
    assert_eq!(code, 4);
}
