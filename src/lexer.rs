//! Splitting an input line into a command name and its arguments.
//!
//! The splitting rule is deliberately primitive: the line is cut on single
//! space characters, with no quoting, escaping, or glob expansion. Runs of
//! spaces are *not* collapsed, so `a  b` produces an empty token between
//! `a` and `b`. This mirrors the behavior of naive `split(" ")` shells and
//! keeps tokenization total: there is no input it can fail on.

/// Split a raw line into words on single spaces.
///
/// The returned vector is never empty: an empty line yields a single empty
/// string, which the dispatcher then resolves to "command not found" instead
/// of crashing. Token 0 is the command name, the rest are its arguments.
pub fn split_words(line: &str) -> Vec<String> {
    line.split(' ').map(str::to_owned).collect()
}
