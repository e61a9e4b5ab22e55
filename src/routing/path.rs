//! Route path composition.
//!
//! # Responsibilities
//! - Join a group's base path with a relative route path
//! - Lexically clean the result (`.`, `..`, duplicate separators)
//! - Keep a trailing slash when the relative path asked for one
//!
//! # Design Decisions
//! - Purely lexical: the filesystem is never consulted
//! - An empty relative path returns the base path untouched, even if the
//!   base path is itself unclean
//! - Cleaning drops trailing slashes, but the router treats `/users/` and
//!   `/users` as distinct routes, so the slash is restored afterwards

use crate::error::FatalError;

/// Join `absolute_path` and `relative_path` into a single route path.
pub fn compose(absolute_path: &str, relative_path: &str) -> String {
    if relative_path.is_empty() {
        return absolute_path.to_string();
    }

    let mut final_path = join(absolute_path, relative_path);
    let append_slash =
        last_char(relative_path) == Ok(b'/') && last_char(&final_path) != Ok(b'/');
    if append_slash {
        final_path.push('/');
    }
    final_path
}

/// Final byte of a non-empty string.
pub fn last_char(s: &str) -> Result<u8, FatalError> {
    s.as_bytes()
        .last()
        .copied()
        .ok_or(FatalError::InvalidArgument("the length of the string can't be 0"))
}

/// Join two path elements with `/` and clean the result.
///
/// Empty elements are skipped; joining two empty elements yields `""`.
pub fn join(base: &str, elem: &str) -> String {
    match (base.is_empty(), elem.is_empty()) {
        (true, true) => String::new(),
        (true, false) => clean(elem),
        (false, true) => clean(base),
        (false, false) => clean(&format!("{base}/{elem}")),
    }
}

/// Shortest path lexically equivalent to `path`.
///
/// Duplicate separators and `.` elements are removed, each `..` removes the
/// element before it, and a `..` above the root of a rooted path is dropped.
/// The result never ends in `/` unless it is the root itself. An empty result
/// becomes `/` for rooted paths and `.` otherwise.
pub fn clean(path: &str) -> String {
    if path.is_empty() {
        return ".".to_string();
    }

    let rooted = path.starts_with('/');
    let mut stack: Vec<&str> = Vec::new();
    for elem in path.split('/') {
        match elem {
            "" | "." => {}
            ".." => match stack.last() {
                Some(&last) if last != ".." => {
                    stack.pop();
                }
                _ if rooted => {}
                _ => stack.push(".."),
            },
            _ => stack.push(elem),
        }
    }

    let joined = stack.join("/");
    if rooted {
        format!("/{joined}")
    } else if joined.is_empty() {
        ".".to_string()
    } else {
        joined
    }
}
