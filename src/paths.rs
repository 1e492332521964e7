//! Windows path rules, applied on every host.
//!
//! Installation records always carry Windows paths (`C:\Program Files\...`),
//! so resolution, joining and comparison follow Windows semantics no matter
//! which OS vsfind runs on: `\` and `/` both separate components, a drive
//! letter or `\\server\share` prefix is the root, and locations compare
//! case-insensitively. `C:\VS\`, `c:/vs/VC/..` and `C:\VS` are one place.
//! Nothing here touches the filesystem beyond reading the current directory.

use std::path::{Path, PathBuf};

const SEPARATOR: char = '\\';

fn is_separator(c: char) -> bool {
    c == '\\' || c == '/'
}

/// Root of a Windows path: the device (`C:` or `\\server\share`, possibly
/// empty), whether the path is rooted, and the remainder.
fn split_root(path: &str) -> (String, bool, &str) {
    let mut chars = path.chars();
    let first = chars.next();
    let second = chars.next();

    if let (Some(a), Some(b)) = (first, second) {
        if is_separator(a) && is_separator(b) {
            let mut parts = path[2..].splitn(3, is_separator);
            if let (Some(server), Some(share)) = (parts.next(), parts.next()) {
                if !server.is_empty() && !share.is_empty() {
                    let device = format!(r"\\{}\{}", server, share);
                    return (device, true, parts.next().unwrap_or(""));
                }
            }
            return (String::new(), true, &path[2..]);
        }

        if a.is_ascii_alphabetic() && b == ':' {
            let rest = &path[2..];
            return (path[..2].to_string(), rest.starts_with(is_separator), rest);
        }
    }

    (String::new(), path.starts_with(is_separator), path)
}

/// Components of `tail` with `.` dropped and `..` folded.
///
/// A rooted path never climbs above its root.
fn fold(tail: &str, rooted: bool) -> Vec<&str> {
    let mut out: Vec<&str> = Vec::new();
    for part in tail.split(is_separator) {
        match part {
            "" | "." => {}
            ".." => {
                if out.last().is_some_and(|last| *last != "..") {
                    out.pop();
                } else if !rooted {
                    out.push("..");
                }
            }
            other => out.push(other),
        }
    }
    out
}

fn assemble(device: &str, rooted: bool, parts: &[&str]) -> String {
    let mut out = device.to_string();
    if rooted {
        out.push(SEPARATOR);
    }
    out.push_str(&parts.join("\\"));
    if !rooted && parts.is_empty() {
        out.push('.');
    }
    out
}

/// Collapse separators, `.` and `..` without anchoring relative paths.
pub fn normalize(path: &str) -> String {
    let (device, rooted, tail) = split_root(path);
    assemble(&device, rooted, &fold(tail, rooted))
}

/// Resolve `path` against `cwd` using Windows rules.
///
/// A rooted path without a drive takes the drive of `cwd`. A drive-relative
/// path (`D:foo`) on a drive other than `cwd`'s is anchored at that drive's
/// root.
pub fn resolve_from(cwd: &str, path: &str) -> String {
    let (device, rooted, tail) = split_root(path);
    if rooted && !device.is_empty() {
        return assemble(&device, true, &fold(tail, true));
    }

    let (cwd_device, _, cwd_tail) = split_root(cwd);
    if rooted {
        return assemble(&cwd_device, true, &fold(tail, true));
    }
    if !device.is_empty() && !device.eq_ignore_ascii_case(&cwd_device) {
        return assemble(&device, true, &fold(tail, true));
    }

    let combined = format!("{}{}{}", cwd_tail, SEPARATOR, tail);
    assemble(&cwd_device, true, &fold(&combined, true))
}

/// Make `path` absolute against the current directory and normalize it.
pub fn resolve(path: impl AsRef<Path>) -> PathBuf {
    let cwd = std::env::current_dir()
        .map(|p| p.to_string_lossy().into_owned())
        .unwrap_or_default();
    PathBuf::from(resolve_from(&cwd, &path.as_ref().to_string_lossy()))
}

/// Join `segments` onto `base` with `\` and normalize the result.
pub fn join(base: impl AsRef<Path>, segments: &[&str]) -> PathBuf {
    let mut joined = base.as_ref().to_string_lossy().into_owned();
    for segment in segments {
        joined.push(SEPARATOR);
        joined.push_str(segment);
    }
    PathBuf::from(normalize(&joined))
}

/// Whether two paths name the same location.
///
/// Both sides are resolved, then compared ignoring case.
pub fn same_location(a: &Path, b: &Path) -> bool {
    let a = resolve(a).to_string_lossy().to_lowercase();
    let b = resolve(b).to_string_lossy().to_lowercase();
    a == b
}

/// Spell a Windows-form path the way the host filesystem expects.
pub fn to_host(path: &Path) -> PathBuf {
    if cfg!(windows) {
        path.to_path_buf()
    } else {
        PathBuf::from(path.to_string_lossy().replace(SEPARATOR, "/"))
    }
}
