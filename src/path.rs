//! Basename and extension extraction.
//!
//! Both separators are honoured on every platform, so a Windows path looked up
//! on Linux (or a path mixing both) still yields the right final component.
//! This is byte-level work on ASCII delimiters, which keeps slicing on char
//! boundaries for any UTF-8 input.

use memchr::{memrchr, memrchr2};

/// Everything after the rightmost `/` or `\`, or the whole input.
#[inline]
pub fn basename(path: &str) -> &str {
    match memrchr2(b'/', b'\\', path.as_bytes()) {
        Some(pos) => &path[pos + 1..],
        None => path,
    }
}

/// Final suffix of `basename`, dot included.
///
/// `None` when there is no dot, or when the only candidate dot is the leading
/// one of a dotfile.
#[inline]
pub fn extension(basename: &str) -> Option<&str> {
    match memrchr(b'.', basename.as_bytes()) {
        Some(0) | None => None,
        Some(pos) => Some(&basename[pos..]),
    }
}
