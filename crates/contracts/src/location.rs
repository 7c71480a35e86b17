//! CallerLocation - source position of a log call

use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

/// File and line of the code that issued a log call.
///
/// Usually captured through `#[track_caller]`, in which case the file name
/// is borrowed from the binary and capturing costs no allocation.
///
/// # Examples
/// ```
/// use contracts::CallerLocation;
///
/// let here = CallerLocation::new("Sources/App/Foo.swift", 42);
/// assert_eq!(here.basename(), "Foo.swift");
/// assert_eq!(here.to_string(), "[Foo.swift:42]");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CallerLocation {
    pub file: Cow<'static, str>,
    pub line: u32,
}

impl CallerLocation {
    pub fn new(file: impl Into<Cow<'static, str>>, line: u32) -> Self {
        Self {
            file: file.into(),
            line,
        }
    }

    /// Location of the caller of the `#[track_caller]` chain.
    #[track_caller]
    pub fn caller() -> Self {
        Location::caller().into()
    }

    /// Last path component of `file`, accepting both `/` and `\` separators.
    ///
    /// Trailing separators are ignored (`"x/"` is `"x"`); a path made only of
    /// separators is returned unchanged.
    pub fn basename(&self) -> &str {
        let file: &str = &self.file;
        let trimmed = file.trim_end_matches(['/', '\\']);
        if trimmed.is_empty() {
            return file;
        }
        trimmed.rsplit(['/', '\\']).next().unwrap_or(trimmed)
    }
}

impl From<&'static Location<'static>> for CallerLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self::new(location.file(), location.line())
    }
}

impl fmt::Display for CallerLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}:{}]", self.basename(), self.line)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basename_variants() {
        assert_eq!(CallerLocation::new("a/b/c.rs", 1).basename(), "c.rs");
        assert_eq!(CallerLocation::new("c.rs", 1).basename(), "c.rs");
        assert_eq!(CallerLocation::new(r"src\win\d.rs", 1).basename(), "d.rs");
        assert_eq!(CallerLocation::new(String::from("x/"), 1).basename(), "x");
        assert_eq!(CallerLocation::new("a/b//", 1).basename(), "b");
        assert_eq!(CallerLocation::new(r"dir\sub\", 1).basename(), "sub");
        assert_eq!(CallerLocation::new("/", 1).basename(), "/");
    }

    #[test]
    fn test_caller_points_here() {
        let here = CallerLocation::caller();
        assert_eq!(here.basename(), "location.rs");
        assert_eq!(here.line, line!() - 2);
    }

    #[test]
    fn test_display() {
        assert_eq!(CallerLocation::new("dir/Foo.swift", 42).to_string(), "[Foo.swift:42]");
    }
}
