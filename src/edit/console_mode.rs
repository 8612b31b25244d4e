// ABOUTME: Console mode selector derived from the AttachStdin/Tty flag pair.
// ABOUTME: Lossy four-value view; OpenStdin mirrors AttachStdin on re-encode.

use std::fmt;

/// Console attachment mode on the edit form.
///
/// Derived from only two inspect flags, so `OpenStdin`/`StdinOnce` variations
/// collapse on round-trip: re-encoding always sets `OpenStdin` equal to
/// `AttachStdin` and `StdinOnce` to false.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConsoleMode {
    #[default]
    None,
    /// `Tty` only.
    Tty,
    /// `AttachStdin` only.
    Interactive,
    /// Both `AttachStdin` and `Tty`.
    InteractiveTty,
}

impl ConsoleMode {
    pub fn derive(attach_stdin: bool, tty: bool) -> Self {
        match (attach_stdin, tty) {
            (true, true) => ConsoleMode::InteractiveTty,
            (false, true) => ConsoleMode::Tty,
            (true, false) => ConsoleMode::Interactive,
            (false, false) => ConsoleMode::None,
        }
    }

    /// The `(AttachStdin, Tty)` pair this mode re-encodes to.
    pub fn flags(&self) -> (bool, bool) {
        match self {
            ConsoleMode::InteractiveTty => (true, true),
            ConsoleMode::Tty => (false, true),
            ConsoleMode::Interactive => (true, false),
            ConsoleMode::None => (false, false),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConsoleMode::InteractiveTty => "interactive-tty",
            ConsoleMode::Tty => "tty",
            ConsoleMode::Interactive => "interactive",
            ConsoleMode::None => "none",
        }
    }
}

impl fmt::Display for ConsoleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn derivation_covers_all_flag_pairs() {
        assert_eq!(ConsoleMode::derive(true, true), ConsoleMode::InteractiveTty);
        assert_eq!(ConsoleMode::derive(false, true), ConsoleMode::Tty);
        assert_eq!(ConsoleMode::derive(true, false), ConsoleMode::Interactive);
        assert_eq!(ConsoleMode::derive(false, false), ConsoleMode::None);
    }

    #[test]
    fn flags_invert_derivation() {
        for (stdin, tty) in [(true, true), (false, true), (true, false), (false, false)] {
            assert_eq!(ConsoleMode::derive(stdin, tty).flags(), (stdin, tty));
        }
    }
}
