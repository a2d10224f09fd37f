//! Option specifications: the `getopt` option string
//! and the `getopt_long` option table.

use core::cell::Cell;

/// Whether an option takes an argument.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum HasArg {
    /// A plain flag, like `-v` or `--verbose`.
    No,

    /// Always takes an argument,
    /// attached (`-fFILE`, `--file=FILE`) or separate (`-f FILE`, `--file FILE`).
    Required,

    /// Takes an argument only when it is attached,
    /// the following token is never consumed.
    Optional,
}

/// A `getopt` option string such as `"ab:c::"`.
///
/// Every character is a recognized short option,
/// a trailing `:` makes it require an argument
/// and a trailing `::` makes the argument optional.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct OptString<'o> {
    raw: &'o str,
}

impl<'o> OptString<'o> {
    pub const fn new(raw: &'o str) -> Self {
        Self { raw }
    }

    pub const fn as_str(&self) -> &'o str {
        self.raw
    }

    /// Looks up a short option,
    /// returns `None` if the character is not part of the option string.
    ///
    /// `:` is never an option, it only ever modifies the preceding character.
    #[must_use]
    pub fn lookup(&self, opt: char) -> Option<HasArg> {
        if opt == ':' {
            return None;
        }

        let pos = self.raw.find(opt)?;
        let rest = &self.raw[pos + opt.len_utf8()..];

        if rest.starts_with("::") {
            Some(HasArg::Optional)
        } else if rest.starts_with(':') {
            Some(HasArg::Required)
        } else {
            Some(HasArg::No)
        }
    }
}

impl<'o> From<&'o str> for OptString<'o> {
    fn from(raw: &'o str) -> Self {
        Self::new(raw)
    }
}

/// How a matched long option reports itself.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Report<'o> {
    /// Yield the code as `ParsedOption::opt`.
    /// `'\0'` means the option has no short equivalent.
    Return(char),

    /// Write the code into the cell
    /// and yield `'\0'` as `ParsedOption::opt`.
    Store(&'o Cell<char>, char),
}

/// One entry of a `getopt_long` option table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct LongOpt<'o> {
    /// Name without the leading `--`.
    pub name: &'o str,
    pub has_arg: HasArg,
    pub report: Report<'o>,
}

impl<'o> LongOpt<'o> {
    /// A long option reporting `val`,
    /// usually the character of its short equivalent.
    pub const fn new(name: &'o str, has_arg: HasArg, val: char) -> Self {
        Self {
            name,
            has_arg,
            report: Report::Return(val),
        }
    }

    /// A long option that stores `val` into `flag` when matched.
    pub const fn flag(name: &'o str, has_arg: HasArg, flag: &'o Cell<char>, val: char) -> Self {
        Self {
            name,
            has_arg,
            report: Report::Store(flag, val),
        }
    }

    // Performs the side effect of `Report::Store`
    // and returns the code to yield.
    pub(crate) fn report(&self) -> char {
        match self.report {
            Report::Return(val) => val,
            Report::Store(cell, val) => {
                cell.set(val);
                '\0'
            }
        }
    }
}

// Splits the body of a long option like
// `option=value`
// into ("option", Some("value"))
//
// only the first `=` separates, the value may contain more of them.
pub(crate) fn split_long_opt_value(src: &str) -> (&str, Option<&str>) {
    match src.split_once('=') {
        None => (src, None),
        Some((name, value)) => (name, Some(value)),
    }
}
