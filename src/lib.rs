#![warn(clippy::pedantic)]
#![warn(clippy::complexity)]
#![cfg_attr(not(any(feature = "std", test)), no_std)]
//! Scanopt - a small getopt scanner
//!
//! Walks a borrowed argument vector the way POSIX `getopt`
//! and GNU `getopt_long` do, without reordering it
//! and without allocating: every returned argument
//! is a slice of the vector it was given.
//!
//! ```
//! use scanopt::{HasArg, LongOpt, Scanner};
//!
//! let args = ["prog", "-vo", "out.txt", "--level=3", "input"];
//! let longopts = [
//!     LongOpt::new("verbose", HasArg::No, 'v'),
//!     LongOpt::new("level", HasArg::Required, 'l'),
//! ];
//!
//! let mut scanner = Scanner::with_long(&args, "vo:l:", &longopts);
//!
//! let mut verbose = false;
//! let mut output = None;
//! let mut level = None;
//!
//! for opt in scanner.by_ref() {
//!     let opt = opt.expect("usage error");
//!
//!     match opt.opt {
//!         'v' => verbose = true,
//!         'o' => output = opt.arg,
//!         'l' => level = opt.arg,
//!         _ => unreachable!(),
//!     }
//! }
//!
//! assert!(verbose);
//! assert_eq!(output, Some("out.txt"));
//! assert_eq!(level, Some("3"));
//! assert_eq!(scanner.remaining(), ["input"]);
//! ```

mod error;
mod opts;
mod trace;

use core::iter::FusedIterator;

pub use error::{Offender, ParsingError, Result};
pub use opts::{HasArg, LongOpt, OptString, Report};

use opts::split_long_opt_value;
use trace::trace;

/// Which entry of the long option table matched.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct LongMatch<'o> {
    pub name: &'o str,
    pub index: usize,
}

/// One option found on the command line.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub struct ParsedOption<'a, 'o> {
    /// The short option character,
    /// or the code reported by the matched long option.
    /// `'\0'` for long options without a short equivalent.
    pub opt: char,

    /// The option's argument, borrowed from the argument vector.
    pub arg: Option<&'a str>,

    /// Set when the option was given in its `--long` form.
    pub long: Option<LongMatch<'o>>,
}

impl<'a, 'o> ParsedOption<'a, 'o> {
    /// A short option without an argument.
    #[must_use]
    pub const fn short(opt: char) -> Self {
        Self {
            opt,
            arg: None,
            long: None,
        }
    }

    /// A long option that matched entry `index` of the table.
    #[must_use]
    pub const fn long(opt: char, name: &'o str, index: usize) -> Self {
        Self {
            opt,
            arg: None,
            long: Some(LongMatch { name, index }),
        }
    }

    /// Attaches an argument.
    #[must_use]
    pub const fn with_arg(mut self, arg: &'a str) -> Self {
        self.arg = Some(arg);
        self
    }

    /// Whether the option was given as `--name`.
    #[must_use]
    pub const fn is_long(&self) -> bool {
        self.long.is_some()
    }

    #[must_use]
    pub fn long_name(&self) -> Option<&'o str> {
        self.long.map(|long| long.name)
    }

    /// Turns an option the caller has no use for
    /// into an error describing it the way it was spelled.
    #[must_use]
    pub fn into_error(self) -> ParsingError<'a>
    where
        'o: 'a,
    {
        let offender = match self.long {
            Some(long) => Offender::Long(long.name),
            None => Offender::Short(self.opt),
        };

        ParsingError::UnexpectedArg {
            offender,
            value: self.arg,
        }
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
enum State {
    Scanning,
    End,
    Poisoned,
}

/// Scanner of the command-line arguments.
///
/// Index 0 of the argument vector is the program name,
/// scanning starts at index 1 and stops at the first
/// positional argument, at `--`, or at the end of the vector.
/// Nothing is ever reordered.
///
/// After it has reported an error the scanner is poisoned
/// and keeps returning `Ok(None)`.
#[derive(Debug)]
pub struct Scanner<'a, 'o, S> {
    args: &'a [S],
    spec: OptString<'o>,
    longopts: Option<&'o [LongOpt<'o>]>,

    // `optind`: the token being examined.
    arg_index: usize,
    // Byte offset of the next option character inside a
    // short option cluster, 1 whenever a new token is entered.
    char_index: usize,
    // `optopt`: last short option that could not be resolved.
    offender: Option<char>,

    state: State,
}

impl<'a, 'o, S> Scanner<'a, 'o, S>
where
    S: AsRef<str>,
{
    /// Creates a scanner recognizing only the short options of `optstring`.
    pub fn new(args: &'a [S], optstring: &'o str) -> Self {
        Self {
            args,
            spec: OptString::new(optstring),
            longopts: None,

            arg_index: 1,
            char_index: 1,
            offender: None,

            state: State::Scanning,
        }
    }

    /// Creates a scanner recognizing the short options of `optstring`
    /// and the long options of `longopts`.
    pub fn with_long(args: &'a [S], optstring: &'o str, longopts: &'o [LongOpt<'o>]) -> Self {
        Self {
            longopts: Some(longopts),
            ..Self::new(args, optstring)
        }
    }

    /// Moves the scanner one option forward.
    ///
    /// Returns `Ok(None)` once the options are over,
    /// see `remaining` for what is left.
    ///
    /// # Errors
    ///
    /// `InvalidOption` for options missing from the specification,
    /// `MissingArgument` for options whose argument is not there.
    /// Either one poisons the scanner.
    pub fn forward(&mut self) -> Result<'a, Option<ParsedOption<'a, 'o>>> {
        if self.state != State::Scanning {
            return Ok(None);
        }

        let result = self.step();

        match &result {
            Ok(Some(opt)) => trace!("option {opt:?}"),
            Ok(None) => {
                trace!("end of options at index {}", self.arg_index);
                self.state = State::End;
            }
            Err(err) => {
                trace!("poisoned: {err}");
                self.state = State::Poisoned;
            }
        }

        result
    }

    /// The arguments left after the options,
    /// asking again returns the same slice.
    pub fn remaining(&self) -> &'a [S] {
        let args: &'a [S] = self.args;
        args.get(self.arg_index..).unwrap_or_default()
    }

    /// The program name, index 0 of the argument vector.
    pub fn name(&self) -> Option<&'a str> {
        let args: &'a [S] = self.args;
        args.first().map(AsRef::as_ref)
    }

    /// Index of the next token to be examined, like `optind`.
    pub const fn index(&self) -> usize {
        self.arg_index
    }

    /// The last short option character that failed to resolve, like `optopt`.
    pub const fn offender(&self) -> Option<char> {
        self.offender
    }

    /// Whether an error has ended the scan.
    pub fn is_poisoned(&self) -> bool {
        self.state == State::Poisoned
    }

    fn token(&self, index: usize) -> Option<&'a str> {
        let args: &'a [S] = self.args;
        args.get(index).map(AsRef::as_ref)
    }

    fn next_token(&mut self) {
        self.arg_index += 1;
        self.char_index = 1;
    }

    fn step(&mut self) -> Result<'a, Option<ParsedOption<'a, 'o>>> {
        let Some(token) = self.token(self.arg_index) else {
            return Ok(None);
        };

        if self.char_index == 1 {
            trace!("entering {token:?} at index {}", self.arg_index);

            if token == "--" {
                self.next_token();
                return Ok(None);
            }

            if token == "-" || !token.starts_with('-') {
                return Ok(None);
            }

            if let (Some(longopts), Some(body)) = (self.longopts, token.strip_prefix("--")) {
                return self.long(longopts, body).map(Some);
            }
        }

        self.short(token)
    }

    fn short(&mut self, token: &'a str) -> Result<'a, Option<ParsedOption<'a, 'o>>> {
        let Some(opt) = token
            .get(self.char_index..)
            .and_then(|cluster| cluster.chars().next())
        else {
            return Ok(None);
        };

        if !opt.is_alphanumeric() && self.char_index == 1 {
            // `-.5` or `-=` are operands, not options.
            return Ok(None);
        }

        let after = self.char_index + opt.len_utf8();
        let rest = &token[after..];

        let has_arg = if opt.is_alphanumeric() {
            self.spec.lookup(opt)
        } else {
            None
        };

        match has_arg {
            None => {
                self.offender = Some(opt);
                self.skip_char(token, after);

                Err(ParsingError::InvalidOption {
                    offender: Offender::Short(opt),
                })
            }

            Some(HasArg::No) => {
                self.skip_char(token, after);

                Ok(Some(ParsedOption::short(opt)))
            }

            Some(HasArg::Optional) => {
                self.next_token();

                let arg = (!rest.is_empty()).then_some(rest);
                Ok(Some(ParsedOption {
                    arg,
                    ..ParsedOption::short(opt)
                }))
            }

            Some(HasArg::Required) if !rest.is_empty() => {
                self.next_token();

                Ok(Some(ParsedOption::short(opt).with_arg(rest)))
            }

            Some(HasArg::Required) => {
                self.next_token();

                match self.token(self.arg_index) {
                    Some(arg) => {
                        self.arg_index += 1;
                        Ok(Some(ParsedOption::short(opt).with_arg(arg)))
                    }

                    None => {
                        self.offender = Some(opt);

                        Err(ParsingError::MissingArgument {
                            offender: Offender::Short(opt),
                        })
                    }
                }
            }
        }
    }

    // Steps over one character of a cluster,
    // leaving the token once it is used up.
    fn skip_char(&mut self, token: &str, after: usize) {
        if after >= token.len() {
            self.next_token();
        } else {
            self.char_index = after;
        }
    }

    fn long(
        &mut self,
        longopts: &'o [LongOpt<'o>],
        body: &'a str,
    ) -> Result<'a, ParsedOption<'a, 'o>> {
        let (name, value) = split_long_opt_value(body);

        self.next_token();

        let Some((index, entry)) = longopts
            .iter()
            .enumerate()
            .find(|(_, entry)| entry.name == name)
        else {
            return Err(ParsingError::InvalidOption {
                offender: Offender::Long(name),
            });
        };

        let arg = match (entry.has_arg, value) {
            (HasArg::No, Some(value)) => {
                return Err(ParsingError::InvalidOption {
                    offender: Offender::LongWithValue(name, value),
                });
            }

            (HasArg::No | HasArg::Optional, None) => None,

            (HasArg::Required | HasArg::Optional, Some(value)) => Some(value),

            (HasArg::Required, None) => {
                let Some(arg) = self.token(self.arg_index) else {
                    return Err(ParsingError::MissingArgument {
                        offender: Offender::Long(name),
                    });
                };

                self.arg_index += 1;
                Some(arg)
            }
        };

        Ok(ParsedOption {
            opt: entry.report(),
            arg,
            long: Some(LongMatch {
                name: entry.name,
                index,
            }),
        })
    }
}

impl<'a, 'o, S> Iterator for Scanner<'a, 'o, S>
where
    S: AsRef<str>,
{
    type Item = Result<'a, ParsedOption<'a, 'o>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.forward().transpose()
    }
}

impl<S> FusedIterator for Scanner<'_, '_, S> where S: AsRef<str> {}
