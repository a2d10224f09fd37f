use core::{
    error::Error,
    fmt::{self, Display},
};

pub type Result<'a, T, E = ParsingError<'a>> = core::result::Result<T, E>;

/// The part of the command line an error is about.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum Offender<'a> {
    /// A short option character, as in `-z`.
    Short(char),

    /// A long option name without the leading `--`.
    Long(&'a str),

    /// A long option given a value it does not take,
    /// as in `--verbose=yes`.
    LongWithValue(&'a str, &'a str),
}

/// Error type describing the ways
/// scanning a command line can fail.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
pub enum ParsingError<'a> {
    /// The option is not in the specification,
    /// or a long option that takes no argument got one.
    InvalidOption { offender: Offender<'a> },

    /// An option that requires an argument
    /// was the last thing on the command line.
    MissingArgument { offender: Offender<'a> },

    /// This error is not produced by the scanner,
    /// however it is there to let users
    /// create errors from
    /// options that they deem unexpected,
    /// see `ParsedOption::into_error`.
    UnexpectedArg {
        offender: Offender<'a>,
        value: Option<&'a str>,
    },
}

impl<'a> ParsingError<'a> {
    #[must_use]
    pub const fn offender(&self) -> Offender<'a> {
        match *self {
            Self::InvalidOption { offender }
            | Self::MissingArgument { offender }
            | Self::UnexpectedArg { offender, .. } => offender,
        }
    }
}

impl Display for ParsingError<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Offender::{Long, LongWithValue, Short};

        match *self {
            Self::InvalidOption { offender } => match offender {
                Short(opt) => write!(f, "invalid option -- '{opt}'"),
                Long(name) => write!(f, "unrecognized option '--{name}'"),
                LongWithValue(name, _) => write!(f, "option '--{name}' doesn't allow an argument"),
            },

            Self::MissingArgument { offender } => match offender {
                Short(opt) => write!(f, "option requires an argument -- '{opt}'"),
                Long(name) | LongWithValue(name, _) => {
                    write!(f, "option '--{name}' requires an argument")
                }
            },

            Self::UnexpectedArg { offender, value } => {
                f.write_str("unexpected argument: ")?;

                match (offender, value) {
                    (Short(opt), Some(val)) => write!(f, "-{opt} {val}"),
                    (Short(opt), None) => write!(f, "-{opt}"),
                    (Long(name) | LongWithValue(name, _), Some(val)) => write!(f, "--{name}={val}"),
                    (Long(name) | LongWithValue(name, _), None) => write!(f, "--{name}"),
                }
            }
        }
    }
}

impl Error for ParsingError<'_> {}
