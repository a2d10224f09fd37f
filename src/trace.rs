// Scanner tracing.
// With the `log` feature the records go to the `log` facade,
// without it the arguments are type-checked but never evaluated.

#[cfg(feature = "log")]
macro_rules! trace {
    ($($arg:tt)+) => {
        ::log::trace!(target: "scanopt", $($arg)+)
    };
}

#[cfg(not(feature = "log"))]
macro_rules! trace {
    ($($arg:tt)+) => {{
        if false {
            let _ = format_args!($($arg)+);
        }
    }};
}

pub(crate) use trace;
