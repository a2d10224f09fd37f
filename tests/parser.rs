use scanopt::{HasArg, LongOpt, ParsedOption, Scanner};

type TestResult = scanopt::Result<'static, (), Box<dyn std::error::Error>>;

#[test]
fn scanner_creation() {
    let args = ["/usr/bin/program", "-v"];
    let scanner = Scanner::new(&args, "v");
    assert_eq!(scanner.name(), Some("/usr/bin/program"));
    assert_eq!(scanner.index(), 1);
    assert!(!scanner.is_poisoned());

    let owned: Vec<String> = std::env::args().collect();
    let scanner = Scanner::new(&owned, "");
    assert!(!scanner.name().unwrap_or_default().is_empty());
}

#[test]
fn positional_args() {
    let args = ["prog", "file1", "file2", "file3"];
    let mut scanner = Scanner::new(&args, "a");
    assert_eq!(scanner.forward().unwrap(), None);
    assert_eq!(scanner.remaining(), ["file1", "file2", "file3"]);
}

#[test]
fn no_reordering() {
    let args = ["prog", "-a", "operand", "-b"];
    let mut scanner = Scanner::new(&args, "ab");
    assert_eq!(scanner.forward().unwrap(), Some(ParsedOption::short('a')));
    assert_eq!(scanner.forward().unwrap(), None);
    assert_eq!(scanner.remaining(), ["operand", "-b"]);
}

#[test]
fn lonely_dash_is_positional() {
    let args = ["prog", "-v", "-", "-w"];
    let mut scanner = Scanner::new(&args, "vw");
    assert_eq!(scanner.forward().unwrap(), Some(ParsedOption::short('v')));
    assert_eq!(scanner.forward().unwrap(), None);
    assert_eq!(scanner.remaining(), ["-", "-w"]);
}

#[test]
fn double_dash_terminator() -> TestResult {
    let args: &'static [&str] = &["prog", "-a", "--", "-b"];
    let mut scanner = Scanner::new(args, "ab");
    assert_eq!(scanner.forward()?, Some(ParsedOption::short('a')));
    assert_eq!(scanner.forward()?, None);
    assert_eq!(scanner.remaining(), ["-b"]);

    let args: &'static [&str] = &["prog", "--"];
    let mut scanner = Scanner::new(args, "ab");
    assert_eq!(scanner.forward()?, None);
    assert!(scanner.remaining().is_empty());

    let args: &'static [&str] = &["prog", "--", "--"];
    let mut scanner = Scanner::new(args, "ab");
    assert_eq!(scanner.forward()?, None);
    assert_eq!(scanner.remaining(), ["--"]);
    Ok(())
}

#[test]
fn empty_token_is_positional() {
    let args = ["prog", "", "-a"];
    let mut scanner = Scanner::new(&args, "a");
    assert_eq!(scanner.forward().unwrap(), None);
    assert_eq!(scanner.remaining(), ["", "-a"]);
}

#[test]
fn remaining_is_idempotent() {
    let args = ["prog", "-a", "x", "y"];
    let mut scanner = Scanner::new(&args, "a");
    while scanner.forward().unwrap().is_some() {}

    let first = scanner.remaining();
    let second = scanner.remaining();
    assert_eq!(first, second);
    assert_eq!(first, ["x", "y"]);
    assert_eq!(scanner.forward().unwrap(), None);
    assert_eq!(scanner.remaining(), first);
}

#[test]
fn remaining_before_scanning() {
    let args = ["prog", "-a", "x"];
    let scanner = Scanner::new(&args, "a");
    assert_eq!(scanner.remaining(), ["-a", "x"]);
}

#[test]
fn owned_strings() {
    let args: Vec<String> = ["prog", "--level", "3", "-q", "in.txt"]
        .into_iter()
        .map(String::from)
        .collect();
    let longopts = [LongOpt::new("level", HasArg::Required, 'l')];
    let mut scanner = Scanner::with_long(&args, "ql:", &longopts);

    assert_eq!(
        scanner.forward().unwrap(),
        Some(ParsedOption::long('l', "level", 0).with_arg("3"))
    );
    assert_eq!(scanner.forward().unwrap(), Some(ParsedOption::short('q')));
    assert_eq!(scanner.forward().unwrap(), None);
    assert_eq!(scanner.remaining(), ["in.txt".to_string()]);
}

#[test]
fn iterator_stops_at_operands() {
    let args = ["prog", "-ab", "-c", "x", "file", "-a"];
    let scanner = Scanner::new(&args, "abc:");
    let opts: Vec<_> = scanner.collect::<Result<_, _>>().unwrap();
    assert_eq!(
        opts,
        [
            ParsedOption::short('a'),
            ParsedOption::short('b'),
            ParsedOption::short('c').with_arg("x"),
        ]
    );
}

#[test]
fn arguments_borrow_the_vector() {
    let args = [String::from("prog"), String::from("-fname")];
    let mut scanner = Scanner::new(&args, "f:");
    let arg = scanner.forward().unwrap().unwrap().arg.unwrap();
    assert!(std::ptr::eq(arg.as_ptr(), args[1][2..].as_ptr()));
}
