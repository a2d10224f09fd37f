#![no_main]

use libfuzzer_sys::fuzz_target;
use scanopt::{HasArg, LongOpt, Scanner};

const LONGOPTS: [LongOpt<'static>; 3] = [
    LongOpt::new("verbose", HasArg::No, 'v'),
    LongOpt::new("file", HasArg::Required, 'f'),
    LongOpt::new("color", HasArg::Optional, 'c'),
];

fn drain<S: AsRef<str>>(scanner: &mut Scanner<'_, '_, S>, len: usize) {
    while let Ok(Some(_)) = scanner.forward() {}
    assert!(scanner.index() <= len.max(1));
    assert!(scanner.remaining().len() <= len);
}

fuzz_target!(|data: &[u8]| {
    let longopts = LONGOPTS;

    let byte_args: Vec<String> = data.iter().map(|&b| format!("{}", b as char)).collect();
    let mut args = vec!["fuzz"];
    args.extend(byte_args.iter().map(|s| s.as_str()));

    drain(&mut Scanner::with_long(&args, "vf:c::", &longopts), args.len());

    let null_string = String::from_utf8_lossy(data);
    let null_split: Vec<&str> = null_string.split('\0').collect();
    let mut args = vec!["fuzz"];
    args.extend(null_split);

    drain(&mut Scanner::with_long(&args, "vf:c::", &longopts), args.len());
    drain(&mut Scanner::new(&args, &null_string), args.len());
});
