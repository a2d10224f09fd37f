#![no_main]

use libfuzzer_sys::fuzz_target;
use scanopt::{HasArg, LongOpt, Scanner};

fuzz_target!(|data: &[u8]| {
    let mut args: Vec<String> = vec!["fuzz".to_string()];

    for &byte in data {
        args.push(format!("{}", byte));
        args.push(format!("{:x}", byte));
        args.push(format!("{:b}", byte));
        args.push(format!("{}", byte as char));
        args.push(format!("-{}", byte as char));
        args.push(format!("--{}", byte as char));
        args.push(format!("--{}={}", byte as char, byte));
        args.push(format!("--{}={:x}", byte, byte));
    }

    let names: Vec<String> = data.iter().map(|b| format!("{}", *b as char)).collect();
    let longopts: Vec<LongOpt<'_>> = names
        .iter()
        .zip(data)
        .map(|(name, b)| {
            let has_arg = match b % 3 {
                0 => HasArg::No,
                1 => HasArg::Required,
                _ => HasArg::Optional,
            };
            LongOpt::new(name, has_arg, *b as char)
        })
        .collect();

    let optstring = String::from_utf8_lossy(data);
    let mut scanner = Scanner::with_long(&args, &optstring, &longopts);

    while let Ok(Some(opt)) = scanner.forward() {
        if let Some(arg) = opt.arg {
            assert!(args.iter().any(|token| token.contains(arg)));
        }
    }
});
