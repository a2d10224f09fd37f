use std::{env, process::ExitCode};

use scanopt::{HasArg, LongOpt, Scanner};

const USAGE: &str = "usage: scanopt [-av] [-b SIZE] [-c[WHEN]] [--all] [--block-size SIZE] [--color[=WHEN]] [--verbose] [FILE]...";

fn main() -> ExitCode {
    #[cfg(feature = "log")]
    env_logger::init();

    let args: Vec<String> = match env::args_os().map(|arg| arg.into_string()).collect() {
        Ok(args) => args,
        Err(arg) => {
            eprintln!("scanopt: argument is not valid UTF-8: {arg:?}");
            return ExitCode::from(2);
        }
    };

    let longopts = [
        LongOpt::new("all", HasArg::No, 'a'),
        LongOpt::new("block-size", HasArg::Required, 'b'),
        LongOpt::new("color", HasArg::Optional, 'c'),
        LongOpt::new("verbose", HasArg::No, 'v'),
        LongOpt::new("help", HasArg::No, 'h'),
    ];

    let mut scanner = Scanner::with_long(&args, "ab:c::vh", &longopts);
    let name = scanner.name().unwrap_or("scanopt");

    loop {
        match scanner.forward() {
            Ok(Some(opt)) if opt.opt == 'h' => {
                println!("{USAGE}");
                return ExitCode::SUCCESS;
            }

            Ok(Some(opt)) => {
                dbg!(opt);
            }

            Ok(None) => break,

            Err(err) => {
                eprintln!("{name}: {err}");
                eprintln!("{USAGE}");
                return ExitCode::from(2);
            }
        }
    }

    for operand in scanner.remaining() {
        println!("{operand}");
    }

    ExitCode::SUCCESS
}
