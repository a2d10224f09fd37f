#![cfg_attr(not(feature = "std"), feature(lang_items))] // We neeed to enable this to define the `eh_personality`
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(not(feature = "std"), no_main)]

#[cfg(not(feature = "std"))]
use scanopt::Scanner;

// No allocator here: the vector is static
// and everything the scanner hands back borrows from it.
#[cfg(not(feature = "std"))]
static ARGS: [&str; 6] = ["no_std", "-vq", "-n", "3", "--", "-file"];

#[cfg(not(feature = "std"))]
fn print(text: &str) {
    unsafe {
        libc::write(1, text.as_ptr().cast(), text.len());
    }
}

#[cfg(not(feature = "std"))]
#[no_mangle]
pub extern "C" fn main() -> isize {
    let mut scanner = Scanner::new(&ARGS, "vqn:");
    let mut buf = [0u8; 4];

    loop {
        match scanner.forward() {
            Ok(Some(opt)) => {
                print("-");
                print(opt.opt.encode_utf8(&mut buf));
                if let Some(arg) = opt.arg {
                    print(" ");
                    print(arg);
                }
                print("\n");
            }
            Ok(None) => break,
            Err(_) => return 2,
        }
    }

    for operand in scanner.remaining() {
        print(operand);
        print("\n");
    }

    0
}

// Below we define the required language items

#[cfg(not(feature = "std"))]
#[panic_handler]
fn panic(_panic_info: &core::panic::PanicInfo) -> ! {
    loop {}
}

#[cfg(not(feature = "std"))]
#[lang = "eh_personality"]
extern "C" fn eh_personality() {}

#[cfg(feature = "std")]
fn main() {
    panic!("Tried to run this example on stable and/or without disabling std")
}
