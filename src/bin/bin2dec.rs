//! Convert binary numbers from the command line or stdin to other bases.

use std::io::BufRead;

use bin2dec::{parse_command_line, Printer};

fn print_help() {
    println!("Usage:\tbin2dec [OPTIONS] BINARY_NUMBER[s]");
    println!();
    println!("This program converts a binary number to a decimal number.  For example,");
    println!("issuing");
    println!();
    println!("\t'bin2dec 1011'");
    println!();
    println!("would result in a decimal output of 11.");
    println!();
    println!("Options:");
    println!("  -h or --help\tPrint this help text");
    println!("  --version\tPrint version information");
    println!("  -\t\tPipe from stdin");
    println!("  -v\t\tEnable verbose output (print what type each result is)");
    println!("  -d\t\tDecimal output (default)");
    println!("  -b\t\tBinary output");
    println!("  -o\t\tOctal output");
    println!("  -x\t\tHexadecimal output");
    println!("  -X\t\tHex output with capital letters");
    println!("  -a\t\tPrecise hex output (printf-style %a)");
    println!("  -A\t\tSame, but with capital letters");
    println!("  -s\t\tOutput in 4-character sections, space-separated");
    println!("  -l\t\tPrint a new line between sections of output");
    println!("  -t\t\tText conversion mode");
}

fn print_version() {
    println!("bin2dec version {}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    if args.len() > 1 {
        if args[1] == "-h" || args[1] == "--help" {
            print_help();
            return;
        }
        if args[1] == "--version" {
            print_version();
            return;
        }
    }
    let (options, free) = parse_command_line(&args[1..]);
    let mut printer = Printer::new(options, std::io::stdout().lock(), std::io::stderr());
    if free.is_empty() || (free.len() == 1 && free[0] == "-") {
        for line in std::io::stdin().lock().lines() {
            let line = line.expect("no I/O errors should be encountered reading stdin");
            for token in line.split(' ') {
                if token.is_empty() {
                    continue;
                }
                printer.print_token(token).expect("failed to write");
            }
        }
    } else {
        for token in &free {
            printer.print_token(token).expect("failed to write");
        }
    }
}
