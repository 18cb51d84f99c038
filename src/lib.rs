#![doc = include_str!("../README.md")]

use std::io::Write;

/////////////////////////////////////////////// Error //////////////////////////////////////////////

/// Error captures the ways a token can fail to convert.  Both conditions are
/// per-token and non-fatal:  the printer warns and moves on to the next token.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum Error {
    /// The token holds a character other than '0' or '1' outside its trailing
    /// newline/NUL run.
    InvalidBinaryDigit {
        /// Offset of the offending character within the token.
        position: usize,
        /// The offending character.
        character: char,
    },
    /// The token sets a bit at or past position 64 and does not fit a u64.
    TooManyBits {
        /// The number of bits the token requires.
        bits: usize,
    },
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InvalidBinaryDigit {
                position,
                character,
            } => {
                write!(f, "invalid binary digit {character:?} at position {position}")
            }
            Error::TooManyBits { bits } => {
                write!(f, "number exceeds 64 bits: needs {bits}")
            }
        }
    }
}

impl std::error::Error for Error {}

////////////////////////////////////////////// Options /////////////////////////////////////////////

/// Options selects the conversions to print and the shape of the output.  It
/// is constructed once, normalized, and read-only from then on.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Options {
    /// Echo the binary token itself (-b).
    pub binary: bool,
    /// Print the decimal value (-d); the default when no base is selected.
    pub decimal: bool,
    /// Print the octal value (-o).
    pub octal: bool,
    /// Print the hexadecimal value (-x).
    pub hex: bool,
    /// Print the hexadecimal value with capital letters (-X).
    pub hex_caps: bool,
    /// Print the value as hexadecimal floating point (-a).
    pub precise_hex: bool,
    /// Print the value as hexadecimal floating point with capital letters (-A).
    pub precise_hex_caps: bool,
    /// Group digits four to a section, space-separated (-s).
    pub sections: bool,
    /// Print a blank line between numbers (-l).
    pub line_spacing: bool,
    /// Label every line of output with its base (-v).
    pub verbose: bool,
    /// Decode the input as packed 8-bit character codes (-t).
    pub text_mode: bool,
}

impl Options {
    /// Apply the startup defaults:  decimal turns on when no base is
    /// selected, and sectioning turns off when either precise hex form is
    /// selected.
    pub fn normalize(mut self) -> Self {
        if self.conversions() == 0 {
            self.decimal = true;
        }
        if self.precise_hex || self.precise_hex_caps {
            self.sections = false;
        }
        self
    }

    /// The number of selected base conversions.
    pub fn conversions(&self) -> usize {
        [
            self.binary,
            self.decimal,
            self.octal,
            self.hex,
            self.hex_caps,
            self.precise_hex,
            self.precise_hex_caps,
        ]
        .iter()
        .filter(|b| **b)
        .count()
    }
}

//////////////////////////////////////////// validation ////////////////////////////////////////////

/// Check that a token is a binary number.  A trailing run of newline or NUL
/// characters is ignored; every other character must be '0' or '1'.
pub fn check_binary(token: &str) -> Result<(), Error> {
    let trimmed = token.trim_end_matches(|c| c == '\n' || c == '\0');
    for (position, character) in trimmed.chars().enumerate() {
        if character != '0' && character != '1' {
            return Err(Error::InvalidBinaryDigit {
                position,
                character,
            });
        }
    }
    Ok(())
}

//////////////////////////////////////////// conversion ////////////////////////////////////////////

/// Convert a big-endian binary token to its value.
///
/// The token is scanned from its last character to its first.  '1' sets the
/// bit at the current position and advances; '0' only advances; any other
/// character is skipped without advancing, so stray newline and NUL
/// characters do not disturb the value.  Empty and all-zero tokens are 0.  A
/// '1' at bit position 64 or higher fails with [Error::TooManyBits].
pub fn binary_to_decimal(token: &str) -> Result<u64, Error> {
    let mut value = 0u64;
    let mut position = 0usize;
    for character in token.chars().rev() {
        match character {
            '1' => {
                if position >= 64 {
                    return Err(Error::TooManyBits { bits: position + 1 });
                }
                value |= 1u64 << position;
                position += 1;
            }
            '0' => {
                position += 1;
            }
            _ => {}
        }
    }
    Ok(value)
}

//////////////////////////////////////////// formatting ////////////////////////////////////////////

/// Render a value in the hexadecimal floating-point form of printf's %a:
/// "0x1.6p+3" is 1.375 * 2^3 = 11.  The exponent is the position of the most
/// significant set bit and the fraction is the bits below it, trailing zeros
/// dropped.  Zero renders as "0x0p+0".  With caps, the digits and markers
/// come out in capitals, as %A prints them.
///
/// Unlike a rendering that routes through a double, this one is exact for
/// every u64, including values past 2^53.
pub fn precise_hex(value: u64, caps: bool) -> String {
    let alphabet: &[u8; 16] = if caps {
        b"0123456789ABCDEF"
    } else {
        b"0123456789abcdef"
    };
    let (x, p) = if caps { ('X', 'P') } else { ('x', 'p') };
    if value == 0 {
        return format!("0{x}0{p}+0");
    }
    let exponent = 63 - value.leading_zeros();
    let mut fraction = if exponent == 0 {
        0
    } else {
        (value ^ (1u64 << exponent)) << (64 - exponent)
    };
    let mut rendered = format!("0{x}1");
    if fraction != 0 {
        rendered.push('.');
        while fraction != 0 {
            rendered.push(alphabet[(fraction >> 60) as usize] as char);
            fraction <<= 4;
        }
    }
    rendered.push(p);
    rendered.push('+');
    rendered += &exponent.to_string();
    rendered
}

/// Group a digit string four to a section, space-separated, grouping from the
/// left:  "101111" becomes "0010 1111".  The string is left-padded with
/// zeros to a multiple of four; a string already a multiple of four long
/// takes no padding.
pub fn sectioned(digits: &str) -> String {
    let pad = (4 - digits.len() % 4) % 4;
    let padded: String = std::iter::repeat('0').take(pad).chain(digits.chars()).collect();
    let mut grouped = String::with_capacity(padded.len() + padded.len() / 4);
    for (idx, c) in padded.chars().enumerate() {
        if idx > 0 && idx % 4 == 0 {
            grouped.push(' ');
        }
        grouped.push(c);
    }
    grouped
}

////////////////////////////////////////////// Printer /////////////////////////////////////////////

/// Printer renders tokens on an output stream according to [Options], with
/// warnings about unconvertible tokens going to a separate warning stream.
/// One printer serves a whole run; it carries the token count that drives
/// blank-line spacing.
pub struct Printer<W: Write, E: Write> {
    options: Options,
    output: W,
    warnings: E,
    count: usize,
}

impl<W: Write, E: Write> Printer<W, E> {
    /// Create a new Printer.  The options should already be normalized.
    pub fn new(options: Options, output: W, warnings: E) -> Self {
        Self {
            options,
            output,
            warnings,
            count: 0,
        }
    }

    /// Print one token.  In text mode the token decodes as character codes;
    /// otherwise it is validated, converted, and printed in every selected
    /// base, one line per base.  A token that fails to convert warns on the
    /// warning stream and does not interrupt the tokens that follow.
    pub fn print_token(&mut self, token: &str) -> Result<(), std::io::Error> {
        if self.options.text_mode {
            self.print_text(token)?;
            self.count += 1;
            return Ok(());
        }
        let value = match check_binary(token).and_then(|_| binary_to_decimal(token)) {
            Ok(value) => value,
            Err(Error::InvalidBinaryDigit { .. }) => {
                writeln!(self.warnings, "WARNING:  Not a binary number:\t{token}")?;
                self.count += 1;
                return Ok(());
            }
            Err(Error::TooManyBits { .. }) => {
                writeln!(self.warnings, "WARNING:  Number exceeds 64 bits:\t{token}")?;
                self.count += 1;
                return Ok(());
            }
        };
        if self.options.line_spacing && self.count > 0 {
            writeln!(self.output)?;
        }
        if self.options.binary {
            let trimmed = token.trim_end_matches(|c| c == '\n' || c == '\0');
            self.print_digits(trimmed, "BIN")?;
        }
        if self.options.decimal {
            self.print_digits(&format!("{value}"), "DEC")?;
        }
        if self.options.octal {
            self.print_digits(&format!("{value:o}"), "OCT")?;
        }
        if self.options.hex {
            self.print_digits(&format!("{value:x}"), "HEX")?;
        }
        if self.options.hex_caps {
            self.print_digits(&format!("{value:X}"), "HEX")?;
        }
        if self.options.precise_hex {
            self.print_digits(&precise_hex(value, false), "0xHEX")?;
        }
        if self.options.precise_hex_caps {
            self.print_digits(&precise_hex(value, true), "0xHEX")?;
        }
        self.count += 1;
        Ok(())
    }

    /// One line of digits, labeled and sectioned per the options.
    fn print_digits(&mut self, digits: &str, label: &str) -> Result<(), std::io::Error> {
        if self.options.verbose {
            write!(self.output, "{label}\t")?;
        }
        if self.options.sections {
            writeln!(self.output, "{}", sectioned(digits))
        } else {
            writeln!(self.output, "{digits}")
        }
    }

    /// Decode a token as character codes, eight bits to a character, and
    /// print each non-zero character.  The final chunk is whatever remains
    /// once fewer than nine characters are left.
    fn print_text(&mut self, token: &str) -> Result<(), std::io::Error> {
        let conversions = self.options.conversions();
        let mut rest = token;
        loop {
            if let Some((idx, _)) = rest.char_indices().nth(8) {
                let (chunk, remainder) = rest.split_at(idx);
                rest = remainder;
                // SAFETY(rescrv):  Eight characters hold at most eight bits.
                let value = binary_to_decimal(chunk).unwrap();
                if value != 0 {
                    self.print_text_char(value as u8, chunk)?;
                }
                if self.options.line_spacing {
                    writeln!(self.output)?;
                } else if self.options.verbose {
                    write!(self.output, "\t")?;
                }
            } else {
                // SAFETY(rescrv):  At most eight characters remain.
                let value = binary_to_decimal(rest).unwrap();
                if value != 0 {
                    self.print_text_char(value as u8, rest)?;
                    if self.options.line_spacing && conversions < 2 {
                        writeln!(self.output)?;
                    }
                }
                break;
            }
        }
        if !self.options.line_spacing {
            writeln!(self.output)?;
        }
        Ok(())
    }

    /// The per-character portion of text mode.  Verbose output prints one
    /// unit per selected base; otherwise the unit is the bare character.  The
    /// character goes out as its raw byte.
    fn print_text_char(&mut self, ch: u8, bits: &str) -> Result<(), std::io::Error> {
        let separator = if self.options.conversions() > 1 {
            if self.options.line_spacing {
                "\n"
            } else {
                "\t"
            }
        } else {
            ""
        };
        if self.options.verbose {
            if self.options.binary {
                self.output.write_all(&[ch])?;
                write!(self.output, "  BIN    {bits}{separator}")?;
            }
            if self.options.octal {
                self.output.write_all(&[ch])?;
                write!(self.output, "  OCT    {ch:o}{separator}")?;
            }
            if self.options.decimal {
                self.output.write_all(&[ch])?;
                write!(self.output, "  DEC    {ch}{separator}")?;
            }
            if self.options.hex {
                self.output.write_all(&[ch])?;
                write!(self.output, "  HEX    {ch:x}{separator}")?;
            }
            if self.options.hex_caps {
                self.output.write_all(&[ch])?;
                write!(self.output, "  HEX    {ch:X}{separator}")?;
            }
        } else {
            self.output.write_all(&[ch])?;
            write!(self.output, "{separator}")?;
        }
        Ok(())
    }
}

/////////////////////////////////////////// command line ///////////////////////////////////////////

/// Parse the command line into normalized [Options] and free arguments.
/// Every switch is a single letter and may repeat.  Unrecognized switches are
/// silently discarded, matching getopt's tolerance; any other parse failure
/// panics.  A lone "-" is a free argument.
#[cfg(feature = "command_line")]
pub fn parse_command_line(args: &[String]) -> (Options, Vec<String>) {
    let mut opts = getopts::Options::new();
    opts.optflagmulti("b", "", "Binary output.");
    opts.optflagmulti("d", "", "Decimal output (the default).");
    opts.optflagmulti("o", "", "Octal output.");
    opts.optflagmulti("x", "", "Hexadecimal output.");
    opts.optflagmulti("X", "", "Hexadecimal output with capital letters.");
    opts.optflagmulti("a", "", "Precise hex output.");
    opts.optflagmulti("A", "", "Precise hex output with capital letters.");
    opts.optflagmulti("s", "", "Output in four-character sections.");
    opts.optflagmulti("l", "", "Print a blank line between numbers.");
    opts.optflagmulti("v", "", "Label every line of output with its base.");
    opts.optflagmulti("t", "", "Text conversion mode.");
    let mut args = args.to_vec();
    let matches = loop {
        match opts.parse(&args) {
            Ok(matches) => break matches,
            Err(getopts::Fail::UnrecognizedOption(unrecognized)) => {
                discard_option(&mut args, &unrecognized);
            }
            Err(err) => {
                panic!("could not parse command line: {}", err);
            }
        }
    };
    let options = Options {
        binary: matches.opt_present("b"),
        decimal: matches.opt_present("d"),
        octal: matches.opt_present("o"),
        hex: matches.opt_present("x"),
        hex_caps: matches.opt_present("X"),
        precise_hex: matches.opt_present("a"),
        precise_hex_caps: matches.opt_present("A"),
        sections: matches.opt_present("s"),
        line_spacing: matches.opt_present("l"),
        verbose: matches.opt_present("v"),
        text_mode: matches.opt_present("t"),
    };
    (options.normalize(), matches.free)
}

/// Remove the unrecognized option so that parsing can retry.  A long option
/// drops its whole argument; a single letter is excised from the first short
/// cluster that mentions it.
#[cfg(feature = "command_line")]
fn discard_option(args: &mut Vec<String>, unrecognized: &str) {
    let name = unrecognized.trim_start_matches('-');
    let long = format!("--{name}");
    let assigned = format!("--{name}=");
    if let Some(idx) = args
        .iter()
        .position(|arg| *arg == long || arg.starts_with(&assigned))
    {
        args.remove(idx);
        return;
    }
    let mut chars = name.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        for idx in 0..args.len() {
            let arg = &args[idx];
            if arg.starts_with('-') && !arg.starts_with("--") && arg[1..].contains(letter) {
                let cluster: String = arg[1..].chars().filter(|c| *c != letter).collect();
                if cluster.is_empty() {
                    args.remove(idx);
                } else {
                    args[idx] = format!("-{cluster}");
                }
                return;
            }
        }
    }
    panic!("could not parse command line: unrecognized option {unrecognized:?}");
}

/////////////////////////////////////////////// tests //////////////////////////////////////////////
