use bin2dec::{Options, Printer};

fn run(options: Options, tokens: &[&str]) -> (String, String) {
    let mut output = Vec::new();
    let mut warnings = Vec::new();
    let mut printer = Printer::new(options.normalize(), &mut output, &mut warnings);
    for token in tokens {
        printer.print_token(token).unwrap();
    }
    drop(printer);
    (
        String::from_utf8(output).unwrap(),
        String::from_utf8(warnings).unwrap(),
    )
}

#[test]
fn default_is_decimal() {
    let (output, warnings) = run(Options::default(), &["1011"]);
    assert_eq!("11\n", output);
    assert_eq!("", warnings);
}

#[test]
fn several_tokens() {
    let (output, warnings) = run(Options::default(), &["1011", "101"]);
    assert_eq!("11\n5\n", output);
    assert_eq!("", warnings);
}

#[test]
fn line_spacing_separates_tokens() {
    let options = Options {
        line_spacing: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["1011", "101"]);
    assert_eq!("11\n\n5\n", output);
}

#[test]
fn binary_echoes_the_token() {
    let options = Options {
        binary: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["0011"]);
    assert_eq!("0011\n", output);
}

#[test]
fn binary_echo_is_sectioned() {
    let options = Options {
        binary: true,
        sections: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["11111111"]);
    assert_eq!("1111 1111\n", output);
}

#[test]
fn sections_pad_short_digits() {
    let options = Options {
        sections: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["1011"]);
    assert_eq!("0011\n", output);
}

#[test]
fn sections_leave_full_groups_alone() {
    let options = Options {
        sections: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["1111101000"]);
    assert_eq!("1000\n", output);
}

#[test]
fn every_base_in_order() {
    let options = Options {
        binary: true,
        decimal: true,
        octal: true,
        hex: true,
        hex_caps: true,
        precise_hex: true,
        precise_hex_caps: true,
        verbose: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["1011"]);
    assert_eq!(
        "BIN\t1011\nDEC\t11\nOCT\t13\nHEX\tb\nHEX\tB\n0xHEX\t0x1.6p+3\n0xHEX\t0X1.6P+3\n",
        output,
    );
}

#[test]
fn hex_without_labels() {
    let options = Options {
        hex: true,
        hex_caps: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["11111111"]);
    assert_eq!("ff\nFF\n", output);
}

#[test]
fn precise_hex_disables_sections_for_the_run() {
    let options = Options {
        hex: true,
        precise_hex: true,
        sections: true,
        verbose: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["11111111"]);
    assert_eq!("HEX\tff\n0xHEX\t0x1.fep+7\n", output);
}

#[test]
fn invalid_tokens_warn_and_continue() {
    let (output, warnings) = run(Options::default(), &["102", "11"]);
    assert_eq!("3\n", output);
    assert_eq!("WARNING:  Not a binary number:\t102\n", warnings);
}

#[test]
fn too_wide_tokens_warn_and_continue() {
    let wide = format!("1{}", "0".repeat(64));
    let (output, warnings) = run(Options::default(), &[wide.as_str(), "1"]);
    assert_eq!("1\n", output);
    assert_eq!(format!("WARNING:  Number exceeds 64 bits:\t{wide}\n"), warnings);
}

#[test]
fn warned_tokens_count_for_line_spacing() {
    let options = Options {
        line_spacing: true,
        ..Options::default()
    };
    let (output, warnings) = run(options, &["1", "102", "1"]);
    assert_eq!("1\n\n1\n", output);
    assert_eq!("WARNING:  Not a binary number:\t102\n", warnings);
}

#[test]
fn text_mode_decodes_a_character() {
    let options = Options {
        text_mode: true,
        ..Options::default()
    };
    let (output, warnings) = run(options, &["01000001"]);
    assert_eq!("A\n", output);
    assert_eq!("", warnings);
}

#[test]
fn text_mode_decodes_several_characters() {
    let options = Options {
        text_mode: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["0100100001001001"]);
    assert_eq!("HI\n", output);
}

#[test]
fn text_mode_skips_zero_chunks() {
    let options = Options {
        text_mode: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["0000000001001000"]);
    assert_eq!("H\n", output);
}

#[test]
fn text_mode_takes_a_short_final_chunk() {
    let options = Options {
        text_mode: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["1000001"]);
    assert_eq!("A\n", output);
}

#[test]
fn text_mode_splits_after_eight_characters() {
    let options = Options {
        text_mode: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["010000011"]);
    assert_eq!("A\u{1}\n", output);
}

#[test]
fn text_mode_verbose_labels_the_character() {
    let options = Options {
        text_mode: true,
        verbose: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["01000001"]);
    assert_eq!("A  DEC    65\n", output);
}

#[test]
fn text_mode_verbose_two_bases() {
    let options = Options {
        text_mode: true,
        verbose: true,
        decimal: true,
        hex: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["01000001"]);
    assert_eq!("A  DEC    65\tA  HEX    41\t\n", output);
}

#[test]
fn text_mode_verbose_base_order() {
    let options = Options {
        text_mode: true,
        verbose: true,
        binary: true,
        octal: true,
        decimal: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["01000001"]);
    assert_eq!("A  BIN    01000001\tA  OCT    101\tA  DEC    65\t\n", output);
}

#[test]
fn text_mode_line_spacing_one_character_per_line() {
    let options = Options {
        text_mode: true,
        line_spacing: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["0100100001001001"]);
    assert_eq!("H\nI\n", output);
}

#[test]
fn text_mode_line_spacing_two_bases() {
    let options = Options {
        text_mode: true,
        line_spacing: true,
        decimal: true,
        hex: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["01000001"]);
    assert_eq!("A\n", output);
}

#[test]
fn text_mode_has_no_blank_lines_between_tokens() {
    let options = Options {
        text_mode: true,
        line_spacing: true,
        ..Options::default()
    };
    let (output, _) = run(options, &["01000001", "01000010"]);
    assert_eq!("A\nB\n", output);
}
