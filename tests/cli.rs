use std::io::Write;
use std::process::{Command, Output, Stdio};

const PROMPTS: &str = "Minimum real: Minimum imaginary: Size: ";

fn run(stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mandelbrot"))
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn renders_classic_framing() {
    let output = run("-2.0\n-1.0\n2.5\n");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let grid = stdout.strip_prefix(PROMPTS).unwrap();
    let lines: Vec<&str> = grid.split_terminator('\n').collect();
    assert_eq!(lines.len(), 35);
    assert!(lines.iter().all(|line| line.len() == 70));
    assert!(grid.ends_with('\n'));

    assert!(lines[0].starts_with(' '));
    assert!(lines.iter().any(|line| line.contains('@')));
}

#[test]
fn output_matches_library_render() {
    use mandelbrot::common::render::{render_to_string, Region};

    let output = run("-0.8 0.0 0.4");
    assert!(output.status.success());
    let expected = format!("{PROMPTS}{}", render_to_string(&Region::new(-0.8, 0.0, 0.4)));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn malformed_first_value() {
    let output = run("hello\n-1.0\n2.5\n");
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Minimum real: Invalid input\n"
    );
}

#[test]
fn malformed_size() {
    let output = run("-2.0\n-1.0\nbig\n");
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{PROMPTS}Invalid input\n")
    );
}

#[test]
fn missing_input() {
    let output = run("");
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "Minimum real: Invalid input\n"
    );
}

#[test]
fn trailing_text_after_size_still_renders() {
    use mandelbrot::common::render::{render_to_string, Region};

    let output = run("-2 -1 2.5abc");
    assert!(output.status.success());
    let expected = format!("{PROMPTS}{}", render_to_string(&Region::new(-2.0, -1.0, 2.5)));
    assert_eq!(String::from_utf8(output.stdout).unwrap(), expected);
}

#[test]
fn trailing_text_fails_the_next_value() {
    let output = run("-2.0 1.5x 2.5");
    assert!(!output.status.success());
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        format!("{PROMPTS}Invalid input\n")
    );
}

#[test]
fn accepts_hex_floats() {
    let output = run("0x1p1 0 1");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.strip_prefix(PROMPTS).unwrap().lines().count(), 35);
}
