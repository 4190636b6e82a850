use std::io::Write;
use std::process::{Command, Output};

use tempfile::NamedTempFile;

fn text_file(contents: &[u8]) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents).unwrap();
    file
}

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_huffman-cost"))
        .args(args)
        .output()
        .expect("failed to run huffman-cost")
}

#[test]
fn no_arguments_prints_usage_and_fails() {
    let output = run(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("<input_file>"));
}

#[test]
fn reports_each_file_in_order() {
    let first = text_file(b"xxxxxxx");
    let second = text_file(b"aabbbb");
    let first_name = first.path().to_str().unwrap();
    let second_name = second.path().to_str().unwrap();

    let output = run(&[first_name, second_name]);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Fixed-length cost for {}: 3", first_name),
            format!("Huffman cost for {}: 7", first_name),
            format!("Fixed-length cost for {}: 3", second_name),
            format!("Huffman cost for {}: 6", second_name),
        ]
    );
}

#[test]
fn failed_file_is_skipped_and_exit_status_is_set() {
    let first = text_file(b"xxxxxxx");
    let empty = text_file(b"");
    let last = text_file(b"aabbbb");
    let first_name = first.path().to_str().unwrap();
    let empty_name = empty.path().to_str().unwrap();
    let last_name = last.path().to_str().unwrap();

    let output = run(&[first_name, empty_name, last_name]);
    assert_eq!(output.status.code(), Some(1));

    let stdout = String::from_utf8(output.stdout).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            format!("Fixed-length cost for {}: 3", first_name),
            format!("Huffman cost for {}: 7", first_name),
            format!("Fixed-length cost for {}: 3", last_name),
            format!("Huffman cost for {}: 6", last_name),
        ]
    );
}
