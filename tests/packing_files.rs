use std::fs;
use std::path::PathBuf;

use packer::packing::{pack, PackError};
use tempfile::tempdir;

fn write_input(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn packs_the_sample_input_file() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        "input.txt",
        concat!(
            "81 : (1,53.38,€45) (2,88.62,€98) (3,78.48,€3) (4,72.30,€76) (5,30.18,€9) (6,46.34,€48)\n",
            "8 : (1,15.3,€34)\n",
            "75 : (1,85.31,€29) (2,14.55,€74) (3,3.98,€16) (4,26.24,€55) (5,63.69,€52) (6,76.25,€75) (7,60.02,€74) (8,93.18,€35) (9,89.95,€78)\n",
            "56 : (1,90.72,€13) (2,33.80,€40) (3,43.15,€10) (4,37.97,€16) (5,46.81,€36) (6,48.77,€79) (7,81.80,€45) (8,19.36,€79) (9,6.76,€64)\n",
        ),
    );

    let output = pack(&input).unwrap();
    assert_eq!(output, "4\n-\n2,7\n8,9\n");
}

#[test]
fn packs_same_price_different_weight() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "input.txt", "50 : (1,40,€60) (2,30,€60)\n");

    let output = pack(&input).unwrap();
    assert_eq!(output, "2\n");
}

#[test]
fn packs_more_than_fifteen_things() {
    let dir = tempdir().unwrap();
    let groups: Vec<String> = (1..=17).map(|id| format!("({id},1,€10)")).collect();
    let line = format!("100 : {}\n", groups.join(" "));
    let input = write_input(&dir, "input.txt", &line);

    let output = pack(&input).unwrap();
    let line = output.trim_end();
    assert_ne!(line, "-");

    let ids: Vec<u32> = line.split(',').map(|id| id.parse().unwrap()).collect();
    assert_eq!(ids.len(), 15, "quantity cap must bound the result");
    assert!(ids.iter().all(|id| (1..=17).contains(id)));
}

#[test]
fn skips_blank_lines_without_output() {
    let dir = tempdir().unwrap();
    let input = write_input(&dir, "input.txt", "8 : (1,15.3,€34)\n\n   \n50 :\n");

    let output = pack(&input).unwrap();
    assert_eq!(output, "-\n-\n");
}

#[test]
fn malformed_line_aborts_the_whole_run() {
    let dir = tempdir().unwrap();
    let input = write_input(
        &dir,
        "input.txt",
        "8 : (1,15.3,€34)\n81 : (1,53.38,45)\n50 :\n",
    );

    let err = pack(&input).unwrap_err();
    assert!(matches!(err, PackError::Format(_)), "{err}");
}

#[test]
fn missing_file_surfaces_an_io_error() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("does-not-exist.txt");

    let err = pack(&missing).unwrap_err();
    assert!(matches!(err, PackError::Io(_)), "{err}");
}
