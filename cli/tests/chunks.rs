use predicates::prelude::*;

#[test]
fn list_chunks() {
    let mut cmd = assert_cmd::Command::cargo_bin("pngmeta").unwrap();
    cmd.args(["chunks", "../resources/test/plain.png"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("IHDR"))
        .stdout(predicate::str::contains("IDAT"))
        .stdout(predicate::str::contains("IEND"));
}

#[test]
fn list_chunks_long() {
    let mut cmd = assert_cmd::Command::cargo_bin("pngmeta").unwrap();
    cmd.args(["chunks", "-H", "-l", "../resources/test/metadata.png"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Offset"))
        .stdout(predicate::str::contains("Title=Sample"))
        .stdout(predicate::str::contains("00000b1300000b1301"));
}

#[test]
fn list_chunks_of_missing_file() {
    let mut cmd = assert_cmd::Command::cargo_bin("pngmeta").unwrap();
    cmd.args(["chunks", "../resources/test/not_found.png"]);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}
