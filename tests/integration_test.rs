use assert_cmd::Command;
use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::tempdir;

fn packager() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("packager"));
    cmd.env_remove("PACKAGER_STATE");
    cmd
}

#[test]
fn test_end_to_end_session() {
    let script = "\
DEPEND foo bar foobar
DEPEND bar baz
DEPEND newfoo baz
INSTALL foo
INSTALL newfoo
LIST
REMOVE foo
LIST
END
";

    packager()
        .write_stdin(script)
        .assert()
        .success()
        .stdout(
            "\tInstalling baz\n\
             \tInstalling bar\n\
             \tInstalling foobar\n\
             \tInstalling foo\n\
             \tInstalling newfoo\n\
             \tbar\n\
             \tbaz\n\
             \tfoo\n\
             \tfoobar\n\
             \tnewfoo\n\
             \tRemoving foo\n\
             \tRemoving bar\n\
             \tRemoving foobar\n\
             \tbaz\n\
             \tnewfoo\n",
        );
}

#[test]
fn test_shell_subcommand_reads_stdin() {
    packager()
        .arg("shell")
        .write_stdin("INSTALL foo\nINSTALL foo\n")
        .assert()
        .success()
        .stdout("\tInstalling foo\n\tfoo is already installed.\n");
}

#[test]
fn test_end_stops_session() {
    packager()
        .write_stdin("INSTALL foo\nEND\nINSTALL bar\n")
        .assert()
        .success()
        .stdout("\tInstalling foo\n");
}

#[test]
fn test_remove_not_installed() {
    packager()
        .write_stdin("REMOVE foo\nLIST\n")
        .assert()
        .success()
        .stdout("\tfoo is not installed.\n");
}

#[test]
fn test_still_needed() {
    packager()
        .write_stdin("DEPEND foo bar\nDEPEND new_foo bar\nINSTALL foo\nINSTALL new_foo\nREMOVE bar\n")
        .assert()
        .success()
        .stdout(predicates::str::contains("\tbar is still needed.\n"));
}

#[test]
fn test_malformed_commands_are_reported() {
    packager()
        .write_stdin("INSTALL\nFROB foo\nINSTALL foo\n")
        .assert()
        .success()
        .stdout(
            "ERROR: INSTALL requires a package name\n\
             ERROR: unknown command FROB\n\
             \tInstalling foo\n",
        );
}

#[test]
fn test_run_script_file() {
    let dir = tempdir().unwrap();
    let script = dir.path().join("setup.txt");
    std::fs::write(&script, "DEPEND foo bar\nINSTALL foo\nLIST\n").unwrap();

    packager()
        .arg("run")
        .arg(&script)
        .assert()
        .success()
        .stdout("\tInstalling bar\n\tInstalling foo\n\tbar\n\tfoo\n");
}

#[test]
fn test_run_missing_script() {
    let dir = tempdir().unwrap();

    packager()
        .arg("run")
        .arg(dir.path().join("missing.txt"))
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to open script"));
}

#[test]
fn test_state_persists_between_sessions() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("nested/state.json");

    packager()
        .arg("--state")
        .arg(&state)
        .write_stdin("DEPEND foo bar\nINSTALL foo\nINSTALL bar\nEND\n")
        .assert()
        .success();

    assert!(state.exists());

    // bar is manually installed, so removing foo keeps it
    packager()
        .arg("--state")
        .arg(&state)
        .write_stdin("REMOVE foo\nLIST\n")
        .assert()
        .success()
        .stdout("\tRemoving foo\n\tbar\n");

    packager()
        .env("PACKAGER_STATE", &state)
        .write_stdin("LIST\n")
        .assert()
        .success()
        .stdout("\tbar\n");
}

#[test]
fn test_invalid_utf8_line_keeps_session_state() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");

    packager()
        .arg("--state")
        .arg(&state)
        .write_stdin(&b"INSTALL foo\n\xff\nINSTALL bar\n"[..])
        .assert()
        .success()
        .stdout(predicates::str::contains("ERROR: unknown command"));

    packager()
        .arg("--state")
        .arg(&state)
        .write_stdin("LIST\n")
        .assert()
        .success()
        .stdout("\tbar\n\tfoo\n");
}

#[test]
fn test_corrupt_state_fails() {
    let dir = tempdir().unwrap();
    let state = dir.path().join("state.json");
    std::fs::write(&state, "not json").unwrap();

    packager()
        .arg("--state")
        .arg(&state)
        .write_stdin("LIST\n")
        .assert()
        .failure()
        .stderr(predicates::str::contains("Failed to parse state"));

    // the broken file is left alone
    assert_eq!(std::fs::read_to_string(&state).unwrap(), "not json");
}

#[test]
fn test_help_lists_commands() {
    packager()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("run").and(predicate::str::contains("--state")));
}
