use std::io::Write;
use std::process::{Command, Stdio};

fn bin() -> Command {
    Command::new(env!("CARGO_BIN_EXE_tidylist"))
}

fn run_session(script: &str) -> String {
    let mut child = bin()
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .spawn()
        .expect("spawn tidylist");
    child
        .stdin
        .take()
        .expect("stdin")
        .write_all(script.as_bytes())
        .expect("write script");
    let output = child.wait_with_output().expect("wait");
    assert!(output.status.success());
    String::from_utf8(output.stdout).expect("utf8")
}

#[test]
fn version_subcommand_prints_version() {
    let output = bin().arg("version").output().expect("run version");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    assert!(stdout.starts_with("tidylist "));
}

#[test]
fn interactive_session_manages_tasks_end_to_end() {
    let output = run_session(
        "add Buy groceries\n\
         add Walk the dog\n\
         complete 2\n\
         list\n\
         delete 1\n\
         list\n\
         quit\n",
    );

    assert!(output.contains("Welcome to Tidylist!"));
    assert!(output.contains("Added: \"Buy groceries\" (ID: 1)"));
    assert!(output.contains("Added: \"Walk the dog\" (ID: 2)"));
    assert!(output.contains("Marked as complete: \"Walk the dog\""));
    assert!(output.contains("1. [ ] Buy groceries"));
    assert!(output.contains("2. [x] Walk the dog"));
    assert!(output.contains("Deleted: \"Buy groceries\""));
    assert!(output.contains("Goodbye!"));

    // After the delete, the second listing no longer shows task 1.
    let after_delete = output.rsplit("Deleted:").next().expect("tail");
    assert!(!after_delete.contains("1. [ ] Buy groceries"));
    assert!(after_delete.contains("2. [x] Walk the dog"));
}

#[test]
fn interactive_session_surfaces_errors_without_exiting() {
    let output = run_session(
        "complete 7\n\
         update two Something\n\
         add\n\
         help\n\
         list\n\
         exit\n",
    );

    assert!(output.contains("Error: No todo item found with ID 7."));
    assert!(output.contains("Error: Please provide a valid ID (integer)."));
    assert!(output.contains("Error: Please provide a description for the new todo item."));
    assert!(output.contains("Available commands:"));
    assert!(output.contains("Your todo list is empty."));
    assert!(output.contains("Goodbye!"));
}

#[test]
fn closing_stdin_ends_the_session() {
    let output = run_session("add One\n");
    assert!(output.contains("Added: \"One\" (ID: 1)"));
    assert!(output.trim_end().ends_with("Goodbye!"));
}
