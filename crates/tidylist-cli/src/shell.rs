//! Interactive command loop. Owns the single `TaskRegistry` instance and
//! translates free-form input lines into registry calls; all number
//! parsing and message formatting happens here, never in the core.

use std::io::{self, BufRead, Write};

use tidylist_core::registry::TaskRegistry;
use tidylist_core::task::{Status, Task};

const HELP: &str = "\
Available commands:
  add <description>             - Add a new todo item
  list / view                   - Display all todo items
  complete <id>                 - Mark a todo item as completed
  update <id> <new description> - Update a todo item description
  delete <id>                   - Delete a todo item
  help                          - Show this help message
  quit / exit                   - Exit the application";

pub fn run<R: BufRead, W: Write>(mut input: R, mut out: W) -> io::Result<()> {
    writeln!(out, "Welcome to Tidylist!")?;
    writeln!(out, "Type 'help' for available commands or 'quit' to exit.")?;

    let mut registry = TaskRegistry::new();
    let mut line = String::new();
    loop {
        write!(out, "\n> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out, "Goodbye!")?;
            break;
        }
        let trimmed = line.trim();
        if trimmed.is_empty() {
            writeln!(out, "Please enter a command. Type 'help' for available commands.")?;
            continue;
        }

        let (command, args) = parse_line(trimmed);
        match command {
            "quit" | "exit" => {
                writeln!(out, "Goodbye!")?;
                break;
            }
            "help" => writeln!(out, "{HELP}")?,
            _ => dispatch(&mut registry, command, &args, &mut out)?,
        }
    }
    Ok(())
}

fn dispatch<W: Write>(
    registry: &mut TaskRegistry,
    command: &str,
    args: &[&str],
    out: &mut W,
) -> io::Result<()> {
    match command {
        "add" => handle_add(registry, args, out),
        "list" | "view" => handle_list(registry, out),
        "complete" => handle_complete(registry, args, out),
        "update" => handle_update(registry, args, out),
        "delete" => handle_delete(registry, args, out),
        other => writeln!(
            out,
            "{}",
            error_line(&format!(
                "Unknown command: {other}. Type 'help' for available commands."
            ))
        ),
    }
}

/// Split one input line into a command word and its argument words.
fn parse_line(line: &str) -> (&str, Vec<&str>) {
    let mut words = line.split_whitespace();
    let command = words.next().unwrap_or("");
    (command, words.collect())
}

fn error_line(message: &str) -> String {
    format!("Error: {message}")
}

fn render_task(task: &Task) -> String {
    let marker = match task.status() {
        Status::Completed => 'x',
        Status::Pending => ' ',
    };
    format!("{}. [{marker}] {}", task.id(), task.description())
}

fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

fn handle_add<W: Write>(registry: &mut TaskRegistry, args: &[&str], out: &mut W) -> io::Result<()> {
    if args.is_empty() {
        writeln!(
            out,
            "{}",
            error_line("Please provide a description for the new todo item.")
        )?;
        return writeln!(out, "Usage: add <description>");
    }
    let description = args.join(" ");
    match registry.add(&description) {
        Ok(task) => writeln!(out, "Added: \"{}\" (ID: {})", task.description(), task.id()),
        Err(err) => writeln!(out, "{}", error_line(&err.to_string())),
    }
}

fn handle_list<W: Write>(registry: &TaskRegistry, out: &mut W) -> io::Result<()> {
    if registry.is_empty() {
        return writeln!(out, "Your todo list is empty.");
    }
    for task in registry.all() {
        writeln!(out, "{}", render_task(task))?;
    }
    Ok(())
}

fn handle_complete<W: Write>(
    registry: &mut TaskRegistry,
    args: &[&str],
    out: &mut W,
) -> io::Result<()> {
    if args.len() != 1 {
        writeln!(
            out,
            "{}",
            error_line("Please provide the ID of the item to complete.")
        )?;
        return writeln!(out, "Usage: complete <id>");
    }
    let Some(id) = parse_id(args[0]) else {
        writeln!(out, "{}", error_line("Please provide a valid ID (integer)."))?;
        return writeln!(out, "Usage: complete <id>");
    };
    let Some(description) = registry.get(id).map(|task| task.description().to_string()) else {
        return writeln!(
            out,
            "{}",
            error_line(&format!("No todo item found with ID {id}."))
        );
    };
    registry.complete(id);
    writeln!(out, "Marked as complete: \"{description}\"")
}

fn handle_update<W: Write>(
    registry: &mut TaskRegistry,
    args: &[&str],
    out: &mut W,
) -> io::Result<()> {
    if args.len() < 2 {
        writeln!(
            out,
            "{}",
            error_line("Please provide an ID and new description.")
        )?;
        return writeln!(out, "Usage: update <id> <new description>");
    }
    let Some(id) = parse_id(args[0]) else {
        writeln!(out, "{}", error_line("Please provide a valid ID (integer)."))?;
        return writeln!(out, "Usage: update <id> <new description>");
    };
    let new_description = args[1..].join(" ");
    match registry.update(id, &new_description) {
        Ok(true) => writeln!(out, "Updated: \"{new_description}\""),
        Ok(false) => writeln!(
            out,
            "{}",
            error_line(&format!("No todo item found with ID {id}."))
        ),
        Err(err) => writeln!(out, "{}", error_line(&err.to_string())),
    }
}

fn handle_delete<W: Write>(
    registry: &mut TaskRegistry,
    args: &[&str],
    out: &mut W,
) -> io::Result<()> {
    if args.len() != 1 {
        writeln!(
            out,
            "{}",
            error_line("Please provide the ID of the item to delete.")
        )?;
        return writeln!(out, "Usage: delete <id>");
    }
    let Some(id) = parse_id(args[0]) else {
        writeln!(out, "{}", error_line("Please provide a valid ID (integer)."))?;
        return writeln!(out, "Usage: delete <id>");
    };
    let Some(description) = registry.get(id).map(|task| task.description().to_string()) else {
        return writeln!(
            out,
            "{}",
            error_line(&format!("No todo item found with ID {id}."))
        );
    };
    registry.delete(id);
    writeln!(out, "Deleted: \"{description}\"")
}
