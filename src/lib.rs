//! # academy_index
//! In-memory indexes for a dance academy: students ordered by enrollment
//! time in an AVL tree, instructors ordered by id in a plain binary
//! search tree.
//!
//! ## Features
//! - [`BalancedIndex`]: self-balancing insert, lookup, in-order traversal
//! - [`UnbalancedIndex`]: insert, traced lookup, successor-swap delete
//! - Student and instructor records with input validation
//! - Payroll with seniority, popularity and tango bonuses
//! - Command parsing with case-insensitive commands
//!
//! ## Usage
//! This crate is primarily consumed by the binary in `main.rs`,
//! which provides the REPL interface. All reusable logic and
//! unit tests live here so the project can be tested with `cargo test`.
// =====================================================================
// File: lib.rs
// Author: Bob Jack
// Project: Dance Academy Index
// Date: Dec. 8, 2025
//
//   This module implements the command-line interface (CLI)
//   that accepts the following commands:
//
//     `ENROLL <first> <last> <day> <month> <hour> <minute> <prefs>`
//                         -> Enroll a student this year; month is a number
//                            or name, prefs are menu numbers like 1,3,5
//     `HIRE <first> <last> <hired_year> <base_salary> <style>`
//                         -> Hire an instructor under a random id
//     `PAYROLL`           -> Gross, pension and net pay per instructor
//     `STUDENTS`          -> List students in enrollment order
//     `INSTRUCTORS`       -> List instructors in id order
//     `FIND <id>`         -> Show the search path, then the instructor
//     `DISMISS <id>`      -> Remove instructor: 1 if removed, 0 if not found
//     `EXIT`              -> Terminate the program
// =====================================================================
pub mod config;
pub use config::{AcademyConfig, PayrollConfig};

pub mod error;
pub use error::{IndexError, RecordError, SessionError};

pub mod index;
pub use index::{BalancedIndex, DeleteOutcome, InsertOutcome, Keyed, UnbalancedIndex};

pub mod records;
pub use records::{DanceStyle, EnrollmentStamp, Instructor, Student};

pub mod payroll;
pub use payroll::PayStub;

pub mod session;
pub use session::Session;

use std::io::{self, BufRead};

use chrono::{Datelike, Local};
use tracing::warn;

use records::{parse_month, parse_preference_list, MAX_PREFERENCES};

/// Result of handling a single user command.
///
/// - `Continue` means the REPL should keep running.
/// - `Exit` means the REPL should break out and terminate.
pub enum CommandResult {
    Continue,
    Exit,
}


/// Read–Evaluate–Print Loop (REPL) to handle interactive command input.
///
/// Continuously reads user commands from standard input, executes them
/// against the current [`Session`] and prints responses back to
/// standard output.
///
/// # Example
/// ```no_run
/// use academy_index::{Session, repl_loop};
///
/// let mut session = Session::new();
/// repl_loop(&mut session); // <- waits for user input interactively
/// ```
pub fn repl_loop(session: &mut Session) {
    let stdin = io::stdin();
    let proper_syntax = "Syntax Usage: ENROLL, HIRE, PAYROLL, STUDENTS, INSTRUCTORS, FIND <id>, DISMISS <id>, EXIT";

    // Form a loop to iterate over each input line; lock mutex
    for input_line in stdin.lock().lines() {
        let full_command = match input_line {
            Ok(line) => line,
            Err(e) => {
                warn!(error = %e, "failed to read from stdin");
                break;
            }
        };
        let (cmd, args) = parse_command(&full_command);

        // Process command and arguments
        match handle_command(&cmd, &args, proper_syntax, session) {
            CommandResult::Exit => break,
            CommandResult::Continue => (),
        }
    }
}


/// Parses a raw input line into a command and its arguments.
///
/// The first token is treated as the command (normalized to uppercase),
/// and the remaining tokens are collected as arguments. Leading and
/// trailing whitespace is ignored.
fn parse_command(line: &str) -> (String, Vec<String>) {
    let mut command_segments = line.trim().split_whitespace();
    // Pulling out the command to normalize if lowercase is used
    let cmd = command_segments.next().unwrap_or("").to_uppercase();
    let args: Vec<String> = command_segments.map(|s| s.to_string()).collect();

    (cmd, args)
}


/// Handles a single user command and returns whether the REPL should continue or exit.
///
/// - Only supported commands will operate - Any other input: Prints an error and redisplays the syntax.
///
/// Returns:
/// - `CommandResult::Continue` if the loop should keep running.
/// - `CommandResult::Exit` if the user requested termination.
///
/// The `proper_syntax` argument is displayed in error messages to guide the user.
fn handle_command(cmd: &str, args: &[String], proper_syntax: &str, session: &mut Session) -> CommandResult {
    let today = Local::now().date_naive();

    match cmd {

        // Enroll command format:  ENROLL <first> <last> <day> <month> <hour> <minute> <prefs>
        "ENROLL" => {
            if args.len() != 7 {
                println!("ERR: ENROLL requires <first> <last> <day> <month> <hour> <minute> <prefs>");
                return CommandResult::Continue;
            }

            let name = format!("{} {}", args[0], args[1]);
            let stamp = match parse_enrollment(&args[2..6], today.year()) {
                Ok(stamp) => stamp,
                Err(e) => {
                    println!("ERR: {}", e);
                    return CommandResult::Continue;
                }
            };

            match parse_preference_list(&args[6], MAX_PREFERENCES)
                .map_err(SessionError::from)
                .and_then(|prefs| session.enroll_student(&name, stamp, prefs))
            {
                Ok(id) => println!("Student enrolled with ID: {}", id),
                Err(e) => println!("ERR: {}", e),
            }
            CommandResult::Continue
        }

        // Hire command format:  HIRE <first> <last> <hired_year> <base_salary> <style>
        "HIRE" => {
            if args.len() != 5 {
                println!("ERR: HIRE requires <first> <last> <hired_year> <base_salary> <style>");
                return CommandResult::Continue;
            }

            let name = format!("{} {}", args[0], args[1]);
            let Ok(hired_year) = args[2].parse::<i32>() else {
                println!("ERR: Invalid year '{}'", args[2]);
                return CommandResult::Continue;
            };
            // No hiring dates in the future
            if hired_year > today.year() {
                println!("ERR: {}", RecordError::InvalidYear(hired_year));
                return CommandResult::Continue;
            }
            let Ok(base_salary) = args[3].parse::<f64>() else {
                println!("ERR: Invalid salary '{}'", args[3]);
                return CommandResult::Continue;
            };
            let style = match parse_style(&args[4]) {
                Ok(style) => style,
                Err(e) => {
                    println!("ERR: {}", e);
                    return CommandResult::Continue;
                }
            };

            match session.hire_new_instructor(&name, hired_year, base_salary, style) {
                Ok(id) => println!("Instructor hired with ID: {}", id),
                Err(e) => println!("ERR: {}", e),
            }
            CommandResult::Continue
        }

        // Payroll command format:  PAYROLL
        "PAYROLL" => {
            if !args.is_empty() {
                println!("ERR: PAYROLL does not take any arguments");
            } else if session.instructors.is_empty() {
                println!("No instructors registered.");
            } else {
                for stub in session.payroll(today.year()) {
                    println!("\nInstructor: {}", stub.name);
                    println!("Gross Salary: ${:.2}", stub.gross);
                    println!("Pension: ${:.2}", stub.pension);
                    println!("Net Salary: ${:.2}", stub.net);
                }
            }
            CommandResult::Continue
        }

        // Students command format:  STUDENTS
        "STUDENTS" => {
            if session.students.is_empty() {
                println!("No students enrolled.");
            }
            for student in session.students() {
                println!("{}", student);
            }
            CommandResult::Continue
        }

        // Instructors command format:  INSTRUCTORS
        "INSTRUCTORS" => {
            if session.instructors.is_empty() {
                println!("No instructors registered.");
            }
            for instructor in session.instructors() {
                println!("{}", instructor);
            }
            CommandResult::Continue
        }

        // Find command format:  FIND <id>
        "FIND" => {
            let Some(id) = single_id(cmd, args) else {
                return CommandResult::Continue;
            };

            println!("Path:");
            let found = session.find_instructor(id, |visited| {
                println!("Visited: {} - {}", visited.id(), visited.name());
            });

            match found {
                Some(instructor) => {
                    println!("\nFound:");
                    println!("Name: {}", instructor.name());
                    println!("Base salary: {:.0}", instructor.base_salary());
                    println!("Days worked: {}", instructor.days_worked(today.year(), today.ordinal()));
                }
                None => println!("Instructor not found."),
            }
            CommandResult::Continue
        }

        // Dismiss command format:  DISMISS <id>
        "DISMISS" => {
            if let Some(id) = single_id(cmd, args) {
                match session.dismiss_instructor(id) {
                    // Successful delete
                    Ok(_) => println!("1"),
                    // Id doesn't exist
                    Err(_) => println!("0"),
                }
            }
            CommandResult::Continue
        }

        // Exit command
        "EXIT" | "QUIT" => {
            println!("Exiting...");
            CommandResult::Exit
        }

        // Empty input
        "" => {
            println!("Enter a command.");
            CommandResult::Continue
        }

        // Everything else will be noted and returned as an error
        _ => {
            println!("ERROR: command '{}' not handled", cmd);
            println!("{}", proper_syntax);
            CommandResult::Continue
        }
    }
}


/// Builds a stamp from `<day> <month> <hour> <minute>` in `year`.
fn parse_enrollment(parts: &[String], year: i32) -> Result<EnrollmentStamp, RecordError> {
    let number = |text: &str| -> Result<u32, RecordError> {
        text.parse::<u32>()
            .map_err(|_| RecordError::InvalidStamp(parts.join(" ")))
    };

    let day = number(&parts[0])?;
    let month = parse_month(&parts[1])?;
    let hour = number(&parts[2])?;
    let minute = number(&parts[3])?;
    EnrollmentStamp::new(year, month, day, hour, minute)
}


/// A style given by name (`salsa`) or menu number (`3`).
fn parse_style(text: &str) -> Result<DanceStyle, RecordError> {
    match text.parse::<u32>() {
        Ok(number) => DanceStyle::from_menu_number(number),
        Err(_) => text.parse::<DanceStyle>(),
    }
}


/// The single numeric id argument of `cmd`, or an error message.
fn single_id(cmd: &str, args: &[String]) -> Option<u32> {
    match args {
        [arg] => match arg.parse::<u32>() {
            Ok(id) => Some(id),
            Err(_) => {
                println!("ERR: Invalid id '{}'", arg);
                None
            }
        },
        [] => {
            println!("ERR: {} requires an id", cmd);
            None
        }
        _ => {
            println!("ERR: Too many arguments for {}", cmd);
            None
        }
    }
}



// =================================================================
// lib.rs Unit tests
// =================================================================

#[cfg(test)]
mod main_lib_tests {
    use super::*;

    fn run(session: &mut Session, line: &str) -> CommandResult {
        let (cmd, args) = parse_command(line);
        handle_command(&cmd, &args, "Usage", session)
    }

    #[test]
    fn test_parse_exit_command() {
        let (cmd, args) = parse_command("EXIT");
        assert_eq!(cmd, "EXIT");
        assert!(args.is_empty());
    }

    #[test]
    fn test_exit_and_quit_commands() {
        let mut session = Session::with_seed(1);
        assert!(matches!(run(&mut session, "exit"), CommandResult::Exit));
        assert!(matches!(run(&mut session, "QUIT"), CommandResult::Exit));
    }

    #[test]
    fn test_parse_enroll_command() {
        let (cmd, args) = parse_command("  enroll Ana Rojas 3 marzo 18 30 1,3  ");
        assert_eq!(cmd, "ENROLL");
        assert_eq!(args, vec!["Ana", "Rojas", "3", "marzo", "18", "30", "1,3"]);
    }

    #[test]
    fn test_parse_invalid_command() {
        let (cmd, args) = parse_command("FLY away");
        assert_eq!(cmd, "FLY");
        assert_eq!(args[0], "away");

        let mut session = Session::with_seed(1);
        // Should not exit on bad command
        assert!(matches!(run(&mut session, "FLY away"), CommandResult::Continue));
        assert!(matches!(run(&mut session, ""), CommandResult::Continue));
    }

    #[test]
    fn test_enroll_command_adds_student() {
        let mut session = Session::with_seed(1);
        run(&mut session, "ENROLL Ana Rojas 3 marzo 18 30 1,3");
        run(&mut session, "ENROLL Luis Soto 1 1 9 0 5");

        assert_eq!(session.students.len(), 2);
        let first = session.students().next().unwrap();
        assert_eq!(first.name(), "Luis Soto");
        assert_eq!(first.preferences(), &[DanceStyle::Tango]);
    }

    #[test]
    fn test_enroll_command_rejects_bad_input() {
        let mut session = Session::with_seed(1);
        run(&mut session, "ENROLL Ana Rojas 31 2 18 30 1");
        run(&mut session, "ENROLL Ana Rojas 3 3 25 30 1");
        run(&mut session, "ENROLL Ana Rojas 3 3 18 30 9");
        run(&mut session, "ENROLL Ana Rojas 3 3 18");
        assert!(session.students.is_empty());
    }

    #[test]
    fn test_hire_find_dismiss_commands() {
        let mut session = Session::with_seed(1);
        run(&mut session, "HIRE Rosa Diaz 2018 450000 tango");
        run(&mut session, "HIRE Juan Paz 2022 300000 3");
        run(&mut session, "HIRE Bad Style 2022 300000 waltz");
        assert_eq!(session.instructors.len(), 2);

        let ids: Vec<u32> = session.instructors().map(|i| i.id()).collect();
        assert!(matches!(run(&mut session, &format!("FIND {}", ids[0])), CommandResult::Continue));

        run(&mut session, &format!("DISMISS {}", ids[0]));
        assert_eq!(session.instructors.len(), 1);
        assert!(!session.instructor_id_exists(ids[0]));

        // Unknown id is a no-op
        run(&mut session, &format!("DISMISS {}", ids[0]));
        assert_eq!(session.instructors.len(), 1);
    }

    #[test]
    fn test_hire_command_rejects_bad_years() {
        let mut session = Session::with_seed(1);
        let next_year = Local::now().year() + 1;
        run(&mut session, &format!("HIRE Rosa Diaz {} 450000 tango", next_year));
        run(&mut session, "HIRE Rosa Diaz -2147483648 1 salsa");
        run(&mut session, "HIRE Rosa Diaz 0 1 salsa");
        assert!(session.instructors.is_empty());

        // Nothing left behind for payroll to trip over
        assert!(matches!(run(&mut session, "PAYROLL"), CommandResult::Continue));
    }

    #[test]
    fn test_listing_and_payroll_commands_continue() {
        let mut session = Session::with_seed(1);
        for line in ["STUDENTS", "INSTRUCTORS", "PAYROLL", "FIND", "DISMISS x"] {
            assert!(matches!(run(&mut session, line), CommandResult::Continue));
        }
        run(&mut session, "HIRE Rosa Diaz 2018 450000 tango");
        assert!(matches!(run(&mut session, "PAYROLL"), CommandResult::Continue));
    }

    #[test]
    fn test_parse_style_accepts_names_and_numbers() {
        assert_eq!(parse_style("2"), Ok(DanceStyle::Reggaeton));
        assert_eq!(parse_style("CUMBIA"), Ok(DanceStyle::Cumbia));
        assert!(parse_style("6").is_err());
    }
}
