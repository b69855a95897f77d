//! Driving the command shell through in-memory streams
use habit_tracker_bot::bot::{BotShell, OutputFormat};
use habit_tracker_bot::*;
use serde_json::Value;

fn run_shell(storage: &SqliteStorage, owner: OwnerId, format: OutputFormat, input: &str) -> String {
    let shell = BotShell::new(storage, owner, format);
    let mut output: Vec<u8> = Vec::new();

    tokio_test::block_on(shell.run_with(input.as_bytes(), &mut output)).expect("shell failed");

    String::from_utf8(output).expect("output is not UTF-8")
}

#[test]
fn test_json_session() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    let input = "/addhabit Read 10 pages\n\n/habits\n/check 1\n/check 1\n/check one\n/stats\n";

    let output = run_shell(&storage, OwnerId(5), OutputFormat::Json, input);
    let replies: Vec<Value> = output
        .lines()
        .map(|line| serde_json::from_str(line).expect("reply is not JSON"))
        .collect();

    // The blank line gets no reply
    assert_eq!(replies.len(), 6);

    assert_eq!(replies[0]["command"], "addhabit");
    assert_eq!(replies[0]["data"]["habit_id"], 1);
    assert_eq!(replies[1]["data"]["habits"][0]["name"], "Read 10 pages");
    assert_eq!(replies[2]["data"]["outcome"], "inserted");
    assert_eq!(replies[3]["data"]["outcome"], "already_present");
    assert_eq!(replies[4]["ok"], false);
    assert_eq!(replies[5]["data"]["overall"]["total_habits"], 1);
    assert_eq!(replies[5]["data"]["overall"]["today_completions"], 1);
    assert_eq!(replies[5]["data"]["overall"]["completion_rate"], 100.0);
}

#[test]
fn test_text_session_is_scoped_to_owner() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    run_shell(&storage, OwnerId(1), OutputFormat::Text, "/addhabit Secret habit\n");

    let output = run_shell(&storage, OwnerId(2), OutputFormat::Text, "/habits\n/check 1\n");
    assert!(!output.contains("Secret habit"));
    assert!(output.contains("Habit 1 not found"));
}

#[test]
fn test_empty_input() {
    let storage = SqliteStorage::open_in_memory().unwrap();
    assert_eq!(run_shell(&storage, OwnerId(1), OutputFormat::Text, ""), "");
}
