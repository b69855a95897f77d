//! Parsing of user command lines

/// A command typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `/start`
    Start,
    /// `/help`
    Help,
    /// `/addhabit <name>`; the name may be empty and is validated later
    AddHabit { name: String },
    /// `/habits`
    Habits,
    /// `/check <habit id> [YYYY-MM-DD]`
    Check { habit_id: Option<String>, date: Option<String> },
    /// `/stats [habit id]`
    Stats { habit_id: Option<String> },
    /// A known command given too many arguments
    Usage { command: &'static str, usage: &'static str },
    /// Anything else
    Unknown(String),
}

impl Command {
    /// Parse one input line, `None` for a blank line
    ///
    /// A `@botname` suffix on the command word is ignored, so
    /// `/habits@tracker_bot` is the same as `/habits`.
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }

        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let name = match word.strip_prefix('/') {
            Some(name) => name.split('@').next().unwrap_or(name).to_lowercase(),
            None => return Some(Command::Unknown(word.to_string())),
        };

        let mut args = rest.split_whitespace().map(str::to_string);
        let arg_count = rest.split_whitespace().count();

        let command = match name.as_str() {
            "start" => Command::Start,
            "help" => Command::Help,
            "addhabit" => Command::AddHabit { name: rest.to_string() },
            "habits" => Command::Habits,
            "check" if arg_count > 2 => Command::Usage {
                command: "check",
                usage: "/check <habit id> [YYYY-MM-DD]",
            },
            "check" => Command::Check {
                habit_id: args.next(),
                date: args.next(),
            },
            "stats" if arg_count > 1 => Command::Usage {
                command: "stats",
                usage: "/stats [habit id]",
            },
            "stats" => Command::Stats { habit_id: args.next() },
            _ => Command::Unknown(word.to_string()),
        };

        Some(command)
    }

    /// Short name used in replies and logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Help => "help",
            Command::AddHabit { .. } => "addhabit",
            Command::Habits => "habits",
            Command::Check { .. } => "check",
            Command::Stats { .. } => "stats",
            Command::Usage { command, .. } => command,
            Command::Unknown(_) => "unknown",
        }
    }
}
