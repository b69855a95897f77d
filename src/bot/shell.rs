//! Line-oriented command loop
//!
//! This module implements the shell that:
//! 1. Reads one command per line from its input
//! 2. Runs the command against the storage on behalf of one owner
//! 3. Writes one reply per command to its output

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, error, info, warn};

use crate::bot::{Command, OutputFormat, Reply};
use crate::domain::OwnerId;
use crate::storage::{HabitStorage, StorageError};
use crate::tools;
use crate::TrackerError;

const START_TEXT: &str = "Welcome to Habit Tracker! 🎯

I'll help you track your daily habits and build better routines.

Available commands:
/start - Show this message
/help - Get help
/addhabit - Add a new habit
/habits - View your habits
/check - Mark habit as completed
/stats - View your statistics";

const HELP_TEXT: &str = "🎯 Habit Tracker Help

Commands:
/start - Show the welcome message
/help - Show this help message
/addhabit <habit name> - Add a new habit to track
/habits - View all your current habits
/check <habit id> [YYYY-MM-DD] - Mark a habit as completed (today by default)
/stats - View your overall statistics
/stats <habit id> - View statistics for one habit

Examples:
/addhabit Drink 8 glasses of water
/addhabit Exercise for 30 minutes
/check 1

Start building better habits today! 💪";

const FAILURE_TEXT: &str = "⚠️ Something went wrong on our side. Please try again later.";

/// Shell that answers the commands of a single owner
pub struct BotShell<'a, S: HabitStorage> {
    storage: &'a S,
    owner_id: OwnerId,
    format: OutputFormat,
}

impl<'a, S: HabitStorage> BotShell<'a, S> {
    /// Create a new shell acting for `owner_id`
    pub fn new(storage: &'a S, owner_id: OwnerId, format: OutputFormat) -> Self {
        Self {
            storage,
            owner_id,
            format,
        }
    }

    /// Run the shell over stdin/stdout until stdin is closed
    pub async fn run(&self) -> Result<(), TrackerError> {
        let stdin = BufReader::new(tokio::io::stdin());
        let mut stdout = tokio::io::stdout();
        self.run_with(stdin, &mut stdout).await
    }

    /// Run the shell over any line reader and writer
    pub async fn run_with<R, W>(&self, mut reader: R, writer: &mut W) -> Result<(), TrackerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        info!("Command shell started for user {}", self.owner_id);

        let mut line = String::new();

        loop {
            line.clear();

            if reader.read_line(&mut line).await? == 0 {
                info!("Command shell shutting down (input closed)");
                break;
            }

            if let Some(reply) = self.handle_line(&line) {
                let rendered = reply.render(self.format)?;
                writer.write_all(rendered.as_bytes()).await?;
                writer.write_all(b"\n").await?;
                writer.flush().await?;

                debug!("Sent reply to /{}", reply.command);
            }
        }

        Ok(())
    }

    /// Answer a single input line, `None` for a blank one
    pub fn handle_line(&self, line: &str) -> Option<Reply> {
        let command = Command::parse(line)?;
        debug!("Handling /{} for user {}", command.name(), self.owner_id);

        let name = command.name();
        let reply = match self.dispatch(command) {
            Ok(reply) => reply,
            Err(TrackerError::Database(e)) => Self::storage_error_reply(name, e),
            Err(e) => {
                error!("/{} failed: {}", name, e);
                Reply::error(name, FAILURE_TEXT)
            }
        };

        Some(reply)
    }

    fn dispatch(&self, command: Command) -> Result<Reply, TrackerError> {
        let name = command.name();

        let reply = match command {
            Command::Start => Reply::text(name, START_TEXT),
            Command::Help => Reply::text(name, HELP_TEXT),
            Command::AddHabit { name: habit_name } => {
                if habit_name.trim().is_empty() {
                    return Ok(Reply::error(
                        name,
                        "Please give your habit a name, e.g. /addhabit Read 10 pages",
                    ));
                }
                let params = tools::CreateHabitParams { name: habit_name, description: String::new() };
                let response = tools::create_habit(self.storage, self.owner_id, params)?;
                Reply::with_data(name, response.message.clone(), &response)?
            }
            Command::Habits => {
                let response = tools::list_habits(self.storage, self.owner_id)?;
                Reply::with_data(name, response.message.clone(), &response)?
            }
            Command::Check { habit_id: None, .. } => {
                Reply::error(name, "Please tell me which habit, e.g. /check 1. Use /habits to see the ids.")
            }
            Command::Check { habit_id: Some(habit_id), date } => {
                let params = tools::LogHabitParams { habit_id, completed_at: date };
                let response = tools::log_habit(self.storage, self.owner_id, params)?;
                Reply::with_data(name, response.message.clone(), &response)?
            }
            Command::Stats { habit_id } => {
                let response = tools::get_stats(self.storage, self.owner_id, tools::StatsParams { habit_id })?;
                Reply::with_data(name, response.message.clone(), &response)?
            }
            Command::Usage { usage, .. } => {
                Reply::error(name, format!("Too many arguments. Usage: {}", usage))
            }
            Command::Unknown(word) => Reply::error(
                name,
                format!("I don't know the command '{}'. Send /help to see what I can do.", word),
            ),
        };

        Ok(reply)
    }

    fn storage_error_reply(name: &'static str, e: StorageError) -> Reply {
        match e {
            StorageError::HabitNotFound { habit_id, .. } => Reply::error(
                name,
                format!("❌ Habit {} not found. Use /habits to see your habits.", habit_id),
            ),
            StorageError::InvalidInput(e) => Reply::error(name, format!("❌ {}", e)),
            e => {
                warn!("/{} failed with storage error: {}", name, e);
                Reply::error(name, FAILURE_TEXT)
            }
        }
    }
}
