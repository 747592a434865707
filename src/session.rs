//! Line-oriented interactive counter session.
//!
//! Stands in for a view layer: each input line is a command, each command
//! prints one line describing the resulting state.

use std::sync::Arc;
use std::time::Duration;

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

use crate::app::{decrement_counter, increment_counter, CounterStore, WriteScheduler};
use crate::store::{AppStore, CounterState};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionCommand {
    Increment,
    Decrement,
    /// Re-fetch the counter from the backend.
    Get,
    /// Write any pending change now and wait for it.
    Flush,
    State,
    Help,
    Quit,
}

impl SessionCommand {
    pub fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "+" | "inc" | "increment" => Some(Self::Increment),
            "-" | "dec" | "decrement" => Some(Self::Decrement),
            "get" | "fetch" => Some(Self::Get),
            "flush" => Some(Self::Flush),
            "state" | "s" => Some(Self::State),
            "help" | "?" => Some(Self::Help),
            "quit" | "q" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

const HELP: &str = "commands: + (inc), - (dec), get, flush, state, help, quit";

/// A store plus the scheduler that debounces its remote writes.
pub struct Session {
    store: AppStore,
    scheduler: WriteScheduler,
}

impl Session {
    pub fn new(store: AppStore, debounce: Duration) -> Self {
        let scheduler = WriteScheduler::new(Arc::new(store.clone()), debounce);
        Self { store, scheduler }
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn scheduler(&self) -> &WriteScheduler {
        &self.scheduler
    }

    /// Run one command and describe the outcome.
    pub async fn execute(&self, command: SessionCommand) -> String {
        match command {
            SessionCommand::Increment => match increment_counter(&self.store, &self.scheduler) {
                Some(counter) => format!("counter: {} (sync pending)", counter),
                None => "counter not loaded yet, try `get`".to_string(),
            },
            SessionCommand::Decrement => match decrement_counter(&self.store, &self.scheduler) {
                Some(counter) => format!("counter: {} (sync pending)", counter),
                None if self.store.counter().is_some() => "counter is already at zero".to_string(),
                None => "counter not loaded yet, try `get`".to_string(),
            },
            SessionCommand::Get => match self.store.fetch_counter().await {
                Ok(counter) => format!("counter: {}", counter),
                Err(err) => format!("error: {}", err),
            },
            SessionCommand::Flush => {
                if self.scheduler.flush().is_none() {
                    return "nothing pending".to_string();
                }
                self.store.settled().await;
                describe(&self.store.state())
            }
            SessionCommand::State => describe(&self.store.state()),
            SessionCommand::Help => HELP.to_string(),
            SessionCommand::Quit => "bye".to_string(),
        }
    }

    /// Load the counter, then process `input` until `quit` or end of input.
    ///
    /// A pending write is flushed and awaited before returning.
    pub async fn run<R, W>(&self, input: R, mut output: W) -> std::io::Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let greeting = self.execute(SessionCommand::Get).await;
        write_line(&mut output, &greeting).await?;
        write_line(&mut output, HELP).await?;

        let mut lines = input.lines();
        while let Some(line) = lines.next_line().await? {
            if line.trim().is_empty() {
                continue;
            }
            let Some(command) = SessionCommand::parse(&line) else {
                write_line(&mut output, &format!("unknown command: {}", line.trim())).await?;
                continue;
            };
            if command == SessionCommand::Quit {
                break;
            }
            let reply = self.execute(command).await;
            write_line(&mut output, &reply).await?;
        }

        self.scheduler.flush();
        self.store.settled().await;
        let farewell = format!("{}; bye", describe(&self.store.state()));
        write_line(&mut output, &farewell).await?;
        output.flush().await
    }
}

fn describe(state: &CounterState) -> String {
    let counter = state
        .counter
        .map_or_else(|| "not loaded".to_string(), |c| c.to_string());
    let mut line = format!("counter: {}", counter);
    if state.is_loading {
        line.push_str(", loading");
    }
    if state.is_updating() {
        line.push_str(", updating");
    }
    if let Some(error) = &state.last_error {
        line.push_str(&format!(", last error: {}", error));
    }
    line
}

async fn write_line<W: AsyncWrite + Unpin>(output: &mut W, line: &str) -> std::io::Result<()> {
    output.write_all(line.as_bytes()).await?;
    output.write_all(b"\n").await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Counter;

    #[test]
    fn test_parse_commands() {
        assert_eq!(SessionCommand::parse("+"), Some(SessionCommand::Increment));
        assert_eq!(SessionCommand::parse(" INC "), Some(SessionCommand::Increment));
        assert_eq!(SessionCommand::parse("-"), Some(SessionCommand::Decrement));
        assert_eq!(SessionCommand::parse("q"), Some(SessionCommand::Quit));
        assert_eq!(SessionCommand::parse("jump"), None);
    }

    #[test]
    fn test_describe_includes_flags() {
        let state = CounterState {
            counter: Some(Counter::new(2)),
            is_loading: false,
            updates_in_flight: 1,
            last_error: Some("boom".to_string()),
        };
        assert_eq!(describe(&state), "counter: 2, updating, last error: boom");
    }

    #[test]
    fn test_describe_not_loaded() {
        assert_eq!(describe(&CounterState::default()), "counter: not loaded");
    }
}
