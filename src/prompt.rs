use std::io::{self, IsTerminal, Write};

use crossterm::event::{Event, KeyCode, KeyEventKind, KeyModifiers};
use crossterm::terminal;

use crate::error::SummaryError;

/// Abstract interactive input interface
///
/// The pipeline only ever reads single lines and one masked secret, so the
/// seam stays this narrow. Tests substitute a scripted implementation.
pub trait Prompter {
    /// Print `prompt` and read one line, without the trailing newline
    fn read_line(&mut self, prompt: &str) -> Result<String, SummaryError>;
    /// Print `prompt` and read one line with echo suppressed
    fn read_password(&mut self, prompt: &str) -> Result<String, SummaryError>;
}

/// Prompter backed by the real terminal.
pub struct TerminalPrompter;

impl Prompter for TerminalPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, SummaryError> {
        print!("{prompt}");
        io::stdout().flush()?;

        let mut line = String::new();
        io::stdin().read_line(&mut line)?;
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn read_password(&mut self, prompt: &str) -> Result<String, SummaryError> {
        if !io::stdin().is_terminal() {
            return Err(SummaryError::NoInteractiveTerminal {
                purpose: "password",
            });
        }

        print!("{prompt}");
        io::stdout().flush()?;

        terminal::enable_raw_mode()?;
        let entered = read_masked_line();
        terminal::disable_raw_mode()?;
        println!();

        entered
    }
}

/// Collect key presses until Enter, echoing nothing. Must run in raw mode.
fn read_masked_line() -> Result<String, SummaryError> {
    let mut line = String::new();
    loop {
        let Event::Key(key) = crossterm::event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }
        match key.code {
            KeyCode::Enter => return Ok(line),
            KeyCode::Backspace => {
                line.pop();
            }
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                return Err(SummaryError::Io {
                    message: "password entry interrupted".to_string(),
                });
            }
            KeyCode::Char(c) => line.push(c),
            _ => {}
        }
    }
}

/// Prompter that replays a fixed list of answers, recording each prompt.
/// Shared by the unit tests of the modules that drive prompts.
#[cfg(test)]
pub struct ScriptedPrompter {
    answers: std::vec::IntoIter<String>,
    pub prompts: Vec<String>,
    pub terminal_available: bool,
}

#[cfg(test)]
impl ScriptedPrompter {
    pub fn new(answers: &[&str]) -> Self {
        ScriptedPrompter {
            answers: answers
                .iter()
                .map(|s| s.to_string())
                .collect::<Vec<_>>()
                .into_iter(),
            prompts: Vec::new(),
            terminal_available: true,
        }
    }

    fn next_answer(&mut self, prompt: &str) -> Result<String, SummaryError> {
        self.prompts.push(prompt.to_string());
        self.answers.next().ok_or(SummaryError::Io {
            message: format!("no scripted answer left for prompt {prompt:?}"),
        })
    }
}

#[cfg(test)]
impl Prompter for ScriptedPrompter {
    fn read_line(&mut self, prompt: &str) -> Result<String, SummaryError> {
        self.next_answer(prompt)
    }

    fn read_password(&mut self, prompt: &str) -> Result<String, SummaryError> {
        if !self.terminal_available {
            return Err(SummaryError::NoInteractiveTerminal {
                purpose: "password",
            });
        }
        self.next_answer(prompt)
    }
}
