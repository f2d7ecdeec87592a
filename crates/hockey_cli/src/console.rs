//! Interactive scoreboard session over any line-based input and writer.

use std::io::{BufRead, Write};
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use hockey_core::{
    render_event_log, render_scoreboard, HockeyMatch, ScoreboardConfig, TeamSide,
};
use tracing::{debug, info};

use crate::menu::{render_menu, MenuChoice, MenuError};

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

#[derive(Debug, Clone)]
pub struct ConsoleOptions {
    pub home: Option<String>,
    pub away: Option<String>,
    pub config: ScoreboardConfig,
    pub ask_scorer: bool,
    pub clear_screen: bool,
    pub pause: Duration,
    pub print_json: bool,
}

impl Default for ConsoleOptions {
    fn default() -> Self {
        Self {
            home: None,
            away: None,
            config: ScoreboardConfig::default(),
            ask_scorer: false,
            clear_screen: true,
            pause: Duration::from_millis(800),
            print_json: false,
        }
    }
}

pub struct Console<R, W> {
    input: R,
    output: W,
    options: ConsoleOptions,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W, options: ConsoleOptions) -> Self {
        Self { input, output, options }
    }

    /// Run one match to completion and return its final state.
    ///
    /// Ends on full time, on "quit early", or when input runs out.
    pub fn run(&mut self) -> Result<HockeyMatch> {
        self.write("🏑 Welcome to Field Hockey Scoreboard Simulator 🏑\n\n")?;

        let home = self.team_name(self.options.home.clone(), "Enter home team: ", "Home")?;
        let away = self.team_name(self.options.away.clone(), "Enter away team: ", "Away")?;
        let mut hockey_match = HockeyMatch::with_config(home, away, &self.options.config);

        loop {
            self.clear()?;
            self.write(&render_scoreboard(&hockey_match))?;
            self.write(&render_menu(&hockey_match))?;

            let Some(line) = self.prompt("Choice: ")? else {
                info!("input closed, ending match");
                break;
            };

            let choice = match line.parse::<MenuChoice>() {
                Ok(choice) => choice,
                Err(MenuError::NotANumber(_)) => {
                    self.notify("Invalid input. Please enter a number.\n")?;
                    continue;
                }
                Err(MenuError::UnknownChoice(_)) => {
                    self.notify("Invalid choice. Please try again.\n")?;
                    continue;
                }
            };
            debug!(?choice, "menu choice");

            match choice {
                MenuChoice::Goal(side) => {
                    let scorer = if self.options.ask_scorer {
                        self.prompt("Scorer (optional): ")?.unwrap_or_default()
                    } else {
                        String::new()
                    };
                    hockey_match.goal_for_with_scorer(side, &scorer);
                }
                MenuChoice::Card(kind) => {
                    let question = format!(
                        "For which team? (h = {}, a = {}): ",
                        hockey_match.home().name(),
                        hockey_match.away().name()
                    );
                    if let Some(side) = self.ask_side(&question)? {
                        hockey_match.card_for(side, kind);
                    }
                    self.pause();
                }
                MenuChoice::PenaltyCorner => {
                    if let Some(side) = self.ask_side("For which team? (h/a): ")? {
                        hockey_match.penalty_corner_for(side);
                    }
                    self.pause();
                }
                MenuChoice::NextQuarter => {
                    if hockey_match.advance_quarter().is_match_over() {
                        break;
                    }
                }
                MenuChoice::ShowEventLog => {
                    self.clear()?;
                    self.write(&render_event_log(&hockey_match))?;
                    if self.prompt("Press Enter to return to scoreboard...")?.is_none() {
                        break;
                    }
                }
                MenuChoice::Quit => {
                    self.notify("Ending match early...\n")?;
                    break;
                }
            }
        }

        self.finish(&hockey_match)?;
        Ok(hockey_match)
    }

    fn finish(&mut self, hockey_match: &HockeyMatch) -> Result<()> {
        self.clear()?;
        self.write("\n=== FINAL RESULT ===\n")?;
        self.write(&render_scoreboard(hockey_match))?;
        self.write(&render_event_log(hockey_match))?;
        self.write("Match ended. Thank you for using the Field Hockey Scoreboard Simulator!\n\n")?;

        if self.options.print_json {
            let json = hockey_match.summary().to_json_pretty()?;
            self.write(&json)?;
            self.write("\n")?;
        }
        Ok(())
    }

    fn team_name(&mut self, given: Option<String>, question: &str, fallback: &str) -> Result<String> {
        let name = match given {
            Some(name) => name,
            None => self.prompt(question)?.unwrap_or_default(),
        };

        let name = name.trim();
        Ok(if name.is_empty() { fallback.to_string() } else { name.to_string() })
    }

    /// `None` after reporting an unrecognised side; the match is left as is.
    ///
    /// Blank lines are skipped, so a stray Enter keeps waiting for the side.
    fn ask_side(&mut self, question: &str) -> Result<Option<TeamSide>> {
        let mut answer = self.prompt(question)?;
        while let Some(line) = answer.as_deref() {
            if !line.trim().is_empty() {
                break;
            }
            answer = self.read_line()?;
        }

        match answer.unwrap_or_default().parse::<TeamSide>() {
            Ok(side) => Ok(Some(side)),
            Err(err) if err.is_input_error() => {
                debug!(%err, "rejected side");
                self.write("Invalid team choice.\n")?;
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Print `question` and read one line; `None` at end of input.
    fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        self.write(question)?;
        self.output.flush().context("Failed to flush console output")?;
        self.read_line()
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self.input.read_line(&mut line).context("Failed to read console input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn notify(&mut self, message: &str) -> Result<()> {
        self.write(message)?;
        self.pause();
        Ok(())
    }

    fn write(&mut self, text: &str) -> Result<()> {
        self.output.write_all(text.as_bytes()).context("Failed to write console output")
    }

    fn clear(&mut self) -> Result<()> {
        if self.options.clear_screen {
            self.write(CLEAR_SCREEN)?;
        }
        Ok(())
    }

    fn pause(&self) {
        if !self.options.pause.is_zero() {
            thread::sleep(self.options.pause);
        }
    }
}
