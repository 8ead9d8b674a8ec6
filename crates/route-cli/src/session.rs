// crates/route-cli/src/session.rs

//! # Interactive Session
//!
//! Resolving one city is a small state machine:
//!
//! ```text
//! AwaitingQuery --exact hit--------------> Resolved
//! AwaitingQuery --miss-------------------> AwaitingConfirmation
//! AwaitingConfirmation --"y"-------------> Resolved
//! AwaitingConfirmation --"n"-------------> AwaitingQuery
//! AwaitingConfirmation --anything else---> AwaitingConfirmation
//! AwaitingQuery --"na"-------------------> exit
//! ```
//!
//! [`CityPrompt`] holds the transitions and does no I/O; [`Console`] drives
//! it over any `BufRead`/`Write` pair. Once both cities are resolved the
//! console asks for the pair to be confirmed; declining lets the user
//! replace the origin or the destination before estimating.

use anyhow::Result;
use log::debug;
use route_core::{
    plan, resolve, resolve_exact, CityRecord, Gazetteer, ModeTable, Resolution, RouteError,
    Suggestion,
};
use std::io::{BufRead, Lines, Write};

use crate::chart;

/// Typing this at a city prompt ends the session.
pub const EXIT_WORD: &str = "na";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptState<'a> {
    AwaitingQuery,
    AwaitingConfirmation(Suggestion<'a>),
    Resolved(&'a CityRecord),
}

/// What happened after one line of input.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PromptEvent<'a> {
    Resolved(&'a CityRecord),
    /// No exact match; the user is asked to confirm this candidate.
    Suggested(Suggestion<'a>),
    /// The user declined the suggestion.
    Rejected,
    /// Neither `y` nor `n` while confirming.
    InvalidAnswer,
    Exit,
    /// Nothing to suggest at all (empty gazetteer).
    NoCandidates,
}

/// Resolution of a single city, one input line at a time.
#[derive(Debug)]
pub struct CityPrompt<'a> {
    gazetteer: &'a Gazetteer,
    state: PromptState<'a>,
}

impl<'a> CityPrompt<'a> {
    pub fn new(gazetteer: &'a Gazetteer) -> Self {
        Self {
            gazetteer,
            state: PromptState::AwaitingQuery,
        }
    }

    pub fn state(&self) -> PromptState<'a> {
        self.state
    }

    pub fn feed(&mut self, line: &str) -> PromptEvent<'a> {
        let answer = line.trim().to_lowercase();
        let (next, event) = match self.state {
            PromptState::AwaitingConfirmation(s) => match answer.as_str() {
                "y" => {
                    // re-resolve through the exact path
                    let city = resolve_exact(s.city.name(), self.gazetteer).unwrap_or(s.city);
                    (PromptState::Resolved(city), PromptEvent::Resolved(city))
                }
                "n" => (PromptState::AwaitingQuery, PromptEvent::Rejected),
                _ => (self.state, PromptEvent::InvalidAnswer),
            },
            PromptState::AwaitingQuery | PromptState::Resolved(_) => {
                if answer == EXIT_WORD {
                    (PromptState::AwaitingQuery, PromptEvent::Exit)
                } else {
                    match resolve(line, self.gazetteer) {
                        Resolution::Resolved(c) => (PromptState::Resolved(c), PromptEvent::Resolved(c)),
                        Resolution::Suggested(s) => (
                            PromptState::AwaitingConfirmation(s),
                            PromptEvent::Suggested(s),
                        ),
                        Resolution::Unknown => (PromptState::AwaitingQuery, PromptEvent::NoCandidates),
                    }
                }
            }
        };
        debug!("prompt {:?} -> {:?}", self.state, next);
        self.state = next;
        event
    }
}

/// Line-oriented front end for [`CityPrompt`].
pub struct Console<R, W> {
    lines: Lines<R>,
    out: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, out: W) -> Self {
        Self {
            lines: input.lines(),
            out,
        }
    }

    /// Asks until the city is resolved. `None` on exit or end of input.
    pub fn ask_city<'a>(&mut self, gazetteer: &'a Gazetteer, role: &str) -> Result<Option<&'a CityRecord>> {
        let mut prompt = CityPrompt::new(gazetteer);
        loop {
            match prompt.state() {
                PromptState::AwaitingConfirmation(s) => {
                    write!(self.out, "Did you mean to input {}? (Y/N) ", s.city.name())?
                }
                _ => write!(self.out, "Input {role} city: ")?,
            }
            self.out.flush()?;

            let Some(line) = self.lines.next().transpose()? else {
                return Ok(None);
            };

            match prompt.feed(&line) {
                PromptEvent::Resolved(city) => {
                    writeln!(self.out, "Your {role} location has been set to {city}.")?;
                    return Ok(Some(city));
                }
                PromptEvent::Suggested(_) => {}
                PromptEvent::Rejected => writeln!(self.out, "Unable to locate city in database.")?,
                PromptEvent::InvalidAnswer => writeln!(self.out, "{:-^46}", "***Invalid Input***")?,
                PromptEvent::Exit => return Ok(None),
                PromptEvent::NoCandidates => {
                    writeln!(self.out, "The gazetteer is empty.")?;
                    return Ok(None);
                }
            }
        }
    }

    /// Next trimmed, lowercased answer to `prompt`. `None` at end of input.
    fn answer(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.out, "{prompt}")?;
        self.out.flush()?;
        Ok(self
            .lines
            .next()
            .transpose()?
            .map(|l| l.trim().to_lowercase()))
    }

    /// Asks the user to confirm the pair, letting them swap either side
    /// out first. `None` when they exit instead.
    pub fn confirm_pair<'a>(
        &mut self,
        gazetteer: &'a Gazetteer,
        mut origin: &'a CityRecord,
        mut destination: &'a CityRecord,
    ) -> Result<Option<(&'a CityRecord, &'a CityRecord)>> {
        loop {
            let prompt =
                format!("Confirm to find the travel time between {origin} and {destination}. (Y/N) ");
            let Some(answer) = self.answer(&prompt)? else {
                return Ok(None);
            };
            match answer.as_str() {
                "y" => return Ok(Some((origin, destination))),
                "n" => {}
                _ => {
                    writeln!(self.out, "{:-^46}", "*** Input Error ***")?;
                    continue;
                }
            }

            writeln!(self.out, "\n{:-^46}", "Task Selection")?;
            writeln!(self.out, "o - Change the origin city")?;
            writeln!(self.out, "d - Change the destination city")?;
            writeln!(self.out, "x - Exit")?;
            writeln!(self.out, "{:-^46}", "")?;
            loop {
                let Some(task) = self.answer("Input task: ")? else {
                    return Ok(None);
                };
                let side = match task.as_str() {
                    "o" => &mut origin,
                    "d" => &mut destination,
                    "x" => return Ok(None),
                    _ => {
                        writeln!(self.out, "{:-^46}", "*** Input Error ***")?;
                        continue;
                    }
                };
                let role = if task == "o" { "new origin" } else { "new destination" };
                match self.ask_city(gazetteer, role)? {
                    Some(city) => *side = city,
                    None => return Ok(None),
                }
                break;
            }
        }
    }

    /// Origin/destination rounds until the user exits.
    pub fn run(&mut self, gazetteer: &Gazetteer, modes: &ModeTable) -> Result<()> {
        writeln!(self.out, "Type '{EXIT_WORD}' at any city prompt to quit.")?;
        loop {
            let Some(origin) = self.ask_city(gazetteer, "origin")? else {
                break;
            };
            let Some(destination) = self.ask_city(gazetteer, "destination")? else {
                break;
            };
            let Some((origin, destination)) = self.confirm_pair(gazetteer, origin, destination)? else {
                break;
            };

            match plan(origin, destination, modes) {
                Ok(report) => {
                    writeln!(self.out)?;
                    writeln!(self.out, "{}", chart::render(&report, modes, chart::DEFAULT_WIDTH))?;
                    writeln!(self.out)?;
                }
                Err(e @ RouteError::DegenerateDistance { .. }) => {
                    writeln!(self.out, "Cannot estimate this route: {e}")?;
                }
                Err(e) => return Err(e.into()),
            }
        }
        writeln!(self.out, "Goodbye.")?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
