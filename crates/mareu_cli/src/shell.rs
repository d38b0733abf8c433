//! Line-oriented meeting shell.
//!
//! # Responsibility
//! - Read commands, forward them to the presenters as view events.
//! - Drain view output after every command.
//!
//! # Invariants
//! - The shell never touches the meeting store directly.
//! - End of input ends the session cleanly.

use crate::views::{TerminalListView, TerminalRegistrationView};
use chrono::NaiveDateTime;
use log::{debug, info};
use mareu_core::presenter::meeting_list::MeetingListPresenter;
use mareu_core::presenter::registration::RegistrationPresenter;
use mareu_core::{InMemoryMeetingRepository, MeetingService};
use std::io::{self, BufRead, Write};

const HELP: &str = "\
Commands:
  list                    show meetings matching the current filters
  add                     register a new meeting
  delete <n>              delete meeting number <n> from the last list
  filter place <text>     keep meetings whose place contains <text>
  filter from <date>      keep meetings on or after dd/mm/yyyy [hh:mm]
  filter to <date>        keep meetings on or before dd/mm/yyyy [hh:mm]
  filter clear            remove every filter
  places                  show the place catalog
  persons                 show everyone invited to a meeting
  help                    show this help
  quit                    leave";

type ListPresenter = MeetingListPresenter<TerminalListView, InMemoryMeetingRepository>;
type FormPresenter = RegistrationPresenter<TerminalRegistrationView, InMemoryMeetingRepository>;

pub struct Shell<I: BufRead, O: Write> {
    input: I,
    output: O,
    list: ListPresenter,
    registration: FormPresenter,
    clock: fn() -> NaiveDateTime,
}

impl<I: BufRead, O: Write> Shell<I, O> {
    /// Wires both presenters onto one shared store.
    pub fn new(
        repo: InMemoryMeetingRepository,
        input: I,
        output: O,
        clock: fn() -> NaiveDateTime,
    ) -> Self {
        Self {
            input,
            output,
            list: MeetingListPresenter::new(
                TerminalListView::default(),
                MeetingService::new(repo.clone()),
            ),
            registration: RegistrationPresenter::new(
                TerminalRegistrationView::default(),
                MeetingService::new(repo),
            ),
            clock,
        }
    }

    /// Runs until `quit` or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        self.list.init();
        self.flush_list()?;

        loop {
            let Some(line) = self.prompt("> ")? else {
                break;
            };
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            debug!("event=shell_command module=cli status=start command={}", command_name(line));
            if !self.dispatch(line)? {
                break;
            }
        }

        info!("event=shell_exit module=cli status=ok");
        Ok(())
    }

    fn dispatch(&mut self, line: &str) -> io::Result<bool> {
        let (command, rest) = split_word(line);
        match command {
            "quit" | "exit" => return Ok(false),
            "help" => writeln!(self.output, "{HELP}")?,
            "list" => self.list.refresh(),
            "add" => self.list.request_registration(),
            "delete" => match rest.parse::<usize>() {
                Ok(number) if number > 0 => {
                    self.list.delete_at(number - 1);
                }
                _ => writeln!(self.output, "usage: delete <n>")?,
            },
            "filter" => self.dispatch_filter(rest)?,
            "places" => self.show_places()?,
            "persons" => self.show_persons()?,
            other => writeln!(self.output, "unknown command `{other}`, try `help`")?,
        }

        self.flush_list()?;
        if self.list.view_mut().take_registration_request() {
            self.run_registration()?;
        }
        Ok(true)
    }

    fn dispatch_filter(&mut self, args: &str) -> io::Result<()> {
        let (target, value) = split_word(args);
        match target {
            "place" => self.list.set_place_filter(value),
            "from" => {
                self.list.set_start_filter(value);
            }
            "to" => {
                self.list.set_end_filter(value);
            }
            "clear" => self.list.clear_filters(),
            _ => writeln!(self.output, "usage: filter place|from|to <value> | filter clear")?,
        }
        Ok(())
    }

    fn run_registration(&mut self) -> io::Result<()> {
        self.registration.init((self.clock)());
        self.flush_registration()?;

        loop {
            let Some(subject) = self.prompt("Subject: ")? else {
                return Ok(());
            };
            let Some(place) = self.prompt("Place: ")? else {
                return Ok(());
            };
            let suggested = self.registration.view().suggested_date().to_string();
            let Some(mut date) = self.prompt(&format!("Date [{suggested}]: "))? else {
                return Ok(());
            };
            if date.trim().is_empty() {
                date = suggested;
            }

            loop {
                let Some(persons) = self.prompt("Invite (emails, comma separated): ")? else {
                    return Ok(());
                };
                let accepted = self.registration.set_invited_persons(&persons);
                self.flush_registration()?;
                if accepted {
                    break;
                }
            }

            self.registration.submit(&subject, &date, &place);
            self.flush_registration()?;
            if self.registration.view_mut().take_saved().is_some() {
                self.list.refresh();
                return self.flush_list();
            }

            let Some(answer) = self.prompt("Try again? [y/N] ")? else {
                return Ok(());
            };
            if !answer.trim().eq_ignore_ascii_case("y") {
                writeln!(self.output, "Registration cancelled.")?;
                return Ok(());
            }
        }
    }

    fn show_places(&mut self) -> io::Result<()> {
        match self.list.service().places() {
            Ok(places) => {
                for place in places {
                    writeln!(self.output, "  {place}")?;
                }
            }
            Err(err) => writeln!(self.output, "! {err}")?,
        }
        Ok(())
    }

    fn show_persons(&mut self) -> io::Result<()> {
        match self.list.service().known_persons() {
            Ok(persons) if persons.is_empty() => writeln!(self.output, "Nobody invited yet.")?,
            Ok(persons) => {
                for person in persons {
                    writeln!(self.output, "  {person}")?;
                }
            }
            Err(err) => writeln!(self.output, "! {err}")?,
        }
        Ok(())
    }

    fn prompt(&mut self, label: &str) -> io::Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn flush_list(&mut self) -> io::Result<()> {
        for line in self.list.view_mut().take_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }

    fn flush_registration(&mut self) -> io::Result<()> {
        for line in self.registration.view_mut().take_lines() {
            writeln!(self.output, "{line}")?;
        }
        Ok(())
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.trim().split_once(char::is_whitespace) {
        Some((head, tail)) => (head, tail.trim()),
        None => (line.trim(), ""),
    }
}

fn command_name(line: &str) -> &str {
    split_word(line).0
}
