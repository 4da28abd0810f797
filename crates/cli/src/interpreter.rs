//! The command loop.
//!
//! One line per command; the first non-blank character selects the
//! operation and the rest of the line carries its arguments. Malformed
//! argument lists (wrong token count, unparseable numbers, unterminated
//! quotes) discard the line without output; *invalid* but well-formed values
//! (impossible dates, bad id syntax) produce a localized error line.

use std::io::{self, BufRead, Write};

use vaxtrace_core::{BatchId, CalendarDate, DomainError, VaccineName};
use vaxtrace_engine::Engine;
use vaxtrace_inventory::Batch;

use crate::locale::Locale;
use crate::parse;

pub struct Interpreter<R, W> {
    input: R,
    output: W,
    locale: Locale,
    engine: Engine,
    today: CalendarDate,
}

impl<R: BufRead, W: Write> Interpreter<R, W> {
    /// `start` is the initial system date; the clock only moves forward from
    /// there via the time-advance command.
    pub fn new(input: R, output: W, locale: Locale, start: CalendarDate) -> Self {
        Self {
            input,
            output,
            locale,
            engine: Engine::new(start),
            today: start,
        }
    }

    /// Process commands until the quit command or end of input.
    pub fn run(&mut self) -> io::Result<()> {
        let mut line = String::new();
        loop {
            line.clear();
            if self.input.read_line(&mut line)? == 0 {
                break;
            }
            let trimmed = line.trim_start();
            let Some(command) = trimmed.chars().next() else {
                continue;
            };
            let args = &trimmed[command.len_utf8()..];
            match command {
                'q' => break,
                'c' => self.create_batch(args)?,
                'l' => self.list_batches(args)?,
                'a' => self.apply_dose(args)?,
                'r' => self.withdraw_batch(args)?,
                't' => self.advance_time(args)?,
                'd' => self.delete_applications(args)?,
                'u' => self.list_applications(args)?,
                // Unknown commands consume their line silently.
                _ => {}
            }
        }
        self.output.flush()
    }

    fn fail(&mut self, error: &DomainError) -> io::Result<()> {
        writeln!(self.output, "{}", self.locale.message(error))
    }

    /// `c <id> <dd-mm-yyyy> <doses> <name>`
    fn create_batch(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        // An oversized id is reported before anything else is looked at,
        // even before the argument count.
        if let Some(id) = tokens.first() {
            if id.len() > BatchId::MAX_LEN {
                return self.fail(&DomainError::invalid_batch_id(id));
            }
        }
        if tokens.len() < 4 {
            return Ok(());
        }
        let Some((day, month, year)) = parse::date_components(&tokens[1]) else {
            return Ok(());
        };
        let Ok(doses) = tokens[2].parse::<i32>() else {
            return Ok(());
        };
        // Expiry must be a real calendar date no earlier than today.
        let expiry = match CalendarDate::new(day, month, year) {
            Ok(date) if !date.is_before(self.today) => date,
            _ => return self.fail(&DomainError::InvalidDate),
        };
        let id = match BatchId::parse(&tokens[0]) {
            Ok(id) => id,
            Err(error) => return self.fail(&error),
        };
        let vaccine = match VaccineName::parse(&tokens[3]) {
            Ok(name) => name,
            Err(error) => return self.fail(&error),
        };
        match self.engine.register_batch(id, vaccine, expiry, doses) {
            Ok(id) => writeln!(self.output, "{id}"),
            Err(error) => self.fail(&error),
        }
    }

    /// `l [name ...]`
    fn list_batches(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        if tokens.is_empty() {
            for batch in self.engine.list_batches() {
                self.print_batch(&batch)?;
            }
            return Ok(());
        }
        // Names are answered in request order, each against the full sorted
        // inventory.
        for token in &tokens {
            match self.engine.batches_named(token) {
                Ok(batches) => {
                    for batch in batches {
                        self.print_batch(&batch)?;
                    }
                }
                Err(error) => self.fail(&error)?,
            }
        }
        Ok(())
    }

    fn print_batch(&mut self, batch: &Batch) -> io::Result<()> {
        writeln!(
            self.output,
            "{} {} {} {} {}",
            batch.vaccine(),
            batch.id_typed(),
            batch.expiry(),
            batch.doses_remaining(),
            batch.doses_applied()
        )
    }

    /// `a <user> <vaccine>` — the user token may be quoted.
    fn apply_dose(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        // Missing tokens degrade to empty strings: an empty vaccine name
        // matches no batch, so a bare line still reports no stock.
        let user = tokens.first().map_or("", String::as_str);
        let vaccine = tokens.get(1).map_or("", String::as_str);
        match self.engine.apply_dose(user, vaccine, self.today) {
            Ok(id) => writeln!(self.output, "{id}"),
            Err(error) => self.fail(&error),
        }
    }

    /// `r <id>`
    fn withdraw_batch(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        let Some(token) = tokens.first() else {
            return Ok(());
        };
        match BatchId::parse(token) {
            Ok(id) => match self.engine.withdraw_batch(&id) {
                Ok(count) => writeln!(self.output, "{count}"),
                Err(error) => self.fail(&error),
            },
            // A syntactically invalid id cannot name a live batch.
            Err(_) => self.fail(&DomainError::no_such_batch(token)),
        }
    }

    /// `t [dd-mm-yyyy]` — no argument prints the current date.
    fn advance_time(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        let Some(token) = tokens.first() else {
            return writeln!(self.output, "{}", self.today);
        };
        let Some((day, month, year)) = parse::date_components(token) else {
            return Ok(());
        };
        match CalendarDate::new(day, month, year) {
            Ok(date) if !date.is_before(self.today) => {
                self.today = date;
                self.engine.observe_date(date);
                writeln!(self.output, "{date}")
            }
            _ => self.fail(&DomainError::InvalidDate),
        }
    }

    /// `d <user> [dd-mm-yyyy [id]]`
    fn delete_applications(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        let Some(user) = tokens.first().cloned() else {
            return Ok(());
        };

        let mut date = None;
        let mut batch_token = None;
        if let Some(token) = tokens.get(1) {
            // A second token that does not parse as a date leaves only the
            // user filter in effect.
            if let Some((day, month, year)) = parse::date_components(token) {
                match CalendarDate::new(day, month, year) {
                    // Deletion dates must not lie in the future.
                    Ok(parsed) if !self.today.is_before(parsed) => date = Some(parsed),
                    _ => return self.fail(&DomainError::InvalidDate),
                }
                batch_token = tokens.get(2).cloned();
            }
        }

        // Unknown user outranks an unknown batch in the report order.
        if !self.engine.has_user(&user) {
            return self.fail(&DomainError::no_such_user(&user));
        }
        let batch_id = match &batch_token {
            Some(raw) => match BatchId::parse(raw) {
                Ok(id) => Some(id),
                Err(_) => return self.fail(&DomainError::no_such_batch(raw)),
            },
            None => None,
        };

        match self
            .engine
            .delete_applications(&user, date, batch_id.as_ref())
        {
            Ok(removed) => writeln!(self.output, "{removed}"),
            Err(error) => self.fail(&error),
        }
    }

    /// `u [user]`
    fn list_applications(&mut self, args: &str) -> io::Result<()> {
        let Some(tokens) = parse::tokenize(args) else {
            return Ok(());
        };
        let user = tokens.first().map(String::as_str);
        match self.engine.list_applications(user) {
            Ok(records) => {
                for record in records {
                    writeln!(
                        self.output,
                        "{} {} {}",
                        record.user(),
                        record.batch_id(),
                        record.date()
                    )?;
                }
                Ok(())
            }
            Err(error) => self.fail(&error),
        }
    }
}
