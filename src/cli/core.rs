//! Core CLI loop support: shell context, command dispatch, and the booking
//! wizard that drives the form state machine.

use chrono::{Local, NaiveDate};
use dialoguer::theme::ColorfulTheme;
use dialoguer::{Confirm, Input, Select};
use strsim::levenshtein;
use thiserror::Error;

use crate::booking::{Field, FormPhase};
use crate::catalog::{
    City, CityFilter, ANY_TIME, BOOKING_TIME_SLOTS, QUICK_AREAS, SEARCH_TIME_SLOTS,
};
use crate::config::{Config, ConfigManager};
use crate::errors::TurfbookError;
use crate::search::CriteriaUpdate;
use crate::session::Session;

use super::output;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

/// Fatal shell errors that abort the CLI loop.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
    #[error(transparent)]
    Core(#[from] TurfbookError),
}

/// Recoverable per-command failures, reported and then ignored by the loop.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    Usage(String),
    #[error("{0}")]
    Failed(String),
    #[error(transparent)]
    Core(#[from] TurfbookError),
    #[error(transparent)]
    Dialog(#[from] dialoguer::Error),
}

pub type CommandResult = Result<(), CommandError>;

const COMMANDS: &[(&str, &str, &str)] = &[
    ("help", "help", "Show available commands"),
    ("cities", "cities", "List covered cities and turf counts"),
    ("list", "list", "Show the turf listing for the current filters"),
    ("turf", "turf <id>", "Show full details for one turf"),
    ("filter", "filter <city>", "Quick city filter (All, Ahmedabad, Surat)"),
    (
        "search",
        "search <city> [date] [time]",
        "Full search: city, optional YYYY-MM-DD date and time slot",
    ),
    ("area", "area <label>", "Quick-filter by a known area label"),
    ("areas", "areas", "List the quick-filter area labels"),
    ("times", "times", "List the searchable time slots"),
    ("status", "status", "Show current criteria and booking state"),
    ("book", "book <id>", "Start a booking request for a turf"),
    ("set", "set <name|phone|date|slot> <value>", "Fill one booking field"),
    ("submit", "submit", "Submit the booking request"),
    ("cancel", "cancel", "Discard the booking in progress"),
    ("intents", "intents", "List booking requests recorded this session"),
    ("theme", "theme <light|dark|plain>", "Set the display theme"),
    ("config", "config", "Show the configuration file location"),
    ("exit", "exit", "Leave the shell"),
];

/// Shared CLI runtime state: the session core plus configuration handles.
pub struct ShellContext {
    mode: CliMode,
    session: Session,
    config: Config,
    config_manager: ConfigManager,
    theme: ColorfulTheme,
    pub running: bool,
    pub last_command: Option<String>,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let config_manager = ConfigManager::new()?;
        let config = config_manager.load()?;

        output::set_preferences(output::OutputPreferences {
            plain_mode: mode == CliMode::Script || config.theme == "plain",
        });

        let mut session = Session::with_bundled_catalog();
        if let Some(saved) = config.last_city_filter.as_deref() {
            let filter = CityFilter::parse(saved);
            if filter != CityFilter::All {
                session.update_criteria(CriteriaUpdate::QuickCity(filter));
                output::info(format!("Restored city filter `{filter}`."));
            }
        }

        Ok(Self {
            mode,
            session,
            config,
            config_manager,
            theme: ColorfulTheme::default(),
            running: true,
            last_command: None,
        })
    }

    pub fn command_names() -> Vec<&'static str> {
        COMMANDS.iter().map(|(name, _, _)| *name).collect()
    }

    pub fn prompt(&self) -> String {
        match self.session.booking_turf() {
            Some(turf) => format!("turfbook(booking #{})> ", turf.id),
            None => format!("turfbook[{}]> ", self.session.criteria().city),
        }
    }

    pub(crate) fn report_error(&mut self, err: CommandError) -> Result<(), CliError> {
        output::error(err.to_string());
        Ok(())
    }

    pub(crate) fn confirm_exit(&mut self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match Confirm::with_theme(&self.theme)
            .with_prompt("Exit turfbook?")
            .default(true)
            .interact()
        {
            Ok(answer) => Ok(answer),
            Err(_) => Ok(true),
        }
    }

    /// Ctrl-C handling: an open booking is discarded first; with no booking
    /// open the user is asked before the shell exits. Returns `true` when the
    /// loop should stop.
    pub(crate) fn handle_interrupt(&mut self) -> Result<bool, CliError> {
        if self.session.booking().is_some() {
            self.session.close_booking();
            output::info("Booking cancelled.");
            return Ok(false);
        }
        self.confirm_exit()
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        match command {
            "help" => self.cmd_help(),
            "cities" => self.cmd_cities(),
            "list" => self.cmd_list(),
            "turf" => self.cmd_turf(args),
            "filter" => self.cmd_filter(args),
            "search" => self.cmd_search(args),
            "area" => self.cmd_area(args),
            "areas" => self.cmd_areas(),
            "times" => self.cmd_times(),
            "status" => self.cmd_status(),
            "book" => self.cmd_book(args),
            "set" => self.cmd_set(args),
            "submit" => self.cmd_submit(),
            "cancel" => self.cmd_cancel(),
            "intents" => self.cmd_intents(),
            "theme" => self.cmd_theme(args),
            "config" => self.cmd_config(),
            "exit" | "quit" => return Ok(LoopControl::Exit),
            _ => {
                return Err(unknown_command(raw));
            }
        }
        .map(|_| LoopControl::Continue)
    }

    fn cmd_help(&self) -> CommandResult {
        output::section("Commands");
        for (_, usage, summary) in COMMANDS {
            println!("  {usage:<38} {summary}");
        }
        Ok(())
    }

    fn cmd_cities(&self) -> CommandResult {
        output::section("Cities");
        for city in City::ALL {
            println!("  {:<12} {} turfs", city.name(), self.session.catalog().count_in(city));
        }
        Ok(())
    }

    fn cmd_list(&self) -> CommandResult {
        let turfs = self.session.filtered_turfs();
        let summary = self.session.filter_summary();
        output::render_listing(&summary, &turfs);
        Ok(())
    }

    fn cmd_turf(&self, args: &[&str]) -> CommandResult {
        let id = parse_turf_id(args)?;
        let turf = self
            .session
            .catalog()
            .turf(id)
            .ok_or(TurfbookError::UnknownTurf(id))?;
        output::render_detail(turf);
        Ok(())
    }

    fn cmd_filter(&mut self, args: &[&str]) -> CommandResult {
        let value = args
            .first()
            .ok_or_else(|| CommandError::Usage("Usage: filter <city>".into()))?;
        let filter = CityFilter::parse(value);
        if filter == CityFilter::All && *value != "All" {
            output::warning(format!(
                "`{value}` is not a covered city; showing all cities instead."
            ));
        }
        self.session.update_criteria(CriteriaUpdate::QuickCity(filter));
        self.persist_city_filter()?;
        self.cmd_list()
    }

    fn cmd_search(&mut self, args: &[&str]) -> CommandResult {
        let city = args
            .first()
            .ok_or_else(|| CommandError::Usage("Usage: search <city> [date] [time]".into()))?;
        let date = args.get(1).copied().unwrap_or("").to_string();
        let time = if args.len() > 2 {
            args[2..].join(" ")
        } else {
            ANY_TIME.to_string()
        };
        if !date.is_empty() {
            validate_date_shape(&date)?;
            warn_if_past(&date);
        }
        if !SEARCH_TIME_SLOTS.contains(&time.as_str()) {
            return Err(CommandError::Usage(format!(
                "`{time}` is not a searchable time slot; see `times`."
            )));
        }
        self.session.update_criteria(CriteriaUpdate::Search {
            city: CityFilter::parse(city),
            date,
            time,
        });
        self.persist_city_filter()?;
        self.cmd_list()
    }

    fn cmd_area(&mut self, args: &[&str]) -> CommandResult {
        if args.is_empty() {
            return Err(CommandError::Usage("Usage: area <label>".into()));
        }
        let label = args.join(" ");
        let known = QUICK_AREAS
            .iter()
            .find(|area| area.eq_ignore_ascii_case(&label));
        let Some(area) = known else {
            return Err(CommandError::Failed(format!(
                "`{label}` is not a quick-filter area; see `areas`."
            )));
        };
        self.session
            .update_criteria(CriteriaUpdate::QuickArea(area.to_string()));
        self.persist_city_filter()?;
        self.cmd_list()
    }

    fn cmd_areas(&self) -> CommandResult {
        output::section("Quick-filter areas");
        for area in QUICK_AREAS {
            println!("  {area}");
        }
        Ok(())
    }

    fn cmd_times(&self) -> CommandResult {
        output::section("Searchable time slots");
        for slot in SEARCH_TIME_SLOTS {
            println!("  {slot}");
        }
        output::section("Bookable time slots");
        println!("  {}", BOOKING_TIME_SLOTS.join(", "));
        Ok(())
    }

    fn cmd_status(&self) -> CommandResult {
        let criteria = self.session.criteria();
        output::section("Session");
        println!("  City:  {}", criteria.city);
        println!(
            "  Date:  {}",
            if criteria.date.is_empty() { "(any)" } else { &criteria.date }
        );
        println!("  Time:  {}", criteria.time);
        match self.session.booking_turf() {
            Some(turf) => println!("  Booking in progress for #{} {}", turf.id, turf.name),
            None => println!("  No booking in progress"),
        }
        println!("  Requests recorded: {}", self.session.intents().len());
        Ok(())
    }

    fn cmd_book(&mut self, args: &[&str]) -> CommandResult {
        let id = parse_turf_id(args)?;
        self.session.open_booking(id)?;
        let turf = self
            .session
            .booking_turf()
            .ok_or(TurfbookError::NoActiveBooking)?;
        output::section(format!("Book Your Slot: {}", turf.name));
        output::info(format!(
            "{} | Rs.{}/hr | {}",
            turf.location(),
            turf.price_per_hour,
            turf.phone
        ));
        if self.mode == CliMode::Interactive {
            self.run_booking_wizard()
        } else {
            output::info("Fill the request with `set <field> <value>`, then `submit`.");
            Ok(())
        }
    }

    /// Interactive wizard over the same form machine the `set`/`submit`
    /// commands drive. Loops until the form submits or the user cancels with
    /// `:cancel`.
    fn run_booking_wizard(&mut self) -> CommandResult {
        loop {
            for field in Field::ALL {
                let keep = self
                    .session
                    .booking()
                    .map(|form| form.error(field).is_none() && !field_value_empty(form.fields(), field))
                    .unwrap_or(false);
                if keep {
                    continue;
                }
                match self.prompt_field(field)? {
                    Some(value) => self.session.update_field(field, value)?,
                    None => {
                        self.session.close_booking();
                        output::info("Booking cancelled.");
                        return Ok(());
                    }
                }
            }

            if self.session.submit()? == FormPhase::Submitted {
                self.print_confirmation();
                self.session.close_booking();
                return Ok(());
            }

            let form = self.session.booking().ok_or(TurfbookError::NoActiveBooking)?;
            for (field, error) in form.errors() {
                output::warning(format!("{}: {}", field.label(), error.message(*field)));
            }
        }
    }

    /// Prompts for one field. Returns `None` when the user cancels.
    fn prompt_field(&mut self, field: Field) -> Result<Option<String>, CommandError> {
        match field {
            Field::Slot => {
                let slots = booking_slot_options();
                let index = Select::with_theme(&self.theme)
                    .with_prompt(field.label())
                    .items(slots)
                    .default(0)
                    .interact()?;
                Ok(Some(slots[index].to_string()))
            }
            Field::Date => loop {
                let value = self.prompt_text("Date (YYYY-MM-DD)")?;
                if is_cancel(&value) {
                    return Ok(None);
                }
                if value.trim().is_empty() {
                    return Ok(Some(value));
                }
                match NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d") {
                    Ok(_) => {
                        warn_if_past(value.trim());
                        return Ok(Some(value.trim().to_string()));
                    }
                    Err(_) => output::warning("Use YYYY-MM-DD format"),
                }
            },
            Field::Name | Field::Phone => {
                let value = self.prompt_text(field.label())?;
                if is_cancel(&value) {
                    return Ok(None);
                }
                Ok(Some(value))
            }
        }
    }

    fn prompt_text(&self, label: &str) -> Result<String, CommandError> {
        Ok(Input::<String>::with_theme(&self.theme)
            .with_prompt(label)
            .allow_empty(true)
            .interact_text()?)
    }

    fn cmd_set(&mut self, args: &[&str]) -> CommandResult {
        let usage = || CommandError::Usage("Usage: set <name|phone|date|slot> <value>".into());
        let field = match args.first().copied().ok_or_else(usage)? {
            "name" => Field::Name,
            "phone" => Field::Phone,
            "date" => Field::Date,
            "slot" => Field::Slot,
            _ => return Err(usage()),
        };
        // A bare `set name` must not blank the field (or clear its error).
        if args.len() < 2 {
            return Err(usage());
        }
        let value = args[1..].join(" ");
        self.session.update_field(field, value)?;
        Ok(())
    }

    fn cmd_submit(&mut self) -> CommandResult {
        match self.session.submit()? {
            FormPhase::Submitted => {
                self.print_confirmation();
                self.session.close_booking();
            }
            FormPhase::Editing => {
                let form = self.session.booking().ok_or(TurfbookError::NoActiveBooking)?;
                for (field, error) in form.errors() {
                    output::warning(format!("{}: {}", field.label(), error.message(*field)));
                }
            }
        }
        Ok(())
    }

    fn cmd_cancel(&mut self) -> CommandResult {
        if self.session.booking().is_none() {
            return Err(TurfbookError::NoActiveBooking.into());
        }
        self.session.close_booking();
        output::info("Booking cancelled.");
        Ok(())
    }

    fn cmd_intents(&self) -> CommandResult {
        let catalog = self.session.catalog();
        output::render_intents(self.session.intents(), |id| {
            catalog
                .turf(id)
                .map(|turf| turf.name.clone())
                .unwrap_or_else(|| format!("turf #{id}"))
        });
        Ok(())
    }

    fn cmd_theme(&mut self, args: &[&str]) -> CommandResult {
        let value = args
            .first()
            .ok_or_else(|| CommandError::Usage("Usage: theme <light|dark|plain>".into()))?;
        if !matches!(*value, "light" | "dark" | "plain") {
            return Err(CommandError::Usage("Theme must be light, dark, or plain.".into()));
        }
        self.config.theme = value.to_string();
        output::set_preferences(output::OutputPreferences {
            plain_mode: self.mode == CliMode::Script || self.config.theme == "plain",
        });
        self.persist_config()?;
        output::success(format!("Theme set to `{value}`."));
        Ok(())
    }

    fn cmd_config(&self) -> CommandResult {
        output::section("Configuration");
        println!("  File:  {}", self.config_manager.path().display());
        println!("  Theme: {}", self.config.theme);
        Ok(())
    }

    fn print_confirmation(&self) {
        let Some(form) = self.session.booking() else {
            return;
        };
        let turf_name = self
            .session
            .booking_turf()
            .map(|turf| turf.name.clone())
            .unwrap_or_default();
        let fields = form.fields();
        output::success("Booking Request Sent!");
        output::info(format!("The team at {turf_name} will call you shortly."));
        output::info(format!("Slot: {} on {}", fields.slot, fields.date));
        output::info(
            "After submitting, the turf team will contact you at your provided number to confirm the booking.",
        );
    }

    fn persist_city_filter(&mut self) -> CommandResult {
        self.config.last_city_filter = Some(self.session.criteria().city.to_string());
        self.persist_config()
    }

    fn persist_config(&self) -> CommandResult {
        self.config_manager
            .save(&self.config)
            .map_err(CommandError::from)
    }
}

fn field_value_empty(fields: &crate::booking::BookingFields, field: Field) -> bool {
    match field {
        Field::Name => fields.name.trim().is_empty(),
        Field::Phone => fields.phone.trim().is_empty(),
        Field::Date => fields.date.trim().is_empty(),
        Field::Slot => fields.slot.trim().is_empty(),
    }
}

fn is_cancel(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), ":cancel" | "cancel")
}

/// The wizard offers the full fixed booking vocabulary, not the turf's
/// card preview; availability is confirmed by the turf over the phone.
fn booking_slot_options() -> &'static [&'static str] {
    &BOOKING_TIME_SLOTS
}

fn parse_turf_id(args: &[&str]) -> Result<u32, CommandError> {
    args.first()
        .ok_or_else(|| CommandError::Usage("Expected a turf id (see `list`).".into()))?
        .trim_start_matches('#')
        .parse::<u32>()
        .map_err(|_| CommandError::Usage("Turf id must be a number (see `list`).".into()))
}

fn validate_date_shape(date: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_| CommandError::Usage("Date must be in YYYY-MM-DD format.".into()))
}

fn warn_if_past(date: &str) {
    if let Ok(parsed) = NaiveDate::parse_from_str(date, "%Y-%m-%d") {
        if parsed < Local::now().date_naive() {
            output::warning(format!("{date} is in the past; the turf may decline it."));
        }
    }
}

fn unknown_command(raw: &str) -> CommandError {
    let lowered = raw.to_lowercase();
    let suggestion = COMMANDS
        .iter()
        .map(|(name, _, _)| *name)
        .min_by_key(|name| levenshtein(&lowered, name))
        .filter(|name| levenshtein(&lowered, name) <= 2);
    match suggestion {
        Some(name) => CommandError::Failed(format!(
            "Unknown command `{raw}`. Did you mean `{name}`? Type `help` for the full list."
        )),
        None => CommandError::Failed(format!("Unknown command `{raw}`. Type `help` for the full list.")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wizard_offers_the_fixed_slot_vocabulary() {
        let options = booking_slot_options();
        assert_eq!(options, &BOOKING_TIME_SLOTS[..]);
        assert!(!options.contains(&ANY_TIME));
    }

    #[test]
    fn nearby_typos_get_a_suggestion() {
        assert!(unknown_command("lsit").to_string().contains("`list`"));
        assert!(!unknown_command("zzzzzz").to_string().contains("Did you mean"));
    }
}
