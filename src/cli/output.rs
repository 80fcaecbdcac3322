use colored::Colorize;
use std::fmt;
use std::sync::{OnceLock, RwLock};

use crate::booking::BookingIntent;
use crate::catalog::TurfRecord;
use crate::search::FilterSummary;

/// Message categories used by the CLI output helpers.
#[derive(Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Info,
    Success,
    Warning,
    Error,
    Section,
}

#[derive(Clone, Copy, Debug, Default)]
pub struct OutputPreferences {
    /// Suppresses color codes, for plain terminals and scripted runs.
    pub plain_mode: bool,
}

static PREFERENCES: OnceLock<RwLock<OutputPreferences>> = OnceLock::new();

pub fn set_preferences(prefs: OutputPreferences) {
    let lock = PREFERENCES.get_or_init(|| RwLock::new(OutputPreferences::default()));
    if let Ok(mut guard) = lock.write() {
        *guard = prefs;
    }
}

fn preferences() -> OutputPreferences {
    PREFERENCES
        .get_or_init(|| RwLock::new(OutputPreferences::default()))
        .read()
        .map(|guard| *guard)
        .unwrap_or_default()
}

fn apply_style(kind: MessageKind, message: impl fmt::Display, prefs: &OutputPreferences) -> String {
    let text = message.to_string();

    let formatted = match kind {
        MessageKind::Section => format!("=== {} ===", text.trim()),
        MessageKind::Info => format!("INFO: {text}"),
        MessageKind::Success => format!("SUCCESS: [ok] {text}"),
        MessageKind::Warning => format!("WARNING: [!] {text}"),
        MessageKind::Error => format!("ERROR: [x] {text}"),
    };

    if prefs.plain_mode {
        return formatted;
    }

    match kind {
        MessageKind::Success => formatted.bright_green().to_string(),
        MessageKind::Warning => formatted.bright_yellow().to_string(),
        MessageKind::Error => formatted.bright_red().to_string(),
        MessageKind::Section => formatted.bold().to_string(),
        MessageKind::Info => formatted,
    }
}

pub fn print(kind: MessageKind, message: impl fmt::Display) {
    let prefs = preferences();
    let formatted = apply_style(kind, message, &prefs);
    match kind {
        MessageKind::Section => println!("\n{}", formatted),
        _ => println!("{}", formatted),
    }
}

pub fn info(message: impl fmt::Display) {
    print(MessageKind::Info, message);
}

pub fn success(message: impl fmt::Display) {
    print(MessageKind::Success, message);
}

pub fn warning(message: impl fmt::Display) {
    print(MessageKind::Warning, message);
}

pub fn error(message: impl fmt::Display) {
    print(MessageKind::Error, message);
}

pub fn section(title: impl fmt::Display) {
    print(MessageKind::Section, title);
}

/// Renders the listing header and one card per filtered turf.
pub fn render_listing(summary: &FilterSummary, turfs: &[&TurfRecord]) {
    section(summary.heading());
    info(summary.found_label());
    if turfs.is_empty() {
        println!();
        println!("No turfs found");
        println!("Try changing your search filters.");
        return;
    }
    for turf in turfs {
        println!();
        render_card(turf);
    }
}

/// One turf card: identity, price, rating, and a preview of its slots.
pub fn render_card(turf: &TurfRecord) {
    let prefs = preferences();
    let title = format!("#{} {}", turf.id, turf.name);
    if prefs.plain_mode {
        println!("{}", title);
    } else {
        println!("{}", title.bold());
    }
    println!("  {} | {}", turf.location(), turf.pitch_type);
    println!(
        "  Rs.{}/hr | {:.1} ({} reviews) | {}",
        turf.price_per_hour, turf.rating, turf.review_count, turf.capacity
    );
    println!("  {} slots available: {}", turf.available_slots.len(), slot_preview(turf));
    println!("  Call: {}", turf.phone);
}

/// Full detail view shown by the `turf` command.
pub fn render_detail(turf: &TurfRecord) {
    section(turf.name.clone());
    println!("{}", turf.description);
    println!("Location:  {}", turf.location());
    println!("Price:     Rs.{}/hr", turf.price_per_hour);
    println!("Rating:    {:.1} ({} reviews)", turf.rating, turf.review_count);
    println!("Format:    {} | {}", turf.capacity, turf.pitch_type);
    println!("Slots:     {}", turf.available_slots.join(", "));
    println!("Contact:   {}", turf.phone);
}

pub fn render_intents(intents: &[BookingIntent], turf_name: impl Fn(u32) -> String) {
    section("Booking requests this session");
    if intents.is_empty() {
        info("No booking requests recorded yet.");
        return;
    }
    for intent in intents {
        println!(
            "{} | {} at {} on {} | {} ({})",
            intent.recorded_at.format("%H:%M:%S"),
            turf_name(intent.turf_id),
            intent.slot,
            intent.date,
            intent.name,
            intent.phone
        );
    }
}

fn slot_preview(turf: &TurfRecord) -> String {
    let shown: Vec<&str> = turf
        .available_slots
        .iter()
        .take(4)
        .map(String::as_str)
        .collect();
    let mut preview = shown.join(", ");
    if turf.available_slots.len() > 4 {
        preview.push_str(&format!(" +{} more", turf.available_slots.len() - 4));
    }
    preview
}
