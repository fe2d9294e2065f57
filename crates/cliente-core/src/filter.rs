//! Search Filter
//!
//! Derives the filtered view from the record collection and the search
//! term. A record matches when its name contains the term, or when its
//! last-update date rendered as `d mmm yyyy` (Spanish months) does.
//! Recomputed from scratch on every change; the collection is small.

use chrono::{Datelike, NaiveDate, NaiveTime};

use crate::model::Cliente;

/// Spanish abbreviated month names, January first
const MONTHS_ES: [&str; 12] = [
    "ene", "feb", "mar", "abr", "may", "jun", "jul", "ago", "sep", "oct", "nov", "dic",
];

/// Filter records by a case-insensitive search term, keeping source order
pub fn filter_clientes(records: &[Cliente], term: &str) -> Vec<Cliente> {
    if term.is_empty() {
        return records.to_vec();
    }
    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|cliente| matches_term(cliente, &needle))
        .cloned()
        .collect()
}

/// `needle` must already be lowercase
pub fn matches_term(cliente: &Cliente, needle: &str) -> bool {
    if cliente.nombre_completo.to_lowercase().contains(needle) {
        return true;
    }
    match cliente.fecha_actualizado.as_deref().and_then(parse_iso_date) {
        Some(date) => search_date(date).contains(needle),
        None => {
            log::debug!(
                "[FILTER] cliente {} has no usable fecha_actualizado: {:?}",
                cliente.id,
                cliente.fecha_actualizado
            );
            false
        }
    }
}

/// Calendar date of an ISO-8601 date or date-time.
///
/// Accepts `YYYY-MM-DD` optionally followed by `T` or a space and a time
/// (`HH`, `HH:MM`, `HH:MM:SS[.fff]`) with an optional `Z` / `±HH[:MM]`
/// offset. The date is taken as written; no zone conversion happens.
pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    let (date_part, time_part) = match raw.find(|c: char| c == 'T' || c == ' ') {
        Some(idx) => (&raw[..idx], Some(&raw[idx + 1..])),
        None => (raw, None),
    };

    let date = NaiveDate::parse_from_str(date_part, "%Y-%m-%d").ok()?;
    match time_part {
        Some(time) if !is_valid_time(time) => None,
        _ => Some(date),
    }
}

fn is_valid_time(raw: &str) -> bool {
    let clock = strip_offset(raw);
    if clock.is_empty() {
        return false;
    }
    ["%H:%M:%S%.f", "%H:%M"]
        .iter()
        .any(|fmt| NaiveTime::parse_from_str(clock, fmt).is_ok())
        || clock.parse::<u32>().map(|h| h < 24 && clock.len() == 2).unwrap_or(false)
}

fn strip_offset(raw: &str) -> &str {
    if let Some(clock) = raw.strip_suffix('Z') {
        return clock;
    }
    match raw.rfind(|c: char| c == '+' || c == '-') {
        Some(idx) if is_offset(&raw[idx + 1..]) => &raw[..idx],
        _ => raw,
    }
}

fn is_offset(raw: &str) -> bool {
    let digits: String = raw.chars().filter(|c| *c != ':').collect();
    matches!(digits.len(), 2 | 4) && digits.chars().all(|c| c.is_ascii_digit())
}

/// Lowercase form used for matching, e.g. `5 ene 2023`
pub fn search_date(date: NaiveDate) -> String {
    format!("{} {} {}", date.day(), month_es(date), date.year())
}

/// Display form with a capitalised month, e.g. `5 Ene 2023`.
/// Unparsable input is returned unchanged.
pub fn display_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => {
            let month = month_es(date);
            let mut chars = month.chars();
            let capitalised = match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            };
            format!("{} {} {}", date.day(), capitalised, date.year())
        }
        None => raw.to_string(),
    }
}

fn month_es(date: NaiveDate) -> &'static str {
    MONTHS_ES[date.month0() as usize]
}
