use chrono::{Datelike, Local, NaiveDateTime};

const WEEKDAYS: [&str; 7] = [
    "lundi", "mardi", "mercredi", "jeudi", "vendredi", "samedi", "dimanche",
];

const MONTHS: [&str; 12] = [
    "janvier", "février", "mars", "avril", "mai", "juin",
    "juillet", "août", "septembre", "octobre", "novembre", "décembre",
];

const RULE_WIDTH: usize = 40;

/// Render the date/time preamble for a given instant.
///
/// The result ends with a blank line so the user's text can be appended
/// directly.
pub fn format_context_banner(at: &NaiveDateTime) -> String {
    let weekday = WEEKDAYS[at.weekday().num_days_from_monday() as usize];
    let month = MONTHS[at.month0() as usize];

    format!(
        "INFORMATION SYSTÈME (à utiliser OBLIGATOIREMENT):\n\
         📅 Aujourd'hui: {} {} {} {}\n\
         🕐 Heure actuelle: {}\n\
         {}\n\n",
        weekday,
        at.day(),
        month,
        at.year(),
        at.format("%H:%M:%S"),
        "━".repeat(RULE_WIDTH),
    )
}

/// Banner for the current local wall-clock time
pub fn context_banner_now() -> String {
    format_context_banner(&Local::now().naive_local())
}

/// Outgoing payload: banner first, then the raw user input
pub fn compose_message(input: &str, at: &NaiveDateTime) -> String {
    let mut message = format_context_banner(at);
    message.push_str(input);
    message
}
