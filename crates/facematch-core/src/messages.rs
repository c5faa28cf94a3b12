//! Fixed display strings. The activity ships in Greek only.

/// Shown while images load
pub const LOADING: &str = "Φόρτωση...";

/// Prefix for the loading percentage
pub const LOADING_PROGRESS: &str = "Φόρτωση";

/// Prefix for the current level in the status line
pub const LEVEL: &str = "Επίπεδο";

pub const HELP: &str = "Από το αριστερό κουτί, επιλέξτε σχήμα, χρώμα και έκφραση, ώστε να ταιριάζει με αυτό που φαντάζεστε ότι πρέπει να μπει στη θέση του ερωτηματικού στο πάνω κουτί. Μετά πατήστε το ερωτηματικό.";

/// Page opened by the about button
pub const CREDITS_URL: &str = "credits/index_DS_II.html";

/// Shown after a wrong guess
pub const TRY_AGAIN: &str = "Προσπάθησε ξανά!";

/// Shown when the level is solved
pub const BRAVO: &str = "Μπράβο!";

pub const CREDITS: &str = "Συντελεστές";

/// Title of the help box
pub const HELP_TITLE: &str = "Βοήθεια";

/// Title of the picker box
pub const PICKER_TITLE: &str = "Επιλογή";

/// Key hints for the terminal, paired with their keys there
pub const CONTROL_LABELS: [&str; 7] = [
    "κίνηση",
    "επιλογή",
    "δοκιμή",
    "επίπεδο",
    "βοήθεια",
    "συντελεστές",
    "έξοδος",
];

/// "Credits: <url>"
pub fn credits_line() -> String {
    format!("{}: {}", CREDITS, CREDITS_URL)
}

/// "Level: N", N being 1-based
pub fn level_status(display_level: usize) -> String {
    format!("{}: {}", LEVEL, display_level)
}

/// "Loading N %"
pub fn loading_progress(loaded: usize, total: usize) -> String {
    let percent = if total == 0 { 100 } else { 100 * loaded / total };
    format!("{} {} %", LOADING_PROGRESS, percent)
}
