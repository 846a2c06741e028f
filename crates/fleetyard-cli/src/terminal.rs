//! Terminal styling and color utilities.
//!
//! ANSI escape code definitions and color detection for text reports.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bright bold white for ship names.
    pub const WHITE_BOLD: &str = "\x1b[1;97m";
    /// Gray for labels and decorations.
    pub const GRAY: &str = "\x1b[90m";
    /// Cyan for serial numbers.
    pub const CYAN: &str = "\x1b[36m";
    /// Green for successful outcomes.
    pub const GREEN: &str = "\x1b[32m";
    /// Red for refusals.
    pub const RED: &str = "\x1b[31m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub white_bold: &'static str,
    pub gray: &'static str,
    pub cyan: &'static str,
    pub green: &'static str,
    pub red: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            white_bold: colors::WHITE_BOLD,
            gray: colors::GRAY,
            cyan: colors::CYAN,
            green: colors::GREEN,
            red: colors::RED,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            white_bold: "",
            gray: "",
            cyan: "",
            green: "",
            red: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self::detect()
    }
}

/// Whether text reports should carry ANSI colour, judged from the environment.
#[must_use]
pub fn supports_color() -> bool {
    color_allowed(
        std::env::var_os("NO_COLOR").is_some(),
        std::env::var("TERM").ok().as_deref(),
    )
}

/// Colour is off when `NO_COLOR` is present (any value) or the terminal is `dumb`.
#[must_use]
pub fn color_allowed(no_color: bool, term: Option<&str>) -> bool {
    !no_color && !term.is_some_and(|term| term.eq_ignore_ascii_case("dumb"))
}

/// Group the digits of `n` in threes with commas.
///
/// ```
/// # use fleetyard_cli::terminal::group_thousands;
/// assert_eq!(group_thousands(950), "950");
/// assert_eq!(group_thousands(10_000), "10,000");
/// ```
#[must_use]
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

/// Format a weight in kilograms, keeping one decimal only when needed.
///
/// ```
/// # use fleetyard_cli::terminal::format_kg;
/// assert_eq!(format_kg(2450.0), "2,450 kg");
/// assert_eq!(format_kg(20.5), "20.5 kg");
/// ```
#[must_use]
pub fn format_kg(kg: f64) -> String {
    if kg.fract() == 0.0 && kg >= 0.0 && kg < u64::MAX as f64 {
        format!("{} kg", group_thousands(kg as u64))
    } else {
        format!("{kg:.1} kg")
    }
}
