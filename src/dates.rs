//! Locale-dependent date formatting for transaction timestamps.

use chrono::{DateTime, Local, NaiveDate, TimeZone, Utc};

/// Order of the day, month and year fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldOrder {
    DayMonthYear,
    MonthDayYear,
    YearMonthDay,
}

/// How a locale writes a short numeric date: field order, separator, and whether day and
/// month get a leading zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateStyle {
    order: FieldOrder,
    separator: char,
    zero_padded: bool,
}

impl Default for DateStyle {
    fn default() -> Self {
        Self::DAY_MONTH_YEAR
    }
}

/// Languages writing the year first (`2020-04-20`).
const YEAR_FIRST_LANGUAGES: [&str; 6] = ["ja", "zh", "ko", "sv", "lt", "hu"];

/// `20.04.2020`
const DOTTED_PADDED_LANGUAGES: [&str; 8] = ["ru", "uk", "pl", "tr", "be", "bg", "ro", "kk"];

/// `20.4.2020`
const DOTTED_LANGUAGES: [&str; 7] = ["de", "fi", "nb", "nn", "no", "da", "is"];

/// `20/4/2020`
const SLASHED_LANGUAGES: [&str; 4] = ["es", "it", "el", "ca"];

/// `20-4-2020`
const DASHED_LANGUAGES: [&str; 2] = ["nl", "fy"];

/// Regions that write English or French dates year first.
const YEAR_FIRST_REGIONS: [&str; 1] = ["CA"];

impl DateStyle {
    /// `20/04/2020`
    pub const DAY_MONTH_YEAR: Self = Self::new(FieldOrder::DayMonthYear, '/', true);
    /// `4/20/2020`
    pub const MONTH_DAY_YEAR: Self = Self::new(FieldOrder::MonthDayYear, '/', false);
    /// `2020-04-20`
    pub const YEAR_MONTH_DAY: Self = Self::new(FieldOrder::YearMonthDay, '-', true);

    pub const fn new(order: FieldOrder, separator: char, zero_padded: bool) -> Self {
        Self {
            order,
            separator,
            zero_padded,
        }
    }

    /// Maps a POSIX or BCP 47 locale name (`pt_BR.UTF-8`, `en-US`, `C`) to a date style.
    pub fn from_locale(locale: &str) -> Self {
        let name = locale
            .split(['.', '@'])
            .next()
            .unwrap_or_default()
            .replace('-', "_");

        if name.is_empty() || name == "C" || name == "POSIX" {
            return Self::YEAR_MONTH_DAY;
        }

        let mut parts = name.split('_');
        let language = parts.next().unwrap_or_default().to_lowercase();
        let region = parts.next().map(|r| r.to_uppercase());
        let language = language.as_str();

        match (language, region.as_deref()) {
            ("en", None | Some("US")) => Self::MONTH_DAY_YEAR,
            ("en" | "fr", Some(region)) if YEAR_FIRST_REGIONS.contains(&region) => {
                Self::YEAR_MONTH_DAY
            }
            _ if YEAR_FIRST_LANGUAGES.contains(&language) => Self::YEAR_MONTH_DAY,
            _ if DOTTED_PADDED_LANGUAGES.contains(&language) => {
                Self::new(FieldOrder::DayMonthYear, '.', true)
            }
            _ if DOTTED_LANGUAGES.contains(&language) => {
                Self::new(FieldOrder::DayMonthYear, '.', false)
            }
            _ if SLASHED_LANGUAGES.contains(&language) => {
                Self::new(FieldOrder::DayMonthYear, '/', false)
            }
            _ if DASHED_LANGUAGES.contains(&language) => {
                Self::new(FieldOrder::DayMonthYear, '-', false)
            }
            _ => Self::DAY_MONTH_YEAR,
        }
    }

    /// Resolves the style from an explicit override, then `LC_ALL`, `LC_TIME` and `LANG`.
    pub fn resolve(locale_override: Option<&str>) -> Self {
        Self::resolve_with(locale_override, |name| std::env::var(name).ok())
    }

    fn resolve_with(
        locale_override: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Self {
        if let Some(locale) = locale_override.filter(|l| !l.trim().is_empty()) {
            return Self::from_locale(locale.trim());
        }
        ["LC_ALL", "LC_TIME", "LANG"]
            .iter()
            .filter_map(|name| lookup(*name))
            .find(|value| !value.trim().is_empty())
            .map(|value| Self::from_locale(value.trim()))
            .unwrap_or(Self::YEAR_MONTH_DAY)
    }

    /// The chrono format string, e.g. `%d/%m/%Y`.
    fn pattern(&self) -> String {
        let (day, month) = if self.zero_padded {
            ("%d", "%m")
        } else {
            ("%-d", "%-m")
        };
        let fields = match self.order {
            FieldOrder::DayMonthYear => [day, month, "%Y"],
            FieldOrder::MonthDayYear => [month, day, "%Y"],
            FieldOrder::YearMonthDay => ["%Y", month, day],
        };
        let separator = self.separator.to_string();
        fields.join(separator.as_str())
    }

    pub fn format(&self, date: NaiveDate) -> String {
        date.format(&self.pattern()).to_string()
    }
}

/// Formats a creation timestamp as a date in the local time zone.
pub fn format_created_at(created_at: &DateTime<Utc>, style: DateStyle) -> String {
    format_in_zone(created_at, &Local, style)
}

pub fn format_in_zone<Tz: TimeZone>(
    created_at: &DateTime<Utc>,
    zone: &Tz,
    style: DateStyle,
) -> String {
    style.format(created_at.with_timezone(zone).date_naive())
}
