//! Host values interpolated into system prompts.

use chrono::{Local, NaiveDate};

/// Slot filled with the host machine architecture.
pub const MACHINE_SLOT: &str = "machine";

/// Slot filled with today's date in long form.
pub const CURRENT_DATE_SLOT: &str = "current_date";

/// Slots the renderer fills itself. Callers never supply these.
pub const SYSTEM_SLOTS: [&str; 2] = [MACHINE_SLOT, CURRENT_DATE_SLOT];

/// Returns true if `name` is filled by the renderer rather than the caller.
pub fn is_system_slot(name: &str) -> bool {
    SYSTEM_SLOTS.contains(&name)
}

/// Source of the environment-derived values a system prompt needs.
pub trait HostEnvironment {
    /// Architecture identifier, e.g. `x86_64` or `aarch64`.
    fn machine(&self) -> String;

    /// Today's date.
    fn today(&self) -> NaiveDate;
}

/// Reads the real host architecture and local clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl HostEnvironment for SystemEnvironment {
    fn machine(&self) -> String {
        std::env::consts::ARCH.to_string()
    }

    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Returns preset values, for reproducible output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixedEnvironment {
    pub machine: String,
    pub date: NaiveDate,
}

impl FixedEnvironment {
    pub fn new(machine: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            machine: machine.into(),
            date,
        }
    }
}

impl HostEnvironment for FixedEnvironment {
    fn machine(&self) -> String {
        self.machine.clone()
    }

    fn today(&self) -> NaiveDate {
        self.date
    }
}

/// Format a date as `<Weekday>, <Month> <day>, <year>` with no zero padding
/// on the day, e.g. `Sunday, October 4, 2026`.
pub fn format_long_date(date: NaiveDate) -> String {
    date.format("%A, %B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_long_date_has_no_zero_padding() {
        assert_eq!(format_long_date(date(2026, 10, 4)), "Sunday, October 4, 2026");
        assert_eq!(format_long_date(date(2025, 3, 9)), "Sunday, March 9, 2025");
    }

    #[test]
    fn test_long_date_two_digit_day() {
        assert_eq!(
            format_long_date(date(2024, 12, 25)),
            "Wednesday, December 25, 2024"
        );
    }

    #[test]
    fn test_system_environment_machine_matches_target() {
        let machine = SystemEnvironment.machine();
        assert_eq!(machine, std::env::consts::ARCH);
        assert!(!machine.is_empty());
        assert_eq!(machine.trim(), machine);
    }

    #[test]
    fn test_fixed_environment() {
        let env = FixedEnvironment::new("aarch64", date(2026, 10, 4));
        assert_eq!(env.machine(), "aarch64");
        assert_eq!(env.today(), date(2026, 10, 4));
    }

    #[test]
    fn test_system_slots() {
        assert!(is_system_slot("machine"));
        assert!(is_system_slot("current_date"));
        assert!(!is_system_slot("resource_name"));
    }
}
