use std::time::Duration;

/// Time unit for interval-based scheduling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeUnit {
    Milliseconds,
    Seconds,
    Minutes,
    Hours,
    Days,
}

impl std::str::FromStr for TimeUnit {
    type Err = String;

    /// Parse TimeUnit from string representation.
    /// Only accepts full lowercase enum names: "milliseconds", "seconds",
    /// "minutes", "hours", "days". For shorthand notations like "5s", "10m",
    /// use `parse_duration` instead.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "milliseconds" => Ok(TimeUnit::Milliseconds),
            "seconds" => Ok(TimeUnit::Seconds),
            "minutes" => Ok(TimeUnit::Minutes),
            "hours" => Ok(TimeUnit::Hours),
            "days" => Ok(TimeUnit::Days),
            _ => Err(format!("Invalid time unit: {}", s)),
        }
    }
}

impl TimeUnit {
    pub fn to_millis(&self, value: u64) -> u64 {
        match self {
            TimeUnit::Milliseconds => value,
            TimeUnit::Seconds => value * 1000,
            TimeUnit::Minutes => value * 60_000,
            TimeUnit::Hours => value * 3_600_000,
            TimeUnit::Days => value * 86_400_000,
        }
    }

    pub fn duration_of(&self, value: u64) -> Duration {
        Duration::from_millis(self.to_millis(value))
    }

    /// Parse a duration string like "5s", "10m", "2h", "500ms".
    /// Returns (value, TimeUnit) if successful.
    ///
    /// Strict rules:
    /// - Only lowercase suffixes are accepted: "ms", "s", "m", "h", "d"
    /// - Format must be: <number><suffix> (e.g., "5s", "100ms")
    /// - No spaces allowed between number and suffix
    pub fn parse_duration(s: &str) -> Option<(u64, TimeUnit)> {
        let s = s.trim();

        let split_pos = s.find(|c: char| !c.is_ascii_digit())?;
        if split_pos == 0 {
            return None;
        }

        let (num_str, unit_str) = s.split_at(split_pos);
        let value = num_str.parse::<u64>().ok()?;

        let time_unit = match unit_str {
            "ms" => TimeUnit::Milliseconds,
            "s" => TimeUnit::Seconds,
            "m" => TimeUnit::Minutes,
            "h" => TimeUnit::Hours,
            "d" => TimeUnit::Days,
            _ => return None,
        };

        Some((value, time_unit))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_shorthand_durations() {
        assert_eq!(
            TimeUnit::parse_duration("500ms"),
            Some((500, TimeUnit::Milliseconds))
        );
        assert_eq!(TimeUnit::parse_duration("5s"), Some((5, TimeUnit::Seconds)));
        assert_eq!(
            TimeUnit::parse_duration(" 10m "),
            Some((10, TimeUnit::Minutes))
        );
        assert_eq!(TimeUnit::parse_duration("2h"), Some((2, TimeUnit::Hours)));
        assert_eq!(TimeUnit::parse_duration("1d"), Some((1, TimeUnit::Days)));
    }

    #[test]
    fn rejects_malformed_durations() {
        assert_eq!(TimeUnit::parse_duration("ms"), None);
        assert_eq!(TimeUnit::parse_duration("5"), None);
        assert_eq!(TimeUnit::parse_duration("5S"), None);
        assert_eq!(TimeUnit::parse_duration("5 s"), None);
    }

    #[test]
    fn converts_units_to_durations() {
        assert_eq!(TimeUnit::Seconds.duration_of(2), Duration::from_secs(2));
        assert_eq!(TimeUnit::Minutes.to_millis(3), 180_000);
    }
}
