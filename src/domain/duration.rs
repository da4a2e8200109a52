use crate::utils::error::DecodeError;
use chrono::TimeDelta;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

static ISO_DURATION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(-)?P(?:(\d+)Y)?(?:(\d+)M)?(?:(\d+)W)?(?:(\d+)D)?(?:T(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)(?:\.(\d{1,9}))?S)?)?$",
    )
    .expect("ISO 8601 duration pattern is valid")
});

/// ISO 8601 期間，例如 `P1DT2H`、`PT30M`、`-PT0.5S`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct IsoDuration {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub nanos: u32,
}

impl IsoDuration {
    pub fn from_hms(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
            ..Self::default()
        }
    }

    pub fn from_days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
            && self.nanos == 0
    }

    /// 換算成固定長度的 `TimeDelta`；含年或月時長度不固定，回傳 None
    pub fn to_time_delta(&self) -> Option<TimeDelta> {
        if self.years != 0 || self.months != 0 {
            return None;
        }
        let days = i64::from(self.weeks) * 7 + i64::from(self.days);
        let delta = TimeDelta::try_days(days)?
            .checked_add(&TimeDelta::try_hours(i64::from(self.hours))?)?
            .checked_add(&TimeDelta::try_minutes(i64::from(self.minutes))?)?
            .checked_add(&TimeDelta::try_seconds(i64::from(self.seconds))?)?
            .checked_add(&TimeDelta::nanoseconds(i64::from(self.nanos)))?;
        Some(if self.negative { -delta } else { delta })
    }

    pub fn from_time_delta(delta: TimeDelta) -> Option<Self> {
        let negative = delta < TimeDelta::zero();
        let delta = delta.abs();
        let total_seconds = delta.num_seconds();
        let nanos = (delta - TimeDelta::try_seconds(total_seconds)?).num_nanoseconds()?;
        Some(Self {
            negative,
            days: u32::try_from(total_seconds / 86_400).ok()?,
            hours: (total_seconds % 86_400 / 3_600) as u32,
            minutes: (total_seconds % 3_600 / 60) as u32,
            seconds: (total_seconds % 60) as u32,
            nanos: nanos as u32,
            ..Self::default()
        })
    }
}

impl FromStr for IsoDuration {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| DecodeError::Malformed {
            kind: "duration",
            value: s.to_string(),
            reason: reason.to_string(),
        };

        let caps = ISO_DURATION
            .captures(s)
            .ok_or_else(|| malformed("not an ISO 8601 duration"))?;

        // "P" 或 "PT" 沒有任何元件
        if (2..=8).all(|i| caps.get(i).is_none()) {
            return Err(malformed("duration has no components"));
        }
        if s.ends_with('T') {
            return Err(malformed("time designator without components"));
        }

        let number = |i: usize| -> Result<u32, DecodeError> {
            match caps.get(i) {
                Some(m) => m.as_str().parse::<u32>().map_err(|_| DecodeError::OutOfRange {
                    kind: "duration component",
                    value: m.as_str().to_string(),
                }),
                None => Ok(0),
            }
        };

        let nanos = match caps.get(9) {
            Some(m) => {
                let digits = m.as_str();
                format!("{:0<9}", digits).parse::<u32>().map_err(|e| malformed(&e.to_string()))?
            }
            None => 0,
        };

        let mut duration = Self {
            negative: false,
            years: number(2)?,
            months: number(3)?,
            weeks: number(4)?,
            days: number(5)?,
            hours: number(6)?,
            minutes: number(7)?,
            seconds: number(8)?,
            nanos,
        };
        // 零長度沒有正負號
        duration.negative = caps.get(1).is_some() && !duration.is_zero();
        Ok(duration)
    }
}

impl fmt::Display for IsoDuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return f.write_str("PT0S");
        }
        if self.negative {
            f.write_str("-")?;
        }
        f.write_str("P")?;
        for (value, unit) in [
            (self.years, 'Y'),
            (self.months, 'M'),
            (self.weeks, 'W'),
            (self.days, 'D'),
        ] {
            if value > 0 {
                write!(f, "{}{}", value, unit)?;
            }
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 || self.nanos > 0 {
            f.write_str("T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 || self.nanos > 0 {
                write!(f, "{}", self.seconds)?;
                if self.nanos > 0 {
                    let fraction = format!("{:09}", self.nanos);
                    write!(f, ".{}", fraction.trim_end_matches('0'))?;
                }
                f.write_str("S")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_format() {
        for text in ["PT30M", "P1DT2H", "P1Y2M3W4DT5H6M7S", "PT0.5S", "-PT12H", "P90D"] {
            let duration: IsoDuration = text.parse().unwrap();
            assert_eq!(duration.to_string(), text);
        }
    }

    #[test]
    fn test_zero_duration_is_canonical() {
        let duration: IsoDuration = "P0D".parse().unwrap();
        assert!(duration.is_zero());
        assert_eq!(duration.to_string(), "PT0S");

        for text in ["-PT0S", "-P0D"] {
            let negative_zero: IsoDuration = text.parse().unwrap();
            assert_eq!(negative_zero, IsoDuration::default());
            assert_eq!(negative_zero.to_string(), "PT0S");
            assert_eq!(negative_zero.to_string().parse::<IsoDuration>().unwrap(), negative_zero);
        }
    }

    #[test]
    fn test_rejects_malformed() {
        for text in ["", "P", "PT", "1H", "PT1.H", "P1DT", "PT1.5M"] {
            assert!(text.parse::<IsoDuration>().is_err(), "{} should not parse", text);
        }
    }

    #[test]
    fn test_time_delta_conversion() {
        let duration: IsoDuration = "P1WT1H".parse().unwrap();
        assert_eq!(duration.to_time_delta(), TimeDelta::try_hours(7 * 24 + 1));

        let with_months: IsoDuration = "P1M".parse().unwrap();
        assert_eq!(with_months.to_time_delta(), None);

        let back = IsoDuration::from_time_delta(TimeDelta::try_minutes(90).unwrap()).unwrap();
        assert_eq!(back.to_string(), "PT1H30M");
    }
}
