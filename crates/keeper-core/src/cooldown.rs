use std::time::Duration;

/// Posting policy for the monitored channel: one message per user per
/// cooldown span.
#[derive(Clone, Copy, Debug)]
pub struct CooldownPolicy {
    pub cooldown: Duration,
}

impl CooldownPolicy {
    pub fn from_hours(hours: u64) -> Self {
        Self {
            cooldown: Duration::from_secs(hours.saturating_mul(60 * 60)),
        }
    }
}

/// Verdict on a single message given the time elapsed since the author's
/// previous one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CooldownDecision {
    Allowed,
    Blocked { remaining: Duration },
}

/// Decide whether a message posted `elapsed` after the author's previous
/// message violates the cooldown.
///
/// Posting exactly at the boundary is allowed; `remaining` is strictly
/// positive whenever the decision is `Blocked`.
pub fn evaluate(elapsed: Duration, cooldown: Duration) -> CooldownDecision {
    if elapsed >= cooldown {
        CooldownDecision::Allowed
    } else {
        CooldownDecision::Blocked {
            remaining: cooldown - elapsed,
        }
    }
}

/// Render a wait duration the way the bot quotes it to users.
///
/// Spans of an hour or more show at most one decimal ("1.5 hours",
/// "2 hours"); shorter spans show whole minutes or seconds.
pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();

    let hours = secs / 3600.0;
    if hours >= 1.0 {
        let rendered = format!("{hours:.1}");
        let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
        return format!("{rendered} hours");
    }

    let minutes = secs / 60.0;
    if minutes >= 1.0 {
        return format!("{minutes:.0} minutes");
    }

    format!("{secs:.0} seconds")
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOUR: Duration = Duration::from_secs(60 * 60);

    #[test]
    fn boundary_elapsed_is_allowed() {
        assert_eq!(evaluate(HOUR * 6, HOUR * 6), CooldownDecision::Allowed);
    }

    #[test]
    fn late_message_is_allowed() {
        let elapsed = HOUR * 6 + Duration::from_secs(1);
        assert_eq!(evaluate(elapsed, HOUR * 6), CooldownDecision::Allowed);
    }

    #[test]
    fn early_message_is_blocked_with_positive_remainder() {
        let decision = evaluate(HOUR * 5, HOUR * 6);
        assert_eq!(decision, CooldownDecision::Blocked { remaining: HOUR });
    }

    #[test]
    fn zero_cooldown_never_blocks() {
        assert_eq!(evaluate(Duration::ZERO, Duration::ZERO), CooldownDecision::Allowed);
    }

    #[test]
    fn formats_fractional_hours_with_one_decimal() {
        assert_eq!(format_duration(Duration::from_secs(90 * 60)), "1.5 hours");
        assert_eq!(format_duration(Duration::from_secs(80 * 60)), "1.3 hours");
    }

    #[test]
    fn formats_whole_hours_without_decimal() {
        assert_eq!(format_duration(Duration::from_secs(120 * 60)), "2 hours");
        assert_eq!(format_duration(Duration::from_secs(60 * 60)), "1 hours");
    }

    #[test]
    fn formats_sub_hour_spans_as_minutes() {
        assert_eq!(format_duration(Duration::from_secs(45 * 60)), "45 minutes");
    }

    #[test]
    fn formats_sub_minute_spans_as_seconds() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30 seconds");
        assert_eq!(format_duration(Duration::ZERO), "0 seconds");
    }
}
