use crate::model::Duration;

/// Breaks a total-seconds count into calendar components. Each component
/// stays in its natural range, so the sum identity always holds.
pub fn from_seconds(total: u64) -> Duration {
    Duration {
        total,
        seconds: total % 60,
        minutes: total % 3600 / 60,
        hours: total % 86400 / 3600,
        days: total / 86400,
    }
}

/// Parses a colon-delimited length label such as `"1:02:03"`. One to four
/// segments are accepted (seconds up through days). Duration is advisory
/// display data, so anything unparseable collapses to all zeros instead of
/// failing.
pub fn from_label(label: &str) -> Duration {
    let mut segments = Vec::new();
    for piece in label.trim().split(':') {
        match piece.trim().parse::<u64>() {
            Ok(value) => segments.push(value),
            Err(_) => return Duration::default(),
        }
    }
    if segments.is_empty() || segments.len() > 4 {
        return Duration::default();
    }

    const WEIGHTS: [u64; 4] = [1, 60, 3600, 86400];
    let mut total: u64 = 0;
    for (value, weight) in segments.iter().rev().zip(WEIGHTS) {
        // A label whose weighted total cannot fit is as unusable as one that
        // does not parse; it collapses to zero rather than wrapping.
        let Some(next) = value
            .checked_mul(weight)
            .and_then(|addend| total.checked_add(addend))
        else {
            return Duration::default();
        };
        total = next;
    }
    from_seconds(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components_stay_in_natural_bounds() {
        for total in [0, 59, 60, 3599, 3600, 86399, 86400, 123_456_789] {
            let d = from_seconds(total);
            assert!(d.seconds <= 59);
            assert!(d.minutes <= 59);
            assert!(d.hours <= 23);
            assert_eq!(
                d.total,
                d.seconds + 60 * d.minutes + 3600 * d.hours + 86400 * d.days
            );
        }
    }

    #[test]
    fn parses_colon_labels_of_each_depth() {
        assert_eq!(from_label("45").total, 45);
        assert_eq!(from_label("2:05").total, 125);
        assert_eq!(from_label("1:02:03").total, 3723);
        assert_eq!(from_label("1:02:03:04").total, 93784);
    }

    #[test]
    fn label_breakdown_matches_components() {
        let d = from_label("1:02:03");
        assert_eq!((d.hours, d.minutes, d.seconds, d.days), (1, 2, 3, 0));
    }

    #[test]
    fn garbage_collapses_to_zero() {
        for label in ["", "LIVE", "1:xx:03", "1:2:3:4:5", "::"] {
            assert_eq!(from_label(label), Duration::default());
        }
    }

    #[test]
    fn oversized_label_collapses_to_zero_instead_of_wrapping() {
        // Each segment parses as u64; the weighted total does not fit.
        for label in [
            "307445734561825862:00",
            "1:0:18446744073709551615",
            "213503982334602:00:00:00",
        ] {
            assert_eq!(from_label(label), Duration::default());
        }
    }
}
