//! Birthday arithmetic on the 365-day cycle
//!
//! Birthdays are day-of-year indices in [1, 365]. Distances wrap around the
//! year end, so Dec 31 and Jan 1 are one day apart.

use crate::consts::DAYS_IN_YEAR;

/// Day-of-year in [1, 365]
pub type Birthday = u16;

/// Month table used for labels (leap-year February)
const MONTHS: [(&str, u16); 12] = [
    ("Jan", 31),
    ("Feb", 29),
    ("Mar", 31),
    ("Apr", 30),
    ("May", 31),
    ("Jun", 30),
    ("Jul", 31),
    ("Aug", 31),
    ("Sep", 30),
    ("Oct", 31),
    ("Nov", 30),
    ("Dec", 31),
];

/// Cyclic distance between two birthdays, in [0, 182]
#[inline]
pub fn day_distance(a: Birthday, b: Birthday) -> u16 {
    let diff = a.abs_diff(b);
    diff.min(DAYS_IN_YEAR.saturating_sub(diff))
}

/// Display hue in degrees, spread around the color wheel by day
#[inline]
pub fn hue_degrees(birthday: Birthday) -> f32 {
    f32::from(birthday) / f32::from(DAYS_IN_YEAR) * 360.0
}

/// Human-readable date, e.g. "Feb 3"
pub fn date_label(birthday: Birthday) -> String {
    let mut day = birthday;
    for (name, days) in MONTHS {
        if day <= days {
            return format!("{name} {day}");
        }
        day -= days;
    }
    "Dec 31".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_day_distance_wraps() {
        assert_eq!(day_distance(1, 365), 1);
        assert_eq!(day_distance(10, 20), 10);
        assert_eq!(day_distance(1, 183), 182);
        assert_eq!(day_distance(1, 184), 182);
        assert_eq!(day_distance(100, 100), 0);
    }

    #[test]
    fn test_date_label() {
        assert_eq!(date_label(1), "Jan 1");
        assert_eq!(date_label(31), "Jan 31");
        assert_eq!(date_label(32), "Feb 1");
        assert_eq!(date_label(60), "Feb 29");
        assert_eq!(date_label(61), "Mar 1");
        // The 366-day table never reaches Dec 31 for day 365
        assert_eq!(date_label(365), "Dec 30");
    }

    #[test]
    fn test_hue() {
        assert_eq!(hue_degrees(365), 360.0);
        assert!((hue_degrees(73) - 72.0).abs() < 1e-4);
    }

    proptest! {
        #[test]
        fn prop_day_distance_symmetric_and_bounded(a in 1u16..=365, b in 1u16..=365) {
            let d = day_distance(a, b);
            prop_assert_eq!(d, day_distance(b, a));
            prop_assert!(d <= 182);
            prop_assert_eq!(d == 0, a == b);
        }
    }
}
