/// Recommended hours of rest before loading the same body part again.
/// Policy data, tuned by hand: larger muscle groups recover slower
/// than small and stabilizer groups. Tune the table, not the
/// classifier.
const REST_WINDOWS: &[(&str, f64)] = &[
    ("quads", 72.0),
    ("hamstrings", 72.0),
    ("glutes", 72.0),
    ("back", 72.0),
    ("lower_back", 72.0),
    ("lats", 60.0),
    ("chest", 60.0),
    ("shoulders", 48.0),
    ("traps", 48.0),
    ("triceps", 36.0),
    ("biceps", 36.0),
    ("forearms", 24.0),
    ("calves", 24.0),
    ("abs", 24.0),
    ("core", 24.0),
    ("neck", 24.0),
    ("full_body", 48.0),
];

/// Fallback for body parts missing from the table, so the lookup is
/// total and unmapped names are never an error.
pub const DEFAULT_REST_WINDOW_HOURS: f64 = 48.0;

pub fn rest_window_hours(key: &str) -> f64 {
    REST_WINDOWS
        .iter()
        .find(|(k, _)| *k == key)
        .map_or(DEFAULT_REST_WINDOW_HOURS, |(_, hours)| *hours)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_parts_use_table_values() {
        assert_eq!(rest_window_hours("quads"), 72.0);
        assert_eq!(rest_window_hours("chest"), 60.0);
        assert_eq!(rest_window_hours("calves"), 24.0);
    }

    #[test]
    fn unknown_part_falls_back_to_default() {
        assert_eq!(rest_window_hours("rear_delts"), DEFAULT_REST_WINDOW_HOURS);
        assert_eq!(rest_window_hours(""), DEFAULT_REST_WINDOW_HOURS);
    }

    #[test]
    fn large_groups_rest_longer_than_small_ones() {
        assert!(rest_window_hours("quads") > rest_window_hours("biceps"));
        assert!(rest_window_hours("back") > rest_window_hours("forearms"));
    }
}
