use chrono::TimeDelta;

pub trait FormatHM {
    fn format_hm(&self) -> String;
}

/// Fractional hours rendered as `HH:MM`.
impl FormatHM for f64 {
    fn format_hm(&self) -> String {
        let total_minutes = (self * 60.0).round() as i64;
        format!("{:02}:{:02}", total_minutes / 60, total_minutes % 60)
    }
}

impl FormatHM for TimeDelta {
    fn format_hm(&self) -> String {
        (self.num_seconds() as f64 / 3600.0).format_hm()
    }
}
