/// Render a distance in meters as kilometers with two decimals.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn kilometers(meters: u64) -> String {
    format!("{:.2}", meters as f64 / 1000.0)
}

/// Render a duration in seconds as whole minutes.
#[must_use]
#[expect(clippy::cast_precision_loss)]
pub fn minutes(seconds: u64) -> String {
    format!("{:.0}", seconds as f64 / 60.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilometers_ok() {
        assert_eq!(kilometers(12345), "12.35");
        assert_eq!(kilometers(0), "0.00");
    }

    #[test]
    fn minutes_ok() {
        assert_eq!(minutes(1800), "30");
        assert_eq!(minutes(89), "1");
    }
}
