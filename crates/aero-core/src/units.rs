//! Unit conversion for external catalog data.

/// Meters per foot.
const FT_TO_M: f64 = 0.3048;

/// Convert a feet value from an external catalog to meters, rounded to
/// 2 decimal places.
///
/// All request-boundary altitudes are meters; the airport/navaid catalog
/// reports feet, so this conversion is mandatory before any catalog value
/// enters a surface-definition request.
pub fn feet_to_meters(feet: f64) -> f64 {
    (feet * FT_TO_M * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_feet_to_meters_exact_two_decimals() {
        assert_eq!(feet_to_meters(100.0), 30.48);
        assert_eq!(feet_to_meters(0.0), 0.0);
        assert_eq!(feet_to_meters(1.0), 0.3);
        // Heathrow ARP, 83 ft
        assert_eq!(feet_to_meters(83.0), 25.3);
    }

    #[test]
    fn test_feet_to_meters_rounds_not_truncates() {
        // 75 ft = 22.86 m exactly; 76 ft = 23.1648 -> 23.16
        assert_eq!(feet_to_meters(75.0), 22.86);
        assert_eq!(feet_to_meters(76.0), 23.16);
    }
}
