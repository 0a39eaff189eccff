/// Shortest round-trip decimal: `200`, `207.5`, `99.5`. Never prints a
/// trailing `.0` and never prints `-0`.
pub fn format_value(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}
