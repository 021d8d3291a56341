const UNITS: [&str; 6] = ["K", "M", "G", "T", "P", "E"];

/// Render a byte count for the size column.
///
/// Human-readable sizes are base 1024 with one decimal (`1536` -> `1.5K`,
/// `1024` -> `1K`). Counts below 1024 are printed as-is either way.
pub fn format_size(bytes: u64, human_readable: bool) -> String {
    if !human_readable || bytes < 1024 {
        return bytes.to_string();
    }

    let mut value = bytes as f64 / 1024.0;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let mut rounded = (value * 10.0).round() / 10.0;
    // 1023.96K rounds to 1024.0K; show it as 1M instead.
    if rounded >= 1024.0 && unit < UNITS.len() - 1 {
        rounded = 1.0;
        unit += 1;
    }

    if rounded.fract() == 0.0 {
        format!("{}{}", rounded as u64, UNITS[unit])
    } else {
        format!("{:.1}{}", rounded, UNITS[unit])
    }
}
