/// Split a signed number of seconds into absolute hours, minutes and seconds.
pub fn hms_parts(secs: i64) -> (u64, u64, u64) {
    let total = secs.unsigned_abs();
    (total / 3600, (total % 3600) / 60, total % 60)
}

/// Format a number of seconds as `hh:mm:ss`. Negative values get a leading
/// `-`; hours are not capped at two digits.
pub fn secs_to_hms(secs: i64) -> String {
    let sign = if secs < 0 { "-" } else { "" };
    let (h, m, s) = hms_parts(secs);
    format!("{sign}{h:02}:{m:02}:{s:02}")
}
