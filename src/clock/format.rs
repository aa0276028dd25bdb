/// Formats `ticks * millis_per_tick` milliseconds as `days:hh:mm:ss:ms`.
///
/// Hours, minutes and seconds are zero-padded to two digits and days are
/// not padded. The last field is the scaled total modulo 100, also
/// padded to two digits; it is not the sub-second remainder.
#[must_use]
pub fn format_clock(ticks: u64, millis_per_tick: u64) -> String {
    let total = u128::from(ticks) * u128::from(millis_per_tick);
    let millis = total % 100;
    let seconds = total / 1000;

    let days = seconds / (3600 * 24);
    let hours = (seconds / 3600) % 24;
    let minutes = (seconds / 60) % 60;
    let secs = seconds % 60;

    format!("{days}:{hours:02}:{minutes:02}:{secs:02}:{millis:02}")
}
