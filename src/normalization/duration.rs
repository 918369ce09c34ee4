/// Unit used when a duration carries no alphabetic component.
pub const DEFAULT_UNIT: &str = "min";

/// Split a raw duration such as "90 min" or "2 Seasons" into its numeric
/// and unit parts: the first maximal digit run and the first maximal ASCII
/// alphabetic run. Missing pieces fall back to 0 and "min".
pub fn split(raw: &str) -> (f64, String) {
    let amount = first_digit_run(raw).unwrap_or(0.0);
    let unit = first_alpha_run(raw).unwrap_or_else(|| DEFAULT_UNIT.to_string());
    (amount, unit)
}

fn first_digit_run(raw: &str) -> Option<f64> {
    let start = raw.find(|c: char| c.is_ascii_digit())?;
    let run: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    run.parse::<f64>().ok()
}

fn first_alpha_run(raw: &str) -> Option<String> {
    let start = raw.find(|c: char| c.is_ascii_alphabetic())?;
    let run: String = raw[start..]
        .chars()
        .take_while(|c| c.is_ascii_alphabetic())
        .collect();
    Some(run)
}
