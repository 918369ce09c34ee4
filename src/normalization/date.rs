use chrono::NaiveDate;

// Source exports write "September 25, 2021"; ISO and US slash forms show up
// in hand-edited files.
const FORMATS: [&str; 3] = ["%B %d, %Y", "%Y-%m-%d", "%m/%d/%Y"];

/// Parse a catalog `date_added` value. Unparseable input is data, not an
/// error: the caller stores None and moves on.
pub fn parse_added(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_long_month_form() {
        assert_eq!(
            parse_added("September 25, 2021"),
            NaiveDate::from_ymd_opt(2021, 9, 25)
        );
    }

    #[test]
    fn tolerates_leading_whitespace() {
        // The real dataset carries a stray leading space on many dates.
        assert_eq!(
            parse_added(" August 4, 2017"),
            NaiveDate::from_ymd_opt(2017, 8, 4)
        );
    }

    #[test]
    fn parses_iso_and_slash_forms() {
        assert_eq!(
            parse_added("2021-09-25"),
            NaiveDate::from_ymd_opt(2021, 9, 25)
        );
        assert_eq!(
            parse_added("9/25/2021"),
            NaiveDate::from_ymd_opt(2021, 9, 25)
        );
    }

    #[test]
    fn garbage_becomes_none() {
        assert_eq!(parse_added("not a date"), None);
        assert_eq!(parse_added("2021-13-40"), None);
    }
}
