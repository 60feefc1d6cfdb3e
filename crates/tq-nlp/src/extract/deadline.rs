use crate::capability::DateParser;

const ISO_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// First date found in the text, else the whole text parsed as a date.
///
/// Parser failures count as "no deadline".
pub fn extract_deadline(text: &str, parser: &dyn DateParser) -> Option<String> {
    match parser.find_dates(text) {
        Ok(found) => {
            if let Some(first) = found.into_iter().next() {
                tracing::debug!(phrase = %first.phrase, "deadline phrase found");
                return Some(first.at.format(ISO_FORMAT).to_string());
            }
        }
        Err(e) => {
            tracing::debug!(error = %e, "date search failed");
            return None;
        }
    }

    match parser.parse_whole(text) {
        Ok(whole) => whole.map(|at| at.format(ISO_FORMAT).to_string()),
        Err(e) => {
            tracing::debug!(error = %e, "whole-text date parse failed");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock::FixedDateParser;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32) -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(9, 0, 0)
            .unwrap()
    }

    #[test]
    fn first_search_hit_wins() {
        let parser = FixedDateParser::found(vec![
            ("tomorrow", at(2026, 10, 20)),
            ("friday", at(2026, 10, 23)),
        ]);
        assert_eq!(
            extract_deadline("tomorrow or friday", &parser).as_deref(),
            Some("2026-10-20T09:00:00")
        );
    }

    #[test]
    fn whole_text_parse_when_search_is_empty() {
        let parser = FixedDateParser::whole(at(2027, 1, 2));
        assert_eq!(
            extract_deadline("2 Jan 2027", &parser).as_deref(),
            Some("2027-01-02T09:00:00")
        );
    }

    #[test]
    fn parser_errors_mean_no_deadline() {
        let parser = FixedDateParser::failing();
        assert_eq!(extract_deadline("tomorrow", &parser), None);
    }

    #[test]
    fn nothing_found() {
        let parser = FixedDateParser::empty();
        assert_eq!(extract_deadline("no date here", &parser), None);
    }
}
