use super::ValidationError;

/// Splits text into trimmed, non-empty lines, keeping input order.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Normalizes multi-line input for smart search.
///
/// Blank input yields no lines. Otherwise the raw text, untrimmed, must not
/// exceed `max_chars`; the check runs before splitting.
pub fn lines(text: &str, max_chars: usize) -> Result<Vec<String>, ValidationError> {
    if text.trim().is_empty() {
        return Ok(Vec::new());
    }
    check_length(text, max_chars)?;
    Ok(split_lines(text))
}

/// Normalizes a direct-search query to a single trimmed string, `None` when blank.
pub fn query(text: &str, max_chars: usize) -> Result<Option<&str>, ValidationError> {
    let query = text.trim();
    if query.is_empty() {
        return Ok(None);
    }
    check_length(text, max_chars)?;
    Ok(Some(query))
}

/// Prepares an organisation name for the entities index: quotation marks
/// are dropped and hyphens become spaces.
pub fn clean_entity_name(line: &str) -> String {
    line.chars()
        .filter(|&c| !is_quotation_mark(c))
        .map(|c| if c == '-' { ' ' } else { c })
        .collect()
}

fn check_length(text: &str, max_chars: usize) -> Result<(), ValidationError> {
    if text.chars().count() > max_chars {
        return Err(ValidationError::QueryTooLong);
    }
    Ok(())
}

/// Unicode `Quotation_Mark` property.
fn is_quotation_mark(c: char) -> bool {
    matches!(c,
        '"' | '\'' |
        '\u{00AB}' | '\u{00BB}' |
        '\u{2018}'..='\u{201F}' |
        '\u{2039}' | '\u{203A}' |
        '\u{2E42}' |
        '\u{300C}'..='\u{300F}' |
        '\u{301D}'..='\u{301F}' |
        '\u{FE41}'..='\u{FE44}' |
        '\u{FF02}' | '\u{FF07}' |
        '\u{FF62}' | '\u{FF63}'
    )
}
