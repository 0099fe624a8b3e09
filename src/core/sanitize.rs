// src/core/sanitize.rs

/// Decode the body of a character reference (the part between '&' and ';').
/// Handles the common named entities plus decimal and hex references.
pub fn decode_entity(body: &str) -> Option<char> {
    if let Some(num) = body.strip_prefix('#') {
        let code = match num.strip_prefix('x').or_else(|| num.strip_prefix('X')) {
            Some(hex) => u32::from_str_radix(hex, 16).ok()?,
            None => num.parse::<u32>().ok()?,
        };
        return char::from_u32(code);
    }
    let ch = match body {
        "amp" => '&',
        "lt" => '<',
        "gt" => '>',
        "quot" => '"',
        "apos" => '\'',
        "nbsp" => '\u{a0}',
        "ndash" => '\u{2013}',
        "mdash" => '\u{2014}',
        "hellip" => '\u{2026}',
        _ => return None,
    };
    Some(ch)
}

/// Cell text → the string that gets split into colour tokens:
/// trim the ends, then drop every embedded line break.
pub fn clean_cell(text: &str) -> String {
    text.trim().chars().filter(|&c| c != '\n' && c != '\r').collect()
}

/// Split a cleaned cell on the literal ", " separator, trimming each token.
pub fn split_tokens(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(", ").map(str::trim)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_and_numeric_entities() {
        assert_eq!(decode_entity("amp"), Some('&'));
        assert_eq!(decode_entity("nbsp"), Some('\u{a0}'));
        assert_eq!(decode_entity("#65"), Some('A'));
        assert_eq!(decode_entity("#x41"), Some('A'));
        assert_eq!(decode_entity("bogus"), None);
        assert_eq!(decode_entity("#xZZ"), None);
    }

    #[test]
    fn clean_cell_trims_then_drops_newlines() {
        assert_eq!(clean_cell("  RED,\n BLUE \n"), "RED, BLUE");
        assert_eq!(clean_cell("GREEN,\r\n YELLOW"), "GREEN, YELLOW");
    }

    #[test]
    fn tokens_split_on_comma_space_only() {
        let toks: Vec<&str> = split_tokens("RED, BLUE,GREEN,  WHITE").collect();
        assert_eq!(toks, vec!["RED", "BLUE,GREEN", "WHITE"]);
    }

    #[test]
    fn empty_cell_is_one_empty_token() {
        let cleaned = clean_cell("   ");
        let toks: Vec<&str> = split_tokens(&cleaned).collect();
        assert_eq!(toks, vec![""]);
    }
}
