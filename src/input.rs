// Parsing of user-typed number lists

/// Split on commas and whitespace, keeping every token that parses as an
/// integer. Anything else is dropped without error.
pub fn parse_numbers(text: &str) -> Vec<i64> {
    text.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .filter_map(|token| token.parse::<i64>().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drops_non_numeric_tokens() {
        assert_eq!(parse_numbers("5, x, 3 ,, -2 4.5 7"), vec![5, 3, -2, 7]);
    }

    #[test]
    fn blank_input_is_empty() {
        assert!(parse_numbers("  , ").is_empty());
    }
}
