/// Splits one CSV line into trimmed fields.
///
/// A `"` only toggles the quoted region; a doubled `""` is not read back as a
/// literal quote. Commas inside a quoted region belong to the field. The
/// result always has at least one element.
pub fn tokenize_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => {
                fields.push(current.trim().to_owned());
                current.clear();
            }
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_owned());

    fields
}

#[cfg(test)]
mod tests {
    use super::tokenize_line;

    #[test]
    fn splits_plain_fields() {
        assert_eq!(tokenize_line("a,b,c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn comma_inside_quotes_is_not_a_separator() {
        assert_eq!(tokenize_line("\"a,b\",c"), vec!["a,b", "c"]);
    }

    #[test]
    fn empty_line_yields_single_empty_field() {
        assert_eq!(tokenize_line(""), vec![""]);
    }

    #[test]
    fn trims_whitespace_and_carriage_return() {
        assert_eq!(tokenize_line("  a , b\t,c \r"), vec!["a", "b", "c"]);
    }

    #[test]
    fn keeps_empty_fields_in_position() {
        assert_eq!(tokenize_line("a,,c,"), vec!["a", "", "c", ""]);
    }

    #[test]
    fn doubled_quotes_toggle_instead_of_escaping() {
        // `"say ""hi"""` toggles six times and never emits a quote.
        assert_eq!(tokenize_line("\"say \"\"hi\"\"\",x"), vec!["say hi", "x"]);
    }

    #[test]
    fn unterminated_quote_swallows_rest_of_line() {
        assert_eq!(tokenize_line("a,\"b,c"), vec!["a", "b,c"]);
    }
}
