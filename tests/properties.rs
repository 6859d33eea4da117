//! Property tests for csvgrid

use csvgrid::{parse, parse_with};
use proptest::prelude::*;

/// Separators and quotes worth mixing, several of them pattern metacharacters
const SPECIAL_CHARS: &[char] = &[',', '"', '.', '$', '\\', ';', '|', '\t', '\'', '*', '^'];

/// Two distinct characters to use as (separator, quote)
fn separator_and_quote() -> impl Strategy<Value = (char, char)> {
    (
        prop::sample::select(SPECIAL_CHARS),
        prop::sample::select(SPECIAL_CHARS),
    )
        .prop_filter("separator and quote must differ", |(s, q)| s != q)
}

/// Grid of fields that need no quoting under the defaults
fn plain_grid() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(prop::collection::vec("[a-z0-9 ]{0,8}", 1..6), 1..6)
}

/// Grid of fields drawn from an alphabet full of delimiters
fn noisy_grid() -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec("[ab,.$;|'\"\\\\\t\n]{0,6}", 1..5),
        1..5,
    )
}

fn join_plain(grid: &[Vec<String>], separator: char) -> String {
    let separator = separator.to_string();
    grid.iter()
        .map(|row| row.join(separator.as_str()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Quote every field, doubling quotes inside it
fn join_quoted(grid: &[Vec<String>], separator: char, quote: char) -> String {
    let separator = separator.to_string();
    let doubled = format!("{quote}{quote}");
    grid.iter()
        .map(|row| {
            row.iter()
                .map(|field| format!("{quote}{}{quote}", field.replace(quote, &doubled)))
                .collect::<Vec<_>>()
                .join(separator.as_str())
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Swap the default separator and quote for the given ones
fn translate(text: &str, separator: char, quote: char) -> String {
    text.chars()
        .map(|ch| match ch {
            ',' => separator,
            '"' => quote,
            other => other,
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_grid_never_empty(input in any::<String>()) {
        let grid = parse(&input);
        prop_assert!(!grid.is_empty());
        prop_assert!(grid.iter().all(|row| !row.is_empty()));
    }

    #[test]
    fn prop_row_count_follows_unquoted_newlines(input in "[a-z,\n]{0,40}") {
        let grid = parse(&input);
        prop_assert_eq!(grid.len(), input.matches('\n').count() + 1);
    }

    #[test]
    fn prop_plain_grid_round_trips(grid in plain_grid()) {
        prop_assert_eq!(parse(&join_plain(&grid, ',')), grid);
    }

    #[test]
    fn prop_plain_grid_round_trips_with_any_separator(
        grid in plain_grid(),
        (separator, quote) in separator_and_quote()
    ) {
        let input = join_plain(&grid, separator);
        prop_assert_eq!(parse_with(&input, separator, quote), grid);
    }

    #[test]
    fn prop_quoted_grid_round_trips(
        grid in noisy_grid(),
        (separator, quote) in separator_and_quote()
    ) {
        let input = join_quoted(&grid, separator, quote);
        prop_assert_eq!(parse_with(&input, separator, quote), grid);
    }

    #[test]
    fn prop_structure_independent_of_chosen_characters(
        input in "[abc,\"\n]{0,40}",
        (separator, quote) in separator_and_quote()
    ) {
        let expected: Vec<Vec<String>> = parse(&input)
            .iter()
            .map(|row| row.iter().map(|field| translate(field, separator, quote)).collect())
            .collect();
        let translated = translate(&input, separator, quote);
        prop_assert_eq!(parse_with(&translated, separator, quote), expected);
    }
}

#[test]
fn test_random_consonant_grid() {
    // Fixed sample of the same shape: three rows of six five-letter fields
    let grid: Vec<Vec<String>> = [
        ["bcdfg", "hjklm", "npqrs", "tvwxz", "bbbbb", "zxwvt"],
        ["gfdcb", "mlkjh", "srqpn", "zxwvt", "qqqqq", "hhhhh"],
        ["ccccc", "ddddd", "fffff", "ggggg", "jjjjj", "kkkkk"],
    ]
    .iter()
    .map(|row| row.iter().map(|s| s.to_string()).collect())
    .collect();

    assert_eq!(parse(&join_plain(&grid, ',')), grid);
}
