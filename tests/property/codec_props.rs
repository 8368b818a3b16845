//! Property-based tests for the delimited-text codec
//!
//! The central property is the round-trip contract: decoding an encoded
//! record restores it exactly, across separators, quotes, and null-mapping
//! policies, including field contents full of characters the encoder has to
//! quote and escape.

use proptest::prelude::*;

use delimit::codec::{CsvConfig, Field, Record};

/// Strategy for text that needs no quoting under the default config.
fn plain_text_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 _.-]{0,20}".prop_map(|s| s)
}

/// Strategy for text exercising the quoting and escaping paths.
fn special_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        // Embedded separators
        "[a-z0-9]{0,6},[a-z0-9]{0,6}".prop_map(|s| s),
        // Embedded quotes
        "[a-z0-9]{0,6}\"[a-z0-9]{0,6}".prop_map(|s| s),
        // Quotes at the edges
        Just("\"".to_string()),
        Just("\"\"".to_string()),
        Just("a\"".to_string()),
        Just("\"a".to_string()),
        // The reserved literal and near misses
        Just("NULL".to_string()),
        Just("null".to_string()),
        Just("NULLS".to_string()),
        // Embedded newlines are ordinary characters within a line value
        Just("line1\nline2".to_string()),
        // Unicode
        Just("héllo wörld 日本".to_string()),
        Just(String::new()),
    ]
}

/// Strategy for arbitrary text fields.
fn any_text_strategy() -> impl Strategy<Value = String> {
    prop_oneof![plain_text_strategy(), special_text_strategy()]
}

/// Strategy for fields including the null sentinel.
fn field_strategy() -> impl Strategy<Value = Field> {
    prop_oneof![
        3 => any_text_strategy().prop_map(Field::Text),
        1 => Just(Field::Null),
    ]
}

/// Strategy for non-empty text-only records.
///
/// Round-trip properties use non-empty records: the empty record encodes to
/// the empty string, which decodes as a single empty field by design.
fn text_record_strategy() -> impl Strategy<Value = Record> {
    prop::collection::vec(any_text_strategy().prop_map(Field::Text), 1..8)
}

/// Strategy for non-empty records that may contain nulls.
fn record_strategy() -> impl Strategy<Value = Record> {
    prop::collection::vec(field_strategy(), 1..8)
}

/// Strategy for separator/quote pairs, always distinct.
fn config_chars_strategy() -> impl Strategy<Value = (char, char)> {
    (
        prop::sample::select(vec![',', ';', '|', '\t', ':']),
        prop::sample::select(vec!['"', '\'', '`']),
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn prop_round_trip_text_records(record in text_record_strategy()) {
        let config = CsvConfig::default();
        let line = config.encode(&record);
        let decoded = config.decode(&line)
            .expect("encoded lines always decode");
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn prop_round_trip_with_null_mapping(record in record_strategy()) {
        let config = CsvConfig::new(',', '"', true).unwrap();
        let line = config.encode(&record);
        let decoded = config.decode(&line)
            .expect("encoded lines always decode");
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn prop_round_trip_across_configs(
        record in text_record_strategy(),
        (separator, quote) in config_chars_strategy(),
        map_nulls in any::<bool>(),
    ) {
        let config = CsvConfig::new(separator, quote, map_nulls).unwrap();
        let line = config.encode(&record);
        let decoded = config.decode(&line)
            .expect("encoded lines always decode");
        prop_assert_eq!(decoded, record);
    }

    #[test]
    fn prop_plain_text_encodes_verbatim(s in "[a-zA-Z0-9 _.-]{1,20}") {
        let config = CsvConfig::default();
        let record = vec![Field::text(s.clone())];
        // No separator, no quote, no null-mapping: nothing to escape.
        prop_assert_eq!(config.encode(&record), s);
    }

    #[test]
    fn prop_field_count_matches_separator_count(
        tokens in prop::collection::vec("[a-z0-9]{0,5}", 1..10)
    ) {
        let config = CsvConfig::default();
        let line = tokens.join(",");
        let decoded = config.decode(&line).unwrap();
        prop_assert_eq!(decoded.len(), tokens.len());
        for (field, token) in decoded.iter().zip(&tokens) {
            prop_assert_eq!(field.as_text(), Some(token.as_str()));
        }
    }

    #[test]
    fn prop_decode_arbitrary_input_never_panics(line in ".{0,60}") {
        let config = CsvConfig::default();
        // The only decode error is an unterminated quote.
        match config.decode(&line) {
            Ok(record) => prop_assert!(!record.is_empty()),
            Err(e) => {
                let is_unterminated_quote =
                    matches!(e, delimit::DelimitError::UnterminatedQuote { .. });
                prop_assert!(is_unterminated_quote);
            }
        }
    }

    #[test]
    fn prop_null_sentinel_survives_only_with_mapping(text in "[a-z]{1,8}") {
        let mapped = CsvConfig::new(',', '"', true).unwrap();
        let record = vec![Field::Null, Field::text(text)];
        let line = mapped.encode(&record);
        prop_assert_eq!(mapped.decode(&line).unwrap(), record);

        // Without mapping the sentinel collapses to empty text.
        let unmapped = CsvConfig::default();
        let line = unmapped.encode(&[Field::Null]);
        prop_assert_eq!(line.clone(), "");
        prop_assert_eq!(
            unmapped.decode(&line).unwrap(),
            vec![Field::text("")]
        );
    }

    #[test]
    fn prop_trailing_separator_adds_one_field(tokens in prop::collection::vec("[a-z]{1,5}", 1..6)) {
        let config = CsvConfig::default();
        let line = format!("{},", tokens.join(","));
        let decoded = config.decode(&line).unwrap();
        prop_assert_eq!(decoded.len(), tokens.len() + 1);
        prop_assert_eq!(decoded.last().unwrap().as_text(), Some(""));
    }
}
