//! Line decoding: a finite-state tokenizer over one line of text.
//!
//! Decoding walks the line's characters through an explicit state machine.
//! The cursor yields `Option<char>`, with `None` as the synthetic end-of-line
//! marker, so the tokenizer never reads past the end of the line and needs no
//! out-of-band sentinel character.

use super::config::{CsvConfig, NULL_LITERAL};
use super::field::{Field, Record};
use crate::error::DelimitError;

/// Lazy character cursor over the line being decoded.
///
/// `next` returns `None` forever once the line is exhausted; `consumed`
/// counts characters actually read and is used for error positions.
struct Cursor<'a> {
    chars: std::str::Chars<'a>,
    consumed: usize,
}

impl<'a> Cursor<'a> {
    fn new(line: &'a str) -> Self {
        Self {
            chars: line.chars(),
            consumed: 0,
        }
    }

    fn next(&mut self) -> Option<char> {
        let c = self.chars.next();
        if c.is_some() {
            self.consumed += 1;
        }
        c
    }

    fn consumed(&self) -> usize {
        self.consumed
    }
}

/// Tokenizer state. Token buffers travel inside the states, so there is no
/// mutable buffer shared across the whole loop.
enum State {
    /// Ready to start the next field.
    ExpectToken,
    /// Accumulating an unquoted field.
    InUnquotedToken(String),
    /// Accumulating a quoted field; the opening quote has been consumed.
    InQuotedToken(String),
    /// A quote was seen inside a quoted field. `held` is the character that
    /// entered this state (initially the quote itself). A following quote
    /// means `held` was an escape and the field continues; a separator or
    /// end-of-line closes the field; anything else keeps scanning with that
    /// character as the new `held`.
    MaybeEndQuote(String, char),
    /// A field is finished; `true` means end-of-line terminated it.
    TokenComplete(Field, bool),
}

impl CsvConfig {
    /// Decodes a single delimited line into its ordered fields.
    ///
    /// A line is the unit of decoding: embedded newlines are ordinary
    /// characters, and multi-line quoted fields are not supported. Every
    /// line yields at least one field; an empty line yields a single empty
    /// text field (never the null sentinel, regardless of null-mapping).
    ///
    /// The only decode error is an unterminated quoted field. Text after a
    /// closing quote but before the next separator is tolerated: the decoder
    /// keeps scanning, resumes the quoted field when it meets another quote,
    /// and may drop stray characters along the way. This laxity is
    /// deliberate; stricter grammars would reject such input.
    ///
    /// # Example
    ///
    /// ```
    /// use delimit::codec::{CsvConfig, Field};
    ///
    /// let config = CsvConfig::default();
    /// let record = config.decode(r#"a,"b,c",d"#).unwrap();
    /// assert_eq!(
    ///     record,
    ///     vec![Field::text("a"), Field::text("b,c"), Field::text("d")]
    /// );
    /// ```
    pub fn decode(&self, line: &str) -> Result<Record, DelimitError> {
        let mut fields = Record::new();
        let mut cursor = Cursor::new(line);
        let mut state = State::ExpectToken;

        loop {
            state = match state {
                State::ExpectToken => match cursor.next() {
                    Some(c) if c == self.quote() => State::InQuotedToken(String::new()),
                    Some(c) if c != self.separator() => State::InUnquotedToken(String::from(c)),
                    terminator => {
                        State::TokenComplete(Field::Text(String::new()), terminator.is_none())
                    }
                },

                State::InUnquotedToken(mut token) => match cursor.next() {
                    Some(c) if c != self.separator() => {
                        token.push(c);
                        State::InUnquotedToken(token)
                    }
                    terminator => {
                        State::TokenComplete(self.finish_unquoted(token), terminator.is_none())
                    }
                },

                State::InQuotedToken(mut token) => match cursor.next() {
                    None => {
                        return Err(DelimitError::UnterminatedQuote {
                            quote: self.quote(),
                            index: cursor.consumed(),
                        });
                    }
                    Some(c) if c == self.quote() => State::MaybeEndQuote(token, c),
                    Some(c) => {
                        token.push(c);
                        State::InQuotedToken(token)
                    }
                },

                State::MaybeEndQuote(mut token, held) => match cursor.next() {
                    Some(c) if c == self.quote() => {
                        token.push(held);
                        State::InQuotedToken(token)
                    }
                    Some(c) if c != self.separator() => State::MaybeEndQuote(token, c),
                    // Quoted fields complete as text even when the content
                    // equals the NULL literal.
                    terminator => State::TokenComplete(Field::Text(token), terminator.is_none()),
                },

                State::TokenComplete(field, at_end) => {
                    fields.push(field);
                    if at_end {
                        return Ok(fields);
                    }
                    State::ExpectToken
                }
            };
        }
    }

    /// Finishes an unquoted token, applying the null-mapping policy.
    fn finish_unquoted(&self, token: String) -> Field {
        if self.map_nulls() && token == NULL_LITERAL {
            Field::Null
        } else {
            Field::Text(token)
        }
    }
}
