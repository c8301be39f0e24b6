//! Permissive text tokenizer
//!
//! Tokens are separated by ASCII whitespace and commas. Blank lines carry no
//! tokens and never end a parse early.

use crate::{Error, Result, ScalarToken, Value};
use std::io::BufRead;

fn is_separator(c: char) -> bool {
    c.is_ascii_whitespace() || c == ','
}

/// Non-empty fields of one line
pub fn fields(line: &str) -> impl Iterator<Item = &str> {
    line.split(is_separator).filter(|field| !field.is_empty())
}

/// Parse one token, reporting `line` when it is not a number
pub fn parse_value(token: &str, line: usize) -> Result<Value> {
    ScalarToken::classify(Some(token))
        .value()
        .ok_or_else(|| Error::InvalidToken {
            line,
            token: token.to_owned(),
        })
}

/// Flat stream of scalar tokens spanning line boundaries
pub struct TokenStream<R> {
    reader: R,
    line: String,
    pos: usize,
    line_number: usize,
}

impl<R: BufRead> TokenStream<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            line: String::new(),
            pos: 0,
            line_number: 0,
        }
    }

    /// 1-based number of the line the last token came from
    pub fn line_number(&self) -> usize {
        self.line_number
    }

    /// Byte range of the next token on the current line
    fn find_token(&self) -> Option<(usize, usize)> {
        let rest = &self.line[self.pos..];
        let start = self.pos + rest.find(|c: char| !is_separator(c))?;
        let end = self.line[start..]
            .find(is_separator)
            .map_or(self.line.len(), |len| start + len);
        Some((start, end))
    }

    /// Next raw token, `None` once the input is exhausted
    pub fn next_token(&mut self) -> Result<Option<&str>> {
        loop {
            if let Some((start, end)) = self.find_token() {
                self.pos = end;
                return Ok(Some(&self.line[start..end]));
            }

            self.line.clear();
            self.pos = 0;
            if self.reader.read_line(&mut self.line)? == 0 {
                return Ok(None);
            }
            self.line_number += 1;
        }
    }

    /// Next scalar, `None` at a clean end of input
    pub fn next_value(&mut self) -> Result<Option<Value>> {
        let token = self.next_token()?;
        match ScalarToken::classify(token) {
            ScalarToken::Finite(value) | ScalarToken::NonFinite(value) => Ok(Some(value)),
            ScalarToken::EndOfInput => Ok(None),
            ScalarToken::Invalid => {
                let token = token.unwrap_or_default().to_owned();
                Err(Error::InvalidToken {
                    line: self.line_number,
                    token,
                })
            }
        }
    }

    /// Drain every remaining scalar
    pub fn collect_values(mut self) -> Result<Vec<Value>> {
        let mut values = Vec::new();
        while let Some(value) = self.next_value()? {
            values.push(value);
        }
        Ok(values)
    }
}

/// Iterator over non-blank lines with their 1-based line numbers
pub struct ContentLines<R> {
    lines: std::io::Lines<R>,
    line_number: usize,
}

/// Non-blank lines of `reader`
pub fn content_lines<R: BufRead>(reader: R) -> ContentLines<R> {
    ContentLines {
        lines: reader.lines(),
        line_number: 0,
    }
}

impl<R: BufRead> Iterator for ContentLines<R> {
    type Item = Result<(usize, String)>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            self.line_number += 1;
            if fields(&line).next().is_some() {
                return Some(Ok((self.line_number, line)));
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokens_accept_non_finite() {
        let values = TokenStream::new("1.0 2.0 inf 3.5".as_bytes())
            .collect_values()
            .unwrap();
        assert_eq!(values, vec![1.0, 2.0, Value::INFINITY, 3.5]);
    }

    #[test]
    fn test_tokens_reject_garbage() {
        let err = TokenStream::new("1.0 2.0 xyz 3.5".as_bytes())
            .collect_values()
            .unwrap_err();
        match err {
            Error::InvalidToken { line, token } => {
                assert_eq!(line, 1);
                assert_eq!(token, "xyz");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_tokens_span_lines_and_commas() {
        let input = "1,2\n\n   \n3 ,4\r\n5";
        let mut stream = TokenStream::new(input.as_bytes());
        let mut values = Vec::new();
        while let Some(value) = stream.next_value().unwrap() {
            values.push(value);
        }
        assert_eq!(values, vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(stream.line_number(), 5);
        assert_eq!(stream.next_value().unwrap(), None);
    }

    #[test]
    fn test_invalid_token_reports_line() {
        let err = TokenStream::new("1\n2\n\nnope".as_bytes())
            .collect_values()
            .unwrap_err();
        assert!(matches!(err, Error::InvalidToken { line: 4, .. }));
    }

    #[test]
    fn test_content_lines_skip_blank() {
        let lines: Vec<_> = content_lines("a b\n\n \t\nc\n".as_bytes())
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(lines, vec![(1, "a b".to_owned()), (4, "c".to_owned())]);
        assert_eq!(fields(" 1, 2 ,,3 ").collect::<Vec<_>>(), vec!["1", "2", "3"]);
    }

    #[test]
    fn test_parse_value() {
        assert_eq!(parse_value("-inf", 3).unwrap(), Value::NEG_INFINITY);
        assert!(matches!(
            parse_value("abc", 3),
            Err(Error::InvalidToken { line: 3, .. })
        ));
    }
}
