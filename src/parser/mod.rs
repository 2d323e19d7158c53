pub mod stop_words;

use serde::{Serialize, Deserialize};

pub use self::stop_words::StopWords;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextToken {
    pub text: String,
    pub start_byte: usize,   // Start byte position in the tokenized text
    pub end_byte: usize,     // End byte position (exclusive)
    pub line_number: usize,  // 1-based line where the token appears
}

/// Split `text` into whitespace-delimited tokens with their byte spans.
pub fn tokenize(text: &str) -> Vec<TextToken> {
    let mut tokens = Vec::new();
    let mut current_line = 1;
    let mut word_start: Option<(usize, usize)> = None;  // (start_byte, line)

    for (pos, c) in text.char_indices() {
        if c.is_whitespace() {
            if let Some((start, line)) = word_start.take() {
                tokens.push(TextToken {
                    text: text[start..pos].to_string(),
                    start_byte: start,
                    end_byte: pos,
                    line_number: line,
                });
            }
            if c == '\n' {
                current_line += 1;
            }
        } else if word_start.is_none() {
            word_start = Some((pos, current_line));
        }
    }

    if let Some((start, line)) = word_start {
        tokens.push(TextToken {
            text: text[start..].to_string(),
            start_byte: start,
            end_byte: text.len(),
            line_number: line,
        });
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokens_carry_byte_spans_and_lines() {
        let text = "في  فصل\nالشتاء";
        let tokens = tokenize(text);
        assert_eq!(tokens.len(), 3);
        for token in &tokens {
            assert_eq!(&text[token.start_byte..token.end_byte], token.text);
        }
        assert_eq!(tokens[0].text, "في");
        assert_eq!(tokens[1].line_number, 1);
        assert_eq!(tokens[2].text, "الشتاء");
        assert_eq!(tokens[2].line_number, 2);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(tokenize("").is_empty());
        assert!(tokenize(" \n\t ").is_empty());
    }
}
