// src/core/vischars.rs
// Visible-text character iterator over an HTML fragment.
// Skips tags (<...>) and comments (<!-- ... -->), decodes character references,
// and passes every other character through untouched (whitespace included).

use super::html::tag_end;
use super::sanitize::decode_entity;

// Longest reference body we try to decode, e.g. "#x1F600" or "hellip".
const MAX_ENTITY_LEN: usize = 10;

pub struct VisChars<'a> {
    s: &'a str,
    b: &'a [u8],
    i: usize,
    n: usize,
}

impl<'a> VisChars<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, b: s.as_bytes(), i: 0, n: s.len() }
    }

    /// '<' starts markup only when followed by a letter, '/', '!' or '?'.
    #[inline]
    fn at_markup(&self) -> bool {
        match self.b.get(self.i + 1) {
            Some(c) => c.is_ascii_alphabetic() || matches!(c, b'/' | b'!' | b'?'),
            None => false,
        }
    }

    /// Called when the current byte is '<'. An unterminated tag or comment
    /// swallows the rest of the input.
    fn skip_markup(&mut self) {
        let rest = &self.s[self.i..];
        let skipped = if rest.starts_with("<!--") {
            rest[4..].find("-->").map(|off| 4 + off + 3)
        } else {
            tag_end(rest, 0)
        };
        self.i = skipped.map_or(self.n, |len| self.i + len);
    }

    /// Called when current byte is '&'. Consumes and decodes a complete
    /// reference; otherwise leaves the '&' to be emitted literally.
    #[inline]
    fn try_entity(&mut self) -> Option<char> {
        let rest = &self.s[self.i + 1..];
        let semi = rest.bytes().take(MAX_ENTITY_LEN + 1).position(|c| c == b';')?;
        let ch = decode_entity(&rest[..semi])?;
        self.i += 1 + semi + 1;
        Some(ch)
    }

    #[inline]
    fn next_char(&mut self) -> Option<char> {
        let ch = self.s[self.i..].chars().next()?;
        self.i += ch.len_utf8();
        Some(ch)
    }
}

impl<'a> Iterator for VisChars<'a> {
    type Item = char;
    fn next(&mut self) -> Option<Self::Item> {
        while self.i < self.n {
            match self.b[self.i] {
                b'<' if self.at_markup() => { self.skip_markup(); continue; }
                b'&' => {
                    if let Some(ch) = self.try_entity() {
                        return Some(ch);
                    }
                    self.i += 1;
                    return Some('&');
                }
                _ => return self.next_char(),
            }
        }
        None
    }
}

/// Visible text of an HTML fragment.
pub fn visible_text(s: &str) -> String {
    VisChars::new(s).collect()
}
