// src/core/html.rs
// Tolerant, single-pass tag scanning over raw HTML text.
// Tag names match case-insensitively; attribute values may contain '>' when quoted.
// Comments, declarations and the bodies of <script>/<style> never yield tags.

/// Elements whose content is raw text: nothing inside them is markup.
const RAW_TEXT: [&str; 2] = ["script", "style"];

#[inline]
fn is_tag_boundary(b: Option<&u8>) -> bool {
    matches!(b, None | Some(b' ' | b'\t' | b'\r' | b'\n' | b'\x0c' | b'>' | b'/'))
}

/// Byte offset of the next `</name` closing tag at or after `from`.
/// `lc` must be ASCII-lowercased; `name` must be lowercase.
pub fn find_close_tag(lc: &str, name: &str, from: usize) -> Option<usize> {
    let pat = join!("</", name);
    let bytes = lc.as_bytes();
    let mut pos = from;
    loop {
        let at = lc.get(pos..)?.find(&pat)? + pos;
        if is_tag_boundary(bytes.get(at + pat.len())) {
            return Some(at);
        }
        pos = at + pat.len();
    }
}

/// Given the offset of a '<', return the offset just past its closing '>'.
/// Quoted attribute values are skipped whole.
pub fn tag_end(s: &str, start: usize) -> Option<usize> {
    let b = s.as_bytes();
    let mut i = start + 1;
    let mut quote: Option<u8> = None;
    while i < b.len() {
        match (quote, b[i]) {
            (None, q @ (b'"' | b'\'')) => quote = Some(q),
            (Some(q), c) if c == q => quote = None,
            (None, b'>') => return Some(i + 1),
            _ => {}
        }
        i += 1;
    }
    None
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TagKind {
    Open,
    Close,
}

/// One start or end tag. `start..end` covers the whole `<...>`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Tag<'a> {
    pub kind: TagKind,
    pub name: &'a str,
    pub start: usize,
    pub end: usize,
}

impl Tag<'_> {
    pub fn is_open(&self, name: &str) -> bool {
        self.kind == TagKind::Open && self.name.eq_ignore_ascii_case(name)
    }

    pub fn is_close(&self, name: &str) -> bool {
        self.kind == TagKind::Close && self.name.eq_ignore_ascii_case(name)
    }
}

/// Iterator over the tags of a document, in order. The cursor only moves
/// forward, so a full walk is linear in the document length.
pub struct Tags<'a> {
    s: &'a str,
    lc: String,
    pos: usize,
    /// Set after a raw-text start tag: where its content ends.
    raw_until: Option<usize>,
}

impl<'a> Tags<'a> {
    pub fn new(s: &'a str) -> Self {
        Self { s, lc: s.to_ascii_lowercase(), pos: 0, raw_until: None }
    }

    fn name_at(&self, from: usize) -> &'a str {
        let len = self.s.as_bytes()[from..]
            .iter()
            .take_while(|b| b.is_ascii_alphanumeric())
            .count();
        &self.s[from..from + len]
    }
}

impl<'a> Iterator for Tags<'a> {
    type Item = Tag<'a>;

    fn next(&mut self) -> Option<Tag<'a>> {
        if let Some(end) = self.raw_until.take() {
            self.pos = end;
        }
        let b = self.s.as_bytes();
        loop {
            let at = self.s.get(self.pos..)?.find('<')? + self.pos;

            if self.s[at..].starts_with("<!--") {
                self.pos = match self.s[at + 4..].find("-->") {
                    Some(off) => at + 4 + off + 3,
                    None => self.s.len(),
                };
                continue;
            }

            let (kind, name_from) = match b.get(at + 1) {
                Some(b'/') => (TagKind::Close, at + 2),
                Some(c) if c.is_ascii_alphabetic() => (TagKind::Open, at + 1),
                Some(b'!' | b'?') => {
                    self.pos = tag_end(self.s, at).unwrap_or(self.s.len());
                    continue;
                }
                // a lone '<' is text
                _ => {
                    self.pos = at + 1;
                    continue;
                }
            };

            let name = self.name_at(name_from);
            if name.is_empty() {
                self.pos = at + 1;
                continue;
            }
            let end = tag_end(self.s, at)?;
            self.pos = end;

            if kind == TagKind::Open {
                if let Some(raw) = RAW_TEXT.iter().find(|r| name.eq_ignore_ascii_case(r)) {
                    self.raw_until = Some(find_close_tag(&self.lc, raw, end).unwrap_or(self.s.len()));
                }
            }
            return Some(Tag { kind, name, start: at, end });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(s: &str) -> Vec<String> {
        Tags::new(s)
            .map(|t| match t.kind {
                TagKind::Open => t.name.to_ascii_lowercase(),
                TagKind::Close => join!("/", &t.name.to_ascii_lowercase()),
            })
            .collect()
    }

    #[test]
    fn tag_names_need_a_boundary() {
        let tags: Vec<Tag> = Tags::new("<track><tr class=x><tdx><td>").collect();
        assert!(!tags[0].is_open("tr"));
        assert!(tags[1].is_open("tr"));
        assert!(!tags[2].is_open("td"));
        assert!(tags[3].is_open("td"));
    }

    #[test]
    fn tag_end_skips_quoted_gt() {
        let s = r#"<td title="a>b">X</td>"#;
        assert_eq!(tag_end(s, 0), Some(16));
        assert_eq!(&s[16..17], "X");
        let t = Tags::new(s).next().unwrap();
        assert_eq!((t.start, t.end), (0, 16));
    }

    #[test]
    fn names_match_case_insensitively() {
        assert_eq!(names("<TABLE><Tr><TD>a</tD></TR>"), vec!["table", "tr", "td", "/td", "/tr"]);
    }

    #[test]
    fn comments_and_declarations_yield_nothing() {
        assert_eq!(names("<!DOCTYPE html><!-- <tr><td>x</td></tr> --><p>"), vec!["p"]);
        assert!(names("<!-- never closed <tr>").is_empty());
    }

    #[test]
    fn raw_text_bodies_are_skipped() {
        let doc = "<script>var s = '<tr><td>A</td></tr>';</script><tr><STYLE>td{}</style>";
        assert_eq!(names(doc), vec!["script", "/script", "tr", "style", "/style"]);
    }

    #[test]
    fn lone_angle_brackets_are_text() {
        assert_eq!(names("a < b <> c </ d <i>"), vec!["i"]);
        assert!(names("plain text").is_empty());
    }
}
