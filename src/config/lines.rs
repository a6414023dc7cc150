//! Line parsing internals

#[derive(Debug, PartialEq)]
/// A parsed line we read from an sshd config file
pub(super) enum Line {
    /// Blank, whitespace-only, or a comment
    Empty,
    /// A keyword with no value; sshd would reject this, we skip it
    Incomplete { line_number: usize, keyword: String },
    Directive {
        line_number: usize,
        keyword: String,
        value: String,
    },
}

///////////////////////////////////////////////////////////////////////////////////////

/// Classifies a single line of input.
///
/// The keyword is everything up to the first whitespace; the value is the rest of the line, trimmed.
/// Nothing in the value is interpreted: quotes, inner whitespace and `#` are all kept verbatim.
pub(super) fn parse_line(line: &str, line_number: usize) -> Line {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Line::Empty;
    }
    match line.split_once(char::is_whitespace) {
        None => Line::Incomplete {
            line_number,
            keyword: line.to_owned(),
        },
        Some((keyword, rest)) => Line::Directive {
            line_number,
            keyword: keyword.to_owned(),
            value: rest.trim().to_owned(),
        },
    }
}

/// Splits text into lines, treating `\n`, `\r\n` and a lone `\r` each as one line break.
///
/// A trailing break does not produce an empty final line.
pub(super) fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let Some(i) = rest.find(['\r', '\n']) else {
            let line = rest;
            rest = "";
            return Some(line);
        };
        let line = &rest[..i];
        let width = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
        rest = &rest[i + width..];
        Some(line)
    })
}

///////////////////////////////////////////////////////////////////////////////////////
