use crate::artifacts::comment::CommentStyle;
use crate::artifacts::content::read_text_best_effort;
use crate::artifacts::diff::myers::{DiffAlgorithm, Edit, MyersDiff};
use std::path::Path;

/// Split text into lines, each keeping its terminator (`\n`, `\r\n` or `\r`)
pub fn split_lines(text: &str) -> Vec<&str> {
    let bytes = text.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    i += 1;
                }
                lines.push(&text[start..=i]);
                start = i + 1;
            }
            _ => {}
        }
        i += 1;
    }

    if start < text.len() {
        lines.push(&text[start..]);
    }

    lines
}

/// Accumulates the merged buffer
///
/// An annotated line lacking a terminator can only be the last line of its
/// side; if anything follows it, a `\n` keeps the two from fusing. The same
/// separator goes after a lone `\r` when the next piece opens with `\n`, or
/// both would read back as a single CRLF line.
struct Annotated {
    buffer: String,
}

impl Annotated {
    fn with_capacity(capacity: usize) -> Self {
        Annotated {
            buffer: String::with_capacity(capacity),
        }
    }

    fn push(&mut self, piece: &str) {
        let fused = match self.buffer.chars().next_back() {
            None | Some('\n') => false,
            Some('\r') => piece.starts_with('\n'),
            Some(_) => true,
        };

        if fused {
            self.buffer.push('\n');
        }
        self.buffer.push_str(piece);
    }

    fn apply(&mut self, edit: Edit<'_, &str>, style: CommentStyle) {
        match edit {
            Edit::Equal(line) => self.push(line),
            Edit::Delete(line) => self.push(&style.deleted_line(line)),
            Edit::Insert(line) => self.push(&style.append_new_suffix(line)),
        }
    }
}

/// Merge `a` and `b` line by line: unchanged lines verbatim, removed lines
/// commented out, added lines tagged as new, all in their original order
pub fn annotate(a: &str, b: &str, style: CommentStyle) -> String {
    let a_lines = split_lines(a);
    let b_lines = split_lines(b);

    // peel off the shared head and tail before aligning the middle
    let head = a_lines
        .iter()
        .zip(&b_lines)
        .take_while(|(x, y)| x == y)
        .count();
    let tail = a_lines[head..]
        .iter()
        .rev()
        .zip(b_lines[head..].iter().rev())
        .take_while(|(x, y)| x == y)
        .count();

    let a_middle = &a_lines[head..a_lines.len() - tail];
    let b_middle = &b_lines[head..b_lines.len() - tail];

    let mut merged = Annotated::with_capacity(a.len().max(b.len()));

    a_lines[..head]
        .iter()
        .for_each(|line| merged.apply(Edit::Equal(line), style));
    MyersDiff::new(a_middle, b_middle)
        .diff()
        .into_iter()
        .for_each(|edit| merged.apply(edit, style));
    a_lines[a_lines.len() - tail..]
        .iter()
        .for_each(|line| merged.apply(Edit::Equal(line), style));

    merged.buffer
}

/// Read both files best-effort and annotate their differences
pub fn annotate_files(
    a_path: &Path,
    b_path: &Path,
    style: CommentStyle,
    normalize_eol: bool,
) -> anyhow::Result<String> {
    let a_text = read_text_best_effort(a_path, normalize_eol)?;
    let b_text = read_text_best_effort(b_path, normalize_eol)?;

    Ok(annotate(&a_text, &b_text, style))
}
