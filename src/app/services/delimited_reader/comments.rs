//! Leading comment block detection

/// True for lines that are blank or whose first non-blank text is the comment marker
pub fn is_comment_or_blank(line: &str, comment_char: &str) -> bool {
    let stripped = line.trim();
    stripped.is_empty() || stripped.starts_with(comment_char)
}

/// Index of the first data line, or `lines.len()` when every line is a comment
///
/// Only the unbroken run at the start of the input counts as the comment
/// block. A comment-like line after the first data line is data.
pub fn comment_block_end<L: AsRef<str>>(lines: &[L], comment_char: &str) -> usize {
    lines
        .iter()
        .position(|line| !is_comment_or_blank(line.as_ref(), comment_char))
        .unwrap_or(lines.len())
}
