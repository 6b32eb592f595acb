//! Comment text sanitation.

const TAB_SIZE: usize = 8;

/// Drop every non-ASCII character.
pub fn ascii_only(text: &str) -> String {
    text.chars().filter(char::is_ascii).collect()
}

fn char_len(s: &str) -> usize {
    s.chars().count()
}

fn is_space(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\x0b' | '\x0c' | '\r' | ' ')
}

fn is_letter(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

fn is_word_or_punct(c: char) -> bool {
    is_word_char(c) || matches!(c, '!' | '"' | '\'' | '&' | '.' | ',' | '?')
}

fn is_blank(chunk: &str) -> bool {
    chunk.chars().all(|c| c == ' ')
}

/// Expand tabs to the next multiple of eight columns, then turn each
/// remaining whitespace character into a single space.
fn normalize_whitespace(text: &str) -> Vec<char> {
    let mut out = Vec::with_capacity(text.len());
    let mut column = 0;
    for c in text.chars() {
        match c {
            '\t' => {
                let pad = TAB_SIZE - column % TAB_SIZE;
                out.extend(std::iter::repeat(' ').take(pad));
                column += pad;
            }
            '\n' | '\r' => {
                out.push(' ');
                column = 0;
            }
            c if is_space(c) => {
                out.push(' ');
                column += 1;
            }
            c => {
                out.push(c);
                column += 1;
            }
        }
    }
    out
}

fn letter_at(chars: &[char], idx: Option<usize>) -> bool {
    idx.and_then(|i| chars.get(i)).is_some_and(|&c| is_letter(c))
}

fn char_at(chars: &[char], idx: Option<usize>) -> Option<char> {
    idx.and_then(|i| chars.get(i)).copied()
}

/// A hyphen at `i` ends a chunk when it joins two letter runs, e.g.
/// `well-established`. Single letters on both sides (`a-b`) do not break.
fn hyphen_breaks_after(chars: &[char], i: usize) -> bool {
    let back = |n: usize| i.checked_sub(n);
    let ahead = |n: usize| Some(i + n);

    let behind_ok = (letter_at(chars, back(2)) && letter_at(chars, back(1)))
        || (letter_at(chars, back(3))
            && char_at(chars, back(2)) == Some('-')
            && letter_at(chars, back(1)));
    let ahead_ok = letter_at(chars, ahead(1))
        && (letter_at(chars, ahead(2))
            || (char_at(chars, ahead(2)) == Some('-') && letter_at(chars, ahead(3))));
    behind_ok && ahead_ok
}

/// End of a `--` style dash run starting at `k` that leads into a word.
fn dash_run_end(chars: &[char], k: usize) -> Option<usize> {
    let end = k + chars[k..].iter().take_while(|&&c| c == '-').count();
    (end - k >= 2 && chars.get(end).is_some_and(|&c| is_word_char(c))).then_some(end)
}

fn word_end(chars: &[char], start: usize) -> usize {
    let mut k = start + 1;
    loop {
        match chars.get(k).copied() {
            None => return k,
            Some(c) if is_space(c) => return k,
            Some('-') if hyphen_breaks_after(chars, k) => return k + 1,
            _ => {}
        }
        if is_word_or_punct(chars[k - 1]) && dash_run_end(chars, k).is_some() {
            return k;
        }
        k += 1;
    }
}

/// Split into space runs, word pieces (broken after joining hyphens) and
/// `--` dash runs.
fn split_chunks(chars: &[char]) -> Vec<String> {
    let mut chunks = Vec::new();
    let mut start = 0;
    while start < chars.len() {
        let end = if is_space(chars[start]) {
            start + chars[start..].iter().take_while(|&&c| is_space(c)).count()
        } else if start > 0 && is_word_or_punct(chars[start - 1]) {
            dash_run_end(chars, start).unwrap_or_else(|| word_end(chars, start))
        } else {
            word_end(chars, start)
        };
        chunks.push(chars[start..end].iter().collect());
        start = end;
    }
    chunks
}

/// Put as much of an overlong chunk on the current line as fits, preferring
/// to cut just after a hyphen.
fn break_long_chunk(
    chunks: &mut Vec<String>,
    line: &mut Vec<String>,
    line_len: usize,
    width: usize,
) {
    let Some(chunk) = chunks.pop() else {
        return;
    };
    let chars: Vec<char> = chunk.chars().collect();
    let space_left = width - line_len;
    let mut end = space_left;
    if let Some(hyphen) = chars[..space_left].iter().rposition(|&c| c == '-') {
        if hyphen > 0 && chars[..hyphen].iter().any(|&c| c != '-') {
            end = hyphen + 1;
        }
    }
    line.push(chars[..end].iter().collect());
    chunks.push(chars[end..].iter().collect());
}

/// Greedy word wrap to at most `width` columns.
///
/// Tabs expand to eight columns and every other whitespace character
/// (newlines included) becomes one space. Runs of spaces inside a line are
/// kept; spaces are dropped where a line ends and where a continuation line
/// would start. Leading spaces of the text itself stay. Words may break
/// after a hyphen that joins letters, and a chunk longer than `width` is cut
/// to fit. A `width` of zero is treated as one.
pub fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let chars = normalize_whitespace(text);
    let mut chunks = split_chunks(&chars);
    chunks.reverse();

    let mut lines: Vec<String> = Vec::new();
    while !chunks.is_empty() {
        let mut line: Vec<String> = Vec::new();
        let mut line_len = 0;

        if !lines.is_empty() && chunks.last().is_some_and(|c| is_blank(c)) {
            chunks.pop();
        }

        while let Some(chunk) = chunks.last() {
            let len = char_len(chunk);
            if line_len + len > width {
                break;
            }
            line_len += len;
            line.extend(chunks.pop());
        }

        if chunks.last().is_some_and(|c| char_len(c) > width) {
            break_long_chunk(&mut chunks, &mut line, line_len, width);
        }

        if line.last().is_some_and(|c| is_blank(c)) {
            line.pop();
        }
        if !line.is_empty() {
            lines.push(line.concat());
        }
    }
    lines
}

/// ASCII-sanitize and wrap a class comment; `None` if nothing is left.
pub fn sanitize_comment(text: &str, width: usize) -> Option<String> {
    let lines = wrap(&ascii_only(text), width);
    if lines.is_empty() {
        None
    } else {
        Some(lines.join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_non_ascii() {
        assert_eq!(ascii_only("naïve café – ok"), "nave caf  ok");
    }

    #[test]
    fn wraps_greedily_at_width() {
        let lines = wrap("the quick brown fox jumps over the lazy dog", 10);
        assert_eq!(
            lines,
            vec!["the quick", "brown fox", "jumps over", "the lazy", "dog"]
        );
        assert!(lines.iter().all(|l| l.len() <= 10));
    }

    #[test]
    fn whitespace_characters_become_single_spaces() {
        assert_eq!(wrap("a\nb\r\nc", 70), vec!["a b  c"]);
        assert_eq!(wrap("ab\tc", 70), vec!["ab      c"]);
        assert_eq!(wrap("a b  ", 70), vec!["a b"]);
    }

    #[test]
    fn keeps_space_runs_inside_a_line() {
        assert_eq!(wrap("amino acids  a protein.", 70), vec!["amino acids  a protein."]);
        // Dropped only at the break.
        assert_eq!(wrap("aaaa  bbbb   cccc", 9), vec!["aaaa", "bbbb", "cccc"]);
    }

    #[test]
    fn breaks_after_hyphens_between_words() {
        assert_eq!(
            wrap("aaaa well-established-term", 15),
            vec!["aaaa well-", "established-", "term"]
        );
        // Single-letter pieces and dash runs stay attached.
        assert_eq!(wrap("x a-b yyyyyy", 5), vec!["x a-b", "yyyyy", "y"]);
        assert_eq!(wrap("foo--bar baz", 5), vec!["foo--", "bar", "baz"]);
    }

    #[test]
    fn breaks_long_words() {
        assert_eq!(wrap("abcdefghij", 4), vec!["abcd", "efgh", "ij"]);
        assert_eq!(wrap("ab cdefghij", 5), vec!["ab cd", "efghi", "j"]);
        assert_eq!(wrap("xxxxxxxxxxxxxx-yy", 10), vec!["xxxxxxxxxx", "xxxx-yy"]);
    }

    #[test]
    fn sanitize_comment_keeps_gap_left_by_stripped_characters() {
        assert_eq!(
            sanitize_comment("A sequence of amino acids \u{2013} a protein.", 70).as_deref(),
            Some("A sequence of amino acids  a protein.")
        );
    }

    #[test]
    fn sanitize_comment_is_none_for_blank_text() {
        assert_eq!(sanitize_comment("   ", 70), None);
        assert_eq!(sanitize_comment("日本語", 70), None);
        assert_eq!(
            sanitize_comment("Base entity", 70).as_deref(),
            Some("Base entity")
        );
    }
}
