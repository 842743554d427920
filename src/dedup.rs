use tracing::debug;

use crate::parser::blocks::{split_blocks, MIN_BLOCK_LINES};

/// Titles at or below this many characters skip the boundary scan.
const SCAN_MIN_CHARS: usize = 10;
const MIN_UNIT_CHARS: usize = 2;
const MIN_LEADING_UNIT_CHARS: usize = 3;

type Collapse = fn(&[char]) -> Option<Vec<char>>;

/// Remove scrape artifacts where a title got glued to a copy of itself
/// ("EngineerEngineer", "Senior Developer Senior Developer").
///
/// Only the first fallback that changes the title is applied. A title with
/// both a glued and a spaced repetition, such as
/// `"EngineerEngineer Manager Manager"`, loses only the glued one per call,
/// so a second call can still shorten it.
pub fn dedup_title(title: &str) -> String {
    if title.is_empty() {
        return String::new();
    }

    let mut chars: Vec<char> = title.chars().collect();
    if chars.len() > SCAN_MIN_CHARS {
        if let Some(cut) = boundary_split(&chars) {
            chars.truncate(cut);
            while chars.last().is_some_and(|c| c.is_whitespace()) {
                chars.pop();
            }
        }
    }

    let collapses: [Collapse; 3] = [collapse_adjacent, collapse_spaced, collapse_leading];
    for collapse in collapses {
        if let Some(next) = collapse(&chars) {
            return next.into_iter().collect();
        }
    }
    chars.into_iter().collect()
}

/// Shortest `i` where the title is `X X...` with `X = title[..i]` and the
/// split lands on a word boundary.
fn boundary_split(chars: &[char]) -> Option<usize> {
    let half = chars.len() / 2;
    (1..=half).find(|&i| {
        chars[..i] == chars[i..2 * i] && (i == half || chars[i - 1] == ' ' || chars[i] == ' ')
    })
}

fn is_word_start(chars: &[char], pos: usize) -> bool {
    pos == 0 || chars[pos - 1].is_whitespace()
}

fn is_word_end(chars: &[char], pos: usize) -> bool {
    pos == chars.len() || !chars[pos].is_alphanumeric()
}

fn is_trimmed(unit: &[char]) -> bool {
    match (unit.first(), unit.last()) {
        (Some(first), Some(last)) => !first.is_whitespace() && !last.is_whitespace(),
        _ => false,
    }
}

/// `XX` (or `XXX`...) collapses to `X`, for every run in the string.
fn collapse_adjacent(chars: &[char]) -> Option<Vec<char>> {
    collapse_runs(chars, adjacent_run)
}

/// `X X` collapses to `X`, for every run in the string.
fn collapse_spaced(chars: &[char]) -> Option<Vec<char>> {
    collapse_runs(chars, spaced_run)
}

fn collapse_runs(
    chars: &[char],
    find_run: fn(&[char], usize) -> Option<(usize, usize)>,
) -> Option<Vec<char>> {
    let mut out = Vec::with_capacity(chars.len());
    let mut changed = false;
    let mut pos = 0;

    while pos < chars.len() {
        if is_word_start(chars, pos) {
            if let Some((unit_len, end)) = find_run(chars, pos) {
                out.extend_from_slice(&chars[pos..pos + unit_len]);
                pos = end;
                changed = true;
                continue;
            }
        }
        out.push(chars[pos]);
        pos += 1;
    }

    changed.then_some(out)
}

/// Returns `(unit_len, end_of_run)` for the shortest unit starting at `start`
/// that is immediately repeated and whose last copy ends a word.
fn adjacent_run(chars: &[char], start: usize) -> Option<(usize, usize)> {
    let max_len = (chars.len() - start) / 2;
    for len in MIN_UNIT_CHARS..=max_len {
        let unit = &chars[start..start + len];
        if !is_trimmed(unit) {
            continue;
        }
        let mut end = start + len;
        while end + len <= chars.len() && chars[end..end + len] == *unit {
            end += len;
        }
        if end >= start + 2 * len && is_word_end(chars, end) {
            return Some((len, end));
        }
    }
    None
}

/// Like `adjacent_run`, but copies are separated by a whitespace run.
fn spaced_run(chars: &[char], start: usize) -> Option<(usize, usize)> {
    let max_len = (chars.len() - start).saturating_sub(1) / 2;
    for len in MIN_UNIT_CHARS..=max_len {
        let unit = &chars[start..start + len];
        if !is_trimmed(unit) {
            continue;
        }
        let mut end = start + len;
        let mut copies = 1;
        loop {
            let mut next = end;
            while next < chars.len() && chars[next].is_whitespace() {
                next += 1;
            }
            if next == end || next + len > chars.len() || chars[next..next + len] != *unit {
                break;
            }
            end = next + len;
            copies += 1;
        }
        if copies >= 2 && is_word_end(chars, end) {
            return Some((len, end));
        }
    }
    None
}

/// A title that opens with `XX...` keeps one `X` plus whatever follows.
fn collapse_leading(chars: &[char]) -> Option<Vec<char>> {
    let max_len = chars.len() / 2;
    for len in MIN_LEADING_UNIT_CHARS..=max_len {
        let unit = &chars[..len];
        if !is_trimmed(unit) {
            continue;
        }
        let mut end = len;
        while end + len <= chars.len() && chars[end..end + len] == *unit {
            end += len;
        }
        if end >= 2 * len {
            let mut out = unit.to_vec();
            out.extend_from_slice(&chars[end..]);
            return Some(out);
        }
    }
    None
}

#[derive(Debug, Clone, Default)]
pub struct RepairedDocument {
    pub text: String,
    pub blocks: usize,
    pub titles_changed: usize,
}

/// Rewrite the title line of every usable block. Blocks too short to hold a
/// listing are left out of the repaired text.
pub fn repair_document(raw: &str) -> RepairedDocument {
    let mut blocks = Vec::new();
    let mut titles_changed = 0;

    for lines in split_blocks(raw) {
        if lines.len() < MIN_BLOCK_LINES {
            continue;
        }
        let fixed = dedup_title(lines[1]);
        if fixed != lines[1] {
            debug!(before = lines[1], after = %fixed, "repaired title");
            titles_changed += 1;
        }

        let mut out: Vec<&str> = Vec::with_capacity(lines.len());
        out.push(lines[0]);
        out.push(&fixed);
        out.extend_from_slice(&lines[2..]);
        blocks.push(out.join("\n"));
    }

    RepairedDocument {
        blocks: blocks.len(),
        text: blocks.join("\n\n"),
        titles_changed,
    }
}
