//! Bullet-list spacing normalization.
//!
//! pandoc only renders a list when it is separated from surrounding
//! paragraphs by a blank line, and it renders a "loose" list (extra spacing)
//! when items are separated by blank lines. Notes written for other
//! renderers often get both wrong, so the text is rewritten line by line
//! before conversion:
//!
//! 1. a blank line is inserted between a paragraph line and a following
//!    bullet line,
//! 2. a blank line is inserted between a bullet line and a following line
//!    that does not start with `-`,
//! 3. blank lines between two bullet lines are dropped.
//!
//! This is a heuristic over lines, not a Markdown parse. Code fences
//! containing `- ` lines are rewritten like any other text.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::fs::TempArtifact;
use crate::paths;

const BULLET: &str = "- ";

fn is_bullet(line: &str) -> bool {
    line.starts_with(BULLET)
}

fn is_blank(line: &str) -> bool {
    line.trim().is_empty()
}

/// Returns `true` if a blank line belongs between `prev` and `line`.
fn needs_gap(prev: &str, line: &str) -> bool {
    if is_blank(prev) || is_blank(line) {
        return false;
    }
    // Paragraph directly followed by a list.
    if !is_bullet(prev) && is_bullet(line) {
        return true;
    }
    // List directly followed by a paragraph.
    is_bullet(prev) && !line.starts_with('-')
}

/// Rewrites blank-line placement around bullet lists.
///
/// Always succeeds. The result is stable: normalizing it again returns the
/// same text. A trailing newline on `text` is kept.
pub fn normalize(text: &str) -> String {
    let lines: Vec<&str> = text.lines().collect();
    let mut out: Vec<&str> = Vec::with_capacity(lines.len() + lines.len() / 4);

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if is_blank(line) && out.last().is_some_and(|prev| is_bullet(prev)) {
            let next = lines[i..]
                .iter()
                .position(|l| !is_blank(l))
                .map(|offset| i + offset);

            if let Some(next) = next
                && is_bullet(lines[next])
            {
                i = next;
                continue;
            }
        }

        if let Some(prev) = out.last()
            && needs_gap(prev, line)
        {
            out.push("");
        }

        out.push(line);
        i += 1;
    }

    let mut result = out.join("\n");
    if text.ends_with('\n') {
        result.push('\n');
    }
    result
}

/// Reads `input`, normalizes it and writes the result to the temp directory.
///
/// The returned artifact is named after the input file and is removed when
/// dropped.
pub fn write_processed(input: &Path) -> Result<TempArtifact> {
    let content = fs::read_to_string(input)
        .with_context(|| format!("Failed to read file: {}", input.display()))?;

    TempArtifact::create(paths::processed_path(input), &normalize(&content))
}
