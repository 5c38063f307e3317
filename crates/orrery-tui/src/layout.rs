//! Virtual document layout.
//!
//! Posts are laid out top-down as sections of a tall virtual document:
//! a banner region the height of the pinned-header offset, then one
//! section per post with a fixed gap between them. Offsets and heights are
//! measured here once per viewport width; the navigator scrolls against
//! them and the section widget renders document rows back out.

use orrery_core::nav::Section;
use orrery_core::post::Post;
use unicode_width::UnicodeWidthStr;

/// Blank rows between consecutive sections
pub const SECTION_GAP: u16 = 4;

/// Rows a section occupies beyond its wrapped body (title + underline)
const SECTION_CHROME: u16 = 2;

/// Pre-wrapped render content for one section
#[derive(Debug, Clone)]
pub struct SectionContent {
    pub title: String,
    /// Body lines wrapped to the measured width
    pub lines: Vec<String>,
}

impl SectionContent {
    pub fn height(&self) -> u16 {
        self.lines.len() as u16 + SECTION_CHROME
    }
}

/// Measure all posts against a content width, producing the navigator's
/// section list and the matching render content.
///
/// The two vectors are index-aligned and `sections[i].height` always equals
/// `contents[i].height()`, so rendering can map any document row straight
/// to a section line.
pub fn measure(posts: &[Post], width: u16, header_offset: u16) -> (Vec<Section>, Vec<SectionContent>) {
    let mut sections = Vec::with_capacity(posts.len());
    let mut contents = Vec::with_capacity(posts.len());
    let mut offset = header_offset;

    for (index, post) in posts.iter().enumerate() {
        let mut lines = Vec::new();
        for raw in &post.body {
            lines.extend(wrap_line(raw, width as usize));
        }

        let content = SectionContent {
            title: post.title.clone(),
            lines,
        };
        let height = content.height();

        sections.push(Section {
            index,
            offset,
            height,
        });
        contents.push(content);

        offset = offset.saturating_add(height).saturating_add(SECTION_GAP);
    }

    (sections, contents)
}

/// Greedy word wrap by display width. Empty input yields one empty line;
/// words wider than the width are hard-broken.
pub fn wrap_line(line: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![line.to_string()];
    }
    if line.trim().is_empty() {
        return vec![String::new()];
    }

    let mut out = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let word_width = word.width();
        let current_width = current.width();

        if current.is_empty() {
            if word_width <= width {
                current.push_str(word);
            } else {
                hard_break(word, width, &mut out, &mut current);
            }
        } else if current_width + 1 + word_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            if word_width <= width {
                current.push_str(word);
            } else {
                hard_break(word, width, &mut out, &mut current);
            }
        }
    }

    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Break an over-wide word into width-sized chunks; the final chunk stays
/// in `current` so following words can share its line.
fn hard_break(word: &str, width: usize, out: &mut Vec<String>, current: &mut String) {
    let mut chunk = String::new();
    for c in word.chars() {
        let c_width = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if chunk.width() + c_width > width && !chunk.is_empty() {
            out.push(std::mem::take(&mut chunk));
        }
        chunk.push(c);
    }
    *current = chunk;
}
