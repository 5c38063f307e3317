//! Posts: the content behind each navigable section.
//!
//! A "universe" is a directory of Markdown or plain-text files, one post
//! per file, ordered by file name. The first `#` heading names the post;
//! files without one fall back to the file stem.

use std::path::Path;

use tracing::{debug, warn};

use crate::error::Result;

/// One post loaded from the universe directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Display title
    pub title: String,
    /// Body lines, heading stripped
    pub body: Vec<String>,
}

impl Post {
    /// Parse a post from file contents, taking the title from the first
    /// `#` heading when there is one.
    pub fn parse(contents: &str, fallback_title: &str) -> Self {
        let mut lines = contents.lines().peekable();
        let mut title = None;

        // Skip leading blank lines, then look for a heading
        while let Some(line) = lines.peek() {
            let trimmed = line.trim();
            if trimmed.is_empty() {
                lines.next();
                continue;
            }
            if let Some(heading) = trimmed.strip_prefix('#') {
                title = Some(heading.trim_start_matches('#').trim().to_string());
                lines.next();
            }
            break;
        }

        let body: Vec<String> = lines
            .map(|l| l.trim_end().to_string())
            .skip_while(|l| l.is_empty())
            .collect();

        Self {
            title: title.unwrap_or_else(|| fallback_title.to_string()),
            body,
        }
    }
}

/// File extensions recognized as posts
const POST_EXTENSIONS: [&str; 3] = ["md", "markdown", "txt"];

/// Load every post in the universe directory, sorted by file name.
///
/// A missing directory is not an error: it yields an empty universe and
/// the navigator simply does not initialize.
pub fn load_universe(dir: &Path) -> Result<Vec<Post>> {
    if !dir.is_dir() {
        warn!(dir = %dir.display(), "universe directory does not exist");
        return Ok(Vec::new());
    }

    let mut paths: Vec<_> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| {
            path.extension()
                .and_then(|e| e.to_str())
                .map(|e| POST_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
                .unwrap_or(false)
        })
        .collect();
    paths.sort();

    let mut posts = Vec::with_capacity(paths.len());
    for path in paths {
        let contents = std::fs::read_to_string(&path)?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("untitled");
        posts.push(Post::parse(&contents, stem));
    }

    debug!(count = posts.len(), dir = %dir.display(), "loaded universe");
    Ok(posts)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_with_heading() {
        let post = Post::parse("# Mercury\n\nClosest to the sun.\n", "01-mercury");
        assert_eq!(post.title, "Mercury");
        assert_eq!(post.body, vec!["Closest to the sun.".to_string()]);
    }

    #[test]
    fn test_parse_without_heading() {
        let post = Post::parse("Just some text.\nSecond line.\n", "02-venus");
        assert_eq!(post.title, "02-venus");
        assert_eq!(post.body.len(), 2);
    }

    #[test]
    fn test_parse_deep_heading() {
        let post = Post::parse("## Mars ##\nRed.\n", "mars");
        assert_eq!(post.title, "Mars ##");
    }

    #[test]
    fn test_parse_skips_leading_blanks() {
        let post = Post::parse("\n\n# Jupiter\n\n\nBig.\n", "jupiter");
        assert_eq!(post.title, "Jupiter");
        assert_eq!(post.body, vec!["Big.".to_string()]);
    }

    #[test]
    fn test_missing_universe_is_empty() {
        let posts = load_universe(Path::new("/nonexistent/universe")).unwrap();
        assert!(posts.is_empty());
    }
}
