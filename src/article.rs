//! Markdown article loading with front matter.
//!
//! Articles are plain `.md` files whose optional leading `---` block holds
//! colon-separated metadata. The slug is the file stem; missing metadata
//! falls back to neutral defaults.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ArticleError {
    #[error("failed to read article {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to walk article directory: {0}")]
    Walk(#[from] walkdir::Error),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Article {
    pub id: String,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    pub date: String,
    pub author: String,
    pub category: String,
}

/// Split a raw file into metadata and body.
///
/// The front matter block is `---\n…\n---\n` at the very start; each line
/// inside is `key: value`, with the value allowed to contain further
/// colons. Files without a block are all body.
pub fn parse_front_matter(raw: &str) -> (BTreeMap<String, String>, &str) {
    let mut metadata = BTreeMap::new();

    let Some(after_open) = raw.strip_prefix("---\n") else {
        return (metadata, raw);
    };
    let Some(close) = after_open.find("\n---\n") else {
        return (metadata, raw);
    };

    let block = &after_open[..close];
    let body = &after_open[close + "\n---\n".len()..];

    for line in block.lines() {
        if let Some((key, value)) = line.split_once(':') {
            let key = key.trim();
            if !key.is_empty() {
                metadata.insert(key.to_string(), value.trim().to_string());
            }
        }
    }

    (metadata, body)
}

fn article_from_file(path: &Path) -> Result<Article, ArticleError> {
    let raw = std::fs::read_to_string(path).map_err(|source| ArticleError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let (metadata, body) = parse_front_matter(&raw);

    let slug = path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or("")
        .to_string();

    let field = |name: &str, default: &str| {
        metadata
            .get(name)
            .filter(|value| !value.is_empty())
            .cloned()
            .unwrap_or_else(|| default.to_string())
    };

    Ok(Article {
        id: slug,
        title: field("title", "Untitled"),
        excerpt: field("excerpt", ""),
        content: body.to_string(),
        date: field("date", ""),
        author: field("author", "Anonymous"),
        category: field("category", "Uncategorized"),
    })
}

/// Load every `.md` article in `dir`, newest first.
///
/// Dates are ISO-formatted strings, so descending lexicographic order is
/// descending chronological order; undated articles sort last.
pub fn load_articles(dir: impl AsRef<Path>) -> Result<Vec<Article>, ArticleError> {
    let mut articles = Vec::new();

    for entry in WalkDir::new(dir.as_ref()).max_depth(1) {
        let entry = entry?;
        if entry.file_type().is_file()
            && entry.path().extension().and_then(|s| s.to_str()) == Some("md")
        {
            articles.push(article_from_file(entry.path())?);
        }
    }

    articles.sort_by(|a, b| b.date.cmp(&a.date).then_with(|| a.id.cmp(&b.id)));
    Ok(articles)
}

/// Load one article by slug, or `None` if no such file exists.
pub fn load_article(
    dir: impl AsRef<Path>,
    slug: &str,
) -> Result<Option<Article>, ArticleError> {
    let path = dir.as_ref().join(format!("{slug}.md"));
    if !path.is_file() {
        return Ok(None);
    }
    article_from_file(&path).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const POST: &str = "---\ntitle: Improving Your Writing\ndate: 2025-06-01\nauthor: Jane\ncategory: Writing\nexcerpt: Small edits, big gains: a field guide\n---\nBody text here.\n";

    #[test]
    fn front_matter_splits_metadata_and_body() {
        let (metadata, body) = parse_front_matter(POST);
        assert_eq!(metadata["title"], "Improving Your Writing");
        // Values may contain colons; only the first one splits.
        assert_eq!(metadata["excerpt"], "Small edits, big gains: a field guide");
        assert_eq!(body, "Body text here.\n");
    }

    #[test]
    fn file_without_front_matter_is_all_body() {
        let (metadata, body) = parse_front_matter("Just content, no header.\n");
        assert!(metadata.is_empty());
        assert_eq!(body, "Just content, no header.\n");
    }

    #[test]
    fn unterminated_front_matter_is_treated_as_body() {
        let raw = "---\ntitle: Broken\nno closing fence";
        let (metadata, body) = parse_front_matter(raw);
        assert!(metadata.is_empty());
        assert_eq!(body, raw);
    }

    #[test]
    fn load_articles_sorts_newest_first_with_defaults() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("older.md"), "---\ntitle: Older\ndate: 2025-01-10\n---\nold\n")
            .unwrap();
        fs::write(post_path(dir.path()), POST).unwrap();
        fs::write(dir.path().join("bare.md"), "no metadata at all\n").unwrap();
        fs::write(dir.path().join("notes.txt"), "ignored\n").unwrap();

        let articles = load_articles(dir.path()).unwrap();
        assert_eq!(articles.len(), 3);
        assert_eq!(articles[0].id, "improving-your-writing");
        assert_eq!(articles[1].title, "Older");

        let bare = &articles[2];
        assert_eq!(bare.title, "Untitled");
        assert_eq!(bare.author, "Anonymous");
        assert_eq!(bare.category, "Uncategorized");
        assert_eq!(bare.content, "no metadata at all\n");
    }

    fn post_path(dir: &Path) -> PathBuf {
        dir.join("improving-your-writing.md")
    }

    #[test]
    fn load_article_by_slug() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(post_path(dir.path()), POST).unwrap();

        let article = load_article(dir.path(), "improving-your-writing")
            .unwrap()
            .unwrap();
        assert_eq!(article.author, "Jane");

        assert!(load_article(dir.path(), "missing").unwrap().is_none());
    }
}
