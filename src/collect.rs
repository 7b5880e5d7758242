use std::path::Path;

use anyhow::Context as _;

/// Transcribed article texts gathered across every scrapbook, in render
/// order. Notes are never added.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawArticles {
    articles: Vec<String>,
}

impl RawArticles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend<I>(&mut self, articles: I)
    where
        I: IntoIterator<Item = String>,
    {
        self.articles.extend(articles);
    }

    pub fn len(&self) -> usize {
        self.articles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.articles.is_empty()
    }

    /// One article per line, without a trailing newline.
    pub fn to_text(&self) -> String {
        self.articles.join("\n")
    }

    pub fn write(&self, path: &Path) -> anyhow::Result<()> {
        std::fs::write(path, self.to_text())
            .with_context(|| format!("write raw articles: {}", path.display()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn raw_articles_join_without_trailing_newline() -> anyhow::Result<()> {
        let mut raw = RawArticles::new();
        assert!(raw.is_empty());
        raw.extend(vec!["first".to_owned()]);
        raw.extend(vec!["second".to_owned(), "third".to_owned()]);
        assert_eq!(raw.len(), 3);
        assert_eq!(raw.to_text(), "first\nsecond\nthird");

        let temp = tempfile::TempDir::new()?;
        let path = temp.path().join("raw-articles.txt");
        raw.write(&path)?;
        assert_eq!(std::fs::read_to_string(&path)?, "first\nsecond\nthird");
        Ok(())
    }
}
