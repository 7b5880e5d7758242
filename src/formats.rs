use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// One entry of a page list (`pages.yaml`): either the physical pages that
/// were scanned together into one image, or a cover image.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GroupingSpec {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pages: Option<Vec<PageId>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub img: Option<String>,
}

/// Physical page label. Numbers are zero-padded in file names; labels are
/// used verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PageId {
    Number(u32),
    Label(String),
}

impl PageId {
    /// Form used in file names and annotation keys.
    pub fn file_stem(&self) -> String {
        match self {
            PageId::Number(n) => format!("{n:02}"),
            PageId::Label(label) => label.clone(),
        }
    }

    pub fn image_key(&self) -> String {
        format!("{}.jpg", self.file_stem())
    }
}

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PageId::Number(n) => write!(f, "{n}"),
            PageId::Label(label) => f.write_str(label),
        }
    }
}

/// Top level of an annotation file. The annotation tool also stores its
/// image list and cursor here; only `pages` matters for posts.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Annotations {
    #[serde(default)]
    pub pages: HashMap<String, PageAnnotation>,
}

impl Annotations {
    pub fn page(&self, id: &PageId) -> Option<&PageAnnotation> {
        self.pages.get(&id.image_key())
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PageAnnotation {
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub articles: Vec<Article>,
}

impl PageAnnotation {
    pub fn date(&self) -> &str {
        self.date.as_deref().unwrap_or("")
    }

    /// Topics in the summary, split on `"; "`. An empty summary still yields
    /// one empty topic.
    pub fn topics(&self) -> impl Iterator<Item = &str> {
        self.summary.as_deref().unwrap_or("").split("; ")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Article {
    pub text: String,
}
