use std::path::{Path, PathBuf};

use anyhow::Context as _;

use crate::cli::{CheckArgs, GenerateArgs};
use crate::collect::RawArticles;
use crate::formats::{Annotations, GroupingSpec};
use crate::prepare::{Grouping, index_file_name, prepare_scrapbook};
use crate::render::{SiteLayout, render_index, render_page};

/// A scrapbook and the names of its page list and annotation file.
#[derive(Debug, Clone, Copy)]
pub struct ScrapbookSource {
    pub id: u32,
    pub pages_file: &'static str,
    pub annotations_file: &'static str,
}

pub const SCRAPBOOKS: [ScrapbookSource; 3] = [
    ScrapbookSource {
        id: 1,
        pages_file: "pages.yaml",
        annotations_file: "annotations.yaml",
    },
    ScrapbookSource {
        id: 2,
        pages_file: "pages2.yaml",
        annotations_file: "annotations2.yaml",
    },
    ScrapbookSource {
        id: 3,
        pages_file: "pages3.yaml",
        annotations_file: "annotations3.yaml",
    },
];

#[derive(Debug, Clone)]
pub struct Scrapbook {
    pub id: u32,
    pub specs: Vec<GroupingSpec>,
    pub annotations: Annotations,
}

impl Scrapbook {
    pub fn load(dir: &Path, source: &ScrapbookSource) -> anyhow::Result<Self> {
        let pages_path = dir.join(source.pages_file);
        let pages_yaml = std::fs::read_to_string(&pages_path)
            .with_context(|| format!("read page list: {}", pages_path.display()))?;
        let specs: Vec<GroupingSpec> = serde_yaml::from_str(&pages_yaml)
            .with_context(|| format!("parse page list: {}", pages_path.display()))?;

        let annotations_path = dir.join(source.annotations_file);
        let annotations_yaml = std::fs::read_to_string(&annotations_path)
            .with_context(|| format!("read annotations: {}", annotations_path.display()))?;
        let annotations: Annotations = serde_yaml::from_str(&annotations_yaml)
            .with_context(|| format!("parse annotations: {}", annotations_path.display()))?;

        Ok(Self {
            id: source.id,
            specs,
            annotations,
        })
    }

    pub fn prepare(&self) -> anyhow::Result<Vec<Grouping>> {
        prepare_scrapbook(self.id, &self.specs, &self.annotations)
    }
}

pub fn generate(args: GenerateArgs) -> anyhow::Result<()> {
    let annotations_dir = PathBuf::from(&args.annotations);
    let out_dir = PathBuf::from(&args.out);
    let layout = SiteLayout {
        section: args.section.clone(),
        image_base_url: args.image_base_url.trim_end_matches('/').to_owned(),
    };

    std::fs::create_dir_all(&out_dir)
        .with_context(|| format!("create output dir: {}", out_dir.display()))?;

    let mut raw_articles = RawArticles::new();
    for source in &SCRAPBOOKS {
        let scrapbook = Scrapbook::load(&annotations_dir, source)
            .with_context(|| format!("load scrapbook {}", source.id))?;
        tracing::info!(
            scrapbook = scrapbook.id,
            groupings = scrapbook.specs.len(),
            "convert scrapbook"
        );
        let articles = convert_scrapbook(&layout, &out_dir, &scrapbook)
            .with_context(|| format!("convert scrapbook {}", scrapbook.id))?;
        raw_articles.extend(articles);
    }

    let raw_path = PathBuf::from(&args.raw_articles);
    raw_articles.write(&raw_path)?;
    println!("Articles: {}", raw_articles.len());

    Ok(())
}

/// Writes every page of one scrapbook plus its index, and returns the
/// articles collected from its pages.
pub fn convert_scrapbook(
    layout: &SiteLayout,
    out_dir: &Path,
    scrapbook: &Scrapbook,
) -> anyhow::Result<Vec<String>> {
    let groupings = scrapbook.prepare()?;

    let mut articles = Vec::new();
    for (idx, grouping) in groupings.iter().enumerate() {
        let page = render_page(layout, &groupings, idx, &scrapbook.annotations)
            .with_context(|| format!("render page: {}", grouping.pagename))?;
        let path = out_dir.join(grouping.file_name());
        std::fs::write(&path, page.markdown)
            .with_context(|| format!("write page: {}", path.display()))?;
        tracing::debug!(path = %path.display(), "wrote page");
        articles.extend(page.articles);
    }

    let index_md = render_index(layout, scrapbook.id, &groupings);
    let index_path = out_dir.join(index_file_name(scrapbook.id));
    std::fs::write(&index_path, index_md)
        .with_context(|| format!("write index: {}", index_path.display()))?;
    tracing::debug!(path = %index_path.display(), "wrote page");

    Ok(articles)
}

pub fn check(args: CheckArgs) -> anyhow::Result<()> {
    let annotations_dir = PathBuf::from(&args.annotations);
    for source in &SCRAPBOOKS {
        let scrapbook = Scrapbook::load(&annotations_dir, source)
            .with_context(|| format!("load scrapbook {}", source.id))?;
        let groupings = scrapbook
            .prepare()
            .with_context(|| format!("check scrapbook {}", scrapbook.id))?;
        println!("Scrapbook {}: {} pages", scrapbook.id, groupings.len());
    }
    Ok(())
}
