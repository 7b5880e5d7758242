use std::collections::HashSet;

use anyhow::Context as _;

use crate::dates::{format_title, merge_dates};
use crate::formats::{Annotations, GroupingSpec, PageId};

/// What a grouping spec turned out to be.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GroupingKind {
    Pages(Vec<PageId>),
    FrontCover,
    BackCover,
}

impl GroupingKind {
    pub fn classify(spec: &GroupingSpec) -> Option<Self> {
        if let Some(pages) = &spec.pages {
            return Some(Self::Pages(pages.clone()));
        }
        let img = spec.img.as_deref()?;
        if img.contains("front") {
            Some(Self::FrontCover)
        } else if img.contains("back") {
            Some(Self::BackCover)
        } else {
            None
        }
    }

    pub fn pages(&self) -> &[PageId] {
        match self {
            Self::Pages(pages) => pages,
            Self::FrontCover | Self::BackCover => &[],
        }
    }
}

/// One output page of a scrapbook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grouping {
    pub scrapbook: u32,
    pub kind: GroupingKind,
    pub pagename: String,
    pub weight: u32,
    pub date: String,
    pub summary: String,
    pub pagenums: String,
    pub title: String,
}

impl Grouping {
    /// File name of the rendered page, relative to the output directory.
    pub fn file_name(&self) -> String {
        page_file_name(self.scrapbook, &self.pagename)
    }
}

pub fn page_file_name(scrapbook: u32, pagename: &str) -> String {
    format!("scrapbook-{scrapbook}-{pagename}.md")
}

pub fn index_file_name(scrapbook: u32) -> String {
    page_file_name(scrapbook, "index")
}

pub fn grouping_weight(scrapbook: u32, index: usize) -> u32 {
    10000 * scrapbook + 1000 + index as u32
}

pub fn prepare_grouping(
    scrapbook: u32,
    index: usize,
    spec: &GroupingSpec,
    annotations: &Annotations,
) -> anyhow::Result<Grouping> {
    let kind = GroupingKind::classify(spec).ok_or_else(|| {
        anyhow::anyhow!("grouping {index} has no pages and no front/back image")
    })?;

    let (pagename, date, summary, pagenums) = match &kind {
        GroupingKind::Pages(pages) => {
            let pagename = pages
                .iter()
                .map(PageId::file_stem)
                .collect::<Vec<_>>()
                .join("-");

            let mut dates = Vec::new();
            let mut topics: Vec<&str> = Vec::new();
            for page in pages {
                let Some(ann) = annotations.page(page) else {
                    continue;
                };
                dates.push(ann.date());
                for topic in ann.topics() {
                    if !topics.contains(&topic) {
                        topics.push(topic);
                    }
                }
            }
            let date = merge_dates(dates.as_slice())
                .with_context(|| format!("merge dates for {pagename}"))?;

            let label = if pages.len() > 1 { "Pages" } else { "Page" };
            let numbers = pages
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join(", ");

            (pagename, date, topics.join(", "), format!("{label} {numbers}"))
        }
        GroupingKind::FrontCover => (
            "front".to_owned(),
            "N/A".to_owned(),
            "Front cover".to_owned(),
            "Front cover".to_owned(),
        ),
        GroupingKind::BackCover => (
            "back".to_owned(),
            "N/A".to_owned(),
            "Back cover".to_owned(),
            "Back cover".to_owned(),
        ),
    };

    let title = format_title(&date, &summary);
    Ok(Grouping {
        scrapbook,
        kind,
        pagename,
        weight: grouping_weight(scrapbook, index),
        date,
        summary,
        pagenums,
        title,
    })
}

/// Prepares every grouping of a scrapbook, in page-list order.
pub fn prepare_scrapbook(
    scrapbook: u32,
    specs: &[GroupingSpec],
    annotations: &Annotations,
) -> anyhow::Result<Vec<Grouping>> {
    let mut seen = HashSet::new();
    let mut groupings = Vec::with_capacity(specs.len());
    for (index, spec) in specs.iter().enumerate() {
        let grouping = prepare_grouping(scrapbook, index, spec, annotations)
            .with_context(|| format!("prepare grouping {index} of scrapbook {scrapbook}"))?;
        if !seen.insert(grouping.pagename.clone()) {
            anyhow::bail!(
                "duplicate page name in scrapbook {scrapbook}: {}",
                grouping.pagename
            );
        }
        tracing::info!(
            path = %grouping.file_name(),
            date = %grouping.date,
            summary = %grouping.summary,
            "prepared page"
        );
        groupings.push(grouping);
    }
    Ok(groupings)
}
