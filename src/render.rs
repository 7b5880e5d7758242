use crate::formats::Annotations;
use crate::prepare::{Grouping, index_file_name};
use crate::text::{NOTE_MARKER, demote_headings, escape_str};

const GENERATED_BY: &str = "# Generated by scrapbook-posts";

/// Where rendered pages live on the site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteLayout {
    /// Content section used in internal links (`@/<section>/...`).
    pub section: String,
    /// Prefix for `og_image` URLs.
    pub image_base_url: String,
}

impl Default for SiteLayout {
    fn default() -> Self {
        Self {
            section: "space".to_owned(),
            image_base_url: "https://zaynar.co.uk/images".to_owned(),
        }
    }
}

impl SiteLayout {
    fn link(&self, file_name: &str) -> String {
        format!("@/{}/{file_name}", self.section)
    }
}

#[derive(Debug, Clone)]
pub struct RenderedPage {
    pub markdown: String,
    /// Trimmed text of every non-note article on the page.
    pub articles: Vec<String>,
}

pub fn render_page(
    layout: &SiteLayout,
    groupings: &[Grouping],
    index: usize,
    annotations: &Annotations,
) -> anyhow::Result<RenderedPage> {
    let page = groupings
        .get(index)
        .ok_or_else(|| anyhow::anyhow!("grouping index out of range: {index}"))?;
    let num = page.scrapbook;

    let mut md = String::new();
    md.push_str("+++\n");
    md.push_str(GENERATED_BY);
    md.push('\n');
    md.push_str(&format!(
        "title = \"Scrapbook {num}: {}\"\n",
        escape_str(&page.title)
    ));
    md.push_str(&format!(
        "description = \"Space newspaper clippings. {}\"\n",
        escape_str(&page.summary)
    ));
    md.push_str(&format!("weight = {}\n", page.weight));
    md.push_str("[extra]\n");
    md.push_str(&format!(
        "og_image = \"{}/scrapbook-{num}/{}.jpg\"\n",
        layout.image_base_url, page.pagename
    ));
    md.push_str("+++\n");

    let nav = render_nav(layout, groupings, index);
    md.push_str(&nav);

    md.push_str("<section class=\"scrapbook-page\">\n\n");
    md.push_str(&format!(
        "{{{{ scrapbookphoto(src=\"{}.jpg\",photopage=\"scrapbook-{num}\") }}}}\n\n",
        page.pagename
    ));

    let mut articles = Vec::new();
    for page_id in page.kind.pages() {
        let Some(ann) = annotations.page(page_id) else {
            continue;
        };
        for article in &ann.articles {
            match article.text.strip_prefix(NOTE_MARKER) {
                Some(note) => {
                    md.push_str("<section class=\"scrapbook-note\">\n\n");
                    md.push_str("NOTE: ");
                    md.push_str(&demote_headings(note.trim()));
                    md.push_str("\n\n</section>\n\n");
                }
                None => {
                    let text = article.text.trim();
                    md.push_str("<section class=\"scrapbook-article\">\n\n");
                    md.push_str(&demote_headings(text));
                    md.push_str("\n\n</section>\n\n");
                    articles.push(text.to_owned());
                }
            }
        }
    }

    md.push_str("</section>\n\n");
    md.push_str(&nav);

    Ok(RenderedPage {
        markdown: md,
        articles,
    })
}

fn render_nav(layout: &SiteLayout, groupings: &[Grouping], index: usize) -> String {
    let num = groupings[index].scrapbook;

    let prev = match index.checked_sub(1).and_then(|i| groupings.get(i)) {
        Some(prev) => format!("[Prev]({})", layout.link(&prev.file_name())),
        None => "Prev".to_owned(),
    };
    let home = format!("[Index]({})", layout.link(&index_file_name(num)));
    let next = match groupings.get(index + 1) {
        Some(next) => format!("[Next]({})", layout.link(&next.file_name())),
        None => "Next".to_owned(),
    };

    format!("{prev} | {home} | {next}\n\n")
}

/// Index page for one scrapbook: a photo grid followed by a plain list of
/// links, both in grouping order.
pub fn render_index(layout: &SiteLayout, scrapbook: u32, groupings: &[Grouping]) -> String {
    let num = scrapbook;

    let mut md = String::new();
    md.push_str("+++\n");
    md.push_str(GENERATED_BY);
    md.push('\n');
    md.push_str(&format!("title = \"Scrapbook {num}\"\n"));
    md.push_str("description = \"Space newspaper clippings.\"\n");
    md.push_str(&format!("weight = {}\n", 10000 * num));
    md.push_str("+++\n");

    md.push_str("<section class=scrapbook-index-photos>\n");
    for page in groupings {
        md.push_str(&format!(
            "{{{{ scrapbookindexphoto(photopage=\"scrapbook-{num}\",pagename=\"scrapbook-{num}-{name}\",src=\"{name}.jpg\",title=`{title}`) }}}}\n",
            name = page.pagename,
            title = page.title,
        ));
    }
    md.push_str("</section>\n");

    md.push_str("<section class=scrapbook-index-text>\n\n");
    for page in groupings {
        md.push_str(&format!(
            "* [{}]({})\n",
            page.title,
            layout.link(&page.file_name())
        ));
    }
    md.push_str("\n</section>\n");

    md
}
