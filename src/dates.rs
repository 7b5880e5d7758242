use crate::text::expand_dashes;

/// Date pairs that show up when two annotated pages share one scan, and the
/// date the combined post should carry. Extend this when new pairs appear in
/// the annotations.
const RECONCILED_DATES: &[(&str, &str, &str)] = &[
    ("Aug 1961", "Aug 1961; Apr 1962?", "Aug 1961; Apr 1962?"),
    ("Aug 1961", "1961", "1961"),
    ("Nov 1961", "Oct--Nov 1961", "Oct--Nov 1961"),
    ("Nov 1961", "Dec? 1961--Jan 1962", "Nov 1961--Jan 1962"),
    ("Jan 1962", "1962", "1962"),
    ("Apr--May 1962", "1962", "1962"),
    ("1962", "1961--1962", "1961--1962"),
    ("1962", "1962?", "1962?"),
];

/// Combines the dates of the pages in one scan into a date (or range) for the
/// post. Fails on any pair that is not known to reconcile.
pub fn merge_dates<S: AsRef<str>>(dates: &[S]) -> anyhow::Result<String> {
    let dates = dates.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
    match dates.as_slice() {
        [] => Ok("Unknown".to_owned()),
        [only] => Ok((*only).to_owned()),
        [first, second, ..] if first == second => Ok((*first).to_owned()),
        ["", second, ..] => Ok((*second).to_owned()),
        [first, second] => RECONCILED_DATES
            .iter()
            .find(|(a, b, _)| a == first && b == second)
            .map(|(_, _, merged)| (*merged).to_owned())
            .ok_or_else(|| anyhow::anyhow!("unrecognized date pair: {dates:?}")),
        _ => anyhow::bail!("unrecognized date pair: {dates:?}"),
    }
}

/// Title shown for a post: the summary alone for undated pages, otherwise
/// `"{date} --- {summary}"`, with dashes expanded.
pub fn format_title(date: &str, summary: &str) -> String {
    if date == "N/A" || date.is_empty() {
        expand_dashes(summary)
    } else {
        expand_dashes(&format!("{date} --- {summary}"))
    }
}
