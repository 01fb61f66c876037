//! Keyword/tag filtering and naive relevance ranking.
//!
//! Every search is a full linear scan over the store; there is no index.
//! That is fine at the scale this service targets and is the first thing to
//! revisit if the article count grows large.

use std::cmp::Reverse;

use regex::{Regex, RegexBuilder};

use crate::models::{Article, SortBy};

/// Whether `article` belongs in the result set.
///
/// The keyword branch (case-sensitive substring of title or content) and the
/// tag branch (exact tag) are OR-ed: when both are given, matching either one
/// is enough.
pub fn matches(article: &Article, keyword: Option<&str>, tag: Option<&str>) -> bool {
    let keyword_hit = keyword
        .is_some_and(|k| article.title.contains(k) || article.content.contains(k));
    let tag_hit = tag.is_some_and(|t| article.tags.iter().any(|x| x == t));
    keyword_hit || tag_hit
}

/// Case-insensitive matcher for the literal keyword.
pub fn keyword_pattern(keyword: &str) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&regex::escape(keyword))
        .case_insensitive(true)
        .build()
}

/// Non-overlapping occurrences of `pattern` in title plus content.
pub fn relevance(article: &Article, pattern: &Regex) -> usize {
    pattern.find_iter(&article.title).count() + pattern.find_iter(&article.content).count()
}

/// Filter `articles` and, for relevance ordering with a keyword, sort them by
/// descending score. Ties keep store order.
pub fn filter_and_rank<'a, I>(
    articles: I,
    keyword: Option<&str>,
    tag: Option<&str>,
    sort_by: SortBy,
) -> Vec<Article>
where
    I: IntoIterator<Item = &'a Article>,
{
    let hits: Vec<Article> = articles
        .into_iter()
        .filter(|a| matches(a, keyword, tag))
        .cloned()
        .collect();

    let Some(keyword) = keyword else {
        return hits;
    };
    if sort_by != SortBy::Relevance {
        return hits;
    }

    let pattern = match keyword_pattern(keyword) {
        Ok(p) => p,
        Err(e) => {
            tracing::warn!("Cannot score keyword {:?}, keeping store order: {}", keyword, e);
            return hits;
        }
    };

    let mut scored: Vec<(usize, Article)> = hits
        .into_iter()
        .map(|a| (relevance(&a, &pattern), a))
        .collect();
    scored.sort_by_key(|(score, _)| Reverse(*score));
    scored.into_iter().map(|(_, a)| a).collect()
}
