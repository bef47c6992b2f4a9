//! URL query string codec for [`FilterCriteria`].
//!
//! Parameters: `category` (omitted = all), `sortby` (`asc`/`desc`), `keyword`
//! (omitted = none), `page` (1-based, omitted = 1). Unknown parameters are ignored and
//! the first occurrence of a repeated parameter wins.

use tracing::debug;
use url::form_urlencoded;

use super::CriteriaParseError;
use crate::model::{CategoryFilter, FilterCriteria, SortOrder};

pub const CATEGORY_PARAM: &str = "category";
pub const SORT_PARAM: &str = "sortby";
pub const KEYWORD_PARAM: &str = "keyword";
pub const PAGE_PARAM: &str = "page";

/// First raw value of each recognised parameter.
#[derive(Debug, Default)]
struct RawParams {
    category: Option<String>,
    sort: Option<String>,
    keyword: Option<String>,
    page: Option<String>,
}

impl RawParams {
    fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut raw = Self::default();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = match &*key {
                CATEGORY_PARAM => &mut raw.category,
                SORT_PARAM => &mut raw.sort,
                KEYWORD_PARAM => &mut raw.keyword,
                PAGE_PARAM => &mut raw.page,
                _ => continue,
            };
            if slot.is_none() {
                *slot = Some(value.into_owned());
            }
        }
        raw
    }
}

fn parse_page(value: &str) -> Result<u32, CriteriaParseError> {
    match value.trim().parse::<u32>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(CriteriaParseError::InvalidPage(value.to_string())),
    }
}

fn parse_keyword(value: Option<String>) -> String {
    value.map(|k| k.trim().to_string()).unwrap_or_default()
}

impl FilterCriteria {
    /// Reads criteria from a URL query string, with or without the leading `?`.
    ///
    /// Fails open: malformed values fall back to the field default and are logged.
    pub fn parse(query: &str) -> Self {
        let raw = RawParams::from_query(query);

        let sort_order = match raw.sort.as_deref().map(str::parse::<SortOrder>) {
            Some(Ok(order)) => order,
            Some(Err(e)) => {
                debug!(error = %e, "Falling back to default sort order");
                SortOrder::default()
            }
            None => SortOrder::default(),
        };
        let page = match raw.page.as_deref().map(parse_page) {
            Some(Ok(page)) => page,
            Some(Err(e)) => {
                debug!(error = %e, "Falling back to first page");
                1
            }
            None => 1,
        };

        Self {
            category: raw.category.map(CategoryFilter::named).unwrap_or_default(),
            sort_order,
            keyword: parse_keyword(raw.keyword),
            page,
        }
    }

    /// Strict variant of [`FilterCriteria::parse`] that reports the first malformed value.
    pub fn try_parse(query: &str) -> Result<Self, CriteriaParseError> {
        let raw = RawParams::from_query(query);
        Ok(Self {
            category: raw.category.map(CategoryFilter::named).unwrap_or_default(),
            sort_order: raw
                .sort
                .as_deref()
                .map(str::parse::<SortOrder>)
                .transpose()?
                .unwrap_or_default(),
            keyword: parse_keyword(raw.keyword),
            page: raw.page.as_deref().map(parse_page).transpose()?.unwrap_or(1),
        })
    }

    /// Writes criteria as a query string (without the leading `?`).
    ///
    /// `sortby` is always present, so serializing the defaults yields `sortby=asc`;
    /// only [`NavigationWriter::write_empty`](crate::navigation::NavigationWriter::write_empty)
    /// produces a bare path.
    pub fn serialize(&self) -> String {
        let mut out = form_urlencoded::Serializer::new(String::new());
        if let Some(name) = self.category.as_param() {
            out.append_pair(CATEGORY_PARAM, name);
        }
        out.append_pair(SORT_PARAM, self.sort_order.as_str());
        if !self.keyword.is_empty() {
            out.append_pair(KEYWORD_PARAM, &self.keyword);
        }
        if self.page > 1 {
            out.append_pair(PAGE_PARAM, &self.page.to_string());
        }
        out.finish()
    }
}
