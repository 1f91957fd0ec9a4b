use serde::Serialize;
use thiserror::Error;

/// Number of numeric markers a paginator shows before the range collapses
/// around gap markers.
pub const DEFAULT_MAX_VISIBLE: u32 = 5;

/// One displayable unit in a paginator: a clickable page number or a
/// non-interactive ellipsis placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "page", rename_all = "snake_case")]
pub enum PageMarker {
    Number(u32),
    Gap,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PageRangeError {
    #[error("page {current} is out of range for {total} total pages")]
    InvalidInput { current: u32, total: u32 },
}

/// Ordered sequence of page markers for a paginator control: both edge pages
/// stay visible and a sliding window tracks the current page, with runs of
/// hidden pages collapsed into [`PageMarker::Gap`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRange {
    current: u32,
    total: u32,
    markers: Vec<PageMarker>,
}

impl PageRange {
    pub fn new(current: u32, total: u32) -> Result<Self, PageRangeError> {
        Self::with_max_visible(current, total, DEFAULT_MAX_VISIBLE)
    }

    /// Compute the marker sequence for a window of at most `max_visible`
    /// numeric markers before collapsing. `max_visible` values below
    /// [`DEFAULT_MAX_VISIBLE`] are raised to it: the collapsed layouts need
    /// room for both edge anchors, and anything narrower would break the
    /// no-duplicate guarantee.
    ///
    /// `current` must lie in `1..=total`; anything else is
    /// [`PageRangeError::InvalidInput`]. A `total` of zero yields an empty
    /// sequence without validating `current`.
    pub fn with_max_visible(
        current: u32,
        total: u32,
        max_visible: u32,
    ) -> Result<Self, PageRangeError> {
        if total == 0 {
            return Ok(Self {
                current,
                total,
                markers: Vec::new(),
            });
        }
        if current < 1 || current > total {
            return Err(PageRangeError::InvalidInput { current, total });
        }

        let max_visible = max_visible.max(DEFAULT_MAX_VISIBLE);
        let mut markers = Vec::new();

        if total <= max_visible {
            markers.extend((1..=total).map(PageMarker::Number));
            return Ok(Self {
                current,
                total,
                markers,
            });
        }

        // Anchored layouts show max_visible - 1 numbers at the near edge.
        // At the default of 5 these reduce to the 4 / 3 / total - 2 /
        // total - 3 constants of the classic five-slot paginator.
        let edge_run = max_visible - 1;
        let near_edge = max_visible - 2;

        if current <= near_edge {
            markers.extend((1..=edge_run).map(PageMarker::Number));
            markers.push(PageMarker::Gap);
            markers.push(PageMarker::Number(total));
        } else if current >= total - (near_edge - 1) {
            markers.push(PageMarker::Number(1));
            markers.push(PageMarker::Gap);
            markers.extend((total - edge_run + 1..=total).map(PageMarker::Number));
        } else {
            markers.push(PageMarker::Number(1));
            markers.push(PageMarker::Gap);
            markers.extend((current - 1..=current + 1).map(PageMarker::Number));
            markers.push(PageMarker::Gap);
            markers.push(PageMarker::Number(total));
        }

        Ok(Self {
            current,
            total,
            markers,
        })
    }

    pub fn current(&self) -> u32 {
        self.current
    }

    pub fn total(&self) -> u32 {
        self.total
    }

    pub fn markers(&self) -> &[PageMarker] {
        &self.markers
    }

    pub fn has_previous(&self) -> bool {
        self.current > 1
    }

    pub fn has_next(&self) -> bool {
        self.current < self.total
    }

    pub fn previous_href<F: PageLink>(&self, links: &F) -> Option<String> {
        self.has_previous().then(|| links.href(self.current - 1))
    }

    pub fn next_href<F: PageLink>(&self, links: &F) -> Option<String> {
        self.has_next().then(|| links.href(self.current + 1))
    }

    /// Render the markers through an injected link format. Numbers become
    /// links with an `active` flag on the current page; gaps stay inert.
    pub fn links<F: PageLink>(&self, links: &F) -> Vec<PageLinkItem> {
        self.markers
            .iter()
            .map(|&marker| PageLinkItem {
                marker,
                href: match marker {
                    PageMarker::Number(page) => Some(links.href(page)),
                    PageMarker::Gap => None,
                },
                active: marker == PageMarker::Number(self.current),
            })
            .collect()
    }
}

/// Link construction for a page number, injected so the range computation
/// stays free of URL concerns and alternate schemes can be swapped in.
pub trait PageLink {
    fn href(&self, page: u32) -> String;
}

/// `{base}{n}` links, the path-segment scheme of `/blog/2` style indexes.
/// The base is treated as an opaque prefix.
#[derive(Debug, Clone)]
pub struct PathSegmentLinks {
    base: String,
}

impl PathSegmentLinks {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }
}

impl PageLink for PathSegmentLinks {
    fn href(&self, page: u32) -> String {
        format!("{}{}", self.base, page)
    }
}

/// `{base}?{param}={n}` links for query-driven consumers.
#[derive(Debug, Clone)]
pub struct QueryParamLinks {
    base: String,
    param: String,
}

impl QueryParamLinks {
    pub fn new(base: impl Into<String>, param: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            param: param.into(),
        }
    }
}

impl PageLink for QueryParamLinks {
    fn href(&self, page: u32) -> String {
        format!("{}?{}={}", self.base, self.param, page)
    }
}

/// One rendered paginator entry: the marker plus its href and active flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageLinkItem {
    #[serde(flatten)]
    pub marker: PageMarker,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub href: Option<String>,
    pub active: bool,
}
