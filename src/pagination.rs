//! Pagination over the ordered visible list

use serde::Serialize;

use crate::types::ItemId;

/// One page of the ordered visible items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PageView {
    /// 1-based page number, clamped into range
    pub page: usize,
    /// Always at least 1, even for an empty list
    pub total_pages: usize,
    pub per_page: usize,
    /// Position of the first item of this page in the ordered list
    pub offset: usize,
    pub items: Vec<ItemId>,
}

impl PageView {
    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }
}

/// Slice `ordered` into the requested page. A `per_page` of 0 disables paging.
pub fn paginate(ordered: &[ItemId], per_page: usize, requested: usize) -> PageView {
    if per_page == 0 {
        return PageView {
            page: 1,
            total_pages: 1,
            per_page: ordered.len(),
            offset: 0,
            items: ordered.to_vec(),
        };
    }

    let total_pages = ordered.len().div_ceil(per_page).max(1);
    let page = requested.clamp(1, total_pages);
    let offset = (page - 1) * per_page;
    let end = (offset + per_page).min(ordered.len());

    PageView {
        page,
        total_pages,
        per_page,
        offset,
        items: ordered[offset.min(end)..end].to_vec(),
    }
}
