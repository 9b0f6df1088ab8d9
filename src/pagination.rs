//! Pagination Helpers
//!
//! Page arithmetic and the visible page-link window.

/// Page sizes offered by the board
pub const PAGE_SIZE_OPTIONS: [u32; 4] = [12, 24, 48, 96];

pub fn total_pages(total_items: u64, per_page: u32) -> u32 {
    if per_page == 0 {
        return 0;
    }
    let pages = total_items.div_ceil(u64::from(per_page));
    u32::try_from(pages).unwrap_or(u32::MAX)
}

/// Target page if it lies in `[1, total_pages]`, otherwise None (no-op)
pub fn go_to_page(target: i64, total_pages: u32) -> Option<u32> {
    if target < 1 || target > i64::from(total_pages) {
        return None;
    }
    u32::try_from(target).ok()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageLink {
    Page { number: u32, active: bool },
    Ellipsis,
}

/// Links shown between the previous/next buttons: first page, leading
/// ellipsis, the current page with its neighbours, trailing ellipsis, last
/// page.
pub fn page_links(page: u32, total_pages: u32) -> Vec<PageLink> {
    let mut links = Vec::new();
    let page = i64::from(page);
    let total = i64::from(total_pages);
    let link = |number: i64, active: bool| PageLink::Page { number: number as u32, active };

    if page > 2 {
        links.push(link(1, false));
    }
    if page > 3 {
        links.push(PageLink::Ellipsis);
    }
    if page > 1 {
        links.push(link(page - 1, false));
    }
    links.push(link(page, true));
    if page < total {
        links.push(link(page + 1, false));
    }
    if page < total - 2 {
        links.push(PageLink::Ellipsis);
    }
    if page < total - 1 {
        links.push(link(total, false));
    }
    links
}
