use serde::Serialize;

/// Pages kept at each end of the window.
const EDGE_PAGES: usize = 2;
/// Pages kept on each side of the current page.
const SURROUNDING_PAGES: usize = 3;

/// Builds the ellipsized page-number strip: the first and last
/// [`EDGE_PAGES`] pages plus a window around the current page, with `None`
/// marking each collapsed gap.
fn page_window(total_pages: usize, current: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let mut window = Vec::new();
    let mut previous = 0;

    for page in 1..=total_pages {
        let near_start = page <= EDGE_PAGES;
        let near_end = page > total_pages.saturating_sub(EDGE_PAGES);
        let near_current = page >= current.saturating_sub(SURROUNDING_PAGES)
            && page <= current + SURROUNDING_PAGES;

        if near_start || near_end || near_current {
            if previous != 0 && page > previous + 1 {
                window.push(None);
            }
            window.push(Some(page));
            previous = page;
        }
    }

    window
}

/// One page of items plus the navigation strip rendered under the grid.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total_pages: usize) -> Self {
        let page = current_page.max(1);

        Self {
            items,
            pages: page_window(total_pages, page),
            page,
            total_pages,
        }
    }
}
