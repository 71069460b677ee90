use maud::{html, Markup};

use crate::domain::search::{page_href, Page, SortOrder};

/// Previous/next links plus a window of page numbers around the current one.
pub fn pagination(
    path: &str,
    pairs: &[(&str, String)],
    sort: SortOrder,
    page: Page,
    total: i64,
) -> Markup {
    let last = page.total_pages(total);
    if last <= 1 {
        return html! {};
    }
    let current = page.number.min(last);
    let first_shown = current.saturating_sub(2).max(1);
    let last_shown = (current + 2).min(last);

    html! {
        nav class="pagination" aria-label="Paginación" {
            @if current > 1 {
                a href=(page_href(path, pairs, sort, current - 1)) rel="prev" { "Anterior" }
            }
            @for n in first_shown..=last_shown {
                @if n == current {
                    span class="current" aria-current="page" { (n) }
                } @else {
                    a href=(page_href(path, pairs, sort, n)) { (n) }
                }
            }
            @if current < last {
                a href=(page_href(path, pairs, sort, current + 1)) rel="next" { "Siguiente" }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_page_renders_nothing() {
        assert_eq!(pagination("/buscar", &[], SortOrder::Newest, Page::new(1), 20).into_string(), "");
    }

    #[test]
    fn middle_page_links_both_ways() {
        let html = pagination("/buscar", &[], SortOrder::Newest, Page::new(3), 200).into_string();
        assert!(html.contains(r#"href="/buscar?page=2" rel="prev""#));
        assert!(html.contains(r#"href="/buscar?page=4" rel="next""#));
        assert!(html.contains(r#"<span class="current" aria-current="page">3</span>"#));
        assert!(!html.contains("page=6"));
    }
}
