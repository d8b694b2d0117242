//! Filter, sort and paginate a collection for a list page
//!
//! The pipeline is a pure function of the entities and a [`ListQuery`]:
//! status filter, then search, then sort, then page slice. Pages recompute
//! it on every draw instead of updating anything incrementally.

use super::compare::{compare_values, natural_cmp, SortValue};
use super::debounce::{DebouncedInput, DEFAULT_DEBOUNCE};
use super::normalize::normalize;
use std::cmp::Ordering;
use std::time::{Duration, Instant};

/// Default page size for list pages
pub const DEFAULT_ITEMS_PER_PAGE: usize = 50;

/// Anything a list page can show
pub trait Listable {
    fn id(&self) -> &str;

    /// Value compared against the status filter
    fn status(&self) -> &str;

    /// Column value by key, `None` for unknown keys
    fn field(&self, key: &str) -> Option<SortValue<'_>>;
}

/// Sort direction; repeated clicks cycle asc, desc, unsorted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
    Unsorted,
}

impl SortDirection {
    pub fn next(&self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Unsorted,
            Self::Unsorted => Self::Asc,
        }
    }

    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
            Self::Unsorted => "",
        }
    }

    /// Name used in the config file; inverse of `parse`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Asc => "asc",
            Self::Desc => "desc",
            Self::Unsorted => "none",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "asc" => Some(Self::Asc),
            "desc" => Some(Self::Desc),
            "none" => Some(Self::Unsorted),
            _ => None,
        }
    }
}

/// The single active sort column
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: String,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn new(key: &str, direction: SortDirection) -> Self {
        Self {
            key: key.to_string(),
            direction,
        }
    }

    /// Column header click: same key cycles the direction, a new key starts at asc
    pub fn toggle(&mut self, key: &str) {
        if self.key == key {
            self.direction = self.direction.next();
        } else {
            self.key = key.to_string();
            self.direction = SortDirection::Asc;
        }
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.key == key && self.direction != SortDirection::Unsorted
    }
}

/// Status chip selection
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn matches(&self, status: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(wanted) => wanted == status,
        }
    }
}

/// Everything the pipeline needs besides the entities
#[derive(Debug, Clone, PartialEq)]
pub struct ListQuery {
    pub search_term: String,
    pub status_filter: StatusFilter,
    pub sort: SortConfig,
    pub page: usize,
    pub page_size: usize,
}

/// One page of results
#[derive(Debug)]
pub struct Page<'a, T> {
    pub items: Vec<&'a T>,
    pub total_pages: usize,
}

/// Output of the whole pipeline
#[derive(Debug)]
pub struct ListView<'a, T> {
    pub items: Vec<&'a T>,
    pub page: usize,
    pub total_pages: usize,
    pub filtered_count: usize,
}

/// True when `term` matches any of `fields`.
///
/// Per field, either the whole normalized term is a substring, or every
/// whitespace-separated token is (in any order). An empty term matches.
pub fn matches_search<T: Listable>(entity: &T, term: &str, fields: &[&str]) -> bool {
    let term = normalize(term);
    if term.is_empty() {
        return true;
    }
    let tokens: Vec<&str> = term.split_whitespace().collect();

    fields.iter().any(|key| {
        entity.field(key).is_some_and(|value| {
            let haystack = normalize(&value.as_search_text());
            haystack.contains(&term) || tokens.iter().all(|token| haystack.contains(token))
        })
    })
}

pub fn filter_by_status<'a, T: Listable>(items: Vec<&'a T>, filter: &StatusFilter) -> Vec<&'a T> {
    match filter {
        StatusFilter::All => items,
        StatusFilter::Only(_) => items
            .into_iter()
            .filter(|item| filter.matches(item.status()))
            .collect(),
    }
}

/// Stable sort into a new vector. Unknown keys and `Unsorted` leave the order as is.
///
/// Ties are broken by id so descending order is the exact reverse of ascending.
/// Items without the key go last when ascending and therefore first when descending.
pub fn sort_by<'a, T: Listable>(items: &[&'a T], config: &SortConfig) -> Vec<&'a T> {
    let mut sorted = items.to_vec();
    if config.direction == SortDirection::Unsorted {
        return sorted;
    }
    if !items.iter().any(|item| item.field(&config.key).is_some()) {
        tracing::trace!(key = %config.key, "sort key not present, leaving order unchanged");
        return sorted;
    }

    sorted.sort_by(|a, b| {
        let ord = match (a.field(&config.key), b.field(&config.key)) {
            (Some(va), Some(vb)) => compare_values(&va, &vb),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
        .then_with(|| natural_cmp(a.id(), b.id()));

        match config.direction {
            SortDirection::Desc => ord.reverse(),
            _ => ord,
        }
    });
    sorted
}

pub fn total_pages(count: usize, page_size: usize) -> usize {
    count.div_ceil(page_size.max(1))
}

/// Slice `[(page-1)*size, page*size)`; pages past the end are empty
pub fn paginate<'a, T>(items: &[&'a T], page: usize, page_size: usize) -> Page<'a, T> {
    let page_size = page_size.max(1);
    let start = page.saturating_sub(1).saturating_mul(page_size).min(items.len());
    let end = start.saturating_add(page_size).min(items.len());
    Page {
        items: items[start..end].to_vec(),
        total_pages: total_pages(items.len(), page_size),
    }
}

/// status filter → search → sort → paginate
pub fn run<'a, T: Listable>(
    entities: &'a [T],
    query: &ListQuery,
    search_fields: &[&str],
) -> ListView<'a, T> {
    let by_status = filter_by_status(entities.iter().collect(), &query.status_filter);
    let searched: Vec<&T> = by_status
        .into_iter()
        .filter(|entity| matches_search(*entity, &query.search_term, search_fields))
        .collect();
    let sorted = sort_by(&searched, &query.sort);
    let page = paginate(&sorted, query.page, query.page_size);

    ListView {
        items: page.items,
        page: query.page,
        total_pages: page.total_pages,
        filtered_count: sorted.len(),
    }
}

/// A table column: sort key plus header
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    pub key: &'static str,
    pub label: &'static str,
    pub width: u16,
}

impl Column {
    pub const fn new(key: &'static str, label: &'static str, width: u16) -> Self {
        Self { key, label, width }
    }
}

/// Static description of one entity list
#[derive(Debug, Clone)]
pub struct ListConfig {
    pub columns: Vec<Column>,
    pub search_fields: Vec<&'static str>,
    /// Status chips offered besides "all"
    pub statuses: Vec<&'static str>,
    pub default_sort: SortConfig,
}

/// Per-page handler state: search box, filter chips, sort header, pager
#[derive(Debug, Clone)]
pub struct ListState {
    pub search: DebouncedInput,
    pub status_filter: StatusFilter,
    pub sort: SortConfig,
    pub current_page: usize,
    pub items_per_page: usize,
    /// Row highlighted within the current page
    pub selected_index: usize,
    reset_page_on_filter: bool,
}

impl Default for ListState {
    fn default() -> Self {
        Self::new(
            DEFAULT_ITEMS_PER_PAGE,
            DEFAULT_DEBOUNCE,
            SortConfig::default(),
            true,
        )
    }
}

impl ListState {
    pub fn new(
        items_per_page: usize,
        debounce: Duration,
        sort: SortConfig,
        reset_page_on_filter: bool,
    ) -> Self {
        Self {
            search: DebouncedInput::new(debounce),
            status_filter: StatusFilter::All,
            sort,
            current_page: 1,
            items_per_page: items_per_page.max(1),
            selected_index: 0,
            reset_page_on_filter,
        }
    }

    pub fn query(&self) -> ListQuery {
        ListQuery {
            search_term: self.search.committed().to_string(),
            status_filter: self.status_filter.clone(),
            sort: self.sort.clone(),
            page: self.current_page,
            page_size: self.items_per_page,
        }
    }

    /// Run the pipeline for this page's current query
    pub fn view<'a, T: Listable>(&self, entities: &'a [T], config: &ListConfig) -> ListView<'a, T> {
        run(entities, &self.query(), &config.search_fields)
    }

    /// Drive the search debounce; returns true when the filter changed
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.search.poll(now) {
            self.filters_changed();
            return true;
        }
        false
    }

    pub fn search_input(&mut self, c: char, now: Instant) {
        self.search.push_char(c, now);
    }

    pub fn search_backspace(&mut self, now: Instant) {
        self.search.pop_char(now);
    }

    /// Commit the search box without waiting for the debounce
    pub fn submit_search(&mut self) {
        if self.search.flush() {
            self.filters_changed();
        }
    }

    pub fn clear_search(&mut self) {
        self.search.clear();
        self.filters_changed();
    }

    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        if self.status_filter != filter {
            self.status_filter = filter;
            self.filters_changed();
        }
    }

    /// Step through "all" followed by each configured status
    pub fn cycle_status_filter(&mut self, statuses: &[&str]) {
        let next = match &self.status_filter {
            StatusFilter::All => statuses.first().map(|s| StatusFilter::Only(s.to_string())),
            StatusFilter::Only(current) => statuses
                .iter()
                .position(|s| s == current)
                .and_then(|i| statuses.get(i + 1))
                .map(|s| StatusFilter::Only(s.to_string())),
        };
        self.set_status_filter(next.unwrap_or_default());
    }

    pub fn toggle_sort(&mut self, key: &str) {
        self.sort.toggle(key);
        self.filters_changed();
    }

    /// Navigate to `page`; out-of-range requests are ignored
    pub fn go_to_page(&mut self, page: usize, total_pages: usize) -> bool {
        if page < 1 || page > total_pages.max(1) {
            tracing::debug!(page, total_pages, "page request out of range");
            return false;
        }
        self.current_page = page;
        self.selected_index = 0;
        true
    }

    pub fn next_page(&mut self, total_pages: usize) -> bool {
        self.go_to_page(self.current_page + 1, total_pages)
    }

    pub fn prev_page(&mut self, total_pages: usize) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1), total_pages)
    }

    /// Pull the page back into range after the underlying data shrank
    pub fn clamp_page(&mut self, total_pages: usize) {
        let last = total_pages.max(1);
        if self.current_page > last {
            self.current_page = last;
            self.selected_index = 0;
        }
    }

    pub fn move_selection_down(&mut self, page_len: usize) {
        if page_len > 0 && self.selected_index < page_len - 1 {
            self.selected_index += 1;
        }
    }

    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Cancel timers owned by this page
    pub fn teardown(&mut self) {
        self.search.teardown();
    }

    fn filters_changed(&mut self) {
        self.selected_index = 0;
        if self.reset_page_on_filter {
            self.current_page = 1;
        }
    }
}
