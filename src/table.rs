//! Client-style table handling shared by every dashboard list: a comparator
//! sort with a per-column direction toggle, a case-insensitive substring
//! filter and fixed-size page slicing with a clamped page index.

use std::cmp::Ordering;
use std::str::FromStr;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// A cell value as the comparator sees it.
#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    Number(Decimal),
    Date(NaiveDate),
    Text(String),
    Flag(bool),
}

impl SortKey {
    pub fn text(value: &str) -> Self {
        SortKey::Text(value.to_lowercase())
    }

    /// Display strings such as `"2,199"` or `"$1,299.00"` sort as numbers;
    /// anything else falls back to case-insensitive text.
    pub fn from_display(value: &str) -> Self {
        let digits: String = value
            .trim()
            .chars()
            .filter(|c| !matches!(c, ',' | '$' | ' '))
            .collect();
        match Decimal::from_str(&digits) {
            Ok(number) if !digits.is_empty() => SortKey::Number(number),
            _ => Self::text(value),
        }
    }

    fn rank(&self) -> u8 {
        match self {
            SortKey::Number(_) => 0,
            SortKey::Date(_) => 1,
            SortKey::Flag(_) => 2,
            SortKey::Text(_) => 3,
        }
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(match (self, other) {
            (SortKey::Number(a), SortKey::Number(b)) => a.cmp(b),
            (SortKey::Date(a), SortKey::Date(b)) => a.cmp(b),
            (SortKey::Text(a), SortKey::Text(b)) => a.cmp(b),
            (SortKey::Flag(a), SortKey::Flag(b)) => a.cmp(b),
            // mixed kinds in one column: numbers first, text last
            (a, b) => a.rank().cmp(&b.rank()),
        })
    }
}

/// A row type that can be shown in a sortable, searchable table.
pub trait TableRow {
    /// Column names accepted by `sort_key`.
    const COLUMNS: &'static [&'static str];
    const DEFAULT_SORT: (&'static str, SortDirection);

    fn sort_key(&self, column: &str) -> Option<SortKey>;

    /// Fields the search box matches against.
    fn search_fields(&self) -> Vec<&str>;
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SortState {
    pub column: String,
    pub direction: SortDirection,
}

impl SortState {
    pub fn default_for<R: TableRow>() -> Self {
        let (column, direction) = R::DEFAULT_SORT;
        Self { column: column.to_string(), direction }
    }

    /// Header click: same column flips direction, another column starts ascending.
    pub fn toggle(&mut self, column: &str) {
        if self.column == column {
            self.direction = self.direction.flipped();
        } else {
            self.column = column.to_string();
            self.direction = SortDirection::Asc;
        }
    }
}

/// Query-string form of a table request, e.g. `?sort=price&dir=desc&q=mac&page=2`.
///
/// `toggle` applies a header click on top of `sort`/`dir`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TableQuery {
    pub sort: Option<String>,
    pub dir: Option<SortDirection>,
    pub toggle: Option<String>,
    #[serde(default)]
    pub q: String,
    pub page: Option<usize>,
}

impl TableQuery {
    pub fn into_view<R: TableRow>(self) -> AppResult<TableView> {
        let mut sort = SortState::default_for::<R>();
        if let Some(column) = self.sort {
            sort.column = column;
            sort.direction = self.dir.unwrap_or_default();
        } else if let Some(dir) = self.dir {
            sort.direction = dir;
        }
        if let Some(column) = self.toggle {
            sort.toggle(&column);
        }
        if !R::COLUMNS.contains(&sort.column.as_str()) {
            return Err(AppError::UnknownSortColumn(sort.column));
        }
        Ok(TableView {
            sort,
            filter: self.q,
            page: self.page.unwrap_or(1),
        })
    }
}

/// Sort, filter and page position of one table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableView {
    pub sort: SortState,
    pub filter: String,
    pub page: usize,
}

impl TableView {
    pub fn new<R: TableRow>() -> Self {
        Self {
            sort: SortState::default_for::<R>(),
            filter: String::new(),
            page: 1,
        }
    }

    pub fn click_header(&mut self, column: &str) {
        self.sort.toggle(column);
    }

    pub fn set_filter(&mut self, filter: impl Into<String>) {
        self.filter = filter.into();
        self.page = 1;
    }

    pub fn go_to(&mut self, page: usize) {
        self.page = page;
    }

    pub fn apply<'a, R: TableRow>(&self, rows: &'a [R], page_size: usize) -> Page<&'a R> {
        let needle = self.filter.trim().to_lowercase();
        let mut matched: Vec<&R> = rows
            .iter()
            .filter(|row| matches_filter(*row, &needle))
            .collect();

        sort_rows(&mut matched, &self.sort);
        paginate(matched, self.page, page_size, self.sort.clone())
    }
}

fn matches_filter<R: TableRow>(row: &R, needle: &str) -> bool {
    needle.is_empty()
        || row
            .search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
}

pub fn sort_rows<R: TableRow>(rows: &mut [&R], sort: &SortState) {
    rows.sort_by(|a, b| {
        let ord = match (a.sort_key(&sort.column), b.sort_key(&sort.column)) {
            (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        match sort.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    });
}

#[derive(Debug, Clone, Serialize)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub page: usize,
    pub total_pages: usize,
    pub total_items: usize,
    pub page_size: usize,
    pub sort: SortState,
}

impl<T> Page<T> {
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            page: self.page,
            total_pages: self.total_pages,
            total_items: self.total_items,
            page_size: self.page_size,
            sort: self.sort,
        }
    }
}

/// Slices `items` to one page. The page index is clamped to `[1, total_pages]`
/// and an empty list still has one (empty) page.
pub fn paginate<T>(items: Vec<T>, page: usize, page_size: usize, sort: SortState) -> Page<T> {
    let page_size = page_size.max(1);
    let total_items = items.len();
    let total_pages = total_items.div_ceil(page_size).max(1);
    let page = page.clamp(1, total_pages);
    let start = (page - 1) * page_size;

    Page {
        items: items.into_iter().skip(start).take(page_size).collect(),
        page,
        total_pages,
        total_items,
        page_size,
        sort,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug)]
    struct Item {
        name: &'static str,
        price: &'static str,
    }

    impl TableRow for Item {
        const COLUMNS: &'static [&'static str] = &["name", "price"];
        const DEFAULT_SORT: (&'static str, SortDirection) = ("name", SortDirection::Asc);

        fn sort_key(&self, column: &str) -> Option<SortKey> {
            match column {
                "name" => Some(SortKey::text(self.name)),
                "price" => Some(SortKey::from_display(self.price)),
                _ => None,
            }
        }

        fn search_fields(&self) -> Vec<&str> {
            vec![self.name]
        }
    }

    fn items() -> Vec<Item> {
        vec![
            Item { name: "banana", price: "2,199" },
            Item { name: "Apple", price: "999" },
            Item { name: "cherry", price: "$10,000.50" },
            Item { name: "apricot", price: "15" },
        ]
    }

    fn names(page: &Page<&Item>) -> Vec<&'static str> {
        page.items.iter().map(|i| i.name).collect()
    }

    #[test]
    fn text_sort_ignores_case() {
        let rows = items();
        let view = TableView::new::<Item>();
        let page = view.apply(&rows, 10);
        assert_eq!(names(&page), vec!["Apple", "apricot", "banana", "cherry"]);
    }

    #[test]
    fn display_numbers_sort_numerically() {
        let rows = items();
        let mut view = TableView::new::<Item>();
        view.click_header("price");
        let page = view.apply(&rows, 10);
        assert_eq!(names(&page), vec!["apricot", "Apple", "banana", "cherry"]);

        view.click_header("price");
        assert_eq!(view.sort.direction, SortDirection::Desc);
        let page = view.apply(&rows, 10);
        assert_eq!(names(&page), vec!["cherry", "banana", "Apple", "apricot"]);
    }

    #[test]
    fn switching_column_resets_to_ascending() {
        let mut sort = SortState { column: "price".into(), direction: SortDirection::Desc };
        sort.toggle("name");
        assert_eq!(sort, SortState { column: "name".into(), direction: SortDirection::Asc });
    }

    #[test]
    fn filter_matches_substring_and_resets_page() {
        let rows = items();
        let mut view = TableView::new::<Item>();
        view.go_to(3);
        view.set_filter("AP");
        assert_eq!(view.page, 1);
        let page = view.apply(&rows, 10);
        assert_eq!(names(&page), vec!["Apple", "apricot"]);
        assert_eq!(page.total_items, 2);
    }

    #[test]
    fn page_index_is_clamped() {
        let sort = SortState::default_for::<Item>();
        let page = paginate((1..=25).collect::<Vec<u32>>(), 9, 10, sort.clone());
        assert_eq!(page.page, 3);
        assert_eq!(page.total_pages, 3);
        assert_eq!(page.items, vec![21, 22, 23, 24, 25]);

        let page = paginate((1..=25).collect::<Vec<u32>>(), 0, 10, sort.clone());
        assert_eq!(page.page, 1);
        assert_eq!(page.items.len(), 10);

        let page = paginate(Vec::<u32>::new(), 4, 10, sort);
        assert_eq!((page.page, page.total_pages, page.items.len()), (1, 1, 0));
    }

    #[test]
    fn query_rejects_unknown_columns() {
        let query = TableQuery { sort: Some("colour".into()), ..Default::default() };
        assert_eq!(
            query.into_view::<Item>().unwrap_err(),
            AppError::UnknownSortColumn("colour".into())
        );
    }

    #[test]
    fn query_toggle_flips_active_column() {
        let query = TableQuery {
            sort: Some("price".into()),
            dir: Some(SortDirection::Asc),
            toggle: Some("price".into()),
            ..Default::default()
        };
        let view = query.into_view::<Item>().unwrap();
        assert_eq!(view.sort.direction, SortDirection::Desc);
    }

    #[test]
    fn sort_is_stable_for_equal_keys() {
        let rows = vec![
            Item { name: "first", price: "5" },
            Item { name: "second", price: "5" },
            Item { name: "third", price: "1" },
        ];
        let mut view = TableView::new::<Item>();
        view.click_header("price");
        let page = view.apply(&rows, 10);
        assert_eq!(names(&page), vec!["third", "first", "second"]);
    }
}
