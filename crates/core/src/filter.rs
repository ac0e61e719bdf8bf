//! Record filtering: free-text search combined with a category selection.
//!
//! A record matches a [`RecordFilter`] when the text query is contained
//! (case-insensitively) in at least one of its searchable fields **and** its
//! category equals the selection. [`Selection::All`] accepts every category.

use core::str::FromStr;

/// Records that expose text fields to free-text search.
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// Records that belong to exactly one category (kind, product category, ...).
pub trait Categorized {
    type Category: PartialEq;

    fn category(&self) -> &Self::Category;
}

/// Case-insensitive substring query. An empty query matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextQuery {
    needle: String,
}

impl TextQuery {
    pub fn new(query: impl AsRef<str>) -> Self {
        Self {
            needle: query.as_ref().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.needle.is_empty() || haystack.to_lowercase().contains(&self.needle)
    }

    pub fn matches_any<'a>(&self, fields: impl IntoIterator<Item = &'a str>) -> bool {
        if self.needle.is_empty() {
            return true;
        }
        fields.into_iter().any(|field| self.matches(field))
    }
}

/// Category selection: everything, or exactly one category.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Selection<T> {
    #[default]
    All,
    Only(T),
}

impl<T: PartialEq> Selection<T> {
    pub fn matches(&self, value: &T) -> bool {
        match self {
            Selection::All => true,
            Selection::Only(expected) => expected == value,
        }
    }
}

impl<T: FromStr> Selection<T> {
    /// Parse a selection where `"all"` (any case) means [`Selection::All`].
    pub fn parse(s: &str) -> Result<Self, T::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(Selection::All);
        }
        Ok(Selection::Only(s.trim().parse()?))
    }
}

/// `text AND category` predicate over [`Searchable`] + [`Categorized`] records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordFilter<C> {
    query: TextQuery,
    selection: Selection<C>,
}

impl<C> Default for RecordFilter<C> {
    fn default() -> Self {
        Self {
            query: TextQuery::default(),
            selection: Selection::All,
        }
    }
}

impl<C: PartialEq> RecordFilter<C> {
    pub fn new(query: TextQuery, selection: Selection<C>) -> Self {
        Self { query, selection }
    }

    pub fn with_query(mut self, query: impl AsRef<str>) -> Self {
        self.query = TextQuery::new(query);
        self
    }

    pub fn with_selection(mut self, selection: Selection<C>) -> Self {
        self.selection = selection;
        self
    }

    pub fn matches<R>(&self, record: &R) -> bool
    where
        R: Searchable + Categorized<Category = C>,
    {
        self.selection.matches(record.category()) && self.query.matches_any(record.search_fields())
    }

    /// Matching records, in input order.
    pub fn apply<'a, R>(&self, records: impl IntoIterator<Item = &'a R>) -> Vec<&'a R>
    where
        R: Searchable + Categorized<Category = C> + 'a,
    {
        records.into_iter().filter(|r| self.matches(*r)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    struct Row {
        name: &'static str,
        code: &'static str,
        group: String,
    }

    impl Searchable for Row {
        fn search_fields(&self) -> Vec<&str> {
            vec![self.name, self.code]
        }
    }

    impl Categorized for Row {
        type Category = String;

        fn category(&self) -> &String {
            &self.group
        }
    }

    fn rows() -> Vec<Row> {
        vec![
            Row {
                name: "Sony Headphones",
                code: "P004",
                group: "Electronics".into(),
            },
            Row {
                name: "Notebook A4",
                code: "P005",
                group: "Stationery".into(),
            },
            Row {
                name: "Samsung LED TV",
                code: "P001",
                group: "Electronics".into(),
            },
        ]
    }

    #[test]
    fn empty_query_and_all_selection_match_everything() {
        let rows = rows();
        let filter: RecordFilter<String> = RecordFilter::default();
        assert_eq!(filter.apply(&rows).len(), 3);
    }

    #[test]
    fn query_is_case_insensitive_over_any_field() {
        let rows = rows();
        let by_name = RecordFilter::<String>::default().with_query("SONY");
        assert_eq!(by_name.apply(&rows), vec![&rows[0]]);

        let by_code = RecordFilter::<String>::default().with_query("p00");
        assert_eq!(by_code.apply(&rows).len(), 3);
    }

    #[test]
    fn selection_is_exact_and_combines_with_query() {
        let rows = rows();
        let filter = RecordFilter::<String>::default()
            .with_query("s")
            .with_selection(Selection::Only("Electronics".to_string()));
        assert_eq!(filter.apply(&rows), vec![&rows[0], &rows[2]]);

        let wrong_case = RecordFilter::<String>::default()
            .with_selection(Selection::Only("electronics".to_string()));
        assert!(wrong_case.apply(&rows).is_empty());
    }

    #[test]
    fn parse_all_short_circuits() {
        assert_eq!(Selection::<String>::parse("All"), Ok(Selection::All));
        assert_eq!(
            Selection::<String>::parse("Clothing"),
            Ok(Selection::Only("Clothing".to_string()))
        );
    }
}
