use chrono::{DateTime, Utc};
use std::fmt;
use tracing::debug;

use crate::filter::SearchContext;
use crate::models::{DisplayItem, PropertyItem};
use crate::routes::Route;
use crate::search::retriever::ResultRetriever;
use crate::search::traits::PropertySource;

pub const NO_RESULTS: &str = "매물을 찾을 수 없습니다.";

/// Issued when a search starts; results carry it back to [`ResultsView::apply`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct SearchTicket(u64);

/// Listing page state. Each applied search replaces the previous results.
#[derive(Debug, Default)]
pub struct ResultsView {
    issued: u64,
    shown: Option<SearchTicket>,
    items: Vec<PropertyItem>,
    display: Vec<DisplayItem>,
    fetched_at: Option<DateTime<Utc>>,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin_search(&mut self) -> SearchTicket {
        self.issued += 1;
        SearchTicket(self.issued)
    }

    /// Replace the shown results, unless a newer search already landed.
    /// Returns whether the results were applied.
    pub fn apply(&mut self, ticket: SearchTicket, items: Vec<PropertyItem>) -> bool {
        if self.shown.is_some_and(|shown| shown > ticket) {
            debug!(
                ticket = ticket.0,
                shown = ?self.shown,
                "Dropping results from a superseded search"
            );
            return false;
        }

        self.display = items.iter().map(DisplayItem::from).collect();
        self.items = items;
        self.shown = Some(ticket);
        self.fetched_at = Some(Utc::now());
        true
    }

    /// Run one search for `context` and show its results.
    pub async fn refresh<S: PropertySource>(
        &mut self,
        retriever: &ResultRetriever<S>,
        context: &SearchContext,
        resolved_address: &str,
    ) -> bool {
        let ticket = self.begin_search();
        let items = retriever.search(context.payload(), resolved_address).await;
        self.apply(ticket, items)
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.display
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn fetched_at(&self) -> Option<DateTime<Utc>> {
        self.fetched_at
    }

    /// Detail route for the listing at `index`
    pub fn select(&self, index: usize) -> Option<Route> {
        self.items.get(index).map(|item| Route::Detail { id: item.id.clone() })
    }
}

impl fmt::Display for ResultsView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.display.is_empty() {
            return write!(f, "{}", NO_RESULTS);
        }
        for (i, item) in self.display.iter().enumerate() {
            writeln!(f, "{}. {}", i + 1, item)?;
        }
        Ok(())
    }
}
