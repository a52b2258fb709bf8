//! Client view state.

use catalog::Product;

use crate::{draft::ProductDraft, errors::ClientError};

/// Identifies one list request; only the newest may update the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LoadTicket(u64);

/// Everything the catalog page renders.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    products: Vec<Product>,
    draft: ProductDraft,
    loading: bool,
    error: Option<String>,
    latest_ticket: u64,
}

impl CatalogState {
    /// Last successfully loaded list.
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn draft(&self) -> &ProductDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut ProductDraft {
        &mut self.draft
    }

    pub fn clear_draft(&mut self) {
        self.draft = ProductDraft::default();
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Status line shown above the product rows, if any.
    ///
    /// Loading wins over the empty notice so a reload of a non-empty list is
    /// still visible.
    pub fn status_message(&self) -> Option<&'static str> {
        if self.loading {
            Some("Loading...")
        } else if self.products.is_empty() {
            Some("No products found")
        } else {
            None
        }
    }

    /// Message for the most recent failure, until the next success.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn record_error(&mut self, error: &ClientError) {
        self.error = Some(error.to_string());
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    /// Start a list request and mark the view as loading.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.latest_ticket = self.latest_ticket.saturating_add(1);
        self.loading = true;

        LoadTicket(self.latest_ticket)
    }

    /// Replace the list with `products` unless a newer load has started.
    ///
    /// Returns whether the response was applied.
    pub fn finish_load(&mut self, ticket: LoadTicket, products: Vec<Product>) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.products = products;
        self.loading = false;
        self.error = None;

        true
    }

    /// Record a failed list request, keeping the stale list on screen.
    pub fn fail_load(&mut self, ticket: LoadTicket, error: &ClientError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.loading = false;
        self.record_error(error);

        true
    }

    fn is_current(&self, ticket: LoadTicket) -> bool {
        ticket.0 == self.latest_ticket
    }
}

#[cfg(test)]
mod tests {
    use catalog::{Product, ProductUuid};
    use rust_decimal::Decimal;

    use crate::api::ApiError;

    use super::*;

    fn product(name: &str) -> Product {
        Product {
            uuid: ProductUuid::new(),
            name: name.to_owned(),
            price: Decimal::ONE,
        }
    }

    #[test]
    fn stale_response_does_not_overwrite_newer_list() {
        let mut state = CatalogState::default();

        let first = state.begin_load();
        let second = state.begin_load();

        assert!(state.finish_load(second, vec![product("Shoe")]));
        assert!(!state.finish_load(first, vec![product("Pen")]));

        let names: Vec<&str> = state.products().iter().map(|p| p.name.as_str()).collect();

        assert_eq!(names, ["Shoe"]);
        assert!(!state.is_loading(), "newest load finished");
    }

    #[test]
    fn loading_stays_on_until_newest_load_finishes() {
        let mut state = CatalogState::default();

        let first = state.begin_load();
        let second = state.begin_load();

        state.finish_load(first, Vec::new());

        assert!(state.is_loading(), "second load still outstanding");

        state.finish_load(second, Vec::new());

        assert!(!state.is_loading(), "all loads finished");
    }

    #[test]
    fn failed_load_keeps_stale_list_and_records_error() {
        let mut state = CatalogState::default();

        let ticket = state.begin_load();
        state.finish_load(ticket, vec![product("Pen")]);

        let ticket = state.begin_load();
        state.fail_load(ticket, &ClientError::Api(ApiError::Status(503)));

        assert_eq!(state.products().len(), 1);
        assert_eq!(
            state.error(),
            Some("server responded with status 503"),
            "error message should be surfaced"
        );

        let ticket = state.begin_load();
        state.finish_load(ticket, Vec::new());

        assert_eq!(state.error(), None, "success clears the error");
    }

    #[test]
    fn status_shows_loading_while_a_list_is_on_screen() {
        let mut state = CatalogState::default();

        assert_eq!(state.status_message(), Some("No products found"));

        let first = state.begin_load();
        assert_eq!(state.status_message(), Some("Loading..."));

        state.finish_load(first, vec![product("Pen")]);
        assert_eq!(state.status_message(), None);

        state.begin_load();
        assert_eq!(state.status_message(), Some("Loading..."));
        assert_eq!(state.products().len(), 1, "stale list stays visible");
    }
}
