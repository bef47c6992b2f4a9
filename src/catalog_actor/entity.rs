//! [`ViewEntity`] implementation for the catalog listing view.
//!
//! [`CatalogView`] owns every piece of query state: the committed criteria, the search-box
//! draft and its debounce timer, the pending URL write, the fetch orchestrator and the busy
//! indicator. The generic [`ViewActor`](crate::framework::ViewActor) drives it one update
//! pass at a time and flushes the navigation write after each pass.

use super::{CatalogContext, CatalogEvent, CatalogIntent};
use crate::debounce::Debouncer;
use crate::fetch::{FetchOrchestrator, Resolution, TransportError};
use crate::framework::{Scope, ViewEntity};
use crate::lifecycle::CatalogConfig;
use crate::loading::LoadingGuard;
use crate::model::{CatalogSnapshot, Category, FetchRequest, FetchResult, FilterCriteria, Product};
use crate::navigation::NavigationWriter;
use crate::query_store::{CriteriaPatch, QueryStore};
use std::sync::Arc;
use std::time::Duration;
use tokio::time::Instant;
use tracing::{debug, info, warn};

pub struct CatalogView {
    debounce_delay: Duration,
    store: QueryStore,
    draft_keyword: String,
    keyword_debounce: Debouncer<String>,
    navigation: NavigationWriter,
    fetcher: FetchOrchestrator,
    spinner: LoadingGuard,
    categories: Vec<Category>,
    preview: Option<Product>,
}

impl CatalogView {
    pub fn new(config: &CatalogConfig) -> Self {
        Self {
            debounce_delay: config.debounce(),
            store: QueryStore::default().with_sort_reset(config.reset_page_on_sort),
            draft_keyword: String::new(),
            keyword_debounce: Debouncer::new(),
            navigation: NavigationWriter::new(),
            fetcher: FetchOrchestrator::new(config.sort_key.clone()),
            spinner: LoadingGuard::new(config.spinner_delay()),
            categories: Vec::new(),
            preview: None,
        }
    }

    pub fn criteria(&self) -> &FilterCriteria {
        self.store.current()
    }

    /// Commit, mirror into the URL, fetch.
    fn apply(&mut self, patch: CriteriaPatch, scope: &Scope<'_, Self>) {
        let committed = self.store.commit(patch);
        self.navigation.write(&committed);
        self.refresh(scope);
    }

    /// Adopts criteria that already are in the URL.
    fn adopt(&mut self, criteria: FilterCriteria, scope: &Scope<'_, Self>) {
        self.keyword_debounce.cancel();
        self.store.replace(criteria);
        self.draft_keyword = self.store.current().keyword.clone();
        self.refresh(scope);
    }

    fn refresh(&mut self, scope: &Scope<'_, Self>) {
        if let Some(request) = self.fetcher.dispatch(self.store.current()) {
            self.start_fetch(request, scope);
        }
    }

    fn start_fetch(&mut self, request: FetchRequest, scope: &Scope<'_, Self>) {
        self.spinner.on_pending();

        let products = Arc::clone(&scope.context().products);
        let FetchRequest {
            request_id, query, ..
        } = request;
        scope.spawn(async move {
            let outcome = products.fetch_products(&query).await;
            CatalogEvent::Fetched(FetchResult {
                request_id,
                outcome,
            })
        });
    }

    fn load_categories(&self, scope: &Scope<'_, Self>) {
        let categories = Arc::clone(&scope.context().categories);
        scope.spawn(async move {
            CatalogEvent::CategoriesLoaded(categories.fetch_categories().await)
        });
    }

    fn on_fetched(&mut self, result: FetchResult) {
        match self.fetcher.resolve(result) {
            Resolution::Accepted => {
                self.spinner.on_settled();
                if self.preview.take().is_some() {
                    debug!("Preview closed by new result set");
                }
            }
            Resolution::Superseded => {}
        }
    }

    fn on_categories(&mut self, loaded: Result<Vec<Category>, TransportError>) {
        match loaded {
            Ok(mut categories) => {
                categories.sort_by_cached_key(|c| c.category_name.to_lowercase());
                info!(count = categories.len(), "Categories loaded");
                self.categories = categories;
            }
            Err(e) => warn!(error = %e, "Failed to load categories"),
        }
    }
}

impl ViewEntity for CatalogView {
    type Intent = CatalogIntent;
    type Output = FilterCriteria;
    type Event = CatalogEvent;
    type Snapshot = CatalogSnapshot;
    type Context = CatalogContext;

    /// Reads the initial criteria from the address bar and starts the first fetch.
    fn on_mount(&mut self, scope: &Scope<'_, Self>) {
        let query = scope.context().address_bar.query();
        let criteria = FilterCriteria::parse(&query);
        info!(%query, "Mounting catalog view");
        self.adopt(criteria, scope);
        self.load_categories(scope);
    }

    fn on_unmount(&mut self) {
        if self.keyword_debounce.cancel() {
            debug!("Discarded pending keyword");
        }
        self.spinner.cancel();
    }

    fn handle_intent(&mut self, intent: CatalogIntent, scope: &Scope<'_, Self>) -> FilterCriteria {
        match intent {
            CatalogIntent::PickCategory(category) => {
                self.apply(CriteriaPatch::category(category), scope);
            }
            CatalogIntent::ToggleSort => {
                let toggled = self.store.current().sort_order.toggled();
                self.apply(CriteriaPatch::sort_order(toggled), scope);
            }
            CatalogIntent::SetSort(sort_order) => {
                self.apply(CriteriaPatch::sort_order(sort_order), scope);
            }
            CatalogIntent::TypeKeyword(text) => {
                self.draft_keyword = text.clone();
                self.keyword_debounce.schedule(text, self.debounce_delay);
            }
            CatalogIntent::GoToPage(page) => {
                self.apply(CriteriaPatch::page(page), scope);
            }
            CatalogIntent::Clear => {
                self.keyword_debounce.cancel();
                self.draft_keyword.clear();
                self.store.reset();
                self.navigation.write_empty();
                self.refresh(scope);
            }
            CatalogIntent::LocationChanged(query) => {
                self.adopt(FilterCriteria::parse(&query), scope);
            }
            CatalogIntent::Reload => {
                let request = self.fetcher.redispatch(self.store.current());
                self.start_fetch(request, scope);
            }
            CatalogIntent::Preview(product_id) => {
                match self.fetcher.listing().page().and_then(|page| page.find(product_id)) {
                    Some(product) => self.preview = Some(product.clone()),
                    None => debug!(%product_id, "Preview ignored, product not on the visible page"),
                }
            }
            CatalogIntent::ClosePreview => {
                self.preview = None;
            }
        }
        self.store.current().clone()
    }

    fn handle_event(&mut self, event: CatalogEvent, _scope: &Scope<'_, Self>) {
        match event {
            CatalogEvent::Fetched(result) => self.on_fetched(result),
            CatalogEvent::CategoriesLoaded(loaded) => self.on_categories(loaded),
        }
    }

    fn next_deadline(&self) -> Option<Instant> {
        match (self.keyword_debounce.deadline(), self.spinner.deadline()) {
            (Some(a), Some(b)) => Some(a.min(b)),
            (a, b) => a.or(b),
        }
    }

    fn on_deadline(&mut self, now: Instant, scope: &Scope<'_, Self>) {
        if let Some(keyword) = self.keyword_debounce.take_expired(now) {
            debug!(%keyword, "Keyword settled");
            self.apply(CriteriaPatch::keyword(keyword), scope);
        }
        self.spinner.fire(now);
    }

    fn flush_effects(&mut self, ctx: &CatalogContext) {
        self.navigation.flush(ctx.address_bar.as_ref());
    }

    fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            criteria: self.store.current().clone(),
            draft_keyword: self.draft_keyword.clone(),
            phase: self.fetcher.phase(),
            listing: self.fetcher.listing().clone(),
            busy: self.spinner.is_visible(),
            categories: self.categories.clone(),
            preview: self.preview.clone(),
        }
    }
}
