use crate::catalog_actor::{CatalogError, CatalogIntent, CatalogView};
use crate::clients::actor_client::ActorClient;
use crate::framework::{FrameworkError, ViewClient};
use crate::model::{CategoryFilter, FilterCriteria, ProductId, SortOrder};
use async_trait::async_trait;
use tracing::{debug, instrument};

/// Client for interacting with the catalog view actor.
///
/// Every intent method returns the committed criteria after the intent was applied. For
/// [`type_keyword`](Self::type_keyword) that is still the previous keyword, since the commit
/// happens once typing pauses.
#[derive(Clone)]
pub struct CatalogClient {
    inner: ViewClient<CatalogView>,
}

impl CatalogClient {
    pub fn new(inner: ViewClient<CatalogView>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl ActorClient<CatalogView> for CatalogClient {
    type Error = CatalogError;

    fn inner(&self) -> &ViewClient<CatalogView> {
        &self.inner
    }

    fn map_error(e: FrameworkError) -> Self::Error {
        CatalogError::ActorCommunicationError(e.to_string())
    }
}

impl CatalogClient {
    async fn send(&self, intent: CatalogIntent) -> Result<FilterCriteria, CatalogError> {
        self.inner.dispatch(intent).await.map_err(Self::map_error)
    }

    /// Selects a category by name; blank or `"all"` means no category filter.
    #[instrument(skip(self))]
    pub async fn pick_category(&self, name: &str) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::PickCategory(CategoryFilter::named(name)))
            .await
    }

    #[instrument(skip(self))]
    pub async fn toggle_sort(&self) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::ToggleSort).await
    }

    #[instrument(skip(self))]
    pub async fn set_sort(&self, sort_order: SortOrder) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::SetSort(sort_order)).await
    }

    #[instrument(skip(self))]
    pub async fn type_keyword(&self, text: &str) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::TypeKeyword(text.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn go_to_page(&self, page: u32) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::GoToPage(page)).await
    }

    #[instrument(skip(self))]
    pub async fn clear(&self) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::Clear).await
    }

    /// Tells the view that the address bar now shows `query` (back/forward navigation).
    #[instrument(skip(self))]
    pub async fn location_changed(&self, query: &str) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::LocationChanged(query.to_string()))
            .await
    }

    #[instrument(skip(self))]
    pub async fn reload(&self) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::Reload).await
    }

    #[instrument(skip(self))]
    pub async fn preview(&self, product_id: ProductId) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::Preview(product_id)).await
    }

    #[instrument(skip(self))]
    pub async fn close_preview(&self) -> Result<FilterCriteria, CatalogError> {
        debug!("Sending request");
        self.send(CatalogIntent::ClosePreview).await
    }
}
