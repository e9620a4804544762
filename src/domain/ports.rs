use crate::domain::events::NavigationPageLoadedEvent;
use crate::domain::model::{CheckoutContext, CmsPage, CmsSlot, InternalRequest, Page};
use crate::utils::error::Result;
use async_trait::async_trait;
use serde_json::Value;

/// Builds the base page (header and active navigation) for a request.
#[async_trait]
pub trait GenericPageLoader: Send + Sync {
    async fn load(&self, request: &InternalRequest, context: &CheckoutContext) -> Result<Page>;
}

/// Reads CMS pages by id. May return zero, one or several pages.
#[async_trait]
pub trait CmsPageRepository: Send + Sync {
    async fn read(&self, ids: &[String], context: &CheckoutContext) -> Result<Vec<CmsPage>>;
}

/// Attaches dynamic data to slots. Returns the same slots it was given.
#[async_trait]
pub trait SlotDataResolver: Send + Sync {
    async fn resolve(
        &self,
        slots: Vec<CmsSlot>,
        request: &InternalRequest,
        context: &CheckoutContext,
    ) -> Result<Vec<CmsSlot>>;
}

/// Resolves data for a single slot type.
#[async_trait]
pub trait SlotTypeDataResolver: Send + Sync {
    fn slot_type(&self) -> &str;

    async fn resolve(
        &self,
        slot: &CmsSlot,
        request: &InternalRequest,
        context: &CheckoutContext,
    ) -> Result<Option<Value>>;
}

pub trait NotificationSink: Send + Sync {
    fn publish(&self, event: &NavigationPageLoadedEvent<'_>);
}
