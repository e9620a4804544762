use crate::core::merge::merge_config;
use crate::domain::events::NavigationPageLoadedEvent;
use crate::domain::model::{
    CheckoutContext, CmsPage, CmsSlot, InternalRequest, NavigationEntry, NavigationPage,
};
use crate::domain::ports::{
    CmsPageRepository, GenericPageLoader, NotificationSink, SlotDataResolver,
};
use crate::utils::error::{NavigationPageError, Result};
use std::collections::{HashMap, VecDeque};

/// Assembles a navigation page: base page, CMS page, slot overrides, slot data.
pub struct NavigationPageLoader<L, R, S, N>
where
    L: GenericPageLoader,
    R: CmsPageRepository,
    S: SlotDataResolver,
    N: NotificationSink,
{
    generic_loader: L,
    cms_page_repository: R,
    slot_data_resolver: S,
    notification_sink: N,
}

impl<L, R, S, N> NavigationPageLoader<L, R, S, N>
where
    L: GenericPageLoader,
    R: CmsPageRepository,
    S: SlotDataResolver,
    N: NotificationSink,
{
    pub fn new(
        generic_loader: L,
        cms_page_repository: R,
        slot_data_resolver: S,
        notification_sink: N,
    ) -> Self {
        Self {
            generic_loader,
            cms_page_repository,
            slot_data_resolver,
            notification_sink,
        }
    }

    #[tracing::instrument(
        name = "assemble",
        skip_all,
        fields(path = %request.path, navigation_id = tracing::field::Empty)
    )]
    pub async fn load(
        &self,
        request: &InternalRequest,
        context: &CheckoutContext,
    ) -> Result<NavigationPage> {
        tracing::debug!("Loading base page for {}", request.path);
        let page = self.generic_loader.load(request, context).await?;
        let mut page = NavigationPage::from(page);

        let navigation = page
            .active_navigation()
            .cloned()
            .ok_or(NavigationPageError::NavigationNotActive)?;
        tracing::Span::current().record("navigation_id", navigation.id.as_str());
        tracing::debug!("Active navigation: {} ({})", navigation.id, navigation.name);

        let mut cms_page = self.cms_page(&navigation, context).await?;

        overwrite_slot_config(&mut cms_page, &navigation);

        self.load_slot_data(&mut cms_page, request, context).await?;

        page.cms_page = Some(cms_page);

        let event = NavigationPageLoadedEvent::new(&page, context, request);
        tracing::debug!("Publishing {}", event.name());
        self.notification_sink.publish(&event);

        tracing::info!(
            "Navigation page assembled for {} ({} slots)",
            navigation.id,
            page.cms_page.as_ref().map_or(0, CmsPage::slot_count)
        );
        Ok(page)
    }

    async fn cms_page(
        &self,
        navigation: &NavigationEntry,
        context: &CheckoutContext,
    ) -> Result<CmsPage> {
        let page_id = navigation.cms_page_id.clone().ok_or_else(|| {
            NavigationPageError::MissingCmsPageReference {
                navigation_id: navigation.id.clone(),
            }
        })?;

        let pages = self
            .cms_page_repository
            .read(std::slice::from_ref(&page_id), context)
            .await?;

        if pages.len() > 1 {
            tracing::debug!(
                "Repository returned {} pages for {}, using the first",
                pages.len(),
                page_id
            );
        }

        pages
            .into_iter()
            .next()
            .ok_or(NavigationPageError::PageNotFound { page_id })
    }

    async fn load_slot_data(
        &self,
        cms_page: &mut CmsPage,
        request: &InternalRequest,
        context: &CheckoutContext,
    ) -> Result<()> {
        if !cms_page.has_blocks() {
            return Ok(());
        }

        let submitted: Vec<CmsSlot> = cms_page.slots().cloned().collect();
        let expected = submitted.len();
        tracing::debug!("Resolving data for {} slots", expected);

        let resolved = self
            .slot_data_resolver
            .resolve(submitted, request, context)
            .await?;

        if resolved.len() != expected {
            return Err(NavigationPageError::SlotResolutionMismatch {
                expected,
                actual: resolved.len(),
            });
        }

        // 依 slot id 放回原本的 block 位置，重複 id 依回傳順序配對
        let mut by_id: HashMap<String, VecDeque<CmsSlot>> = HashMap::new();
        for slot in resolved {
            by_id.entry(slot.id.clone()).or_default().push_back(slot);
        }

        for slot in cms_page.slots_mut() {
            let replacement = by_id
                .get_mut(&slot.id)
                .and_then(VecDeque::pop_front)
                .ok_or_else(|| NavigationPageError::SlotResolutionError {
                    slot_id: slot.id.clone(),
                    message: "slot missing from resolver result".to_string(),
                })?;
            *slot = replacement;
        }

        Ok(())
    }
}

/// Merges the navigation's per-slot overrides into the matching slots.
pub fn overwrite_slot_config(cms_page: &mut CmsPage, navigation: &NavigationEntry) {
    if !navigation.has_slot_overrides() || !cms_page.has_blocks() {
        return;
    }

    for slot in cms_page.slots_mut() {
        let Some(overrides) = navigation.slot_override(&slot.id) else {
            continue;
        };

        tracing::debug!("Overriding config of slot {}", slot.id);
        slot.config = merge_config(&slot.config, overrides);
    }
}
