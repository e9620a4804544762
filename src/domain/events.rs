use crate::domain::model::{CheckoutContext, InternalRequest, NavigationPage};
use chrono::{DateTime, Utc};

/// Emitted once a navigation page has been fully assembled.
#[derive(Debug, Clone)]
pub struct NavigationPageLoadedEvent<'a> {
    pub page: &'a NavigationPage,
    pub context: &'a CheckoutContext,
    pub request: &'a InternalRequest,
    pub loaded_at: DateTime<Utc>,
}

impl<'a> NavigationPageLoadedEvent<'a> {
    pub const NAME: &'static str = "navigation.page.loaded";

    pub fn new(
        page: &'a NavigationPage,
        context: &'a CheckoutContext,
        request: &'a InternalRequest,
    ) -> Self {
        Self {
            page,
            context,
            request,
            loaded_at: Utc::now(),
        }
    }

    pub fn name(&self) -> &'static str {
        Self::NAME
    }
}
