use crate::domain::model::{
    CheckoutContext, Header, InternalRequest, NavigationEntry, NavigationTree, Page,
};
use crate::domain::ports::GenericPageLoader;
use crate::utils::error::{NavigationPageError, Result};
use async_trait::async_trait;

/// Request parameter naming the navigation entry to activate.
pub const NAVIGATION_ID_PARAM: &str = "navigationId";

/// Builds the header of a page from a fixed navigation catalogue.
///
/// The active entry is taken from the `navigationId` request parameter and
/// falls back to the root entry when the parameter is absent.
#[derive(Debug, Clone)]
pub struct HeaderPageLoader {
    entries: Vec<NavigationEntry>,
    root_navigation_id: String,
}

impl HeaderPageLoader {
    pub fn new(entries: Vec<NavigationEntry>, root_navigation_id: impl Into<String>) -> Self {
        Self {
            entries,
            root_navigation_id: root_navigation_id.into(),
        }
    }

    fn find(&self, navigation_id: &str) -> Option<&NavigationEntry> {
        self.entries.iter().find(|entry| entry.id == navigation_id)
    }
}

#[async_trait]
impl GenericPageLoader for HeaderPageLoader {
    async fn load(&self, request: &InternalRequest, _context: &CheckoutContext) -> Result<Page> {
        let navigation_id = request
            .param(NAVIGATION_ID_PARAM)
            .unwrap_or(self.root_navigation_id.as_str());

        let active = self.find(navigation_id).cloned().ok_or_else(|| {
            NavigationPageError::NavigationNotFound {
                navigation_id: navigation_id.to_string(),
            }
        })?;
        tracing::debug!("Activated navigation {} for {}", active.id, request.path);

        Ok(Page {
            header: Header {
                navigation: NavigationTree {
                    active: Some(active),
                    entries: self.entries.clone(),
                },
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> HeaderPageLoader {
        HeaderPageLoader::new(
            vec![
                NavigationEntry::new("home", "Home").with_cms_page("page-home"),
                NavigationEntry::new("shoes", "Shoes").with_cms_page("page-shoes"),
            ],
            "home",
        )
    }

    #[tokio::test]
    async fn test_falls_back_to_root_navigation() {
        let page = loader()
            .load(&InternalRequest::new("/"), &CheckoutContext::default())
            .await
            .unwrap();

        let active = page.header.navigation.active.unwrap();
        assert_eq!(active.id, "home");
        assert_eq!(page.header.navigation.entries.len(), 2);
    }

    #[tokio::test]
    async fn test_activates_requested_navigation() {
        let request = InternalRequest::new("/shoes").with_param(NAVIGATION_ID_PARAM, "shoes");
        let page = loader()
            .load(&request, &CheckoutContext::default())
            .await
            .unwrap();

        assert_eq!(
            page.header.navigation.active.unwrap().cms_page_id.as_deref(),
            Some("page-shoes")
        );
    }

    #[tokio::test]
    async fn test_unknown_navigation_is_not_found() {
        let request = InternalRequest::new("/x").with_param(NAVIGATION_ID_PARAM, "missing");
        let err = loader()
            .load(&request, &CheckoutContext::default())
            .await
            .unwrap_err();

        assert!(err.is_not_found());
        assert!(matches!(
            err,
            NavigationPageError::NavigationNotFound { ref navigation_id } if navigation_id == "missing"
        ));
    }
}
