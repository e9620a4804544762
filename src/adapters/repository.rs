use crate::domain::model::{CheckoutContext, CmsPage};
use crate::domain::ports::CmsPageRepository;
use crate::utils::error::Result;
use async_trait::async_trait;

/// CMS page store backed by a plain vector.
///
/// Pages are returned in storage order; duplicate ids are kept.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCmsPageRepository {
    pages: Vec<CmsPage>,
}

impl InMemoryCmsPageRepository {
    pub fn new(pages: Vec<CmsPage>) -> Self {
        Self { pages }
    }

    pub fn insert(&mut self, page: CmsPage) {
        self.pages.push(page);
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

#[async_trait]
impl CmsPageRepository for InMemoryCmsPageRepository {
    async fn read(&self, ids: &[String], _context: &CheckoutContext) -> Result<Vec<CmsPage>> {
        let pages: Vec<CmsPage> = self
            .pages
            .iter()
            .filter(|page| ids.contains(&page.id))
            .cloned()
            .collect();
        tracing::debug!("Read {} CMS pages for {:?}", pages.len(), ids);
        Ok(pages)
    }
}
