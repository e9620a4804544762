pub mod assembler;
pub mod merge;

pub use crate::domain::model::{
    CheckoutContext, CmsBlock, CmsPage, CmsSlot, InternalRequest, NavigationEntry,
    NavigationPage, Page, SlotConfig,
};
pub use crate::domain::ports::{
    CmsPageRepository, GenericPageLoader, NotificationSink, SlotDataResolver,
    SlotTypeDataResolver,
};
pub use crate::utils::error::Result;
