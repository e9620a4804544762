// Adapters layer: concrete collaborators for the assembler (navigation catalogue,
// in-memory CMS store, per-type slot resolution, event dispatch).

pub mod events;
pub mod page_loader;
pub mod repository;
pub mod slot_resolver;

pub use events::{EventDispatcher, LoggingSubscriber, NavigationPageSubscriber, NullSink};
pub use page_loader::{HeaderPageLoader, NAVIGATION_ID_PARAM};
pub use repository::InMemoryCmsPageRepository;
pub use slot_resolver::{ImageSlotResolver, TextSlotResolver, TypedSlotDataResolver};
