use crate::domain::events::NavigationPageLoadedEvent;
use crate::domain::ports::NotificationSink;
use crate::utils::error::Result;

/// Observer of assembled navigation pages.
pub trait NavigationPageSubscriber: Send + Sync {
    fn name(&self) -> &str;

    fn on_navigation_page_loaded(&self, event: &NavigationPageLoadedEvent<'_>) -> Result<()>;
}

/// Synchronous observer list. Subscribers run in registration order and a
/// failing subscriber never affects the publisher or the other subscribers.
#[derive(Default)]
pub struct EventDispatcher {
    subscribers: Vec<Box<dyn NavigationPageSubscriber>>,
}

impl EventDispatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, subscriber: Box<dyn NavigationPageSubscriber>) {
        self.subscribers.push(subscriber);
    }

    pub fn with_subscriber(mut self, subscriber: Box<dyn NavigationPageSubscriber>) -> Self {
        self.subscribe(subscriber);
        self
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

impl NotificationSink for EventDispatcher {
    fn publish(&self, event: &NavigationPageLoadedEvent<'_>) {
        for subscriber in &self.subscribers {
            if let Err(e) = subscriber.on_navigation_page_loaded(event) {
                tracing::warn!(
                    "Subscriber {} failed on {}: {}",
                    subscriber.name(),
                    event.name(),
                    e
                );
            }
        }
    }
}

/// Sink for callers without observers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl NotificationSink for NullSink {
    fn publish(&self, _event: &NavigationPageLoadedEvent<'_>) {}
}

#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingSubscriber;

impl NavigationPageSubscriber for LoggingSubscriber {
    fn name(&self) -> &str {
        "logging"
    }

    fn on_navigation_page_loaded(&self, event: &NavigationPageLoadedEvent<'_>) -> Result<()> {
        let navigation_id = event
            .page
            .active_navigation()
            .map_or("-", |navigation| navigation.id.as_str());
        let (page_id, slots) = event
            .page
            .cms_page
            .as_ref()
            .map_or(("-", 0), |page| (page.id.as_str(), page.slot_count()));

        tracing::info!(
            "📄 {} navigation={} cms_page={} slots={} path={} sales_channel={} at {}",
            event.name(),
            navigation_id,
            page_id,
            slots,
            event.request.path,
            event.context.sales_channel_id,
            event.loaded_at.to_rfc3339()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::{CheckoutContext, InternalRequest, NavigationPage};
    use crate::utils::error::NavigationPageError;
    use std::sync::{Arc, Mutex};

    struct Recorder {
        name: String,
        seen: Arc<Mutex<Vec<String>>>,
    }

    impl NavigationPageSubscriber for Recorder {
        fn name(&self) -> &str {
            &self.name
        }

        fn on_navigation_page_loaded(&self, event: &NavigationPageLoadedEvent<'_>) -> Result<()> {
            self.seen
                .lock()
                .unwrap()
                .push(format!("{}:{}", self.name, event.request.path));
            Ok(())
        }
    }

    struct Failing;

    impl NavigationPageSubscriber for Failing {
        fn name(&self) -> &str {
            "failing"
        }

        fn on_navigation_page_loaded(&self, _event: &NavigationPageLoadedEvent<'_>) -> Result<()> {
            Err(NavigationPageError::SubscriberError {
                subscriber: "failing".to_string(),
                message: "boom".to_string(),
            })
        }
    }

    #[test]
    fn test_subscribers_run_in_order_and_failures_are_swallowed() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let dispatcher = EventDispatcher::new()
            .with_subscriber(Box::new(Recorder {
                name: "first".to_string(),
                seen: seen.clone(),
            }))
            .with_subscriber(Box::new(Failing))
            .with_subscriber(Box::new(LoggingSubscriber))
            .with_subscriber(Box::new(Recorder {
                name: "second".to_string(),
                seen: seen.clone(),
            }));
        assert_eq!(dispatcher.len(), 4);

        let page = NavigationPage::default();
        let context = CheckoutContext::default();
        let request = InternalRequest::new("/shoes");
        dispatcher.publish(&NavigationPageLoadedEvent::new(&page, &context, &request));

        assert_eq!(
            *seen.lock().unwrap(),
            vec!["first:/shoes".to_string(), "second:/shoes".to_string()]
        );
    }

    #[test]
    fn test_empty_dispatcher_and_null_sink_accept_events() {
        let page = NavigationPage::default();
        let context = CheckoutContext::default();
        let request = InternalRequest::new("/");
        let event = NavigationPageLoadedEvent::new(&page, &context, &request);

        let dispatcher = EventDispatcher::new();
        assert!(dispatcher.is_empty());
        dispatcher.publish(&event);
        NullSink.publish(&event);
        assert_eq!(event.name(), "navigation.page.loaded");
    }
}
