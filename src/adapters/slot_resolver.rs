use crate::domain::model::{CheckoutContext, CmsSlot, InternalRequest};
use crate::domain::ports::{SlotDataResolver, SlotTypeDataResolver};
use crate::utils::error::{NavigationPageError, Result};
use async_trait::async_trait;
use serde_json::{json, Value};
use std::collections::HashMap;
use url::Url;

/// Dispatches every slot to the resolver registered for its type.
///
/// Slots without a registered resolver are passed through unchanged.
#[derive(Default)]
pub struct TypedSlotDataResolver {
    resolvers: HashMap<String, Box<dyn SlotTypeDataResolver>>,
}

impl TypedSlotDataResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, resolver: Box<dyn SlotTypeDataResolver>) {
        self.resolvers
            .insert(resolver.slot_type().to_string(), resolver);
    }

    pub fn with_resolver(mut self, resolver: Box<dyn SlotTypeDataResolver>) -> Self {
        self.register(resolver);
        self
    }

    pub fn supports(&self, slot_type: &str) -> bool {
        self.resolvers.contains_key(slot_type)
    }
}

#[async_trait]
impl SlotDataResolver for TypedSlotDataResolver {
    async fn resolve(
        &self,
        slots: Vec<CmsSlot>,
        request: &InternalRequest,
        context: &CheckoutContext,
    ) -> Result<Vec<CmsSlot>> {
        let mut resolved = Vec::with_capacity(slots.len());

        for mut slot in slots {
            match self.resolvers.get(&slot.slot_type) {
                Some(resolver) => {
                    if let Some(data) = resolver.resolve(&slot, request, context).await? {
                        slot.data = Some(data);
                    }
                }
                None => tracing::debug!("No resolver for slot type {}", slot.slot_type),
            }
            resolved.push(slot);
        }

        Ok(resolved)
    }
}

/// Reads `config.<field>.value` when the field is statically sourced.
fn static_value<'a>(slot: &'a CmsSlot, field: &str) -> Option<&'a Value> {
    let field_config = slot.config.get(field)?.as_object()?;
    match field_config.get("source").and_then(Value::as_str) {
        None | Some("static") => field_config.get("value"),
        Some(source) => {
            tracing::debug!("Slot {} field {} uses unsupported source {}", slot.id, field, source);
            None
        }
    }
}

pub struct TextSlotResolver;

#[async_trait]
impl SlotTypeDataResolver for TextSlotResolver {
    fn slot_type(&self) -> &str {
        "text"
    }

    async fn resolve(
        &self,
        slot: &CmsSlot,
        _request: &InternalRequest,
        _context: &CheckoutContext,
    ) -> Result<Option<Value>> {
        Ok(static_value(slot, "content").map(|content| json!({ "content": content })))
    }
}

/// Turns a media id into an absolute URL below `media_base_url`.
pub struct ImageSlotResolver {
    media_base_url: Url,
}

impl ImageSlotResolver {
    pub fn new(media_base_url: &str) -> Result<Self> {
        Ok(Self {
            media_base_url: Url::parse(media_base_url)?,
        })
    }

    /// Appends `media_id` below the base path. Ids that could leave the base
    /// (rooted, absolute, dot segments, escapes) are rejected.
    fn media_url(&self, slot_id: &str, media_id: &str) -> Result<Url> {
        let invalid = |reason: &str| NavigationPageError::SlotResolutionError {
            slot_id: slot_id.to_string(),
            message: format!("invalid media id '{}': {}", media_id, reason),
        };

        let segments: Vec<&str> = media_id.split('/').collect();
        if segments
            .iter()
            .any(|s| s.is_empty() || *s == "." || *s == "..")
        {
            return Err(invalid("empty or dot path segment"));
        }
        if media_id.contains([':', '\\', '%', '?', '#']) {
            return Err(invalid("reserved character"));
        }

        let mut url = self.media_base_url.clone();
        url.path_segments_mut()
            .map_err(|_| invalid("media base URL cannot hold a path"))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }
}

#[async_trait]
impl SlotTypeDataResolver for ImageSlotResolver {
    fn slot_type(&self) -> &str {
        "image"
    }

    async fn resolve(
        &self,
        slot: &CmsSlot,
        _request: &InternalRequest,
        _context: &CheckoutContext,
    ) -> Result<Option<Value>> {
        let Some(media_id) = static_value(slot, "media").and_then(Value::as_str) else {
            return Ok(None);
        };

        let url = self.media_url(&slot.id, media_id)?;
        Ok(Some(json!({ "media_id": media_id, "url": url.as_str() })))
    }
}
