use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Slot configuration: an arbitrarily nested JSON object.
pub type SlotConfig = serde_json::Map<String, Value>;

/// Per-navigation overrides keyed by slot id.
pub type SlotConfigOverrides = HashMap<String, SlotConfig>;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct InternalRequest {
    pub path: String,
    #[serde(default)]
    pub params: HashMap<String, String>,
}

impl InternalRequest {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            params: HashMap::new(),
        }
    }

    pub fn with_param(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.params.insert(name.into(), value.into());
        self
    }

    pub fn param(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CheckoutContext {
    pub sales_channel_id: String,
    pub language_id: String,
    pub currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavigationEntry {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cms_page_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub slot_config: Option<SlotConfigOverrides>,
}

impl NavigationEntry {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            parent_id: None,
            cms_page_id: None,
            slot_config: None,
        }
    }

    pub fn with_cms_page(mut self, cms_page_id: impl Into<String>) -> Self {
        self.cms_page_id = Some(cms_page_id.into());
        self
    }

    pub fn with_slot_override(mut self, slot_id: impl Into<String>, config: SlotConfig) -> Self {
        self.slot_config
            .get_or_insert_with(HashMap::new)
            .insert(slot_id.into(), config);
        self
    }

    /// Overrides for `slot_id`, if this entry carries any.
    pub fn slot_override(&self, slot_id: &str) -> Option<&SlotConfig> {
        self.slot_config.as_ref().and_then(|c| c.get(slot_id))
    }

    pub fn has_slot_overrides(&self) -> bool {
        self.slot_config.as_ref().is_some_and(|c| !c.is_empty())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationTree {
    pub active: Option<NavigationEntry>,
    #[serde(default)]
    pub entries: Vec<NavigationEntry>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Header {
    pub navigation: NavigationTree,
}

/// Base page produced by the generic page loader.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    pub header: Header,
}

/// Page with header plus the resolved CMS page.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NavigationPage {
    pub header: Header,
    pub cms_page: Option<CmsPage>,
}

impl From<Page> for NavigationPage {
    fn from(page: Page) -> Self {
        Self {
            header: page.header,
            cms_page: None,
        }
    }
}

impl NavigationPage {
    pub fn active_navigation(&self) -> Option<&NavigationEntry> {
        self.header.navigation.active.as_ref()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsSlot {
    pub id: String,
    #[serde(rename = "type")]
    pub slot_type: String,
    /// Position name inside the block, e.g. "left" or "content".
    pub slot: String,
    #[serde(default)]
    pub config: SlotConfig,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
}

impl CmsSlot {
    pub fn new(id: impl Into<String>, slot_type: impl Into<String>, slot: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            slot_type: slot_type.into(),
            slot: slot.into(),
            config: SlotConfig::new(),
            data: None,
        }
    }

    pub fn with_config(mut self, config: SlotConfig) -> Self {
        self.config = config;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsBlock {
    pub id: String,
    #[serde(rename = "type")]
    pub block_type: String,
    #[serde(default)]
    pub position: u32,
    #[serde(default)]
    pub slots: Vec<CmsSlot>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CmsPage {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub page_type: String,
    #[serde(default)]
    pub blocks: Vec<CmsBlock>,
}

impl CmsPage {
    pub fn has_blocks(&self) -> bool {
        !self.blocks.is_empty()
    }

    /// All slots, block order first, then slot order within the block.
    pub fn slots(&self) -> impl Iterator<Item = &CmsSlot> {
        self.blocks.iter().flat_map(|block| block.slots.iter())
    }

    pub fn slots_mut(&mut self) -> impl Iterator<Item = &mut CmsSlot> {
        self.blocks.iter_mut().flat_map(|block| block.slots.iter_mut())
    }

    pub fn slot_count(&self) -> usize {
        self.blocks.iter().map(|block| block.slots.len()).sum()
    }
}
