use crate::adapters::{
    HeaderPageLoader, ImageSlotResolver, InMemoryCmsPageRepository, TextSlotResolver,
    TypedSlotDataResolver,
};
use crate::domain::model::{CheckoutContext, CmsPage, NavigationEntry};
use crate::utils::error::{NavigationPageError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_required_field, validate_unique_ids, validate_url,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Storefront fixture: navigation catalogue, CMS pages and checkout context.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontConfig {
    pub storefront: StorefrontSettings,
    #[serde(default)]
    pub context: CheckoutContext,
    #[serde(default)]
    pub navigation: Vec<NavigationEntry>,
    #[serde(default)]
    pub cms_pages: Vec<CmsPage>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorefrontSettings {
    pub name: String,
    pub root_navigation_id: Option<String>,
    pub media_base_url: Option<String>,
}

impl StorefrontConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${MEDIA_BASE_URL})，未設定的變數保持原樣。
    /// 變數值會以 TOML 基本字串跳脫，只應出現在雙引號字串內
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| {
            NavigationPageError::ConfigValidationError {
                field: "env_substitution".to_string(),
                message: e.to_string(),
            }
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            match std::env::var(var_name) {
                Ok(value) => escape_basic_string(&value),
                Err(_) => format!("${{{}}}", var_name),
            }
        });

        Ok(result.to_string())
    }

    /// 驗證配置的合理性；CMS 頁面是否存在留給組裝時判斷
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("storefront.name", &self.storefront.name)?;

        if let Some(url) = &self.storefront.media_base_url {
            validate_url("storefront.media_base_url", url)?;
        }

        validate_unique_ids(
            "navigation.id",
            self.navigation.iter().map(|entry| entry.id.as_str()),
        )?;
        for entry in &self.navigation {
            validate_non_empty_string("navigation.name", &entry.name)?;
        }

        let root = self.root_navigation_id()?;
        if !self.navigation.iter().any(|entry| entry.id == root) {
            return Err(NavigationPageError::InvalidConfigValueError {
                field: "storefront.root_navigation_id".to_string(),
                value: root.to_string(),
                reason: "No navigation entry with this id".to_string(),
            });
        }

        validate_unique_ids(
            "cms_pages.id",
            self.cms_pages.iter().map(|page| page.id.as_str()),
        )?;
        for page in &self.cms_pages {
            validate_unique_ids("cms_pages.blocks.slots.id", page.slots().map(|s| s.id.as_str()))?;
        }

        Ok(())
    }

    pub fn root_navigation_id(&self) -> Result<&str> {
        validate_required_field(
            "storefront.root_navigation_id",
            &self.storefront.root_navigation_id,
        )
        .map(String::as_str)
    }

    pub fn page_loader(&self) -> Result<HeaderPageLoader> {
        Ok(HeaderPageLoader::new(
            self.navigation.clone(),
            self.root_navigation_id()?,
        ))
    }

    pub fn cms_page_repository(&self) -> InMemoryCmsPageRepository {
        InMemoryCmsPageRepository::new(self.cms_pages.clone())
    }

    /// Text slots are always resolved; image slots only with a media base URL.
    pub fn slot_data_resolver(&self) -> Result<TypedSlotDataResolver> {
        let mut resolver = TypedSlotDataResolver::new().with_resolver(Box::new(TextSlotResolver));
        if let Some(url) = &self.storefront.media_base_url {
            resolver.register(Box::new(ImageSlotResolver::new(url)?));
        }
        Ok(resolver)
    }
}

/// Escapes `value` for use inside a TOML basic ("...") string.
fn escape_basic_string(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            c if c.is_control() => escaped.push_str(&format!("\\u{:04X}", c as u32)),
            c => escaped.push(c),
        }
    }
    escaped
}

impl Validate for StorefrontConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
