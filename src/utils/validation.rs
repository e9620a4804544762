use crate::utils::error::{NavigationPageError, Result};
use std::collections::HashSet;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(NavigationPageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => Ok(()),
            scheme => Err(NavigationPageError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(NavigationPageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value
        .as_ref()
        .ok_or_else(|| NavigationPageError::MissingConfigError {
            field: field_name.to_string(),
        })
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NavigationPageError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 檢查識別碼不可為空且不可重複
pub fn validate_unique_ids<'a, I>(field_name: &str, ids: I) -> Result<()>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut seen = HashSet::new();
    for id in ids {
        validate_non_empty_string(field_name, id)?;
        if !seen.insert(id) {
            return Err(NavigationPageError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: id.to_string(),
                reason: "Duplicate identifier".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("media_base_url", "https://cdn.example.com/media/").is_ok());
        assert!(validate_url("media_base_url", "http://localhost:8000").is_ok());
        assert!(validate_url("media_base_url", "").is_err());
        assert!(validate_url("media_base_url", "not a url").is_err());
        assert!(validate_url("media_base_url", "ftp://example.com").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("home".to_string());
        let missing: Option<String> = None;
        assert_eq!(validate_required_field("root", &present).unwrap(), "home");
        assert!(matches!(
            validate_required_field("root", &missing),
            Err(NavigationPageError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("id", "home").is_ok());
        assert!(validate_non_empty_string("id", "").is_err());
        assert!(validate_non_empty_string("id", "   ").is_err());
    }

    #[test]
    fn test_validate_unique_ids() {
        assert!(validate_unique_ids("navigation.id", ["a", "b", "c"]).is_ok());
        assert!(validate_unique_ids("navigation.id", ["a", "b", "a"]).is_err());
        assert!(validate_unique_ids("navigation.id", ["a", ""]).is_err());
    }
}
