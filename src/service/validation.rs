//! Payload validation for wiki writes.

use crate::error::AppError;
use crate::model::{WikiFields, WikiPayload};
use regex::Regex;
use std::sync::OnceLock;

pub const SLUG_MAX_LENGTH: usize = 128;
pub const TITLE_MAX_LENGTH: usize = 255;

fn slug_pattern() -> &'static Regex {
    static SLUG: OnceLock<Regex> = OnceLock::new();
    SLUG.get_or_init(|| Regex::new(r"^[a-z0-9]+(?:[-_][a-z0-9]+)*$").expect("slug pattern compiles"))
}

pub struct RequestValidator;

impl RequestValidator {
    /// Check a payload and turn it into storable fields. `full_title` falls back to `title`.
    pub fn wiki_fields(payload: &WikiPayload) -> Result<WikiFields, AppError> {
        let slug = payload.slug.trim();
        if slug.is_empty() {
            return Err(AppError::Validation("slug is required".into()));
        }
        if slug.len() > SLUG_MAX_LENGTH {
            return Err(AppError::Validation(format!(
                "slug must be at most {} characters",
                SLUG_MAX_LENGTH
            )));
        }
        if !slug_pattern().is_match(slug) {
            return Err(AppError::Validation(
                "slug may only contain lowercase letters, digits, '-' and '_'".into(),
            ));
        }

        let title = required_text("title", &payload.title)?;
        let full_title = match payload.full_title.as_deref() {
            Some(ft) => required_text("full_title", ft)?,
            None => title.clone(),
        };

        Ok(WikiFields {
            slug: slug.to_string(),
            title,
            kind: payload.kind,
            full_title,
        })
    }
}

fn required_text(field: &str, value: &str) -> Result<String, AppError> {
    let value = value.trim();
    if value.is_empty() {
        return Err(AppError::Validation(format!("{} is required", field)));
    }
    if value.chars().count() > TITLE_MAX_LENGTH {
        return Err(AppError::Validation(format!(
            "{} must be at most {} characters",
            field, TITLE_MAX_LENGTH
        )));
    }
    Ok(value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::WikiKind;

    fn payload(slug: &str, title: &str, full_title: Option<&str>) -> WikiPayload {
        WikiPayload {
            id: None,
            slug: slug.into(),
            title: title.into(),
            kind: WikiKind::Region,
            full_title: full_title.map(String::from),
        }
    }

    #[test]
    fn full_title_defaults_to_title() {
        let fields = RequestValidator::wiki_fields(&payload("forest", " Forest ", None)).unwrap();
        assert_eq!(fields.title, "Forest");
        assert_eq!(fields.full_title, "Forest");
    }

    #[test]
    fn slug_shape_is_enforced() {
        for bad in ["", "Forest", "deep forest", "-forest", "forest-", "great--forest", "forêt"] {
            let err = RequestValidator::wiki_fields(&payload(bad, "Forest", None)).unwrap_err();
            assert!(matches!(err, AppError::Validation(_)), "{:?} accepted", bad);
        }
        assert!(RequestValidator::wiki_fields(&payload("great-forest_2", "Forest", None)).is_ok());
    }

    #[test]
    fn blank_titles_are_rejected() {
        let err = RequestValidator::wiki_fields(&payload("forest", "Forest", Some("   "))).unwrap_err();
        assert_eq!(err.to_string(), "full_title is required");
    }

    #[test]
    fn long_titles_are_rejected() {
        let long = "é".repeat(TITLE_MAX_LENGTH + 1);
        assert!(RequestValidator::wiki_fields(&payload("forest", &long, None)).is_err());
        let fits = "é".repeat(TITLE_MAX_LENGTH);
        assert!(RequestValidator::wiki_fields(&payload("forest", &fits, None)).is_ok());
    }
}
