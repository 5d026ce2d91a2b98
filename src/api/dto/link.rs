//! DTOs for the create-link endpoint.

use serde::{Deserialize, Serialize, de::Error as _};

use crate::error::ValidationError;

/// Request to create a short link.
///
/// Missing fields decode as empty strings so that they are reported by
/// [`CreateLinkRequest::validate`] rather than as decode failures.
#[derive(Debug, Default, Deserialize)]
pub struct CreateLinkRequest {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub link: String,
}

impl CreateLinkRequest {
    /// Decodes the first JSON value in `body`.
    ///
    /// Anything after that value is ignored. `null` decodes to an empty
    /// request. An empty body is an error.
    pub fn decode(body: &[u8]) -> Result<Self, serde_json::Error> {
        serde_json::Deserializer::from_slice(body)
            .into_iter::<Option<CreateLinkRequest>>()
            .next()
            .unwrap_or_else(|| Err(serde_json::Error::custom("request body is empty")))
            .map(Option::unwrap_or_default)
    }

    /// Checks the title first, then the link.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.title.is_empty() {
            return Err(ValidationError::TitleEmpty);
        }
        if self.link.is_empty() {
            return Err(ValidationError::LinkEmpty);
        }
        Ok(())
    }
}

/// Response carrying the full short URL.
#[derive(Debug, Serialize, Deserialize)]
pub struct CreateLinkResponse {
    pub link: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(title: &str, link: &str) -> CreateLinkRequest {
        CreateLinkRequest {
            title: title.to_string(),
            link: link.to_string(),
        }
    }

    #[test]
    fn test_validate_ok() {
        assert!(request("My Link", "https://www.google.com").validate().is_ok());
    }

    #[test]
    fn test_validate_title_checked_first() {
        assert_eq!(request("", "").validate(), Err(ValidationError::TitleEmpty));
    }

    #[test]
    fn test_validate_link_empty() {
        assert_eq!(
            request("My Link", "").validate(),
            Err(ValidationError::LinkEmpty)
        );
    }

    #[test]
    fn test_missing_fields_default_to_empty() {
        let req: CreateLinkRequest = serde_json::from_str(r#"{"title":"only title"}"#).unwrap();

        assert_eq!(req.title, "only title");
        assert!(req.link.is_empty());
        assert_eq!(req.validate(), Err(ValidationError::LinkEmpty));
    }

    #[test]
    fn test_empty_body_fails_to_decode() {
        assert!(CreateLinkRequest::decode(b"").is_err());
        assert!(CreateLinkRequest::decode(b"  \n").is_err());
    }

    #[test]
    fn test_null_decodes_to_empty_request() {
        let req = CreateLinkRequest::decode(b"null").unwrap();

        assert!(req.title.is_empty());
        assert_eq!(req.validate(), Err(ValidationError::TitleEmpty));
    }

    #[test]
    fn test_trailing_data_is_ignored() {
        let req =
            CreateLinkRequest::decode(br#"{"title":"t","link":"https://a.example"} trailing"#)
                .unwrap();

        assert_eq!(req.title, "t");
        assert_eq!(req.link, "https://a.example");
    }

    #[test]
    fn test_wrong_types_fail_to_decode() {
        assert!(CreateLinkRequest::decode(br#"{"title":1,"link":"x"}"#).is_err());
    }
}
