//! User-identifier extraction from the rendered profile page.

use regex::Regex;
use serde::Deserialize;

use crate::error::{Error, Result};

/// Script marker wrapping the JSON state blob embedded in a profile page.
const SHARED_DATA_PATTERN: &str =
    r#"<script type="text/javascript">window\._sharedData = (.+?);</script>"#;

/// Embedded page state, reduced to the path that carries the profile id.
/// Every level is optional so a decoded-but-reshaped blob surfaces as a
/// schema mismatch instead of a decode failure.
#[derive(Debug, Deserialize)]
struct SharedData {
    entry_data: Option<EntryData>,
}

#[derive(Debug, Deserialize)]
struct EntryData {
    #[serde(rename = "ProfilePage", default)]
    profile_page: Vec<ProfilePage>,
}

#[derive(Debug, Deserialize)]
struct ProfilePage {
    graphql: Option<ProfileGraphql>,
}

#[derive(Debug, Deserialize)]
struct ProfileGraphql {
    user: Option<ProfileUser>,
}

#[derive(Debug, Deserialize)]
struct ProfileUser {
    id: Option<String>,
}

/// Resolve the numeric profile identifier from the page HTML.
pub fn resolve_user_id(html: &str) -> Result<String> {
    let marker = Regex::new(SHARED_DATA_PATTERN).unwrap();
    let blob = marker
        .captures(html)
        .and_then(|captures| captures.get(1))
        .ok_or_else(|| Error::Extraction("shared-data marker not found in profile page".into()))?
        .as_str();

    let shared: SharedData = serde_json::from_str(blob)
        .map_err(|e| Error::Extraction(format!("shared-data blob did not decode: {}", e)))?;

    shared
        .entry_data
        .and_then(|entry| entry.profile_page.into_iter().next())
        .and_then(|page| page.graphql)
        .and_then(|graphql| graphql.user)
        .and_then(|user| user.id)
        .ok_or_else(|| {
            Error::SchemaMismatch(
                "profile page state has no entry_data.ProfilePage[0].graphql.user.id".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page_with(blob: &str) -> String {
        format!(
            "<html><head><link rel=\"preload\" href=\"/static/bundle.js\"></head><body>\
             <script type=\"text/javascript\">window._sharedData = {};</script></body></html>",
            blob
        )
    }

    #[test]
    fn resolves_id_from_valid_page() {
        let html =
            page_with(r#"{"entry_data":{"ProfilePage":[{"graphql":{"user":{"id":"123456"}}}]}}"#);
        assert_eq!(resolve_user_id(&html).unwrap(), "123456");
    }

    #[test]
    fn missing_marker_is_extraction_failure() {
        let err = resolve_user_id("<html><body>nothing here</body></html>").unwrap_err();
        assert!(matches!(err, Error::Extraction(_)));
    }

    #[test]
    fn undecodable_blob_is_extraction_failure() {
        let html = page_with("{this is not json}");
        assert!(matches!(
            resolve_user_id(&html).unwrap_err(),
            Error::Extraction(_)
        ));
    }

    #[test]
    fn missing_id_field_is_schema_mismatch() {
        let html = page_with(r#"{"entry_data":{"ProfilePage":[{"graphql":{"user":{}}}]}}"#);
        assert!(matches!(
            resolve_user_id(&html).unwrap_err(),
            Error::SchemaMismatch(_)
        ));
    }

    #[test]
    fn empty_profile_page_list_is_schema_mismatch() {
        let html = page_with(r#"{"entry_data":{"ProfilePage":[]}}"#);
        assert!(matches!(
            resolve_user_id(&html).unwrap_err(),
            Error::SchemaMismatch(_)
        ));
    }
}
