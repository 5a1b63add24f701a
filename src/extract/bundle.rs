//! Query-signature extraction from the profile page's JavaScript bundle.

use regex::Regex;

use crate::api::InstagramApi;
use crate::error::{Error, Result};

/// Preload link referencing the bundle that declares the query signatures.
const PRELOAD_LINK_PATTERN: &str = r#"<link rel="preload" href="(.+?)""#;

/// Signature-assignment token inside the bundle.
const QUERY_ID_PATTERN: &str = r#"queryId:"(.+?)""#;

/// Ordinal of the signature assignment that belongs to the profile
/// timeline query. The bundle declares several signatures and their
/// position tracks the current bundle layout, not a documented contract;
/// expect this to move across platform releases.
pub const TIMELINE_QUERY_SIGNATURE_INDEX: usize = 2;

/// Extract the preload bundle path from the profile page HTML.
pub fn bundle_path(html: &str) -> Result<String> {
    let link = Regex::new(PRELOAD_LINK_PATTERN).unwrap();
    link.captures(html)
        .and_then(|captures| captures.get(1))
        .map(|m| m.as_str().to_string())
        .ok_or_else(|| Error::Extraction("preload bundle link not found in profile page".into()))
}

/// Scan bundle text for every declared query signature, in order.
pub fn scan_query_signatures(bundle: &str) -> Vec<String> {
    let token = Regex::new(QUERY_ID_PATTERN).unwrap();
    token
        .captures_iter(bundle)
        .filter_map(|captures| captures.get(1).map(|m| m.as_str().to_string()))
        .collect()
}

/// Pick the timeline-query signature out of the scanned declarations.
pub fn select_timeline_signature(signatures: Vec<String>) -> Result<String> {
    let found = signatures.len();
    signatures
        .into_iter()
        .nth(TIMELINE_QUERY_SIGNATURE_INDEX)
        .ok_or_else(|| {
            Error::Extraction(format!(
                "bundle declares {} query signature(s), need at least {}",
                found,
                TIMELINE_QUERY_SIGNATURE_INDEX + 1
            ))
        })
}

/// Resolve the media-listing query signature for this run: locate the
/// preload bundle in the page, fetch it, and select the signature at
/// [`TIMELINE_QUERY_SIGNATURE_INDEX`].
pub async fn resolve_query_signature(api: &InstagramApi, html: &str) -> Result<String> {
    let path = bundle_path(html)?;
    let bundle = api.fetch_asset(&path).await?;
    select_timeline_signature(scan_query_signatures(&bundle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scans_signatures_in_declaration_order() {
        let bundle = r#"a={queryId:"aaa111"};b={queryId:"bbb222"};c={queryId:"ccc333"};d={queryId:"ddd444"}"#;
        assert_eq!(
            scan_query_signatures(bundle),
            vec!["aaa111", "bbb222", "ccc333", "ddd444"]
        );
    }

    #[test]
    fn selects_third_signature_regardless_of_earlier_values() {
        let signatures = vec![
            "first".to_string(),
            "second".to_string(),
            "third".to_string(),
            "fourth".to_string(),
        ];
        assert_eq!(select_timeline_signature(signatures).unwrap(), "third");
    }

    #[test]
    fn too_few_signatures_is_extraction_failure() {
        let signatures = scan_query_signatures(r#"x={queryId:"only"};y={queryId:"two"}"#);
        assert!(matches!(
            select_timeline_signature(signatures).unwrap_err(),
            Error::Extraction(_)
        ));
    }

    #[test]
    fn bundle_path_from_preload_link() {
        let html = r#"<head><link rel="preload" href="/static/bundles/ProfilePageContainer.js" as="script"></head>"#;
        assert_eq!(
            bundle_path(html).unwrap(),
            "/static/bundles/ProfilePageContainer.js"
        );
    }

    #[test]
    fn missing_preload_link_is_extraction_failure() {
        assert!(matches!(
            bundle_path("<head></head>").unwrap_err(),
            Error::Extraction(_)
        ));
    }
}
