//! Inference URL construction.

/// Extract the model slug from a `<workspace>/<slug>` identifier.
///
/// The workspace segment is discarded; everything after the first `/` is
/// kept. Returns `None` when the identifier has no workspace separator.
pub(crate) fn model_slug(model_id: &str) -> Option<&str> {
    model_id.split_once('/').map(|(_, slug)| slug)
}

/// Compose the query-parameterized inference URL.
///
/// `base_url` is expected to carry a trailing slash.
pub(crate) fn inference_url(base_url: &str, slug: &str, version: &str, api_key: &str) -> String {
    format!("{base_url}{slug}/{version}?api_key={api_key}&name=YOUR_IMAGE.jpg")
}
