use std::borrow::Cow;

/// Fragment prefix addressing a plugin's detail panel
pub const PLUGIN_ANCHOR_PREFIX: &str = "#plugin-";

/// Element id of the results summary section
pub const ASSESSMENT_RESULTS_ID: &str = "assessment-results";

/// What a location hash points at
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnchorTarget {
    Plugin(String),
    AssessmentResults,
    /// Empty hash or any fragment this view does not own
    Other,
}

impl AnchorTarget {
    pub fn parse(hash: &str) -> Self {
        if let Some(name) = extract_plugin_name(hash) {
            return AnchorTarget::Plugin(name);
        }
        if hash.strip_prefix('#') == Some(ASSESSMENT_RESULTS_ID) {
            return AnchorTarget::AssessmentResults;
        }
        AnchorTarget::Other
    }
}

/// `"#plugin-ntia"` -> `Some("ntia")`; anything else -> `None`
///
/// Percent-encoded names are decoded.
pub fn extract_plugin_name(hash: &str) -> Option<String> {
    let raw = hash.strip_prefix(PLUGIN_ANCHOR_PREFIX)?;
    if raw.is_empty() {
        return None;
    }
    let decoded = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    Some(decoded.into_owned())
}

/// Element id of a plugin panel: `plugin-<name>`
pub fn plugin_panel_id(plugin_name: &str) -> String {
    format!("plugin-{}", urlencoding::encode(plugin_name))
}

/// Fragment addressing a plugin panel: `#plugin-<name>`
pub fn plugin_anchor(plugin_name: &str) -> String {
    format!("#{}", plugin_panel_id(plugin_name))
}

/// SBOM detail page URL anchored at one plugin's panel
pub fn plugin_detail_url(component_id: &str, sbom_id: &str, plugin_name: &str) -> String {
    format!(
        "{}{}",
        sbom_detail_path(component_id, sbom_id),
        plugin_anchor(plugin_name)
    )
}

/// SBOM detail page URL anchored at the results summary
pub fn assessment_results_url(component_id: &str, sbom_id: &str) -> String {
    format!(
        "{}#{}",
        sbom_detail_path(component_id, sbom_id),
        ASSESSMENT_RESULTS_ID
    )
}

fn sbom_detail_path(component_id: &str, sbom_id: &str) -> String {
    format!(
        "/component/{}/sbom/{}/",
        urlencoding::encode(component_id),
        urlencoding::encode(sbom_id)
    )
}
