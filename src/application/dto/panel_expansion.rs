/// Which plugin detail panels a rendered report shows expanded
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PanelExpansion {
    /// No anchor was given: every panel is expanded
    #[default]
    All,
    /// A plugin anchor selected exactly one panel
    Only(String),
    /// The results anchor (or an unknown plugin) left every panel collapsed
    None,
}

impl PanelExpansion {
    pub fn is_expanded(&self, plugin_name: &str) -> bool {
        match self {
            PanelExpansion::All => true,
            PanelExpansion::Only(name) => name == plugin_name,
            PanelExpansion::None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_expanded() {
        assert!(PanelExpansion::All.is_expanded("ntia"));
        assert!(PanelExpansion::Only("ntia".to_string()).is_expanded("ntia"));
        assert!(!PanelExpansion::Only("ntia".to_string()).is_expanded("cisa"));
        assert!(!PanelExpansion::None.is_expanded("ntia"));
    }
}
