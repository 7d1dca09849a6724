use serde::Serialize;
use tracing::warn;

use crate::render::templates::{TemplateSpec, ALIASES, CLASSIC, TEMPLATES};

/// Catalogue entry served by the templates endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub label: &'static str,
    /// Whether `layout: "two-column"` changes the output.
    pub honours_layout: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct AliasInfo {
    pub name: &'static str,
    pub renders_as: &'static str,
}

/// Looks up a template by its normalized name, following aliases.
pub fn resolve(key: &str) -> Option<&'static TemplateSpec> {
    let target = ALIASES
        .iter()
        .find(|(alias, _)| *alias == key)
        .map_or(key, |(_, target)| *target);
    TEMPLATES.iter().copied().find(|spec| spec.name == target)
}

/// Maps a requested template name to its spec. Case and surrounding
/// whitespace are ignored; empty and unknown names get the classic template.
pub fn dispatch(template: &str) -> &'static TemplateSpec {
    let key = template.trim().to_lowercase();
    if key.is_empty() {
        return &CLASSIC;
    }
    match resolve(&key) {
        Some(spec) => spec,
        None => {
            warn!(template = %template, "unknown resume template, using classic");
            &CLASSIC
        }
    }
}

pub fn catalogue() -> Vec<TemplateInfo> {
    TEMPLATES
        .iter()
        .map(|spec| TemplateInfo {
            name: spec.name,
            label: spec.label,
            honours_layout: spec.honours_layout(),
        })
        .collect()
}

pub fn aliases() -> Vec<AliasInfo> {
    ALIASES
        .iter()
        .map(|&(name, renders_as)| AliasInfo { name, renders_as })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_ignores_case_and_whitespace() {
        for spec in TEMPLATES {
            let shouty = format!("  {}\t", spec.name.to_uppercase());
            assert!(std::ptr::eq(dispatch(&shouty), spec), "{}", spec.name);
            assert!(std::ptr::eq(dispatch(spec.name), spec));
        }
        assert_eq!(dispatch(" Executive ").name, "executive");
    }

    #[test]
    fn test_empty_and_unknown_fall_back_to_classic() {
        assert_eq!(dispatch("").name, "classic");
        assert_eq!(dispatch("   ").name, "classic");
        assert_eq!(dispatch("nonexistent").name, "classic");
    }

    #[test]
    fn test_dispatched_name_resolves_directly() {
        for requested in ["nonexistent", "Modern", "  TECHNICAL ", ""] {
            let spec = dispatch(requested);
            assert!(std::ptr::eq(resolve(spec.name).unwrap(), spec), "{requested:?}");
        }
    }

    #[test]
    fn test_aliases_resolve_to_classic() {
        assert_eq!(dispatch("Modern").name, "classic");
        assert_eq!(dispatch("corporate").name, "classic");
        assert!(resolve("nonexistent").is_none());
    }

    #[test]
    fn test_catalogue_lists_all_templates() {
        let names: Vec<_> = catalogue().into_iter().map(|t| t.name).collect();
        assert_eq!(
            names,
            vec![
                "classic",
                "executive",
                "minimalist",
                "creative",
                "technical",
                "professional",
                "academic",
                "elegant"
            ]
        );
        assert_eq!(aliases().len(), 2);
    }
}
