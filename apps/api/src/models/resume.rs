use serde::Serialize;

/// The ten free-text resume fields the portal collects.
///
/// Every field is guaranteed to be a string once it leaves the normalizer;
/// multi-line fields are split into entries at render time.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResumeContent {
    pub objective: String,
    pub education: String,
    pub skills: String,
    pub languages: String,
    pub experience: String,
    pub projects: String,
    pub certifications: String,
    pub achievements: String,
    pub references_info: String,
    pub additional_info: String,
}

impl ResumeContent {
    pub fn field(&self, field: ContentField) -> &str {
        match field {
            ContentField::Objective => &self.objective,
            ContentField::Education => &self.education,
            ContentField::Skills => &self.skills,
            ContentField::Languages => &self.languages,
            ContentField::Experience => &self.experience,
            ContentField::Projects => &self.projects,
            ContentField::Certifications => &self.certifications,
            ContentField::Achievements => &self.achievements,
            ContentField::ReferencesInfo => &self.references_info,
            ContentField::AdditionalInfo => &self.additional_info,
        }
    }

    pub fn field_mut(&mut self, field: ContentField) -> &mut String {
        match field {
            ContentField::Objective => &mut self.objective,
            ContentField::Education => &mut self.education,
            ContentField::Skills => &mut self.skills,
            ContentField::Languages => &mut self.languages,
            ContentField::Experience => &mut self.experience,
            ContentField::Projects => &mut self.projects,
            ContentField::Certifications => &mut self.certifications,
            ContentField::Achievements => &mut self.achievements,
            ContentField::ReferencesInfo => &mut self.references_info,
            ContentField::AdditionalInfo => &mut self.additional_info,
        }
    }

    /// True when the field has something other than whitespace in it.
    pub fn has(&self, field: ContentField) -> bool {
        !self.field(field).trim().is_empty()
    }
}

/// Names one of the [`ResumeContent`] fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentField {
    Objective,
    Education,
    Skills,
    Languages,
    Experience,
    Projects,
    Certifications,
    Achievements,
    ReferencesInfo,
    AdditionalInfo,
}

impl ContentField {
    pub const ALL: [ContentField; 10] = [
        ContentField::Objective,
        ContentField::Education,
        ContentField::Skills,
        ContentField::Languages,
        ContentField::Experience,
        ContentField::Projects,
        ContentField::Certifications,
        ContentField::Achievements,
        ContentField::ReferencesInfo,
        ContentField::AdditionalInfo,
    ];

    /// JSON key used by the portal backend.
    pub fn key(self) -> &'static str {
        match self {
            ContentField::Objective => "objective",
            ContentField::Education => "education",
            ContentField::Skills => "skills",
            ContentField::Languages => "languages",
            ContentField::Experience => "experience",
            ContentField::Projects => "projects",
            ContentField::Certifications => "certifications",
            ContentField::Achievements => "achievements",
            ContentField::ReferencesInfo => "references_info",
            ContentField::AdditionalInfo => "additional_info",
        }
    }

    /// camelCase spelling sent by the mobile client, where it differs.
    pub fn camel_key(self) -> Option<&'static str> {
        match self {
            ContentField::ReferencesInfo => Some("referencesInfo"),
            ContentField::AdditionalInfo => Some("additionalInfo"),
            _ => None,
        }
    }
}

/// Who the resume belongs to. `name` is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StudentIdentity {
    pub name: String,
    pub email: String,
    pub branch: String,
}

pub const DEFAULT_STUDENT_NAME: &str = "Student";

impl Default for StudentIdentity {
    fn default() -> Self {
        Self {
            name: DEFAULT_STUDENT_NAME.to_string(),
            email: String::new(),
            branch: String::new(),
        }
    }
}

impl StudentIdentity {
    /// Non-empty contact parts (email, branch) in display order.
    pub fn contact_parts(&self) -> Vec<&str> {
        [self.email.trim(), self.branch.trim()]
            .into_iter()
            .filter(|part| !part.is_empty())
            .collect()
    }
}

/// Column arrangement requested by the caller.
///
/// Only some templates branch on this; the rest accept and ignore it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayoutMode {
    #[default]
    SingleColumn,
    TwoColumn,
}

impl LayoutMode {
    /// Lenient parse: anything that is not `two-column` is single column.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "two-column" | "two_column" | "twocolumn" => LayoutMode::TwoColumn,
            _ => LayoutMode::SingleColumn,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_accessors_cover_all_fields() {
        let mut content = ResumeContent::default();
        for (i, field) in ContentField::ALL.iter().enumerate() {
            *content.field_mut(*field) = format!("value {i}");
        }
        for (i, field) in ContentField::ALL.iter().enumerate() {
            assert_eq!(content.field(*field), format!("value {i}"));
        }
    }

    #[test]
    fn test_has_ignores_whitespace() {
        let content = ResumeContent {
            skills: "  \n\t ".to_string(),
            objective: "Build things".to_string(),
            ..Default::default()
        };
        assert!(!content.has(ContentField::Skills));
        assert!(content.has(ContentField::Objective));
    }

    #[test]
    fn test_contact_parts_skip_empty() {
        let identity = StudentIdentity {
            name: "Asha Rao".to_string(),
            email: String::new(),
            branch: "CS".to_string(),
        };
        assert_eq!(identity.contact_parts(), vec!["CS"]);
    }

    #[test]
    fn test_layout_mode_parse() {
        assert_eq!(LayoutMode::parse(" Two-Column "), LayoutMode::TwoColumn);
        assert_eq!(LayoutMode::parse("single-column"), LayoutMode::SingleColumn);
        assert_eq!(LayoutMode::parse("grid"), LayoutMode::SingleColumn);
        assert_eq!(LayoutMode::parse(""), LayoutMode::SingleColumn);
    }
}
