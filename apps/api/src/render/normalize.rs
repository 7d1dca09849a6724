use serde_json::{Map, Value};

use crate::models::{ContentField, ResumeContent, StudentIdentity, DEFAULT_STUDENT_NAME};

/// Coerces arbitrary JSON into the shapes the templates read.
///
/// Only JSON strings survive; anything else (null, numbers, arrays, objects,
/// missing keys) becomes an empty string. A blank or non-string name becomes
/// "Student". Never fails.
pub fn normalize(raw_content: &Value, raw_identity: &Value) -> (ResumeContent, StudentIdentity) {
    (normalize_content(raw_content), normalize_identity(raw_identity))
}

fn normalize_content(raw: &Value) -> ResumeContent {
    let empty = Map::new();
    let object = raw.as_object().unwrap_or(&empty);

    let mut content = ResumeContent::default();
    for field in ContentField::ALL {
        let value = std::iter::once(field.key())
            .chain(field.camel_key())
            .find_map(|key| object.get(key).and_then(Value::as_str));
        if let Some(value) = value {
            *content.field_mut(field) = value.to_string();
        }
    }
    content
}

fn normalize_identity(raw: &Value) -> StudentIdentity {
    let string_at = |key: &str| raw.get(key).and_then(Value::as_str);

    let name = string_at("name")
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .unwrap_or(DEFAULT_STUDENT_NAME);

    StudentIdentity {
        name: name.to_string(),
        email: string_at("email").unwrap_or_default().to_string(),
        branch: string_at("branch").unwrap_or_default().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_non_string_fields_become_empty() {
        for bad in [json!(null), json!(42), json!({"nested": true}), json!(["a"]), json!(false)] {
            let raw = Value::Object(
                ContentField::ALL
                    .iter()
                    .map(|f| (f.key().to_string(), bad.clone()))
                    .collect(),
            );
            let (content, _) = normalize(&raw, &json!({}));
            assert_eq!(content, ResumeContent::default(), "input {bad}");
        }
    }

    #[test]
    fn test_missing_and_non_object_content() {
        let (content, _) = normalize(&json!({}), &json!({}));
        assert_eq!(content, ResumeContent::default());
        let (content, _) = normalize(&json!("not an object"), &json!(null));
        assert_eq!(content, ResumeContent::default());
    }

    #[test]
    fn test_strings_are_kept_verbatim() {
        let (content, _) = normalize(&json!({"skills": "Python\nSQL", "objective": "  Backend  "}), &json!({}));
        assert_eq!(content.skills, "Python\nSQL");
        assert_eq!(content.objective, "  Backend  ");
    }

    #[test]
    fn test_camel_case_aliases() {
        let (content, _) = normalize(
            &json!({"referencesInfo": "On request", "additionalInfo": "Chess"}),
            &json!({}),
        );
        assert_eq!(content.references_info, "On request");
        assert_eq!(content.additional_info, "Chess");

        let (content, _) = normalize(
            &json!({"references_info": "snake wins", "referencesInfo": "camel"}),
            &json!({}),
        );
        assert_eq!(content.references_info, "snake wins");
    }

    #[test]
    fn test_identity_defaults() {
        for raw in [json!(null), json!({}), json!({"name": 7, "email": [], "branch": {}}), json!({"name": "   "})] {
            let (_, identity) = normalize(&json!({}), &raw);
            assert_eq!(identity, StudentIdentity::default(), "input {raw}");
        }
    }

    #[test]
    fn test_identity_values_pass_through() {
        let (_, identity) = normalize(
            &json!({}),
            &json!({"name": " Asha Rao ", "email": "a@x.edu", "branch": "CS"}),
        );
        assert_eq!(identity.name, "Asha Rao");
        assert_eq!(identity.email, "a@x.edu");
        assert_eq!(identity.branch, "CS");
    }
}
