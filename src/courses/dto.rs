use serde::{Deserialize, Deserializer};

use super::repo_types::CourseDraft;

/// Body of `POST /courses` and `PUT /courses/:id`.
///
/// For the optional fields an absent key leaves the stored value alone while
/// an explicit `null` clears it, hence the double `Option`. Any `userId` sent
/// by the client is ignored; the owner is always the authenticated caller.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    #[serde(default, deserialize_with = "present")]
    pub estimated_time: Option<Option<String>>,
    #[serde(default, deserialize_with = "present")]
    pub materials_needed: Option<Option<String>>,
}

fn present<'de, D>(d: D) -> Result<Option<Option<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<String>::deserialize(d).map(Some)
}

impl CourseRequest {
    /// Overlays the provided fields on `base`.
    pub fn apply_to(self, mut base: CourseDraft) -> CourseDraft {
        if let Some(title) = self.title {
            base.title = title;
        }
        if let Some(description) = self.description {
            base.description = description;
        }
        if let Some(estimated_time) = self.estimated_time {
            base.estimated_time = estimated_time;
        }
        if let Some(materials_needed) = self.materials_needed {
            base.materials_needed = materials_needed;
        }
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_null_differ() {
        let req: CourseRequest =
            serde_json::from_str(r#"{"title":"Rust","materialsNeeded":null}"#).unwrap();
        assert_eq!(req.title.as_deref(), Some("Rust"));
        assert_eq!(req.description, None);
        assert_eq!(req.estimated_time, None);
        assert_eq!(req.materials_needed, Some(None));
    }

    #[test]
    fn apply_keeps_untouched_fields() {
        let base = CourseDraft {
            title: "Old".into(),
            description: "Desc".into(),
            estimated_time: Some("2h".into()),
            materials_needed: Some("laptop".into()),
        };
        let req: CourseRequest =
            serde_json::from_str(r#"{"title":"New","materialsNeeded":null,"userId":42}"#)
                .unwrap();
        let merged = req.apply_to(base);
        assert_eq!(merged.title, "New");
        assert_eq!(merged.description, "Desc");
        assert_eq!(merged.estimated_time.as_deref(), Some("2h"));
        assert_eq!(merged.materials_needed, None);
    }
}
