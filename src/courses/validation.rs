use super::repo_types::CourseDraft;
use crate::validation::{require, Violation};

pub fn validate_course(draft: &CourseDraft) -> Vec<Violation> {
    let mut out = Vec::new();
    require(&mut out, "title", Some(draft.title.as_str()));
    require(&mut out, "description", Some(draft.description.as_str()));
    out
}
