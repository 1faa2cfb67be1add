use std::collections::HashSet;

use serde::{Deserialize, Serialize};

/// A department as defined by the prototype registry.
///
/// `roles` holds the job prototype ids that belong to the department. Nothing
/// stops two departments from listing the same role; such entries show up in
/// both sections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DepartmentPrototype {
    pub id: String,
    #[serde(default)]
    pub roles: HashSet<String>,
    /// Free-form description, carried through from the prototype file.
    #[serde(default)]
    pub description: Option<String>,
    /// Display color as a hex string (e.g. `#334E6D`). Unused by the layout.
    #[serde(default)]
    pub color: Option<String>,
}

impl DepartmentPrototype {
    pub fn new<I, S>(id: impl Into<String>, roles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            id: id.into(),
            roles: roles.into_iter().map(Into::into).collect(),
            description: None,
            color: None,
        }
    }

    pub fn contains_role(&self, job_prototype: &str) -> bool {
        self.roles.contains(job_prototype)
    }
}
