//! Two-level tree of connection groups.
//!
//! Groups are built once at startup and never mutated afterwards.

/// A named collection of connection targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub name: String,
    /// Connection names in display order. May be empty.
    pub connections: Vec<String>,
}

impl Group {
    pub fn new<S: Into<String>>(
        name: impl Into<String>,
        connections: impl IntoIterator<Item = S>,
    ) -> Self {
        Self {
            name: name.into(),
            connections: connections.into_iter().map(Into::into).collect(),
        }
    }

    /// `true` when the group has no connections (rendered as a placeholder).
    pub fn is_empty(&self) -> bool {
        self.connections.is_empty()
    }
}

/// The built-in group list shown at startup.
pub fn default_groups() -> Vec<Group> {
    vec![
        Group::new("Group 1", ["Connection 1"]),
        Group::new("Group 2", ["Connection 2", "Connection 3"]),
        Group::new("Group 3", ["Connection 4"]),
        Group::new("Group 4", Vec::<String>::new()),
        Group::new("Group 5", ["Connection 5"]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_groups_keep_declared_order() {
        let names: Vec<_> = default_groups().into_iter().map(|g| g.name).collect();
        assert_eq!(names, ["Group 1", "Group 2", "Group 3", "Group 4", "Group 5"]);
    }

    #[test]
    fn only_group_four_is_empty() {
        let empty: Vec<_> = default_groups()
            .into_iter()
            .filter(Group::is_empty)
            .map(|g| g.name)
            .collect();
        assert_eq!(empty, ["Group 4"]);
    }

    #[test]
    fn new_accepts_owned_and_borrowed_names() {
        let a = Group::new("a", vec![String::from("x")]);
        let b = Group::new(String::from("a"), ["x"]);
        assert_eq!(a, b);
    }
}
