/// Which root(s) [`Solver::get`](crate::Solver::get) returns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Selection {
    /// The lower real root, or the `+` complex root.
    Root1,
    /// The higher real root, or the `-` complex root.
    Root2,
    /// Both roots, joined as `"<root1> and <root2>"`.
    #[default]
    Both,
}

/// Maps the keys `"root1"` and `"root2"`; any other key selects both roots.
impl From<&str> for Selection {
    fn from(key: &str) -> Self {
        match key {
            "root1" => Self::Root1,
            "root2" => Self::Root2,
            _ => Self::Both,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys() {
        assert_eq!(Selection::from("root1"), Selection::Root1);
        assert_eq!(Selection::from("root2"), Selection::Root2);
        assert_eq!(Selection::from("both"), Selection::Both);
        assert_eq!(Selection::from("Root1"), Selection::Both);
        assert_eq!(Selection::from(""), Selection::Both);
    }
}
