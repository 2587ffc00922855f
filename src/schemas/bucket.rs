//! Bucket schema - The fixed item categories of the project index

/// One of the four item categories held under `items` in the index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BucketKind {
    Tasks,
    Epics,
    Features,
    Prds,
}

/// Bucket scan order for auto resolution.
///
/// When an id exists in more than one bucket, the earliest bucket here wins.
pub const BUCKET_PRIORITY: &[BucketKind] = &[
    BucketKind::Tasks,
    BucketKind::Epics,
    BucketKind::Features,
    BucketKind::Prds,
];

impl BucketKind {
    /// Canonical (plural) bucket name as it appears in the index
    pub fn as_str(&self) -> &'static str {
        match self {
            BucketKind::Tasks => "tasks",
            BucketKind::Epics => "epics",
            BucketKind::Features => "features",
            BucketKind::Prds => "prds",
        }
    }

    /// Singular spelling, e.g. `task`
    pub fn singular(&self) -> &'static str {
        match self {
            BucketKind::Tasks => "task",
            BucketKind::Epics => "epic",
            BucketKind::Features => "feature",
            BucketKind::Prds => "prd",
        }
    }
}

impl std::fmt::Display for BucketKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for BucketKind {
    type Err = String;

    /// Accepts both singular and plural spellings.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "task" | "tasks" => Ok(BucketKind::Tasks),
            "epic" | "epics" => Ok(BucketKind::Epics),
            "feature" | "features" => Ok(BucketKind::Features),
            "prd" | "prds" => Ok(BucketKind::Prds),
            _ => Err(format!("Unknown item type: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_priority_order() {
        assert_eq!(
            BUCKET_PRIORITY,
            &[BucketKind::Tasks, BucketKind::Epics, BucketKind::Features, BucketKind::Prds]
        );
    }

    #[test]
    fn test_parse_aliases() {
        for (input, expected) in [
            ("task", BucketKind::Tasks),
            ("tasks", BucketKind::Tasks),
            ("epic", BucketKind::Epics),
            ("epics", BucketKind::Epics),
            ("feature", BucketKind::Features),
            ("features", BucketKind::Features),
            ("prd", BucketKind::Prds),
            ("prds", BucketKind::Prds),
        ] {
            assert_eq!(input.parse::<BucketKind>().unwrap(), expected, "alias {input}");
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!("story".parse::<BucketKind>().is_err());
        assert!("Tasks".parse::<BucketKind>().is_err());
        assert!("".parse::<BucketKind>().is_err());
    }

    #[test]
    fn test_names() {
        assert_eq!(BucketKind::Prds.to_string(), "prds");
        assert_eq!(BucketKind::Prds.singular(), "prd");
    }
}
