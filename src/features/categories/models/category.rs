use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Database model for category
///
/// Categories are stored flat; `parent_id` links a row to its parent and
/// `level` is the depth (roots are level 1).
#[derive(Debug, Clone, FromRow)]
#[allow(dead_code)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub level: i32,
    pub admin_id: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl Category {
    /// Depth of a category created under `parent` (or as a root)
    pub fn level_under(parent: Option<&Category>) -> i32 {
        parent.map_or(1, |p| p.level + 1)
    }

    /// Case-insensitive slug comparison used by path lookup and sibling checks
    pub fn slug_matches(&self, slug: &str) -> bool {
        self.slug.to_lowercase() == slug.to_lowercase()
    }
}

/// Insert payload for a category; `level` is derived by the store
#[derive(Debug, Clone)]
pub struct NewCategory {
    pub name: String,
    pub slug: String,
    pub parent_id: Option<i64>,
    pub admin_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::test_helpers::category;

    #[test]
    fn test_level_under() {
        let root = category(1, "Men", None, 1);
        let child = category(2, "Clothing", Some(1), 2);

        assert_eq!(Category::level_under(None), 1);
        assert_eq!(Category::level_under(Some(&root)), 2);
        assert_eq!(Category::level_under(Some(&child)), 3);
    }

    #[test]
    fn test_slug_matches_ignores_case() {
        let mut c = category(1, "Men", None, 1);
        c.slug = "Men".to_string();

        assert!(c.slug_matches("men"));
        assert!(c.slug_matches("MEN"));
        assert!(!c.slug_matches("women"));
    }
}
