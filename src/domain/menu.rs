use bigdecimal::BigDecimal;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub id: Uuid,
    pub name: String,
    /// Comma-separated tags, stored exactly as submitted.
    pub categories: Option<String>,
    pub description: Option<String>,
    pub price: BigDecimal,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NewMenuItem {
    pub name: String,
    pub categories: Option<String>,
    pub description: Option<String>,
    pub price: BigDecimal,
}

impl MenuItem {
    /// The item's category names: split on commas, trimmed, empties dropped.
    /// Duplicates are kept; callers that need a set collect into one.
    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        split_categories(self.categories.as_deref().unwrap_or_default())
    }

    pub fn has_category(&self, category: &str) -> bool {
        let wanted = category.trim();
        self.category_names().any(|c| c == wanted)
    }
}

pub fn split_categories(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',').map(str::trim).filter(|c| !c.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn item(categories: Option<&str>) -> MenuItem {
        MenuItem {
            id: Uuid::new_v4(),
            name: "Burger".to_string(),
            categories: categories.map(str::to_string),
            description: None,
            price: BigDecimal::from_str("9.50").expect("valid decimal"),
            created_at: Utc::now(),
        }
    }

    #[test]
    fn split_trims_and_drops_empty_segments() {
        let names: Vec<&str> = split_categories(" mains, grill ,,  ,drinks").collect();
        assert_eq!(names, vec!["mains", "grill", "drinks"]);
    }

    #[test]
    fn missing_categories_yield_nothing() {
        assert_eq!(item(None).category_names().count(), 0);
    }

    #[test]
    fn has_category_matches_trimmed_names() {
        let burger = item(Some("mains , grill"));
        assert!(burger.has_category("grill"));
        assert!(burger.has_category(" mains "));
        assert!(!burger.has_category("drinks"));
        assert!(!burger.has_category("main"));
    }
}
