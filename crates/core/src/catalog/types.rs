//! Types for the category and term trees.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A category node. Sub categories are keyed by their id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    #[serde(default)]
    pub id: String,
    /// Parent category id.
    #[serde(default)]
    pub pid: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub cats: HashMap<String, Category>,
}

/// The whole category tree, as returned by `/categories/tree`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Categories {
    pub categories: HashMap<String, Category>,
}

impl Categories {
    /// Find a category anywhere in the tree by id.
    pub fn find(&self, id: &str) -> Option<&Category> {
        fn walk<'a>(cats: &'a HashMap<String, Category>, id: &str) -> Option<&'a Category> {
            for cat in cats.values() {
                if cat.id == id {
                    return Some(cat);
                }
                if let Some(found) = walk(&cat.cats, id) {
                    return Some(found);
                }
            }
            None
        }
        walk(&self.categories, id)
    }

    /// Number of categories in the tree, sub categories included.
    pub fn len(&self) -> usize {
        fn count(cats: &HashMap<String, Category>) -> usize {
            cats.values().map(|c| 1 + count(&c.cats)).sum()
        }
        count(&self.categories)
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

/// A filter dimension (quality, language, season...) and its options.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Term {
    #[serde(default, rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub mode: String,
    /// Option id -> label.
    #[serde(default)]
    pub terms: HashMap<String, String>,
}

/// Terms of one category, keyed by term id.
pub type ByTermId = HashMap<String, Term>;

/// The term tree returned by `/terms/tree`: category id -> term id -> term.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TermsTree {
    pub by_category_id: HashMap<String, ByTermId>,
}

impl TermsTree {
    /// Term groups available for a category.
    pub fn terms_for(&self, category_id: &str) -> Option<&ByTermId> {
        self.by_category_id.get(category_id)
    }
}
