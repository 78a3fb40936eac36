//! Category and term trees.
//!
//! Both trees are read-only reference data; terms carry the ids used by
//! search filters.

mod types;

pub use types::*;

use crate::client::{ClientError, T411Client};

const CATEGORIES_ENDPOINT: &str = "/categories/tree";
const TERMS_ENDPOINT: &str = "/terms/tree";

impl T411Client {
    /// Fetch the category tree.
    pub async fn categories_tree(&self) -> Result<Categories, ClientError> {
        let url = self.url(CATEGORIES_ENDPOINT)?;
        self.fetch(CATEGORIES_ENDPOINT, url).await
    }

    /// Fetch the term tree.
    pub async fn terms_tree(&self) -> Result<TermsTree, ClientError> {
        let url = self.url(TERMS_ENDPOINT)?;
        self.fetch(TERMS_ENDPOINT, url).await
    }
}
