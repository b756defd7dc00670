//! Watched content types

use crate::{LifecycleError, Result};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Content types watched when no explicit set is given
pub const DEFAULT_WATCHED_KINDS: [&str; 11] = [
    "api::product.product",
    "api::category.category",
    "api::article.article",
    "api::order.order",
    "api::author.author",
    "api::blog-category.blog-category",
    "api::tag.tag",
    "api::homepage.homepage",
    "api::product-image.product-image",
    "api::product-variant.product-variant",
    "api::customization-schema.customization-schema",
];

/// Short model name for a content type identifier.
///
/// Takes the segment after the last `.`; identifiers without one (or with
/// an empty trailing segment) come back unchanged.
///
/// ```
/// use contenthook_lifecycle::model_name;
///
/// assert_eq!(model_name("api::product.product"), "product");
/// assert_eq!(model_name("homepage"), "homepage");
/// ```
pub fn model_name(uid: &str) -> &str {
    match uid.rsplit('.').next() {
        Some(segment) if !segment.is_empty() => segment,
        _ => uid,
    }
}

/// A content type identifier, e.g. `api::product.product`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WatchedKind {
    uid: String,
}

impl WatchedKind {
    /// Create a watched kind; the identifier must not be empty
    pub fn new(uid: impl Into<String>) -> Result<Self> {
        let uid = uid.into();
        if uid.trim().is_empty() {
            return Err(LifecycleError::EmptyKind);
        }
        Ok(Self { uid })
    }

    /// Fully-qualified identifier
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Unqualified name used in notifications
    pub fn model_name(&self) -> &str {
        model_name(&self.uid)
    }
}

impl FromStr for WatchedKind {
    type Err = LifecycleError;

    fn from_str(s: &str) -> Result<Self> {
        Self::new(s)
    }
}

impl fmt::Display for WatchedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.uid)
    }
}

/// The fixed set of watched content types.
///
/// Duplicates collapse, so each kind is bound at most once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchedKinds {
    kinds: BTreeSet<WatchedKind>,
}

impl WatchedKinds {
    /// Build a set from identifiers
    pub fn new<I, S>(uids: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let kinds = uids
            .into_iter()
            .map(WatchedKind::new)
            .collect::<Result<BTreeSet<_>>>()?;
        Ok(Self { kinds })
    }

    /// Number of distinct kinds
    pub fn len(&self) -> usize {
        self.kinds.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.kinds.is_empty()
    }

    /// Check whether an identifier is watched
    pub fn contains(&self, uid: &str) -> bool {
        self.kinds.iter().any(|k| k.uid == uid)
    }

    /// Iterate over the kinds
    pub fn iter(&self) -> impl Iterator<Item = &WatchedKind> {
        self.kinds.iter()
    }
}

impl Default for WatchedKinds {
    fn default() -> Self {
        Self {
            kinds: DEFAULT_WATCHED_KINDS
                .iter()
                .map(|uid| WatchedKind {
                    uid: uid.to_string(),
                })
                .collect(),
        }
    }
}

impl<'a> IntoIterator for &'a WatchedKinds {
    type Item = &'a WatchedKind;
    type IntoIter = std::collections::btree_set::Iter<'a, WatchedKind>;

    fn into_iter(self) -> Self::IntoIter {
        self.kinds.iter()
    }
}
