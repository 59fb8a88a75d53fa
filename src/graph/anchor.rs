//! Fixed anchor-label set.
//!
//! A vertex is *prelabelled* exactly when its label is a member of this set.
//! The set is supplied once per run and never changes.

use std::collections::BTreeSet;
use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::propagation_error::PropagationError;

/// Default community labels for political interaction graphs.
pub const DEFAULT_COMMUNITIES: [&str; 17] = [
    "Bernie",
    "Biden",
    "Buttigieg",
    "Warren",
    "Trump",
    "Clinton",
    "Leftist Media",
    "CNN",
    "MSNBC",
    "FOX",
    "Libertarian",
    "IDW",
    "AltRight",
    "BJP",
    "Tech",
    "Sports",
    "Joe Rogan",
];

static DEFAULT_ANCHORS: Lazy<AnchorSet> = Lazy::new(|| AnchorSet {
    labels: Arc::new(DEFAULT_COMMUNITIES.iter().map(|s| s.to_string()).collect()),
});

/// Immutable, non-empty set of anchor labels. Cheap to clone.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnchorSet {
    labels: Arc<BTreeSet<String>>,
}

impl AnchorSet {
    /// Build an anchor set; fails with [`PropagationError::Config`] when empty.
    pub fn new<I, S>(labels: I) -> Result<Self, PropagationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let labels: BTreeSet<String> = labels.into_iter().map(Into::into).collect();
        if labels.is_empty() {
            return Err(PropagationError::Config(
                "anchor_labels must contain at least one label".into(),
            ));
        }
        Ok(Self {
            labels: Arc::new(labels),
        })
    }

    /// The seventeen canonical community labels.
    pub fn communities() -> Self {
        DEFAULT_ANCHORS.clone()
    }

    /// Membership test defining `prelabelled`.
    #[inline]
    pub fn contains(&self, label: &str) -> bool {
        self.labels.contains(label)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Labels in sorted order.
    pub fn iter(&self) -> impl Iterator<Item = &str> + '_ {
        self.labels.iter().map(String::as_str)
    }
}
