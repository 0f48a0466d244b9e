use serde::{Deserialize, Serialize};

use crate::attachment::ImageData;

/// Overall share type chosen by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShareKind {
    Image,
    Url,
    Text,
}

/// One immutable queue record describing a single share action.
///
/// `kind` names the primary content under the image > url > text priority
/// rule; secondary resolved fields (a caption next to an image, text next
/// to a link) stay on the record as metadata the consumer may ignore.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShareRecord {
    /// Epoch milliseconds at finalize time.
    pub timestamp: i64,
    pub source_app: String,
    #[serde(rename = "type")]
    pub kind: ShareKind,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub image_path: Option<String>,
}

/// Accumulated resolution state of one share action before classification.
#[derive(Debug, Default, Clone)]
pub struct PartialContent {
    pub text: Option<String>,
    pub url: Option<String>,
    pub image: Option<ImageData>,
}

impl PartialContent {
    pub fn is_empty(&self) -> bool {
        self.text.is_none() && self.url.is_none() && self.image.is_none()
    }

    /// Fold another attachment's result in. The first resolved value per
    /// field wins; callers merge in attachment order so the outcome does
    /// not depend on task completion order.
    pub fn merge(&mut self, other: PartialContent) {
        if self.text.is_none() {
            self.text = other.text;
        }
        if self.url.is_none() {
            self.url = other.url;
        }
        if self.image.is_none() {
            self.image = other.image;
        }
    }
}
