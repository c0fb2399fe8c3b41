//! Conversion options.

use serde::{Deserialize, Serialize};

/// Options controlling HTML to Markdown conversion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertOptions {
    /// Base URL against which relative `href` and `src` attributes are
    /// resolved. When absent (or unparsable), relative URLs are emitted
    /// untouched.
    pub base_url: Option<String>,
}
