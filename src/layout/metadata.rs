//! Document metadata.

use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteMetadata {
    pub title: String,
    pub description: String,
}

impl Default for SiteMetadata {
    fn default() -> Self {
        Self {
            title: "Llens".into(),
            description: "A lens into your thoughts - personal journaling with AI-powered insights and analysis".into(),
        }
    }
}
