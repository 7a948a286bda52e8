use serde::{Deserialize, Serialize};

/// An image as listed by the daemon.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageSummary {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(default)]
    pub repo_tags: Vec<String>,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub size: i64,
}

impl ImageSummary {
    /// An image is dangling when it carries no tag.
    pub fn is_dangling(&self) -> bool {
        self.repo_tags.is_empty() || self.repo_tags.iter().all(|t| t == "<none>:<none>")
    }
}

/// One layer of an image's history.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageHistoryItem {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(default)]
    pub created: i64,
    #[serde(default)]
    pub created_by: String,
    #[serde(default)]
    pub size: i64,
    #[serde(default)]
    pub comment: String,
}

/// Low-level image information returned by image inspection.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageInspect {
    #[serde(rename = "Id")]
    pub id: String,
    #[serde(default)]
    pub repo_tags: Vec<String>,
    #[serde(default)]
    pub parent: String,
    #[serde(default)]
    pub created: String,
    #[serde(default)]
    pub architecture: String,
    #[serde(default)]
    pub os: String,
    #[serde(default)]
    pub size: i64,
}

/// Outcome of an image removal: one entry per untagged or deleted reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ImageDeleteResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub untagged: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deleted: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dangling_image() {
        let untagged = ImageSummary {
            id: "sha256:1".to_string(),
            ..Default::default()
        };
        assert!(untagged.is_dangling());

        let none_tag = ImageSummary {
            id: "sha256:2".to_string(),
            repo_tags: vec!["<none>:<none>".to_string()],
            ..Default::default()
        };
        assert!(none_tag.is_dangling());

        let tagged = ImageSummary {
            id: "sha256:3".to_string(),
            repo_tags: vec!["alpine:3.19".to_string()],
            ..Default::default()
        };
        assert!(!tagged.is_dangling());
    }

    #[test]
    fn test_delete_response_skips_missing_fields() {
        let resp = ImageDeleteResponse {
            untagged: Some("alpine:3.19".to_string()),
            deleted: None,
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"Untagged":"alpine:3.19"}"#);
    }
}
