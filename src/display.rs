use url::Url;

use crate::blocks::Block;

pub fn format_block(block: &Block) -> Vec<String> {
    let tags = if block.tags.is_empty() {
        "(no tags)".to_string()
    } else {
        block.tags.join(", ")
    };
    vec![
        format!("Block #{}", block.id),
        format!("  Q: {}", block.question),
        format!("  A: {}", block.answer),
        format!("  Tags: {}", tags),
    ]
}

pub fn format_effective_url(url: &anyhow::Result<Url>) -> String {
    match url {
        Ok(url) => format!("Effective: {}", url),
        Err(e) => format!("Effective: unavailable ({})", e),
    }
}

/// Pretty-prints JSON bodies; anything else is returned as-is.
pub fn format_body(body: &str) -> String {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value) => serde_json::to_string_pretty(&value).unwrap_or_else(|_| body.to_string()),
        Err(_) => body.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{ApiClient, ClientConfig};

    #[test]
    fn format_block_lists_tags() {
        let block = Block {
            id: 3,
            question: "q".to_string(),
            answer: "a".to_string(),
            tags: vec!["rust".to_string(), "tokio".to_string()],
        };
        assert_eq!(
            format_block(&block),
            vec!["Block #3", "  Q: q", "  A: a", "  Tags: rust, tokio"]
        );
    }

    #[test]
    fn format_block_marks_missing_tags() {
        let block = Block {
            id: 1,
            question: "q".to_string(),
            answer: "a".to_string(),
            tags: vec![],
        };
        assert_eq!(format_block(&block)[3], "  Tags: (no tags)");
    }

    #[test]
    fn effective_url_resolves_against_origin() {
        let client = ApiClient::new(ClientConfig {
            origin: Some(Url::parse("https://blocks.example.com").unwrap()),
            ..ClientConfig::default()
        })
        .unwrap();
        assert_eq!(
            format_effective_url(&client.url("")),
            "Effective: https://blocks.example.com/api"
        );
    }

    #[test]
    fn effective_url_unavailable_without_origin() {
        let client = ApiClient::new(ClientConfig::default()).unwrap();
        let line = format_effective_url(&client.url(""));
        assert!(line.starts_with("Effective: unavailable (base URL '/api' is root-relative"));
    }

    #[test]
    fn format_body_pretty_prints_json() {
        assert_eq!(format_body("{\"a\":1}"), "{\n  \"a\": 1\n}");
    }

    #[test]
    fn format_body_passes_through_text() {
        assert_eq!(format_body("plain"), "plain");
    }
}
