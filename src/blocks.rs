use std::fmt;

use anyhow::{Result, anyhow, bail};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::http::ApiClient;

const CREATE_BLOCK_PATH: &str = "createblock";

#[derive(Debug, Clone, Serialize)]
pub struct NewBlock {
    pub question: String,
    pub answer: String,
    pub tags: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Block {
    pub id: i64,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

/// Splits a comma-separated tag list, trimming and dropping empty or repeated names.
pub fn normalize_tags(raw: &str) -> Vec<String> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.split(',').map(str::trim) {
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }
    tags
}

fn error_detail<E: fmt::Display>(body: Result<String, E>) -> String {
    match body {
        Ok(text) => match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => body.error,
            Err(_) => text,
        },
        Err(e) => format!("<unreadable response body: {}>", e),
    }
}

async fn error_from_response(endpoint: &str, resp: reqwest::Response) -> anyhow::Error {
    let status = resp.status();
    let body = resp.text().await;
    if let Err(e) = &body {
        warn!(endpoint, %status, error = %e, "failed to read error response body");
    }
    anyhow!("{} failed ({}): {}", endpoint, status, error_detail(body))
}

pub async fn create_block(client: &ApiClient, block: &NewBlock) -> Result<Block> {
    let question = block.question.trim();
    let answer = block.answer.trim();
    if question.is_empty() || answer.is_empty() {
        bail!("Both 'question' and 'answer' are required.");
    }

    let body = NewBlock {
        question: question.to_string(),
        answer: answer.to_string(),
        tags: block.tags.clone(),
    };
    let resp = client.post(CREATE_BLOCK_PATH)?.json(&body).send().await?;

    if !resp.status().is_success() {
        return Err(error_from_response(CREATE_BLOCK_PATH, resp).await);
    }

    let created: Block = resp.json().await?;
    info!(id = created.id, tags = created.tags.len(), "created block");
    Ok(created)
}

/// GETs `path` and returns the raw response body.
pub async fn fetch(client: &ApiClient, path: &str) -> Result<String> {
    let resp = client.get(path)?.send().await?;
    if !resp.status().is_success() {
        return Err(error_from_response(path, resp).await);
    }
    Ok(resp.text().await?)
}
