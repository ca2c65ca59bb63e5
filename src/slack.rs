use anyhow::{anyhow, Context, Result};
use async_trait::async_trait;
use reqwest::{Client, Url};
use serde_json::{json, Value};
use std::fmt;
use tracing::{info, instrument};

use crate::config::Config;
use crate::model::Records;

/// Delivers a run's records somewhere people will read them.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Returns `false` when there was nothing to send.
    async fn notify(&self, records: &Records) -> Result<bool>;
}

#[derive(Clone)]
pub struct SlackWebhook {
    http: Client,
    url: Url,
}

impl fmt::Debug for SlackWebhook {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The webhook path is a secret.
        f.debug_struct("SlackWebhook")
            .field("host", &self.url.host_str())
            .finish_non_exhaustive()
    }
}

impl SlackWebhook {
    pub fn new(url: Url) -> Self {
        let http = Client::builder()
            .user_agent("trello-sticker-notifier/0.1")
            .no_proxy()
            .build()
            .expect("reqwest client");
        Self { http, url }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let url = Url::parse(cfg.slack.webhook_url.trim()).context("invalid Slack webhook URL")?;
        Ok(Self::new(url))
    }

    pub fn build_request(&self, body: &Value) -> Result<reqwest::Request> {
        self.http
            .post(self.url.clone())
            .header("Content-Type", "application/json")
            .json(body)
            .build()
            .context("failed to build Slack request")
    }

    async fn post(&self, body: Value) -> Result<()> {
        let request = self.build_request(&body)?;
        let res = self
            .http
            .execute(request)
            .await
            .context("failed to reach Slack")?;
        if !res.status().is_success() {
            let status = res.status();
            let body = res.text().await.unwrap_or_default();
            return Err(anyhow!("slack error {}: {}", status, body));
        }
        Ok(())
    }
}

#[async_trait]
impl Notifier for SlackWebhook {
    #[instrument(skip_all, fields(records = records.len()))]
    async fn notify(&self, records: &Records) -> Result<bool> {
        if records.is_empty() {
            info!("nothing to notify");
            return Ok(false);
        }
        self.post(build_message(records)).await?;
        info!("summary delivered to Slack");
        Ok(true)
    }
}

/// Slack payload for `records`, one line per card.
pub fn build_message(records: &Records) -> Value {
    json!({ "text": format_summary(records) })
}

pub fn format_summary(records: &Records) -> String {
    let noun = if records.len() == 1 { "card" } else { "cards" };
    let mut lines = vec![format!(
        ":pushpin: {} {} with the sticker",
        records.len(),
        noun
    )];
    for record in records.values() {
        lines.push(format!(
            "• <{}|{}>: {}",
            escape(&record.short_url),
            escape(&record.name),
            escape(&record.latest_comment)
        ));
    }
    lines.join("\n")
}

/// Slack treats `&`, `<` and `>` as control characters in message text.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}
