use crate::config::toml_config::TrackerConfig;
use crate::domain::model::TextBlock;
use crate::domain::ports::TextSource;
use crate::utils::error::{Result, TrackerError};
use async_trait::async_trait;
use regex::Regex;
use reqwest::Client;
use std::sync::LazyLock;
use std::time::Duration;

static SCRIPT_STYLE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)<(script|style)\b[^>]*>.*?</(script|style)\s*>").unwrap());
static COMMENT_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?s)<!--.*?-->").unwrap());
static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"<[^>]+>").unwrap());
static NUMERIC_ENTITY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"&#(?:[xX]([0-9a-fA-F]{1,6})|([0-9]{1,7}));").unwrap());

/// Named entities common in history pages; `&amp;` is handled last.
const NAMED_ENTITIES: &[(&str, &str)] = &[
    ("&nbsp;", " "),
    ("&quot;", "\""),
    ("&apos;", "'"),
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&rsquo;", "\u{2019}"),
    ("&lsquo;", "\u{2018}"),
    ("&rdquo;", "\u{201D}"),
    ("&ldquo;", "\u{201C}"),
    ("&ndash;", "\u{2013}"),
    ("&mdash;", "\u{2014}"),
    ("&hellip;", "\u{2026}"),
    ("&deg;", "\u{00B0}"),
];

/// Fetches history pages over HTTP and reduces them to plain text.
#[derive(Debug, Clone)]
pub struct HttpTextSource {
    client: Client,
    retry_attempts: u32,
    retry_delay: Duration,
    char_limit: usize,
}

impl HttpTextSource {
    pub fn new(config: &TrackerConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent())
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;

        Ok(Self {
            client,
            retry_attempts: config.retry_attempts().max(1),
            retry_delay: Duration::from_secs(config.retry_delay_seconds()),
            char_limit: config.char_limit(),
        })
    }

    async fn fetch_once(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send().await?;
        let status = response.status();
        tracing::debug!("GET {} -> {}", url, status);

        if !status.is_success() {
            return Err(TrackerError::FetchError {
                url: url.to_string(),
                message: format!("HTTP status {}", status),
            });
        }

        Ok(response.text().await?)
    }
}

#[async_trait]
impl TextSource for HttpTextSource {
    async fn fetch_text(&self, url: &str) -> Result<TextBlock> {
        let mut attempt = 1;
        loop {
            match self.fetch_once(url).await {
                Ok(html) => return Ok(TextBlock::from_raw(&html_to_text(&html), self.char_limit)),
                Err(e) if attempt < self.retry_attempts => {
                    let backoff = self.retry_delay * attempt;
                    tracing::warn!(
                        "⚠️ Attempt {}/{} for {} failed: {} (retrying in {:?})",
                        attempt,
                        self.retry_attempts,
                        url,
                        e,
                        backoff
                    );
                    tokio::time::sleep(backoff).await;
                    attempt += 1;
                }
                Err(e) => {
                    return Err(TrackerError::FetchError {
                        url: url.to_string(),
                        message: format!("giving up after {} attempts: {}", attempt, e),
                    })
                }
            }
        }
    }
}

/// Drops scripts, styles and comments, turns tags into line breaks and decodes entities.
pub fn html_to_text(html: &str) -> String {
    let without_scripts = SCRIPT_STYLE_RE.replace_all(html, "\n");
    let without_comments = COMMENT_RE.replace_all(&without_scripts, "\n");
    let text = TAG_RE.replace_all(&without_comments, "\n");

    decode_entities(&text)
}

/// Decodes numeric (`&#8217;`, `&#x2019;`) and common named entities.
pub fn decode_entities(text: &str) -> String {
    let decoded = NUMERIC_ENTITY_RE.replace_all(text, |caps: &regex::Captures| {
        let code = match (caps.get(1), caps.get(2)) {
            (Some(hex), _) => u32::from_str_radix(hex.as_str(), 16).ok(),
            (_, Some(dec)) => dec.as_str().parse().ok(),
            _ => None,
        };
        // 無效碼位保留原文
        code.and_then(char::from_u32)
            .map(|ch| if ch == '\u{a0}' { ' ' } else { ch })
            .map(String::from)
            .unwrap_or_else(|| caps[0].to_string())
    });

    let mut out = decoded.into_owned();
    for &(entity, replacement) in NAMED_ENTITIES {
        if out.contains(entity) {
            out = out.replace(entity, replacement);
        }
    }
    out.replace("&amp;", "&")
}
