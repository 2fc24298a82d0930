use crate::errors::Error;
use std::collections::HashMap;
use std::env::VarError;
use std::fmt;

pub const PIPELINE_NAME: &str = "PIPELINE_NAME";
pub const DISCORD_WEBHOOKS_URL: &str = "DISCORD_WEBHOOKS_URL";

const CONSOLE_REGION: &str = "us-east-1";

/// Where pipeline notifications go and which pipeline they describe.
#[derive(Clone, PartialEq, Eq)]
pub struct WebhookConfig {
    url: String,
    pipeline_name: String,
}

impl WebhookConfig {
    pub fn new(url: impl Into<String>, pipeline_name: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            pipeline_name: pipeline_name.into(),
        }
    }

    /// Reads `PIPELINE_NAME` and `DISCORD_WEBHOOKS_URL` from the process environment.
    pub fn from_env() -> Result<Self, Error> {
        Self::from_lookup(|name| match std::env::var(name) {
            Ok(value) => Ok(Some(value)),
            Err(VarError::NotPresent) => Ok(None),
            Err(VarError::NotUnicode(_)) => Err(Error::NonUnicodeConfiguration { name }),
        })
    }

    /// Same as [`WebhookConfig::from_env`] but over an explicit set of key/value pairs.
    pub fn from_vars<K, V>(vars: impl IntoIterator<Item = (K, V)>) -> Result<Self, Error>
    where
        K: Into<String>,
        V: Into<String>,
    {
        let vars: HashMap<String, String> = vars
            .into_iter()
            .map(|(key, value)| (key.into(), value.into()))
            .collect();

        Self::from_lookup(|name| Ok(vars.get(name).cloned()))
    }

    fn from_lookup(
        lookup: impl Fn(&'static str) -> Result<Option<String>, Error>,
    ) -> Result<Self, Error> {
        let required = |name: &'static str| -> Result<String, Error> {
            lookup(name)?.ok_or(Error::MissingConfiguration { name })
        };

        let pipeline_name = required(PIPELINE_NAME)?;
        let url = required(DISCORD_WEBHOOKS_URL)?;

        Ok(Self { url, pipeline_name })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn pipeline_name(&self) -> &str {
        &self.pipeline_name
    }

    /// AWS console view of the pipeline. The name is inserted as-is.
    pub fn pipeline_url(&self) -> String {
        format!(
            "https://{region}.console.aws.amazon.com/codesuite/codepipeline/pipelines/{}/view?region={region}",
            self.pipeline_name,
            region = CONSOLE_REGION,
        )
    }
}

// webhook urls carry the webhook token
impl fmt::Debug for WebhookConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WebhookConfig")
            .field("url", &"<redacted>")
            .field("pipeline_name", &self.pipeline_name)
            .finish()
    }
}

pub fn load() -> Result<WebhookConfig, Error> {
    WebhookConfig::from_env()
}
