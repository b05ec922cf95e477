use crate::catalog::{Category, CategoryProfile};
use crate::core::temporal::YearWindow;
use crate::domain::location::LocationTag;
use crate::domain::model::Entity;
use crate::utils::error::{Result, TrackerError};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::LazyLock;

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

static ENV_VAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{([^}]+)\}").unwrap());

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerConfig {
    pub tracker: TrackerInfo,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub status: StatusConfig,
    #[serde(default)]
    pub classifier: ClassifierConfig,
    pub load: LoadConfig,
    #[serde(default)]
    pub entities: Vec<Entity>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerInfo {
    pub name: String,
    #[serde(default)]
    pub category: Category,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub user_agent: Option<String>,
    pub timeout_seconds: Option<u64>,
    pub retry_attempts: Option<u32>,
    pub retry_delay_seconds: Option<u64>,
    pub request_delay_ms: Option<u64>,
    pub char_limit: Option<usize>,
    pub concurrent_requests: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StatusConfig {
    pub reference_year: Option<i32>,
    pub lookback_years: Option<i32>,
    pub lookahead_years: Option<i32>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClassifierConfig {
    /// 位置名稱 -> 額外關鍵字
    pub extra_keywords: Option<BTreeMap<String, Vec<String>>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    pub output_path: String,
    pub output_formats: Vec<String>,
    pub compression: Option<CompressionConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompressionConfig {
    pub enabled: bool,
    pub filename: String,
}

impl TrackerConfig {
    /// 依類別建立預設配置（未提供設定檔時使用）
    pub fn for_category(category: Category, output_path: &str) -> Self {
        Self {
            tracker: TrackerInfo {
                name: format!("{}-tracker", category),
                category,
            },
            source: SourceConfig::default(),
            status: StatusConfig::default(),
            classifier: ClassifierConfig::default(),
            load: LoadConfig {
                output_path: output_path.to_string(),
                output_formats: vec!["json".to_string(), "csv".to_string()],
                compression: None,
            },
            entities: Vec::new(),
        }
    }

    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| TrackerError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${OUTPUT_DIR})
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR_RE
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn category(&self) -> Category {
        self.tracker.category
    }

    /// 設定檔的艦艇清單，未設定則使用內建清單
    pub fn entities(&self) -> Vec<Entity> {
        if self.entities.is_empty() {
            self.category().entities()
        } else {
            self.entities.clone()
        }
    }

    pub fn year_window(&self) -> YearWindow {
        let reference = self
            .status
            .reference_year
            .unwrap_or_else(|| YearWindow::current().reference);
        YearWindow::with_span(
            reference,
            self.status
                .lookback_years
                .unwrap_or(YearWindow::DEFAULT_LOOKBACK),
            self.status
                .lookahead_years
                .unwrap_or(YearWindow::DEFAULT_LOOKAHEAD),
        )
    }

    /// Category profile with any configured keyword extensions applied.
    pub fn profile(&self) -> Result<CategoryProfile> {
        let mut profile = self.category().profile();

        if let Some(extra) = &self.classifier.extra_keywords {
            for (name, words) in extra {
                let tag: LocationTag =
                    name.parse()
                        .map_err(|reason| TrackerError::InvalidConfigValueError {
                            field: "classifier.extra_keywords".to_string(),
                            value: name.clone(),
                            reason,
                        })?;
                profile.ruleset.extend_keywords(tag, words);
            }
        }

        Ok(profile)
    }

    pub fn user_agent(&self) -> &str {
        self.source.user_agent.as_deref().unwrap_or(DEFAULT_USER_AGENT)
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.source.timeout_seconds.unwrap_or(20)
    }

    pub fn retry_attempts(&self) -> u32 {
        self.source.retry_attempts.unwrap_or(3)
    }

    pub fn retry_delay_seconds(&self) -> u64 {
        self.source.retry_delay_seconds.unwrap_or(2)
    }

    pub fn request_delay_ms(&self) -> u64 {
        self.source.request_delay_ms.unwrap_or(0)
    }

    pub fn char_limit(&self) -> usize {
        self.source.char_limit.unwrap_or(50_000)
    }

    pub fn concurrent_requests(&self) -> usize {
        self.source.concurrent_requests.unwrap_or(4)
    }

    pub fn output_path(&self) -> &str {
        &self.load.output_path
    }

    pub fn wants_format(&self, format: &str) -> bool {
        self.load.output_formats.iter().any(|f| f == format)
    }

    pub fn compression(&self) -> Option<&CompressionConfig> {
        self.load.compression.as_ref().filter(|c| c.enabled)
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("tracker.name", &self.tracker.name)?;
        validation::validate_path("load.output_path", &self.load.output_path)?;
        validation::validate_positive_number(
            "source.concurrent_requests",
            self.concurrent_requests(),
            1,
        )?;
        validation::validate_positive_number("source.char_limit", self.char_limit(), 1)?;
        validation::validate_positive_number(
            "source.retry_attempts",
            self.retry_attempts() as usize,
            1,
        )?;

        if let Some(year) = self.status.reference_year {
            validation::validate_range("status.reference_year", year, 1900, 2200)?;
        }
        if let Some(lookback) = self.status.lookback_years {
            validation::validate_range("status.lookback_years", lookback, 1, 10)?;
        }
        if let Some(lookahead) = self.status.lookahead_years {
            validation::validate_range("status.lookahead_years", lookahead, 0, 10)?;
        }

        // 驗證輸出格式
        if self.load.output_formats.is_empty() {
            return Err(TrackerError::MissingConfigError {
                field: "load.output_formats".to_string(),
            });
        }
        let valid_formats = ["json", "csv"];
        for format in &self.load.output_formats {
            if !valid_formats.contains(&format.as_str()) {
                return Err(TrackerError::InvalidConfigValueError {
                    field: "load.output_formats".to_string(),
                    value: format.clone(),
                    reason: format!(
                        "Unsupported format. Valid formats: {}",
                        valid_formats.join(", ")
                    ),
                });
            }
        }

        if let Some(compression) = self.compression() {
            validation::validate_non_empty_string("load.compression.filename", &compression.filename)?;
        }

        for entity in &self.entities {
            validation::validate_non_empty_string("entities.id", &entity.id)?;
            validation::validate_url("entities.url", &entity.url)?;
        }

        // 額外關鍵字的位置名稱必須存在
        self.profile()?;

        Ok(())
    }
}

impl Validate for TrackerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
