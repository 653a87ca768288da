use crate::core::engine::DEFAULT_TOLERANCE;
use crate::core::{Calculation, ConfigProvider};
use crate::utils::error::{CalcError, Result};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{
    validate_finite, validate_non_empty_string, validate_one_of, validate_range, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CalcConfig {
    pub engine: Option<EngineConfig>,
    pub logging: Option<LoggingConfig>,
    #[serde(default)]
    pub calculations: Vec<Calculation>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    pub tolerance: Option<f64>,
    pub stop_on_error: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl CalcConfig {
    /// 從 TOML 檔案載入計算表
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析計算表
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DIVISOR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CalcError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 驗證計算表的合理性
    pub fn validate_config(&self) -> Result<()> {
        // 容許誤差
        validate_range("engine.tolerance", self.tolerance(), 0.0, 1.0)?;

        if let Some(level) = self.logging.as_ref().and_then(|l| l.level.as_deref()) {
            validate_one_of("logging.level", &level.to_ascii_lowercase(), &LOG_LEVELS)?;
        }

        // 除數為零不在此檢查，留給運算時回報 InvalidArgument
        for (i, calc) in self.calculations.iter().enumerate() {
            if let Some(name) = &calc.name {
                validate_non_empty_string(&format!("calculations[{}].name", i), name)?;
            }
            validate_finite(&format!("calculations[{}].a", i), calc.a.to_f64())?;
            validate_finite(&format!("calculations[{}].b", i), calc.b.to_f64())?;
            if let Some(expected) = calc.expected {
                validate_finite(&format!("calculations[{}].expected", i), expected.to_f64())?;
            }
        }

        Ok(())
    }

    pub fn tolerance(&self) -> f64 {
        self.engine
            .as_ref()
            .and_then(|e| e.tolerance)
            .unwrap_or(DEFAULT_TOLERANCE)
    }

    pub fn stop_on_error(&self) -> bool {
        self.engine
            .as_ref()
            .and_then(|e| e.stop_on_error)
            .unwrap_or(false)
    }

    /// 取得日誌設定，未設定時使用預設值
    pub fn logging(&self) -> LoggingConfig {
        self.logging.clone().unwrap_or_default()
    }
}

impl ConfigProvider for CalcConfig {
    fn tolerance(&self) -> f64 {
        self.tolerance()
    }

    fn stop_on_error(&self) -> bool {
        self.stop_on_error()
    }
}

impl Validate for CalcConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
