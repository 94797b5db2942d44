use crate::shared::errors::{AppError, AppResult};

/// アプリケーションの実行環境
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Environment {
    Development,
    Production,
}

/// 現在の実行環境を判定する
///
/// `ENVIRONMENT=production` であれば Production、設定されていなければビルド設定
/// （debug_assertions）に従う。
pub fn get_environment() -> Environment {
    match std::env::var("ENVIRONMENT") {
        Ok(value) if value == "production" => Environment::Production,
        Ok(_) => Environment::Development,
        Err(_) if cfg!(debug_assertions) => Environment::Development,
        Err(_) => Environment::Production,
    }
}

/// 環境変数を読み込む。未設定の場合はデフォルト値を返す
///
/// # 引数
/// * `name` - 環境変数名
/// * `default` - 未設定時の値
///
/// # 戻り値
/// 環境変数の値、またはデフォルト値
pub fn env_or_default(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| {
        log::debug!("{name} が未設定のため、デフォルト値を使用します: {default}");
        default.to_string()
    })
}

/// ログ設定
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: Environment,
    /// `LOG_LEVEL` の値（未設定時は開発環境で debug、本番で info）
    pub log_level: String,
}

impl EnvironmentConfig {
    pub fn from_env() -> Self {
        let environment = get_environment();
        let fallback = match environment {
            Environment::Development => "debug",
            Environment::Production => "info",
        };

        Self {
            environment,
            log_level: env_or_default("LOG_LEVEL", fallback),
        }
    }

    /// ログレベル文字列を`log::LevelFilter`に変換する。不明な値は Info
    pub fn level_filter(&self) -> log::LevelFilter {
        self.log_level.parse().unwrap_or(log::LevelFilter::Info)
    }
}

/// デバッグビルドでのみ`.env`ファイルを読み込む
pub fn load_environment_variables() {
    if !cfg!(debug_assertions) {
        return;
    }
    if let Err(e) = dotenv::dotenv() {
        log::debug!(".envファイルを読み込みませんでした: {e}");
    }
}

/// env_logger を初期化する（初期化済みなら何もしない）
pub fn initialize_logging_system() {
    let config = EnvironmentConfig::from_env();

    let initialized = env_logger::Builder::from_default_env()
        .filter_level(config.level_filter())
        .format_timestamp_secs()
        .format_target(false)
        .try_init()
        .is_ok();

    if initialized {
        log::info!(
            "ログを初期化しました: level={}, environment={:?}",
            config.log_level,
            config.environment
        );
    }
}

/// APIサーバーへの接続設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout_seconds: u64,
    /// 接続失敗時の最大リトライ回数
    pub max_retries: u32,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5678".to_string(),
            timeout_seconds: 30,
            max_retries: 3,
        }
    }
}

impl ApiConfig {
    /// `BILLED_API_URL`、`API_TIMEOUT_SECONDS`、`API_MAX_RETRIES` から読み込む
    ///
    /// 数値として解析できない値はデフォルト値で置き換える。
    pub fn from_env() -> Self {
        let defaults = Self::default();
        let base_url = env_or_default("BILLED_API_URL", &defaults.base_url);
        let timeout_seconds = parse_or_default("API_TIMEOUT_SECONDS", defaults.timeout_seconds);
        let max_retries = parse_or_default("API_MAX_RETRIES", defaults.max_retries);

        log::info!(
            "API設定: base_url={base_url}, timeout={timeout_seconds}s, max_retries={max_retries}"
        );

        Self {
            base_url,
            timeout_seconds,
            max_retries,
        }
    }

    /// 設定を検証する
    ///
    /// # 戻り値
    /// ベースURLが http/https のURLで、タイムアウトが0より大きい場合は`Ok(())`
    pub fn validate(&self) -> AppResult<()> {
        let url = url::Url::parse(&self.base_url).map_err(|e| {
            AppError::configuration(format!("APIサーバーのURLが不正です: {} ({e})", self.base_url))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(AppError::configuration(format!(
                "APIサーバーのURLはhttpまたはhttpsである必要があります: {}",
                self.base_url
            )));
        }

        if self.timeout_seconds == 0 {
            return Err(AppError::configuration(
                "APIタイムアウトは0より大きい値である必要があります",
            ));
        }

        Ok(())
    }

    /// エンドポイントの完全なURLを組み立てる
    pub fn endpoint_url(&self, endpoint: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

fn parse_or_default<T>(name: &str, default: T) -> T
where
    T: std::str::FromStr + std::fmt::Display,
{
    let raw = env_or_default(name, &default.to_string());
    raw.parse().unwrap_or_else(|_| {
        log::warn!("{name} を解析できません ({raw})。デフォルト値 {default} を使用します");
        default
    })
}
