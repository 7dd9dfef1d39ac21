use std::time::Duration;

/// 外部連携タイムアウトの既定値（秒）
pub const DEFAULT_ENRICHMENT_TIMEOUT_SECS: u64 = 10;

/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: String,
    /// デバッグモードの有効/無効
    pub debug_mode: bool,
    /// ログレベル
    pub log_level: String,
    /// 交通・天気推定の呼び出しに許す最大時間
    pub enrichment_timeout: Duration,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # 戻り値
    /// 環境設定
    pub fn from_env() -> Self {
        let environment = get_environment();
        let debug_mode = environment == Environment::Development;
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if debug_mode {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        let timeout_raw = std::env::var("ENRICHMENT_TIMEOUT_SECS")
            .ok()
            .or_else(|| option_env!("EMBEDDED_ENRICHMENT_TIMEOUT_SECS").map(str::to_string));

        Self {
            environment: format!("{environment:?}").to_lowercase(),
            debug_mode,
            log_level,
            enrichment_timeout: parse_enrichment_timeout(timeout_raw.as_deref()),
        }
    }
}

/// タイムアウト設定値を解釈する
///
/// # 引数
/// * `raw` - 秒数の文字列（未設定の場合はNone）
///
/// # 戻り値
/// 1〜60秒に丸めたタイムアウト。解釈できない場合は既定値
pub fn parse_enrichment_timeout(raw: Option<&str>) -> Duration {
    let secs = match raw.map(str::trim).map(str::parse::<u64>) {
        Some(Ok(secs)) => secs.clamp(1, 60),
        Some(Err(_)) => {
            log::warn!(
                "ENRICHMENT_TIMEOUT_SECS を解釈できないため既定値を使用します: {raw:?}"
            );
            DEFAULT_ENRICHMENT_TIMEOUT_SECS
        }
        None => DEFAULT_ENRICHMENT_TIMEOUT_SECS,
    };
    Duration::from_secs(secs)
}

/// 現在の実行環境を判定する
///
/// # 判定ロジック
/// 1. 実行時環境変数 ENVIRONMENT を確認
/// 2. デバッグビルドの場合は Development
/// 3. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = match env_var.as_str() {
            "production" => Environment::Production,
            _ => Environment::Development,
        };
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    // フォールバック: ビルド設定に基づく判定
    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

/// 環境に応じたデータベースファイル名を取得する
///
/// # ファイル名の規則
/// - 開発環境: "dev_trip_planner.db"
/// - プロダクション環境: "trip_planner.db"
pub fn get_database_filename(env: Environment) -> &'static str {
    match env {
        Environment::Development => "dev_trip_planner.db",
        Environment::Production => "trip_planner.db",
    }
}

/// 環境に応じた.envファイルを読み込む
///
/// 本番環境では.envファイルを読まず、直接設定された環境変数のみを使用する。
pub fn load_environment_variables() {
    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());

    if environment == "production" {
        log::info!("本番環境のため.envファイルの読み込みをスキップします");
        return;
    }

    match dotenv::dotenv() {
        Ok(path) => log::info!(".envファイルを読み込みました: {path:?}"),
        Err(_) => log::warn!(
            ".envファイルが見つかりません。直接設定された環境変数を使用します。"
        ),
    }
}

/// ログレベル文字列をLevelFilterに変換する
fn parse_log_level(level: &str) -> log::LevelFilter {
    match level.to_lowercase().as_str() {
        "error" => log::LevelFilter::Error,
        "warn" => log::LevelFilter::Warn,
        "info" => log::LevelFilter::Info,
        "debug" => log::LevelFilter::Debug,
        "trace" => log::LevelFilter::Trace,
        _ => log::LevelFilter::Info,
    }
}

/// ログシステムを初期化する
///
/// # 処理内容
/// 1. 環境設定を取得
/// 2. ログレベルを設定
/// 3. env_loggerを初期化（二重初期化は無視）
pub fn initialize_logging_system() {
    let env_config = EnvironmentConfig::from_env();

    let initialized = env_logger::Builder::from_default_env()
        .filter_level(parse_log_level(&env_config.log_level))
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .try_init();

    if initialized.is_ok() {
        log::info!(
            "ログシステムを初期化しました: level={}, environment={}",
            env_config.log_level,
            env_config.environment
        );
    }
}
