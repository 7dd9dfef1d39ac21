use crate::shared::errors::{AppError, AppResult};
use rusqlite::Connection;
use std::path::Path;

#[cfg(feature = "desktop")]
use std::path::PathBuf;
#[cfg(feature = "desktop")]
use tauri::{AppHandle, Manager};

/// データベース接続を初期化し、テーブルを作成する
///
/// # 引数
/// * `app_handle` - Tauriアプリケーションハンドル
///
/// # 戻り値
/// データベース接続、または失敗時はエラー
///
/// # 処理内容
/// 1. アプリケーションデータディレクトリの確保
/// 2. データベースファイルパスの決定
/// 3. データベース接続の開設とテーブル作成
#[cfg(feature = "desktop")]
pub fn initialize_database(app_handle: &AppHandle) -> AppResult<Connection> {
    let database_path = get_database_path(app_handle)?;
    open_database(&database_path)
}

/// アプリデータディレクトリ内のデータベースファイルパスを取得する
///
/// # 引数
/// * `app_handle` - Tauriアプリケーションハンドル
///
/// # 戻り値
/// データベースファイルのパス、または失敗時はエラー
#[cfg(feature = "desktop")]
pub fn get_database_path(app_handle: &AppHandle) -> AppResult<PathBuf> {
    let app_data_dir = app_handle.path().app_data_dir().map_err(|e| {
        AppError::configuration(format!("アプリデータディレクトリの取得に失敗: {e}"))
    })?;

    if !app_data_dir.exists() {
        std::fs::create_dir_all(&app_data_dir).map_err(|e| {
            AppError::configuration(format!("アプリデータディレクトリの作成に失敗: {e}"))
        })?;
        log::info!("アプリケーションデータディレクトリを作成: {app_data_dir:?}");
    }

    let db_filename =
        crate::shared::config::get_database_filename(crate::shared::config::get_environment());

    Ok(app_data_dir.join(db_filename))
}

/// 指定パスのデータベースを開き、テーブルを作成する
///
/// # 引数
/// * `database_path` - データベースファイルのパス
///
/// # 戻り値
/// データベース接続、または失敗時はエラー
pub fn open_database(database_path: &Path) -> AppResult<Connection> {
    let is_first_run = !database_path.exists();

    let conn = Connection::open(database_path)
        .map_err(|e| AppError::Database(format!("データベースのオープンに失敗しました: {e}")))?;

    create_tables(&conn)?;

    if is_first_run {
        log::info!("=== アプリケーション初回起動 ===");
    }
    log::info!("データベースを初期化しました: {database_path:?}");

    Ok(conn)
}

/// データベーステーブルを作成する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    // キーごとにコレクション全体をJSONで保持する
    conn.execute(
        "CREATE TABLE IF NOT EXISTS kv_store (
            key TEXT PRIMARY KEY,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
