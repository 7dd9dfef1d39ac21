use crate::features::storage::keys::StorageKey;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::now_jst_rfc3339;
use rusqlite::{params, Connection, OptionalExtension};

/// キーに対応する生のJSON文字列を取得する
///
/// # 引数
/// * `conn` - データベース接続
/// * `key` - 保存キー
///
/// # 戻り値
/// 保存済みの値（未保存の場合はNone）、または失敗時はエラー
pub fn get_raw(conn: &Connection, key: StorageKey) -> AppResult<Option<String>> {
    conn.query_row(
        "SELECT value FROM kv_store WHERE key = ?1",
        params![key.as_store_key()],
        |row| row.get::<_, String>(0),
    )
    .optional()
    .map_err(|e| AppError::storage(format!("{}の読み込みに失敗: {e}", key.as_store_key())))
}

/// キーに生のJSON文字列を保存する（上書き）
///
/// # 引数
/// * `conn` - データベース接続
/// * `key` - 保存キー
/// * `value` - JSON文字列
pub fn set_raw(conn: &Connection, key: StorageKey, value: &str) -> AppResult<()> {
    let now = now_jst_rfc3339();

    conn.execute(
        "INSERT INTO kv_store (key, value, updated_at) VALUES (?1, ?2, ?3)
         ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at",
        params![key.as_store_key(), value, now],
    )
    .map_err(|e| AppError::storage(format!("{}の保存に失敗: {e}", key.as_store_key())))?;

    Ok(())
}
