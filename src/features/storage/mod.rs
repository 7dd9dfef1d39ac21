/// 永続化機能モジュール
///
/// コレクションごとに固定キーでJSON全体を保存・復元する：
/// - 起動時: キーごとに読み込み、未保存・解析失敗時はそのキーだけ既定値に戻す
/// - 変更時: 対象コレクション全体を直列化して上書き保存
pub mod keys;
pub mod repository;

use crate::shared::errors::AppResult;
use rusqlite::Connection;
use serde::de::DeserializeOwned;
use serde::Serialize;

pub use keys::{StorageKey, STORAGE_PREFIX};

/// キーの値を読み込み、失敗時は既定値を返す
///
/// # 引数
/// * `conn` - データベース接続
/// * `key` - 保存キー
/// * `fallback` - 既定値を生成する関数
///
/// # 戻り値
/// 保存済みの値、または既定値（エラーは返さない）
pub fn load_or_default<T, F>(conn: &Connection, key: StorageKey, fallback: F) -> T
where
    T: DeserializeOwned,
    F: FnOnce() -> T,
{
    let raw = match repository::get_raw(conn, key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            log::debug!("保存データなし、既定値を使用: key={}", key.as_store_key());
            return fallback();
        }
        Err(e) => {
            log::warn!("保存データの読み込みに失敗、既定値を使用: {}", e.details());
            return fallback();
        }
    };

    match serde_json::from_str::<T>(&raw) {
        Ok(value) => value,
        Err(e) => {
            log::warn!(
                "保存データの解析に失敗、既定値を使用: key={}, error={e}",
                key.as_store_key()
            );
            fallback()
        }
    }
}

/// 値全体をJSONに直列化してキーに保存する
///
/// # 引数
/// * `conn` - データベース接続
/// * `key` - 保存キー
/// * `value` - 保存する値
pub fn save<T: Serialize + ?Sized>(conn: &Connection, key: StorageKey, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    repository::set_raw(conn, key, &json)?;
    log::debug!(
        "保存しました: key={}, bytes={}",
        key.as_store_key(),
        json.len()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::database::create_tables;

    fn create_test_db() -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        create_tables(&conn).unwrap();
        conn
    }

    #[test]
    fn test_load_missing_key_uses_fallback() {
        let conn = create_test_db();
        let value: Vec<String> = load_or_default(&conn, StorageKey::Food, || vec!["既定".into()]);
        assert_eq!(value, vec!["既定".to_string()]);
    }

    #[test]
    fn test_save_then_load() {
        let conn = create_test_db();
        save(&conn, StorageKey::Food, &vec!["沖繩麵".to_string()]).unwrap();

        let value: Vec<String> = load_or_default(&conn, StorageKey::Food, Vec::new);
        assert_eq!(value, vec!["沖繩麵".to_string()]);
    }

    #[test]
    fn test_corrupted_value_falls_back() {
        let conn = create_test_db();
        repository::set_raw(&conn, StorageKey::Expenses, "{not json").unwrap();

        let value: Vec<i64> = load_or_default(&conn, StorageKey::Expenses, || vec![42]);
        assert_eq!(value, vec![42]);
    }

    #[test]
    fn test_wrong_shape_falls_back() {
        let conn = create_test_db();
        repository::set_raw(&conn, StorageKey::Expenses, "{\"a\":1}").unwrap();

        let value: Vec<i64> = load_or_default(&conn, StorageKey::Expenses, Vec::new);
        assert!(value.is_empty());
    }
}
