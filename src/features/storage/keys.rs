use serde::{Deserialize, Serialize};

/// 保存キーの共通プレフィックス
pub const STORAGE_PREFIX: &str = "okinawa_staff_v2026_final";

/// 永続化されるコレクションごとのキー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageKey {
    Itinerary,
    Food,
    Supermarkets,
    Expenses,
    Weather,
    Rate,
}

impl StorageKey {
    /// すべてのキー（起動時の読み込み順）
    pub const ALL: [StorageKey; 6] = [
        StorageKey::Itinerary,
        StorageKey::Food,
        StorageKey::Supermarkets,
        StorageKey::Expenses,
        StorageKey::Weather,
        StorageKey::Rate,
    ];

    fn suffix(self) -> &'static str {
        match self {
            StorageKey::Itinerary => "itinerary",
            StorageKey::Food => "food",
            StorageKey::Supermarkets => "supermarkets",
            StorageKey::Expenses => "expenses",
            StorageKey::Weather => "weather",
            StorageKey::Rate => "rate",
        }
    }

    /// ストア上の完全なキー文字列を取得する
    ///
    /// 例: `okinawa_staff_v2026_final_itinerary`
    pub fn as_store_key(self) -> String {
        format!("{STORAGE_PREFIX}_{}", self.suffix())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_store_keys_are_prefixed_and_unique() {
        let keys: HashSet<String> = StorageKey::ALL.iter().map(|k| k.as_store_key()).collect();
        assert_eq!(keys.len(), StorageKey::ALL.len());
        assert!(keys.iter().all(|k| k.starts_with(STORAGE_PREFIX)));
        assert_eq!(
            StorageKey::Rate.as_store_key(),
            "okinawa_staff_v2026_final_rate"
        );
    }
}
