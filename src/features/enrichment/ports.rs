use crate::shared::errors::AppResult;

/// 交通所要時間を見積もる外部サービス
///
/// 応答は `{"time": "...", "distance": "..."}` 形式のJSON文字列。
pub trait TrafficEstimator: Send + Sync {
    /// 出発地から目的地までの移動を見積もる
    ///
    /// # 戻り値
    /// 応答JSON、未設定の場合はOk(None)、呼び出し失敗時はエラー
    fn estimate(&self, from_address: &str, to_address: &str) -> AppResult<Option<String>>;
}

/// 天気予報を生成する外部サービス
///
/// 応答は天気予報の配列を表すJSON文字列。
pub trait ForecastProvider: Send + Sync {
    /// 指定日数分の天気予報を生成する
    ///
    /// # 戻り値
    /// 応答JSON、未設定の場合はOk(None)、呼び出し失敗時はエラー
    fn forecast(&self, days: usize) -> AppResult<Option<String>>;
}

/// 外部サービス未設定時の見積もり（常に利用不可）
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableTrafficEstimator;

impl TrafficEstimator for UnavailableTrafficEstimator {
    fn estimate(&self, _from_address: &str, _to_address: &str) -> AppResult<Option<String>> {
        Ok(None)
    }
}

/// 外部サービス未設定時の天気予報（常に利用不可）
#[derive(Debug, Default, Clone, Copy)]
pub struct UnavailableForecastProvider;

impl ForecastProvider for UnavailableForecastProvider {
    fn forecast(&self, _days: usize) -> AppResult<Option<String>> {
        Ok(None)
    }
}
