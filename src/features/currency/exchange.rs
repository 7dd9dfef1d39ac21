use crate::features::currency::calculator::evaluate_expression;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 既定の為替レート（1 JPY = 0.215 TWD）
pub const DEFAULT_RATE: &str = "0.215";

/// 為替レート（1円あたりの台湾ドル）
///
/// 入力された文字列のまま保存する。読み込み時も`parse`と同じ検証を通す。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub struct ExchangeRate(String);

impl TryFrom<String> for ExchangeRate {
    type Error = AppError;

    fn try_from(value: String) -> AppResult<Self> {
        Self::parse(&value)
    }
}

impl From<ExchangeRate> for String {
    fn from(rate: ExchangeRate) -> Self {
        rate.0
    }
}

impl Default for ExchangeRate {
    fn default() -> Self {
        Self(DEFAULT_RATE.to_string())
    }
}

impl ExchangeRate {
    /// 入力文字列からレートを作成する
    ///
    /// # 引数
    /// * `input` - レート文字列（例: "0.22"）
    ///
    /// # 戻り値
    /// 有限の正の数であればレート、それ以外はバリデーションエラー
    pub fn parse(input: &str) -> AppResult<Self> {
        let trimmed = input.trim();
        let value: f64 = trimmed
            .parse()
            .map_err(|_| AppError::validation("為替レートは数値で入力してください"))?;

        if !value.is_finite() || value <= 0.0 {
            return Err(AppError::validation("為替レートは正の数値である必要があります"));
        }

        Ok(Self(trimmed.to_string()))
    }

    /// 保存されている文字列
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// 数値としてのレート（解釈できない場合は0）
    pub fn value(&self) -> f64 {
        self.0
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite() && *v > 0.0)
            .unwrap_or(0.0)
    }
}

/// 換算方向
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ConversionDirection {
    #[default]
    JpyToTwd,
    TwdToJpy,
}

/// 換算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyConversion {
    pub direction: ConversionDirection,
    pub rate: String,
    /// 計算機の表示（入力側の通貨）
    pub source_display: String,
    /// 換算後の金額（整数に丸め）
    pub converted: i64,
}

fn round_to_i64(value: f64) -> i64 {
    if value.is_finite() {
        value.round() as i64
    } else {
        0
    }
}

/// 円を台湾ドルに換算する
pub fn jpy_to_twd(jpy: f64, rate: f64) -> i64 {
    round_to_i64(jpy * rate)
}

/// 台湾ドルを円に換算する（レートが0の場合は0）
pub fn twd_to_jpy(twd: f64, rate: f64) -> i64 {
    if rate == 0.0 {
        return 0;
    }
    round_to_i64(twd / rate)
}

/// 計算機の表示を指定方向に換算する
///
/// # 引数
/// * `display` - 計算機の表示文字列
/// * `direction` - 換算方向
/// * `rate` - 為替レート
pub fn convert_display(
    display: &str,
    direction: ConversionDirection,
    rate: &ExchangeRate,
) -> CurrencyConversion {
    let amount = evaluate_expression(display);
    let converted = match direction {
        ConversionDirection::JpyToTwd => jpy_to_twd(amount, rate.value()),
        ConversionDirection::TwdToJpy => twd_to_jpy(amount, rate.value()),
    };

    CurrencyConversion {
        direction,
        rate: rate.as_str().to_string(),
        source_display: display.to_string(),
        converted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate() {
        assert_eq!(ExchangeRate::parse(" 0.22 ").unwrap().as_str(), "0.22");
        assert!(ExchangeRate::parse("0").is_err());
        assert!(ExchangeRate::parse("-0.2").is_err());
        assert_eq!(
            ExchangeRate::parse("abc").unwrap_err().user_message(),
            "為替レートは数値で入力してください"
        );
        assert!(ExchangeRate::parse("inf").is_err());
        assert!(ExchangeRate::parse("NaN").is_err());
    }

    #[test]
    fn test_stored_rate_round_trips_as_string() {
        let rate: ExchangeRate = serde_json::from_str("\"0.215\"").unwrap();
        assert_eq!(rate, ExchangeRate::default());
        assert_eq!(serde_json::to_string(&rate).unwrap(), "\"0.215\"");
    }

    #[test]
    fn test_invalid_stored_rate_is_rejected() {
        assert!(serde_json::from_str::<ExchangeRate>("\"\"").is_err());
        assert!(serde_json::from_str::<ExchangeRate>("\"abc\"").is_err());
        assert!(serde_json::from_str::<ExchangeRate>("\"-1\"").is_err());
        assert_eq!(jpy_to_twd(1000.0, 0.0), 0);
        assert_eq!(twd_to_jpy(1000.0, 0.0), 0);
    }

    #[test]
    fn test_conversions_round() {
        assert_eq!(jpy_to_twd(1000.0, 0.215), 215);
        assert_eq!(jpy_to_twd(1234.0, 0.215), 265);
        assert_eq!(twd_to_jpy(215.0, 0.215), 1000);
    }

    #[test]
    fn test_convert_display() {
        let rate = ExchangeRate::default();

        let result = convert_display("1000+1000", ConversionDirection::JpyToTwd, &rate);
        assert_eq!(result.converted, 430);
        assert_eq!(result.source_display, "1000+1000");

        let result = convert_display("430", ConversionDirection::TwdToJpy, &rate);
        assert_eq!(result.converted, 2000);
    }

    #[test]
    fn test_rate_change_recomputes_conversion() {
        let display = "1000";
        let before = convert_display(display, ConversionDirection::JpyToTwd, &ExchangeRate::default());
        let after = convert_display(
            display,
            ConversionDirection::JpyToTwd,
            &ExchangeRate::parse("0.2").unwrap(),
        );
        assert_eq!(before.converted, 215);
        assert_eq!(after.converted, 200);
    }
}
