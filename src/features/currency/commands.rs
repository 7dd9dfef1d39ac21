use crate::features::currency::{
    evaluate_expression, ConversionDirection, CurrencyConversion, ExchangeRate, PadKey,
};
use crate::features::expenses::models::ExpenseSummary;
use crate::features::storage::StorageKey;
use crate::AppState;
use serde::Serialize;
use tauri::State;

/// レート変更後の表示値
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RateChange {
    pub conversion: CurrencyConversion,
    pub expenses: ExpenseSummary,
}

/// 計算機のキーを押す
///
/// # 引数
/// * `key` - キー（`0-9 . + - * /`、`C`、`=`）
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 押下後の表示と換算結果、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn press_calculator_key(
    key: String,
    state: State<'_, AppState>,
) -> Result<CurrencyConversion, String> {
    let key = PadKey::parse(&key)?;
    state
        .update_trip(&[], |trip| {
            trip.pad.press(key);
            Ok(trip.conversion())
        })
        .map_err(|e| e.into())
}

/// 換算方向を切り替える
#[tauri::command]
pub async fn set_conversion_direction(
    direction: ConversionDirection,
    state: State<'_, AppState>,
) -> Result<CurrencyConversion, String> {
    state
        .update_trip(&[], |trip| {
            trip.direction = direction;
            Ok(trip.conversion())
        })
        .map_err(|e| e.into())
}

/// 為替レートを変更する
///
/// 保存済みの円金額は変更せず、換算結果と支出合計を再計算して返す。
///
/// # 引数
/// * `rate` - レート文字列（有限の正の数）
/// * `state` - アプリケーション状態
#[tauri::command]
pub async fn set_exchange_rate(rate: String, state: State<'_, AppState>) -> Result<RateChange, String> {
    let rate = ExchangeRate::parse(&rate)?;
    state
        .update_trip(&[StorageKey::Rate], |trip| {
            trip.rate = rate;
            Ok(RateChange {
                conversion: trip.conversion(),
                expenses: trip.expense_summary(),
            })
        })
        .map_err(|e| e.into())
}

/// 式を評価する（計算機の状態は変更しない）
#[tauri::command]
pub async fn evaluate_calculator_expression(expression: String) -> Result<f64, String> {
    Ok(evaluate_expression(&expression))
}
