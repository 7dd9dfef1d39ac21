/// 換算ガイド機能モジュール
///
/// - 四則演算の計算機（式の評価とキーパッド）
/// - 為替レートの管理と円・台湾ドルの換算
pub mod calculator;
#[cfg(feature = "desktop")]
pub mod commands;
pub mod exchange;
pub mod pad;

pub use calculator::evaluate_expression;
pub use exchange::{
    convert_display, jpy_to_twd, twd_to_jpy, ConversionDirection, CurrencyConversion,
    ExchangeRate, DEFAULT_RATE,
};
pub use pad::{CalculatorPad, PadKey};
