use crate::features::currency::calculator::{evaluate_expression, format_result};
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};

/// 計算機のキー
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PadKey {
    /// 数字・小数点・演算子
    Input(char),
    /// 表示を0に戻す
    Clear,
    /// 式を評価する
    Equals,
}

impl PadKey {
    /// キー文字列を解釈する
    pub fn parse(key: &str) -> AppResult<Self> {
        let mut chars = key.chars();
        let (Some(c), None) = (chars.next(), chars.next()) else {
            return Err(AppError::validation(format!("不明なキーです: {key}")));
        };

        match c {
            'C' => Ok(PadKey::Clear),
            '=' => Ok(PadKey::Equals),
            '0'..='9' | '.' | '+' | '-' | '*' | '/' => Ok(PadKey::Input(c)),
            _ => Err(AppError::validation(format!("不明なキーです: {key}"))),
        }
    }
}

/// 換算ガイドの計算機
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalculatorPad {
    pub display: String,
}

impl Default for CalculatorPad {
    fn default() -> Self {
        Self {
            display: "0".to_string(),
        }
    }
}

impl CalculatorPad {
    /// キー入力を反映する
    ///
    /// 表示が"0"だけの場合は入力で置き換え、それ以外は末尾に追加する。
    pub fn press(&mut self, key: PadKey) -> &str {
        match key {
            PadKey::Clear => self.display = "0".to_string(),
            PadKey::Equals => self.display = format_result(evaluate_expression(&self.display)),
            PadKey::Input(c) => {
                if self.display == "0" {
                    self.display = c.to_string();
                } else {
                    self.display.push(c);
                }
            }
        }
        &self.display
    }
}
