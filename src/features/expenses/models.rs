use serde::{Deserialize, Serialize};

/// 支出カテゴリ
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    #[serde(rename = "早餐")]
    Breakfast,
    #[serde(rename = "午餐")]
    Lunch,
    #[serde(rename = "晚餐")]
    Dinner,
    #[serde(rename = "點心")]
    Snack,
    #[serde(rename = "宵夜")]
    LateNight,
    #[serde(rename = "飲品")]
    Drink,
    #[serde(rename = "玩具")]
    Toy,
    #[serde(rename = "伴手禮")]
    Souvenir,
    #[serde(rename = "其他")]
    #[default]
    Other,
}

/// 支払い方法
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExpensePayment {
    #[serde(rename = "現金")]
    #[default]
    Cash,
    #[serde(rename = "信用卡")]
    CreditCard,
}

/// 支出の記録
///
/// 台湾ドル換算額は保存せず、表示時に為替レートから求める。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseItem {
    pub id: String,
    /// YYYY-MM-DD
    pub date: String,
    pub name: String,
    pub category: ExpenseCategory,
    /// 入力された円の金額
    pub amount_jpy: f64,
    #[serde(default = "default_tax_included")]
    pub tax_included: bool,
    #[serde(default)]
    pub payment_method: ExpensePayment,
    #[serde(default)]
    pub note: String,
    /// 写真（data URI）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub photo: Option<String>,
    /// 作成日時（エポックミリ秒）
    pub created_at: i64,
}

fn default_tax_included() -> bool {
    true
}

/// 支出保存用DTO（idなしで新規作成、idありで既存の置き換え）
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveExpenseDto {
    pub id: Option<String>,
    /// 未指定の場合はJSTの今日
    pub date: Option<String>,
    pub name: String,
    #[serde(default)]
    pub category: ExpenseCategory,
    pub amount_jpy: f64,
    #[serde(default = "default_tax_included")]
    pub tax_included: bool,
    #[serde(default)]
    pub payment_method: ExpensePayment,
    #[serde(default)]
    pub note: String,
    pub photo: Option<String>,
}

impl Default for SaveExpenseDto {
    fn default() -> Self {
        Self {
            id: None,
            date: None,
            name: String::new(),
            category: ExpenseCategory::default(),
            amount_jpy: 0.0,
            tax_included: default_tax_included(),
            payment_method: ExpensePayment::default(),
            note: String::new(),
            photo: None,
        }
    }
}

/// 換算額付きの支出（表示用）
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseView {
    #[serde(flatten)]
    pub item: ExpenseItem,
    /// 税込みの円金額
    pub taxed_jpy: i64,
    pub amount_twd: i64,
}

/// 支出一覧と合計
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExpenseSummary {
    pub entries: Vec<ExpenseView>,
    /// 入力された円金額の合計
    pub total_jpy: f64,
    /// 台湾ドル換算額の合計
    pub total_twd: i64,
    pub rate: String,
}
