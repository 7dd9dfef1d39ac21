/// 支出機能モジュール
///
/// - 支出の追加・更新・削除
/// - 為替レートからの台湾ドル換算額の算出（保存はしない）
/// - 円と台湾ドルの合計
/// - 写真（data URI）の検証
#[cfg(feature = "desktop")]
pub mod commands;
pub mod models;
pub mod service;

pub use models::{
    ExpenseCategory, ExpenseItem, ExpensePayment, ExpenseSummary, ExpenseView, SaveExpenseDto,
};
pub use service::{amount_twd, delete_expense, summarize_expenses, taxed_jpy, upsert_expense};
