use crate::features::expenses::{models::*, service};
use crate::features::storage::StorageKey;
use crate::AppState;
use tauri::State;

/// 支出を追加または更新する
///
/// # 引数
/// * `dto` - 支出保存用DTO
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新後の支出一覧と合計、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn save_expense(
    dto: SaveExpenseDto,
    state: State<'_, AppState>,
) -> Result<ExpenseSummary, String> {
    state
        .update_trip(&[StorageKey::Expenses], |trip| {
            service::upsert_expense(&mut trip.expenses, dto)?;
            Ok(trip.expense_summary())
        })
        .map_err(|e| e.into())
}

/// 支出を削除する
///
/// # 引数
/// * `id` - 支出ID
/// * `state` - アプリケーション状態
///
/// # 戻り値
/// 更新後の支出一覧と合計、または失敗時はエラーメッセージ
#[tauri::command]
pub async fn delete_expense(id: String, state: State<'_, AppState>) -> Result<ExpenseSummary, String> {
    state
        .update_trip(&[StorageKey::Expenses], |trip| {
            service::delete_expense(&mut trip.expenses, &id)?;
            Ok(trip.expense_summary())
        })
        .map_err(|e| e.into())
}

/// 支出一覧と合計を取得する
#[tauri::command]
pub async fn get_expense_summary(state: State<'_, AppState>) -> Result<ExpenseSummary, String> {
    state
        .read_trip(|trip| trip.expense_summary())
        .map_err(|e| e.into())
}
