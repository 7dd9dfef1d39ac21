use crate::features::currency::exchange::{jpy_to_twd, ExchangeRate};
use crate::features::expenses::models::{ExpenseItem, ExpenseSummary, ExpenseView, SaveExpenseDto};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::{
    generate_record_id, non_blank, now_millis, today_jst, validate_date, validate_required_field,
    validate_text_length,
};
use base64::{engine::general_purpose, Engine as _};

/// 外税の税率
const CONSUMPTION_TAX_RATE: f64 = 1.1;
/// 金額の上限（10桁）
const MAX_AMOUNT_JPY: f64 = 9_999_999_999.0;
/// 写真の最大サイズ（デコード後）
const MAX_PHOTO_BYTES: usize = 5 * 1024 * 1024;

/// 支出保存用DTOのバリデーション
///
/// # 引数
/// * `dto` - 支出保存用DTO
///
/// # 戻り値
/// バリデーション成功時はOk(())、失敗時はエラー
pub fn validate_expense_dto(dto: &SaveExpenseDto) -> AppResult<()> {
    validate_required_field(&dto.name, "項目名")?;
    validate_text_length(&dto.name, 100, "項目名")?;

    if !dto.amount_jpy.is_finite() || dto.amount_jpy < 0.0 {
        return Err(AppError::validation("金額は0以上の数値である必要があります"));
    }
    if dto.amount_jpy > MAX_AMOUNT_JPY {
        return Err(AppError::validation("金額は10桁以内で入力してください"));
    }

    if let Some(date) = &dto.date {
        validate_date(date)?;
    }

    validate_text_length(&dto.note, 500, "メモ")?;

    if let Some(photo) = dto.photo.as_deref().filter(|p| !p.trim().is_empty()) {
        validate_photo_data_uri(photo)?;
    }

    Ok(())
}

/// 写真のdata URIを検証する
///
/// `data:image/<種類>;base64,<データ>` 形式で、デコード後のサイズが上限以内であること。
pub fn validate_photo_data_uri(photo: &str) -> AppResult<()> {
    let rest = photo
        .strip_prefix("data:image/")
        .ok_or_else(|| AppError::validation("写真は画像のdata URIである必要があります"))?;

    let (media_type, data) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::validation("写真はbase64形式である必要があります"))?;

    if media_type.is_empty() || !media_type.chars().all(|c| c.is_ascii_alphanumeric() || "+-.".contains(c)) {
        return Err(AppError::validation("写真の画像形式が正しくありません"));
    }

    // デコード前に概算で上限を判定する
    if data.len() / 4 * 3 > MAX_PHOTO_BYTES + 2 {
        return Err(AppError::validation("写真のサイズが5MBを超えています"));
    }

    let decoded = general_purpose::STANDARD
        .decode(data)
        .map_err(|_| AppError::validation("写真のbase64データが壊れています"))?;

    if decoded.len() > MAX_PHOTO_BYTES {
        return Err(AppError::validation("写真のサイズが5MBを超えています"));
    }

    Ok(())
}

/// 税込みの円金額を求める（外税の場合は10%を加算して丸める）
pub fn taxed_jpy(amount_jpy: f64, tax_included: bool) -> i64 {
    let taxed = if tax_included {
        amount_jpy
    } else {
        amount_jpy * CONSUMPTION_TAX_RATE
    };
    if taxed.is_finite() {
        taxed.round() as i64
    } else {
        0
    }
}

/// 支出の台湾ドル換算額を求める
pub fn amount_twd(item: &ExpenseItem, rate: f64) -> i64 {
    jpy_to_twd(taxed_jpy(item.amount_jpy, item.tax_included) as f64, rate)
}

/// 支出を追加または更新する
///
/// 新規作成時はidと作成日時を付与し、更新時は元のidと作成日時を引き継ぐ。
///
/// # 引数
/// * `expenses` - 支出リスト
/// * `dto` - 支出保存用DTO
///
/// # 戻り値
/// 保存された支出、または失敗時はエラー
pub fn upsert_expense(expenses: &mut Vec<ExpenseItem>, dto: SaveExpenseDto) -> AppResult<ExpenseItem> {
    validate_expense_dto(&dto)?;

    let date = non_blank(dto.date).unwrap_or_else(today_jst);
    let photo = non_blank(dto.photo);

    match non_blank(dto.id) {
        Some(id) => {
            let existing = expenses
                .iter_mut()
                .find(|e| e.id == id)
                .ok_or_else(|| AppError::not_found(format!("支出（id={id}）")))?;

            existing.date = date;
            existing.name = dto.name.trim().to_string();
            existing.category = dto.category;
            existing.amount_jpy = dto.amount_jpy;
            existing.tax_included = dto.tax_included;
            existing.payment_method = dto.payment_method;
            existing.note = dto.note.trim().to_string();
            existing.photo = photo;

            log::debug!("支出を更新しました: id={}", existing.id);
            Ok(existing.clone())
        }
        None => {
            let item = ExpenseItem {
                id: generate_record_id(),
                date,
                name: dto.name.trim().to_string(),
                category: dto.category,
                amount_jpy: dto.amount_jpy,
                tax_included: dto.tax_included,
                payment_method: dto.payment_method,
                note: dto.note.trim().to_string(),
                photo,
                created_at: now_millis(),
            };
            expenses.push(item.clone());

            log::debug!("支出を追加しました: id={}", item.id);
            Ok(item)
        }
    }
}

/// 支出を削除する（idが一致する1件のみ）
pub fn delete_expense(expenses: &mut Vec<ExpenseItem>, id: &str) -> AppResult<ExpenseItem> {
    let index = expenses
        .iter()
        .position(|e| e.id == id)
        .ok_or_else(|| AppError::not_found(format!("支出（id={id}）")))?;
    Ok(expenses.remove(index))
}

/// 支出一覧に換算額と合計を付ける
///
/// # 引数
/// * `expenses` - 支出リスト
/// * `rate` - 為替レート
pub fn summarize_expenses(expenses: &[ExpenseItem], rate: &ExchangeRate) -> ExpenseSummary {
    let rate_value = rate.value();

    let entries: Vec<ExpenseView> = expenses
        .iter()
        .map(|item| ExpenseView {
            taxed_jpy: taxed_jpy(item.amount_jpy, item.tax_included),
            amount_twd: amount_twd(item, rate_value),
            item: item.clone(),
        })
        .collect();

    ExpenseSummary {
        total_jpy: expenses.iter().map(|e| e.amount_jpy).sum(),
        total_twd: entries.iter().map(|e| e.amount_twd).sum(),
        entries,
        rate: rate.as_str().to_string(),
    }
}
