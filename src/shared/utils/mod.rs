/// ID生成ユーティリティ
pub mod nanoid;

use crate::shared::errors::{AppError, AppResult};
use chrono::{NaiveDate, Utc};
use chrono_tz::Asia::Tokyo;
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

pub use self::nanoid::{generate_record_id, is_valid_record_id};

/// 時刻（HH:MM、24時間表記）のパターン
static TIME_OF_DAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([01]\d|2[0-3]):[0-5]\d$").expect("時刻パターンが不正です"));

/// 日付文字列のバリデーション
///
/// # 引数
/// * `date_str` - 日付文字列（YYYY-MM-DD形式）
///
/// # 戻り値
/// 有効な日付の場合はOk(())、無効な場合はエラー
pub fn validate_date(date_str: &str) -> AppResult<()> {
    if date_str.len() != 10 {
        return Err(AppError::validation(
            "日付はYYYY-MM-DD形式で入力してください",
        ));
    }

    NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .map_err(|_| AppError::validation("無効な日付です"))?;

    Ok(())
}

/// 時刻文字列（HH:MM）のバリデーション
///
/// 行程の並び順は時刻文字列の辞書順で決まるため、ゼロ埋め2桁を必須とする。
pub fn validate_time_of_day(time: &str) -> AppResult<()> {
    if !TIME_OF_DAY.is_match(time) {
        return Err(AppError::validation(
            "時刻はHH:MM形式（例: 09:30）で入力してください",
        ));
    }
    Ok(())
}

/// 必須フィールドのバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `field_name` - フィールド名（エラーメッセージ用）
pub fn validate_required_field(text: &str, field_name: &str) -> AppResult<()> {
    if text.trim().is_empty() {
        return Err(AppError::validation(format!("{field_name}は必須項目です")));
    }
    Ok(())
}

/// 文字列の長さバリデーション
///
/// # 引数
/// * `text` - 検証対象の文字列
/// * `max_length` - 最大文字数
/// * `field_name` - フィールド名（エラーメッセージ用）
pub fn validate_text_length(text: &str, max_length: usize, field_name: &str) -> AppResult<()> {
    let char_count = text.chars().count();
    if char_count > max_length {
        return Err(AppError::validation(format!(
            "{field_name}は{max_length}文字以内で入力してください（現在: {char_count}文字）"
        )));
    }
    Ok(())
}

/// 地図リンクのバリデーション（空文字列は許可）
pub fn validate_map_url(map_url: &str) -> AppResult<()> {
    if map_url.trim().is_empty() {
        return Ok(());
    }

    let parsed = Url::parse(map_url.trim())
        .map_err(|_| AppError::validation("地図リンクの形式が正しくありません"))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(AppError::validation(
            "地図リンクはhttpまたはhttpsで始まる必要があります",
        )),
    }
}

/// タグ一覧を正規化する
///
/// 前後の空白を除去し、空のタグと重複を取り除く（最初の出現順を保持）。
pub fn normalize_tags(tags: Vec<String>) -> Vec<String> {
    let mut normalized: Vec<String> = Vec::with_capacity(tags.len());
    for tag in tags {
        let trimmed = tag.trim();
        if !trimmed.is_empty() && !normalized.iter().any(|t| t == trimmed) {
            normalized.push(trimmed.to_string());
        }
    }
    normalized
}

/// Googleマップ検索リンクのベースURL
pub const GOOGLE_MAPS_SEARCH_URL: &str = "https://www.google.com/maps/search/?api=1&query=";

/// 検索クエリからGoogleマップ検索リンクを組み立てる
///
/// クエリはそのまま連結する（`+`区切りの語はエンコード済みとして扱う）。
pub fn google_maps_search_url(query: &str) -> String {
    format!("{GOOGLE_MAPS_SEARCH_URL}{query}")
}

/// 空白のみの任意項目をNoneに畳み込む
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// JSTの今日の日付をYYYY-MM-DD形式で取得する
pub fn today_jst() -> String {
    Utc::now()
        .with_timezone(&Tokyo)
        .date_naive()
        .format("%Y-%m-%d")
        .to_string()
}

/// 現在時刻をエポックミリ秒で取得する
pub fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}

/// 現在時刻をJSTのRFC3339形式で取得する
pub fn now_jst_rfc3339() -> String {
    Utc::now().with_timezone(&Tokyo).to_rfc3339()
}
