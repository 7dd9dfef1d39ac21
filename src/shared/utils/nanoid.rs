use nanoid::nanoid;

/// レコードIDの長さ
pub const RECORD_ID_LENGTH: usize = 9;

/// レコード（景點・美食・支出など）用のIDを生成する
///
/// # 戻り値
/// 9文字のURL-safeなnanoId
///
/// # 特性
/// - 文字セット: A-Za-z0-9_- (64文字)
/// - 一人旅の記録規模では偶発的な重複は実質起きない
pub fn generate_record_id() -> String {
    nanoid!(RECORD_ID_LENGTH)
}

/// 生成されたレコードIDの形式かどうかを検証する
///
/// 同梱データの "1-1" のような読みやすいIDは対象外（falseになる）。
pub fn is_valid_record_id(id: &str) -> bool {
    id.len() == RECORD_ID_LENGTH
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
}
