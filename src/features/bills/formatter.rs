/// 表示用フォーマッター
///
/// 保存されている日付・ステータスを画面表示用の文字列に変換する純粋関数。
use crate::features::bills::models::BillStatus;
use crate::shared::errors::{AppError, AppResult};
use chrono::{DateTime, Datelike, NaiveDate};

/// フランス語の短縮月名（先頭3文字、先頭大文字）
const MONTH_LABELS: [&str; 12] = [
    "Jan", "Fév", "Mar", "Avr", "Mai", "Jui", "Jui", "Aoû", "Sep", "Oct", "Nov", "Déc",
];

/// 保存されている日付を表示用の文字列に変換する
///
/// `YYYY-MM-DD` またはRFC 3339形式を受け付け、`"4 Avr. 04"` の形式で返す。
///
/// # 引数
/// * `raw` - 保存されている日付文字列
///
/// # 戻り値
/// 表示用の日付。解析できない場合は`AppError::Format`（呼び出し側でフォールバックする）
pub fn format_date(raw: &str) -> AppResult<String> {
    let date = parse_date(raw)?;

    let year = format!("{:04}", date.year());
    let short_year = year.get(year.len() - 2..).unwrap_or(&year);
    let month = MONTH_LABELS[date.month0() as usize];

    Ok(format!("{} {month}. {short_year}", date.day()))
}

fn parse_date(raw: &str) -> AppResult<NaiveDate> {
    let trimmed = raw.trim();

    NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .or_else(|_| DateTime::parse_from_rfc3339(trimmed).map(|dt| dt.date_naive()))
        .map_err(|_| AppError::format(format!("日付を解析できません: '{raw}'")))
}

/// ステータスを表示用のラベルに変換する
///
/// 既知のステータス以外はそのまま返す。
pub fn format_status(raw: &str) -> String {
    match BillStatus::parse(raw) {
        Some(status) => status.label().to_string(),
        None => raw.to_string(),
    }
}
