/// 領収書ファイルのバリデーション
use crate::shared::errors::{AppError, AppResult};
use std::path::Path;

/// 許可される拡張子
pub const ALLOWED_EXTENSIONS: [&str; 3] = ["jpg", "jpeg", "png"];

/// 拡張子が不正な場合に表示するアラート
pub const INVALID_EXTENSION_MESSAGE: &str =
    "Veuillez télécharger un fichier avec une extension jpg, jpeg ou png.";

/// ファイル名から拡張子を小文字で取り出す
pub fn file_extension(file_name: &str) -> Option<String> {
    Path::new(file_name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_lowercase)
}

/// 領収書ファイルの拡張子を検証する（大文字小文字は区別しない）
pub fn validate_receipt_extension(file_name: &str) -> AppResult<()> {
    match file_extension(file_name) {
        Some(ext) if ALLOWED_EXTENSIONS.contains(&ext.as_str()) => Ok(()),
        _ => Err(AppError::validation(INVALID_EXTENSION_MESSAGE)),
    }
}
