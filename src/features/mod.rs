/// 機能別モジュール
///
/// 各機能モジュールは、その画面に関連するモデル・コントローラー・ストアを含む
/// 自己完結型のユニットです。
pub mod bills;
pub mod new_bill;
