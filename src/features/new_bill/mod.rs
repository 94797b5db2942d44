/// 新規経費報告機能モジュール
///
/// - 領収書ファイルの拡張子バリデーション
/// - 作成フローの状態とフォーム入力モデル
/// - 新規作成画面のコントローラー
pub mod controller;
pub mod models;
pub mod validation;

pub use controller::NewBillController;
pub use models::{FileChangeEvent, FileOutcome, FlowState, NewBillForm, UploadState};
pub use validation::{validate_receipt_extension, ALLOWED_EXTENSIONS, INVALID_EXTENSION_MESSAGE};
