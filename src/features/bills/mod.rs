/// 経費報告一覧機能モジュール
///
/// - 経費報告モデルと表示用フォーマット
/// - リモートストアの抽象化とAPIサーバー実装
/// - 一覧画面のコントローラーと画面状態
pub mod api_store;
pub mod controller;
pub mod formatter;
pub mod models;
pub mod page;
pub mod store;

pub use api_store::ApiBillsStore;
pub use controller::BillsController;
pub use formatter::{format_date, format_status};
pub use models::{
    Bill, BillStatus, BillUpdate, CreatedFile, NewBillRecord, ReceiptFile, UploadForm,
};
pub use page::BillsPage;
pub use store::{BillsApi, Store};
