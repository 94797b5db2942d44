/// 一覧画面の状態
///
/// `get_bills`の結果を、描画側に渡す状態（一覧またはエラーメッセージ）に変換する。
use crate::features::bills::controller::BillsController;
use crate::features::bills::models::Bill;
use crate::shared::errors::{AppResult, ErrorSeverity};
use log::{log, Level};

#[derive(Debug, Clone, PartialEq)]
pub enum BillsPage {
    /// 一覧の取得に成功
    Loaded { bills: Vec<Bill> },
    /// 取得に失敗（サーバーのメッセージをそのまま表示する）
    Error { message: String },
}

impl BillsPage {
    /// 取得結果から画面状態を作る
    ///
    /// 失敗時はエラーの重要度に応じて warn または error でログを出力する。
    pub fn from_result(result: AppResult<Vec<Bill>>) -> Self {
        match result {
            Ok(bills) => BillsPage::Loaded { bills },
            Err(e) => {
                let level = match e.severity() {
                    ErrorSeverity::High => Level::Error,
                    ErrorSeverity::Medium | ErrorSeverity::Low => Level::Warn,
                };
                log!(level, "経費報告一覧の表示に失敗しました: {}", e.details());
                BillsPage::Error {
                    message: e.user_message().to_string(),
                }
            }
        }
    }

    /// コントローラーから一覧を取得して画面状態を作る
    pub async fn load(controller: &BillsController) -> Self {
        Self::from_result(controller.get_bills().await)
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            BillsPage::Error { message } => Some(message),
            BillsPage::Loaded { .. } => None,
        }
    }
}
