/// 経費報告一覧画面のコントローラー
///
/// 一覧の取得と表示用フォーマット、領収書プレビューの表示、
/// 新規作成画面への遷移を扱う。
use crate::features::bills::formatter::{format_date, format_status};
use crate::features::bills::models::Bill;
use crate::features::bills::store::Store;
use crate::shared::document::{Document, IconElement, BILL_URL_ATTRIBUTE};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::navigation::{Navigator, Route};
use crate::shared::session::SessionStore;
use log::{error, info};
use std::sync::Arc;

pub struct BillsController {
    document: Arc<dyn Document>,
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
    // セッションは一覧画面では参照しないが、他の画面と同じ形で注入される
    _session: Arc<dyn SessionStore>,
}

impl BillsController {
    pub fn new(
        document: Arc<dyn Document>,
        navigator: Arc<dyn Navigator>,
        store: Option<Arc<dyn Store>>,
        session: Arc<dyn SessionStore>,
    ) -> Self {
        Self {
            document,
            navigator,
            store,
            _session: session,
        }
    }

    /// 経費報告の一覧を取得し、表示用にフォーマットする
    ///
    /// ストアが無い場合は空の一覧を返す。取得順はそのまま保持する。
    /// フォーマットに失敗したレコードはエラーと元のレコードをログに出力し、
    /// フォーマットせずにそのまま返す。通信エラーは呼び出し側に伝播する。
    pub async fn get_bills(&self) -> AppResult<Vec<Bill>> {
        let Some(store) = &self.store else {
            return Ok(Vec::new());
        };

        let snapshot = store.bills().list().await?;
        info!("経費報告一覧を取得しました: count={}", snapshot.len());

        Ok(snapshot.into_iter().map(format_bill).collect())
    }

    /// 目のアイコンのクリック: 領収書をモーダルで表示する
    ///
    /// # 引数
    /// * `icon` - `data-bill-url` 属性を持つアイコン要素
    ///
    /// # 戻り値
    /// 属性が無い場合は`AppError::Validation`（モーダルは表示しない）
    pub fn handle_click_icon_eye(&self, icon: &IconElement) -> AppResult<()> {
        let bill_url = icon.get_attribute(BILL_URL_ATTRIBUTE).ok_or_else(|| {
            AppError::validation(format!("アイコンに {BILL_URL_ATTRIBUTE} 属性がありません"))
        })?;

        let width = self.document.modal_width() / 2;
        self.document.show_receipt_preview(bill_url, width);
        Ok(())
    }

    /// 「Nouvelle note de frais」ボタンのクリック
    pub fn handle_click_new_bill(&self) {
        self.navigator.on_navigate(Route::NewBill);
    }
}

fn format_bill(bill: Bill) -> Bill {
    match format_date(&bill.date) {
        Ok(date) => Bill {
            date,
            status: format_status(&bill.status),
            ..bill
        },
        Err(e) => {
            error!("{e} for {bill:?}");
            bill
        }
    }
}
