// 機能モジュール構造
pub mod features;
pub mod shared;

use features::bills::{ApiBillsStore, BillsController, Store};
use features::new_bill::NewBillController;
use log::info;
use shared::api_client::ApiClient;
use shared::config::environment::{initialize_logging_system, load_environment_variables};
use shared::document::Document;
use shared::errors::AppResult;
use shared::navigation::Navigator;
use shared::session::SessionStore;
use std::sync::Arc;

/// 環境変数とログシステムを初期化する
pub fn initialize() {
    load_environment_variables();
    initialize_logging_system();
    info!("アプリケーション初期化が完了しました");
}

/// アプリケーション状態（画面コントローラーに注入するコラボレーターを保持）
#[derive(Clone)]
pub struct AppState {
    pub document: Arc<dyn Document>,
    pub navigator: Arc<dyn Navigator>,
    pub store: Option<Arc<dyn Store>>,
    pub session: Arc<dyn SessionStore>,
}

impl AppState {
    /// 環境設定のAPIサーバーを使うアプリケーション状態を作成する
    pub fn from_env(
        document: Arc<dyn Document>,
        navigator: Arc<dyn Navigator>,
        session: Arc<dyn SessionStore>,
    ) -> AppResult<Self> {
        let client = ApiClient::new()?;
        let store = Arc::new(ApiBillsStore::new(client, session.clone()));

        Ok(Self {
            document,
            navigator,
            store: Some(Arc::new(store)),
            session,
        })
    }

    pub fn bills_controller(&self) -> BillsController {
        BillsController::new(
            self.document.clone(),
            self.navigator.clone(),
            self.store.clone(),
            self.session.clone(),
        )
    }

    pub fn new_bill_controller(&self) -> NewBillController {
        NewBillController::new(
            self.document.clone(),
            self.navigator.clone(),
            self.store.clone(),
            self.session.clone(),
        )
    }
}
