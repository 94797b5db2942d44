//! テスト用のコラボレーター実装

use crate::features::bills::models::{Bill, BillUpdate, CreatedFile, UploadForm};
use crate::features::bills::store::{BillsApi, Store};
use crate::shared::document::Document;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::navigation::{Navigator, Route};
use crate::shared::session::{MemorySessionStore, SessionKeys};
use async_trait::async_trait;
use std::cell::RefCell;
use std::sync::{Arc, Mutex, Once};
use tokio::sync::Notify;

/// 呼び出しを記録するモックストア
#[derive(Default)]
pub(crate) struct MockStore {
    pub list_result: Mutex<Option<AppResult<Vec<Bill>>>>,
    pub create_result: Mutex<Option<AppResult<CreatedFile>>>,
    /// 設定されている場合、update は通知されるまで完了しない
    pub update_gate: Option<Arc<Notify>>,
    pub list_calls: Mutex<usize>,
    pub create_calls: Mutex<Vec<UploadForm>>,
    pub update_calls: Mutex<Vec<BillUpdate>>,
}

impl MockStore {
    pub fn with_bills(bills: Vec<Bill>) -> Arc<Self> {
        let store = Self::default();
        *store.list_result.lock().unwrap() = Some(Ok(bills));
        Arc::new(store)
    }

    pub fn with_list_error(message: &str) -> Arc<Self> {
        let store = Self::default();
        *store.list_result.lock().unwrap() = Some(Err(AppError::transport(message)));
        Arc::new(store)
    }

    pub fn with_created(file_url: &str, key: &str) -> Arc<Self> {
        let store = Self::default();
        *store.create_result.lock().unwrap() = Some(Ok(CreatedFile {
            file_url: file_url.to_string(),
            key: key.to_string(),
        }));
        Arc::new(store)
    }

    pub fn with_create_error(message: &str) -> Arc<Self> {
        let store = Self::default();
        *store.create_result.lock().unwrap() = Some(Err(AppError::transport(message)));
        Arc::new(store)
    }

    pub fn with_blocked_update(gate: Arc<Notify>) -> Arc<Self> {
        Arc::new(Self {
            update_gate: Some(gate),
            ..Self::default()
        })
    }

    pub fn create_count(&self) -> usize {
        self.create_calls.lock().unwrap().len()
    }

    pub fn update_count(&self) -> usize {
        self.update_calls.lock().unwrap().len()
    }
}

#[async_trait]
impl BillsApi for MockStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        *self.list_calls.lock().unwrap() += 1;
        self.list_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Ok(Vec::new()))
    }

    async fn create(&self, form: UploadForm) -> AppResult<CreatedFile> {
        self.create_calls.lock().unwrap().push(form);
        self.create_result
            .lock()
            .unwrap()
            .take()
            .unwrap_or_else(|| Err(AppError::transport("Erreur 500")))
    }

    async fn update(&self, update: BillUpdate) -> AppResult<Bill> {
        let id = update.selector.clone().unwrap_or_default();
        self.update_calls.lock().unwrap().push(update);
        if let Some(gate) = &self.update_gate {
            gate.notified().await;
        }
        Ok(bill(&id, "2004-04-04", "pending"))
    }
}

impl Store for Arc<MockStore> {
    fn bills(&self) -> Arc<dyn BillsApi> {
        self.clone()
    }
}

/// 遷移先を記録するナビゲーター
#[derive(Default)]
pub(crate) struct RecordingNavigator {
    pub routes: Mutex<Vec<Route>>,
}

impl RecordingNavigator {
    pub fn routes(&self) -> Vec<Route> {
        self.routes.lock().unwrap().clone()
    }
}

impl Navigator for RecordingNavigator {
    fn on_navigate(&self, route: Route) {
        self.routes.lock().unwrap().push(route);
    }
}

/// アラートとプレビュー表示を記録するドキュメント
pub(crate) struct RecordingDocument {
    pub alerts: Mutex<Vec<String>>,
    pub previews: Mutex<Vec<(String, u32)>>,
    pub width: u32,
}

impl Default for RecordingDocument {
    fn default() -> Self {
        Self {
            alerts: Mutex::new(Vec::new()),
            previews: Mutex::new(Vec::new()),
            width: 801,
        }
    }
}

impl RecordingDocument {
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    pub fn previews(&self) -> Vec<(String, u32)> {
        self.previews.lock().unwrap().clone()
    }
}

impl Document for RecordingDocument {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn show_receipt_preview(&self, receipt_url: &str, width: u32) {
        self.previews
            .lock()
            .unwrap()
            .push((receipt_url.to_string(), width));
    }

    fn modal_width(&self) -> u32 {
        self.width
    }
}

/// 従業員としてログイン済みのセッション
pub(crate) fn employee_session() -> Arc<MemorySessionStore> {
    let session = MemorySessionStore::new();
    session.set_item(
        SessionKeys::USER,
        r#"{"type":"Employee","email":"employee@test.tld"}"#,
    );
    Arc::new(session)
}

pub(crate) fn bill(id: &str, date: &str, status: &str) -> Bill {
    Bill {
        id: id.to_string(),
        date: date.to_string(),
        status: status.to_string(),
        amount: Some(400.0),
        name: Some("encore".to_string()),
        expense_type: Some("Hôtel et logement".to_string()),
        file_url: Some(format!("https://test.storage.tld/{id}.jpg")),
        file_name: Some(format!("{id}.jpg")),
        commentary: None,
        email: Some("a@a".to_string()),
        vat: Some("80".to_string()),
        pct: Some(20.0),
        comment_admin: None,
    }
}

/// 元の一覧データに相当するフィクスチャ
pub(crate) fn fixture_bills() -> Vec<Bill> {
    vec![
        bill("47qAXb6fIm2zOKkLzMro", "2004-04-04", "pending"),
        bill("BeKy5Mo4jkmdfPGYpTxZ", "2001-01-01", "refused"),
        bill("UIUZtnPQvnbFnB0ozvJh", "2003-03-03", "accepted"),
        bill("qcCK3SzECmaZAGRrHjaC", "2002-02-02", "refused"),
    ]
}

/// 記録されたログ
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct CapturedRecord {
    pub level: log::Level,
    pub message: String,
}

thread_local! {
    static CAPTURED: RefCell<Option<Vec<CapturedRecord>>> = const { RefCell::new(None) };
}

/// 記録を開始したスレッドのログだけを保持するロガー
struct CaptureLogger;

impl log::Log for CaptureLogger {
    fn enabled(&self, _metadata: &log::Metadata) -> bool {
        true
    }

    fn log(&self, record: &log::Record) {
        CAPTURED.with(|captured| {
            if let Some(records) = captured.borrow_mut().as_mut() {
                records.push(CapturedRecord {
                    level: record.level(),
                    message: record.args().to_string(),
                });
            }
        });
    }

    fn flush(&self) {}
}

static CAPTURE_LOGGER: CaptureLogger = CaptureLogger;
static INSTALL: Once = Once::new();

/// グローバルロガーとして記録用ロガーを登録する
///
/// env_logger より先に登録されるよう、ログ初期化を呼ぶテストでも先に呼び出す。
pub(crate) fn install_capture_logger() {
    INSTALL.call_once(|| {
        if log::set_logger(&CAPTURE_LOGGER).is_ok() {
            log::set_max_level(log::LevelFilter::Trace);
        }
    });
}

/// 現在のスレッドでログの記録を開始する
pub(crate) fn start_log_capture() {
    install_capture_logger();
    CAPTURED.with(|captured| *captured.borrow_mut() = Some(Vec::new()));
}

/// 記録したログを取り出し、記録を終了する
pub(crate) fn take_logs() -> Vec<CapturedRecord> {
    CAPTURED.with(|captured| captured.borrow_mut().take().unwrap_or_default())
}

/// 指定レベルで記録されたログのメッセージ
pub(crate) fn logs_at(records: &[CapturedRecord], level: log::Level) -> Vec<String> {
    records
        .iter()
        .filter(|record| record.level == level)
        .map(|record| record.message.clone())
        .collect()
}
