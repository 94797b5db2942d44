/// 新規経費報告画面のコントローラー
///
/// 領収書ファイルの拡張子検証 → アップロード → フォーム送信 の一連のフローを扱う。
/// 送信後は Submitted となり、以降のファイル選択や再送信は受け付けない。
use crate::features::bills::models::{BillUpdate, ReceiptFile, UploadForm};
use crate::features::bills::store::Store;
use crate::features::new_bill::models::{
    FileChangeEvent, FileOutcome, FlowState, NewBillForm, UploadState,
};
use crate::features::new_bill::validation::validate_receipt_extension;
use crate::shared::document::Document;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::navigation::{Navigator, Route};
use crate::shared::session::{CurrentUser, SessionStore};
use log::{error, info, warn};
use std::sync::Arc;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub struct NewBillController {
    document: Arc<dyn Document>,
    navigator: Arc<dyn Navigator>,
    store: Option<Arc<dyn Store>>,
    session: Arc<dyn SessionStore>,
    upload: UploadState,
    state: FlowState,
}

impl NewBillController {
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
            session,
            upload: UploadState::default(),
            state: FlowState::Empty,
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    pub fn upload_state(&self) -> &UploadState {
        &self.upload
    }

    pub fn file_url(&self) -> Option<&str> {
        self.upload.file_url.as_deref()
    }

    pub fn file_name(&self) -> Option<&str> {
        self.upload.file_name.as_deref()
    }

    pub fn bill_id(&self) -> Option<&str> {
        self.upload.bill_id.as_deref()
    }

    /// ファイル入力の変更を処理する
    ///
    /// 拡張子が jpg / jpeg / png 以外の場合はアラートを1回表示し、アップロードしない。
    ///
    /// # 引数
    /// * `event` - 選択されたファイル（先頭の1件のみ扱う）
    ///
    /// # 戻り値
    /// 処理結果。アップロードの失敗、送信済みのフローへの操作はエラー
    pub async fn handle_change_file(&mut self, event: FileChangeEvent) -> AppResult<FileOutcome> {
        self.ensure_not_submitted()?;

        let Some(file) = event.files.into_iter().next() else {
            return Ok(FileOutcome::NoFile);
        };

        self.state = FlowState::FileValidating;
        if let Err(e) = validate_receipt_extension(&file.name) {
            warn!("領収書ファイルを却下しました: file_name={}", file.name);
            self.state = FlowState::FileRejected;
            self.document.alert(e.user_message());
            return Ok(FileOutcome::Rejected);
        }

        let result = self.upload_file(file).await;
        if result.is_err() {
            self.state = self.settled_state();
        }
        result
    }

    async fn upload_file(&mut self, file: ReceiptFile) -> AppResult<FileOutcome> {
        let store = self
            .store
            .clone()
            .ok_or_else(|| AppError::configuration("リモートストアが設定されていません"))?;
        let email = CurrentUser::from_session(self.session.as_ref())?.email;

        self.state = FlowState::Uploading;
        let file_name = file.name.clone();
        info!("領収書アップロード開始: file_name={file_name}");

        let created = store
            .bills()
            .create(UploadForm { file, email })
            .await
            .map_err(|e| {
                error!("領収書アップロード失敗: file_name={file_name}, error={e}");
                e
            })?;

        self.upload = UploadState {
            file_url: Some(created.file_url.clone()),
            file_name: Some(file_name),
            bill_id: Some(created.key.clone()),
        };
        self.state = FlowState::Uploaded;

        Ok(FileOutcome::Uploaded {
            file_url: created.file_url,
            bill_id: created.key,
        })
    }

    /// 失敗後に戻る状態（以前のアップロード結果があれば Uploaded）
    fn settled_state(&self) -> FlowState {
        if self.upload.file_url.is_some() {
            FlowState::Uploaded
        } else {
            FlowState::Empty
        }
    }

    fn ensure_not_submitted(&self) -> AppResult<()> {
        if self.state == FlowState::Submitted {
            return Err(AppError::validation("この経費報告は送信済みです"));
        }
        Ok(())
    }

    /// フォームを送信する
    ///
    /// 送信レコードの更新はバックグラウンドで行い、完了を待たずに一覧画面へ遷移する。
    /// 更新の失敗はログに出力される。ストアが無い場合は更新せずに遷移する。
    ///
    /// # 引数
    /// * `form` - フォームの入力値
    ///
    /// # 戻り値
    /// 更新タスクのハンドル（ストアが無い場合は None）。送信済みの場合は
    /// `AppError::Validation`を返し、遷移しない
    pub fn handle_submit(&mut self, form: &NewBillForm) -> AppResult<Option<JoinHandle<()>>> {
        self.ensure_not_submitted()?;

        let email = CurrentUser::from_session(self.session.as_ref())?.email;
        let record = form.to_record(email, &self.upload);
        info!(
            "経費報告を送信します: bill_id={:?}, file_name={:?}",
            self.upload.bill_id, record.file_name
        );

        let task = match &self.store {
            Some(store) => {
                let runtime = Handle::try_current().map_err(|e| {
                    AppError::configuration(format!("非同期ランタイムがありません: {e}"))
                })?;
                let bills = store.bills();
                let update = BillUpdate {
                    selector: self.upload.bill_id.clone(),
                    bill: record,
                };
                Some(runtime.spawn(async move {
                    if let Err(e) = bills.update(update).await {
                        error!("経費報告の更新に失敗しました: {e}");
                    }
                }))
            }
            None => None,
        };

        self.state = FlowState::Submitted;
        info!("画面遷移: {}", Route::Bills);
        self.navigator.on_navigate(Route::Bills);
        Ok(task)
    }
}
