/// APIサーバー経由のリモートストア
///
/// `Store`/`BillsApi`をBilled APIサーバーに対して実装する。
use crate::features::bills::models::{Bill, BillUpdate, CreatedFile, UploadForm};
use crate::features::bills::store::{BillsApi, Store};
use crate::shared::api_client::ApiClient;
use crate::shared::errors::{AppError, AppResult};
use crate::shared::session::{SessionKeys, SessionStore};
use async_trait::async_trait;
use log::info;
use reqwest::multipart;
use std::sync::Arc;

const BILLS_ENDPOINT: &str = "/bills";

/// APIサーバー経由の経費報告リソース
pub struct ApiBillsStore {
    client: Arc<ApiClient>,
    session: Arc<dyn SessionStore>,
}

impl ApiBillsStore {
    pub fn new(client: ApiClient, session: Arc<dyn SessionStore>) -> Self {
        Self {
            client: Arc::new(client),
            session,
        }
    }

    fn auth_token(&self) -> Option<String> {
        self.session.get_item(SessionKeys::JWT)
    }
}

impl Store for Arc<ApiBillsStore> {
    fn bills(&self) -> Arc<dyn BillsApi> {
        self.clone()
    }
}

#[async_trait]
impl BillsApi for ApiBillsStore {
    async fn list(&self) -> AppResult<Vec<Bill>> {
        let token = self.auth_token();
        let bills: Vec<Bill> = self.client.get(BILLS_ENDPOINT, token.as_deref()).await?;

        info!("経費報告一覧取得成功: count={}", bills.len());
        Ok(bills)
    }

    async fn create(&self, form: UploadForm) -> AppResult<CreatedFile> {
        let token = self.auth_token();
        let created: CreatedFile = self
            .client
            .post_multipart(BILLS_ENDPOINT, || build_upload_form(&form), token.as_deref())
            .await?;

        info!(
            "領収書アップロード成功: key={}, file_url={}",
            created.key, created.file_url
        );
        Ok(created)
    }

    async fn update(&self, update: BillUpdate) -> AppResult<Bill> {
        let selector = update
            .selector
            .as_deref()
            .ok_or_else(|| AppError::validation("更新対象の経費報告IDがありません"))?;

        let token = self.auth_token();
        let endpoint = format!("{BILLS_ENDPOINT}/{selector}");
        let bill: Bill = self
            .client
            .patch(&endpoint, &update.bill, token.as_deref())
            .await?;

        info!("経費報告更新成功: id={}", bill.id);
        Ok(bill)
    }
}

/// アップロード用のマルチパートフォームを構築する
fn build_upload_form(form: &UploadForm) -> AppResult<multipart::Form> {
    let mut part = multipart::Part::bytes(form.file.data.clone()).file_name(form.file.name.clone());

    if let Some(content_type) = form.file.content_type.as_deref() {
        part = part
            .mime_str(content_type)
            .map_err(|e| AppError::validation(format!("MIMEタイプ設定エラー: {e}")))?;
    }

    let mut multipart_form = multipart::Form::new().part("file", part);
    if let Some(email) = form.email.as_deref() {
        multipart_form = multipart_form.text("email", email.to_string());
    }
    Ok(multipart_form)
}
