/// 汎用APIクライアント
///
/// Billed APIサーバーとの通信を行うreqwestベースのクライアント。
/// 接続失敗時は指数バックオフでリトライし、エラーステータスは
/// "Erreur <status>" 形式のメッセージを持つ通信エラーに変換する。
use crate::shared::config::environment::ApiConfig;
use crate::shared::errors::{AppError, AppResult};
use log::{debug, info, warn};
use reqwest::{multipart, Client, RequestBuilder, Response};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;

pub struct ApiClient {
    client: Client,
    config: ApiConfig,
}

impl ApiClient {
    /// 環境設定からAPIクライアントを作成
    pub fn new() -> AppResult<Self> {
        Self::new_with_config(ApiConfig::from_env())
    }

    /// 設定を指定してAPIクライアントを作成
    pub fn new_with_config(config: ApiConfig) -> AppResult<Self> {
        config.validate()?;

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// GETリクエストを送信
    ///
    /// # 引数
    /// * `endpoint` - ベースURLからの相対パス（例: "/bills"）
    /// * `auth_token` - Bearerトークン（未ログイン時は None）
    ///
    /// # 戻り値
    /// JSONレスポンスをデシリアライズした値。エラーステータスは`AppError::Transport`
    pub async fn get<T>(&self, endpoint: &str, auth_token: Option<&str>) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        info!("GETリクエスト送信: endpoint={endpoint}");

        let request = self.client.get(self.config.endpoint_url(endpoint));
        let request = with_auth(request, auth_token);

        self.send_request_with_retry(request, "GET", endpoint).await
    }

    /// PATCHリクエストを送信
    pub async fn patch<B, T>(
        &self,
        endpoint: &str,
        body: &B,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        B: Serialize,
        T: DeserializeOwned,
    {
        info!("PATCHリクエスト送信: endpoint={endpoint}");

        let request = self.client.patch(self.config.endpoint_url(endpoint)).json(body);
        let request = with_auth(request, auth_token);

        self.send_request_with_retry(request, "PATCH", endpoint).await
    }

    /// マルチパートPOSTリクエストを送信
    ///
    /// `multipart::Form`は複製できないため、リトライごとに`build_form`で再作成する。
    ///
    /// # 引数
    /// * `endpoint` - ベースURLからの相対パス
    /// * `build_form` - 送信するフォームを作成する関数
    /// * `auth_token` - Bearerトークン
    pub async fn post_multipart<F, T>(
        &self,
        endpoint: &str,
        build_form: F,
        auth_token: Option<&str>,
    ) -> AppResult<T>
    where
        F: Fn() -> AppResult<multipart::Form>,
        T: DeserializeOwned,
    {
        info!("マルチパートPOSTリクエスト送信: endpoint={endpoint}");

        let url = self.config.endpoint_url(endpoint);
        let mut attempts = 0;
        loop {
            let request = self.client.post(&url).multipart(build_form()?);
            let request = with_auth(request, auth_token);

            match request.send().await {
                Ok(response) => return self.parse_response(response, "POST", endpoint).await,
                Err(e) => {
                    attempts = self.wait_before_retry(attempts, &e).await?;
                }
            }
        }
    }

    /// リトライ機能付きでリクエストを送信
    async fn send_request_with_retry<T>(
        &self,
        request: RequestBuilder,
        method: &str,
        endpoint: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let mut attempts = 0;
        loop {
            let cloned_request = request
                .try_clone()
                .ok_or_else(|| AppError::transport("リクエストのクローンに失敗しました"))?;

            match cloned_request.send().await {
                Ok(response) => return self.parse_response(response, method, endpoint).await,
                Err(e) => {
                    attempts = self.wait_before_retry(attempts, &e).await?;
                }
            }
        }
    }

    /// 接続失敗時、リトライ可能なら待機して次の試行回数を返す
    async fn wait_before_retry(&self, attempts: u32, error: &reqwest::Error) -> AppResult<u32> {
        if attempts >= self.config.max_retries {
            return Err(AppError::transport(format!(
                "APIサーバーへの接続に失敗しました: {error}"
            )));
        }

        let attempts = attempts + 1;
        let delay = Duration::from_secs(2_u64.pow(attempts));
        warn!(
            "APIリクエスト失敗、リトライします: attempt={attempts}/{}, delay={delay:?}",
            self.config.max_retries
        );
        tokio::time::sleep(delay).await;
        Ok(attempts)
    }

    async fn parse_response<T>(
        &self,
        response: Response,
        method: &str,
        endpoint: &str,
    ) -> AppResult<T>
    where
        T: DeserializeOwned,
    {
        let status = response.status();
        if status.is_success() {
            let result: T = response
                .json()
                .await
                .map_err(|e| AppError::transport(format!("レスポンス解析エラー: {e}")))?;

            info!("{method}リクエスト成功: endpoint={endpoint}");
            return Ok(result);
        }

        let body = response.text().await.unwrap_or_default();
        warn!(
            "APIサーバーからエラーレスポンス: method={method}, endpoint={endpoint}, status={}",
            status.as_u16()
        );
        Err(AppError::transport(error_message(status.as_u16(), &body)))
    }
}

fn with_auth(request: RequestBuilder, auth_token: Option<&str>) -> RequestBuilder {
    match auth_token {
        Some(token) => request.header("Authorization", format!("Bearer {token}")),
        None => request,
    }
}

/// エラーレスポンスから画面表示用のメッセージを組み立てる
///
/// `{"message": ...}` または `{"error": ...}` 形式のJSONであれば、その内容を付加する。
pub(crate) fn error_message(status: u16, body: &str) -> String {
    let detail = serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| {
            ["message", "error"]
                .iter()
                .find_map(|key| value.get(*key).and_then(|v| v.as_str()).map(str::to_string))
        })
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty() && !trimmed.starts_with('{')).then(|| trimmed.to_string())
        });

    match detail {
        Some(detail) => {
            debug!("エラーレスポンス詳細: status={status}, detail={detail}");
            format!("Erreur {status}: {detail}")
        }
        None => format!("Erreur {status}"),
    }
}
