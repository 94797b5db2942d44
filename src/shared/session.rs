/// セッションストア
///
/// ブラウザの localStorage に相当するキー・バリューストアの抽象化。
/// コアからは読み取り専用で扱う。
use crate::shared::errors::{AppError, AppResult};
use serde::Deserialize;
use std::collections::HashMap;
use std::sync::RwLock;

/// セッションストアのキー定義
pub struct SessionKeys;

impl SessionKeys {
    /// ログインユーザー情報（JSON）のキー
    pub const USER: &'static str = "user";
    /// 認証トークンのキー
    pub const JWT: &'static str = "jwt";
}

/// キー・バリュー形式のセッションストア
pub trait SessionStore: Send + Sync {
    fn get_item(&self, key: &str) -> Option<String>;
}

/// ログインユーザー情報
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CurrentUser {
    #[serde(rename = "type")]
    pub user_type: Option<String>,
    pub email: Option<String>,
}

impl CurrentUser {
    /// セッションストアの "user" キーからユーザー情報を読み込む
    pub fn from_session(session: &dyn SessionStore) -> AppResult<Self> {
        let raw = session
            .get_item(SessionKeys::USER)
            .ok_or_else(|| AppError::session("ログインユーザー情報がありません"))?;

        serde_json::from_str(&raw)
            .map_err(|e| AppError::session(format!("ログインユーザー情報の解析に失敗しました: {e}")))
    }
}

/// メモリ上のセッションストア
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    items: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_item<K: Into<String>, V: Into<String>>(&self, key: K, value: V) {
        if let Ok(mut items) = self.items.write() {
            items.insert(key.into(), value.into());
        }
    }
}

impl SessionStore for MemorySessionStore {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.read().ok()?.get(key).cloned()
    }
}
