/// 共有モジュール
///
/// 機能モジュール間で共有されるエラー型・設定・外部コラボレーター（ナビゲーション、
/// セッション、ドキュメント）の抽象化、および汎用APIクライアントを提供します。
pub mod api_client;
pub mod config;
pub mod document;
pub mod errors;
pub mod navigation;
pub mod session;

#[cfg(test)]
pub(crate) mod testing;
