/// リモートストアの抽象化
///
/// 経費報告の一覧取得・領収書アップロード・更新を行う外部クライアント。
/// リトライや整合性の制御は実装側の責務とする。
use crate::features::bills::models::{Bill, BillUpdate, CreatedFile, UploadForm};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::sync::Arc;

/// 経費報告リソースに対する操作
///
/// 失敗は`AppError::Transport`として返し、サーバーのメッセージを保持する。
#[async_trait]
pub trait BillsApi: Send + Sync {
    /// 経費報告の一覧を取得する（順序は保証されない）
    async fn list(&self) -> AppResult<Vec<Bill>>;

    /// 領収書ファイルをアップロードし、経費報告を作成する
    async fn create(&self, form: UploadForm) -> AppResult<CreatedFile>;

    /// 経費報告を更新する
    async fn update(&self, update: BillUpdate) -> AppResult<Bill>;
}

/// リモートストア（`store.bills()`）
pub trait Store: Send + Sync {
    fn bills(&self) -> Arc<dyn BillsApi>;
}
