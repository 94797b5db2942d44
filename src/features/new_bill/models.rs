use crate::features::bills::models::{BillStatus, NewBillRecord, ReceiptFile};

/// 作成フローの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    /// ファイル未選択
    Empty,
    /// 拡張子の検証中
    FileValidating,
    /// 拡張子が不正で却下された
    FileRejected,
    /// アップロード中
    Uploading,
    /// アップロード完了
    Uploaded,
    /// フォーム送信済み（終端）
    Submitted,
}

/// アップロード結果の一時状態
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UploadState {
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub bill_id: Option<String>,
}

/// ファイル入力の change イベント
#[derive(Debug, Clone, Default)]
pub struct FileChangeEvent {
    pub files: Vec<ReceiptFile>,
}

impl FileChangeEvent {
    pub fn single(file: ReceiptFile) -> Self {
        Self { files: vec![file] }
    }
}

/// ファイル選択の処理結果
#[derive(Debug, Clone, PartialEq)]
pub enum FileOutcome {
    /// ファイルが選択されていない
    NoFile,
    /// 拡張子が不正でアップロードしなかった
    Rejected,
    /// アップロード完了
    Uploaded { file_url: String, bill_id: String },
}

/// 新規作成フォームの入力値
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewBillForm {
    pub expense_type: String,
    pub name: String,
    pub amount: String,
    pub date: String,
    pub vat: String,
    pub pct: String,
    pub commentary: String,
}

/// TVA のデフォルト税率（%）
pub const DEFAULT_PCT: i64 = 20;

impl NewBillForm {
    /// 入力値とアップロード結果から送信レコードを組み立てる
    ///
    /// 金額は整数として解析できない場合は未設定、税率は解析できない場合は20とする。
    ///
    /// # 引数
    /// * `email` - ログインユーザーのメールアドレス
    /// * `upload` - 領収書のアップロード結果
    pub fn to_record(&self, email: Option<String>, upload: &UploadState) -> NewBillRecord {
        NewBillRecord {
            email,
            expense_type: self.expense_type.clone(),
            name: self.name.clone(),
            amount: parse_int(&self.amount),
            date: self.date.clone(),
            vat: self.vat.clone(),
            pct: parse_int(&self.pct)
                .filter(|pct| *pct != 0)
                .unwrap_or(DEFAULT_PCT),
            commentary: self.commentary.clone(),
            file_url: upload.file_url.clone(),
            file_name: upload.file_name.clone(),
            status: BillStatus::Pending.to_string(),
        }
    }
}

/// 先頭の整数部分を解析する（"348.50" は 348）
fn parse_int(raw: &str) -> Option<i64> {
    let trimmed = raw.trim();
    let end = trimmed
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(trimmed.len());

    trimmed[..end].parse().ok()
}
