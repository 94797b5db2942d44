use serde::{Deserialize, Serialize};
use std::fmt;

/// ノート・ド・フレ（経費報告）データモデル
///
/// `date` と `status` は保存されている値のまま保持し、表示用のフォーマットは
/// 新しい`Bill`を作ることで行う。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub expense_type: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub commentary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vat: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pct: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment_admin: Option<String>,
}

/// 経費報告のステータス（閉じた集合）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BillStatus {
    Pending,
    Accepted,
    Refused,
}

impl BillStatus {
    /// 保存されている文字列からステータスを取得する
    pub fn parse(raw: &str) -> Option<Self> {
        match raw {
            "pending" => Some(BillStatus::Pending),
            "accepted" => Some(BillStatus::Accepted),
            "refused" => Some(BillStatus::Refused),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BillStatus::Pending => "pending",
            BillStatus::Accepted => "accepted",
            BillStatus::Refused => "refused",
        }
    }

    /// 画面表示用のラベル
    pub fn label(&self) -> &'static str {
        match self {
            BillStatus::Pending => "En attente",
            BillStatus::Accepted => "Accepté",
            BillStatus::Refused => "Refused",
        }
    }
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// アップロードする領収書ファイル
#[derive(Debug, Clone, PartialEq)]
pub struct ReceiptFile {
    pub name: String,
    pub content_type: Option<String>,
    pub data: Vec<u8>,
}

impl ReceiptFile {
    pub fn new<N: Into<String>>(name: N, content_type: Option<&str>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.map(str::to_string),
            data,
        }
    }
}

/// 領収書アップロード用フォームデータ（`file` と `email`）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadForm {
    pub file: ReceiptFile,
    pub email: Option<String>,
}

/// アップロード結果
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedFile {
    pub file_url: String,
    /// 作成された経費報告のID
    pub key: String,
}

/// 新規経費報告の送信レコード
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBillRecord {
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub expense_type: String,
    pub name: String,
    pub amount: Option<i64>,
    pub date: String,
    pub vat: String,
    pub pct: i64,
    pub commentary: String,
    pub file_url: Option<String>,
    pub file_name: Option<String>,
    pub status: String,
}

/// 経費報告の更新リクエスト
#[derive(Debug, Clone, PartialEq)]
pub struct BillUpdate {
    /// 更新対象の経費報告ID（アップロード時に払い出されたキー）
    pub selector: Option<String>,
    pub bill: NewBillRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bill_deserialization() {
        let json = r#"{
            "id": "47qAXb6fIm2zOKkLzMro",
            "vat": "80",
            "fileUrl": "https://test.storage.tld/v0/b/billable-677b6.a…f-1.jpg",
            "status": "pending",
            "type": "Hôtel et logement",
            "commentary": "séminaire billed",
            "name": "encore",
            "fileName": "preview-facture-free-201801-pdf-1.jpg",
            "date": "2004-04-04",
            "amount": 400,
            "commentAdmin": "ok",
            "email": "a@a",
            "pct": 20
        }"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.id, "47qAXb6fIm2zOKkLzMro");
        assert_eq!(bill.expense_type.as_deref(), Some("Hôtel et logement"));
        assert_eq!(bill.amount, Some(400.0));
        assert_eq!(bill.comment_admin.as_deref(), Some("ok"));
        assert_eq!(bill.pct, Some(20.0));
    }

    #[test]
    fn test_bill_with_null_file_url() {
        let json = r#"{"id": "1", "date": "2001-01-01", "status": "refused", "fileUrl": null}"#;

        let bill: Bill = serde_json::from_str(json).unwrap();
        assert_eq!(bill.file_url, None);
        assert_eq!(bill.file_name, None);
        assert_eq!(bill.commentary, None);
    }

    #[test]
    fn test_bill_status_parse() {
        assert_eq!(BillStatus::parse("pending"), Some(BillStatus::Pending));
        assert_eq!(BillStatus::parse("accepted"), Some(BillStatus::Accepted));
        assert_eq!(BillStatus::parse("refused"), Some(BillStatus::Refused));
        assert_eq!(BillStatus::parse("Pending"), None);
        assert_eq!(BillStatus::Refused.to_string(), "refused");
    }

    #[test]
    fn test_created_file_deserialization() {
        let created: CreatedFile =
            serde_json::from_str(r#"{"fileUrl":"http://test.com","key":"123"}"#).unwrap();
        assert_eq!(created.file_url, "http://test.com");
        assert_eq!(created.key, "123");
    }

    #[test]
    fn test_new_bill_record_serialization() {
        let record = NewBillRecord {
            email: Some("a@a".to_string()),
            expense_type: "Transports".to_string(),
            name: "Vol Paris Londres".to_string(),
            amount: Some(348),
            date: "2022-04-04".to_string(),
            vat: "70".to_string(),
            pct: 20,
            commentary: String::new(),
            file_url: Some("http://test.com".to_string()),
            file_name: Some("test.jpg".to_string()),
            status: BillStatus::Pending.to_string(),
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"type\":\"Transports\""));
        assert!(json.contains("\"fileUrl\":\"http://test.com\""));
        assert!(json.contains("\"status\":\"pending\""));
    }
}
