/// ドキュメント（画面）境界の抽象化
///
/// コントローラーはアラート表示と領収書プレビューの表示をこのトレイト経由で行い、
/// 特定のUIツールキットを直接操作しない。
use std::collections::HashMap;

/// 領収書URLを保持するデータ属性名
pub const BILL_URL_ATTRIBUTE: &str = "data-bill-url";

/// コントローラーに注入されるドキュメントハンドル
pub trait Document: Send + Sync {
    /// ブロッキングなアラートを表示する
    fn alert(&self, message: &str);

    /// 領収書画像をモーダルで表示する
    fn show_receipt_preview(&self, receipt_url: &str, width: u32);

    /// プレビューモーダルの幅（ピクセル）
    fn modal_width(&self) -> u32;
}

/// クリックされた要素（属性のみを保持）
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IconElement {
    attributes: HashMap<String, String>,
}

impl IconElement {
    pub fn new() -> Self {
        Self::default()
    }

    /// 領収書URLを持つ目のアイコンを作成する
    pub fn with_bill_url<S: Into<String>>(url: S) -> Self {
        let mut icon = Self::new();
        icon.set_attribute(BILL_URL_ATTRIBUTE, url);
        icon
    }

    pub fn set_attribute<K: Into<String>, V: Into<String>>(&mut self, name: K, value: V) {
        self.attributes.insert(name.into(), value.into());
    }

    pub fn get_attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }
}
