/// 画面遷移
///
/// ルート定義と、コントローラーに注入されるナビゲーション関数の抽象化。
use std::fmt;

/// アプリケーションのルート
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Login,
    Bills,
    NewBill,
    Dashboard,
}

impl Route {
    /// ルートのパス
    pub fn path(&self) -> &'static str {
        match self {
            Route::Login => "/",
            Route::Bills => "#employee/bills",
            Route::NewBill => "#employee/bill/new",
            Route::Dashboard => "#admin/dashboard",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// ナビゲーション関数（`onNavigate`）
pub trait Navigator: Send + Sync {
    fn on_navigate(&self, route: Route);
}

impl<F> Navigator for F
where
    F: Fn(Route) + Send + Sync,
{
    fn on_navigate(&self, route: Route) {
        self(route)
    }
}
