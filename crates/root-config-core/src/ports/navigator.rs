//! Navigator port - ページ遷移の抽象化

/// Navigator は現在の href を読み、別の href へ遷移する
///
/// `assign` はフルページ遷移（プロセス再起動に相当）です。
pub trait Navigator: Send + Sync {
    fn href(&self) -> String;

    fn assign(&self, href: String);
}
