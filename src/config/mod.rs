/// 設定管理モジュール
///
/// このモジュールは2層の設定構造を提供します:
/// 1. AppConfig - ビルド時に埋め込まれる静的設定（APP_CONFIG）
/// 2. UserConfig - 実行時に読み込まれる動的設定（パートナー認証情報を含む）
pub mod app;
pub mod error;
pub mod permissions;
pub mod user;

pub use app::APP_CONFIG;
pub use user::UserConfig;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_config_direct_access() {
        // APP_CONFIGがグローバルに直接アクセス可能であることを確認
        assert_eq!(APP_CONFIG.api.endpoint, "https://www.kaltura.com");
        assert_eq!(APP_CONFIG.api.timeout_seconds, 120);
        assert!(APP_CONFIG.paging.max_pages > 0);
    }

    #[test]
    fn test_independent_config_usage() {
        // AppConfigとUserConfigが独立して使用できることを確認
        let page_size = APP_CONFIG.paging.video_page_size;
        assert!(page_size > 0);

        let mut user_config = UserConfig::default();
        user_config.set_auth(391241, "secret".to_string(), "admin".to_string());
        assert!(user_config.validate().is_ok());
        assert!(user_config.has_auth());
    }
}
