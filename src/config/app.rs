/// アプリケーション設定モジュール
///
/// ビルド時に config.toml から読み込まれる静的設定を管理します。
/// これらの設定は実行時には変更できません。
use serde::Deserialize;
use std::sync::LazyLock;

/// ビルド時に埋め込まれたアプリケーション設定
///
/// 初回アクセス時にパースされます。埋め込みTOMLが壊れている場合は
/// 実行時エラーではなくビルド成果物の欠陥なので、即座にパニックします。
pub static APP_CONFIG: LazyLock<AppConfig> = LazyLock::new(AppConfig::load);

/// アプリケーション全体の設定
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub api: ApiConfig,
    pub paging: PagingConfig,
    pub logging: LoggingConfig,
}

/// API関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Kaltura API v3 のベースURL
    pub endpoint: String,

    /// APIリクエストのタイムアウト(秒)
    pub timeout_seconds: u64,
}

/// ページング関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct PagingConfig {
    /// 動画全件リストのページサイズ
    pub video_page_size: i32,

    /// アクティブユーザーリストのページサイズ
    pub user_page_size: i32,

    /// ユーザー別動画リストのページサイズ
    pub user_videos_page_size: i32,

    /// 1回のリスト操作で取得する最大ページ数
    pub max_pages: u32,
}

/// ロギング関連の設定
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// ログレベル (trace, debug, info, warn, error)
    pub level: String,
}

impl AppConfig {
    /// ビルド時に埋め込まれたconfig.tomlから設定を読み込む
    ///
    /// # Panics
    /// 設定ファイルのパースに失敗した場合はパニックします。
    fn load() -> Self {
        const CONFIG_STR: &str = include_str!("../../config.toml");
        toml::from_str(CONFIG_STR)
            .expect("Failed to parse embedded config.toml. This is a build-time configuration error.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_config() {
        // ビルド時設定が正しく読み込まれることを確認
        let config = AppConfig::load();
        assert_eq!(config.api.endpoint, "https://www.kaltura.com");
        assert_eq!(config.api.timeout_seconds, 120);
        assert_eq!(config.paging.video_page_size, 500);
        assert_eq!(config.paging.user_videos_page_size, 100);
        assert!(config.paging.max_pages > 0);
    }

    #[test]
    fn test_global_config_access() {
        // APP_CONFIGがグローバルに参照可能であることを確認
        assert_eq!(APP_CONFIG.paging.user_page_size, 500);
        assert_eq!(APP_CONFIG.logging.level, "info");
    }
}
