/// ユーザー設定モジュール
///
/// 実行時にユーザーディレクトリから読み込まれる動的設定を管理します。
/// Windows: C:\Users\<User>\AppData\Roaming\kaltool\config.toml
/// macOS:   /Users/<User>/Library/Application Support/kaltool/config.toml
/// Linux:   /home/<user>/.config/kaltool/config.toml
///
/// パートナー認証情報（admin secret）を含むため、保存時に
/// 所有者のみ読み書き可能なパーミッションを設定します。
use crate::config::error::ConfigError;
use crate::config::permissions;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// デフォルトのタイムゾーンオフセット（UTC）
const DEFAULT_TIMEZONE_OFFSET: i32 = 0;

/// タイムゾーンオフセットの最大値（+18時間 = 64800秒）
const MAX_TIMEZONE_OFFSET: i32 = 64800;

/// タイムゾーンオフセットの最小値（-18時間 = -64800秒）
const MIN_TIMEZONE_OFFSET: i32 = -64800;

/// Kalturaパートナー認証設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Kaltura partner ID
    pub partner_id: i32,

    /// パートナーのadmin secret
    pub admin_secret: String,

    /// セッションを実行するユーザーID
    pub user_id: String,
}

/// ユーザー設定
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Kalturaパートナー認証情報
    pub auth: Option<AuthConfig>,

    /// タイムゾーンオフセット(秒単位)
    /// 例: UTC=0, JST(UTC+9)=32400, PST(UTC-8)=-28800
    #[serde(default = "default_timezone_offset")]
    pub timezone_offset_seconds: i32,
}

// プライベート関数（serde用）
fn default_timezone_offset() -> i32 {
    DEFAULT_TIMEZONE_OFFSET
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            auth: None,
            timezone_offset_seconds: DEFAULT_TIMEZONE_OFFSET,
        }
    }
}

impl UserConfig {
    /// ユーザー設定ファイルのパスを取得
    ///
    /// # Errors
    /// ホームディレクトリが取得できない場合に ConfigError::DirectoryNotFound を返します。
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .ok_or_else(|| ConfigError::directory_not_found("Failed to get user config directory"))
            .map(|config_dir| config_dir.join("kaltool").join("config.toml"))
    }

    /// ユーザー設定を読み込む
    ///
    /// 設定ファイルが存在しない場合は、デフォルトテンプレートから自動的に作成します。
    /// 読み込み後、自動的に検証を実行します（Fail Fast）。
    ///
    /// # Errors
    /// 設定ファイルの読み込み、パース、または検証に失敗した場合に ConfigError を返します。
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path()?;
        Self::load_from(&config_path)
    }

    /// 指定されたパスからユーザー設定を読み込む
    pub fn load_from(config_path: &Path) -> Result<Self, ConfigError> {
        if !config_path.exists() {
            Self::create_default_config(config_path)?;
        }

        let content = fs::read_to_string(config_path).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to read config file: {}", config_path.display()),
                e,
            )
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            ConfigError::parse_error(
                format!("Failed to parse config file ({})", config_path.display()),
                e,
            )
        })?;

        // 自動検証（Fail Fast）
        config.validate()?;

        Ok(config)
    }

    /// デフォルト設定ファイルを作成
    fn create_default_config(config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let default_toml = Self::default_toml_content();
        fs::write(config_path, default_toml).map_err(|e| {
            ConfigError::file_system(
                format!(
                    "Failed to create default config file: {}",
                    config_path.display()
                ),
                e,
            )
        })?;

        Ok(())
    }

    /// デフォルトTOML設定を生成
    fn default_toml_content() -> String {
        format!(
            r#"# kaltool - User Configuration
# Partner credentials are set with 'kaltool login'

# Timezone offset in seconds
# Examples: UTC=0, JST(UTC+9)=32400, PST(UTC-8)=-28800
timezone_offset_seconds = {}
"#,
            DEFAULT_TIMEZONE_OFFSET
        )
    }

    /// ユーザー設定を保存する
    ///
    /// 必要に応じて設定ディレクトリを作成し、保存後に
    /// 認証情報ファイル用のパーミッションを設定します。
    ///
    /// # Errors
    /// ディレクトリの作成またはファイルの書き込みに失敗した場合に ConfigError を返します。
    pub fn save(&self) -> Result<(), ConfigError> {
        let config_path = Self::config_path()?;
        self.save_to(&config_path)
    }

    /// 指定されたパスにユーザー設定を保存する
    pub fn save_to(&self, config_path: &Path) -> Result<(), ConfigError> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                ConfigError::file_system(
                    format!("Failed to create config directory: {}", parent.display()),
                    e,
                )
            })?;
        }

        let content = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::serialize_error("Failed to serialize config", e))?;

        fs::write(config_path, content).map_err(|e| {
            ConfigError::file_system(
                format!("Failed to write config file: {}", config_path.display()),
                e,
            )
        })?;

        // admin secretを含むため所有者のみアクセス可能にする
        permissions::set_credentials_file_permissions(config_path)?;

        Ok(())
    }

    /// ユーザー設定を検証
    ///
    /// Fail Fast: 設定に問題がある場合は即座にエラーを返します。
    ///
    /// # 検証内容
    /// - auth.partner_id: 正の整数であること
    /// - auth.admin_secret: 空文字列でないこと
    /// - auth.user_id: 空文字列でないこと
    /// - timezone_offset_seconds: ±18時間の範囲内であること
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(auth) = &self.auth {
            if auth.partner_id <= 0 {
                return Err(ConfigError::validation_error(format!(
                    "Invalid partner_id '{}'. Partner IDs are positive integers.",
                    auth.partner_id
                )));
            }
            Self::validate_auth_field(&auth.admin_secret, "admin_secret")?;
            Self::validate_auth_field(&auth.user_id, "user_id")?;
        }

        Self::validate_timezone_offset(self.timezone_offset_seconds)?;

        Ok(())
    }

    /// 認証情報のフィールドを検証
    fn validate_auth_field(value: &str, field_name: &str) -> Result<(), ConfigError> {
        if value.trim().is_empty() {
            return Err(ConfigError::validation_error(format!(
                "Authentication {} cannot be empty. Please run 'kaltool login' again.",
                field_name
            )));
        }
        Ok(())
    }

    /// タイムゾーンオフセットを検証
    fn validate_timezone_offset(offset: i32) -> Result<(), ConfigError> {
        if !(MIN_TIMEZONE_OFFSET..=MAX_TIMEZONE_OFFSET).contains(&offset) {
            return Err(ConfigError::validation_error(format!(
                "Invalid timezone offset '{}' seconds. Must be between {} and {} (±18 hours)",
                offset, MIN_TIMEZONE_OFFSET, MAX_TIMEZONE_OFFSET
            )));
        }
        Ok(())
    }

    /// 認証情報を設定
    pub fn set_auth(&mut self, partner_id: i32, admin_secret: String, user_id: String) {
        self.auth = Some(AuthConfig {
            partner_id,
            admin_secret,
            user_id,
        });
    }

    /// 認証情報を取得
    ///
    /// # Errors
    /// 認証情報が設定されていない場合に ConfigError::CredentialsNotFound を返します。
    pub fn get_auth(&self) -> Result<&AuthConfig, ConfigError> {
        self.auth.as_ref().ok_or_else(|| {
            ConfigError::credentials_not_found(
                "Partner credentials not found. Please run 'kaltool login' first.",
            )
        })
    }

    /// 認証情報が存在するかチェック
    pub fn has_auth(&self) -> bool {
        self.auth.is_some()
    }

    /// 認証情報を削除
    pub fn clear_auth(&mut self) {
        self.auth = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_has_auth() {
        // 認証情報の有無を正しく判定できることを確認
        let mut config = UserConfig::default();
        assert!(!config.has_auth());

        config.set_auth(391241, "secret".to_string(), "admin".to_string());
        assert!(config.has_auth());
    }

    #[test]
    fn test_get_auth() {
        // 認証情報の取得が正しく動作することを確認
        let mut config = UserConfig::default();

        // 認証情報が未設定の場合はエラー
        let result = config.get_auth();
        assert!(result.is_err());
        if let Err(ConfigError::CredentialsNotFound { message }) = result {
            assert!(message.contains("login"));
        }

        // 認証情報設定後は取得できる
        config.set_auth(391241, "secret".to_string(), "admin".to_string());
        let auth = config.get_auth().unwrap();
        assert_eq!(auth.partner_id, 391241);
        assert_eq!(auth.admin_secret, "secret");
        assert_eq!(auth.user_id, "admin");
    }

    #[test]
    fn test_clear_auth() {
        // 認証情報のクリアが正しく動作することを確認
        let mut config = UserConfig::default();
        config.set_auth(391241, "secret".to_string(), "admin".to_string());

        assert!(config.has_auth());

        config.clear_auth();
        assert!(!config.has_auth());
        assert!(config.get_auth().is_err());
    }

    #[test]
    fn test_config_path() {
        // プラットフォーム固有のパスが正しく取得できることを確認
        let path = UserConfig::config_path().expect("Failed to get config path");
        assert!(path.to_string_lossy().contains("kaltool"));
        assert!(path.to_string_lossy().ends_with("config.toml"));
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        // save_to() と load_from() の往復検証
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("config.toml");

        let mut test_config = UserConfig {
            auth: None,
            timezone_offset_seconds: 32400, // JST = UTC+9
        };
        test_config.set_auth(391241, "secret_xyz".to_string(), "admin".to_string());

        test_config.save_to(&config_path).expect("Failed to save config");
        assert!(config_path.exists(), "Config file should exist after save");

        let loaded = UserConfig::load_from(&config_path).expect("Failed to load config");
        let loaded_auth = loaded.get_auth().expect("Auth should be present");
        assert_eq!(loaded_auth.partner_id, 391241);
        assert_eq!(loaded_auth.admin_secret, "secret_xyz");
        assert_eq!(loaded_auth.user_id, "admin");
        assert_eq!(loaded.timezone_offset_seconds, 32400);
    }

    #[test]
    fn test_load_creates_default_if_not_exists() {
        // load_from() が設定ファイルが存在しない場合にデフォルトを作成することを確認
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let config_path = temp_dir.path().join("sub").join("config.toml");

        let result = UserConfig::load_from(&config_path);

        assert!(config_path.exists(), "Config file should be created");
        assert!(result.is_ok(), "Default config should load successfully");
        assert!(!result.unwrap().has_auth());

        // テンプレートにloginへの案内が含まれることを確認
        let content = fs::read_to_string(&config_path).expect("Failed to read config");
        assert!(content.contains("timezone_offset_seconds"));
        assert!(content.contains("kaltool login"));
    }

    #[test]
    fn test_validate_accepts_config_without_auth() {
        // 認証情報なしの設定は有効
        let config = UserConfig::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_admin_secret() {
        // 空のadmin_secretは検証エラー
        let mut config = UserConfig::default();
        config.set_auth(391241, "".to_string(), "admin".to_string());

        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { message }) = result {
            assert!(message.contains("admin_secret"));
        } else {
            panic!("Expected ValidationError for empty admin_secret");
        }
    }

    #[test]
    fn test_validate_rejects_nonpositive_partner_id() {
        // 0以下のpartner_idは検証エラー
        let mut config = UserConfig::default();
        config.set_auth(0, "secret".to_string(), "admin".to_string());

        let result = config.validate();
        assert!(result.is_err());
        if let Err(ConfigError::ValidationError { message }) = result {
            assert!(message.contains("partner_id"));
        } else {
            panic!("Expected ValidationError for nonpositive partner_id");
        }
    }

    #[test]
    fn test_validate_rejects_out_of_range_timezone() {
        // ±18時間を超えるオフセットは検証エラー
        let config = UserConfig {
            auth: None,
            timezone_offset_seconds: 90000,
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_saved_file_is_owner_only() {
        // 保存されたファイルが所有者のみアクセス可能であることを確認
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            let temp_dir = TempDir::new().expect("Failed to create temp directory");
            let config_path = temp_dir.path().join("config.toml");

            let mut config = UserConfig::default();
            config.set_auth(391241, "secret".to_string(), "admin".to_string());
            config.save_to(&config_path).expect("Failed to save config");

            let mode = fs::metadata(&config_path)
                .expect("Failed to get metadata")
                .permissions()
                .mode();
            assert_eq!(mode & 0o777, 0o600);
        }
    }
}
