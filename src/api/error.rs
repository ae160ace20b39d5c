/// API層のエラー定義
///
/// ネットワーク・HTTP・Kalturaサーバー例外を構造化して定義。
/// Kalturaはエラーを HTTP 200 の KalturaAPIException ペイロードで返すため、
/// リモート例外はコード付きの独立したバリアントとして保持する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

/// 対象が見つからないことを示すKalturaエラーコード
const NOT_FOUND_CODES: &[&str] = &[
    "USER_NOT_FOUND",
    "ENTRY_ID_NOT_FOUND",
    "INVALID_ENTRY_ID",
    "FLAVOR_PARAMS_ID_NOT_FOUND",
    "FLAVOR_ASSET_ID_NOT_FOUND",
];

/// 対象が既に存在することを示すKalturaエラーコード
const ALREADY_EXISTS_CODES: &[&str] = &["DUPLICATE_USER_ID", "DUPLICATE_USER_BY_ID"];

#[derive(Error, Debug)]
pub enum ApiError {
    /// ネットワークエラー
    #[error("network error: {message}")]
    Network { message: String },

    /// タイムアウトエラー
    #[error("operation timed out: {operation}")]
    Timeout { operation: String },

    /// HTTPレベルの失敗
    #[error("HTTP error: {service}.{action} returned status {status}: {body}")]
    Http {
        service: String,
        action: String,
        status: u16,
        body: String,
    },

    /// レスポンスボディが期待した形でない
    #[error("malformed response from {service}.{action}: {context}")]
    MalformedResponse {
        service: String,
        action: String,
        context: String,
    },

    /// Kalturaサーバーが返したAPI例外
    #[error("Kaltura API error {code}: {message}")]
    Remote { code: String, message: String },

    /// ローカルで検出した対象の不在
    ///
    /// 空のリスト結果から「見つからない」を区別して返す場合に使う。
    /// 番兵値を返さないこと。
    #[error("{what} not found: {id}")]
    NotFound { what: &'static str, id: String },

    /// セッション確立の失敗（空のトークン等）
    ///
    /// 認証情報の設定ミスを示すため、not-foundとは区別して扱う。
    #[error("Kaltura session rejected: {message}")]
    SessionRejected { message: String },

    /// ページング上限の超過
    ///
    /// リモートが空ページを返さず無限ループに陥るのを防ぐ安全弁。
    #[error("listing exceeded the configured page limit ({max_pages} pages)")]
    PageLimitExceeded { max_pages: u32 },
}

impl ApiError {
    /// ネットワークエラーを作成
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// タイムアウトエラーを作成
    pub fn timeout(operation: impl Into<String>) -> Self {
        Self::Timeout {
            operation: operation.into(),
        }
    }

    /// 不正レスポンスエラーを作成
    pub fn malformed(
        service: impl Into<String>,
        action: impl Into<String>,
        context: impl Into<String>,
    ) -> Self {
        Self::MalformedResponse {
            service: service.into(),
            action: action.into(),
            context: context.into(),
        }
    }

    /// 不在エラーを作成
    pub fn not_found(what: &'static str, id: impl Into<String>) -> Self {
        Self::NotFound {
            what,
            id: id.into(),
        }
    }

    /// 対象が存在しないことを示すエラーか
    pub fn is_not_found(&self) -> bool {
        match self {
            Self::NotFound { .. } => true,
            Self::Remote { code, .. } => NOT_FOUND_CODES.contains(&code.as_str()),
            _ => false,
        }
    }

    /// 対象が既に存在することを示すリモート例外か
    pub fn is_already_exists(&self) -> bool {
        matches!(self, Self::Remote { code, .. } if ALREADY_EXISTS_CODES.contains(&code.as_str()))
    }

    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Network { .. } => ErrorSeverity::SystemError,
            Self::Timeout { .. } => ErrorSeverity::SystemError,
            Self::Http { .. } => ErrorSeverity::SystemError,
            Self::MalformedResponse { .. } => ErrorSeverity::SystemError,
            // 呼び出し側の入力に起因する例外はユーザーエラー扱い
            Self::Remote { .. } if self.is_not_found() || self.is_already_exists() => {
                ErrorSeverity::UserError
            }
            Self::Remote { .. } => ErrorSeverity::SystemError,
            Self::NotFound { .. } => ErrorSeverity::UserError,
            Self::SessionRejected { .. } => ErrorSeverity::ConfigError,
            Self::PageLimitExceeded { .. } => ErrorSeverity::SystemError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::SessionRejected { .. } => Some(
                "Verify your partner id, admin secret and user id with 'kaltool login'.",
            ),
            Self::Remote { .. } | Self::NotFound { .. } if self.is_not_found() => {
                Some("The referenced object does not exist on the Kaltura side.")
            }
            Self::PageLimitExceeded { .. } => Some(
                "The remote service kept returning non-empty pages. Raise paging.max_pages only if the library really is that large.",
            ),
            _ => None,
        }
    }
}
