/// ドメイン層のエラー定義
///
/// ビジネスロジックに関連するエラーを構造化して定義。
/// 外部クレートのエラーは含まず、純粋にドメインの制約違反を表現する。
use crate::error_severity::ErrorSeverity;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// 指定されたユーザーが存在しない
    #[error("user not found: {user_id}")]
    UserNotFound { user_id: String },

    /// 指定されたメディアエントリが存在しない
    #[error("media entry not found: {entry_id}")]
    MediaNotFound { entry_id: String },

    /// 所有者変更先のユーザーが存在しない
    #[error("cannot transfer ownership of {entry_id}: user '{new_owner}' does not exist")]
    OwnerNotFound { entry_id: String, new_owner: String },

    /// タイムスタンプ引数が解釈できない
    #[error("invalid timestamp '{input}' (expected unix seconds or YYYY-MM-DD)")]
    InvalidTimestamp { input: String },

    /// フレーバーID引数が解釈できない
    #[error("invalid flavor id '{input}' (expected a positive integer)")]
    InvalidFlavorId { input: String },

    /// 取り込み元URLが不正
    #[error("invalid source url '{url}': {reason}")]
    InvalidSourceUrl { url: String, reason: String },

    /// エントリ名が不正
    #[error("invalid entry name: {reason}")]
    InvalidEntryName { reason: String },
}

impl DomainError {
    /// ユーザー不在エラーを生成
    pub fn user_not_found(user_id: impl Into<String>) -> Self {
        Self::UserNotFound {
            user_id: user_id.into(),
        }
    }

    /// メディア不在エラーを生成
    pub fn media_not_found(entry_id: impl Into<String>) -> Self {
        Self::MediaNotFound {
            entry_id: entry_id.into(),
        }
    }

    /// 所有者不在エラーを生成
    pub fn owner_not_found(entry_id: impl Into<String>, new_owner: impl Into<String>) -> Self {
        Self::OwnerNotFound {
            entry_id: entry_id.into(),
            new_owner: new_owner.into(),
        }
    }

    /// エラーの深刻度を返す
    ///
    /// 終了コードの決定に使用できる
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UserNotFound { .. } => ErrorSeverity::UserError,
            Self::MediaNotFound { .. } => ErrorSeverity::UserError,
            Self::OwnerNotFound { .. } => ErrorSeverity::UserError,
            Self::InvalidTimestamp { .. } => ErrorSeverity::UserError,
            Self::InvalidFlavorId { .. } => ErrorSeverity::UserError,
            Self::InvalidSourceUrl { .. } => ErrorSeverity::UserError,
            Self::InvalidEntryName { .. } => ErrorSeverity::UserError,
        }
    }

    /// ユーザー向けのヒントメッセージを返す
    pub fn hint(&self) -> Option<&str> {
        match self {
            Self::UserNotFound { .. } => {
                Some("Check the user id, or create the user with 'kaltool user-add'.")
            }
            Self::MediaNotFound { .. } => {
                Some("Check the entry id with 'kaltool videos' or 'kaltool video-show'.")
            }
            Self::OwnerNotFound { .. } => {
                Some("Create the target user first with 'kaltool user-add'.")
            }
            Self::InvalidTimestamp { .. } => {
                Some("Pass a unix timestamp in seconds, or a date like 2024-06-30.")
            }
            Self::InvalidFlavorId { .. } => Some("Flavor ids are numeric, e.g. 487041."),
            Self::InvalidSourceUrl { .. } => {
                Some("The source must be an http:// or https:// URL reachable by Kaltura.")
            }
            Self::InvalidEntryName { .. } => Some("Provide a non-empty name for the entry."),
        }
    }
}
