/// セッション管理
///
/// `session.start` で管理者セッションを確立し、以後の全呼び出しに
/// 添えるセッショントークン（ks）を取得します。
/// トークンが取得できない場合は設定異常として即座に失敗します。
use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::types::{session_type, Params};
use crate::config::user::AuthConfig;
use serde_json::Value;

/// セッションの有効期間(秒)
const SESSION_EXPIRY_SECONDS: i64 = 86400;

/// 確立済みの管理者セッション
///
/// トークンはクライアントの生存期間中不変です。
#[derive(Debug, Clone)]
pub struct Session {
    ks: String,
    partner_id: i32,
    user_id: String,
}

impl Session {
    /// 管理者セッションを開始する
    ///
    /// # Errors
    /// 認証情報が拒否された場合やトークンが空だった場合に
    /// ApiError::SessionRejected を返します。
    pub async fn start(api: &ApiClient, auth: &AuthConfig) -> Result<Self, ApiError> {
        let mut params = Params::new();
        params
            .set("secret", &auth.admin_secret)
            .set("userId", &auth.user_id)
            .set("type", session_type::ADMIN)
            .set("partnerId", auth.partner_id)
            .set("expiry", SESSION_EXPIRY_SECONDS);

        let value = api.call("session", "start", None, &params).await?;

        let ks = match value {
            Value::String(ks) => ks,
            other => {
                return Err(ApiError::SessionRejected {
                    message: format!("session.start returned a non-token payload: {}", other),
                });
            }
        };

        // 半初期化状態のクライアントを作らない（Fail Fast）
        if ks.trim().is_empty() {
            return Err(ApiError::SessionRejected {
                message: "session.start returned an empty token. Verify your partner credentials."
                    .to_string(),
            });
        }

        tracing::debug!(partner_id = auth.partner_id, user_id = %auth.user_id, "session established");

        Ok(Self {
            ks,
            partner_id: auth.partner_id,
            user_id: auth.user_id.clone(),
        })
    }

    /// セッショントークンを返す
    pub fn ks(&self) -> &str {
        &self.ks
    }

    /// セッションのパートナーIDを返す
    pub fn partner_id(&self) -> i32 {
        self.partner_id
    }

    /// セッションを実行しているユーザーIDを返す
    pub fn user_id(&self) -> &str {
        &self.user_id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session(ks: &str) -> Session {
        Session {
            ks: ks.to_string(),
            partner_id: 391241,
            user_id: "admin".to_string(),
        }
    }

    #[test]
    fn test_session_accessors() {
        let s = session("dG9rZW4=_abc");
        assert_eq!(s.ks(), "dG9rZW4=_abc");
        assert_eq!(s.partner_id(), 391241);
        assert_eq!(s.user_id(), "admin");
    }
}
