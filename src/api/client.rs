/// HTTPクライアント
///
/// Kaltura API v3との通信を担当するHTTPクライアント。
/// 呼び出しは `api_v3/service/{service}/action/{action}` へのPOSTで、
/// パラメータはフォームエンコード、レスポンスはJSON (format=1)。
/// エラーはHTTP 200で KalturaAPIException として返ることがあるため、
/// エンベロープの判定までをこの層で行います。
use crate::api::error::ApiError;
use crate::api::types::Params;
use crate::config::APP_CONFIG;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// JSONレスポンス形式 (KALTURA_SERVICE_FORMAT_JSON)
const RESPONSE_FORMAT_JSON: i32 = 1;

/// APIクライアントの結果型
type ApiResult<T> = Result<T, ApiError>;

/// APIクライアント
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    /// 新しいAPIクライアントを作成
    ///
    /// # Arguments
    /// * `base_url` - APIのベースURL（例: "https://www.kaltura.com"）
    pub fn new(base_url: String) -> ApiResult<Self> {
        let timeout = Duration::from_secs(APP_CONFIG.api.timeout_seconds);

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ApiError::network(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { client, base_url })
    }

    /// デフォルトエンドポイントのクライアントを作成
    pub fn from_app_config() -> ApiResult<Self> {
        Self::new(APP_CONFIG.api.endpoint.to_string())
    }

    /// `service.action` を呼び出し、デコード済みのJSON値を返す
    ///
    /// # Arguments
    /// * `service` - サービス名（例: "media"）
    /// * `action` - アクション名（例: "list"）
    /// * `ks` - セッショントークン（session.start自体はNone）
    /// * `params` - 呼び出しパラメータ
    pub async fn call(
        &self,
        service: &str,
        action: &str,
        ks: Option<&str>,
        params: &Params,
    ) -> ApiResult<Value> {
        let url = self.build_url(service, action);

        let mut form: Vec<(String, String)> =
            vec![("format".to_string(), RESPONSE_FORMAT_JSON.to_string())];
        if let Some(ks) = ks {
            form.push(("ks".to_string(), ks.to_string()));
        }
        form.extend_from_slice(params.pairs());

        let response = self
            .client
            .post(&url)
            .form(&form)
            .send()
            .await
            .map_err(|e| Self::translate_send_error(e, service, action))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ApiError::network(format!(
                "Failed to read response body for {}.{}: {}",
                service, action, e
            ))
        })?;

        if !status.is_success() {
            return Err(ApiError::Http {
                service: service.to_string(),
                action: action.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = serde_json::from_str(&body).map_err(|e| {
            ApiError::malformed(service, action, format!("invalid JSON: {}", e))
        })?;

        Self::reject_api_exception(value, service, action)
    }

    /// URLを構築
    fn build_url(&self, service: &str, action: &str) -> String {
        format!(
            "{}/api_v3/service/{}/action/{}",
            self.base_url, service, action
        )
    }

    /// 送信エラーをApiErrorへ変換
    fn translate_send_error(e: reqwest::Error, service: &str, action: &str) -> ApiError {
        if e.is_timeout() {
            ApiError::timeout(format!("{}.{}", service, action))
        } else if e.is_connect() {
            ApiError::network(format!(
                "Connection failed for {}.{}: {}",
                service, action, e
            ))
        } else {
            ApiError::network(format!("Request failed for {}.{}: {}", service, action, e))
        }
    }

    /// KalturaAPIExceptionエンベロープを検出してエラーへ変換する
    ///
    /// Kalturaは多くのエラーをHTTP 200のペイロードとして返す。
    fn reject_api_exception(value: Value, service: &str, action: &str) -> ApiResult<Value> {
        let is_exception = value
            .get("objectType")
            .and_then(Value::as_str)
            .is_some_and(|t| t == "KalturaAPIException");

        if !is_exception {
            return Ok(value);
        }

        let code = value
            .get("code")
            .and_then(Value::as_str)
            .unwrap_or("UNKNOWN")
            .to_string();
        let message = value
            .get("message")
            .and_then(Value::as_str)
            .map(str::to_string)
            .unwrap_or_else(|| format!("{}.{} failed without a message", service, action));

        Err(ApiError::Remote { code, message })
    }

    /// JSON値を型付きレスポンスへデシリアライズ
    pub fn parse<T: serde::de::DeserializeOwned>(
        value: Value,
        service: &str,
        action: &str,
    ) -> ApiResult<T> {
        serde_json::from_value(value).map_err(|e| {
            ApiError::malformed(service, action, format!("unexpected response shape: {}", e))
        })
    }
}
