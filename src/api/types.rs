/// Kaltura API v3 のワイヤ型定義
///
/// レスポンスのデシリアライズ用構造体と、リクエストパラメータの
/// 平坦化（`filter:mediaTypeEqual=1` 形式）を定義します。
/// Kalturaの列挙値は数値で送受信されるため、定数として保持します。
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// メディア種別 (KalturaMediaType)
pub mod media_type {
    pub const VIDEO: i32 = 1;
}

/// エントリ状態 (KalturaEntryStatus)
pub mod entry_status {
    pub const READY: i32 = 2;
}

/// ユーザー状態 (KalturaUserStatus)
pub mod user_status {
    pub const ACTIVE: i32 = 1;
}

/// セッション種別 (KalturaSessionType)
pub mod session_type {
    pub const ADMIN: i32 = 2;
}

/// リクエストパラメータとして送信可能なAPIオブジェクト
///
/// Kalturaはネストしたオブジェクトを `prefix:field=value` 形式の
/// フォームパラメータで受け取り、`prefix:objectType` で型を判別する。
pub trait ApiObject: Serialize {
    const OBJECT_TYPE: &'static str;
}

/// `service/action` 呼び出しに添えるフォームパラメータの集合
///
/// 挿入順を保持します。
#[derive(Debug, Default, Clone)]
pub struct Params {
    pairs: Vec<(String, String)>,
}

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    /// スカラーパラメータを追加する
    pub fn set(&mut self, name: &str, value: impl ToString) -> &mut Self {
        self.pairs.push((name.to_string(), value.to_string()));
        self
    }

    /// APIオブジェクトを `prefix:field` 形式に平坦化して追加する
    ///
    /// `prefix:objectType` も合わせて送信します。Noneのフィールドは
    /// シリアライズ時点で落ちるため送信されません。
    pub fn set_object<T: ApiObject>(&mut self, prefix: &str, obj: &T) -> &mut Self {
        let value =
            serde_json::to_value(obj).expect("api objects serialize to plain JSON objects");
        self.set(&format!("{}:objectType", prefix), T::OBJECT_TYPE);
        if let Value::Object(map) = value {
            self.set_map(prefix, &map);
        }
        self
    }

    /// 生のJSONマップを `prefix:field` 形式に平坦化して追加する
    ///
    /// フレーバー複製のように、取得したレコードをほぼそのまま
    /// 送り返す操作で使用します。null・配列・ネストは送信しません。
    pub fn set_value_object(&mut self, prefix: &str, map: &Map<String, Value>) -> &mut Self {
        self.set_map(prefix, map);
        self
    }

    fn set_map(&mut self, prefix: &str, map: &Map<String, Value>) {
        for (key, value) in map {
            let name = format!("{}:{}", prefix, key);
            match value {
                Value::String(s) => {
                    self.pairs.push((name, s.clone()));
                }
                Value::Number(n) => {
                    self.pairs.push((name, n.to_string()));
                }
                Value::Bool(b) => {
                    self.pairs.push((name, b.to_string()));
                }
                // null/配列/ネストオブジェクトは部分更新の対象外
                _ => {}
            }
        }
    }

    /// フォームエンコード用のペア列を返す
    pub fn pairs(&self) -> &[(String, String)] {
        &self.pairs
    }
}

/// Kalturaユーザー (KalturaUser)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KalturaUser {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub screen_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

impl KalturaUser {
    /// 識別子だけからアクティブユーザーのレコードを組み立てる
    ///
    /// 画面名・フルネーム・名は識別子で埋めます。
    pub fn minimal_active(user_id: &str) -> Self {
        Self {
            id: user_id.to_string(),
            screen_name: Some(user_id.to_string()),
            full_name: Some(user_id.to_string()),
            first_name: Some(user_id.to_string()),
            status: Some(user_status::ACTIVE),
            created_at: None,
        }
    }
}

impl ApiObject for KalturaUser {
    const OBJECT_TYPE: &'static str = "KalturaUser";
}

/// メディアエントリ (KalturaMediaEntry)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntry {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media_type: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    /// 関連フレーバーIDのカンマ区切りリスト（ワイヤ形式）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub flavor_params_ids: Option<String>,
}

impl MediaEntry {
    /// flavorParamsIds をパースして数値IDの一覧を返す
    ///
    /// 所属判定はこの結果に対して行うこと。ワイヤ上の文字列に対する
    /// 部分一致判定は桁違いのIDを誤検出する。
    pub fn flavor_param_ids(&self) -> Vec<i32> {
        self.flavor_params_ids
            .as_deref()
            .unwrap_or("")
            .split(',')
            .filter_map(|token| token.trim().parse::<i32>().ok())
            .collect()
    }
}

/// 部分更新用のベースエントリ (KalturaBaseEntry)
///
/// セットしたフィールドだけが更新される。他のフィールドを
/// 巻き込まないよう、更新操作ごとに必要なものだけ埋めること。
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BaseEntryUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
}

impl ApiObject for BaseEntryUpdate {
    const OBJECT_TYPE: &'static str = "KalturaBaseEntry";
}

/// 新規メディアエントリ (KalturaMediaEntry)
///
/// URL取り込みの送信専用。id等のサーバー採番フィールドを持たない。
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NewMediaEntry {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<String>,
    pub user_id: String,
    pub media_type: i32,
}

impl ApiObject for NewMediaEntry {
    const OBJECT_TYPE: &'static str = "KalturaMediaEntry";
}

/// フレーバーパラメータ (KalturaFlavorParams)
///
/// 表示に使う代表的なフィールドのみ型付けする。複製時はワイヤの
/// 生マップを扱うため、このビューは読み取り専用。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorParams {
    pub id: i32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub format: Option<String>,
    #[serde(default)]
    pub width: Option<i32>,
    #[serde(default)]
    pub height: Option<i32>,
    #[serde(default)]
    pub video_bitrate: Option<i32>,
}

/// フレーバーアセット (KalturaFlavorAsset)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorAsset {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_id: Option<String>,
    pub flavor_params_id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<i64>,
}

/// メタデータプロファイル (KalturaMetadataProfile)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataProfile {
    pub id: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub system_name: Option<String>,
}

/// メタデータレコード (KalturaMetadata)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub id: i32,
    pub object_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata_profile_id: Option<i32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub xml: Option<String>,
}

/// リスト系アクションの共通レスポンス
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListResponse<T> {
    #[serde(default = "Vec::new")]
    pub objects: Vec<T>,
    #[serde(default)]
    pub total_count: i64,
}

/// メディアエントリのフィルタ (KalturaMediaEntryFilter)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MediaEntryFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id_equal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type_equal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id_equal: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_greater_than_or_equal: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ApiObject for MediaEntryFilter {
    const OBJECT_TYPE: &'static str = "KalturaMediaEntryFilter";
}

/// ユーザーのフィルタ (KalturaUserFilter)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_equal: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_by: Option<String>,
}

impl ApiObject for UserFilter {
    const OBJECT_TYPE: &'static str = "KalturaUserFilter";
}

/// フレーバーアセットのフィルタ (KalturaFlavorAssetFilter)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlavorAssetFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entry_id_equal: Option<String>,
}

impl ApiObject for FlavorAssetFilter {
    const OBJECT_TYPE: &'static str = "KalturaFlavorAssetFilter";
}

/// メタデータのフィルタ (KalturaMetadataFilter)
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata_profile_id_equal: Option<i32>,
}

impl ApiObject for MetadataFilter {
    const OBJECT_TYPE: &'static str = "KalturaMetadataFilter";
}

/// ページカーソル (KalturaFilterPager)
///
/// pageIndexは1始まり。
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pager {
    pub page_size: i32,
    pub page_index: i32,
}

impl ApiObject for Pager {
    const OBJECT_TYPE: &'static str = "KalturaFilterPager";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_params_flatten_filter_with_object_type() {
        let filter = MediaEntryFilter {
            media_type_equal: Some(media_type::VIDEO),
            status_equal: Some(entry_status::READY),
            ..Default::default()
        };

        let mut params = Params::new();
        params.set_object("filter", &filter);

        let pairs = params.pairs();
        assert!(pairs.contains(&(
            "filter:objectType".to_string(),
            "KalturaMediaEntryFilter".to_string()
        )));
        assert!(pairs.contains(&("filter:mediaTypeEqual".to_string(), "1".to_string())));
        assert!(pairs.contains(&("filter:statusEqual".to_string(), "2".to_string())));
        // Noneのフィールドは送信されない
        assert!(!pairs.iter().any(|(k, _)| k == "filter:idEqual"));
    }

    #[test]
    fn test_params_flatten_pager() {
        let pager = Pager {
            page_size: 500,
            page_index: 3,
        };

        let mut params = Params::new();
        params.set_object("pager", &pager);

        let pairs = params.pairs();
        assert!(pairs.contains(&("pager:pageSize".to_string(), "500".to_string())));
        assert!(pairs.contains(&("pager:pageIndex".to_string(), "3".to_string())));
    }

    #[test]
    fn test_params_value_object_skips_null_and_nested() {
        let mut map = Map::new();
        map.insert("name".to_string(), Value::String("HD copy".to_string()));
        map.insert("bitrate".to_string(), Value::from(5000));
        map.insert("id".to_string(), Value::Null);
        map.insert("tags".to_string(), Value::Array(vec![]));

        let mut params = Params::new();
        params.set_value_object("flavorParams", &map);

        let pairs = params.pairs();
        assert!(pairs.contains(&("flavorParams:name".to_string(), "HD copy".to_string())));
        assert!(pairs.contains(&("flavorParams:bitrate".to_string(), "5000".to_string())));
        assert!(!pairs.iter().any(|(k, _)| k == "flavorParams:id"));
        assert!(!pairs.iter().any(|(k, _)| k == "flavorParams:tags"));
    }

    #[test]
    fn test_minimal_active_user_fills_names_from_id() {
        let user = KalturaUser::minimal_active("huddlesh");
        assert_eq!(user.id, "huddlesh");
        assert_eq!(user.screen_name.as_deref(), Some("huddlesh"));
        assert_eq!(user.full_name.as_deref(), Some("huddlesh"));
        assert_eq!(user.first_name.as_deref(), Some("huddlesh"));
        assert_eq!(user.status, Some(user_status::ACTIVE));
    }

    #[test]
    fn test_media_entry_deserializes_from_wire_names() {
        let json = r#"{
            "id": "0_abc123",
            "name": "Final performance part 2",
            "userId": "huddlesh",
            "mediaType": 1,
            "status": 2,
            "createdAt": 1609459200,
            "updatedAt": 1609545600,
            "flavorParamsIds": "0,487041,487051"
        }"#;

        let entry: MediaEntry = serde_json::from_str(json).expect("Failed to parse");
        assert_eq!(entry.id, "0_abc123");
        assert_eq!(entry.user_id.as_deref(), Some("huddlesh"));
        assert_eq!(entry.updated_at, Some(1609545600));
        assert_eq!(entry.flavor_param_ids(), vec![0, 487041, 487051]);
    }

    #[test]
    fn test_flavor_param_ids_handles_blank_and_spaces() {
        let entry = MediaEntry {
            flavor_params_ids: Some(" 7 , 9,, x".to_string()),
            ..minimal_entry("0_a")
        };
        assert_eq!(entry.flavor_param_ids(), vec![7, 9]);

        let empty = minimal_entry("0_b");
        assert!(empty.flavor_param_ids().is_empty());
    }

    #[test]
    fn test_list_response_defaults_when_fields_missing() {
        let parsed: ListResponse<MediaEntry> =
            serde_json::from_str(r#"{"objectType":"KalturaMediaListResponse"}"#)
                .expect("Failed to parse");
        assert!(parsed.objects.is_empty());
        assert_eq!(parsed.total_count, 0);
    }

    pub(super) fn minimal_entry(id: &str) -> MediaEntry {
        MediaEntry {
            id: id.to_string(),
            name: None,
            description: None,
            tags: None,
            categories: None,
            user_id: None,
            media_type: None,
            status: None,
            duration: None,
            created_at: None,
            updated_at: None,
            flavor_params_ids: None,
        }
    }
}
