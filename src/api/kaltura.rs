/// Kalturaクライアントファサード
///
/// 認証済みセッションを1つ保持し、ユーザー管理・動画の検索と更新・
/// フレーバー（エンコードプロファイル）管理・キャプションレポートを
/// 提供する。各操作はリモートのサービスアクションへの転送であり、
/// ローカルにキャッシュは持たない。
///
/// 更新系の操作は「実行した／理由付きで実行しなかった」を `Mutation` で
/// 区別して返す。失敗の握り潰しはしない。
use crate::api::client::ApiClient;
use crate::api::error::ApiError;
use crate::api::pager::collect_all_pages;
use crate::api::session::Session;
use crate::api::types::{
    entry_status, media_type, BaseEntryUpdate, FlavorAsset, FlavorAssetFilter, FlavorParams,
    KalturaUser, ListResponse, MediaEntry, MediaEntryFilter, MetadataFilter, MetadataProfile,
    MetadataRecord, NewMediaEntry, Pager, Params, UserFilter,
};
use crate::config::user::AuthConfig;
use crate::config::APP_CONFIG;
use crate::domain::tags::{display_name_tag, TagSet, DISPLAY_NAME_MARKER};
use crate::domain::validator::IngestRequest;
use serde::Serialize;
use serde_json::{Map, Value};
use std::fmt;

/// 更新操作の結果
///
/// リモートへの変更を実際に送ったか、送らずに済ませたかを表す。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status", content = "reason")]
pub enum Mutation {
    /// 変更を送信した
    Applied,
    /// 理由があって変更を送信しなかった
    Skipped(SkipReason),
}

/// 更新を送信しなかった理由
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// 対象が既に存在する（ユーザー追加）
    AlreadyExists,
    /// 対象が存在しない（ユーザー削除）
    Missing,
    /// 変更先の所有者が存在しない
    OwnerMissing,
    /// 指定タイムスタンプが保存値より新しくない
    NotNewer,
    /// 表示名タグが既に付与されている
    AlreadyTagged,
    /// フレーバーが既に関連付いている
    AlreadyFlavored,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::AlreadyExists => "already exists",
            Self::Missing => "does not exist",
            Self::OwnerMissing => "target owner does not exist",
            Self::NotNewer => "timestamp is not newer than the stored one",
            Self::AlreadyTagged => "display-name tag already present",
            Self::AlreadyFlavored => "flavor already associated",
        };
        write!(f, "{}", text)
    }
}

/// 削除されたフレーバーアセットの記録
#[derive(Debug, Clone, Serialize)]
pub struct RemovedFlavorAsset {
    pub entry_id: String,
    pub asset_id: String,
    pub flavor_params_id: i32,
}

/// フレーバー一括適用の結果
#[derive(Debug, Clone, Default, Serialize)]
pub struct FlavorApplyReport {
    /// 変換を要求したエントリID
    pub converted: Vec<String>,
    /// 既に関連付いていてスキップしたエントリID
    pub skipped: Vec<String>,
}

/// キャプションレポートの1行
#[derive(Debug, Clone, Serialize)]
pub struct CaptionReportRow {
    pub object_id: String,
    pub title: String,
    pub xml: String,
}

/// セッションスコープのKalturaクライアント
pub struct KalturaClient {
    api: ApiClient,
    session: Session,
}

impl KalturaClient {
    /// 認証情報から接続し、管理者セッションを確立する
    ///
    /// # Errors
    /// セッションが確立できない場合は ApiError::SessionRejected を返し、
    /// 半初期化状態のクライアントは作らない。
    pub async fn connect(auth: &AuthConfig) -> Result<Self, ApiError> {
        let api = ApiClient::from_app_config()?;
        let session = Session::start(&api, auth).await?;
        Ok(Self { api, session })
    }

    /// 確立済みセッションの情報を返す
    pub fn session(&self) -> &Session {
        &self.session
    }

    fn ks(&self) -> Option<&str> {
        Some(self.session.ks())
    }

    // ---- ユーザー操作 -------------------------------------------------

    /// ユーザーを追加する
    ///
    /// 識別子から最小限のアクティブユーザーレコードを組み立てて送信する。
    /// 既存IDとの重複は Skipped(AlreadyExists) として返す。
    pub async fn add_user(&self, user_id: &str) -> Result<Mutation, ApiError> {
        let user = KalturaUser::minimal_active(user_id);
        let mut params = Params::new();
        params.set_object("user", &user);

        match self.api.call("user", "add", self.ks(), &params).await {
            Ok(_) => Ok(Mutation::Applied),
            Err(e) if e.is_already_exists() => Ok(Mutation::Skipped(SkipReason::AlreadyExists)),
            Err(e) => Err(e),
        }
    }

    /// ユーザーを削除する
    ///
    /// 存在しない・削除済みのIDは Skipped(Missing) として返す。
    pub async fn delete_user(&self, user_id: &str) -> Result<Mutation, ApiError> {
        let mut params = Params::new();
        params.set("userId", user_id);

        match self.api.call("user", "delete", self.ks(), &params).await {
            Ok(_) => Ok(Mutation::Applied),
            Err(e) if e.is_not_found() => Ok(Mutation::Skipped(SkipReason::Missing)),
            Err(e) => Err(e),
        }
    }

    /// ユーザーを取得する
    ///
    /// 不在はエラーとして伝播する（握り潰さない）。
    pub async fn get_user(&self, user_id: &str) -> Result<KalturaUser, ApiError> {
        let mut params = Params::new();
        params.set("userId", user_id);

        let value = self.api.call("user", "get", self.ks(), &params).await?;
        ApiClient::parse(value, "user", "get")
    }

    /// アクティブユーザーをID昇順で全件取得する
    pub async fn list_active_users(&self) -> Result<Vec<KalturaUser>, ApiError> {
        let filter = UserFilter {
            status_equal: Some(crate::api::types::user_status::ACTIVE),
            order_by: Some("+id".to_string()),
        };
        let paging = &APP_CONFIG.paging;

        collect_all_pages(paging.user_page_size, paging.max_pages, |pager| {
            let filter = filter.clone();
            async move {
                let mut params = Params::new();
                params.set_object("filter", &filter).set_object("pager", &pager);
                let value = self.api.call("user", "list", self.ks(), &params).await?;
                let resp: ListResponse<KalturaUser> = ApiClient::parse(value, "user", "list")?;
                Ok(resp.objects)
            }
        })
        .await
    }

    // ---- 動画の検索 ---------------------------------------------------

    /// 1ページ分のメディアリストを取得する
    async fn media_list_page(
        &self,
        filter: &MediaEntryFilter,
        pager: Option<Pager>,
    ) -> Result<Vec<MediaEntry>, ApiError> {
        let mut params = Params::new();
        params.set_object("filter", filter);
        if let Some(pager) = pager {
            params.set_object("pager", &pager);
        }

        let value = self.api.call("media", "list", self.ks(), &params).await?;
        let resp: ListResponse<MediaEntry> = ApiClient::parse(value, "media", "list")?;
        Ok(resp.objects)
    }

    /// フィルタに一致する動画を全ページ取得する
    async fn media_list_all(
        &self,
        filter: MediaEntryFilter,
        page_size: i32,
    ) -> Result<Vec<MediaEntry>, ApiError> {
        let max_pages = APP_CONFIG.paging.max_pages;
        collect_all_pages(page_size, max_pages, |pager| {
            let filter = filter.clone();
            async move { self.media_list_page(&filter, Some(pager)).await }
        })
        .await
    }

    /// 準備完了状態の動画を全件取得する
    pub async fn list_videos(&self) -> Result<Vec<MediaEntry>, ApiError> {
        let filter = MediaEntryFilter {
            media_type_equal: Some(media_type::VIDEO),
            status_equal: Some(entry_status::READY),
            ..Default::default()
        };
        self.media_list_all(filter, APP_CONFIG.paging.video_page_size)
            .await
    }

    /// 指定時刻以降に更新されたエントリを全件取得する
    ///
    /// 意図的に種別・状態では絞らない（全件リストより広い範囲）。
    pub async fn list_videos_updated_since(&self, timestamp: i64) -> Result<Vec<MediaEntry>, ApiError> {
        let filter = MediaEntryFilter {
            updated_at_greater_than_or_equal: Some(timestamp),
            ..Default::default()
        };
        self.media_list_all(filter, APP_CONFIG.paging.video_page_size)
            .await
    }

    /// IDで動画を検索する
    ///
    /// 結果は空でありうる。呼び出し側は件数を確認すること。
    pub async fn get_video(&self, entry_id: &str) -> Result<Vec<MediaEntry>, ApiError> {
        let filter = MediaEntryFilter {
            id_equal: Some(entry_id.to_string()),
            media_type_equal: Some(media_type::VIDEO),
            ..Default::default()
        };
        self.media_list_page(&filter, None).await
    }

    /// IDで動画を1件取得する（不在はエラー）
    async fn get_video_required(&self, entry_id: &str) -> Result<MediaEntry, ApiError> {
        let mut matches = self.get_video(entry_id).await?;
        if matches.is_empty() {
            return Err(ApiError::not_found("media entry", entry_id));
        }
        Ok(matches.swap_remove(0))
    }

    /// 指定ユーザーが所有する準備完了状態の動画を全件取得する
    pub async fn list_videos_by_user(&self, user_id: &str) -> Result<Vec<MediaEntry>, ApiError> {
        let filter = MediaEntryFilter {
            media_type_equal: Some(media_type::VIDEO),
            status_equal: Some(entry_status::READY),
            user_id_equal: Some(user_id.to_string()),
            ..Default::default()
        };
        self.media_list_all(filter, APP_CONFIG.paging.user_videos_page_size)
            .await
    }

    /// 動画の所有者IDを取得する
    ///
    /// 不在は ApiError::NotFound として返す（番兵値は返さない）。
    pub async fn video_owner_id(&self, entry_id: &str) -> Result<String, ApiError> {
        let entry = self.get_video_required(entry_id).await?;
        entry.user_id.ok_or_else(|| {
            ApiError::malformed("media", "list", format!("entry {} has no owner", entry.id))
        })
    }

    // ---- 動画の更新 ---------------------------------------------------

    /// ベースエントリの部分更新を送信する
    async fn base_entry_update(
        &self,
        entry_id: &str,
        update: &BaseEntryUpdate,
    ) -> Result<(), ApiError> {
        let mut params = Params::new();
        params.set("entryId", entry_id).set_object("baseEntry", update);
        self.api
            .call("baseEntry", "update", self.ks(), &params)
            .await?;
        Ok(())
    }

    /// 動画の所有者を変更する
    ///
    /// 変更先ユーザーの存在を先に検証し、存在しない場合は何も送信せず
    /// Skipped(OwnerMissing) を返す。
    pub async fn set_video_owner(
        &self,
        entry_id: &str,
        new_owner: &str,
    ) -> Result<Mutation, ApiError> {
        match self.get_user(new_owner).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => return Ok(Mutation::Skipped(SkipReason::OwnerMissing)),
            Err(e) => return Err(e),
        }

        let update = BaseEntryUpdate {
            user_id: Some(new_owner.to_string()),
            ..Default::default()
        };
        self.base_entry_update(entry_id, &update).await?;
        tracing::info!(entry_id, new_owner, "ownership transferred");
        Ok(Mutation::Applied)
    }

    /// 動画の更新日時を進める
    ///
    /// 指定タイムスタンプが保存値より厳密に新しい場合のみ更新を送信する。
    /// 同値・過去は Skipped(NotNewer)。
    pub async fn touch_video_updated_at(
        &self,
        entry_id: &str,
        timestamp: i64,
    ) -> Result<Mutation, ApiError> {
        let entry = self.get_video_required(entry_id).await?;

        if !should_touch(entry.updated_at, timestamp) {
            return Ok(Mutation::Skipped(SkipReason::NotNewer));
        }

        let update = BaseEntryUpdate {
            updated_at: Some(timestamp),
            ..Default::default()
        };
        self.base_entry_update(entry_id, &update).await?;
        Ok(Mutation::Applied)
    }

    /// 所有者の表示名タグを動画に付与する
    ///
    /// `displayname_<owner>` 形式のタグを追加する。マーカーが既に
    /// 含まれている場合は何も送信しない（冪等）。
    pub async fn tag_video_with_display_name(
        &self,
        entry_id: &str,
    ) -> Result<Mutation, ApiError> {
        let entry = self.get_video_required(entry_id).await?;

        let mut tags = TagSet::parse(entry.tags.as_deref().unwrap_or(""));
        if tags.any_contains(DISPLAY_NAME_MARKER) {
            return Ok(Mutation::Skipped(SkipReason::AlreadyTagged));
        }

        let owner = entry.user_id.as_deref().ok_or_else(|| {
            ApiError::malformed("media", "list", format!("entry {} has no owner", entry.id))
        })?;
        tags.push(&display_name_tag(owner));

        let update = BaseEntryUpdate {
            tags: Some(tags.join()),
            ..Default::default()
        };
        self.base_entry_update(entry_id, &update).await?;
        Ok(Mutation::Applied)
    }

    /// 動画を削除する
    ///
    /// 失敗はそのまま伝播する。
    pub async fn delete_video(&self, entry_id: &str) -> Result<(), ApiError> {
        let mut params = Params::new();
        params.set("entryId", entry_id);
        self.api.call("media", "delete", self.ks(), &params).await?;
        tracing::info!(entry_id, "media entry deleted");
        Ok(())
    }

    // ---- 取り込み -----------------------------------------------------

    /// URLから動画を取り込む
    ///
    /// 所有者が存在しない場合は先に作成する。取り込み失敗はログに
    /// 記録した上でエラーとして伝播する。成功時は新しいエントリIDを返す。
    pub async fn add_video(&self, request: &IngestRequest) -> Result<String, ApiError> {
        match self.get_user(&request.owner_id).await {
            Ok(_) => {}
            Err(e) if e.is_not_found() => {
                tracing::info!(owner = %request.owner_id, "owner missing, creating before ingest");
                self.add_user(&request.owner_id).await?;
            }
            Err(e) => return Err(e),
        }

        let entry = NewMediaEntry {
            name: request.name.clone(),
            description: none_if_empty(&request.description),
            tags: none_if_empty(&request.tags),
            categories: none_if_empty(&request.categories),
            user_id: request.owner_id.clone(),
            media_type: media_type::VIDEO,
        };

        let mut params = Params::new();
        params
            .set_object("mediaEntry", &entry)
            .set("url", &request.source_url);

        let value = match self.api.call("media", "addFromUrl", self.ks(), &params).await {
            Ok(value) => value,
            Err(e) => {
                tracing::error!(name = %request.name, error = %e, "video ingest failed");
                return Err(e);
            }
        };

        match value.get("id").and_then(Value::as_str) {
            Some(id) => Ok(id.to_string()),
            None => {
                tracing::error!(name = %request.name, "video ingest returned no entry id");
                Err(ApiError::malformed(
                    "media",
                    "addFromUrl",
                    "response carries no entry id",
                ))
            }
        }
    }

    // ---- フレーバー管理 -----------------------------------------------

    /// エントリに属するフレーバーアセットを列挙する
    pub async fn list_flavor_assets(&self, entry_id: &str) -> Result<Vec<FlavorAsset>, ApiError> {
        let filter = FlavorAssetFilter {
            entry_id_equal: Some(entry_id.to_string()),
        };
        let mut params = Params::new();
        params.set_object("filter", &filter);

        let value = self.api.call("flavorAsset", "list", self.ks(), &params).await?;
        let resp: ListResponse<FlavorAsset> = ApiClient::parse(value, "flavorAsset", "list")?;
        Ok(resp.objects)
    }

    /// 指定フレーバーIDに紐づくアセットを動画群から削除する
    ///
    /// `videos` が省略された場合は全動画を対象にする。逐次実行。
    /// 削除したアセットの一覧を返す。
    pub async fn remove_flavors_by_ids(
        &self,
        flavor_ids: &[i32],
        videos: Option<&[MediaEntry]>,
    ) -> Result<Vec<RemovedFlavorAsset>, ApiError> {
        let all;
        let videos = match videos {
            Some(videos) => videos,
            None => {
                all = self.list_videos().await?;
                &all
            }
        };

        let mut removed = Vec::new();
        for video in videos {
            let assets = self.list_flavor_assets(&video.id).await?;
            for asset in assets_matching(&assets, flavor_ids) {
                let mut params = Params::new();
                params.set("id", &asset.id);
                self.api
                    .call("flavorAsset", "delete", self.ks(), &params)
                    .await?;
                removed.push(RemovedFlavorAsset {
                    entry_id: video.id.clone(),
                    asset_id: asset.id.clone(),
                    flavor_params_id: asset.flavor_params_id,
                });
            }
        }

        tracing::info!(count = removed.len(), "flavor assets removed");
        Ok(removed)
    }

    /// フレーバーパラメータを生のJSONマップとして取得する
    ///
    /// 複製時にフィールド集合を保ったまま送り返すために使う。
    async fn get_flavor_params_raw(&self, flavor_id: i32) -> Result<Map<String, Value>, ApiError> {
        let mut params = Params::new();
        params.set("id", flavor_id);

        let value = self.api.call("flavorParams", "get", self.ks(), &params).await?;
        match value {
            Value::Object(map) => Ok(map),
            _ => Err(ApiError::malformed(
                "flavorParams",
                "get",
                "expected an object payload",
            )),
        }
    }

    /// 既存フレーバーを元に新しいフレーバーを作成する
    ///
    /// 元レコードのidと作成日時を落とし、テンプレートに存在する
    /// フィールドだけ上書きを適用してから登録する。
    pub async fn clone_flavor_with_changes(
        &self,
        source_flavor_id: i32,
        changes: &[(String, Value)],
    ) -> Result<FlavorParams, ApiError> {
        let mut template = self.get_flavor_params_raw(source_flavor_id).await?;
        apply_flavor_overrides(&mut template, changes);

        let mut params = Params::new();
        params.set_value_object("flavorParams", &template);

        let value = self.api.call("flavorParams", "add", self.ks(), &params).await?;
        ApiClient::parse(value, "flavorParams", "add")
    }

    /// 動画にフレーバーを適用する
    ///
    /// 既に関連付いている場合は変換を要求しない。
    pub async fn apply_flavor_to_video(
        &self,
        flavor_id: i32,
        video: &MediaEntry,
    ) -> Result<Mutation, ApiError> {
        if video.flavor_param_ids().contains(&flavor_id) {
            return Ok(Mutation::Skipped(SkipReason::AlreadyFlavored));
        }

        let mut params = Params::new();
        params.set("entryId", &video.id).set("flavorParamsId", flavor_id);
        self.api
            .call("flavorAsset", "convert", self.ks(), &params)
            .await?;
        Ok(Mutation::Applied)
    }

    /// 複数の動画にフレーバーを適用する
    ///
    /// `videos` が省略された場合は全動画を対象にする。
    pub async fn apply_flavor_to_videos(
        &self,
        flavor_id: i32,
        videos: Option<&[MediaEntry]>,
    ) -> Result<FlavorApplyReport, ApiError> {
        let all;
        let videos = match videos {
            Some(videos) => videos,
            None => {
                all = self.list_videos().await?;
                &all
            }
        };

        let mut report = FlavorApplyReport::default();
        for video in videos {
            match self.apply_flavor_to_video(flavor_id, video).await? {
                Mutation::Applied => report.converted.push(video.id.clone()),
                Mutation::Skipped(_) => report.skipped.push(video.id.clone()),
            }
        }
        Ok(report)
    }

    // ---- レポート -----------------------------------------------------

    /// キャプション付き動画のレポートを作成する
    ///
    /// 最初のキャプション用メタデータプロファイル配下の全レコードから、
    /// キャプションXMLを持つものを動画タイトルと共に列挙する。読み取り専用。
    pub async fn report_captioned_videos(&self) -> Result<Vec<CaptionReportRow>, ApiError> {
        let value = self
            .api
            .call("metadataProfile", "list", self.ks(), &Params::new())
            .await?;
        let profiles: ListResponse<MetadataProfile> =
            ApiClient::parse(value, "metadataProfile", "list")?;

        let profile = profiles
            .objects
            .first()
            .ok_or_else(|| ApiError::not_found("metadata profile", "captioning"))?;

        let filter = MetadataFilter {
            metadata_profile_id_equal: Some(profile.id),
        };
        let paging = &APP_CONFIG.paging;
        let records = collect_all_pages(paging.video_page_size, paging.max_pages, |pager| {
            let filter = filter.clone();
            async move {
                let mut params = Params::new();
                params.set_object("filter", &filter).set_object("pager", &pager);
                let value = self.api.call("metadata", "list", self.ks(), &params).await?;
                let resp: ListResponse<MetadataRecord> =
                    ApiClient::parse(value, "metadata", "list")?;
                Ok(resp.objects)
            }
        })
        .await?;

        let mut rows = Vec::new();
        for record in records {
            let Some(xml) = record.xml.filter(|xml| !xml.trim().is_empty()) else {
                continue;
            };

            let title = self
                .get_video(&record.object_id)
                .await?
                .first()
                .and_then(|entry| entry.name.clone())
                .unwrap_or_default();

            rows.push(CaptionReportRow {
                object_id: record.object_id,
                title,
                xml,
            });
        }

        Ok(rows)
    }
}

/// 更新日時を進めるべきかを判定する
///
/// 指定タイムスタンプが保存値より厳密に大きい場合のみ真。
/// 保存値が無いエントリは常に更新対象とする。
fn should_touch(current: Option<i64>, timestamp: i64) -> bool {
    current.unwrap_or(0) < timestamp
}

/// フレーバーテンプレートへ上書きを適用する
///
/// サーバー採番のフィールド（id・作成/更新日時）を落とし、
/// テンプレートに存在して値が設定されているキーだけ上書きする。
/// 未知のキーは黙って飛ばす。
fn apply_flavor_overrides(template: &mut Map<String, Value>, changes: &[(String, Value)]) {
    template.remove("id");
    template.remove("createdAt");
    template.remove("updatedAt");

    for (key, value) in changes {
        let known = template.get(key).is_some_and(|current| !current.is_null());
        if known {
            template.insert(key.clone(), value.clone());
        }
    }
}

/// 削除対象のフレーバーアセットを選び出す
fn assets_matching<'a>(assets: &'a [FlavorAsset], flavor_ids: &[i32]) -> Vec<&'a FlavorAsset> {
    assets
        .iter()
        .filter(|asset| flavor_ids.contains(&asset.flavor_params_id))
        .collect()
}

fn none_if_empty(value: &str) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_should_touch_only_when_strictly_newer() {
        assert!(should_touch(Some(100), 101));
        assert!(!should_touch(Some(100), 100));
        assert!(!should_touch(Some(100), 99));
        // 保存値が無ければ更新する
        assert!(should_touch(None, 1));
    }

    #[test]
    fn test_apply_flavor_overrides_clears_server_fields_and_keeps_rest() {
        let mut template = match json!({
            "objectType": "KalturaFlavorParams",
            "id": 42,
            "createdAt": 1690000000,
            "bitrate": 3000,
            "width": 1280
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        apply_flavor_overrides(
            &mut template,
            &[("bitrate".to_string(), Value::from(5000))],
        );

        assert!(!template.contains_key("id"));
        assert!(!template.contains_key("createdAt"));
        assert_eq!(template.get("bitrate"), Some(&Value::from(5000)));
        assert_eq!(template.get("width"), Some(&Value::from(1280)));
        assert_eq!(
            template.get("objectType"),
            Some(&Value::from("KalturaFlavorParams"))
        );
    }

    #[test]
    fn test_apply_flavor_overrides_skips_unknown_and_null_keys() {
        let mut template = match json!({
            "bitrate": 3000,
            "height": null
        }) {
            Value::Object(map) => map,
            _ => unreachable!(),
        };

        apply_flavor_overrides(
            &mut template,
            &[
                ("frameRate".to_string(), Value::from(60)),
                ("height".to_string(), Value::from(720)),
            ],
        );

        // テンプレートに無いキーは追加されない
        assert!(!template.contains_key("frameRate"));
        // 値が未設定(null)のキーも上書きしない
        assert_eq!(template.get("height"), Some(&Value::Null));
        assert_eq!(template.get("bitrate"), Some(&Value::from(3000)));
    }

    #[test]
    fn test_assets_matching_selects_only_listed_flavor_ids() {
        let assets = vec![
            asset("1_a", 7),
            asset("1_b", 9),
            asset("1_c", 8),
        ];

        let selected = assets_matching(&assets, &[7, 8]);
        let ids: Vec<&str> = selected.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["1_a", "1_c"]);
    }

    #[test]
    fn test_mutation_serializes_with_reason() {
        let applied = serde_json::to_value(Mutation::Applied).unwrap();
        assert_eq!(applied, json!({"status": "applied"}));

        let skipped = serde_json::to_value(Mutation::Skipped(SkipReason::NotNewer)).unwrap();
        assert_eq!(skipped, json!({"status": "skipped", "reason": "not_newer"}));
    }

    fn asset(id: &str, flavor_params_id: i32) -> FlavorAsset {
        FlavorAsset {
            id: id.to_string(),
            entry_id: Some("0_entry".to_string()),
            flavor_params_id,
            status: None,
            size: None,
            created_at: None,
        }
    }
}
