/// コマンド実行結果を表す型
///
/// 各コマンドはこの型を返し、プレゼンテーション層（main.rs/cli.rs）で
/// 人間向けと機械向けの出力フォーマットを決定する。
use crate::api::kaltura::{
    CaptionReportRow, FlavorApplyReport, Mutation, RemovedFlavorAsset,
};
use crate::api::types::{FlavorParams, KalturaUser, MediaEntry};
use serde::Serialize;

/// コマンド実行結果の統一型
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum CommandResult {
    Login(LoginResult),
    Logout(LogoutResult),
    Status(StatusResult),
    UserAdd(UserMutationResult),
    UserDelete(UserMutationResult),
    UserShow(UserShowResult),
    UserList(UserListResult),
    VideoList(VideoListResult),
    VideoShow(VideoShowResult),
    VideoOwner(VideoOwnerResult),
    VideoDelete(VideoDeleteResult),
    Upload(UploadResult),
    Chown(ChownResult),
    Touch(TouchResult),
    TagDisplayName(TagDisplayNameResult),
    FlavorClone(FlavorCloneResult),
    FlavorApply(FlavorApplyResult),
    FlavorPrune(FlavorPruneResult),
    Captions(CaptionsResult),
    Help,
}

/// ログインコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LoginResult {
    /// 既にログイン済みだったか（上書き更新の場合true）
    pub was_logged_in: bool,
    /// 保存したパートナーID
    pub partner_id: i32,
}

/// ログアウトコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct LogoutResult {
    /// ログイン状態だったか
    pub was_logged_in: bool,
}

/// ステータスコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct StatusResult {
    /// 認証が通っているか
    pub is_authenticated: bool,
    /// 設定されているパートナーID（認証情報がある場合）
    pub partner_id: Option<i32>,
    /// セッションを実行するユーザーID（認証情報がある場合）
    pub user_id: Option<String>,
}

/// ユーザー追加・削除コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UserMutationResult {
    pub user_id: String,
    pub outcome: Mutation,
}

/// ユーザー表示コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UserShowResult {
    pub user: KalturaUser,
}

/// ユーザー一覧コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UserListResult {
    pub users: Vec<KalturaUser>,
    pub total_count: usize,
}

/// 動画一覧に表示する1件分の情報
#[derive(Debug, Clone, Serialize)]
pub struct VideoInfo {
    pub entry_id: String,
    pub name: Option<String>,
    pub owner_id: Option<String>,
    pub tags: Option<String>,
    pub duration_seconds: Option<i32>,
    pub created_at: Option<i64>,
    pub updated_at: Option<i64>,
    pub flavor_params_ids: Option<String>,
}

impl From<MediaEntry> for VideoInfo {
    fn from(entry: MediaEntry) -> Self {
        Self {
            entry_id: entry.id,
            name: entry.name,
            owner_id: entry.user_id,
            tags: entry.tags,
            duration_seconds: entry.duration,
            created_at: entry.created_at,
            updated_at: entry.updated_at,
            flavor_params_ids: entry.flavor_params_ids,
        }
    }
}

/// 動画一覧コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct VideoListResult {
    pub videos: Vec<VideoInfo>,
    pub total_count: usize,
}

/// 動画表示コマンドの結果
///
/// IDでの検索結果は空でありうるため、一覧と同じ形で保持する。
#[derive(Debug, Clone, Serialize)]
pub struct VideoShowResult {
    pub entry_id: String,
    pub matches: Vec<VideoInfo>,
}

/// 動画所有者表示コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct VideoOwnerResult {
    pub entry_id: String,
    pub owner_id: String,
}

/// 動画削除コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct VideoDeleteResult {
    pub entry_id: String,
}

/// アップロード（URL取り込み）コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct UploadResult {
    /// 新しく採番されたエントリID
    pub entry_id: String,
    pub name: String,
    pub owner_id: String,
    pub source_url: String,
}

/// 所有者変更コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct ChownResult {
    pub entry_id: String,
    pub new_owner: String,
    pub outcome: Mutation,
}

/// 更新日時変更コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct TouchResult {
    pub entry_id: String,
    pub timestamp: i64,
    pub outcome: Mutation,
}

/// 表示名タグ付与コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct TagDisplayNameResult {
    pub entry_id: String,
    pub outcome: Mutation,
}

/// フレーバー複製コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct FlavorCloneResult {
    pub source_flavor_id: i32,
    pub flavor: FlavorParams,
}

/// フレーバー適用コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct FlavorApplyResult {
    pub flavor_id: i32,
    pub report: FlavorApplyReport,
}

/// フレーバー削除コマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct FlavorPruneResult {
    pub flavor_ids: Vec<i32>,
    pub removed: Vec<RemovedFlavorAsset>,
}

/// キャプションレポートコマンドの結果
#[derive(Debug, Clone, Serialize)]
pub struct CaptionsResult {
    pub rows: Vec<CaptionReportRow>,
}
