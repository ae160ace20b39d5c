/// 動画一覧コマンド
///
/// 既定では準備完了状態の動画を全件取得します。
/// `--user` で所有者別、`--since` で指定時刻以降の更新分に絞れます
/// （--since はあえて種別・状態で絞らず、より広い範囲を返します）。
use crate::commands;
use crate::commands::result::{CommandResult, VideoInfo, VideoListResult};
use crate::domain::formatter::parse_timestamp_arg;
use anyhow::{Context, Result, bail};

/// 一覧の絞り込み条件
#[derive(Debug, Clone, Default)]
pub struct ListSelector {
    /// 所有者ユーザーIDで絞り込む
    pub owner: Option<String>,
    /// 指定時刻以降に更新されたエントリに絞り込む
    pub since: Option<String>,
}

/// 動画一覧コマンドを実行
pub async fn execute(selector: &ListSelector) -> Result<CommandResult> {
    if selector.owner.is_some() && selector.since.is_some() {
        bail!("--user and --since cannot be combined.");
    }

    let client = commands::connect().await?;

    let entries = match (&selector.owner, &selector.since) {
        (Some(owner), _) => client
            .list_videos_by_user(owner)
            .await
            .with_context(|| format!("Failed to list videos owned by '{}'", owner))?,
        (_, Some(since)) => {
            let timestamp = parse_timestamp_arg(since)?;
            client
                .list_videos_updated_since(timestamp)
                .await
                .with_context(|| format!("Failed to list entries updated since {}", timestamp))?
        }
        _ => client.list_videos().await.context("Failed to list videos")?,
    };

    let videos: Vec<VideoInfo> = entries.into_iter().map(VideoInfo::from).collect();
    let total_count = videos.len();

    Ok(CommandResult::VideoList(VideoListResult {
        videos,
        total_count,
    }))
}
