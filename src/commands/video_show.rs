/// 動画表示コマンド
///
/// IDでの検索結果は空でありうるため、件数を含めてそのまま報告します。
use crate::commands;
use crate::commands::result::{CommandResult, VideoInfo, VideoShowResult};
use anyhow::{Context, Result};

/// 動画表示コマンドを実行
///
/// # 引数
/// * `entry_id` - 表示するエントリID
pub async fn execute(entry_id: &str) -> Result<CommandResult> {
    let client = commands::connect().await?;

    let matches = client
        .get_video(entry_id)
        .await
        .with_context(|| format!("Failed to look up entry '{}'", entry_id))?;

    Ok(CommandResult::VideoShow(VideoShowResult {
        entry_id: entry_id.to_string(),
        matches: matches.into_iter().map(VideoInfo::from).collect(),
    }))
}
