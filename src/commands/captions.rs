/// キャプションレポートコマンド
///
/// キャプション用メタデータを持つ動画を一覧します。読み取り専用。
use crate::commands;
use crate::commands::result::{CaptionsResult, CommandResult};
use anyhow::{Context, Result};

/// キャプションレポートコマンドを実行
pub async fn execute() -> Result<CommandResult> {
    let client = commands::connect().await?;

    let rows = client
        .report_captioned_videos()
        .await
        .context("Failed to build the captioned-video report")?;

    Ok(CommandResult::Captions(CaptionsResult { rows }))
}
