/// フレーバー複製コマンド
///
/// 既存のフレーバー（エンコードプロファイル）を元に、指定された
/// フィールドだけ変更した新しいフレーバーを作成します。
/// 変更は `key=value` 形式で渡します（例: videoBitrate=5000）。
use crate::commands;
use crate::commands::result::{CommandResult, FlavorCloneResult};
use crate::domain::validator::parse_flavor_id;
use anyhow::{Context, Result, bail};
use serde_json::Value;

/// フレーバー複製コマンドを実行
///
/// # 引数
/// * `source_id_arg` - 複製元のフレーバーID
/// * `change_args` - `key=value` 形式の上書き指定
pub async fn execute(source_id_arg: &str, change_args: &[String]) -> Result<CommandResult> {
    let source_flavor_id = parse_flavor_id(source_id_arg)?;

    let mut changes = Vec::with_capacity(change_args.len());
    for arg in change_args {
        changes.push(parse_change(arg)?);
    }

    let client = commands::connect().await?;

    let flavor = client
        .clone_flavor_with_changes(source_flavor_id, &changes)
        .await
        .with_context(|| format!("Failed to clone flavor {}", source_flavor_id))?;

    Ok(CommandResult::FlavorClone(FlavorCloneResult {
        source_flavor_id,
        flavor,
    }))
}

/// `key=value` 形式の上書き指定をパースする
///
/// 値は数値・真偽値として解釈できればその型で、
/// それ以外は文字列として送信します。
fn parse_change(arg: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = arg.split_once('=') else {
        bail!("Invalid change '{}'. Expected key=value, e.g. videoBitrate=5000.", arg);
    };

    let key = key.trim();
    if key.is_empty() {
        bail!("Invalid change '{}'. The key is empty.", arg);
    }

    let raw = raw.trim();
    let value = if let Ok(n) = raw.parse::<i64>() {
        Value::from(n)
    } else if let Ok(b) = raw.parse::<bool>() {
        Value::from(b)
    } else {
        Value::from(raw)
    };

    Ok((key.to_string(), value))
}
