/// ヘルプコマンド
use crate::commands::result::CommandResult;

/// ヘルプコマンドを実行
///
/// 実際の表示はプレゼンテーション層が行う。
pub fn execute() -> CommandResult {
    CommandResult::Help
}
