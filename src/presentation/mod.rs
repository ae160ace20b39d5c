/// プレゼンテーション層
///
/// コマンド結果とエラーの表示を担当する。
pub mod output;
