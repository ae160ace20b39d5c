/// Kaltura API層
///
/// トランスポート（client）、セッション確立（session）、ワイヤ型
/// （types）、ページング駆動（pager）、そしてセッションスコープの
/// ファサード（kaltura）で構成される。
pub mod client;
pub mod error;
pub mod kaltura;
pub mod pager;
pub mod session;
pub mod types;

pub use kaltura::KalturaClient;
