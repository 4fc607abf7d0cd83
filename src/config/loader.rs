//! 設定ファイルの読み込み関数

use std::path::Path;

use super::{
    ConfigError,
    ProviderSettings,
};

/// 設定ルートから設定を読み込む
///
/// `.i18n-provider.json` ファイルを探して読み込む
///
/// # Arguments
/// * `config_root` - 設定ファイルを探すディレクトリ
///
/// # Returns
/// - `Ok(Some(settings))`: 設定ファイルが見つかり、読み込みに成功
/// - `Ok(None)`: 設定ファイルが見つからない
/// - `Err(ConfigError)`: ファイル読み込みまたはパースエラー
///
/// # Errors
/// - ファイル読み込みエラー
/// - JSON パースエラー
pub(super) fn load_from_root(config_root: &Path) -> Result<Option<ProviderSettings>, ConfigError> {
    let config_path = config_root.join(".i18n-provider.json");

    if !config_path.exists() {
        tracing::debug!("Configuration file not found: {:?}", config_path);
        return Ok(None);
    }

    tracing::debug!("Loading configuration from: {:?}", config_path);

    let content = std::fs::read_to_string(&config_path)?;
    let settings: ProviderSettings = serde_json::from_str(&content)?;

    Ok(Some(settings))
}
