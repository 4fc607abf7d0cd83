//! 設定管理を行うモジュール

use std::path::PathBuf;

use super::{
    ConfigError,
    ProviderSettings,
    loader,
};

/// 設定管理を行う
#[derive(Default, Debug, Clone)]
pub struct ConfigManager {
    /// 現在の設定
    current_settings: ProviderSettings,

    /// 設定ファイルのルートパス
    config_root: Option<PathBuf>,
}

impl ConfigManager {
    /// 新しい設定マネージャーを作成
    #[must_use]
    pub fn new() -> Self {
        Self { current_settings: ProviderSettings::default(), config_root: None }
    }

    /// 設定を読み込む
    ///
    /// # Arguments
    /// * `config_root` - 設定ファイルを探すディレクトリ
    ///
    /// # Returns
    /// - `Ok(())`: 設定の読み込みとバリデーション成功
    /// - `Err(ConfigError)`: エラー
    ///
    /// # Errors
    /// - ファイル読み込みエラー
    /// - JSON パースエラー
    /// - バリデーションエラー
    pub fn load_settings(&mut self, config_root: Option<PathBuf>) -> Result<(), ConfigError> {
        tracing::debug!("Loading settings from: {:?}", config_root);

        // 設定ファイルを読み込み
        let settings = if let Some(root) = &config_root {
            loader::load_from_root(root)?.map_or_else(ProviderSettings::default, |loaded| {
                tracing::debug!("Loaded settings: {:?}", loaded);
                loaded
            })
        } else {
            ProviderSettings::default()
        };

        // バリデーション
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を保存
        self.current_settings = settings;
        self.config_root = config_root;
        tracing::debug!("Settings loaded successfully: {:?}", self.current_settings);

        Ok(())
    }

    /// 設定を更新する
    pub fn update_settings(&mut self, new_settings: ProviderSettings) -> Result<(), ConfigError> {
        tracing::debug!("Updating settings...");

        // バリデーション
        new_settings.validate().map_err(ConfigError::ValidationErrors)?;

        // 設定を更新
        self.current_settings = new_settings;
        tracing::debug!("Settings updated successfully");

        Ok(())
    }

    /// 現在の設定を取得
    #[must_use]
    pub const fn get_settings(&self) -> &ProviderSettings {
        &self.current_settings
    }

    /// 設定ルートを取得
    #[must_use]
    pub const fn config_root(&self) -> Option<&PathBuf> {
        self.config_root.as_ref()
    }
}
