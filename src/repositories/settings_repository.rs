// src/repositories/settings_repository.rs
//
// Guild settings persistence. The command layer reads this store for
// per-guild announcement channels; nothing else in the core depends on it.

use std::path::PathBuf;

use crate::domain::settings::{BotSettings, GuildSettings};
use crate::error::AppResult;
use crate::repositories::json_collection::JsonCollection;

pub trait SettingsRepository: Send + Sync {
    fn load(&self) -> AppResult<BotSettings>;
    fn save(&self, settings: &BotSettings) -> AppResult<()>;
    fn guild_settings(&self, guild_id: &str) -> AppResult<Option<GuildSettings>>;
    fn set_announcement_channel(&self, guild_id: &str, channel_id: &str) -> AppResult<()>;
}

pub struct JsonSettingsRepository {
    collection: JsonCollection,
}

impl JsonSettingsRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            collection: JsonCollection::new(path),
        }
    }
}

impl SettingsRepository for JsonSettingsRepository {
    fn load(&self) -> AppResult<BotSettings> {
        Ok(self.collection.load())
    }

    fn save(&self, settings: &BotSettings) -> AppResult<()> {
        self.collection.save(settings)
    }

    fn guild_settings(&self, guild_id: &str) -> AppResult<Option<GuildSettings>> {
        let settings = self.load()?;
        Ok(settings.guild(guild_id).cloned())
    }

    fn set_announcement_channel(&self, guild_id: &str, channel_id: &str) -> AppResult<()> {
        let mut settings = self.load()?;
        settings.set_announcement_channel(guild_id, channel_id);
        self.save(&settings)
    }
}
