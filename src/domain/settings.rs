use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Per-guild configuration. Channel ids are opaque strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuildSettings {
    /// Channel where scheduled/promotional announcements are posted
    #[serde(default, rename = "announcementChannelId")]
    pub announcement_channel_id: Option<String>,
}

/// The persisted settings map: guild id -> settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BotSettings {
    #[serde(default, rename = "guildSettings")]
    pub guild_settings: BTreeMap<String, GuildSettings>,
}

impl BotSettings {
    pub fn guild(&self, guild_id: &str) -> Option<&GuildSettings> {
        self.guild_settings.get(guild_id)
    }

    pub fn set_announcement_channel(&mut self, guild_id: &str, channel_id: &str) {
        self.guild_settings
            .entry(guild_id.to_string())
            .or_default()
            .announcement_channel_id = Some(channel_id.to_string());
    }
}
