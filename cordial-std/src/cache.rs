//! The in-memory state handlers write into.

use crate::{
    collection::Collection,
    options::DispatchOptions,
    parts::{Channel, Guild},
};
use cordial_core::Part;
use std::sync::Arc;

/// Cached aggregates of one gateway session.
///
/// Owned by a single [`Dispatcher`](crate::Dispatcher), so every mutation goes
/// through one `&mut` path.
#[derive(Debug, Clone, Default)]
pub struct Cache {
    /// Guilds and everything they own.
    pub guilds: Collection<Guild>,
    /// Direct and group message channels.
    pub private_channels: Collection<Channel>,
    /// Whether message events are written into channel caches.
    pub store_messages: bool,
}

impl Cache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty cache honouring the cache-related options.
    pub fn with_options(options: &DispatchOptions) -> Self {
        Self {
            store_messages: options.store_messages,
            ..Self::default()
        }
    }

    /// Look up a cached guild.
    pub fn guild(&self, id: &str) -> Option<&Guild> {
        self.guilds.get_key(id).map(|guild| &**guild)
    }

    /// Mutable access to a cached guild.
    pub fn guild_mut(&mut self, id: &str) -> Option<&mut Guild> {
        self.guilds.get_mut(id)
    }

    /// Look up a cached channel, searching the way [`Cache::channel_mut`]
    /// does.
    pub fn channel(&self, guild_id: Option<&str>, channel_id: &str) -> Option<&Arc<Channel>> {
        if let Some(guild_id) = guild_id {
            return self.guild(guild_id)?.channels.get_key(channel_id);
        }
        self.private_channels.get_key(channel_id).or_else(|| {
            self.guilds
                .iter()
                .find_map(|guild| guild.channels.get_key(channel_id))
        })
    }

    /// Mutable access to a cached channel.
    ///
    /// With a `guild_id` only that guild is searched; without one the private
    /// channels are searched first, then every guild.
    pub fn channel_mut(&mut self, guild_id: Option<&str>, channel_id: &str) -> Option<&mut Channel> {
        if let Some(guild_id) = guild_id {
            return self.guilds.get_mut(guild_id)?.channels.get_mut(channel_id);
        }
        if self.private_channels.contains(channel_id) {
            return self.private_channels.get_mut(channel_id);
        }
        let owner = self
            .guilds
            .iter()
            .find(|guild| guild.channels.contains(channel_id))
            .and_then(|guild| guild.key())?;
        self.guilds.get_mut(&owner)?.channels.get_mut(channel_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cache_with(guild: serde_json::Value, channel: serde_json::Value) -> Cache {
        let mut guild = Guild::hydrate(&guild).unwrap();
        guild.channels.push(Channel::hydrate(&channel).unwrap()).unwrap();
        let mut cache = Cache::new();
        cache.guilds.push(guild).unwrap();
        cache
    }

    #[test]
    fn test_channel_mut_searches_guilds_without_guild_id() {
        let mut cache = cache_with(json!({"id": "5"}), json!({"id": "7", "guild_id": "5"}));

        assert!(cache.channel_mut(None, "7").is_some());
        assert!(cache.channel_mut(Some("6"), "7").is_none());
        assert!(cache.channel_mut(None, "8").is_none());
        assert_eq!(cache.channel(None, "7").unwrap().guild_id(), Some("5"));
        assert!(cache.channel(Some("6"), "7").is_none());
    }

    #[test]
    fn test_channel_mut_finds_guild_with_numeric_id() {
        let mut cache = cache_with(json!({"id": 5}), json!({"id": 7, "guild_id": 5}));

        assert!(cache.channel_mut(None, "7").is_some());
        assert!(cache.channel_mut(Some("5"), "7").is_some());
    }

    #[test]
    fn test_private_channels_searched_first() {
        let mut cache = Cache::new();
        cache
            .private_channels
            .push(Channel::hydrate(&json!({"id": "9", "type": 1})).unwrap())
            .unwrap();

        let channel = cache.channel_mut(None, "9").unwrap();
        assert!(channel.is_private());
    }
}
