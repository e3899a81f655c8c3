//! Role permission bit set.

use bitflags::bitflags;

bitflags! {
    /// Permissions granted by a role, as sent in its `permissions` field.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Permissions: u64 {
        /// Create invites.
        const CREATE_INSTANT_INVITE = 1 << 0;
        /// Kick members.
        const KICK_MEMBERS = 1 << 1;
        /// Ban members.
        const BAN_MEMBERS = 1 << 2;
        /// Every permission, bypassing channel overwrites.
        const ADMINISTRATOR = 1 << 3;
        /// Edit and delete channels.
        const MANAGE_CHANNELS = 1 << 4;
        /// Edit guild settings.
        const MANAGE_GUILD = 1 << 5;
        /// Add new reactions to messages.
        const ADD_REACTIONS = 1 << 6;
        /// Read the audit log.
        const VIEW_AUDIT_LOG = 1 << 7;
        /// Speak over others in voice.
        const PRIORITY_SPEAKER = 1 << 8;
        /// Go live in voice.
        const STREAM = 1 << 9;
        /// See the channel.
        const VIEW_CHANNEL = 1 << 10;
        /// Send messages.
        const SEND_MESSAGES = 1 << 11;
        /// Send text-to-speech messages.
        const SEND_TTS_MESSAGES = 1 << 12;
        /// Delete and pin others' messages.
        const MANAGE_MESSAGES = 1 << 13;
        /// Links get embeds.
        const EMBED_LINKS = 1 << 14;
        /// Upload files.
        const ATTACH_FILES = 1 << 15;
        /// Read past messages.
        const READ_MESSAGE_HISTORY = 1 << 16;
        /// Mention `@everyone`.
        const MENTION_EVERYONE = 1 << 17;
        /// Use emoji from other guilds.
        const USE_EXTERNAL_EMOJIS = 1 << 18;
        /// Join voice channels.
        const CONNECT = 1 << 20;
        /// Speak in voice channels.
        const SPEAK = 1 << 21;
        /// Mute others in voice.
        const MUTE_MEMBERS = 1 << 22;
        /// Deafen others in voice.
        const DEAFEN_MEMBERS = 1 << 23;
        /// Move others between voice channels.
        const MOVE_MEMBERS = 1 << 24;
        /// Use voice activity detection.
        const USE_VAD = 1 << 25;
        /// Change own nickname.
        const CHANGE_NICKNAME = 1 << 26;
        /// Change others' nicknames.
        const MANAGE_NICKNAMES = 1 << 27;
        /// Edit roles below the highest held.
        const MANAGE_ROLES = 1 << 28;
        /// Edit webhooks.
        const MANAGE_WEBHOOKS = 1 << 29;
        /// Edit guild emoji.
        const MANAGE_EMOJIS = 1 << 30;
    }
}

impl Permissions {
    /// Whether `permission` is granted, counting `ADMINISTRATOR` as granting
    /// everything.
    pub fn allows(self, permission: Permissions) -> bool {
        self.contains(Permissions::ADMINISTRATOR) || self.contains(permission)
    }
}
