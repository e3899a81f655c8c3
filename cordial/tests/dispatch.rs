//! Dispatching through the default registry.

use cordial::{
    DispatchOptions, EventPart, HydrateError, PartError, RawEvent, events::GUILD_ROLE_CREATE,
};
use serde_json::json;
use std::sync::Arc;

mod common;
use common::{dispatcher_with_guild, guild_role_names, role_create};

#[tokio::test]
async fn test_role_create_resolves_and_caches() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());

    let event = RawEvent::new(
        GUILD_ROLE_CREATE,
        json!({"guild_id": "5", "role": {"id": "10", "name": "mod"}}),
    );
    let part = dispatcher.dispatch(&event).unwrap().await.unwrap();

    let role = part.as_role().unwrap();
    assert_eq!(role.id(), Some("10"));
    assert_eq!(role.name(), Some("mod"));
    assert_eq!(role.guild_id(), Some("5"));

    let cached = dispatcher.state().guild("5").unwrap().roles.get_key("10").unwrap();
    assert!(Arc::ptr_eq(cached, role));
}

#[tokio::test]
async fn test_role_create_for_uncached_guild_leaves_cache_alone() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());
    let before = guild_role_names(dispatcher.state(), "5");

    let part = dispatcher
        .dispatch(&role_create("999", "10", "mod"))
        .unwrap()
        .await
        .unwrap();

    assert_eq!(part.as_role().unwrap().guild_id(), Some("999"));
    assert_eq!(guild_role_names(dispatcher.state(), "5"), before);
    assert!(dispatcher.state().guild("999").is_none());
}

#[tokio::test]
async fn test_malformed_payload_rejects() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());

    let event = RawEvent::new(GUILD_ROLE_CREATE, json!({"guild_id": "5", "role": {"name": "no id"}}));
    let err = dispatcher.dispatch(&event).unwrap().await.unwrap_err();

    assert!(matches!(
        err,
        PartError::Hydrate(HydrateError::MissingField { kind: "role", field: "id" })
    ));
}

#[test]
fn test_unknown_event_has_no_effect() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());
    let roles_before = guild_role_names(dispatcher.state(), "5");

    let event = RawEvent::new("GUILD_INTEGRATIONS_UPDATE", json!({"guild_id": "5"}));

    assert!(dispatcher.dispatch(&event).is_none());
    assert_eq!(guild_role_names(dispatcher.state(), "5"), roles_before);
}

#[test]
fn test_disabled_event_is_skipped() {
    let options = DispatchOptions::new().with_disabled_event(GUILD_ROLE_CREATE);
    let mut dispatcher = dispatcher_with_guild("5", options);

    assert!(dispatcher.dispatch(&role_create("5", "10", "mod")).is_none());
    assert!(dispatcher.state().guild("5").unwrap().roles.get_key("10").is_none());
}

#[tokio::test]
async fn test_message_alternate_routes_to_create() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::new().with_store_messages(true));

    let event = RawEvent::new(
        cordial::MESSAGE_ALTERNATE,
        cordial::testing::message_payload("100", "51", Some("5")),
    );
    let part = dispatcher.dispatch(&event).unwrap().await.unwrap();

    assert!(matches!(part, EventPart::Message(_)));
    let channel = dispatcher.state().guild("5").unwrap().channels.get_key("51").unwrap();
    assert!(channel.messages.contains("100"));
}

#[tokio::test]
async fn test_envelope_metadata_supplies_context() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());

    let event = RawEvent::new(GUILD_ROLE_CREATE, json!({"role": {"id": "11", "name": "meta"}}))
        .with_metadata("guild_id", "5");
    let part = dispatcher.dispatch(&event).unwrap().await.unwrap();

    assert_eq!(part.as_role().unwrap().guild_id(), Some("5"));
    assert!(dispatcher.state().guild("5").unwrap().roles.contains("11"));
}

#[tokio::test]
async fn test_envelope_metadata_reaches_channels_and_messages() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::new().with_store_messages(true));

    let channel = RawEvent::new("CHANNEL_CREATE", json!({"id": "60", "type": 0, "name": "news"}))
        .with_metadata("guild_id", "5");
    let part = dispatcher.dispatch(&channel).unwrap().await.unwrap();
    assert_eq!(part.as_channel().unwrap().guild_id(), Some("5"));

    let message = RawEvent::new(
        "MESSAGE_CREATE",
        cordial::testing::message_payload("100", "60", None),
    )
    .with_metadata("guild_id", "5");
    let part = dispatcher.dispatch(&message).unwrap().await.unwrap();
    assert_eq!(part.as_message().unwrap().guild_id(), Some("5"));

    let guild = dispatcher.state().guild("5").unwrap();
    let cached = guild.channels.get_key("60").unwrap();
    assert_eq!(cached.guild_id(), Some("5"));
    assert_eq!(cached.messages.get_key("100").unwrap().guild_id(), Some("5"));
}

#[tokio::test]
async fn test_runtime_override_replaces_standard_handler() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());

    dispatcher.registry_mut().register(
        GUILD_ROLE_CREATE,
        |deferred: cordial::Deferred<EventPart>, _event: &RawEvent, _cache: &mut cordial::Cache| {
            deferred.reject(PartError::Custom("role creation is muted".into()));
        },
    );

    let err = dispatcher
        .dispatch(&role_create("5", "10", "mod"))
        .unwrap()
        .await
        .unwrap_err();

    assert_eq!(err.to_string(), "role creation is muted");
    assert_eq!(dispatcher.registry().len(), 27);
}

#[tokio::test]
async fn test_registering_extra_events() {
    let mut dispatcher = dispatcher_with_guild("5", DispatchOptions::default());
    let recorder = cordial::testing::RecordingHandler::new(EventPart::Messages(Vec::new()));
    dispatcher
        .registry_mut()
        .register_with_alternates("GUILD_EMOJIS_UPDATE", recorder.clone(), ["emojis"]);

    for name in ["GUILD_EMOJIS_UPDATE", "emojis", "GUILD_INTEGRATIONS_UPDATE"] {
        if let Some(promise) = dispatcher.dispatch(&RawEvent::new(name, json!({"guild_id": "5"}))) {
            assert!(promise.await.unwrap().as_messages().unwrap().is_empty());
        }
    }

    assert_eq!(recorder.names(), vec!["GUILD_EMOJIS_UPDATE", "emojis"]);
    assert_eq!(recorder.count(), 2);
    assert_eq!(recorder.events()[0].data, json!({"guild_id": "5"}));
}
