use std::sync::Arc;

use serde_json::json;
use service_clients::mock::{mock_assistant, mock_notification, mock_user, AssistantCall, UserCall};
use service_clients::wire::assistant::ImproveTextRequest;
use service_clients::wire::user::{GetUserInfoRequest, TariffRecord, UserInfoResponse};
use service_clients::{
    AiRequest, AssistantClient, Endpoint, NotificationClient, PushRequest, ServiceClient, UserClient,
    UserId,
};

fn sample_profile() -> UserInfoResponse {
    UserInfoResponse {
        user_id: 42,
        tariff: TariffRecord {
            id: 3,
            name: "Premium".to_string(),
            description: "Full access for growing teams".to_string(),
            price: 4900,
            features: vec!["ai".to_string(), "custom_templates".to_string()],
        },
        start_date: "2024-01-01".to_string(),
        end_date: Some("2024-12-31".to_string()),
        count_lawyers: 2,
        consultations_total: 10,
        consultations_used: 3,
        can_use_ai: true,
        can_create_custom_templates: true,
        unlimited_documents: false,
    }
}

fn message() -> serde_json::Map<String, serde_json::Value> {
    match json!({ "title": "Reminder", "body": "Your consultation is tomorrow" }) {
        serde_json::Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Full round trip through the assistant client: lazy dial, marshal, invoke,
/// unmarshal, close.
#[tokio::test]
async fn test_improve_text_round_trip() {
    let (backend, connector) = mock_assistant();
    backend.enqueue_reply("Fixed.");

    let client = AssistantClient::new(connector.clone());
    assert_eq!(connector.dials(), 0, "Construction must not dial");

    let reply = client
        .improve_text(AiRequest::new("Fix grammar"))
        .await
        .expect("Failed to improve text");
    assert_eq!(reply.reply, "Fixed.");

    // The backend saw exactly the wire request the client marshaled.
    assert_eq!(
        backend.calls(),
        vec![AssistantCall::ImproveText(ImproveTextRequest {
            user_prompt: "Fix grammar".to_string(),
            temperature: None,
            max_tokens: None,
        })]
    );
    assert_eq!(connector.dials(), 1);

    client.close().await;
    backend.verify();
}

/// All three assistant operations run over the same connection.
#[tokio::test]
async fn test_chat_and_custom_template_share_one_connection() {
    let (backend, connector) = mock_assistant();
    backend.enqueue_reply("Of course.");
    backend.enqueue_reply("TEMPLATE: ...");

    let client = AssistantClient::new(connector.clone());

    let chat = client
        .chat(AiRequest::new("Can you help me?"))
        .await
        .expect("Failed to chat");
    let template = client
        .custom_template(AiRequest::new("A rental agreement"))
        .await
        .expect("Failed to generate template");

    assert_eq!(chat.reply, "Of course.");
    assert_eq!(template.reply, "TEMPLATE: ...");
    assert_eq!(connector.dials(), 1, "Both calls must reuse one connection");

    let calls = backend.calls();
    assert!(matches!(calls[0], AssistantCall::Chat(_)));
    assert!(matches!(calls[1], AssistantCall::CustomTemplate(_)));
    backend.verify();
}

/// An acknowledged push collapses to `true`.
#[tokio::test]
async fn test_push_delivery_is_acknowledged() {
    let (backend, connector) = mock_notification();
    backend.enqueue_ack();

    let client = NotificationClient::new(connector);
    let request = PushRequest::new(message()).with_user_ids(vec![UserId(7), UserId(8)]);

    assert!(client.send_push_from_users(request).await);

    let calls = backend.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].user_ids, vec![7, 8]);
    backend.verify();
}

/// The profile arrives field for field, including the nested tariff.
#[tokio::test]
async fn test_full_profile_round_trip() {
    let (backend, connector) = mock_user();
    backend.enqueue_profile(sample_profile());

    let client = UserClient::new(connector);
    let info = client
        .get_user_info(UserId(42))
        .await
        .expect("Failed to get user info");

    assert_eq!(info.user_id, UserId(42));
    assert_eq!(info.tariff.id, 3);
    assert_eq!(info.tariff.name, "Premium");
    assert_eq!(info.tariff.description, "Full access for growing teams");
    assert_eq!(info.tariff.price, 4900);
    assert_eq!(info.tariff.features, vec!["ai", "custom_templates"]);
    assert_eq!(info.start_date, "2024-01-01");
    assert_eq!(info.end_date.as_deref(), Some("2024-12-31"));
    assert_eq!(info.count_lawyers, 2);
    assert_eq!(info.consultations_total, 10);
    assert_eq!(info.consultations_used, 3);
    assert!(info.can_use_ai);
    assert!(info.can_create_custom_templates);
    assert!(!info.unlimited_documents);

    assert_eq!(
        backend.calls(),
        vec![UserCall::GetUserInfo(GetUserInfoRequest { user_id: 42 })]
    );
    backend.verify();
}

/// An acknowledged write-off collapses to `true`.
#[tokio::test]
async fn test_write_off_consultation_is_acknowledged() {
    let (backend, connector) = mock_user();
    backend.enqueue_write_off_ack();

    let client = UserClient::new(connector);
    assert!(client.write_off_consultation(UserId(42)).await);
    backend.verify();
}

/// The first operation dials; later operations reuse the connection.
#[tokio::test]
async fn test_operations_dial_lazily_and_share_the_connection() {
    let (backend, connector) = mock_user();
    backend.enqueue_write_off_ack();
    backend.enqueue_profile(sample_profile());

    let client = UserClient::new(connector.clone());
    assert_eq!(connector.dials(), 0, "Construction must not dial");

    assert!(client.write_off_consultation(UserId(1)).await);
    assert_eq!(connector.dials(), 1, "First operation must dial");

    assert!(client.get_user_info(UserId(1)).await.is_some());
    assert_eq!(connector.dials(), 1, "Second operation must reuse the dial");
}

/// Connecting explicitly up front is allowed and idempotent; the following
/// operation rides the already-established connection.
#[tokio::test]
async fn test_explicit_connect_is_idempotent() {
    let (backend, connector) = mock_assistant();
    backend.enqueue_reply("Hello!");

    let client = AssistantClient::new(connector.clone());
    client.connect().await.expect("Failed to connect");
    client.connect().await.expect("Failed to connect again");
    assert_eq!(connector.dials(), 1, "Repeated connect must not redial");

    let reply = client
        .chat(AiRequest::new("Hi"))
        .await
        .expect("Failed to chat");
    assert_eq!(reply.reply, "Hello!");
    assert_eq!(connector.dials(), 1);
}

/// Concurrent first calls race to connect; only one dial happens.
#[tokio::test]
async fn test_concurrent_operations_share_one_dial() {
    let (backend, connector) = mock_assistant();
    for _ in 0..8 {
        backend.enqueue_reply("ok");
    }

    let client = Arc::new(AssistantClient::new(connector.clone()));

    let mut handles = vec![];
    for _ in 0..8 {
        let client = Arc::clone(&client);
        handles.push(tokio::spawn(async move {
            client.improve_text(AiRequest::new("text")).await
        }));
    }

    for handle in handles {
        let reply = handle.await.expect("Task panicked");
        assert!(reply.is_some(), "Every concurrent call must succeed");
    }

    assert_eq!(connector.dials(), 1, "Expected exactly one dial");
    backend.verify();
}

/// Clients default to localhost on their well-known port; an explicit
/// endpoint overrides it.
#[tokio::test]
async fn test_default_and_explicit_endpoints() {
    let (_backend, connector) = mock_notification();
    let client = NotificationClient::new(connector.clone());
    assert_eq!(
        client.endpoint().target(),
        format!("localhost:{}", NotificationClient::DEFAULT_PORT)
    );

    let client = NotificationClient::with_endpoint(Endpoint::new("push.internal", 9000), connector);
    assert_eq!(client.endpoint().target(), "push.internal:9000");
}
