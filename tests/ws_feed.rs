//! WebSocket notification feed tests.

#![allow(clippy::panic)]

mod common;

use std::time::Duration;

use futures_util::{SinkExt, StreamExt};
use serde_json::{Value, json};
use tokio_tungstenite::tungstenite::Message;

use advert_api::domain::{AdvertSubmission, ConfirmOutcome};

use common::{TOPIC, spawn_app};

type Client =
    tokio_tungstenite::WebSocketStream<tokio_tungstenite::MaybeTlsStream<tokio::net::TcpStream>>;

async fn connect(url: &str) -> Client {
    let Ok((stream, _)) = tokio_tungstenite::connect_async(url).await else {
        panic!("ws connect failed");
    };
    stream
}

async fn send_command(ws: &mut Client, command: &str, topics: &[&str]) {
    let frame = json!({
        "id": "req-1",
        "type": "command",
        "timestamp": chrono::Utc::now(),
        "payload": { "command": command, "topics": topics },
    });
    if ws.send(Message::text(frame.to_string())).await.is_err() {
        panic!("ws send failed");
    }
}

async fn next_frame(ws: &mut Client) -> Option<Value> {
    loop {
        let next = tokio::time::timeout(Duration::from_millis(500), ws.next()).await;
        match next {
            Ok(Some(Ok(Message::Text(text)))) => return serde_json::from_str(text.as_str()).ok(),
            Ok(Some(Ok(_))) => continue,
            _ => return None,
        }
    }
}

#[tokio::test]
async fn subscriber_receives_activation_event() {
    let server = spawn_app().await;
    let mut ws = connect(&server.ws_url()).await;

    send_command(&mut ws, "subscribe", &[TOPIC]).await;
    let Some(ack) = next_frame(&mut ws).await else {
        panic!("no subscribe response");
    };
    assert_eq!(ack.get("type").and_then(Value::as_str), Some("response"));

    let service = &server.state.advert_service;
    let Ok(id) = service.create(AdvertSubmission::titled("Bike")).await else {
        panic!("create failed");
    };
    tokio_test::assert_ok!(
        service
            .confirm(&id, ConfirmOutcome::activate("/files/x.png"))
            .await
    );

    let Some(event) = next_frame(&mut ws).await else {
        panic!("no event received");
    };
    assert_eq!(event.get("type").and_then(Value::as_str), Some("event"));
    assert_eq!(
        event.pointer("/payload/topic").and_then(Value::as_str),
        Some(TOPIC)
    );
    assert_eq!(
        event.pointer("/payload/message/Id").and_then(Value::as_str),
        Some(id.as_str())
    );
    assert_eq!(
        event.pointer("/payload/message/Title").and_then(Value::as_str),
        Some("Bike")
    );
}

#[tokio::test]
async fn other_topics_are_filtered_out() {
    let server = spawn_app().await;
    let mut ws = connect(&server.ws_url()).await;

    send_command(&mut ws, "subscribe", &["advert-rejected"]).await;
    let Some(_ack) = next_frame(&mut ws).await else {
        panic!("no subscribe response");
    };

    let service = &server.state.advert_service;
    let Ok(id) = service.create(AdvertSubmission::titled("Bike")).await else {
        panic!("create failed");
    };
    tokio_test::assert_ok!(service.confirm(&id, ConfirmOutcome::activate("/x.png")).await);

    assert!(next_frame(&mut ws).await.is_none());
}

#[tokio::test]
async fn unknown_command_gets_error_frame() {
    let server = spawn_app().await;
    let mut ws = connect(&server.ws_url()).await;

    send_command(&mut ws, "get_state", &[]).await;
    let Some(reply) = next_frame(&mut ws).await else {
        panic!("no reply");
    };
    assert_eq!(reply.get("type").and_then(Value::as_str), Some("error"));
    assert_eq!(
        reply.pointer("/payload/code").and_then(Value::as_u64),
        Some(404)
    );
}
