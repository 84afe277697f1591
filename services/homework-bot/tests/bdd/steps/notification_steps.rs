//! BDD step definitions for the notification feature

use std::sync::Arc;

use cucumber::{given, then, when};

use homework_bot::io::{HttpClient, HttpResponse};
use homework_bot::telegram::TelegramNotifier;
use homework_bot::HomeworkBotError;

use crate::world::HomeworkBotWorld;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";

/// Mock HTTP client for the Bot API that accepts every message
struct AcceptingClient;

#[async_trait::async_trait]
impl HttpClient for AcceptingClient {
    async fn get(
        &self,
        _url: &str,
        _query: &[(&str, &str)],
        _headers: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            body: "{}".to_string(),
        })
    }

    async fn post_form(
        &self,
        _url: &str,
        _params: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            body: r#"{"ok":true,"result":{"message_id":7}}"#.to_string(),
        })
    }
}

/// Mock HTTP client that returns a Bot API error
struct ChatNotFoundClient;

#[async_trait::async_trait]
impl HttpClient for ChatNotFoundClient {
    async fn get(
        &self,
        _url: &str,
        _query: &[(&str, &str)],
        _headers: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Ok(HttpResponse {
            status: 200,
            body: "{}".to_string(),
        })
    }

    async fn post_form(
        &self,
        _url: &str,
        _params: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Ok(HttpResponse {
            status: 400,
            body: r#"{"ok":false,"error_code":400,"description":"Bad Request: chat not found"}"#
                .to_string(),
        })
    }
}

/// Mock HTTP client that simulates network failure
struct UnreachableClient;

#[async_trait::async_trait]
impl HttpClient for UnreachableClient {
    async fn get(
        &self,
        _url: &str,
        _query: &[(&str, &str)],
        _headers: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Err(HomeworkBotError::Http("connection refused".to_string()))
    }

    async fn post_form(
        &self,
        _url: &str,
        _params: &[(&str, &str)],
    ) -> homework_bot::Result<HttpResponse> {
        Err(HomeworkBotError::Http("connection refused".to_string()))
    }
}

fn notifier_with(http: Arc<dyn HttpClient>) -> TelegramNotifier {
    TelegramNotifier::new(TELEGRAM_API_URL, "123:ABC", "42", http)
}

#[given("a Telegram notifier that accepts messages")]
fn telegram_accepts(world: &mut HomeworkBotWorld) {
    world.notifier = Some(Box::new(notifier_with(Arc::new(AcceptingClient))));
}

#[given("a Telegram notifier whose chat does not exist")]
fn telegram_chat_not_found(world: &mut HomeworkBotWorld) {
    world.notifier = Some(Box::new(notifier_with(Arc::new(ChatNotFoundClient))));
}

#[given("a Telegram notifier that is unreachable")]
fn telegram_unreachable(world: &mut HomeworkBotWorld) {
    world.notifier = Some(Box::new(notifier_with(Arc::new(UnreachableClient))));
}

#[when(expr = "the message {string} is sent")]
async fn message_sent(world: &mut HomeworkBotWorld, text: String) {
    let notifier = world.notifier.as_ref().expect("notifier not set");
    world.notification_result = Some(notifier.send_message(&text).await);
}

#[then("the message should be delivered")]
fn message_delivered(world: &mut HomeworkBotWorld) {
    let result = world.notification_result.as_ref().expect("no result");
    assert!(result.is_ok(), "Expected delivery, got {:?}", result);
}

#[then("delivery should fail")]
fn delivery_fails(world: &mut HomeworkBotWorld) {
    let result = world.notification_result.as_ref().expect("no result");
    assert!(
        matches!(result, Err(HomeworkBotError::Delivery(_))),
        "Expected delivery error, got {:?}",
        result
    );
}
