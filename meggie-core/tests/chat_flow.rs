//! End-to-end chat behaviour: orchestrator, HTTP generator client and the
//! in-process generator working together.

use std::sync::Arc;

use meggie_core::generator::FALLBACK_TEXT;
use meggie_core::llm::FakeProvider;
use meggie_core::remote::MockGenerator;
use meggie_core::{
    detect, format_recipe, replies, resolve_local, GenerationRequest, HttpGenerator, Meggie,
    RecipeGenerator, RecipeKey, ReplySource,
};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn http_meggie(server: &MockServer) -> Meggie {
    let generator = HttpGenerator::builder(format!("{}/generate-recipe", server.uri()))
        .build()
        .unwrap();
    Meggie::new(Arc::new(generator))
}

#[tokio::test]
async fn server_fallback_reaches_the_user() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Gemini API error: 403",
            "fallback": "Make some dal chawal tonight!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = http_meggie(&server).await.respond("dal and onion please").await;
    assert_eq!(reply, "Make some dal chawal tonight!");
}

#[tokio::test]
async fn quick_rice_and_eggs_is_sent_with_time_limit() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .and(body_json(serde_json::json!({
            "ingredients": ["rice", "egg"],
            "time": "15"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(serde_json::json!({"recipe": "**Egg Fried Rice**\nReady in 15!"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let reply = http_meggie(&server)
        .await
        .respond("I have rice and eggs, quick please")
        .await;
    assert_eq!(reply, "**Egg Fried Rice**\nReady in 15!");
}

#[tokio::test]
async fn unreachable_generator_uses_local_recipe() {
    let generator = HttpGenerator::builder("http://127.0.0.1:9/generate-recipe")
        .timeout(std::time::Duration::from_secs(2))
        .build()
        .unwrap();
    let meggie = Meggie::new(Arc::new(generator));

    let reply = meggie.respond("I have rice and eggs").await;
    assert_eq!(reply, format_recipe(RecipeKey::EggRice.recipe()));
}

#[tokio::test]
async fn breakfast_without_ingredients_skips_generator() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"recipe": "nope"})))
        .expect(0)
        .mount(&server)
        .await;

    let reply = http_meggie(&server).await.respond("Breakfast ideas?").await;
    assert_eq!(reply, replies::BREAKFAST);
}

#[tokio::test]
async fn empty_message_gets_onboarding() {
    let meggie = Meggie::new(Arc::new(MockGenerator::unavailable()));
    let reply = meggie.reply("").await;
    assert_eq!(reply.source, ReplySource::Onboarding);
    assert_eq!(reply.text, replies::DEFAULT);
}

#[tokio::test]
async fn in_process_generator_without_provider_surfaces_fallback() {
    let meggie = Meggie::new(Arc::new(RecipeGenerator::new(None, None)));
    let reply = meggie.reply("what can I cook with dal").await;

    assert_eq!(reply.source, ReplySource::GeneratorFallback);
    assert_eq!(reply.text, FALLBACK_TEXT);
}

#[tokio::test]
async fn unconfigured_generator_still_serves_local_recipe() {
    let meggie = Meggie::new(Arc::new(RecipeGenerator::new(None, None)));
    let reply = meggie.reply("I have rice and eggs").await;

    assert_eq!(reply.source, ReplySource::LocalRecipe);
    assert_eq!(reply.text, format_recipe(RecipeKey::EggRice.recipe()));
}

#[tokio::test]
async fn server_fallback_yields_to_local_recipe() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/generate-recipe"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "error": "Gemini API error: 503",
            "fallback": "Make some dal chawal tonight!"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let reply = http_meggie(&server).await.respond("I have rice and eggs").await;
    assert_eq!(reply, format_recipe(RecipeKey::EggRice.recipe()));
}

#[tokio::test]
async fn in_process_generator_localizes_provider_text() {
    let provider = Arc::new(FakeProvider::with_response(
        "onion, potato",
        "**Jeera Potato**\nAdd cumin seeds and turmeric to the potatoes.",
    ));
    let meggie = Meggie::new(Arc::new(RecipeGenerator::new(Some(provider), None)));

    let reply = meggie.respond("aloo and pyaz, make something").await;
    assert_eq!(
        reply,
        "**Jeera aloo**\nAdd jeera and haldi to the potatoes."
    );
}

#[test]
fn local_resolution_follows_rule_order() {
    assert_eq!(
        resolve_local(&detect("rice, tomato and egg")),
        Some(RecipeKey::RiceTomato)
    );
    assert_eq!(resolve_local(&detect("maggi and egg")), Some(RecipeKey::MaggiUpgrade));
    assert_eq!(resolve_local(&detect("just bread")), None);
}

#[test]
fn request_serializes_without_empty_constraints() {
    let request = GenerationRequest::new(vec!["dal".to_string()]);
    assert_eq!(
        serde_json::to_string(&request).unwrap(),
        r#"{"ingredients":["dal"]}"#
    );
}
