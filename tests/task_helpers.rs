mod common;

use common::{catalog_json, client_with, task_url, ScriptedTransport};
use hf_inference::tasks::{SummarizationParameters, TextGenerationParameters};
use hf_inference::transport::TransportResponse;
use hf_inference::RequestOptions;
use serde_json::{json, Value};

fn sent_json(transport: &ScriptedTransport, index: usize) -> Value {
    serde_json::from_slice(&transport.requests()[index].body).unwrap()
}

#[tokio::test]
async fn test_text_generation_sends_parameters() {
    let transport = ScriptedTransport::replies(vec![(
        200,
        r#"[{"generated_text":"The answer to the universe is 42."}]"#,
    )]);
    let client = client_with(transport.clone());

    let params = TextGenerationParameters {
        max_new_tokens: Some(20),
        return_full_text: Some(true),
        ..Default::default()
    };
    let out = client
        .text_generation("The answer to the universe is", Some(params), Some("gpt2"), None)
        .await
        .unwrap();

    assert_eq!(out[0].generated_text, "The answer to the universe is 42.");
    assert_eq!(
        sent_json(&transport, 0),
        json!({
            "inputs": "The answer to the universe is",
            "parameters": {"max_new_tokens": 20, "return_full_text": true}
        })
    );
}

#[tokio::test]
async fn test_fill_mask_uses_catalog_default() {
    let catalog = catalog_json();
    let transport = ScriptedTransport::replies(vec![
        (200, catalog.as_str()),
        (
            200,
            r#"[{"sequence":"The goal of life is happiness.","score":0.4,"token":11098,"token_str":" happiness"}]"#,
        ),
    ]);
    let client = client_with(transport.clone());

    let out = client
        .fill_mask(&["The goal of life is <mask>.".to_string()], None, None)
        .await
        .unwrap();

    assert_eq!(out[0].token, 11098);
    assert_eq!(transport.requests()[1].url.as_str(), task_url("distilroberta-base"));
    // no parameters key when none were given
    assert_eq!(
        sent_json(&transport, 1),
        json!({"inputs": ["The goal of life is <mask>."]})
    );
}

#[tokio::test]
async fn test_summarization_with_options() {
    let transport = ScriptedTransport::replies(vec![(200, r#"[{"summary_text":"Short."}]"#)]);
    let client = client_with(transport.clone());

    let params = SummarizationParameters {
        max_length: Some(30),
        ..Default::default()
    };
    let options = RequestOptions::default().with_use_cache(false);
    let out = client
        .summarization(
            "A very long text.",
            Some(params),
            Some("facebook/bart-large-cnn"),
            Some(options),
        )
        .await
        .unwrap();

    assert_eq!(out[0].summary_text, "Short.");
    let requests = transport.requests();
    let sent = &requests[0];
    assert_eq!(sent.header("x-use-cache"), Some("false"));
    assert_eq!(sent.header("content-type"), Some("application/json"));
}

#[tokio::test]
async fn test_text_classification_nested_output() {
    let transport = ScriptedTransport::replies(vec![(
        200,
        r#"[[{"label":"POSITIVE","score":0.99},{"label":"NEGATIVE","score":0.01}]]"#,
    )]);
    let client = client_with(transport.clone());

    let out = client
        .text_classification(
            &["I like you. I love you".to_string()],
            Some("distilbert-base-uncased-finetuned-sst-2-english"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(out.len(), 1);
    assert_eq!(out[0][0].label, "POSITIVE");
    assert!(out[0][0].score > out[0][1].score);
}

#[tokio::test]
async fn test_text_to_speech_returns_audio_bytes() {
    let catalog = catalog_json();
    let transport = ScriptedTransport::new(vec![
        Ok(TransportResponse::new(200, catalog)),
        Ok(TransportResponse::new(200, vec![0x52u8, 0x49, 0x46, 0x46, 0x00, 0xFF])),
    ]);
    let client = client_with(transport.clone());

    let audio = client.text_to_speech("Hello world", None, None).await.unwrap();

    assert_eq!(&audio[..], &[0x52, 0x49, 0x46, 0x46, 0x00, 0xFF]);
    assert_eq!(transport.requests()[1].url.as_str(), task_url("microsoft/speecht5_tts"));
}

#[tokio::test]
async fn test_speech_recognition_sends_raw_audio() {
    let transport =
        ScriptedTransport::replies(vec![(200, r#"{"text":"going along slushy country roads"}"#)]);
    let client = client_with(transport.clone());

    let audio: &'static [u8] = b"fLaC\x00\x00\x00\x22";
    let out = client
        .automatic_speech_recognition(audio, Some("openai/whisper-large-v3"), None)
        .await
        .unwrap();

    assert_eq!(out.text, "going along slushy country roads");
    let requests = transport.requests();
    let sent = &requests[0];
    assert_eq!(&sent.body[..], audio);
    assert!(sent.header("content-type").is_none());
}

#[tokio::test]
async fn test_image_classification_retries_while_loading() {
    let transport = ScriptedTransport::replies(vec![
        (503, r#"{"error":"Model google/vit-base-patch16-224 is currently loading"}"#),
        (200, r#"[{"label":"tabby, tabby cat","score":0.93}]"#),
    ]);
    let client = client_with(transport.clone());

    let out = client
        .image_classification(
            vec![0x89u8, 0x50, 0x4E, 0x47],
            Some("google/vit-base-patch16-224"),
            None,
        )
        .await
        .unwrap();

    assert_eq!(out[0].label, "tabby, tabby cat");
    let sent = transport.requests();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent[1].header("x-wait-for-model"), Some("true"));
}
