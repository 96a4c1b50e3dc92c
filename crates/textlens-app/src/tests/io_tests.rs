use std::time::Duration;

use textlens_types::AppEvent;
use tokio::time::timeout;

use crate::io::handle_line;

#[tokio::test]
async fn test_lang_command_requires_a_separator() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);

    handle_line(":lang en", &tx).await.unwrap();
    match timeout(Duration::from_millis(200), rx.recv()).await {
        Ok(Ok(AppEvent::LanguageChanged(code))) => assert_eq!(code, "en"),
        other => panic!("expected a language intent, got {other:?}"),
    }

    // Run-on text is not the command; it is offered as a path, which does
    // not exist, so no intent forms.
    handle_line(":langen", &tx).await.unwrap();
    assert!(timeout(Duration::from_millis(200), rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_lang_command_without_code_sends_nothing() {
    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);

    handle_line(":lang", &tx).await.unwrap();
    handle_line(":lang   ", &tx).await.unwrap();

    assert!(timeout(Duration::from_millis(200), rx.recv()).await.is_err());
}

#[tokio::test]
async fn test_offered_path_line_produces_a_file_intent() {
    let name = format!("textlens-line-{}.png", std::process::id());
    let path = std::env::temp_dir().join(&name);
    tokio::fs::write(&path, b"line bytes").await.unwrap();

    let (tx, rx) = kanal::bounded_async::<AppEvent>(8);
    handle_line(&format!("'{}'", path.display()), &tx)
        .await
        .unwrap();

    match timeout(Duration::from_secs(2), rx.recv()).await {
        Ok(Ok(AppEvent::FileChosen(file))) => {
            assert_eq!(file.name, name);
            assert_eq!(file.bytes, b"line bytes");
        }
        other => panic!("expected a file intent, got {other:?}"),
    }

    tokio::fs::remove_file(&path).await.unwrap();
}
