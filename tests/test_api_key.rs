mod common;

use common::{setup, StubSource};
use marketpulse::domain::error::DomainError;
use marketpulse::infrastructure::offline::OfflineSource;
use marketpulse::MarketPulse;
use std::sync::Arc;

#[test]
fn test_save_show_clear() {
    let mp = setup(Arc::new(OfflineSource));
    assert_eq!(mp.api_key().unwrap(), None);

    mp.save_api_key("  abc123  ").unwrap();
    assert_eq!(mp.api_key().unwrap().as_deref(), Some("abc123"));

    mp.clear_api_key().unwrap();
    assert_eq!(mp.api_key().unwrap(), None);
}

#[test]
fn test_blank_key_rejected() {
    let mp = setup(Arc::new(OfflineSource));
    let err = mp.save_api_key("   ").unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert_eq!(mp.api_key().unwrap(), None);
}

#[tokio::test]
async fn test_valid_key_is_kept() {
    let source = Arc::new(StubSource::new("good").with_quote("AAPL", 182.52, 2.34));
    let mp = setup(source.clone());

    mp.validate_api_key("good").await.unwrap();
    assert_eq!(mp.api_key().unwrap().as_deref(), Some("good"));
    assert_eq!(source.calls(), 1);
}

#[tokio::test]
async fn test_invalid_key_is_cleared() {
    let source = Arc::new(StubSource::new("good").with_quote("AAPL", 182.52, 2.34));
    let mp = setup(source);

    let err = mp.validate_api_key("bad").await.unwrap_err();
    assert!(matches!(err, DomainError::InvalidInput(_)));
    assert!(err.to_string().contains("Invalid API key"));
    assert_eq!(mp.api_key().unwrap(), None);
}

#[tokio::test]
async fn test_key_persists_across_instances() {
    let dir = tempfile::tempdir().unwrap();
    let db = dir.path().join("marketpulse.db");
    let db = db.to_str().unwrap();

    let first = MarketPulse::with_source(db, Arc::new(OfflineSource)).unwrap();
    first.save_api_key("persisted").unwrap();
    drop(first);

    let source = Arc::new(StubSource::new("persisted").with_quote("MSFT", 400.0, 1.0));
    let second = MarketPulse::with_source(db, source.clone()).unwrap();
    assert_eq!(second.api_key().unwrap().as_deref(), Some("persisted"));

    let q = second.quote_sourced("MSFT").await.unwrap();
    assert!(q.is_live());
    assert_eq!(source.seen_keys.lock().unwrap().as_slice(), ["persisted"]);
}
