mod utils;
#[allow(unused)]
use utils::*;

use bigfoo::constants::{BIGFOO_HEADERS, BIGFOO_PATH};
use bigfoo::prelude::*;
use mock_service::MockConfig;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn every_request_carries_payload_and_headers() {
    init();
    let (host, recorder) = mock(MockConfig::default()).await;

    let payload_path = shipped_payload();
    let payload = std::fs::read(&payload_path).unwrap();
    assert!(!payload.is_empty());

    let stats = BigfooAttack::new(AttackConfig::new().payload_path(&payload_path))
        .with_configuration(goose_configuration(&host, 2, 2))
        .run()
        .await
        .unwrap();

    let requests = recorder.requests();
    assert!(!requests.is_empty());
    assert!(stats.success_count > 0);
    assert_eq!(stats.fail_count, 0);
    // Nothing is sent outside of goose's accounting.
    assert!(requests.len() >= stats.success_count);

    for request in &requests {
        assert_eq!(request.method.as_str(), "POST");
        assert_eq!(request.path, BIGFOO_PATH);
        for (name, value) in BIGFOO_HEADERS {
            let received = request.headers.get(name).map(|v| v.to_str().unwrap());
            assert_eq!(received, Some(value), "header {name}");
        }
        assert_eq!(&request.body[..], &payload[..]);
    }
}
