mod utils;
#[allow(unused)]
use utils::*;

use bigfoo::prelude::*;
use mock_service::MockConfig;

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn missing_payload_sends_nothing() {
    init();
    let (host, recorder) = mock(MockConfig::default()).await;

    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("request16K.json");

    let res = BigfooAttack::new(AttackConfig::new().payload_path(&missing))
        .with_configuration(goose_configuration(&host, 2, 1))
        .run()
        .await;

    match res {
        Err(BigfooError::Payload { path, .. }) => assert_eq!(path, missing),
        Err(other) => panic!("Unexpected error: {other}"),
        Ok(stats) => panic!("Load test ran without a payload: {stats}"),
    }

    tokio::time::sleep(std::time::Duration::from_millis(200)).await;
    assert!(recorder.is_empty());
}
