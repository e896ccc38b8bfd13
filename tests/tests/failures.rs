mod utils;
#[allow(unused)]
use utils::*;

use bigfoo::prelude::*;
use mock_service::MockConfig;
use std::io::Write;
use std::num::NonZeroU32;

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn server_errors_are_counted_not_retried() {
    init();
    let (host, recorder) =
        mock(MockConfig::default().max_tps(NonZeroU32::new(5).unwrap())).await;

    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(br#"{"name": "Anomandaris"}"#).unwrap();

    let stats = BigfooAttack::new(AttackConfig::new().payload_path(file.path()))
        .with_configuration(goose_configuration(&host, 2, 2))
        .run()
        .await
        .unwrap();

    assert!(stats.fail_count > 0);
    assert!(stats.error_rate() > 0.);

    // Each counted attempt hit the server once; at most one in-flight request per user is
    // dropped at shutdown.
    let requests = recorder.requests();
    assert!(requests.len() >= stats.requests());
    assert!(requests.len() <= stats.requests() + 2);
    assert!(requests
        .iter()
        .all(|r| &r.body[..] == br#"{"name": "Anomandaris"}"#));
}
