use crate::constants::SCENARIO_NAME;
use crate::transaction::{bigfoo_transaction, BigfooRequest};
use goose::prelude::*;
use std::sync::Arc;

/// The one simulated-user behavior: loop the bigfoo request with no wait between iterations.
pub fn bigfoo_scenario(request: Arc<BigfooRequest>) -> Scenario {
    scenario!(SCENARIO_NAME).register_transaction(bigfoo_transaction(request))
}
