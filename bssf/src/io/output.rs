use serde::{Deserialize, Serialize};
use sheetnest::io::ext_repr::ExtPackingResult;

use crate::config::BssfConfig;

/// Everything the CLI writes back: the config the run used and one result per
/// input job, in input order.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct BssfOutput {
    pub config: BssfConfig,
    pub results: Vec<ExtPackingResult>,
}
