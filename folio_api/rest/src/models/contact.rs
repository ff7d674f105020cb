use std::collections::BTreeMap;

use serde::Serialize;

/// Field key to localized message, empty when the input is valid.
#[derive(Serialize)]
pub struct ApiContactValidation {
    pub errors: BTreeMap<&'static str, &'static str>,
}
