use serde::{Deserialize, Serialize};

/// An individually addressable episode record, referenced by URL from a
/// character's appearance list. Only the name is consumed here.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Episode {
    pub name: String,
}
