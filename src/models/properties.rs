use std::collections::BTreeMap;

/// Generic string-keyed property bag forming the wire payload for a rule or
/// action. Key order is irrelevant to the remote API; a `BTreeMap` keeps the
/// serialized form deterministic.
pub type Properties = BTreeMap<String, String>;
