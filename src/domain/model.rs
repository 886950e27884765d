use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A parsed schema document. Its shape is never inspected here.
pub type Fragment = serde_json::Value;

pub type ResponseMap = BTreeMap<String, Fragment>;

pub const RESPONSE_SUFFIX: &str = "_response.json";
pub const DEFAULT_OUTPUT_FILE: &str = "dao_voting_adapter_full_schema.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentRole {
    Instantiate,
    Execute,
    Query,
}

impl FragmentRole {
    pub const ALL: [FragmentRole; 3] = [
        FragmentRole::Instantiate,
        FragmentRole::Execute,
        FragmentRole::Query,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            FragmentRole::Instantiate => "instantiate_msg.json",
            FragmentRole::Execute => "execute_msg.json",
            FragmentRole::Query => "query_msg.json",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RequiredFragments {
    pub instantiate: Fragment,
    pub execute: Fragment,
    pub query: Fragment,
}

/// A response schema file and the query name it is filed under.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct ResponseFile {
    pub key: String,
    pub file_name: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ResponseEntry {
    pub key: String,
    pub fragment: Fragment,
}

/// The consolidated document. Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ComposedSchema {
    pub instantiate: Fragment,
    pub execute: Fragment,
    pub query: Fragment,
    pub migrate: serde_json::Map<String, Fragment>,
    pub sudo: serde_json::Map<String, Fragment>,
    pub responses: ResponseMap,
}
