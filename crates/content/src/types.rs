use serde::Deserialize;

/// A test-suite document: the ordered list of detection tests to execute.
#[derive(Debug, Clone, Deserialize)]
pub struct TestSuite {
    pub tests: Vec<TestCase>,
}

/// One detection test: the data to replay, optional baseline preconditions,
/// and the pass condition evaluated over the detection's search output.
#[derive(Debug, Clone, Deserialize)]
pub struct TestCase {
    pub name: String,
    pub file: String,
    pub attack_data: Vec<AttackDataItem>,
    #[serde(default, alias = "baseline")]
    pub baselines: Vec<BaselineSpec>,
    pub pass_condition: String,
    pub earliest_time: String,
    pub latest_time: String,
}

/// One unit of replay data. `file_name` is either a local path or an
/// http(s) URL; `custom_index` overrides the platform's default data index.
#[derive(Debug, Clone, Deserialize)]
pub struct AttackDataItem {
    pub file_name: String,
    pub sourcetype: String,
    pub source: String,
    #[serde(default)]
    pub custom_index: Option<String>,
    #[serde(default)]
    pub update_timestamp: bool,
}

/// A prerequisite search run before the detection itself.
#[derive(Debug, Clone, Deserialize)]
pub struct BaselineSpec {
    pub name: String,
    pub file: String,
    pub search: String,
    pub pass_condition: String,
    pub earliest_time: String,
    pub latest_time: String,
}

/// The referenced detection or baseline document. Only the fields the
/// harness consumes are modeled; everything else in the document is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct DetectionDoc {
    pub name: String,
    pub search: String,
}
