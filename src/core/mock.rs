use crate::domain::model::ResponseFile;
use crate::domain::ports::{ConfigProvider, Reporter, Storage};
use crate::utils::error::{Result, SchemaError};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
pub struct MockStorage {
    files: Arc<Mutex<BTreeMap<String, Vec<u8>>>>,
}

impl MockStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(self, name: &str, contents: &str) -> Self {
        self.files
            .lock()
            .unwrap()
            .insert(name.to_string(), contents.as_bytes().to_vec());
        self
    }

    /// Storage holding the three mandatory fragments.
    pub fn with_required() -> Self {
        Self::new()
            .with_file("instantiate_msg.json", r#"{"title":"InstantiateMsg"}"#)
            .with_file("execute_msg.json", r#"{"title":"ExecuteMsg"}"#)
            .with_file("query_msg.json", r#"{"title":"QueryMsg"}"#)
    }

    pub fn remove(&self, name: &str) {
        self.files.lock().unwrap().remove(name);
    }

    pub fn get_file(&self, name: &str) -> Option<Vec<u8>> {
        self.files.lock().unwrap().get(name).cloned()
    }
}

impl Storage for MockStorage {
    fn list_files(&self) -> Result<Vec<String>> {
        Ok(self.files.lock().unwrap().keys().cloned().collect())
    }

    fn read_file(&self, name: &str) -> Result<Vec<u8>> {
        let files = self.files.lock().unwrap();
        files.get(name).cloned().ok_or_else(|| {
            SchemaError::IoError(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                format!("File not found: {}", name),
            ))
        })
    }

    fn write_file(&self, name: &str, data: &[u8]) -> Result<()> {
        let mut files = self.files.lock().unwrap();
        files.insert(name.to_string(), data.to_vec());
        Ok(())
    }

    fn location(&self, name: &str) -> String {
        format!("mock://{}", name)
    }
}

#[derive(Clone, Default)]
pub struct RecordingReporter {
    pub events: Arc<Mutex<Vec<String>>>,
}

impl RecordingReporter {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl Reporter for RecordingReporter {
    fn started(&self) {
        self.events.lock().unwrap().push("started".to_string());
    }

    fn responses_discovered(&self, files: &[ResponseFile]) {
        let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
        self.events
            .lock()
            .unwrap()
            .push(format!("discovered:{}", names.join(",")));
    }

    fn completed(&self, output: &str) {
        self.events
            .lock()
            .unwrap()
            .push(format!("completed:{}", output));
    }
}

pub struct MockConfig {
    output_file: String,
    manifest: Option<BTreeMap<String, String>>,
}

impl MockConfig {
    pub fn new(output_file: &str) -> Self {
        Self {
            output_file: output_file.to_string(),
            manifest: None,
        }
    }

    pub fn with_manifest(mut self, manifest: BTreeMap<String, String>) -> Self {
        self.manifest = Some(manifest);
        self
    }
}

impl ConfigProvider for MockConfig {
    fn schema_dir(&self) -> &str {
        "."
    }

    fn output_file(&self) -> &str {
        &self.output_file
    }

    fn response_manifest(&self) -> Option<&BTreeMap<String, String>> {
        self.manifest.as_ref()
    }

    fn atomic_write(&self) -> bool {
        false
    }
}
