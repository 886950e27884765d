use crate::domain::model::ResponseFile;
use crate::domain::ports::Reporter;

fn file_list(files: &[ResponseFile]) -> String {
    let names: Vec<&str> = files.iter().map(|f| f.file_name.as_str()).collect();
    format!("[{}]", names.join(", "))
}

/// Prints progress notices to stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn started(&self) {
        println!("Generating full schema...");
    }

    fn responses_discovered(&self, files: &[ResponseFile]) {
        println!("Using response files: {}", file_list(files));
    }

    fn completed(&self, output: &str) {
        println!("DAO Voting Adapter full schema generated.");
        println!("📁 Output saved to: {}", output);
    }
}

/// Sends progress notices to the tracing subscriber instead of stdout.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingReporter;

impl Reporter for TracingReporter {
    fn started(&self) {
        tracing::info!("Generating full schema");
    }

    fn responses_discovered(&self, files: &[ResponseFile]) {
        tracing::info!(count = files.len(), "Using response files: {}", file_list(files));
    }

    fn completed(&self, output: &str) {
        tracing::info!(output, "Full schema generated");
    }
}
