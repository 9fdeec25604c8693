use response::UsageMetadata;
use tracing::info;

const COMPLAINT_PREVIEW_CHARS: usize = 50;

pub fn usage_callback(usage: &UsageMetadata) {
    info!(
        "Usage: prompt_tokens: {}, candidates_tokens: {}, total_tokens: {}",
        usage.prompt_token_count, usage.candidates_token_count, usage.total_token_count
    );
}

/// First 50 characters of a complaint, for log lines.
pub fn complaint_preview(complaint: &str) -> String {
    complaint.chars().take(COMPLAINT_PREVIEW_CHARS).collect()
}
