use crate::errors::JexvacError;

/// How many missing ids an integrity error spells out.
const MISSING_PREVIEW: usize = 5;

fn preview(ids: &[String]) -> String {
    let mut shown = ids
        .iter()
        .take(MISSING_PREVIEW)
        .cloned()
        .collect::<Vec<_>>()
        .join(", ");
    if ids.len() > MISSING_PREVIEW {
        shown.push_str(&format!(", ... ({} more)", ids.len() - MISSING_PREVIEW));
    }
    shown
}

#[derive(Debug, thiserror::Error)]
pub enum CleanupError {
    #[error(
        "Sanity check failed: the archive references {} resource(s) that are not in the catalog: {}. Is the export from this Joplin profile?",
        .missing.len(),
        preview(.missing)
    )]
    IntegrityViolation { missing: Vec<String> },
}

impl JexvacError for CleanupError {
    fn error_code(&self) -> &'static str {
        match self {
            CleanupError::IntegrityViolation { .. } => "CLEANUP_INTEGRITY_VIOLATION",
        }
    }

    fn is_user_error(&self) -> bool {
        matches!(self, CleanupError::IntegrityViolation { .. })
    }
}
