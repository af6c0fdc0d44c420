// Free-text skill extraction (resume text → graph skill names).

pub mod extractor;
pub mod handlers;
pub mod prompts;
