use crate::domain::AppError;

/// Port for interactive questions.
pub trait Prompter {
    /// Ask `prompt`, returning `default` when the answer is left empty.
    fn ask(&self, prompt: &str, default: &str) -> Result<String, AppError>;
}
