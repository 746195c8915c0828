//! Yes/no confirmation asked before an existing folder is replaced

use std::io;

/// Asks the operator a yes/no question
pub trait Confirm {
    fn confirm(&self, message: &str) -> io::Result<bool>;
}

/// Answers yes without asking (`--yes`)
#[derive(Debug, Clone, Copy, Default)]
pub struct AssumeYes;

impl Confirm for AssumeYes {
    fn confirm(&self, _message: &str) -> io::Result<bool> {
        Ok(true)
    }
}

impl<F> Confirm for F
where
    F: Fn(&str) -> io::Result<bool>,
{
    fn confirm(&self, message: &str) -> io::Result<bool> {
        self(message)
    }
}

/// Prompt shown when the destination folder is already there
pub fn overwrite_message(folder_name: &str) -> String {
    format!(
        "Folder {} already exists, do you want to overwrite it?",
        folder_name
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assume_yes() {
        assert!(AssumeYes.confirm("anything").unwrap());
    }

    #[test]
    fn test_closures_confirm() {
        let decline = |_: &str| -> io::Result<bool> { Ok(false) };
        assert!(!decline.confirm(&overwrite_message("app")).unwrap());
    }

    #[test]
    fn test_overwrite_message_names_folder() {
        assert_eq!(
            overwrite_message("app"),
            "Folder app already exists, do you want to overwrite it?"
        );
    }
}
