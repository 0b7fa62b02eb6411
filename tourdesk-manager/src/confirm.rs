/// A blocking yes/no question asked before a destructive edit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfirmPrompt {
    pub header: String,
    pub message: String,
}

impl ConfirmPrompt {
    pub fn delete(noun: &str) -> Self {
        Self {
            header: "Confirm Delete".to_string(),
            message: format!("Are you sure you want to delete this {}?", noun),
        }
    }

    pub fn remove_hotel_group(hotel: &str) -> Self {
        Self {
            header: "Confirm Remove".to_string(),
            message: format!("Remove every room booked at {}?", hotel),
        }
    }
}

/// Answers a [`ConfirmPrompt`]. Declining leaves state unchanged.
pub trait Confirm {
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool;
}

/// A pre-answered prompt, e.g. a `confirm=true` request flag
impl Confirm for bool {
    fn confirm(&self, _prompt: &ConfirmPrompt) -> bool {
        *self
    }
}

impl<F> Confirm for F
where
    F: Fn(&ConfirmPrompt) -> bool,
{
    fn confirm(&self, prompt: &ConfirmPrompt) -> bool {
        self(prompt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[test]
    fn test_closure_sees_prompt() {
        let seen = RefCell::new(None);
        let answer = |prompt: &ConfirmPrompt| {
            *seen.borrow_mut() = Some(prompt.message.clone());
            false
        };

        assert!(!answer.confirm(&ConfirmPrompt::delete("package")));
        assert_eq!(
            seen.into_inner().as_deref(),
            Some("Are you sure you want to delete this package?")
        );
    }

    #[test]
    fn test_bool_is_preanswered() {
        assert!(true.confirm(&ConfirmPrompt::remove_hotel_group("Budget Inn")));
        assert!(!false.confirm(&ConfirmPrompt::delete("destination")));
    }
}
