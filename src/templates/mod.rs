//! Grid template library
//!
//! An ordered, read-only collection of validated templates. Order matters: the
//! solver tries templates front to back, and ranking reorders the library.

pub mod loader;

use crate::core::{GridTemplate, Roll, RollError};

#[derive(Debug, Clone, Default)]
pub struct TemplateLibrary {
    templates: Vec<GridTemplate>,
}

impl TemplateLibrary {
    #[must_use]
    pub const fn new(templates: Vec<GridTemplate>) -> Self {
        Self { templates }
    }

    #[must_use]
    pub fn templates(&self) -> &[GridTemplate] {
        &self.templates
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&GridTemplate> {
        self.templates.get(index)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Shortest slot across the whole library
    #[must_use]
    pub fn min_slot_length(&self) -> usize {
        self.templates
            .iter()
            .map(GridTemplate::min_slot_length)
            .min()
            .unwrap_or(0)
    }

    /// Reject a roll that cannot fill even the shortest slot of any template
    ///
    /// # Errors
    /// Returns `RollError::TooShort` when the roll has fewer letters than the
    /// library's shortest slot.
    pub fn check_roll(&self, roll: &Roll) -> Result<(), RollError> {
        let minimum = self.min_slot_length();
        if roll.len() < minimum {
            return Err(RollError::TooShort {
                letters: roll.len(),
                minimum,
            });
        }
        Ok(())
    }

    /// A new library holding the templates at `order`, in that order
    ///
    /// Indices past the end are skipped; templates not mentioned are dropped.
    #[must_use]
    pub fn reordered(&self, order: &[usize]) -> Self {
        Self::new(
            order
                .iter()
                .filter_map(|&i| self.templates.get(i).cloned())
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Slot;

    fn library() -> TemplateLibrary {
        TemplateLibrary::new(vec![
            GridTemplate::new(vec![Slot::new(5), Slot::new(4).crossing(0, 0, 0)]).unwrap(),
            GridTemplate::new(vec![Slot::new(4), Slot::new(6).crossing(0, 1, 1)]).unwrap(),
        ])
    }

    #[test]
    fn min_slot_length_across_templates() {
        assert_eq!(library().min_slot_length(), 4);
        assert_eq!(TemplateLibrary::default().min_slot_length(), 0);
    }

    #[test]
    fn roll_shorter_than_every_slot_rejected() {
        let library = library();
        let short = Roll::new("abc").unwrap();
        assert_eq!(
            library.check_roll(&short),
            Err(RollError::TooShort {
                letters: 3,
                minimum: 4
            })
        );
        assert!(library.check_roll(&Roll::new("abcd").unwrap()).is_ok());
    }

    #[test]
    fn reordered_follows_order() {
        let library = library();
        let reordered = library.reordered(&[1, 0, 9]);
        assert_eq!(reordered.len(), 2);
        assert_eq!(reordered.get(0), library.get(1));
        assert_eq!(reordered.get(1), library.get(0));
    }
}
