//! Grid templates
//!
//! A template is an ordered list of slots. Each slot has a required length and
//! a list of intersections with earlier slots; the slot order is the fill order.

use super::word::MIN_WORD_LEN;
use std::fmt;

/// Orientation of a slot on the board
///
/// Only the pretty-printer cares; the solver sees the intersection list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    #[default]
    Across,
    Down,
}

/// A crossing between a slot and an earlier slot
///
/// The slot's character at `this_position` must equal the earlier slot's
/// character at `earlier_position`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Intersection {
    pub earlier_slot: usize,
    pub this_position: usize,
    pub earlier_position: usize,
}

impl Intersection {
    #[must_use]
    pub const fn new(earlier_slot: usize, this_position: usize, earlier_position: usize) -> Self {
        Self {
            earlier_slot,
            this_position,
            earlier_position,
        }
    }
}

/// One word position in a template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slot {
    length: usize,
    intersections: Vec<Intersection>,
    direction: Direction,
    start: Option<(usize, usize)>,
}

impl Slot {
    /// A slot with no crossings and no board position
    #[must_use]
    pub const fn new(length: usize) -> Self {
        Self {
            length,
            intersections: Vec::new(),
            direction: Direction::Across,
            start: None,
        }
    }

    /// Add a crossing with an earlier slot
    #[must_use]
    pub fn crossing(mut self, earlier_slot: usize, this_position: usize, earlier_position: usize) -> Self {
        self.intersections
            .push(Intersection::new(earlier_slot, this_position, earlier_position));
        self
    }

    /// Place the slot on the board (row, column)
    #[must_use]
    pub const fn at(mut self, row: usize, column: usize, direction: Direction) -> Self {
        self.start = Some((row, column));
        self.direction = direction;
        self
    }

    #[inline]
    #[must_use]
    pub const fn length(&self) -> usize {
        self.length
    }

    #[inline]
    #[must_use]
    pub fn intersections(&self) -> &[Intersection] {
        &self.intersections
    }

    #[inline]
    #[must_use]
    pub const fn direction(&self) -> Direction {
        self.direction
    }

    /// Starting cell on the board, if the template carries geometry
    #[inline]
    #[must_use]
    pub const fn start(&self) -> Option<(usize, usize)> {
        self.start
    }
}

/// Structural problems that make a template unusable
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    Empty,
    SlotTooShort {
        slot: usize,
        length: usize,
    },
    /// Crossing with the same or a later slot (fill order would not know its letter)
    ForwardReference {
        slot: usize,
        referenced: usize,
    },
    /// Crossing with a slot index past the end of the template
    UnknownSlot {
        slot: usize,
        referenced: usize,
    },
    PositionOutOfRange {
        slot: usize,
        position: usize,
        length: usize,
    },
}

impl fmt::Display for TemplateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Template has no slots"),
            Self::SlotTooShort { slot, length } => write!(
                f,
                "Slot {slot} has length {length}, minimum is {MIN_WORD_LEN}"
            ),
            Self::ForwardReference { slot, referenced } => write!(
                f,
                "Slot {slot} crosses slot {referenced}, which is not filled before it"
            ),
            Self::UnknownSlot { slot, referenced } => {
                write!(f, "Slot {slot} crosses unknown slot {referenced}")
            }
            Self::PositionOutOfRange {
                slot,
                position,
                length,
            } => write!(
                f,
                "Slot {slot}: crossing position {position} is outside a word of length {length}"
            ),
        }
    }
}

impl std::error::Error for TemplateError {}

/// A validated, immutable grid template
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridTemplate {
    slots: Vec<Slot>,
}

impl GridTemplate {
    /// Validate and build a template
    ///
    /// # Errors
    /// Returns `TemplateError` if the template is empty, a slot is shorter than
    /// the minimum word length, or a crossing points at the same slot, a later
    /// slot, a missing slot, or a position outside either word.
    ///
    /// # Examples
    /// ```
    /// use qless_grid::core::{GridTemplate, Slot};
    ///
    /// let template = GridTemplate::new(vec![
    ///     Slot::new(3),
    ///     Slot::new(3).crossing(0, 2, 0),
    /// ])
    /// .unwrap();
    /// assert_eq!(template.slots().len(), 2);
    ///
    /// // Slot 0 cannot cross slot 1: slot 1 is filled later
    /// assert!(GridTemplate::new(vec![Slot::new(3).crossing(1, 0, 0), Slot::new(3)]).is_err());
    /// ```
    pub fn new(slots: Vec<Slot>) -> Result<Self, TemplateError> {
        if slots.is_empty() {
            return Err(TemplateError::Empty);
        }

        for (index, slot) in slots.iter().enumerate() {
            if slot.length < MIN_WORD_LEN {
                return Err(TemplateError::SlotTooShort {
                    slot: index,
                    length: slot.length,
                });
            }

            for crossing in &slot.intersections {
                let referenced = crossing.earlier_slot;
                if referenced >= slots.len() {
                    return Err(TemplateError::UnknownSlot {
                        slot: index,
                        referenced,
                    });
                }
                if referenced >= index {
                    return Err(TemplateError::ForwardReference {
                        slot: index,
                        referenced,
                    });
                }
                if crossing.this_position >= slot.length {
                    return Err(TemplateError::PositionOutOfRange {
                        slot: index,
                        position: crossing.this_position,
                        length: slot.length,
                    });
                }
                let earlier_length = slots[referenced].length;
                if crossing.earlier_position >= earlier_length {
                    return Err(TemplateError::PositionOutOfRange {
                        slot: referenced,
                        position: crossing.earlier_position,
                        length: earlier_length,
                    });
                }
            }
        }

        Ok(Self { slots })
    }

    #[inline]
    #[must_use]
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    /// Length of the shortest slot
    #[must_use]
    pub fn min_slot_length(&self) -> usize {
        self.slots.iter().map(Slot::length).min().unwrap_or(0)
    }

    /// Letters the grid needs from the roll: total slot length minus crossings
    #[must_use]
    pub fn letters_needed(&self) -> usize {
        let cells: usize = self.slots.iter().map(Slot::length).sum();
        let crossings: usize = self.slots.iter().map(|s| s.intersections.len()).sum();
        cells.saturating_sub(crossings)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_template() {
        let template = GridTemplate::new(vec![
            Slot::new(5),
            Slot::new(4).crossing(0, 0, 2),
            Slot::new(3).crossing(1, 2, 3),
        ])
        .unwrap();
        assert_eq!(template.slots().len(), 3);
        assert_eq!(template.min_slot_length(), 3);
        assert_eq!(template.letters_needed(), 10);
    }

    #[test]
    fn empty_template_rejected() {
        assert_eq!(GridTemplate::new(vec![]), Err(TemplateError::Empty));
    }

    #[test]
    fn short_slot_rejected() {
        assert_eq!(
            GridTemplate::new(vec![Slot::new(2)]),
            Err(TemplateError::SlotTooShort { slot: 0, length: 2 })
        );
    }

    #[test]
    fn self_reference_rejected() {
        assert_eq!(
            GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(1, 0, 0)]),
            Err(TemplateError::ForwardReference {
                slot: 1,
                referenced: 1
            })
        );
    }

    #[test]
    fn forward_reference_rejected() {
        assert_eq!(
            GridTemplate::new(vec![Slot::new(3).crossing(1, 0, 0), Slot::new(3)]),
            Err(TemplateError::ForwardReference {
                slot: 0,
                referenced: 1
            })
        );
    }

    #[test]
    fn unknown_slot_rejected() {
        assert_eq!(
            GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(7, 0, 0)]),
            Err(TemplateError::UnknownSlot {
                slot: 1,
                referenced: 7
            })
        );
    }

    #[test]
    fn positions_checked_on_both_words() {
        assert!(matches!(
            GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(0, 3, 0)]),
            Err(TemplateError::PositionOutOfRange { slot: 1, position: 3, .. })
        ));
        assert!(matches!(
            GridTemplate::new(vec![Slot::new(3), Slot::new(4).crossing(0, 0, 3)]),
            Err(TemplateError::PositionOutOfRange { slot: 0, position: 3, .. })
        ));
    }

    #[test]
    fn geometry_is_optional() {
        let slot = Slot::new(4).at(2, 3, Direction::Down);
        assert_eq!(slot.start(), Some((2, 3)));
        assert_eq!(slot.direction(), Direction::Down);
        assert_eq!(Slot::new(4).start(), None);
    }
}
