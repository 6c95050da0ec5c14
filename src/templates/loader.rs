//! Template file loading
//!
//! Template files are JSON: an array of templates, each an array of slots.
//!
//! ```json
//! [[{"length": 5, "intersects": [], "start": [0, 0], "down": false},
//!   {"length": 4, "intersects": [[0, 0, 2]], "start": [0, 2], "down": true}]]
//! ```
//!
//! Each `intersects` entry is `[other_slot, this_position, other_position]`.
//! Files may list a crossing from both sides; an entry that points at a later
//! slot is moved onto that slot (swapping the positions) so the validated
//! template only ever looks backwards.

use super::TemplateLibrary;
use crate::core::{Direction, GridTemplate, Slot};
use crate::error::LoadError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct SlotRecord {
    length: usize,
    #[serde(default)]
    intersects: Vec<[usize; 3]>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    start: Option<[usize; 2]>,
    #[serde(default)]
    down: bool,
}

/// Load and validate a template library
///
/// # Errors
///
/// Returns `LoadError::Io` or `LoadError::Json` for unreadable files, and
/// `LoadError::Template` for the first template that fails validation.
pub fn load_templates<P: AsRef<Path>>(path: P) -> Result<TemplateLibrary, LoadError> {
    let content = fs::read_to_string(path)?;
    parse_templates(&content)
}

/// Parse and validate a template library from JSON text
///
/// # Errors
///
/// See [`load_templates`].
///
/// # Examples
/// ```
/// use qless_grid::templates::loader::parse_templates;
///
/// let json = r#"[[{"length": 3, "intersects": [[1, 0, 2]]},
///                 {"length": 3, "intersects": [[0, 2, 0]]}]]"#;
/// let library = parse_templates(json).unwrap();
/// let slots = library.templates()[0].slots();
/// assert!(slots[0].intersections().is_empty());
/// assert_eq!(slots[1].intersections().len(), 1);
/// ```
pub fn parse_templates(content: &str) -> Result<TemplateLibrary, LoadError> {
    let records: Vec<Vec<SlotRecord>> = serde_json::from_str(content)?;
    let templates = records
        .into_iter()
        .enumerate()
        .map(|(index, slots)| {
            build_template(slots).map_err(|source| LoadError::Template { index, source })
        })
        .collect::<Result<Vec<_>, _>>()?;
    log::debug!("loaded {} templates", templates.len());
    Ok(TemplateLibrary::new(templates))
}

fn build_template(records: Vec<SlotRecord>) -> Result<GridTemplate, crate::core::TemplateError> {
    // Collect every crossing in backward form: (slot, earlier, this_pos, earlier_pos)
    let mut crossings: Vec<(usize, usize, usize, usize)> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        for &[other, this_position, other_position] in &record.intersects {
            let crossing = if other > index && other < records.len() {
                (other, index, other_position, this_position)
            } else {
                (index, other, this_position, other_position)
            };
            if !crossings.contains(&crossing) {
                crossings.push(crossing);
            }
        }
    }

    let slots = records
        .iter()
        .enumerate()
        .map(|(index, record)| {
            let mut slot = Slot::new(record.length);
            if let Some([row, column]) = record.start {
                let direction = if record.down {
                    Direction::Down
                } else {
                    Direction::Across
                };
                slot = slot.at(row, column, direction);
            }
            crossings
                .iter()
                .filter(|c| c.0 == index)
                .fold(slot, |slot, &(_, earlier, this_position, earlier_position)| {
                    slot.crossing(earlier, this_position, earlier_position)
                })
        })
        .collect();

    GridTemplate::new(slots)
}

/// Write a library back out in the same JSON layout
///
/// Crossings are written only on the later slot.
///
/// # Errors
///
/// Returns `LoadError::Io` if the file cannot be written.
pub fn save_templates<P: AsRef<Path>>(library: &TemplateLibrary, path: P) -> Result<(), LoadError> {
    fs::write(path, templates_to_json(library)?)?;
    Ok(())
}

/// Serialize a library to JSON text
///
/// # Errors
///
/// Returns `LoadError::Json` if serialization fails.
pub fn templates_to_json(library: &TemplateLibrary) -> Result<String, LoadError> {
    let records: Vec<Vec<SlotRecord>> = library
        .templates()
        .iter()
        .map(|template| {
            template
                .slots()
                .iter()
                .map(|slot| SlotRecord {
                    length: slot.length(),
                    intersects: slot
                        .intersections()
                        .iter()
                        .map(|c| [c.earlier_slot, c.this_position, c.earlier_position])
                        .collect(),
                    start: slot.start().map(|(row, column)| [row, column]),
                    down: slot.direction() == Direction::Down,
                })
                .collect()
        })
        .collect();
    Ok(serde_json::to_string(&records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Intersection, TemplateError};

    #[test]
    fn mirrored_crossings_collapse() {
        let json = r#"[[
            {"length": 5, "intersects": [[1, 2, 0]]},
            {"length": 4, "intersects": [[0, 0, 2]]}
        ]]"#;
        let library = parse_templates(json).unwrap();
        let slots = library.templates()[0].slots();

        assert!(slots[0].intersections().is_empty());
        assert_eq!(slots[1].intersections(), [Intersection::new(0, 0, 2)]);
    }

    #[test]
    fn one_sided_forward_crossing_is_moved() {
        let json = r#"[[
            {"length": 5, "intersects": [[1, 4, 1]]},
            {"length": 3}
        ]]"#;
        let library = parse_templates(json).unwrap();
        let slots = library.templates()[0].slots();
        assert_eq!(slots[1].intersections(), [Intersection::new(0, 1, 4)]);
    }

    #[test]
    fn geometry_is_read() {
        let json = r#"[[
            {"length": 3, "start": [1, 2], "down": true},
            {"length": 3, "start": [1, 2], "intersects": [[0, 0, 0]]}
        ]]"#;
        let library = parse_templates(json).unwrap();
        let slots = library.templates()[0].slots();
        assert_eq!(slots[0].start(), Some((1, 2)));
        assert_eq!(slots[0].direction(), Direction::Down);
        assert_eq!(slots[1].direction(), Direction::Across);
    }

    #[test]
    fn unknown_slot_is_reported_with_template_index() {
        let json = r#"[
            [{"length": 3}],
            [{"length": 3}, {"length": 3, "intersects": [[5, 0, 0]]}]
        ]"#;
        let err = parse_templates(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Template {
                index: 1,
                source: TemplateError::UnknownSlot {
                    slot: 1,
                    referenced: 5
                }
            }
        ));
    }

    #[test]
    fn self_crossing_is_rejected() {
        let json = r#"[[{"length": 3, "intersects": [[0, 0, 1]]}]]"#;
        let err = parse_templates(json).unwrap_err();
        assert!(matches!(
            err,
            LoadError::Template {
                source: TemplateError::ForwardReference { .. },
                ..
            }
        ));
    }

    #[test]
    fn invalid_json_is_reported() {
        assert!(matches!(
            parse_templates("[[{\"length\": }]]"),
            Err(LoadError::Json(_))
        ));
    }

    #[test]
    fn json_output_reloads_identically() {
        let json = r#"[[
            {"length": 5, "start": [0, 0]},
            {"length": 4, "start": [0, 2], "down": true, "intersects": [[0, 0, 2]]},
            {"length": 3, "intersects": [[1, 1, 3]]}
        ]]"#;
        let library = parse_templates(json).unwrap();
        let reloaded = parse_templates(&templates_to_json(&library).unwrap()).unwrap();
        assert_eq!(library.templates(), reloaded.templates());
    }
}
