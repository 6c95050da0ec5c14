//! Formatting utilities for terminal output

use crate::core::{Direction, GridTemplate, Solution};

/// Draw a solution on a character grid
///
/// Needs every slot to carry a start position; otherwise the words are
/// listed one per line in slot order.
///
/// # Examples
/// ```
/// use qless_grid::core::{Direction, GridTemplate, Slot, Solution};
/// use qless_grid::output::formatters::render_grid;
///
/// let template = GridTemplate::new(vec![
///     Slot::new(3).at(0, 0, Direction::Across),
///     Slot::new(3).crossing(0, 0, 2).at(0, 2, Direction::Down),
/// ])
/// .unwrap();
/// let solution = Solution::new(vec!["cat".into(), "tan".into()]);
/// assert_eq!(render_grid(&template, &solution), "cat\n  a\n  n");
/// ```
#[must_use]
pub fn render_grid(template: &GridTemplate, solution: &Solution) -> String {
    let placed: Option<Vec<_>> = template
        .slots()
        .iter()
        .zip(solution.words())
        .map(|(slot, word)| slot.start().map(|start| (start, slot.direction(), word)))
        .collect();
    let Some(placed) = placed else {
        return word_list(solution);
    };

    let cells: Vec<(usize, usize, u8)> = placed
        .iter()
        .flat_map(|&(start, direction, word)| cells_of(start, direction, word))
        .collect();
    let height = cells.iter().map(|&(row, _, _)| row + 1).max().unwrap_or(0);
    let width = cells.iter().map(|&(_, column, _)| column + 1).max().unwrap_or(0);
    let mut grid = vec![vec![b' '; width]; height];
    for (row, column, letter) in cells {
        grid[row][column] = letter;
    }

    grid.iter()
        .map(|line| String::from_utf8_lossy(line).trim_end().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

fn cells_of(
    (row, column): (usize, usize),
    direction: Direction,
    word: &str,
) -> impl Iterator<Item = (usize, usize, u8)> + '_ {
    word.bytes().enumerate().map(move |(i, letter)| match direction {
        Direction::Across => (row, column + i, letter),
        Direction::Down => (row + i, column, letter),
    })
}

fn word_list(solution: &Solution) -> String {
    solution
        .words()
        .iter()
        .enumerate()
        .map(|(i, word)| format!("{}. {word}", i + 1))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Clamped to [0, width]
    let filled = ((value / max).max(0.0) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar for a template's ranking score relative to the best one
#[must_use]
pub fn score_bar(score: f64, best: f64, width: usize) -> String {
    create_progress_bar(score, best, width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Slot;

    #[test]
    fn templates_without_geometry_list_words() {
        let template = GridTemplate::new(vec![Slot::new(3), Slot::new(3).crossing(0, 2, 0)]).unwrap();
        let solution = Solution::new(vec!["mod".into(), "ohm".into()]);
        assert_eq!(render_grid(&template, &solution), "1. mod\n2. ohm");
    }

    #[test]
    fn crossing_letter_drawn_once() {
        // "ohm" runs down into the 'm' of "mod"
        let template = GridTemplate::new(vec![
            Slot::new(3).at(2, 0, Direction::Across),
            Slot::new(3).crossing(0, 2, 0).at(0, 0, Direction::Down),
        ])
        .unwrap();
        let solution = Solution::new(vec!["mod".into(), "ohm".into()]);
        assert_eq!(render_grid(&template, &solution), "o\nh\nmod");
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn zero_best_score_is_empty_bar() {
        assert_eq!(score_bar(0.0, 0.0, 4), "░░░░");
    }
}
