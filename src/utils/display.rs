//! Display and output formatting utilities

use crate::game_of_life::Grid;
use crate::simulation::Frame;

/// Format grids and frames for console output
pub struct GridFormatter;

impl GridFormatter {
    /// Format a grid in compact form
    pub fn format_grid_compact(grid: &Grid) -> String {
        let mut output = String::new();
        for row in 0..grid.rows {
            for column in 0..grid.columns {
                output.push(if grid.get(row, column) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Format a grid with row and column coordinates
    pub fn format_grid_with_coords(grid: &Grid) -> String {
        let mut output = String::new();

        // Header with column numbers
        output.push_str("   ");
        for column in 0..grid.columns {
            output.push_str(&format!("{:2}", column % 10));
        }
        output.push('\n');

        // Rows with row numbers
        for row in 0..grid.rows {
            output.push_str(&format!("{:2} ", row));
            for column in 0..grid.columns {
                output.push_str(if grid.get(row, column) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Format a published frame with its generation header
    pub fn format_frame(frame: &Frame) -> String {
        let mut output = String::new();
        output.push_str(&format!(
            "Generation {} (Living: {}):\n",
            frame.iterations,
            frame.grid.live_count()
        ));
        output.push_str(&Self::format_grid_compact(&frame.grid));
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    /// Check if terminal supports color
    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err()
            && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    /// Format success message
    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    /// Format error message
    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    /// Format warning message
    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    /// Format info message
    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
            Color::Magenta => 35,
            Color::Cyan => 36,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_formatting() {
        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let grid = Grid::from_cells(cells).unwrap();

        let compact = GridFormatter::format_grid_compact(&grid);
        assert!(compact.contains('█'));
        assert!(compact.contains('·'));
        assert_eq!(compact.lines().count(), 2);

        let with_coords = GridFormatter::format_grid_with_coords(&grid);
        assert!(with_coords.contains(" 0 "));
        assert!(with_coords.contains("██"));
    }

    #[test]
    fn test_frame_formatting() {
        let grid = Grid::from_cells(vec![vec![true, false]]).unwrap();
        let frame = Frame {
            grid,
            iterations: 7,
        };
        let formatted = GridFormatter::format_frame(&frame);
        assert!(formatted.contains("Generation 7"));
        assert!(formatted.contains("Living: 1"));
    }

    #[test]
    fn test_color_output() {
        let colored = ColorOutput::colored("test", Color::Red);
        // Should either be colored or plain text
        assert!(colored.contains("test"));

        let success = ColorOutput::success("OK");
        assert!(success.contains("OK"));
    }
}
