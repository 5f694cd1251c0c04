//! File I/O for Game of Life patterns
//!
//! Patterns are plain text: one line per row, '1' for alive and '0' for
//! dead.

use super::Grid;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a pattern from a text file
pub fn load_pattern_from_file<P: AsRef<Path>>(path: P) -> Result<Grid> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_pattern(&content)
        .with_context(|| format!("Failed to parse pattern from file: {}", path.as_ref().display()))
}

/// Parse a pattern from its string representation
pub fn parse_pattern(content: &str) -> Result<Grid> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let columns = lines[0].len();
    let mut cells = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != columns {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                line.len(),
                columns
            );
        }

        let mut row = Vec::with_capacity(columns);
        for (col_idx, ch) in line.chars().enumerate() {
            match ch {
                '0' => row.push(false),
                '1' => row.push(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            }
        }
        cells.push(row);
    }

    Grid::from_cells(cells)
}

/// Save a pattern to a text file
pub fn save_pattern_to_file<P: AsRef<Path>>(grid: &Grid, path: P) -> Result<()> {
    let content = pattern_to_string(grid);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

/// Convert a grid to its pattern string representation
pub fn pattern_to_string(grid: &Grid) -> String {
    let mut result = String::with_capacity(grid.rows * (grid.columns + 1));

    for row in 0..grid.rows {
        for column in 0..grid.columns {
            result.push(if grid.get(row, column) { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Create example pattern files for experimentation
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    // Glider (moving pattern)
    let glider_content = "00100\n10100\n01100\n00000\n00000\n";
    std::fs::write(dir.join("glider.txt"), glider_content)
        .context("Failed to write glider.txt")?;

    // Blinker (period-2 oscillator)
    let blinker_content = "00000\n00000\n01110\n00000\n00000\n";
    std::fs::write(dir.join("blinker.txt"), blinker_content)
        .context("Failed to write blinker.txt")?;

    // Block (still life)
    let block_content = "0000\n0110\n0110\n0000\n";
    std::fs::write(dir.join("block.txt"), block_content)
        .context("Failed to write block.txt")?;

    // Beacon (period-2 oscillator)
    let beacon_content = "110000\n110000\n001100\n001100\n";
    std::fs::write(dir.join("beacon.txt"), beacon_content)
        .context("Failed to write beacon.txt")?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_pattern() {
        let content = "010\n101\n010\n";
        let grid = parse_pattern(content).unwrap();

        assert_eq!(grid.rows, 3);
        assert_eq!(grid.columns, 3);
        assert_eq!(grid.live_count(), 4);
        assert!(grid.get(0, 1));
        assert!(grid.get(1, 0));
        assert!(grid.get(1, 2));
        assert!(grid.get(2, 1));
    }

    #[test]
    fn test_pattern_to_string() {
        let cells = vec![
            vec![false, true, false],
            vec![true, false, true],
        ];
        let grid = Grid::from_cells(cells).unwrap();
        assert_eq!(pattern_to_string(&grid), "010\n101\n");
    }

    #[test]
    fn test_round_trip() {
        let original = "0110\n1001\n0110\n";
        let grid = parse_pattern(original).unwrap();
        assert_eq!(pattern_to_string(&grid), original);
    }

    #[test]
    fn test_file_operations() {
        let temp_dir = tempdir().unwrap();
        let file_path = temp_dir.path().join("pattern.txt");

        let cells = vec![
            vec![true, false, true],
            vec![false, true, false],
        ];
        let original = Grid::from_cells(cells).unwrap();

        save_pattern_to_file(&original, &file_path).unwrap();
        let loaded = load_pattern_from_file(&file_path).unwrap();

        assert_eq!(original, loaded);
    }

    #[test]
    fn test_invalid_input() {
        // Invalid character
        assert!(parse_pattern("010\n1X1\n010\n").is_err());

        // Inconsistent row lengths
        assert!(parse_pattern("010\n11\n010\n").is_err());

        // Empty content
        assert!(parse_pattern("").is_err());
    }

    #[test]
    fn test_create_example_patterns() {
        let temp_dir = tempdir().unwrap();
        create_example_patterns(temp_dir.path()).unwrap();

        for name in ["glider.txt", "blinker.txt", "block.txt", "beacon.txt"] {
            assert!(temp_dir.path().join(name).exists());
        }

        let glider = load_pattern_from_file(temp_dir.path().join("glider.txt")).unwrap();
        assert_eq!(glider.rows, 5);
        assert_eq!(glider.columns, 5);
        assert_eq!(glider.live_count(), 5);
    }
}
