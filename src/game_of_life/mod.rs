//! Game of Life core: grid state, neighborhood topologies, rule sets, and
//! the generation-stepping algorithm

pub mod grid;
pub mod io;
pub mod neighborhood;
pub mod rules;
pub mod step;

pub use grid::Grid;
pub use io::{create_example_patterns, load_pattern_from_file, save_pattern_to_file};
pub use neighborhood::Neighborhood;
pub use rules::RuleSet;
pub use step::{evolve_generations, next_cell_state, next_generation};
