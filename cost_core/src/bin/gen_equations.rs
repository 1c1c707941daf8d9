//! Write EQUATIONS.md from the correlation registry.
//!
//! # Usage
//!
//! ```bash
//! cargo run --bin gen-equations
//! ```
//!
//! Run from the workspace root; the file lands at `cost_core/EQUATIONS.md`.

use std::fs;
use std::path::Path;

use cost_core::equations::generate_equations_markdown;

fn main() {
    let markdown = generate_equations_markdown();
    let output_path = Path::new("cost_core/EQUATIONS.md");

    match fs::write(output_path, &markdown) {
        Ok(()) => {
            println!("Wrote {} bytes to {}", markdown.len(), output_path.display());
        }
        Err(e) => {
            eprintln!("Error writing {}: {}", output_path.display(), e);
            std::process::exit(1);
        }
    }
}
