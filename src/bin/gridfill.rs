use clap::{Arg, Command};
use gridfill::{render, Grid, Solver, Vocabulary};

fn main() -> Result<(), String> {
    env_logger::init();

    let matches = Command::new("gridfill")
        .about("Fill a crossword structure with words from a vocabulary")
        .arg(
            Arg::new("structure")
                .help("Grid structure file; '*' marks a blocked cell")
                .required(true),
        )
        .arg(
            Arg::new("words")
                .help("Vocabulary file, one word per line")
                .required(true),
        )
        .arg(Arg::new("output").help("Write the filled grid to this file as well"))
        .get_matches();

    let structure = matches
        .get_one::<String>("structure")
        .expect("structure is required");
    let words = matches.get_one::<String>("words").expect("words is required");

    let structure = std::fs::read_to_string(structure)
        .map_err(|e| format!("failed to read structure: {}", e))?;
    let grid = Grid::parse(&structure).map_err(|e| e.to_string())?;
    let vocab =
        Vocabulary::load(words).map_err(|e| format!("failed to read words: {}", e))?;

    match Solver::new(&grid, &vocab).solve() {
        Some(assignment) => {
            let rendered = render::render(&grid, &assignment);
            print!("{}", rendered);
            if let Some(output) = matches.get_one::<String>("output") {
                std::fs::write(output, rendered)
                    .map_err(|e| format!("failed to write output: {}", e))?;
            }
        }
        None => println!("No solution."),
    }

    Ok(())
}
