//! Writes the left shift animation to `left_shift_utility.gif`.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    hedon_animations::init_logging();

    let animation = hedon_animations::left_shift()?;
    animation.run()?;

    println!("Saved animation as {}", animation.output());
    Ok(())
}
