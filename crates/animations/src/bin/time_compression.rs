//! Writes the time compression animation to `time_compression_utility.gif`.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    hedon_animations::init_logging();

    let animation = hedon_animations::time_compression()?;
    animation.run()?;

    println!("Animation saved as {}", animation.output());
    Ok(())
}
