//! Writes the immediate reward animation to `immediate_reward_utility.gif`.

use std::error::Error;

fn main() -> Result<(), Box<dyn Error>> {
    hedon_animations::init_logging();

    let animation = hedon_animations::immediate_reward()?;
    animation.run()?;

    println!("Saved animation as {}", animation.output());
    Ok(())
}
