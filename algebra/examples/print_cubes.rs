use algebra::{Overflow, Power};

fn main() -> Result<(), algebra::Error> {
    for n in [5, 3, 9] {
        println!("The cube of {n} is {}", algebra::cube(n));
    }

    // Pick the operation and overflow policy at runtime
    let squared = Power::Square.apply(-12, Overflow::Checked)?;
    assert_eq!(squared, 144);

    Ok(())
}
