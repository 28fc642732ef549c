use anyhow::Context;
use dense_algebra::vector::utils::{are_colinear, distance, dot};
use dense_algebra::Vector;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let v1 = Vector::from_slice(&[1.0, 2.0, 3.0]);
    let v2 = Vector::from_slice(&[4.0, 5.0, 6.0]);

    println!("{}", v1);
    println!("{}", v2);
    println!("{}", Vector::zeros(2));
    println!("{}", Vector::zeros(16));

    let sum = v1.add(&v2).context("add failed")?;
    println!("v1 + v2: {}", sum);
    println!("v1 * 2: {}", v1.mul_scalar(2.0));

    println!("||v1|| = {:.4}", v1.norm());
    let unit = v1.normalize();
    println!("Normalized v1: {}", unit);
    println!("||unit|| = {:.4}", unit.norm());

    let proj = v1.project_onto(&v2).context("projection failed")?;
    println!("Projection of v1 onto v2: {}", proj);

    println!("v1 . v2 = {:.4}", dot(&v1, &v2)?);
    println!("distance(v1, v2) = {:.4}", distance(&v1, &v2)?);
    println!("v1 colinear with 2*v1: {}", are_colinear(&v1, &v1.mul_scalar(2.0)));

    Ok(())
}
