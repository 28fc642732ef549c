use anyhow::Context;
use dense_algebra::Matrix;
use log::info;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let m1 = Matrix::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]])
        .context("failed to create m1")?;
    let m2 = Matrix::from_flat(3, 2, &[7.0, 8.0, 9.0, 10.0, 11.0, 12.0])
        .context("failed to create m2")?;

    println!("Matrix m1:\n{}", m1);
    println!("Matrix m2:\n{}", m2);

    let product = m1.multiply(&m2).context("matrix multiplication failed")?;
    println!("Product m1 * m2:\n{}", product);

    let identity = Matrix::identity(3);
    println!("Identity matrix (3x3):\n{}", identity);
    println!("Is identity: {}", identity.is_identity());

    let zero = Matrix::zeros(2, 2);
    println!("Zero matrix (2x2):\n{}", zero);
    println!("Is zero matrix: {}", zero.is_zero());

    let square = Matrix::from_rows(&[[2.0, 3.0, 1.0], [4.0, 1.0, -3.0], [1.0, 2.0, 0.0]])?;
    println!("Square matrix for determinant and rank:\n{}", square);

    let det = square
        .determinant()
        .context("failed to compute determinant")?;
    println!("Determinant: {:.4}", det);
    println!("Rank: {}", square.rank());

    match square.invert() {
        Ok(inverse) => println!("Inverse:\n{}", inverse),
        Err(e) => info!("square matrix has no inverse: {}", e),
    }

    Ok(())
}
