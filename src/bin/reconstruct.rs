use shamir_reconstruct::prelude::*;

/// Shares of a quadratic polynomial, values already in decimal.
const QUADRATIC_SHARES: [(i64, i64); 4] = [(1, 4), (2, 7), (3, 12), (6, 39)];

/// Shares with values encoded in assorted bases, `(x, digits, radix)`.
const RADIX_SHARES: [(i64, &str, u32); 7] = [
    (1, "13444211440455345511", 6),
    (2, "aed7015a346d63", 15),
    (3, "6aeeb69631c227c", 15),
    (4, "e1b5e05623d881f", 16),
    (5, "316034514573652620673", 8),
    (6, "2122212201122002221120200210011020220200", 3),
    (7, "20120221122211000100210021102001201112121", 3),
];

fn print_points(points: &[Point]) {
    println!("Decoded points:");
    for point in points {
        println!("  {point}");
    }
}

/// Reconstruct the two classic fixtures and print the recovered secrets.
fn main() {
    println!("=== Secret reconstruction via Lagrange interpolation ===");

    println!("\nQuadratic fixture ({} shares):", QUADRATIC_SHARES.len());
    let interpolator = Interpolator::from_points(
        QUADRATIC_SHARES.iter().map(|&(x, y)| Point::new(x, y)),
    );
    print_points(interpolator.points());
    let secret = interpolator
        .reconstruct_secret()
        .expect("quadratic fixture reconstructs");
    println!("Secret: {secret}");

    println!("\nRadix fixture ({} shares):", RADIX_SHARES.len());
    let shares: Vec<Point> = RADIX_SHARES
        .iter()
        .map(|&(x, digits, radix)| Point::from_radix(x, digits, radix))
        .collect::<Result<_, _>>()
        .expect("fixture digits decode");
    let interpolator = Interpolator::from_points(shares);
    print_points(interpolator.points());
    let secret = interpolator
        .reconstruct_secret()
        .expect("radix fixture reconstructs");
    println!("Secret: {secret}");
}
