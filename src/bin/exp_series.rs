/// Approximate Euler's number by summing the reciprocal factorial series
/// 1/0! + 1/1! + 1/2! + ... over a fixed number of terms.
fn exp_series(terms: u32) -> f64 {
    let mut sum = 0.0;
    let mut term = 1.0;
    for k in 0..terms {
        sum += term;
        term /= (k + 1) as f64;
    }
    sum
}

fn main() {
    println!("e = {}", exp_series(20));
}
