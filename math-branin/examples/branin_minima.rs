//! Print the Branin constants, evaluate the known minima and a few seeded samples
//!
//! Usage:
//!     RUST_LOG=debug cargo run --example branin_minima

use math_branin::{BraninEvaluator, Point, SamplerConfig};
use std::f64::consts::PI;

fn main() {
    env_logger::init();

    let evaluator = BraninEvaluator::new();
    let k = evaluator.constants();
    println!("Branin constants:");
    println!(
        "  a = {}, b = {:.8}, c = {:.8}, r = {}, s = {}, t = {:.8}",
        k.a, k.b, k.c, k.r, k.s, k.t
    );
    let d = evaluator.domain();
    println!(
        "  x1 in [{}, {}], x2 in [{}, {}]",
        d.x1.lower, d.x1.upper, d.x2.lower, d.x2.upper
    );
    println!();

    println!("Global minima (expected f = 0.397887):");
    for p in [
        Point::new(-PI, 12.275),
        Point::new(PI, 2.275),
        Point::new(9.42478, 2.475),
    ] {
        println!("  f{} = {:.6}", p, evaluator.evaluate(&p));
    }
    println!();

    let outside = Point::new(12.0, 3.0);
    println!("Outside the domain: f{} = {}", outside, evaluator.evaluate(&outside));
    println!();

    let mut rng = SamplerConfig::default().with_seed(42).build_rng();
    println!("Seeded samples:");
    for _ in 0..5 {
        let p = evaluator.sample(&mut rng);
        println!("  f({:.4}, {:.4}) = {:.6}", p.x1, p.x2, evaluator.evaluate(&p));
    }
}
