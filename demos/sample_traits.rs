use chloris::parameters::{TRAIT_NAMES, default_sampler};
use chloris::samplers::{NormalSampler, Sampler};

fn main() {
    // Draw five values from every default trait sampler in the registry.
    for name in TRAIT_NAMES {
        let mut sampler = default_sampler(name).expect("known trait name");

        let draws: Vec<f64> = (0..5)
            .map(|_| sampler.sample().expect("default bounds are reachable"))
            .collect();

        println!("{name:>13}: {draws:.4?}");
    }

    // Custom seeds reproduce the same sequence run to run.
    let mut chl = NormalSampler::bounded(35.0, 30.0, 5.0, 85.0)
        .expect("valid distribution")
        .with_seed(42);

    println!(
        "\nseeded chlorophyll draws: {:.2} {:.2} {:.2}",
        chl.sample().unwrap(),
        chl.sample().unwrap(),
        chl.sample().unwrap()
    );
}
