//! Fuzz target for chromosome and genotype parsing

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: &str| {
    if let Ok(chromosome) = input.parse::<genoscore::Chromosome>() {
        // Every accepted name must display as a name that parses back
        let reparsed: genoscore::Chromosome = chromosome.to_string().parse().unwrap();
        assert_eq!(chromosome, reparsed);
    }
    let _ = genoscore::Genotype::parse(input);
});
