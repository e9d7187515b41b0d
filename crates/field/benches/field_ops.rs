use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use zkp_field::{Blake2sHasher, FieldHasher, Fr, PoseidonHasher, PoseidonParams};

fn bench_field_hashers(c: &mut Criterion) {
    let poseidon = PoseidonHasher::<Fr>::new(PoseidonParams::default()).unwrap();
    let blake2s = Blake2sHasher::<Fr>::new();

    let mut group = c.benchmark_group("field_hash");

    for size in [1usize, 4, 16].iter() {
        let inputs: Vec<Fr> = (0..*size as u64).map(Fr::from).collect();

        group.bench_with_input(BenchmarkId::new("poseidon", size), size, |b, _| {
            b.iter(|| poseidon.hash(&inputs).unwrap());
        });

        group.bench_with_input(BenchmarkId::new("blake2s", size), size, |b, _| {
            b.iter(|| blake2s.hash(&inputs).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, bench_field_hashers);
criterion_main!(benches);
