use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use moealg::{
    mutation::{
        mutate_population, par_mutate_population, BitFlipMutation, PolynomialMutation,
        UniformMutation,
    },
    rng::RandomNumberGenerator,
    solution::{BinarySolution, Bounds, FloatSolution},
};

fn float_population(size: usize, variables: usize) -> Vec<FloatSolution> {
    let bounds = Bounds::uniform(variables, -10.0, 10.0).unwrap();
    (0..size)
        .map(|_| FloatSolution::new(vec![0.0; variables], bounds.clone(), 2).unwrap())
        .collect()
}

fn bench_polynomial(c: &mut Criterion) {
    let operator = PolynomialMutation::with_distribution_index(1.0 / 30.0, 20.0).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);

    let mut group = c.benchmark_group("polynomial_mutation");
    for size in [10, 100, 1000, 10000].iter() {
        let mut population = float_population(*size, 30);
        group.bench_with_input(BenchmarkId::new("sequential", size), size, |b, _| {
            b.iter(|| mutate_population(&operator, black_box(&mut population), &mut rng))
        });
        group.bench_with_input(BenchmarkId::new("parallel", size), size, |b, _| {
            b.iter(|| par_mutate_population(&operator, black_box(&mut population), &mut rng))
        });
    }
    group.finish();
}

fn bench_uniform(c: &mut Criterion) {
    let operator = UniformMutation::new(1.0 / 30.0).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);
    let mut population = float_population(1000, 30);

    c.bench_function("uniform_mutation_1000", |b| {
        b.iter(|| mutate_population(&operator, black_box(&mut population), &mut rng))
    });
}

fn bench_bit_flip(c: &mut Criterion) {
    let operator = BitFlipMutation::new(1.0 / 256.0).unwrap();
    let mut rng = RandomNumberGenerator::from_seed(42);
    let mut population: Vec<BinarySolution> = (0..1000)
        .map(|_| BinarySolution::new(vec![vec![false; 256]], 2))
        .collect();

    c.bench_function("bit_flip_mutation_1000", |b| {
        b.iter(|| mutate_population(&operator, black_box(&mut population), &mut rng))
    });
}

criterion_group!(benches, bench_polynomial, bench_uniform, bench_bit_flip);
criterion_main!(benches);
