use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use pdqsort::pdqsort_by;
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

unsafe fn compare_i32(a: *const u8, b: *const u8) -> i32 {
    let a = *(a as *const i32);
    let b = *(b as *const i32);
    a.cmp(&b) as i32
}

fn sort_i32(v: &mut [i32]) {
    unsafe {
        pdqsort_by(v.as_mut_ptr() as *mut u8, v.len(), 4, compare_i32);
    }
}

fn random_input(n: usize, rng: &mut StdRng) -> Vec<i32> {
    let mut v: Vec<i32> = (0..n as i32).collect();
    v.shuffle(rng);
    v
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    let mut rng = StdRng::seed_from_u64(0);
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let input = random_input(n, &mut rng);
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(|| input.clone(), |mut v| sort_i32(&mut v), BatchSize::LargeInput);
        });
    }
}

fn bench_sorted(c: &mut Criterion) {
    let mut group = c.benchmark_group("already_sorted");
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let input: Vec<i32> = (0..n as i32).collect();
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(|| input.clone(), |mut v| sort_i32(&mut v), BatchSize::LargeInput);
        });
    }
}

fn bench_reverse(c: &mut Criterion) {
    let mut group = c.benchmark_group("reverse_sorted");
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let input: Vec<i32> = (0..n as i32).rev().collect();
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(|| input.clone(), |mut v| sort_i32(&mut v), BatchSize::LargeInput);
        });
    }
}

fn bench_all_equal(c: &mut Criterion) {
    let mut group = c.benchmark_group("all_equal");
    for &n in &[1_000usize, 100_000] {
        group.throughput(Throughput::Elements(n as u64));
        let input = vec![7i32; n];
        group.bench_function(format!("n={n}"), |b| {
            b.iter_batched(|| input.clone(), |mut v| sort_i32(&mut v), BatchSize::LargeInput);
        });
    }
}

criterion_group!(
    name = sorting;
    config = Criterion::default();
    targets = bench_random, bench_sorted, bench_reverse, bench_all_equal
);
criterion_main!(sorting);
