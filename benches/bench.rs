use avl_tree::AvlMap;
use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

macro_rules! map_insert_rand_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = SmallRng::seed_from_u64(42);
            let mut map = AvlMap::new();
            for _ in 0..n {
                let i = rng.random::<usize>() % n;
                map.insert(i, i);
            }

            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    let k = rng.random::<usize>() % n;
                    map.insert(black_box(k), k);
                });
            });
        }
    };
}

macro_rules! map_insert_seq_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut map = AvlMap::new();
            for i in 0..n {
                map.insert(i * 2, i * 2);
            }

            let mut i = 1;
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    map.insert(black_box(i), i);
                    i = (i + 2) % n;
                });
            });
        }
    };
}

macro_rules! map_find_rand_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = SmallRng::seed_from_u64(42);
            let mut map = AvlMap::new();
            let mut keys: Vec<usize> = (0..n).map(|_| rng.random::<usize>() % n).collect();
            for &k in &keys {
                map.insert(k, k);
            }
            rng.shuffle_fallback(&mut keys);

            let mut i = 0;
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    let t = map.get(&keys[i]);
                    i = (i + 1) % n;
                    black_box(t);
                });
            });
        }
    };
}

macro_rules! map_find_seq_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut map = AvlMap::new();
            for i in 0..n {
                map.insert(i, i);
            }

            let mut i = 0;
            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    let x = map.get(&i);
                    i = (i + 1) % n;
                    black_box(x);
                });
            });
        }
    };
}

macro_rules! map_iter_bench {
    ($name:ident, $n:expr) => {
        fn $name(c: &mut Criterion) {
            let n: usize = $n;
            let mut rng = SmallRng::seed_from_u64(42);
            let mut map: AvlMap<u32, u32> = AvlMap::new();
            for _ in 0..n {
                map.insert(rng.random(), rng.random());
            }

            c.bench_function(stringify!($name), |b| {
                b.iter(|| {
                    for entry in map.iter() {
                        black_box(entry);
                    }
                });
            });
        }
    };
}

trait ShuffleFallback {
    fn shuffle_fallback(&mut self, v: &mut [usize]);
}

impl ShuffleFallback for SmallRng {
    fn shuffle_fallback(&mut self, v: &mut [usize]) {
        for i in (1..v.len()).rev() {
            let j = self.random::<usize>() % (i + 1);
            v.swap(i, j);
        }
    }
}

map_insert_rand_bench! {insert_rand_100,    100}
map_insert_rand_bench! {insert_rand_10_000, 10_000}

map_insert_seq_bench! {insert_seq_100,    100}
map_insert_seq_bench! {insert_seq_10_000, 10_000}

map_find_rand_bench! {find_rand_100,    100}
map_find_rand_bench! {find_rand_10_000, 10_000}

map_find_seq_bench! {find_seq_100,    100}
map_find_seq_bench! {find_seq_10_000, 10_000}

map_iter_bench! {iter_100,     100}
map_iter_bench! {iter_1000,    1000}
map_iter_bench! {iter_100_000, 100_000}

criterion_group!(
    benches,
    insert_rand_100,
    insert_rand_10_000,
    insert_seq_100,
    insert_seq_10_000,
    find_rand_100,
    find_rand_10_000,
    find_seq_100,
    find_seq_10_000,
    iter_100,
    iter_1000,
    iter_100_000,
);
criterion_main!(benches);
