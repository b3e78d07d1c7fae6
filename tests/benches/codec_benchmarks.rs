//! # XSwap Codec Benchmarks
//!
//! | Operation | Target |
//! |-----------|--------|
//! | Single-fill commitment | < 10µs |
//! | Merkle commitment, 1024 secrets | < 5ms |
//! | Serialize + text, single fill | < 50µs |
//! | Text + deserialize, 64 secrets | < 1ms |

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;
use xswap_orders::{
    create_order, from_text, generate_random_secret, to_text, Address, CreateOrderParams,
    HashLock, OrderDefaults, SecretMaterial, SerializeOverrides, U256,
};

fn params(secrets: SecretMaterial) -> CreateOrderParams {
    CreateOrderParams {
        escrow_factory: Address::new([0xEF; 20]),
        maker: Address::new([0x10; 20]),
        making_amount: U256::from(1000u64),
        taking_amount: U256::from(2000u64),
        maker_asset: Address::new([0x20; 20]),
        taker_asset: Address::new([0x30; 20]),
        secrets,
        src_chain_id: 1,
        dst_chain_id: 1001,
        src_timestamp: 1_700_000_000,
        resolver: Address::new([0x99; 20]),
    }
}

// ============================================================================
// Commitments
// ============================================================================

fn bench_commitments(c: &mut Criterion) {
    let mut group = c.benchmark_group("hash-lock");
    group.measurement_time(Duration::from_secs(5));

    group.bench_function("single_fill", |b| {
        b.iter(|| black_box(HashLock::for_single_fill("topsecret").is_ok()))
    });

    for size in [4usize, 64, 1024] {
        let secrets: Vec<String> = (0..size).map(|_| generate_random_secret()).collect();
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::new("multiple_fills", size), &secrets, |b, s| {
            b.iter(|| {
                let leaves = HashLock::get_merkle_leaves(s).map(|l| l.len());
                black_box(leaves.is_ok())
            })
        });
    }

    group.finish();
}

// ============================================================================
// Codec
// ============================================================================

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let mut rng = ChaCha8Rng::seed_from_u64(1);

    for size in [1usize, 64] {
        let material = if size == 1 {
            SecretMaterial::single("topsecret")
        } else {
            SecretMaterial::multiple((0..size).map(|i| format!("secret-{i}")))
        };
        let created = match create_order(params(material), &OrderDefaults::default(), &mut rng) {
            Ok(created) => created,
            Err(_) => continue,
        };
        let overrides = SerializeOverrides::default();
        let text = match to_text(&created.order, Some(&created.secrets), &overrides) {
            Ok(text) => text,
            Err(_) => continue,
        };

        group.bench_with_input(BenchmarkId::new("to_text", size), &created, |b, c| {
            b.iter(|| black_box(to_text(&c.order, Some(&c.secrets), &overrides).is_ok()))
        });
        group.bench_with_input(BenchmarkId::new("from_text", size), &text, |b, t| {
            b.iter(|| black_box(from_text(t).is_ok()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_commitments, bench_codec);
criterion_main!(benches);
