use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use dbytes::codec::{self, Endian};

// Element counts on both sides of the bulk copy threshold
const COUNTS: &[usize] = &[4, 16, 256, 4096, 65536];

fn bench_scalar(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar");
    let mut buf = [0u8; 16];

    for order in [Endian::Big, Endian::Little] {
        group.bench_function(BenchmarkId::new("pack_into_u64", format!("{:?}", order)), |b| {
            b.iter(|| codec::pack_into(black_box(0x0102_0304_0506_0708u64), order, &mut buf, 8))
        });
        group.bench_function(BenchmarkId::new("unpack_i32", format!("{:?}", order)), |b| {
            b.iter(|| codec::unpack::<i32>(black_box(&buf), order, black_box(4)))
        });
    }

    group.finish();
}

fn bench_bulk(c: &mut Criterion) {
    let mut group = c.benchmark_group("bulk_u32");

    for &count in COUNTS {
        let values: Vec<u32> = (0..count as u32).collect();
        let mut buffer = vec![0u8; count * 4];

        group.throughput(Throughput::Bytes((count * 4) as u64));
        for order in [Endian::Big, Endian::Little] {
            let id = BenchmarkId::new(format!("pack_array/{:?}", order), count);
            group.bench_with_input(id, &values, |b, values| {
                b.iter(|| codec::pack_array(black_box(values), 0, &mut buffer, 0, count, order))
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scalar, bench_bulk);
criterion_main!(benches);
