use criterion::{BatchSize, BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use engine::Sheet;

/// One column where every row refers to the row after it; the last row is a
/// literal. Resolving row 1 walks the whole chain.
fn chain_records(n: usize) -> Vec<Vec<String>> {
    let mut records = vec![vec![String::new(), "A".to_string()]];
    for row in 1..=n {
        let cell = if row == n {
            "1".to_string()
        } else {
            format!("=A{}+1", row + 1)
        };
        records.push(vec![row.to_string(), cell]);
    }
    records
}

/// Column labels cannot contain digits, so use spreadsheet-style letters.
fn column_name(mut index: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (index % 26) as u8);
        if index < 26 {
            break;
        }
        index = index / 26 - 1;
    }
    name.reverse();
    String::from_utf8_lossy(&name).into_owned()
}

/// A square block where each cell adds its left and upper neighbours.
fn block_records(side: usize) -> Vec<Vec<String>> {
    let columns: Vec<String> = (0..side).map(column_name).collect();
    let mut header = vec![String::new()];
    header.extend(columns.iter().cloned());

    let mut records = vec![header];
    for row in 1..=side {
        let mut record = vec![row.to_string()];
        for (c, column) in columns.iter().enumerate() {
            let cell = match (row, c) {
                (1, 0) => "1".to_string(),
                (1, _) => format!("={}1+1", columns[c - 1]),
                (_, 0) => format!("={}{}+1", column, row - 1),
                _ => format!("={}{}+{}{}", columns[c - 1], row, column, row - 1),
            };
            record.push(cell);
        }
        records.push(record);
    }
    records
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("Resolve");

    for n in [1_000usize, 10_000, 100_000].iter() {
        // Depth of the explicit stack grows with n.
        let records = chain_records(*n);
        group.bench_with_input(BenchmarkId::new("Chain", n), n, |b, _| {
            b.iter_batched(
                || Sheet::from_records::<Vec<String>, String>(&records).unwrap(),
                |sheet| black_box(sheet.evaluate().unwrap()),
                BatchSize::LargeInput,
            )
        });
    }

    for side in [32usize, 128].iter() {
        let records = block_records(*side);
        group.bench_with_input(BenchmarkId::new("Block", side), side, |b, _| {
            b.iter_batched(
                || Sheet::from_records::<Vec<String>, String>(&records).unwrap(),
                |sheet| black_box(sheet.evaluate().unwrap()),
                BatchSize::LargeInput,
            )
        });
    }

    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let records = chain_records(10_000);
    c.bench_function("Build/Chain/10000", |b| {
        b.iter(|| Sheet::from_records::<Vec<String>, String>(black_box(&records)).unwrap())
    });
}

criterion_group!(benches, bench_resolve, bench_build);
criterion_main!(benches);
