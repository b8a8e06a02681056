use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use tokio::io::AsyncWriteExt;

use phase_knock::MessageReader;

fn bench_reassembly(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();

    let mut group = c.benchmark_group("message_reader");

    // Full chunks followed by a short tail.
    for size in [100usize, 1024 * 4 + 500, 1024 * 32 + 7] {
        let message = vec![b'x'; size];
        group.throughput(Throughput::Bytes(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &message, |b, message| {
            b.iter(|| {
                rt.block_on(async {
                    let (mut server, client) = tokio::io::duplex(64 * 1024);
                    server.write_all(message).await.unwrap();
                    let mut reader = MessageReader::new(client);
                    let msg = reader.next_message().await.unwrap();
                    assert_eq!(msg.len(), message.len());
                })
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_reassembly);
criterion_main!(benches);
