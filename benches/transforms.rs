use criterion::{black_box, criterion_group, criterion_main, Criterion, Throughput};

use phase_knock::transform::Transform;
use phase_knock::Vocabulary;

const ALL: [Transform; 13] = [
    Transform::Checksum,
    Transform::ShiftCipher(13),
    Transform::MixHash,
    Transform::OctalLength,
    Transform::BinaryLength,
    Transform::Base64Encode,
    Transform::Reverse,
    Transform::CountConsonants,
    Transform::CountVowels,
    Transform::CountUniqueLetters,
    Transform::XorBytes,
    Transform::SumHex,
    Transform::Identity,
];

fn bench_transforms(c: &mut Criterion) {
    let input = "AGENTSMITH".repeat(100);

    let mut group = c.benchmark_group("transform");
    group.throughput(Throughput::Bytes(input.len() as u64));

    for transform in ALL {
        group.bench_function(transform.name(), |b| {
            b.iter(|| black_box(transform.apply(black_box(&input))))
        });
    }

    group.finish();
}

fn bench_classify(c: &mut Criterion) {
    let vocab = Vocabulary::matrix_shift();
    // Worst case: the claim marker is declared last.
    let msg = "Stabilized. Next phase...\nGhost Twin solidified. Say 'UNLOCK' to claim the flag.\n";

    c.bench_function("classify_last_marker", |b| {
        b.iter(|| black_box(vocab.classify(black_box(msg))))
    });
}

criterion_group!(benches, bench_transforms, bench_classify);
criterion_main!(benches);
