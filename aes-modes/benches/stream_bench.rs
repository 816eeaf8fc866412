use std::num::NonZeroUsize;

use aes_modes::{ChainingMode, CipherConfig, Key128, StreamingEncryptor, DEFAULT_KEY_HEX};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

fn bench_stream_modes(c: &mut Criterion) {
    let key = Key128::from_hex(DEFAULT_KEY_HEX).unwrap();
    let iv = [0x24u8; 16];
    let plaintext = vec![0x5au8; 1024 * 1024];

    let mut group = c.benchmark_group("encrypt_stream");
    group.throughput(Throughput::Bytes(plaintext.len() as u64));

    for mode in ChainingMode::ALL {
        let config = CipherConfig::build(mode, key.as_bytes(), Some(&iv)).unwrap();
        for chunk_size in [128usize, 4096, 64 * 1024] {
            let encryptor = StreamingEncryptor::with_chunk_size(NonZeroUsize::new(chunk_size).unwrap());
            group.bench_with_input(
                BenchmarkId::new(mode.name(), chunk_size),
                &plaintext,
                |b, data| {
                    b.iter(|| {
                        let mut out = Vec::with_capacity(data.len() + 16);
                        encryptor
                            .encrypt_stream(&config, black_box(data.as_slice()), &mut out)
                            .unwrap();
                        out
                    })
                },
            );
        }
    }

    group.finish();
}

criterion_group!(benches, bench_stream_modes);
criterion_main!(benches);
