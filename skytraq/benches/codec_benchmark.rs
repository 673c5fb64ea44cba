use criterion::{criterion_group, criterion_main, Criterion};
use skytraq::*;

fn parse_all(data: &[u8]) -> usize {
    let mut parser = AckParser::new();
    let mut count = 0;
    for byte in data {
        if let Some(frame) = parser.consume(*byte) {
            assert!(frame.is_ack(), "No NACK allowed! got: {:?}", frame);
            count += 1;
        }
    }
    count
}

pub fn criterion_benchmark(c: &mut Criterion) {
    let restart = SystemRestart::new(RestartMode::Cold)
        .with_position(2503, 12154, 100)
        .request()
        .unwrap();
    c.bench_function("encode_system_restart", |b| {
        let mut codec = PacketCodec::default();
        b.iter(|| codec.encode(std::hint::black_box(restart.payload())).unwrap().len())
    });

    c.bench_function("validate_and_serialize_dop_mask", |b| {
        let mask = DopMask::default();
        b.iter(|| std::hint::black_box(&mask).request().unwrap())
    });

    for noise in &[0usize, 64, 1024] {
        // NMEA-like chatter in front of every acknowledgment
        let mut data = Vec::new();
        for _ in 0..100 {
            data.extend(std::iter::repeat(b'$').take(*noise));
            data.extend_from_slice(&[0xa0, 0xa1, 0x00, 0x02, ACK_ID, 0x0e, 0x8d, 0x0d, 0x0a]);
        }
        c.bench_function(&format!("ack_parse_noise_{}", noise), |b| {
            b.iter(|| assert_eq!(parse_all(std::hint::black_box(&data)), 100))
        });
    }
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
