#![no_main]

use bytes::BytesMut;
use libfuzzer_sys::fuzz_target;
use tokio_util::codec::Decoder;

use phase_knock::frame::codec::ReplyCodec;

fuzz_target!(|data: &[u8]| {
    let mut codec = ReplyCodec::with_max_line_length(256);
    let mut buf = BytesMut::from(data);

    loop {
        match codec.decode(&mut buf) {
            Ok(Some(line)) => assert!(!line.contains('\n')),
            Ok(None) => break,
            Err(_) => break,
        }
    }
    let _ = codec.decode_eof(&mut buf);
});
