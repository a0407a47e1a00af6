//! Hand-built audio files for tests.

fn syncsafe(n: usize) -> [u8; 4] {
    [
        ((n >> 21) & 0x7f) as u8,
        ((n >> 14) & 0x7f) as u8,
        ((n >> 7) & 0x7f) as u8,
        (n & 0x7f) as u8,
    ]
}

/// ID3v2.4 text frame, UTF-8 encoded.
fn text_frame(id: &[u8; 4], text: &str) -> Vec<u8> {
    let mut body = vec![0x03];
    body.extend_from_slice(text.as_bytes());

    let mut frame = id.to_vec();
    frame.extend_from_slice(&syncsafe(body.len()));
    frame.extend_from_slice(&[0, 0]);
    frame.extend(body);
    frame
}

/// An ID3v2.4 tag carrying `artist` (TPE1) and `album` (TALB), followed by
/// `frames` silent MPEG-1 Layer III frames (128 kbps, 44.1 kHz).
pub fn tagged_mp3(artist: &str, album: &str, frames: usize) -> Vec<u8> {
    let mut body = text_frame(b"TPE1", artist);
    body.extend(text_frame(b"TALB", album));

    let mut out = b"ID3".to_vec();
    out.extend_from_slice(&[4, 0, 0]);
    out.extend_from_slice(&syncsafe(body.len()));
    out.extend(body);

    for _ in 0..frames {
        let mut frame = vec![0u8; 417];
        frame[..4].copy_from_slice(&[0xff, 0xfb, 0x90, 0x00]);
        out.extend(frame);
    }
    out
}
