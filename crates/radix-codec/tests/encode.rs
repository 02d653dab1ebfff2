//! Tests for encoding through the format dispatcher.

use radix_codec::{encode, to_base16, to_base32, to_base58, to_base64, to_base85, Format};

#[test]
fn empty_input() {
    for format in Format::ALL {
        assert_eq!(encode(format, b"").unwrap(), "", "{format}");
    }
}

#[test]
fn base16() {
    assert_eq!(encode(Format::Base16, &[0xAB, 0xCD]).unwrap(), "ABCD");
    assert_eq!(to_base16(b"Hello"), "48656C6C6F");
    assert_eq!(to_base16(&[0x00, 0x0F, 0xF0]), "000FF0");
}

#[test]
fn base32() {
    assert_eq!(encode(Format::Base32, b"Hello").unwrap(), "JBSWY3DP");
    assert_eq!(to_base32(b"Hello!"), "JBSWY3DPEE======");
}

#[test]
fn base58() {
    assert_eq!(encode(Format::Base58, &[0x00]).unwrap(), "1");
    let one = to_base58(&[0x01]).unwrap();
    assert_eq!(
        encode(Format::Base58, &[0x00, 0x00, 0x01]).unwrap(),
        format!("11{one}")
    );
}

#[test]
fn base62() {
    assert_eq!(encode(Format::Base62, b"Hello").unwrap(), "5TP3P3v");
}

#[test]
fn base64() {
    assert_eq!(encode(Format::Base64, b"Man").unwrap(), "TWFu");
    assert_eq!(to_base64(b"Ma"), "TWE=");
    assert_eq!(to_base64(b"M"), "TQ==");
}

#[test]
fn base85() {
    assert_eq!(encode(Format::Base85, &[0, 0, 0, 0]).unwrap(), "!!!!!");
    assert_eq!(to_base85(b"Man sure"), "9jqo^F*2M7");
}

#[test]
fn output_lengths() {
    let payload = [0x5Au8; 10];
    assert_eq!(encode(Format::Base16, &payload).unwrap().len(), 20);
    // ceil(80 / 5) = 16 symbols, already a multiple of 8
    assert_eq!(encode(Format::Base32, &payload).unwrap().len(), 16);
    assert_eq!(encode(Format::Base64, &payload).unwrap().len(), 16);
    assert_eq!(encode(Format::Base85, &payload).unwrap().len(), 15);
}

#[test]
fn output_stays_in_alphabet() {
    let payload: Vec<u8> = (0..=255).collect();
    for format in Format::ALL {
        let descriptor = format.descriptor();
        let text = encode(format, &payload).unwrap();
        assert!(
            text.bytes()
                .all(|b| descriptor.alphabet.contains(b) || descriptor.pad == Some(b)),
            "{format}: {text}"
        );
    }
}
