use rhuff::{Codec, CodecConfig, Framing, FrequencyTable, HuffmanTree};
use rstest::*;

const LOREM: &[u8] = b"Lorem ipsum dolor sit amet, consectetur adipiscing elit, sed do \
eiusmod tempor incididunt ut labore et dolore magna aliqua.";

#[fixture]
fn codec() -> Codec {
    Codec::train(&mut &LOREM[..], CodecConfig::default()).unwrap()
}

#[rstest]
#[case::empty(b"")]
#[case::single_byte(b"x")]
#[case::training_text(LOREM)]
#[case::unseen_bytes(b"\x00\x01\x02\xfd\xfe\xff")]
#[case::repeated(&[b'e'; 4096])]
fn counted_framing_round_trips(codec: Codec, #[case] payload: &[u8]) {
    let encoded = codec.encode_to_vec(payload).unwrap();
    assert_eq!(codec.decode_to_vec(&encoded).unwrap(), payload);
}

#[rstest]
#[case(b"")]
#[case(b"aaab")]
#[case(LOREM)]
fn empty_payload_decodes_to_nothing(#[case] training: &[u8]) {
    let codec = Codec::train(&mut &training[..], CodecConfig::default()).unwrap();

    let encoded = codec.encode_to_vec(b"").unwrap();
    // the flush byte and the symbol count
    assert_eq!(encoded.len(), 1 + 8);
    assert_eq!(encoded[0], 0x00);
    assert!(codec.decode_to_vec(&encoded).unwrap().is_empty());
}

#[rstest]
fn training_text_compresses(codec: Codec) {
    let encoded = codec.encode_to_vec(LOREM).unwrap();
    assert!(encoded.len() < LOREM.len());
}

#[rstest]
fn raw_stream_is_a_prefix_of_counted_stream(codec: Codec) {
    let raw = Codec::train(&mut &LOREM[..], CodecConfig::raw()).unwrap();
    assert_eq!(raw.config().framing, Framing::Raw);

    let raw_bytes = raw.encode_to_vec(b"dolor sit").unwrap();
    let counted_bytes = codec.encode_to_vec(b"dolor sit").unwrap();
    assert!(counted_bytes.starts_with(&raw_bytes));
    assert_eq!(counted_bytes[raw_bytes.len()..], 9u64.to_le_bytes());
}

#[rstest]
fn raw_decode_recovers_payload_before_padding() {
    let raw = Codec::train(&mut &LOREM[..], CodecConfig::raw()).unwrap();
    let payload = b"tempor incididunt";

    let decoded = raw.decode_to_vec(&raw.encode_to_vec(payload).unwrap()).unwrap();
    // padding may add symbols at the end, never lose or change earlier ones
    assert!(decoded.starts_with(payload));
}

#[rstest]
fn different_training_gives_different_code(codec: Codec) {
    // more z than everything else together
    let training = [b'z'; 1000];
    let other = Codec::train(&mut &training[..], CodecConfig::default()).unwrap();

    assert_ne!(codec.codes().get(b'z'), other.codes().get(b'z'));
    assert_eq!(other.codes().get(b'z').unwrap().len(), 1);
}

#[test]
fn tree_is_rebuilt_identically() {
    let a = HuffmanTree::from_table(&FrequencyTable::from_bytes(LOREM)).unwrap();
    let b = HuffmanTree::from_table(&FrequencyTable::from_bytes(LOREM)).unwrap();
    assert_eq!(a, b);
}
