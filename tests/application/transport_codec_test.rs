use augmenta::application::services::transport_codec::{
    MISSING_AUDIO_MESSAGE, decode, decode_payload, encode,
};
use augmenta::application::services::{PipelineError, TransportError};
use augmenta::domain::{LogicalFormat, Modality, Payload};

use crate::helpers::fixtures::base64;

#[test]
fn given_plain_base64_when_decoding_then_returns_bytes() {
    assert_eq!(decode(&base64(b"hello")).unwrap(), b"hello");
}

#[test]
fn given_data_uri_when_decoding_then_header_is_ignored() {
    let uri = format!("data:image/png;base64,{}", base64(&[0x89, 0x50, 0x4e, 0x47]));

    assert_eq!(decode(&uri).unwrap(), vec![0x89, 0x50, 0x4e, 0x47]);
}

#[test]
fn given_invalid_characters_when_decoding_then_invalid_base64() {
    assert!(matches!(
        decode("@@@@"),
        Err(TransportError::InvalidBase64(_))
    ));
}

#[test]
fn given_empty_body_when_decoding_then_empty_error() {
    assert_eq!(decode(""), Err(TransportError::Empty));
    assert_eq!(decode("data:audio/wav;base64,"), Err(TransportError::Empty));
}

#[test]
fn given_bytes_when_encoding_then_output_is_padded_standard_base64() {
    let encoded = encode(b"ab", LogicalFormat::Png);

    assert_eq!(encoded, "YWI=");
    assert_eq!(decode(&encoded).unwrap(), b"ab");
}

#[test]
fn given_absent_text_when_building_payload_then_text_is_empty() {
    let payload = decode_payload(Modality::Text, None).unwrap();

    assert_eq!(payload, Payload::Text(String::new()));
}

#[test]
fn given_text_that_looks_like_base64_when_building_payload_then_it_is_kept_verbatim() {
    let payload = decode_payload(Modality::Text, Some("aGVsbG8=")).unwrap();

    assert_eq!(payload, Payload::Text("aGVsbG8=".to_string()));
}

#[test]
fn given_missing_audio_when_building_payload_then_missing_input_message() {
    for raw in [None, Some("")] {
        match decode_payload(Modality::Audio, raw) {
            Err(PipelineError::MissingInput(message)) => {
                assert_eq!(message, MISSING_AUDIO_MESSAGE)
            }
            other => panic!("expected missing input, got {:?}", other),
        }
    }
}

#[test]
fn given_missing_image_when_building_payload_then_decode_error() {
    let result = decode_payload(Modality::Image, None);

    assert!(matches!(
        result,
        Err(PipelineError::Decode(TransportError::Empty))
    ));
}

#[test]
fn given_encoded_image_when_building_payload_then_bytes_are_decoded() {
    let payload = decode_payload(Modality::Image, Some(&base64(b"pixels"))).unwrap();

    assert_eq!(payload, Payload::Image(b"pixels".to_vec()));
    assert_eq!(payload.modality(), Modality::Image);
}
