use fprint_core::{PrintRecord, Variant};
use proptest::prelude::*;

fn sample_bytes() -> Vec<u8> {
    let mut print = PrintRecord::template_set("synaptics", "0001");
    print
        .add_template(fprint_core::MinutiaTemplate::from_columns(&[1, 2, 3], &[4, 5, 6], &[7, 8, 9]).unwrap())
        .unwrap();
    print.set_username(Some("user".to_string()));
    print.to_bytes().unwrap()
}

proptest! {
    #[test]
    fn fuzz_decode_no_panics(bytes in prop::collection::vec(any::<u8>(), 0..1024)) {
        let _ = PrintRecord::from_bytes(&bytes);
    }

    #[test]
    fn fuzz_decode_tagged_garbage(body in prop::collection::vec(any::<u8>(), 0..512)) {
        let mut data = b"FP3".to_vec();
        data.extend_from_slice(&body);
        let _ = PrintRecord::from_bytes(&data);
    }

    #[test]
    fn fuzz_decode_corrupted_record(index in any::<prop::sample::Index>(), value in any::<u8>()) {
        let mut data = sample_bytes();
        let at = index.index(data.len());
        data[at] = value;
        if let Ok(print) = PrintRecord::from_bytes(&data) {
            // Anything accepted must serialize again.
            prop_assert!(print.to_bytes().is_ok());
        }
    }

    #[test]
    fn fuzz_raw_payload_no_panics(bytes in prop::collection::vec(any::<u8>(), 0..256)) {
        let print = PrintRecord::raw("goodix", "27c6", Variant::byte_array(&bytes)).unwrap();
        let decoded = PrintRecord::from_bytes(&print.to_bytes().unwrap()).unwrap();
        prop_assert!(decoded.equal(&print).unwrap());
    }
}
