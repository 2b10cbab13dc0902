use crate::error::PrintError;
use crate::print::PrintRecord;
use crate::tests::{device, tagged_template, template_print};
use crate::types::Finger;
use crate::variant::Variant;
use chrono::NaiveDate;

#[test]
fn test_reflexive_and_symmetric() {
    let a = template_print(&[1, 2]);
    let b = template_print(&[1, 2]);
    assert!(a.equal(&a).unwrap());
    assert!(a.equal(&b).unwrap());
    assert!(b.equal(&a).unwrap());

    let raw = PrintRecord::raw("goodix", "x", Variant::byte_array(&[1, 2])).unwrap();
    assert!(raw.equal(&raw.clone()).unwrap());
}

#[test]
fn test_metadata_is_ignored() {
    let a = template_print(&[1]);
    let mut b = template_print(&[1]);
    b.set_finger(Finger::LeftRing);
    b.set_username(Some("carol".to_string()));
    b.set_description(Some("desc".to_string()));
    b.set_enroll_date(NaiveDate::from_ymd_opt(2020, 5, 1));
    b.set_device_stored(true);
    assert!(a.equal(&b).unwrap());
}

#[test]
fn test_identity_and_kind_matter() {
    let a = template_print(&[1]);

    let mut other_driver = PrintRecord::template_set("elan", "0001");
    other_driver.add_template(tagged_template(1)).unwrap();
    assert!(!a.equal(&other_driver).unwrap());

    let mut other_device = PrintRecord::template_set("synaptics", "0002");
    other_device.add_template(tagged_template(1)).unwrap();
    assert!(!a.equal(&other_device).unwrap());

    let raw = PrintRecord::raw("synaptics", "0001", Variant::byte_array(&[1])).unwrap();
    assert!(!a.equal(&raw).unwrap());
    assert!(!raw.equal(&a).unwrap());
}

#[test]
fn test_template_order_matters() {
    let a = template_print(&[1, 2]);
    assert!(!a.equal(&template_print(&[2, 1])).unwrap());
    assert!(!a.equal(&template_print(&[1])).unwrap());
    assert!(!a.equal(&template_print(&[1, 2, 2])).unwrap());
}

#[test]
fn test_raw_payloads_compared_deeply() {
    let a = PrintRecord::raw("goodix", "x", Variant::byte_array(&[1, 2, 3])).unwrap();
    let b = PrintRecord::raw("goodix", "x", Variant::byte_array(&[1, 2, 3])).unwrap();
    let c = PrintRecord::raw("goodix", "x", Variant::byte_array(&[1, 2, 4])).unwrap();
    // Same bytes, different type.
    let d = PrintRecord::raw("goodix", "x", Variant::Tuple(vec![Variant::Byte(1), Variant::Byte(2), Variant::Byte(3)])).unwrap();
    assert!(a.equal(&b).unwrap());
    assert!(!a.equal(&c).unwrap());
    assert!(!a.equal(&d).unwrap());
}

#[test]
fn test_undefined_cannot_be_compared() {
    let undefined = PrintRecord::new(&device());
    let defined = template_print(&[1]);
    assert!(matches!(undefined.equal(&defined), Err(PrintError::InvalidState(_))));
    assert!(matches!(defined.equal(&undefined), Err(PrintError::InvalidState(_))));
}

#[test]
fn test_unstorable_raw_data_rejected() {
    let nul = PrintRecord::raw("goodix", "x", Variant::from("a\0b"));
    assert!(matches!(nul, Err(PrintError::InvalidData(_))));

    let mixed = Variant::Array(crate::variant::VariantType::Int32, vec![Variant::Int32(1), Variant::from("x")]);
    assert!(matches!(PrintRecord::raw("goodix", "x", mixed), Err(PrintError::InvalidData(_))));

    let bad_key = Variant::dict_entry(Variant::Tuple(Vec::new()), Variant::Int32(1));
    assert!(matches!(PrintRecord::raw("goodix", "x", bad_key), Err(PrintError::InvalidData(_))));
}

#[test]
fn test_unserializable_variants_still_reflexive() {
    let nul = Variant::from("a\0b");
    assert_eq!(nul, nul.clone());
    assert_ne!(nul, Variant::from("a\0c"));
    assert_ne!(nul, Variant::from("ab"));

    let mixed = Variant::Array(crate::variant::VariantType::Int32, vec![Variant::Int32(1), Variant::from("x")]);
    assert_eq!(mixed, mixed.clone());
    let other = Variant::Array(crate::variant::VariantType::Int32, vec![Variant::Int32(2), Variant::from("x")]);
    assert_ne!(mixed, other);
}

#[test]
fn test_every_raw_print_equals_itself() {
    for data in [
        Variant::from("blob"),
        Variant::boxed(Variant::Double(f64::NAN)),
        Variant::just(Variant::byte_array(&[9])),
    ] {
        let print = PrintRecord::raw("goodix", "x", data).unwrap();
        assert!(print.equal(&print).unwrap());
        assert!(print.to_bytes().is_ok());
    }
}
