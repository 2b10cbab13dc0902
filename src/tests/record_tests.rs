use crate::device::{Device, DeviceInfo};
use crate::error::PrintError;
use crate::image::Image;
use crate::minutiae::NistTransform;
use crate::print::{PrintData, PrintRecord};
use crate::tests::{device, tagged_template, template_print};
use crate::types::{Minutia, PrintKind};
use crate::variant::Variant;
use std::sync::Arc;

fn image_with_minutiae(minutiae: Vec<Minutia>) -> Arc<Image> {
    Arc::new(Image::new(4, 4, vec![0; 16]).with_minutiae(minutiae))
}

#[test]
fn test_new_print_is_undefined() {
    let print = PrintRecord::new(&device());
    assert_eq!(print.kind(), PrintKind::Undefined);
    assert!(matches!(print.data(), PrintData::Undefined));
    assert_eq!(print.driver(), "synaptics");
    assert_eq!(print.device_id(), "0001");
    assert!(!print.device_stored());
    assert!(print.templates().is_none());
    assert!(print.raw_data().is_none());
}

#[test]
fn test_init_sets_kind() {
    let mut raw = PrintRecord::new(&device());
    raw.init_raw(Variant::from("blob")).unwrap();
    assert_eq!(raw.kind(), PrintKind::Raw);
    assert_eq!(raw.raw_data(), Some(&Variant::from("blob")));

    let mut set = PrintRecord::new(&device());
    set.init_template_set();
    assert_eq!(set.kind(), PrintKind::TemplateSet);
    assert_eq!(set.templates().map(|t| t.len()), Some(0));
}

#[test]
#[should_panic(expected = "print kind can only be set once")]
fn test_init_twice_panics() {
    let mut print = PrintRecord::new(&device());
    print.init_template_set();
    print.init_raw(Variant::from("blob")).unwrap();
}

#[test]
fn test_init_raw_rejects_unstorable_data() {
    let mut print = PrintRecord::new(&device());
    let result = print.init_raw(Variant::from("a\0b"));
    assert!(matches!(result, Err(PrintError::InvalidData(_))));
    assert_eq!(print.kind(), PrintKind::Undefined);

    print.init_raw(Variant::from("ab")).unwrap();
    assert_eq!(print.kind(), PrintKind::Raw);
}

#[test]
#[should_panic]
fn test_empty_driver_panics() {
    let _ = PrintRecord::template_set("", "0001");
}

#[test]
fn test_add_template_requires_template_set() {
    let mut raw = PrintRecord::raw("synaptics", "0001", Variant::from("blob")).unwrap();
    assert!(matches!(raw.add_template(tagged_template(1)), Err(PrintError::InvalidState(_))));

    let mut undefined = PrintRecord::new(&device());
    assert!(matches!(undefined.add_template(tagged_template(1)), Err(PrintError::InvalidState(_))));
}

#[test]
fn test_add_print_accumulates_stages() {
    let mut enrolled = PrintRecord::new(&device());
    enrolled.init_template_set();
    for tag in [3, 1, 2] {
        enrolled.add_print(&template_print(&[tag])).unwrap();
    }
    let tags: Vec<i32> = enrolled.templates().unwrap().iter().map(|t| t.x()[0]).collect();
    assert_eq!(tags, vec![3, 1, 2]);

    assert!(matches!(enrolled.add_print(&template_print(&[4, 5])), Err(PrintError::General(_))));
    let raw = PrintRecord::raw("synaptics", "0001", Variant::from("blob")).unwrap();
    assert!(matches!(enrolled.add_print(&raw), Err(PrintError::InvalidState(_))));
    assert_eq!(enrolled.templates().unwrap().len(), 3);
}

#[test]
fn test_add_from_image() {
    let mut print = PrintRecord::template_set("synaptics", "0001");
    let image = image_with_minutiae(vec![Minutia::new(1, 1, 0, 0.9), Minutia::new(0, 3, 8, 0.4)]);
    print.add_from_image(image.clone()).unwrap();

    let templates = print.templates().unwrap();
    assert_eq!(templates.len(), 1);
    assert_eq!(templates[0].x(), &[0, 1]);
    assert_eq!(templates[0].y(), &[1, 3]);
    assert_eq!(templates[0].theta(), &[180, -90]);
    assert_eq!(print.image().map(|i| i.width()), Some(4));

    print.add_from_image_with(image, &NistTransform).unwrap();
    assert_eq!(print.templates().unwrap().len(), 2);
}

#[test]
fn test_add_from_image_rejects_missing_minutiae() {
    let mut print = PrintRecord::template_set("synaptics", "0001");
    let undetected = Arc::new(Image::new(4, 4, vec![0; 16]));
    assert!(matches!(print.add_from_image(undetected), Err(PrintError::InvalidData(_))));
    assert!(matches!(
        print.add_from_image(image_with_minutiae(Vec::new())),
        Err(PrintError::InvalidData(_))
    ));
    assert!(print.image().is_none());
    assert!(print.templates().unwrap().is_empty());

    let mut raw = PrintRecord::raw("synaptics", "0001", Variant::from("blob")).unwrap();
    let image = image_with_minutiae(vec![Minutia::new(1, 1, 0, 0.9)]);
    assert!(matches!(raw.add_from_image(image), Err(PrintError::InvalidData(_))));
}

#[test]
fn test_is_compatible() {
    let print = template_print(&[1]);
    assert!(print.is_compatible(&device()));
    assert!(!print.is_compatible(&DeviceInfo::new("synaptics", "0002")));
    assert!(!print.is_compatible(&DeviceInfo::new("elan", "0001")));

    let dyn_device: &dyn Device = &device();
    assert!(print.is_compatible(dyn_device));
}

#[test]
fn test_metadata_setters() {
    let mut print = template_print(&[1]);
    print.set_username(Some("dave".to_string()));
    assert_eq!(print.username(), Some("dave"));
    print.set_username(None);
    assert_eq!(print.username(), None);
    print.set_device_stored(true);
    assert!(print.device_stored());
}
